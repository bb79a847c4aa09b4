//! The writer interface the serializer drives.

use crate::node::{Mark, Node};

/// Paragraph-level styles a handler can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Heading(u8),
    Quote,
    Code,
}

/// Run-level styles produced by marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStyle {
    Italic,
    Bold,
    Code,
    Link,
    Underline,
    Strikethrough,
    Superscript,
    Subscript,
}

/// State of a Word document being written.
///
/// Handlers in a [`crate::NodeSerializer`] only talk to the document through
/// this trait. `render` is expected to look the node up in the serializer
/// table and call its handler.
pub trait DocxState {
    /// Append text to the current paragraph.
    fn text(&mut self, text: &str);

    /// Append text carrying marks. Writers that ignore formatting can rely on
    /// the default.
    fn styled_text(&mut self, text: &str, marks: &[Mark]) {
        let _ = marks;
        self.text(text);
    }

    /// Finish the current paragraph.
    fn close_block(&mut self, node: &Node);

    /// Render `node`, the `index`-th child of `parent`.
    fn render(&mut self, node: &Node, parent: &Node, index: usize);

    /// Insert a cross-reference to bookmark `id`, optionally preceded by
    /// `prefix` (e.g. `"Equation "`).
    fn create_reference(&mut self, id: &str, prefix: Option<&str>);

    /// Insert a footnote holding the content of `node`.
    fn footnote(&mut self, node: &Node);

    /// Apply `style` to paragraphs until the matching [`DocxState::pop_style`].
    fn push_style(&mut self, style: ParagraphStyle);

    fn pop_style(&mut self);

    /// Start a list; items are rendered between this and [`DocxState::close_list`].
    fn open_list(&mut self, ordered: bool);

    fn close_list(&mut self);

    fn image(&mut self, src: &str, caption: Option<&str>);

    fn math(&mut self, latex: &str, display: bool);

    fn line_break(&mut self);

    fn rule(&mut self);

    /// Render each child of `parent` in order.
    fn render_content(&mut self, parent: &Node) {
        for (index, child) in parent.content.iter().enumerate() {
            self.render(child, parent, index);
        }
    }

    /// Render the inline children of `parent` into the current paragraph.
    fn render_inline(&mut self, parent: &Node) {
        self.render_content(parent);
    }
}
