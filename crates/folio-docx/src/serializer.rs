//! Lookup tables from node and mark kinds to Word output.

use std::collections::HashMap;

use crate::node::{Mark, Node};
use crate::state::{DocxState, ParagraphStyle, RunStyle};

/// Emits one node through a [`DocxState`].
pub type NodeHandler = fn(&mut dyn DocxState, &Node);

/// Errors raised while serializing a document.
#[derive(Debug, thiserror::Error)]
pub enum DocxError {
    #[error("No serializer for node \"{0}\"")]
    UnsupportedNode(String),
}

/// Table of node handlers keyed by node kind.
#[derive(Clone, Default)]
pub struct NodeSerializer {
    handlers: HashMap<&'static str, NodeHandler>,
}

impl NodeSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind`, replacing any previous one.
    pub fn insert(&mut self, kind: &'static str, handler: NodeHandler) -> &mut Self {
        self.handlers.insert(kind, handler);
        self
    }

    pub fn get(&self, kind: &str) -> Option<NodeHandler> {
        self.handlers.get(kind).copied()
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run the handler registered for `node.kind`.
    pub fn serialize(&self, state: &mut dyn DocxState, node: &Node) -> Result<(), DocxError> {
        let handler = self
            .get(&node.kind)
            .ok_or_else(|| DocxError::UnsupportedNode(node.kind.clone()))?;
        handler(state, node);
        Ok(())
    }
}

impl std::fmt::Debug for NodeSerializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.handlers.keys().collect();
        kinds.sort();
        f.debug_struct("NodeSerializer").field("kinds", &kinds).finish()
    }
}

/// Table of run styles keyed by mark kind.
#[derive(Debug, Clone, Default)]
pub struct MarkSerializer {
    styles: HashMap<&'static str, RunStyle>,
}

impl MarkSerializer {
    pub fn insert(&mut self, kind: &'static str, style: RunStyle) -> &mut Self {
        self.styles.insert(kind, style);
        self
    }

    pub fn style(&self, mark: &Mark) -> Option<RunStyle> {
        self.styles.get(mark.kind.as_str()).copied()
    }

    /// Styles for all known marks, in mark order.
    pub fn styles(&self, marks: &[Mark]) -> Vec<RunStyle> {
        marks.iter().filter_map(|m| self.style(m)).collect()
    }
}

fn doc(state: &mut dyn DocxState, node: &Node) {
    state.render_content(node);
}

fn paragraph(state: &mut dyn DocxState, node: &Node) {
    state.render_inline(node);
    state.close_block(node);
}

fn heading(state: &mut dyn DocxState, node: &Node) {
    let level = node.attr_u64("level").unwrap_or(1).clamp(1, 6) as u8;
    state.push_style(ParagraphStyle::Heading(level));
    state.render_inline(node);
    state.close_block(node);
    state.pop_style();
}

/// Block quotes render their children in the quote style.
pub(crate) fn blockquote(state: &mut dyn DocxState, node: &Node) {
    state.push_style(ParagraphStyle::Quote);
    state.render_content(node);
    state.pop_style();
}

fn code_block(state: &mut dyn DocxState, node: &Node) {
    state.push_style(ParagraphStyle::Code);
    state.text(&node.text_content());
    state.close_block(node);
    state.pop_style();
}

fn horizontal_rule(state: &mut dyn DocxState, _node: &Node) {
    state.rule();
}

fn hard_break(state: &mut dyn DocxState, _node: &Node) {
    state.line_break();
}

fn text(state: &mut dyn DocxState, node: &Node) {
    if let Some(text) = &node.text {
        state.styled_text(text, &node.marks);
    }
}

fn bullet_list(state: &mut dyn DocxState, node: &Node) {
    state.open_list(false);
    state.render_content(node);
    state.close_list();
}

fn ordered_list(state: &mut dyn DocxState, node: &Node) {
    state.open_list(true);
    state.render_content(node);
    state.close_list();
}

fn list_item(state: &mut dyn DocxState, node: &Node) {
    state.render_content(node);
}

fn image(state: &mut dyn DocxState, node: &Node) {
    let src = node.attr_str("src").unwrap_or_default();
    let caption = node.attr_str("title").or_else(|| node.attr_str("alt"));
    state.image(src, caption);
}

fn math(state: &mut dyn DocxState, node: &Node) {
    state.math(&node.text_content(), false);
}

fn equation(state: &mut dyn DocxState, node: &Node) {
    state.math(&node.text_content(), true);
    state.close_block(node);
}

/// Handlers for the standard document nodes.
pub fn default_nodes() -> NodeSerializer {
    let mut nodes = NodeSerializer::new();
    nodes
        .insert("doc", doc)
        .insert("paragraph", paragraph)
        .insert("heading", heading)
        .insert("blockquote", blockquote)
        .insert("code_block", code_block)
        .insert("horizontal_rule", horizontal_rule)
        .insert("hard_break", hard_break)
        .insert("text", text)
        .insert("bullet_list", bullet_list)
        .insert("ordered_list", ordered_list)
        .insert("list_item", list_item)
        .insert("image", image)
        .insert("math", math)
        .insert("equation", equation);
    nodes
}

/// Styles for the standard marks.
pub fn default_marks() -> MarkSerializer {
    let mut marks = MarkSerializer::default();
    marks
        .insert("em", RunStyle::Italic)
        .insert("strong", RunStyle::Bold)
        .insert("code", RunStyle::Code)
        .insert("link", RunStyle::Link)
        .insert("underline", RunStyle::Underline)
        .insert("strikethrough", RunStyle::Strikethrough)
        .insert("superscript", RunStyle::Superscript)
        .insert("subscript", RunStyle::Subscript);
    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingState;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_paragraphs_and_headings() {
        let doc = Node::new("doc").with_content(vec![
            Node::new("heading")
                .with_attr("level", 2)
                .with_content(vec![Node::text("Title")]),
            Node::new("paragraph").with_content(vec![
                Node::text("Hello "),
                Node::text("world").with_mark(Mark::new("strong")),
            ]),
        ]);

        let mut state = RecordingState::new(default_nodes());
        state.write(&doc).unwrap();

        assert_eq!(state.blocks, vec!["[H2] Title", "Hello world"]);
    }

    #[test]
    fn quotes_and_code() {
        let doc = Node::new("doc").with_content(vec![
            Node::new("blockquote").with_content(vec![
                Node::new("paragraph").with_content(vec![Node::text("quoted")])
            ]),
            Node::new("code_block").with_content(vec![Node::text("let x = 1;")]),
        ]);

        let mut state = RecordingState::new(default_nodes());
        state.write(&doc).unwrap();

        assert_eq!(state.blocks, vec!["[Quote] quoted", "[Code] let x = 1;"]);
    }

    #[test]
    fn lists_track_nesting() {
        let doc = Node::new("doc").with_content(vec![Node::new("ordered_list").with_content(
            vec![Node::new("list_item").with_content(vec![
                Node::new("paragraph").with_content(vec![Node::text("first")])
            ])],
        )]);

        let mut state = RecordingState::new(default_nodes());
        state.write(&doc).unwrap();

        assert_eq!(state.blocks, vec!["[ol:1] first"]);
    }

    #[test]
    fn unknown_node_is_an_error() {
        let serializer = default_nodes();
        let mut state = RecordingState::new(default_nodes());

        let err = serializer
            .serialize(&mut state, &Node::new("mystery"))
            .unwrap_err();

        assert_eq!(err.to_string(), "No serializer for node \"mystery\"");
    }

    #[test]
    fn maps_marks_to_run_styles() {
        let marks = default_marks();

        assert_eq!(
            marks.styles(&[Mark::new("em"), Mark::new("unknown"), Mark::new("strong")]),
            vec![RunStyle::Italic, RunStyle::Bold]
        );
    }
}
