//! A [`DocxState`] that records paragraphs as plain strings.

use crate::node::Node;
use crate::serializer::{DocxError, NodeSerializer};
use crate::state::{DocxState, ParagraphStyle};

pub struct RecordingState {
    nodes: NodeSerializer,
    pub blocks: Vec<String>,
    pub footnotes: Vec<String>,
    current: String,
    styles: Vec<ParagraphStyle>,
    lists: Vec<bool>,
}

impl RecordingState {
    pub fn new(nodes: NodeSerializer) -> Self {
        Self {
            nodes,
            blocks: Vec::new(),
            footnotes: Vec::new(),
            current: String::new(),
            styles: Vec::new(),
            lists: Vec::new(),
        }
    }

    pub fn write(&mut self, doc: &Node) -> Result<(), DocxError> {
        let handler = self
            .nodes
            .get(&doc.kind)
            .ok_or_else(|| DocxError::UnsupportedNode(doc.kind.clone()))?;
        handler(self, doc);
        if !self.current.is_empty() {
            self.finish();
        }
        Ok(())
    }

    fn prefix(&self) -> String {
        if let Some(&ordered) = self.lists.last() {
            let kind = if ordered { "ol" } else { "ul" };
            return format!("[{}:{}] ", kind, self.lists.len());
        }
        match self.styles.last() {
            Some(ParagraphStyle::Heading(level)) => format!("[H{level}] "),
            Some(ParagraphStyle::Quote) => "[Quote] ".to_string(),
            Some(ParagraphStyle::Code) => "[Code] ".to_string(),
            None => String::new(),
        }
    }

    fn finish(&mut self) {
        let text = std::mem::take(&mut self.current);
        let block = format!("{}{}", self.prefix(), text);
        self.blocks.push(block);
    }
}

impl DocxState for RecordingState {
    fn text(&mut self, text: &str) {
        self.current.push_str(text);
    }

    fn close_block(&mut self, _node: &Node) {
        self.finish();
    }

    fn render(&mut self, node: &Node, _parent: &Node, _index: usize) {
        match self.nodes.get(&node.kind) {
            Some(handler) => handler(self, node),
            None => self.current.push_str(&format!("<{}>", node.kind)),
        }
    }

    fn create_reference(&mut self, id: &str, prefix: Option<&str>) {
        self.current
            .push_str(&format!("{}{{ref:{}}}", prefix.unwrap_or_default(), id));
    }

    fn footnote(&mut self, node: &Node) {
        self.footnotes.push(node.text_content());
        self.current
            .push_str(&format!("[^{}]", self.footnotes.len()));
    }

    fn push_style(&mut self, style: ParagraphStyle) {
        self.styles.push(style);
    }

    fn pop_style(&mut self) {
        self.styles.pop();
    }

    fn open_list(&mut self, ordered: bool) {
        self.lists.push(ordered);
    }

    fn close_list(&mut self) {
        self.lists.pop();
    }

    fn image(&mut self, src: &str, caption: Option<&str>) {
        self.blocks
            .push(format!("[Image {}] {}", src, caption.unwrap_or_default()));
    }

    fn math(&mut self, latex: &str, _display: bool) {
        self.current.push_str(&format!("${latex}$"));
    }

    fn line_break(&mut self) {
        self.current.push('\n');
    }

    fn rule(&mut self) {
        self.blocks.push("---".to_string());
    }
}
