//! Document tree handed to the serializer.

use serde_json::{Map, Value};

/// An inline formatting mark on a text node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mark {
    pub kind: String,
    pub attrs: Map<String, Value>,
}

impl Mark {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attrs: Map::new(),
        }
    }
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    pub kind: String,
    pub attrs: Map<String, Value>,
    pub content: Vec<Node>,
    /// Text of a `text` node
    pub text: Option<String>,
    pub marks: Vec<Mark>,
}

impl Node {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }

    /// A `text` node.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn with_attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    pub fn with_content(mut self, content: Vec<Node>) -> Self {
        self.content = content;
        self
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.marks.push(mark);
        self
    }

    /// String attribute, if present.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }

    /// Integer attribute, if present.
    pub fn attr_u64(&self, key: &str) -> Option<u64> {
        self.attrs.get(key).and_then(Value::as_u64)
    }

    pub fn child_count(&self) -> usize {
        self.content.len()
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.content {
            out.push_str(&child.text_content());
        }
        out
    }
}
