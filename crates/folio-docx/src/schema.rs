//! The node table used for folio documents.

use chrono::{DateTime, NaiveDate};

use crate::node::Node;
use crate::oxa::oxa_link_to_id;
use crate::serializer::{blockquote, default_marks, default_nodes, MarkSerializer, NodeSerializer};
use crate::state::DocxState;

/// What a citation points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Cite,
    Table,
    Code,
    Fig,
    Eq,
    Sec,
    Link,
}

impl ReferenceKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "cite" => Some(Self::Cite),
            "table" => Some(Self::Table),
            "code" => Some(Self::Code),
            "fig" => Some(Self::Fig),
            "eq" => Some(Self::Eq),
            "sec" => Some(Self::Sec),
            "link" => Some(Self::Link),
            _ => None,
        }
    }
}

/// Format an ISO date or RFC 3339 timestamp as e.g. `January 5, 2022`.
/// Unrecognised input is returned unchanged.
pub fn format_datetime(datetime: &str) -> String {
    let date = DateTime::parse_from_rfc3339(datetime)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(datetime, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => datetime.to_string(),
    }
}

fn unsupported(state: &mut dyn DocxState, label: &str) {
    state.text(&format!("[{label} not supported]"));
}

fn iframe(state: &mut dyn DocxState, node: &Node) {
    unsupported(state, "IFrame");
    state.close_block(node);
}

fn cite(state: &mut dyn DocxState, node: &Node) {
    let Some(link) = node.attr_str("key").and_then(oxa_link_to_id) else {
        return;
    };
    let id = link.reference_id();
    match node.attr_str("kind").and_then(ReferenceKind::parse) {
        Some(ReferenceKind::Cite) => state.text(node.attr_str("text").unwrap_or_default()),
        Some(ReferenceKind::Table | ReferenceKind::Code | ReferenceKind::Fig) => {
            state.create_reference(&id, None)
        }
        Some(ReferenceKind::Eq) => state.create_reference(&id, Some("Equation ")),
        _ => {}
    }
}

fn cite_group(state: &mut dyn DocxState, group: &Node) {
    let (open, join, close) = ("(", "; ", ")");
    state.text(open);
    for (index, child) in group.content.iter().enumerate() {
        state.render(child, group, index);
        if index + 1 < group.child_count() {
            state.text(join);
        }
    }
    state.text(close);
}

fn time(state: &mut dyn DocxState, node: &Node) {
    let datetime = node.attr_str("datetime").unwrap_or_default();
    state.text(&format_datetime(datetime));
}

fn footnote(state: &mut dyn DocxState, node: &Node) {
    state.footnote(node);
}

fn variable(state: &mut dyn DocxState, node: &Node) {
    unsupported(state, "Variable");
    state.close_block(node);
}

fn display(state: &mut dyn DocxState, _node: &Node) {
    unsupported(state, "Display text");
}

fn dynamic(state: &mut dyn DocxState, _node: &Node) {
    unsupported(state, "Dynamic text");
}

fn range(state: &mut dyn DocxState, _node: &Node) {
    unsupported(state, "Range");
}

fn switch(state: &mut dyn DocxState, _node: &Node) {
    unsupported(state, "Switch");
}

fn button(state: &mut dyn DocxState, _node: &Node) {
    unsupported(state, "Button");
}

/// Node and mark tables for exporting folio documents to Word.
///
/// Extends [`default_nodes`] with asides, callouts, citations, dates,
/// footnotes and placeholders for interactive nodes that have no Word
/// equivalent.
pub fn get_nodes_and_marks() -> (NodeSerializer, MarkSerializer) {
    let mut nodes = default_nodes();
    nodes
        .insert("aside", blockquote)
        .insert("callout", blockquote)
        .insert("iframe", iframe)
        .insert("cite", cite)
        .insert("cite_group", cite_group)
        .insert("time", time)
        .insert("footnote", footnote)
        .insert("variable", variable)
        .insert("display", display)
        .insert("dynamic", dynamic)
        .insert("range", range)
        .insert("switch", switch)
        .insert("button", button);
    (nodes, default_marks())
}
