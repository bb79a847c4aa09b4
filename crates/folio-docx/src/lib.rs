//! Document schema mapping for Word export.
//!
//! A Word writer walks a document tree and asks a [`NodeSerializer`] how to
//! emit each node. This crate owns that table: the standard nodes and marks
//! in [`default_nodes`] and [`default_marks`], and the folio-specific
//! additions in [`get_nodes_and_marks`]. The writer itself is anything that
//! implements [`DocxState`].

pub mod node;
pub mod oxa;
pub mod schema;
pub mod serializer;
pub mod state;

pub use node::{Mark, Node};
pub use oxa::{oxa_link_to_id, OxaLink};
pub use schema::{format_datetime, get_nodes_and_marks, ReferenceKind};
pub use serializer::{
    default_marks, default_nodes, DocxError, MarkSerializer, NodeHandler, NodeSerializer,
};
pub use state::{DocxState, ParagraphStyle, RunStyle};

#[cfg(test)]
mod testing;
