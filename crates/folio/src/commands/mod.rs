//! CLI command implementations.

pub mod web;
pub mod works;
