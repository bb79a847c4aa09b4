//! Remote content API client for folio.
//!
//! Blocks are versioned documents stored by the content service. This crate
//! defines the [`ContentApi`] contract, an HTTP implementation of it, and the
//! helpers built on top such as [`get_latest_version`].

pub mod client;
pub mod latest;
pub mod models;

pub use client::{ApiError, ContentApi, HttpContentApi, VersionQuery, DEFAULT_API_URL};
pub use latest::{get_latest_version, LatestVersion};
pub use models::{Block, BlockId, IdError, Version, VersionId, Work};
