//! Site configuration builder for folio web exports.
//!
//! Scans the sections declared in a project's `folio.yml`, flattens each
//! section's table of contents into navigable pages, and writes a single
//! `config.json` for the web front end.

pub mod builder;
pub mod deploy;
pub mod error;
pub mod links;
pub mod options;
pub mod pages;
pub mod sections;
pub mod session;
pub mod toc;
pub mod types;

pub use builder::{clean_server_dir, create_config, try_write_config, write_config, CONFIG_FILE};
pub use deploy::deploy_site;
pub use error::{Result, SiteError};
pub use options::WebOptions;
pub use pages::{
    chapters_to_pages, find_content_file, flatten_toc, title_from_file, toc_to_pages, ContentFile,
};
pub use sections::{validate_sections, ValidatedSection};
pub use session::{Action, ApiSettings, ProjectConfig, SectionDecl, Session, WebConfig};
pub use toc::{read_toc, write_toc, Chapter, Part, Toc, TOC_FILE};
pub use types::{Page, SectionInfo, SiteConfig, SiteFolder, SiteInfo};
