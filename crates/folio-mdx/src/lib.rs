//! Markdown front matter and heading extraction.
//!
//! This crate parses authored Markdown pages just far enough to answer the
//! questions the site builder asks of them: what the page is called and which
//! headings and links it contains.

pub mod frontmatter;
pub mod parser;

pub use frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
pub use parser::{parse_markdown, Heading, ParseError, ParsedDoc};
