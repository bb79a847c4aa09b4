//! Markdown document parser.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};

/// A parsed Markdown document.
#[derive(Debug, Clone)]
pub struct ParsedDoc {
    /// Parsed frontmatter (if present)
    pub frontmatter: Option<Frontmatter>,

    /// Headings in document order
    pub headings: Vec<Heading>,

    /// Link and image destinations in document order
    pub links: Vec<String>,
}

impl ParsedDoc {
    /// Title declared in the frontmatter, falling back to the first heading.
    pub fn title(&self) -> Option<&str> {
        self.frontmatter
            .as_ref()
            .and_then(|fm| fm.title.as_deref())
            .filter(|t| !t.trim().is_empty())
            .or_else(|| {
                self.headings
                    .first()
                    .map(|h| h.text.as_str())
                    .filter(|t| !t.is_empty())
            })
    }
}

/// A heading found in the document body.
#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    /// Heading text
    pub text: String,
    /// Heading level (1-6)
    pub level: u8,
}

/// Errors that can occur when parsing Markdown.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),
}

/// Parse a Markdown document.
///
/// Extracts frontmatter, headings and link destinations.
pub fn parse_markdown(source: &str) -> Result<ParsedDoc, ParseError> {
    let (frontmatter, content) = extract_frontmatter(source)?;

    let mut headings = Vec::new();
    let mut links = Vec::new();

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let mut current_heading: Option<(u8, String)> = None; // (level, text)

    for event in Parser::new_ext(content, options) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current_heading = Some((level as u8, String::new()));
            }

            Event::Text(text) | Event::Code(text) => {
                if let Some((_, ref mut heading_text)) = current_heading {
                    heading_text.push_str(&text);
                }
            }

            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = current_heading.take() {
                    headings.push(Heading {
                        text: text.trim().to_string(),
                        level,
                    });
                }
            }

            Event::Start(Tag::Link { dest_url, .. }) | Event::Start(Tag::Image { dest_url, .. }) => {
                links.push(dest_url.to_string());
            }

            _ => {}
        }
    }

    Ok(ParsedDoc {
        frontmatter,
        headings,
        links,
    })
}
