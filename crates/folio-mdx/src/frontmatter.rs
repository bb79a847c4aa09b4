//! Frontmatter extraction and parsing.

use serde_yaml::Value;

/// Document-level metadata from the head of a Markdown file.
///
/// Only the title is read. Other keys are ignored whatever their type, so
/// project-specific metadata never breaks the build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    /// Page title
    pub title: Option<String>,
}

impl Frontmatter {
    fn from_yaml(value: &Value) -> Self {
        let title = value.get("title").and_then(|title| match title {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        });
        Self { title }
    }
}

/// Extract frontmatter from Markdown content.
///
/// Returns the parsed frontmatter and the remaining content after the
/// frontmatter block. A leading `---` without a closing fence, or a block
/// that is not a YAML mapping, is treated as ordinary Markdown.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    // Find the closing ---
    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Ok((None, source));
    };

    let yaml_content = after_open[..close_pos].trim();
    let remaining = &after_open[close_pos + 4..];

    if yaml_content.is_empty() {
        return Ok((Some(Frontmatter::default()), remaining.trim_start()));
    }

    let value: Value = serde_yaml::from_str(yaml_content)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    if !value.is_mapping() {
        return Ok((None, source));
    }

    Ok((Some(Frontmatter::from_yaml(&value)), remaining.trim_start()))
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}
