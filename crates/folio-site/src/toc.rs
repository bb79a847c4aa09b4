//! Table-of-contents descriptors (`_toc.yml`).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::{Result, SiteError};

/// File name of the table of contents inside each section folder.
pub const TOC_FILE: &str = "_toc.yml";

/// Extensions a content file may have, in lookup order.
pub const CONTENT_EXTENSIONS: [&str; 2] = ["md", "ipynb"];

/// A section's table of contents.
///
/// Either `chapters` or `parts` is used; when both are present `chapters`
/// wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Toc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Logical name of the section's landing page
    pub root: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapters: Option<Vec<Chapter>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
}

/// A chapter, possibly with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Chapter>>,
}

impl Chapter {
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            sections: None,
        }
    }

    pub fn with_sections(file: impl Into<String>, sections: Vec<Chapter>) -> Self {
        Self {
            file: Some(file.into()),
            sections: Some(sections),
        }
    }
}

/// A captioned group of chapters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapters: Option<Vec<Chapter>>,
}

/// Strip a content extension from a TOC file reference.
///
/// `intro.md` and `intro` both name the logical file `intro`.
pub fn logical_name(file: &str) -> &str {
    for ext in CONTENT_EXTENSIONS {
        if let Some(stem) = file
            .strip_suffix(ext)
            .and_then(|rest| rest.strip_suffix('.'))
        {
            return stem;
        }
    }
    file
}

/// Read and parse a `_toc.yml`.
pub fn read_toc(path: &Path) -> Result<Toc> {
    let content = fs::read_to_string(path)?;
    let toc: Toc =
        serde_yaml::from_str(&content).map_err(|e| SiteError::parse(path, e.to_string()))?;
    tracing::debug!("Read table of contents from {}", path.display());
    Ok(toc)
}

/// Generate and write a `_toc.yml` for `folder` from the content files it
/// holds.
///
/// Files are taken in name order. `index` becomes the root when present,
/// otherwise the first file does; every other file becomes a chapter.
pub fn write_toc(folder: &Path) -> Result<Toc> {
    let mut names: Vec<String> = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let path = e.path();
            let ext = path.extension().and_then(|e| e.to_str())?;
            if !CONTENT_EXTENSIONS.contains(&ext) {
                return None;
            }
            let stem = path.file_stem().and_then(|s| s.to_str())?;
            if stem.starts_with('_') || stem.starts_with('.') {
                return None;
            }
            Some(stem.to_string())
        })
        .collect();
    names.dedup();

    if names.is_empty() {
        return Err(SiteError::config(format!(
            "Cannot write a table of contents for \"{}\": it has no .md or .ipynb files.",
            folder.display()
        )));
    }

    let root_pos = names.iter().position(|n| n == "index").unwrap_or(0);
    let root = names.remove(root_pos);

    let toc = Toc {
        format: Some("jb-book".to_string()),
        root,
        chapters: if names.is_empty() {
            None
        } else {
            Some(names.into_iter().map(Chapter::new).collect())
        },
        parts: None,
    };

    let yaml = serde_yaml::to_string(&toc)
        .map_err(|e| SiteError::parse(folder.join(TOC_FILE), e.to_string()))?;
    fs::write(folder.join(TOC_FILE), yaml)?;
    tracing::info!("Wrote {}", folder.join(TOC_FILE).display());

    Ok(toc)
}
