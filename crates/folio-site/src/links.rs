//! Checking relative links between pages.

use std::fs;
use std::path::{Path, PathBuf};

use folio_mdx::parse_markdown;

use crate::error::{Result, SiteError};
use crate::pages::{find_content_file, ContentFile};
use crate::toc::CONTENT_EXTENSIONS;
use crate::types::Page;

/// A link whose target does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// Page containing the link
    pub page: PathBuf,
    /// Link destination as written
    pub target: String,
}

impl std::fmt::Display for BrokenLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: \"{}\"", self.page.display(), self.target)
    }
}

/// Whether a link destination points at a local file.
fn is_local(target: &str) -> bool {
    !(target.is_empty()
        || target.starts_with('#')
        || target.starts_with('/')
        || target.contains("://")
        || target.starts_with("mailto:")
        || target.starts_with("tel:")
        || target.starts_with("data:"))
}

/// Whether `target`, relative to `base`, names an existing file.
///
/// A target without an extension may name a page by its logical name.
fn target_exists(base: &Path, target: &str) -> bool {
    let target = target
        .split(['#', '?'])
        .next()
        .unwrap_or_default();
    if target.is_empty() {
        return true;
    }

    let path = base.join(target);
    if path.exists() {
        return true;
    }
    path.extension().is_none()
        && CONTENT_EXTENSIONS
            .iter()
            .any(|ext| path.with_extension(ext).is_file())
}

/// Relative links in one Markdown file that do not resolve.
pub fn check_file(path: &Path) -> Result<Vec<BrokenLink>> {
    let source = fs::read_to_string(path)?;
    let doc = parse_markdown(&source).map_err(|e| SiteError::parse(path, e.to_string()))?;
    let base = path.parent().unwrap_or(Path::new("."));

    Ok(doc
        .links
        .into_iter()
        .filter(|target| is_local(target) && !target_exists(base, target))
        .map(|target| BrokenLink {
            page: path.to_path_buf(),
            target,
        })
        .collect())
}

/// Relative links in the Markdown pages of a section that do not resolve.
/// Notebooks and part headers are not checked.
pub fn check_pages(folder: &Path, pages: &[Page]) -> Result<Vec<BrokenLink>> {
    let mut broken = Vec::new();
    for slug in pages.iter().filter_map(|p| p.slug.as_deref()) {
        if let ContentFile::Markdown(path) = find_content_file(folder, slug)? {
            broken.extend(check_file(&path)?);
        }
    }
    Ok(broken)
}
