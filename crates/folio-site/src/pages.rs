//! Flattening a table of contents into pages, and resolving page titles.

use std::fs;
use std::path::{Path, PathBuf};

use folio_mdx::parse_markdown;

use crate::error::{Result, SiteError};
use crate::toc::{logical_name, Chapter, Toc, TOC_FILE};
use crate::types::Page;

/// Title given to notebook pages until notebook metadata is read.
pub const NOTEBOOK_TITLE: &str = "Notebook";

/// The file backing a logical page name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentFile {
    Markdown(PathBuf),
    Notebook(PathBuf),
}

/// Locate `<name>.md` or, failing that, `<name>.ipynb` in `folder`.
pub fn find_content_file(folder: &Path, name: &str) -> Result<ContentFile> {
    let markdown = folder.join(format!("{name}.md"));
    if markdown.is_file() {
        return Ok(ContentFile::Markdown(markdown));
    }

    let notebook = folder.join(format!("{name}.ipynb"));
    if notebook.is_file() {
        return Ok(ContentFile::Notebook(notebook));
    }

    Err(SiteError::not_found(
        "content file",
        name,
        format!("See '{}'", folder.join(TOC_FILE).display()),
    ))
}

/// Human-readable title for the page `name` in `folder`.
///
/// Markdown pages use the frontmatter title, then the first heading, then
/// `name` itself. Notebooks get [`NOTEBOOK_TITLE`].
pub fn title_from_file(folder: &Path, name: &str) -> Result<String> {
    match find_content_file(folder, name)? {
        ContentFile::Markdown(path) => {
            let source = fs::read_to_string(&path)?;
            let doc = parse_markdown(&source).map_err(|e| SiteError::parse(&path, e.to_string()))?;
            Ok(doc.title().unwrap_or(name).to_string())
        }
        ContentFile::Notebook(_) => Ok(NOTEBOOK_TITLE.to_string()),
    }
}

/// Append a page for each chapter, depth-first, recursing into sections one
/// level deeper.
///
/// Chapters without a `file` are skipped along with their sections.
pub fn chapters_to_pages<F>(
    chapters: &[Chapter],
    level: u32,
    title_of: &mut F,
    pages: &mut Vec<Page>,
) -> Result<()>
where
    F: FnMut(&str) -> Result<String>,
{
    for chapter in chapters {
        let Some(file) = chapter.file.as_deref() else {
            continue;
        };
        let slug = logical_name(file);
        pages.push(Page {
            title: title_of(slug)?,
            slug: Some(slug.to_string()),
            level,
        });
        if let Some(sections) = &chapter.sections {
            chapters_to_pages(sections, level + 1, title_of, pages)?;
        }
    }
    Ok(())
}

/// Flatten a whole table of contents.
///
/// With `parts`, every captioned part becomes a level-1 header page and its
/// chapters start at level 2.
pub fn flatten_toc<F>(toc: &Toc, mut title_of: F) -> Result<Vec<Page>>
where
    F: FnMut(&str) -> Result<String>,
{
    let mut pages = Vec::new();

    if let Some(chapters) = &toc.chapters {
        chapters_to_pages(chapters, 1, &mut title_of, &mut pages)?;
    } else if let Some(parts) = &toc.parts {
        for part in parts {
            if let Some(caption) = &part.caption {
                pages.push(Page {
                    title: caption.clone(),
                    slug: None,
                    level: 1,
                });
            }
            if let Some(chapters) = &part.chapters {
                chapters_to_pages(chapters, 2, &mut title_of, &mut pages)?;
            }
        }
    }

    Ok(pages)
}

/// Flatten the table of contents of the section in `folder`, reading each
/// page's title from disk.
pub fn toc_to_pages(folder: &Path, toc: &Toc) -> Result<Vec<Page>> {
    flatten_toc(toc, |name| title_from_file(folder, name))
}
