//! Validation of the sections declared in `web.sections`.

use std::collections::HashSet;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use crate::error::{Result, SiteError};
use crate::session::SectionDecl;
use crate::types::SectionInfo;

/// A section whose declaration has been checked against the file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSection {
    pub title: String,
    /// Folder basename; unique across all sections
    pub folder: String,
    /// Folder as written in the config
    pub declared: String,
    /// Folder resolved against the project root
    pub path: PathBuf,
}

impl ValidatedSection {
    pub fn info(&self) -> SectionInfo {
        SectionInfo {
            title: self.title.clone(),
            folder: self.folder.clone(),
            path: self.declared.clone(),
        }
    }
}

/// Values that occur more than once, in the order they first repeat.
pub fn repeats<T: Eq + Hash + Clone>(things: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut repeated = Vec::new();
    for thing in things {
        if !seen.insert(thing) && !repeated.contains(thing) {
            repeated.push(thing.clone());
        }
    }
    repeated
}

/// Check every declared section, stopping at the first invalid one.
///
/// Each section needs a title and an existing folder. Relative folders are
/// resolved against `root`. Once all sections pass, folder basenames must be
/// unique.
pub fn validate_sections(root: &Path, decls: &[SectionDecl]) -> Result<Vec<ValidatedSection>> {
    let mut validated = Vec::with_capacity(decls.len());

    for (index, decl) in decls.iter().enumerate() {
        let title = decl.title.as_deref().map(str::trim).unwrap_or_default();
        let folder = decl.folder.as_deref().map(str::trim).unwrap_or_default();
        if title.is_empty() || folder.is_empty() {
            return Err(SiteError::config(format!(
                "Section {index}: must have 'folder' and 'title' See 'config.web.sections'"
            )));
        }

        let path = if Path::new(folder).is_absolute() {
            PathBuf::from(folder)
        } else {
            root.join(folder)
        };
        if !path.is_dir() {
            return Err(SiteError::not_found(
                "section",
                folder,
                "See 'config.web.sections'",
            ));
        }

        validated.push(ValidatedSection {
            title: title.to_string(),
            folder: basename(&path, folder)?,
            declared: folder.to_string(),
            path,
        });
    }

    let basenames: Vec<&str> = validated.iter().map(|s| s.folder.as_str()).collect();
    let repeated = repeats(&basenames);
    if !repeated.is_empty() {
        return Err(SiteError::config(format!(
            "Section folder basenames must be unique. Repeated: [\"{}\"].",
            repeated.join("\", \"")
        )));
    }

    Ok(validated)
}

/// Basename of a section folder. Folders written as `.` or `..` use the
/// name of the directory they resolve to.
fn basename(path: &Path, declared: &str) -> Result<String> {
    let name = match Path::new(declared).file_name() {
        Some(name) => Some(name.to_os_string()),
        None => path.canonicalize()?.file_name().map(|n| n.to_os_string()),
    };
    name.map(|n| n.to_string_lossy().into_owned()).ok_or_else(|| {
        SiteError::config(format!(
            "Section folder \"{declared}\" has no name. See 'config.web.sections'"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn decl(title: &str, folder: &str) -> SectionDecl {
        SectionDecl {
            title: Some(title.to_string()),
            folder: Some(folder.to_string()),
        }
    }

    #[test]
    fn validates_existing_folders() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("content/guide")).unwrap();

        let sections = validate_sections(temp.path(), &[decl("Guide", "content/guide")]).unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].folder, "guide");
        assert_eq!(sections[0].declared, "content/guide");
        assert_eq!(sections[0].path, temp.path().join("content/guide"));
        assert_eq!(sections[0].info().path, "content/guide");
    }

    #[test]
    fn missing_title_is_a_config_error() {
        let temp = tempdir().unwrap();
        let decls = [SectionDecl {
            title: None,
            folder: Some("guide".to_string()),
        }];

        let err = validate_sections(temp.path(), &decls).unwrap_err();

        assert!(matches!(err, SiteError::Config(_)));
        assert!(err.to_string().starts_with("Section 0:"));
    }

    #[test]
    fn missing_folder_is_not_found() {
        let temp = tempdir().unwrap();

        let err = validate_sections(temp.path(), &[decl("A", "/missing")]).unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("/missing"));
    }

    #[test]
    fn fails_at_first_invalid_section() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("b")).unwrap();
        let decls = [
            decl("A", "a"),
            SectionDecl {
                title: Some("B".to_string()),
                folder: None,
            },
        ];

        let err = validate_sections(temp.path(), &decls).unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("\"a\""));
    }

    #[test]
    fn rejects_repeated_basenames() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("docs/intro")).unwrap();
        fs::create_dir_all(temp.path().join("other/intro")).unwrap();

        let err = validate_sections(
            temp.path(),
            &[decl("Docs", "docs/intro"), decl("Other", "other/intro")],
        )
        .unwrap_err();

        assert!(matches!(err, SiteError::Config(_)));
        assert_eq!(
            err.to_string(),
            "Section folder basenames must be unique. Repeated: [\"intro\"]."
        );
    }

    #[test]
    fn dot_folder_uses_resolved_name() {
        let temp = tempdir().unwrap();
        let project = temp.path().join("project");
        fs::create_dir_all(&project).unwrap();

        let sections = validate_sections(&project, &[decl("Root", ".")]).unwrap();

        assert_eq!(sections[0].folder, "project");
    }

    #[test]
    fn repeats_reports_each_value_once() {
        assert_eq!(repeats(&["a", "b", "a", "c", "a", "b"]), vec!["a", "b"]);
        assert!(repeats(&[1, 2, 3]).is_empty());
    }
}
