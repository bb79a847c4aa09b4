//! Project configuration and the session context that carries it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Default name of the project configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "folio.yml";

/// Configuration file structure (folio.yml).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProjectConfig {
    #[serde(default)]
    pub version: Option<u32>,
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub web: WebConfig,
}

/// Remote content API settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiSettings {
    pub url: Option<String>,
}

/// The `web` block of the project configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WebConfig {
    #[serde(default)]
    pub name: String,
    /// Path to a logo image, relative to the config file
    pub logo: Option<String>,
    pub logo_text: Option<String>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub sections: Vec<SectionDecl>,
    /// Destination directory for `web deploy`
    pub deploy_dir: Option<String>,
}

/// A call-to-action link shown in the site header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub title: String,
    pub url: String,
    #[serde(default, rename = "static", skip_serializing_if = "std::ops::Not::not")]
    pub is_static: bool,
}

/// A section as declared in `web.sections`. Both fields are required but
/// checked during validation so the error can name the offending index.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SectionDecl {
    pub title: Option<String>,
    pub folder: Option<String>,
}

/// Explicit context for a single CLI invocation.
///
/// Holds where the project config lives and the most recently loaded copy of
/// it. Call [`Session::load_config`] to refresh it from disk.
#[derive(Debug, Clone)]
pub struct Session {
    config_path: PathBuf,
    config: Option<ProjectConfig>,
}

impl Session {
    /// Create a session for the config file at `config_path`. Nothing is read yet.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            config: None,
        }
    }

    /// Create a session around an already-loaded config.
    pub fn with_config(config_path: impl Into<PathBuf>, config: ProjectConfig) -> Self {
        Self {
            config_path: config_path.into(),
            config: Some(config),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Directory containing the config file; relative paths in the config
    /// are resolved against it.
    pub fn root(&self) -> &Path {
        match self.config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Resolve a path from the config file against the project root.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root().join(path)
        }
    }

    /// The last loaded config, if any.
    pub fn config(&self) -> Option<&ProjectConfig> {
        self.config.as_ref()
    }

    /// Re-read the config file from disk.
    ///
    /// A missing file clears the loaded config and is reported as a
    /// configuration error.
    pub fn load_config(&mut self) -> Result<&ProjectConfig> {
        if !self.config_path.exists() {
            self.config = None;
            return Err(SiteError::config(format!(
                "Could not find {}. Use the `-C [path]` to override the default.",
                self.config_path.display()
            )));
        }

        let content = fs::read_to_string(&self.config_path)?;
        let config: ProjectConfig = serde_yaml::from_str(&content)
            .map_err(|e| SiteError::parse(&self.config_path, e.to_string()))?;

        tracing::debug!("Loaded config from {}", self.config_path.display());

        Ok(&*self.config.insert(config))
    }

    /// The loaded config, or the same error [`Session::load_config`] gives
    /// for a missing file.
    pub fn require_config(&self) -> Result<&ProjectConfig> {
        self.config.as_ref().ok_or_else(|| {
            SiteError::config(format!(
                "Could not find {}. Use the `-C [path]` to override the default.",
                self.config_path.display()
            ))
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_web_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.yml");
        fs::write(
            &path,
            r#"version: 1
web:
  name: My Site
  logoText: Mine
  actions:
    - title: Source
      url: https://example.org
      static: true
  sections:
    - title: Guide
      folder: guide
"#,
        )
        .unwrap();

        let mut session = Session::new(&path);
        let config = session.load_config().unwrap();

        assert_eq!(config.web.name, "My Site");
        assert_eq!(config.web.logo_text.as_deref(), Some("Mine"));
        assert!(config.web.actions[0].is_static);
        assert_eq!(config.web.sections[0].folder.as_deref(), Some("guide"));
        assert_eq!(session.root(), temp.path());
    }

    #[test]
    fn missing_config_is_a_config_error() {
        let temp = tempdir().unwrap();
        let mut session = Session::new(temp.path().join("folio.yml"));

        let err = session.load_config().unwrap_err();

        assert!(matches!(err, SiteError::Config(_)));
        assert!(err.to_string().contains("-C [path]"));
        assert!(session.config().is_none());
    }

    #[test]
    fn reload_picks_up_changes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.yml");
        fs::write(&path, "web:\n  name: First\n").unwrap();

        let mut session = Session::new(&path);
        session.load_config().unwrap();
        fs::write(&path, "web:\n  name: Second\n").unwrap();
        session.load_config().unwrap();

        assert_eq!(session.config().unwrap().web.name, "Second");
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("folio.yml");
        fs::write(&path, "web: [unclosed\n").unwrap();

        let err = Session::new(&path).load_config().unwrap_err();

        assert!(matches!(err, SiteError::Parse { .. }));
    }

    #[test]
    fn bare_file_name_resolves_against_cwd() {
        let session = Session::new("folio.yml");

        assert_eq!(session.root(), Path::new("."));
        assert_eq!(session.resolve("docs"), Path::new("./docs"));
    }

    #[test]
    fn action_static_flag_is_omitted_when_false() {
        let action = Action {
            title: "Docs".to_string(),
            url: "/docs".to_string(),
            is_static: false,
        };

        let json = serde_json::to_value(&action).unwrap();

        assert_eq!(json, serde_json::json!({ "title": "Docs", "url": "/docs" }));
    }
}
