//! Options shared by the web build steps.

use std::path::{Path, PathBuf};

/// Options for assembling and writing the site configuration.
#[derive(Debug, Clone)]
pub struct WebOptions {
    /// Build directory, relative to the project root
    pub build_dir: PathBuf,

    /// Web template branch. `main` builds into `<build_dir>/web`, any other
    /// branch into `<build_dir>/web-<branch>`.
    pub branch: String,

    /// Rewrite `config.json` even when its content is unchanged
    pub force: bool,

    /// Generate a `_toc.yml` for sections that lack one
    pub write_toc: bool,

    /// Promote warnings to errors
    pub strict: bool,

    /// Check relative links in Markdown pages
    pub check_links: bool,
}

impl Default for WebOptions {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("_build"),
            branch: "main".to_string(),
            force: false,
            write_toc: false,
            strict: false,
            check_links: false,
        }
    }
}

impl WebOptions {
    /// Directory of the web server the config is written for.
    pub fn server_path(&self, root: &Path) -> PathBuf {
        let dir = if self.branch.is_empty() || self.branch == "main" {
            "web".to_string()
        } else {
            format!("web-{}", self.branch.replace('/', "-"))
        };
        root.join(&self.build_dir).join(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_branch_uses_plain_web_dir() {
        let opts = WebOptions::default();

        assert_eq!(
            opts.server_path(Path::new("/project")),
            PathBuf::from("/project/_build/web")
        );
    }

    #[test]
    fn other_branches_get_their_own_dir() {
        let opts = WebOptions {
            branch: "feat/nav".to_string(),
            ..Default::default()
        };

        assert_eq!(
            opts.server_path(Path::new("/project")),
            PathBuf::from("/project/_build/web-feat-nav")
        );
    }
}
