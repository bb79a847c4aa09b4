//! Copying a built server directory to its deploy destination.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, SiteError};

/// Copy every file under `server` into `dest`, keeping relative paths.
///
/// Returns the number of files copied.
pub fn deploy_site(server: &Path, dest: &Path) -> Result<usize> {
    if !server.is_dir() {
        return Err(SiteError::not_found(
            "build output",
            server,
            "Run 'folio web build' first.",
        ));
    }

    let server_abs = server.canonicalize()?;
    let dest_abs = dest.canonicalize().unwrap_or_else(|_| dest.to_path_buf());
    if dest.starts_with(server) || dest_abs.starts_with(&server_abs) {
        return Err(SiteError::config(format!(
            "Deploy destination '{}' must not be inside the build output '{}'. See 'config.web.deployDir'",
            dest.display(),
            server.display()
        )));
    }

    let mut copied = 0;
    for entry in WalkDir::new(server).follow_links(true) {
        let entry = entry.map_err(std::io::Error::from)?;
        let path = entry.path();
        let relative = path.strip_prefix(server).unwrap_or(path);
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &target)?;
            copied += 1;
        }
    }

    tracing::info!("Deployed {} file(s) to {}", copied, dest.display());
    Ok(copied)
}
