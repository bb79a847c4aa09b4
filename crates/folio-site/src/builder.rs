//! Site configuration assembly.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::{Result, SiteError};
use crate::links::check_pages;
use crate::options::WebOptions;
use crate::pages::toc_to_pages;
use crate::sections::{validate_sections, ValidatedSection};
use crate::session::{SectionDecl, Session};
use crate::toc::{read_toc, write_toc, TOC_FILE};
use crate::types::{SectionInfo, SiteConfig, SiteFolder, SiteInfo};

/// Name of the JSON artifact, written to `<server>/app/`.
pub const CONFIG_FILE: &str = "config.json";

/// Build the [`SiteConfig`] for the currently loaded project config.
///
/// Copies the logo into the server's `public/` directory as a side effect;
/// nothing else is written.
pub fn create_config(session: &Session, opts: &WebOptions) -> Result<SiteConfig> {
    let config = session.require_config()?;
    let web = &config.web;

    let (sections, folders) = build_sections(session, opts, &web.sections)?;
    let server = opts.server_path(session.root());
    let logo = copy_logo(session, &server, web.logo.as_deref())?;

    Ok(SiteConfig {
        site: SiteInfo {
            name: web.name.clone(),
            actions: web.actions.clone(),
            logo,
            logo_text: web.logo_text.clone(),
            sections,
        },
        folders,
    })
}

/// Validate the declared sections and flatten each one's table of contents.
fn build_sections(
    session: &Session,
    opts: &WebOptions,
    decls: &[SectionDecl],
) -> Result<(Vec<SectionInfo>, BTreeMap<String, SiteFolder>)> {
    if decls.is_empty() {
        if opts.strict {
            return Err(SiteError::config(
                "There are no sections defined for the site. See 'config.web.sections'",
            ));
        }
        tracing::warn!("There are no sections defined for the site.");
        return Ok((Vec::new(), BTreeMap::new()));
    }

    let validated = validate_sections(session.root(), decls)?;

    let mut folders = BTreeMap::new();
    let mut broken = Vec::new();
    for section in &validated {
        let folder = build_folder(section, opts)?;
        if opts.check_links {
            broken.extend(check_pages(&section.path, &folder.pages)?);
        }
        folders.insert(section.folder.clone(), folder);
    }

    if !broken.is_empty() {
        for link in &broken {
            tracing::warn!("Broken link in {}", link);
        }
        if opts.strict {
            return Err(SiteError::config(format!(
                "Found {} broken link(s).",
                broken.len()
            )));
        }
    }

    let sections = validated.iter().map(ValidatedSection::info).collect();
    Ok((sections, folders))
}

/// Read (or, with `write_toc`, generate) a section's table of contents and
/// turn it into a [`SiteFolder`].
fn build_folder(section: &ValidatedSection, opts: &WebOptions) -> Result<SiteFolder> {
    let toc_path = section.path.join(TOC_FILE);
    let toc = if toc_path.exists() {
        read_toc(&toc_path)?
    } else if opts.write_toc {
        write_toc(&section.path)?
    } else {
        return Err(SiteError::not_found(
            "TOC",
            toc_path,
            format!("Please create a '{TOC_FILE}'."),
        ));
    };

    let pages = toc_to_pages(&section.path, &toc)?;
    tracing::debug!(
        "Section \"{}\" has {} page(s)",
        section.folder,
        pages.len()
    );

    Ok(SiteFolder {
        title: section.title.clone(),
        index: toc.root,
        pages,
    })
}

/// Copy the configured logo to `<server>/public/logo.<ext>` and return its
/// URL.
fn copy_logo(session: &Session, server: &Path, logo: Option<&str>) -> Result<Option<String>> {
    let Some(logo) = logo else {
        tracing::debug!("No logo specified");
        return Ok(None);
    };

    let source = session.resolve(logo);
    if !source.is_file() {
        return Err(SiteError::not_found(
            "logo",
            logo,
            "See 'config.web.logo'",
        ));
    }

    let name = match source.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("logo.{ext}"),
        None => "logo".to_string(),
    };
    let public = server.join("public");
    fs::create_dir_all(&public)?;
    fs::copy(&source, public.join(&name))?;
    tracing::debug!("Copied logo from {}", source.display());

    Ok(Some(format!("/{name}")))
}

/// Reload the project config, assemble the site config and write it to
/// `<server>/app/config.json`.
///
/// The file is only written once assembly has fully succeeded. Unless
/// `opts.force` is set, an identical existing file is left untouched.
pub fn write_config(session: &mut Session, opts: &WebOptions) -> Result<SiteConfig> {
    let start = Instant::now();

    session.load_config()?;
    let config = create_config(session, opts)?;

    let app = opts.server_path(session.root()).join("app");
    let pathname = app.join(CONFIG_FILE);
    let json = serde_json::to_string(&config)?;

    let unchanged = !opts.force
        && fs::read_to_string(&pathname)
            .map(|existing| existing == json)
            .unwrap_or(false);
    if unchanged {
        tracing::debug!("{} is up to date", pathname.display());
    } else {
        fs::create_dir_all(&app)?;
        fs::write(&pathname, json)?;
        tracing::info!(
            "⚙️  Writing {} in {}ms",
            CONFIG_FILE,
            start.elapsed().as_millis()
        );
    }

    Ok(config)
}

/// [`write_config`] for callers that must keep running: errors are logged
/// and `None` is returned.
pub fn try_write_config(session: &mut Session, opts: &WebOptions) -> Option<SiteConfig> {
    match write_config(session, opts) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::error!("{}", e);
            None
        }
    }
}

/// Remove the server directory so the next build starts fresh.
pub fn clean_server_dir(session: &Session, opts: &WebOptions) -> Result<()> {
    let server = opts.server_path(session.root());
    if server.exists() {
        fs::remove_dir_all(&server)?;
        tracing::info!("Removed {}", server.display());
    }
    Ok(())
}
