//! `folio web` commands.

use anyhow::{Context, Result};
use clap::Args;
use folio_server::{ConfigWatcher, PreviewServer, PreviewServerConfig};
use folio_site::{clean_server_dir, deploy_site, write_config, Session, WebOptions};

/// Host the preview server binds to unless `--keep-host` is given.
const DEFAULT_HOST: &str = "127.0.0.1";

/// Options for `folio web start`.
#[derive(Args, Debug, Clone, Default)]
pub struct StartOptions {
    /// Remove the web server directory before building
    #[arg(long)]
    pub clean: bool,

    /// Rewrite config.json even if it is unchanged
    #[arg(long)]
    pub force: bool,

    /// Web template branch; selects the server directory
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Bind to $HOST instead of 127.0.0.1
    #[arg(long)]
    pub keep_host: bool,

    /// Do not open a browser
    #[arg(long)]
    pub headless: bool,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    pub port: u16,
}

impl StartOptions {
    fn web_options(&self) -> WebOptions {
        WebOptions {
            branch: self.branch.clone(),
            force: self.force,
            ..Default::default()
        }
    }

    fn host(&self) -> String {
        if self.keep_host {
            std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string())
        } else {
            DEFAULT_HOST.to_string()
        }
    }
}

/// Options for `folio web build`.
#[derive(Args, Debug, Clone, Default)]
pub struct BuildOptions {
    /// Remove the web server directory before building
    #[arg(long)]
    pub clean: bool,

    /// Rewrite config.json even if it is unchanged
    #[arg(long)]
    pub force: bool,

    /// Web template branch; selects the server directory
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Generate a _toc.yml for sections that do not have one
    #[arg(long)]
    pub write_toc: bool,

    /// Plain log output for CI environments
    #[arg(long)]
    pub ci: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Check relative links in Markdown pages
    #[arg(long)]
    pub check_links: bool,
}

impl BuildOptions {
    fn web_options(&self) -> WebOptions {
        WebOptions {
            branch: self.branch.clone(),
            force: self.force,
            write_toc: self.write_toc,
            strict: self.strict,
            check_links: self.check_links,
            ..Default::default()
        }
    }
}

/// Options for `folio web deploy`.
#[derive(Args, Debug, Clone, Default)]
pub struct DeployOptions {
    /// Deploy without asking for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Rewrite config.json even if it is unchanged
    #[arg(long)]
    pub force: bool,

    /// Plain log output for CI environments
    #[arg(long)]
    pub ci: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Check relative links in Markdown pages
    #[arg(long)]
    pub check_links: bool,
}

impl DeployOptions {
    fn web_options(&self) -> WebOptions {
        WebOptions {
            force: self.force,
            strict: self.strict,
            check_links: self.check_links,
            ..Default::default()
        }
    }
}

/// Build the site config, then serve it and rebuild on config changes.
pub async fn start(mut session: Session, opts: StartOptions) -> Result<()> {
    let web = opts.web_options();

    if opts.clean {
        clean_server_dir(&session, &web)?;
    }
    write_config(&mut session, &web)?;

    let dir = web.server_path(session.root());
    let _watch = ConfigWatcher::spawn(session, web).context("Failed to watch config file")?;

    let config = PreviewServerConfig {
        dir,
        host: opts.host(),
        port: opts.port,
        open: !opts.headless,
    };
    PreviewServer::new(config).start().await?;

    Ok(())
}

/// Build the site config once.
pub fn build(mut session: Session, opts: BuildOptions) -> Result<()> {
    tracing::info!("Building site config...");

    let web = opts.web_options();
    if opts.clean {
        clean_server_dir(&session, &web)?;
    }
    let config = write_config(&mut session, &web)?;

    let pages: usize = config.folders.values().map(|f| f.pages.len()).sum();
    tracing::info!(
        "Built {} section(s) with {} page(s)",
        config.site.sections.len(),
        pages
    );
    tracing::info!("Output: {}", web.server_path(session.root()).display());

    Ok(())
}

/// Build the site config and copy the server directory to `web.deployDir`.
pub fn deploy(mut session: Session, opts: DeployOptions) -> Result<()> {
    let web = opts.web_options();
    write_config(&mut session, &web)?;

    let dest = session
        .require_config()?
        .web
        .deploy_dir
        .clone()
        .context("No deploy destination. Set 'web.deployDir' in the project config.")?;
    let dest = session.resolve(dest);
    let server = web.server_path(session.root());

    if !opts.yes {
        tracing::warn!(
            "About to deploy {} to {}. Re-run with --yes to continue.",
            server.display(),
            dest.display()
        );
        return Ok(());
    }

    deploy_site(&server, &dest)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_flags_map_to_web_options() {
        let opts = BuildOptions {
            branch: "next".to_string(),
            write_toc: true,
            strict: true,
            check_links: true,
            ..Default::default()
        };

        let web = opts.web_options();

        assert_eq!(web.branch, "next");
        assert!(web.write_toc && web.strict && web.check_links);
        assert!(!web.force);
    }

    #[test]
    fn deploy_uses_main_branch() {
        let web = DeployOptions {
            force: true,
            ..Default::default()
        }
        .web_options();

        assert_eq!(web.branch, "main");
        assert!(web.force);
    }

    #[test]
    fn default_host_without_keep_host() {
        let opts = StartOptions::default();

        assert_eq!(opts.host(), DEFAULT_HOST);
    }

    #[test]
    fn deploy_without_yes_copies_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let config = temp.path().join("folio.yml");
        std::fs::write(&config, "web:\n  name: Site\n  deployDir: out\n").unwrap();

        deploy(Session::new(&config), DeployOptions::default()).unwrap();

        assert!(!temp.path().join("out").exists());
        assert!(temp.path().join("_build/web/app/config.json").exists());
    }

    #[test]
    fn deploy_with_yes_copies_build() {
        let temp = tempfile::tempdir().unwrap();
        let config = temp.path().join("folio.yml");
        std::fs::write(&config, "web:\n  name: Site\n  deployDir: out\n").unwrap();

        let opts = DeployOptions {
            yes: true,
            ..Default::default()
        };
        deploy(Session::new(&config), opts).unwrap();

        assert!(temp.path().join("out/app/config.json").exists());
    }
}
