//! `folio works` commands.

use anyhow::Result;
use clap::Args;
use folio_api::{
    get_latest_version, BlockId, ContentApi, HttpContentApi, VersionQuery, DEFAULT_API_URL,
};
use folio_site::Session;

/// Connection options for the content API.
#[derive(Args, Debug, Clone, Default)]
pub struct WorksOptions {
    /// API base URL; overrides `api.url` in the project config
    #[arg(long, env = "FOLIO_API_URL")]
    pub api_url: Option<String>,

    /// API token
    #[arg(long, env = "FOLIO_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}

/// Build a client from the command line, falling back to the project config.
fn client(session: &mut Session, opts: WorksOptions) -> Result<HttpContentApi> {
    let config = session.load_config()?;
    let url = opts
        .api_url
        .or_else(|| config.api.url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    if opts.token.is_none() {
        tracing::warn!("No API token set; requests are anonymous. Set FOLIO_TOKEN.");
    }
    Ok(HttpContentApi::new(url, opts.token))
}

/// List the works of the current user.
pub async fn list(mut session: Session, opts: WorksOptions) -> Result<()> {
    let api = client(&mut session, opts)?;
    let works = api.list_works().await?;

    if works.is_empty() {
        tracing::info!("You have no works yet.");
        return Ok(());
    }

    for work in &works {
        println!(
            "{:<24} {:<40} {} version(s)",
            work.id, work.title, work.version_count
        );
    }
    tracing::info!("{} work(s)", works.len());

    Ok(())
}

/// Print the latest saved version of a block.
pub async fn show(mut session: Session, block: &str, opts: WorksOptions) -> Result<()> {
    let block_id: BlockId = block.parse()?;
    let api = client(&mut session, opts)?;

    let latest = get_latest_version(&api, &block_id, &VersionQuery::default()).await?;

    println!("{} ({})", latest.block.title, latest.block.name);
    println!("  version: {}", latest.version.id);
    if let Some(date) = &latest.version.date_created {
        println!("  saved:   {}", date);
    }

    Ok(())
}
