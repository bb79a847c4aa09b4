//! folio CLI - publish Markdown and notebook projects to the web.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_site::Session;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::web::{BuildOptions, DeployOptions, StartOptions};
use commands::works::WorksOptions;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Publish Markdown and notebook projects to the web")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the folio.yml project config
    #[arg(short = 'C', long, default_value = "folio.yml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build, preview and deploy the project website
    Web {
        #[command(subcommand)]
        command: WebCommand,
    },

    /// Create and manage your Works
    Works {
        #[command(subcommand)]
        command: WorksCommand,
    },
}

#[derive(Subcommand)]
enum WebCommand {
    /// Start a local project as a web server
    Start(StartOptions),

    /// Build the site configuration for the web server
    Build(BuildOptions),

    /// Build and copy the site to its deploy destination
    Deploy(DeployOptions),
}

#[derive(Subcommand)]
enum WorksCommand {
    /// List your Works
    List(WorksOptions),

    /// Show the latest saved version of a block
    Show {
        /// Block id as project/block
        block: String,

        #[command(flatten)]
        options: WorksOptions,
    },
}

impl Commands {
    /// Whether the command runs in CI mode (plain log output).
    fn ci(&self) -> bool {
        match self {
            Commands::Web {
                command: WebCommand::Build(opts),
            } => opts.ci,
            Commands::Web {
                command: WebCommand::Deploy(opts),
            } => opts.ci,
            _ => false,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.command.ci())
        .init();

    let session = Session::new(cli.config);

    // Execute command
    match cli.command {
        Commands::Web { command } => match command {
            WebCommand::Start(opts) => commands::web::start(session, opts).await?,
            WebCommand::Build(opts) => commands::web::build(session, opts)?,
            WebCommand::Deploy(opts) => commands::web::deploy(session, opts)?,
        },
        Commands::Works { command } => match command {
            WorksCommand::List(opts) => commands::works::list(session, opts).await?,
            WorksCommand::Show { block, options } => {
                commands::works::show(session, &block, options).await?
            }
        },
    }

    Ok(())
}
