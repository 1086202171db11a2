//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use tudo_core::config::{Config, paths};
use tudo_tui::AppOptions;

use crate::logging;

#[derive(Parser)]
#[command(name = "tudo")]
#[command(version)]
#[command(about = "Terminal client for the tudo task service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// API base URL (overrides config)
    #[arg(long, env = "TUDO_BASE_URL")]
    base_url: Option<String>,

    /// Sync the task list with the remote API
    #[arg(long, conflicts_with = "local")]
    remote: bool,

    /// Run on local demo data even if config enables sync
    #[arg(long)]
    local: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                println!("{}", paths::config_path().display());
                Ok(())
            }
            ConfigCommands::Init => {
                let path = paths::config_path();
                Config::init(&path)?;
                println!("Created config at {}", path.display());
                Ok(())
            }
        },

        // default to the interactive app
        None => {
            let config = Config::load().context("load config")?;
            let _log_guard = logging::init(&config).context("init logging")?;

            let base_url = config.resolve_base_url(cli.base_url.as_deref())?;
            let remote = if cli.local {
                false
            } else {
                cli.remote || config.remote
            };
            tracing::info!(%base_url, remote, "starting tudo");

            tudo_tui::run_app(AppOptions { base_url, remote }).await
        }
    }
}
