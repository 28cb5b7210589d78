use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use browser_setup::{
    commands,
    core::{
        config::Config,
        download::{Downloader, HttpTransport},
        platform::OsFamily,
    },
};

#[derive(Parser)]
#[clap(name = "browser-setup")]
#[clap(about = "Download the Flash plugin and Ruffle bundle for Minimalist Browser")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Directory that plugins/ and assets/ are created in
    #[clap(long, global = true, default_value = ".")]
    dir: PathBuf,

    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Download and install all resources (default)
    Setup {
        /// Platform to fetch the plugin for (e.g., windows, linux)
        #[clap(long)]
        platform: Option<String>,
    },
    /// Check which resources are already installed
    Check {
        /// Platform to check the plugin for (e.g., windows, linux)
        #[clap(long)]
        platform: Option<String>,
    },
    /// List the resources this tool knows about
    List,
}

fn os_family(platform: Option<&str>) -> OsFamily {
    platform
        .map(OsFamily::from_name)
        .unwrap_or_else(OsFamily::detect)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.dir);
    let mut stdout = std::io::stdout().lock();

    let result = match cli.command.unwrap_or(Commands::Setup { platform: None }) {
        Commands::Setup { platform } => {
            let family = os_family(platform.as_deref());
            let downloader = Downloader::new(HttpTransport::new());
            commands::setup::run_setup(&config, &family, &downloader, &mut stdout)
                .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Check { platform } => {
            let family = os_family(platform.as_deref());
            commands::check::check_resources(&config, &family, &mut stdout)
                .map(|_| ())
                .map_err(|e| anyhow::anyhow!(e))
        }
        Commands::List => {
            commands::list::list_resources(&mut stdout).map_err(|e| anyhow::anyhow!(e))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
