use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::{check_config, serve};

#[derive(Parser)]
#[command(name = "orgfin")]
#[command(about = "Static host for the OrgFin organization finance dashboard")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./orgfin.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the frontend bundle
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Directory with the built frontend (must contain the index file)
        #[arg(short, long)]
        static_dir: Option<PathBuf>,
    },
    /// Print the resolved configuration and check the bundle exists
    CheckConfig,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve {
                bind_address,
                static_dir,
            } => {
                serve(self.config.as_deref(), bind_address, static_dir).await?;
            }
            Commands::CheckConfig => {
                check_config(self.config.as_deref())?;
            }
        }
        Ok(())
    }
}
