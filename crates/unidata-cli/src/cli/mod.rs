//! CLI for the unidata table refresh tool.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unidata_core::config;

use commands::{run_refresh, run_status};

/// Top-level CLI for unidata.
#[derive(Debug, Parser)]
#[command(name = "unidata")]
#[command(about = "Refresh cached Unicode IDNA data tables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Wipe the cache directories and download the current tables.
    /// This is the default when no subcommand is given.
    Refresh {
        /// Base URL the table files are fetched from.
        #[arg(long, value_name = "URL")]
        url_prefix: Option<String>,

        /// Directory for the mapping-table files.
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,

        /// Directory for the conformance test files.
        #[arg(long, value_name = "DIR")]
        test_data_dir: Option<PathBuf>,
    },

    /// List the cached table files without touching the network.
    Status,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let command = cli.command.unwrap_or(CliCommand::Refresh {
            url_prefix: None,
            data_dir: None,
            test_data_dir: None,
        });

        match command {
            CliCommand::Refresh {
                url_prefix,
                data_dir,
                test_data_dir,
            } => {
                if let Some(prefix) = url_prefix {
                    cfg.url_prefix = prefix;
                }
                if let Some(dir) = data_dir {
                    cfg.data_dir = dir;
                }
                if let Some(dir) = test_data_dir {
                    cfg.test_data_dir = dir;
                }
                run_refresh(&cfg)?;
            }
            CliCommand::Status => run_status(&cfg)?,
        }

        Ok(())
    }
}
