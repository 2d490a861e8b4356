use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod catalog;
pub mod config;
pub mod demo;
pub mod init;
pub mod logging;
pub mod version;
pub mod vote;

use config::ProxyvoteConfig;

#[derive(Parser)]
#[command(name = "proxyvote")]
#[command(author = "Proxyvote Project")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Shareholder vote processing with record-date cutoff", long_about = None)]
pub struct Cli {
    /// Path to config file (default: ~/.local/share/proxyvote/config.toml if present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bundled vote scenarios against one meeting
    Demo {
        /// Record date (YYYY-MM-DD), overrides the configured one
        #[arg(long)]
        record_date: Option<NaiveDate>,
    },

    /// Evaluate a single vote submission
    Vote {
        /// Shareholder casting the vote
        #[arg(long)]
        shareholder: String,

        /// Meeting the vote is for
        #[arg(long)]
        meeting: String,

        /// Proposal being voted on
        #[arg(long)]
        proposal: String,

        /// Date of the submission (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Record date (YYYY-MM-DD), overrides the configured one
        #[arg(long)]
        record_date: Option<NaiveDate>,

        /// Shareholder who has already voted in this meeting (repeatable)
        #[arg(long = "voted")]
        voted: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List meetings and their proposals
    Catalog,

    /// Write a default configuration file
    Init {
        /// Output path (default: ~/.local/share/proxyvote/config.toml)
        #[arg(long)]
        output: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Display version information
    Version,
}

pub fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // `init` and `version` must work without a readable config
    match cli.command {
        Commands::Init { output, force } => return init::execute(output, force),
        Commands::Version => {
            version::execute();
            return Ok(());
        }
        _ => {}
    }

    let config_path = cli.config.map(PathBuf::from);
    let config = ProxyvoteConfig::resolve(config_path.as_deref())?;
    logging::init(&config.logging)?;

    match cli.command {
        Commands::Demo { record_date } => demo::execute(&config, record_date),
        Commands::Vote {
            shareholder,
            meeting,
            proposal,
            date,
            record_date,
            voted,
            json,
        } => vote::execute(
            &config,
            vote::VoteArgs {
                shareholder,
                meeting,
                proposal,
                date,
                record_date,
                voted,
                json,
            },
        ),
        Commands::Catalog => catalog::execute(&config),
        Commands::Init { .. } | Commands::Version => Ok(()),
    }
}
