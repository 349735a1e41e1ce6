//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use labsite_core::Role;

/// labsite - static website generator for a research group
#[derive(Parser, Debug)]
#[command(name = "labsite")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "LABSITE_CONFIG", global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the whole site into the output directory
    Build {
        /// Override the configured output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the roster rows for one role, or for every role
    Roster {
        /// Role tag (PI or RA)
        #[arg(short, long)]
        role: Option<Role>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Load every input and report problems without writing anything
    Check,
    /// Inspect or edit the configuration file
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the config file path
    Path,
    /// Print the value of a dotted key
    Get {
        /// Dotted key, e.g. `roster.headings.pi`
        key: String,
    },
    /// Set a dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value
        value: String,
    },
    /// Write a default config file
    Init {
        /// Where to write it (defaults to the resolved config path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
