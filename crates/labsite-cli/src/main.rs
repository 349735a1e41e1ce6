//! labsite CLI
//!
//! Builds the research group website from Markdown pages, the roster store,
//! and the software-links list.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use labsite_cli::cli::{Cli, Command};
use labsite_cli::commands::{cmd_build, cmd_check, cmd_roster, exit_code};
use labsite_cli::config_handlers::handle_config_command;
use labsite_cli::{Error, SiteConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            // Bad site inputs and environment failures exit differently.
            let code = e.downcast_ref::<Error>().map_or(1, exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Command::Config { action } => {
            handle_config_command(config_path, action)?;
        }
        Command::Build { output } => {
            let config = SiteConfig::load(config_path).context("Failed to load configuration")?;
            let report = cmd_build(&config, output.as_deref()).context("Build failed")?;
            tracing::info!(
                pages = report.pages_written,
                assets = report.assets_copied,
                "Site written to {}",
                report.output_dir.display()
            );
        }
        Command::Roster { role, json } => {
            let config = SiteConfig::load(config_path).context("Failed to load configuration")?;
            cmd_roster(&config, role, json)?;
        }
        Command::Check => {
            let config = SiteConfig::load(config_path).context("Failed to load configuration")?;
            let report = cmd_check(&config).context("Check failed")?;
            println!("pages: {}", report.pages);
            for (role, count) in &report.members {
                println!("{role}: {count}");
            }
            match report.links {
                Some(n) => println!("software links: {n}"),
                None => println!("software links: (no list)"),
            }
            println!("ok");
        }
    }

    Ok(())
}
