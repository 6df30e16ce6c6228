//! folioctl - Folio terminal portfolio
//!
//! Renders the portfolio sections and runs the chatbot, dev console and
//! contact form simulation.

use anyhow::{Context, Result};
use clap::Parser;
use folio_shared::config::FolioConfig;
use tracing::debug;

use folioctl::cli::Cli;
use folioctl::commands::{self, AppContext};
use folioctl::errors::{exit_code, EXIT_SUCCESS};
use folioctl::logging;
use folioctl::output::Style;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match run(cli).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {:#}", e);
            exit_code(&e)
        }
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<()> {
    let config = FolioConfig::load(cli.config.as_deref()).context("loading config")?;
    debug!(?config, "config resolved");

    let style = Style::detect(config.display.color, cli.no_color);
    let ctx = AppContext::new(config, style);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    commands::run(&ctx, cli.command, stdin.lock(), &mut stdout).await
}
