mod cli;
mod db;
mod error;
mod importer;
mod models;
mod settings;

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use error::Result;
use settings::load_settings;

fn setup_tracing(level: &str) {
    let directive: Directive = level
        .parse()
        .unwrap_or_else(|_| LevelFilter::WARN.into());
    let filter = EnvFilter::builder()
        .with_default_directive(directive)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();
}

/// Settings and logging are only set up for an import; the sample and hint
/// paths touch nothing but their own output.
fn run(cli: Cli) -> Result<()> {
    if cli.sample {
        return cli::sample::run();
    }
    match cli.csv.as_deref() {
        Some(file) => {
            let settings = load_settings();
            setup_tracing(&settings.log_level);
            tracing::debug!(?settings, "settings loaded");
            cli::import::run(file, &settings)
        }
        None => {
            println!("{}", cli::USAGE_HINT);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
