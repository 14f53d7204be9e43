//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{credentials, Config};
use crate::output::{OutputMode, StdoutProbe};

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let overrides = cli.overrides();

    let command = match cli.command {
        // Auth commands manage credentials, so they never require one
        Commands::Auth(args) => return commands::auth::execute(&overrides, args),
        Commands::Generate(command) => command,
    };

    // Load configuration
    let config = Config::load()?;

    // Get API key from env aliases or config
    let credential = credentials::resolve(&config);
    if let Some(credential) = &credential {
        debug!(source = %credential.source, "resolved API key");
    }

    let ctx = commands::Context {
        credential,
        settings: config.generation_settings(&overrides),
        output: OutputMode::select(cli.json, cli.pretty, &StdoutProbe),
        base_url: cli.base_url,
    };

    commands::execute(&ctx, command).await
}

/// Log to stderr so stdout stays clean for JSON consumers.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "writesonic_client=debug,writesonic_cli=debug,warn"
    } else {
        "error"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Only fails if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
