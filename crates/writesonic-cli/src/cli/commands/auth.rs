//! `writesonic auth` - API key and default management.

use anyhow::{bail, Result};
use colored::Colorize;
use dialoguer::Password;
use tracing::warn;
use writesonic::{DEFAULT_COPIES, DEFAULT_ENGINE, DEFAULT_LANGUAGE};

use crate::cli::args::{AuthArgs, AuthCommands};
use crate::config::{credentials, Config, Overrides};

pub fn execute(overrides: &Overrides, args: AuthArgs) -> Result<()> {
    match args.command {
        AuthCommands::SetKey { key } => set_key(key),
        AuthCommands::Status => show_status(),
        AuthCommands::Logout => logout(),
        AuthCommands::Config => set_defaults(overrides),
    }
}

/// Load the config for a write, starting over if the current file is unusable.
fn load_for_update() -> Config {
    Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        Config::default()
    })
}

fn set_key(key: Option<String>) -> Result<()> {
    let key = match key {
        Some(key) => key,
        None => Password::new()
            .with_prompt("Writesonic API key")
            .interact()?,
    };

    let key = key.trim();
    if key.is_empty() {
        bail!("API key cannot be empty");
    }

    let mut config = load_for_update();
    config.api_key = Some(key.to_string());
    let path = config.save()?;

    println!("{} API key saved to {}", "Success:".green().bold(), path.display());
    println!(
        "{}",
        "You can now run: writesonic blog-ideas --topic \"AI in 2025\"".dimmed()
    );

    Ok(())
}

fn show_status() -> Result<()> {
    let config = Config::load()?;
    let path = Config::path()?;

    println!("{} {}", "Config file:     ".bold(), path.display());

    let Some(credential) = credentials::resolve(&config) else {
        println!("{} {}", "API key:         ".bold(), "not set".red());
        println!();
        println!("Run: writesonic auth set-key <your-key>");
        println!("Or:  export WRITESONIC_API_KEY=<your-key>");
        return Ok(());
    };

    println!(
        "{} {} ({})",
        "API key:         ".bold(),
        credential.masked(),
        credential.source
    );

    let engine = config.default_engine.map_or_else(
        || format!("{DEFAULT_ENGINE} {}", "(default)".dimmed()),
        |engine| engine.to_string(),
    );
    let language = config.language().map_or_else(
        || format!("{DEFAULT_LANGUAGE} {}", "(default)".dimmed()),
        String::from,
    );
    let copies = config.copies().map_or_else(
        || format!("{DEFAULT_COPIES} {}", "(default)".dimmed()),
        |copies| copies.to_string(),
    );

    println!("{} {}", "Default engine:  ".bold(), engine);
    println!("{} {}", "Default language:".bold(), language);
    println!("{} {}", "Default copies:  ".bold(), copies);

    Ok(())
}

fn logout() -> Result<()> {
    let path = Config::clear()?;
    println!(
        "{} Removed {}. Set a new key with: writesonic auth set-key <key>",
        "Success:".green().bold(),
        path.display()
    );
    Ok(())
}

fn set_defaults(overrides: &Overrides) -> Result<()> {
    let mut config = load_for_update();

    if !config.apply_defaults(overrides) {
        println!("No changes. Use --engine, --language, or --copies flags.");
        println!(
            "{}",
            "Example: writesonic auth config --engine premium --language fr --copies 3".dimmed()
        );
        return Ok(());
    }

    config.save()?;
    println!("{} Defaults updated.", "Success:".green().bold());

    Ok(())
}
