//! writesonic - AI content generation from the terminal
//!
//! A command-line interface for the Writesonic content API.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    writesonic_cli::run().await
}
