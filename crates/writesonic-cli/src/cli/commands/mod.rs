//! Command implementations.

pub mod article;
pub mod auth;
pub mod blog;
pub mod copy;
pub mod landing;
pub mod rewrite;
pub mod write;

use anyhow::Result;
use tracing::debug;
use writesonic::{ContentRequest, GenerationSettings, WritesonicClient, WritesonicError};

use crate::cli::args::GenerateCommands;
use crate::config::Credential;
use crate::output::{OutputMode, Renderer};

/// Shared context for all generation commands, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved API key
    pub credential: Option<Credential>,

    /// Engine, language and copy count for this run
    pub settings: GenerationSettings,

    /// Output mode
    pub output: OutputMode,

    /// API base URL override
    pub base_url: Option<String>,
}

impl Context {
    /// Get the API key, returning an error if none was resolved.
    pub fn require_api_key(&self) -> Result<&str, WritesonicError> {
        self.credential
            .as_ref()
            .map(|c| c.key.as_str())
            .ok_or(WritesonicError::MissingApiKey)
    }

    /// Create a client with the resolved API key.
    pub fn client(&self) -> Result<WritesonicClient> {
        let key = self.require_api_key()?;
        let mut builder = WritesonicClient::builder(key);
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.as_str());
        }
        Ok(builder.build()?)
    }

    /// Send `request`, then render the decoded results to stdout.
    pub async fn generate<R: ContentRequest>(&self, request: &R) -> Result<()> {
        let client = self.client()?;

        debug!(
            path = R::PATH,
            engine = %self.settings.engine,
            language = %self.settings.language,
            copies = self.settings.copies,
            "generating"
        );
        let generated = client.generate(&self.settings, request).await?;
        debug!(results = generated.len(), "received results");

        let stdout = std::io::stdout();
        Renderer::new(stdout.lock()).render(&generated, self.output)
    }
}

/// Dispatch a generation command.
pub async fn execute(ctx: &Context, command: GenerateCommands) -> Result<()> {
    match command {
        GenerateCommands::BlogIdeas(args) => blog::execute(ctx, args).await,
        GenerateCommands::Article(args) => article::execute(ctx, args).await,
        GenerateCommands::Landing(args) => landing::execute(ctx, args).await,
        GenerateCommands::Copy(args) => copy::execute(ctx, args).await,
        GenerateCommands::Rewrite(args) => rewrite::execute(ctx, args).await,
        GenerateCommands::Write(args) => write::execute(ctx, args).await,
    }
}

/// Treat an empty optional flag as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
