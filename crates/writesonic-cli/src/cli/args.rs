//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use writesonic::Engine;

use crate::config::Overrides;

/// Writesonic CLI: AI content generation at your fingertips
///
/// Generate blog ideas, articles, landing pages, and more from your terminal.
/// Output is JSON whenever stdout is piped or redirected.
///
/// Set your API key with `writesonic auth set-key <KEY>` or the
/// WRITESONIC_API_KEY environment variable.
#[derive(Parser, Debug)]
#[command(name = "writesonic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Output as pretty-printed JSON
    #[arg(long, global = true)]
    pub pretty: bool,

    /// AI engine: economy, average, good, premium (default from config)
    #[arg(long, global = true)]
    pub engine: Option<Engine>,

    /// Language code, e.g. en, fr, de (default from config)
    #[arg(long = "lang", visible_alias = "language", global = true)]
    pub language: Option<String>,

    /// Number of copies to generate, 1-5 (default from config)
    #[arg(long, global = true)]
    pub copies: Option<u32>,

    /// Log requests and responses to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the API base URL
    #[arg(long, env = "WRITESONIC_BASE_URL", global = true, hide = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Per-invocation overrides of the stored defaults.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            engine: self.engine,
            language: self.language.clone(),
            copies: self.copies,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage Writesonic API authentication and defaults
    Auth(AuthArgs),

    #[command(flatten)]
    Generate(GenerateCommands),
}

/// Commands that call the content API.
#[derive(Subcommand, Debug)]
pub enum GenerateCommands {
    /// Generate blog post ideas for a topic
    BlogIdeas(BlogIdeasArgs),

    /// Generate full articles
    Article(ArticleArgs),

    /// Generate landing page copy
    Landing(LandingArgs),

    /// Generate marketing copy (PAS, AIDA, CTA, bullets)
    Copy(CopyArgs),

    /// Transform existing content (rephrase, shorten, tone, keywords)
    Rewrite(RewriteArgs),

    /// Write specific content pieces (paragraphs, meta tags, conclusions)
    Write(WriteArgs),
}

// ============================================================================
// Auth command
// ============================================================================

#[derive(Args, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommands,
}

#[derive(Subcommand, Debug)]
pub enum AuthCommands {
    /// Save your Writesonic API key (prompts when KEY is omitted)
    SetKey {
        /// API key to store
        key: Option<String>,
    },

    /// Show current authentication status
    Status,

    /// Remove the stored configuration
    Logout,

    /// Store the given --engine, --language and --copies as defaults
    Config,
}

// ============================================================================
// Blog command
// ============================================================================

#[derive(Args, Debug)]
pub struct BlogIdeasArgs {
    /// Topic to generate ideas for
    #[arg(long)]
    pub topic: String,

    /// Primary keyword to focus on
    #[arg(long)]
    pub keyword: Option<String>,
}

// ============================================================================
// Article command
// ============================================================================

#[derive(Args, Debug)]
pub struct ArticleArgs {
    #[command(subcommand)]
    pub command: ArticleCommands,
}

#[derive(Subcommand, Debug)]
pub enum ArticleCommands {
    /// Generate a long-form SEO article (AI Article Writer v3)
    Write {
        /// Article title
        #[arg(long)]
        title: String,

        /// Article introduction
        #[arg(long)]
        intro: String,

        /// Comma-separated section titles
        #[arg(long)]
        sections: String,
    },

    /// Generate a 1500-word article instantly
    Instant {
        /// Article title
        #[arg(long)]
        title: String,
    },
}

// ============================================================================
// Landing command
// ============================================================================

#[derive(Args, Debug)]
pub struct LandingArgs {
    #[command(subcommand)]
    pub command: LandingCommands,
}

#[derive(Subcommand, Debug)]
pub enum LandingCommands {
    /// Generate full landing page copy with features and CTAs
    Page {
        /// Product or service name
        #[arg(long)]
        name: String,

        /// Product description
        #[arg(long)]
        desc: String,

        /// Feature 1
        #[arg(long = "f1")]
        feature_1: String,

        /// Feature 2
        #[arg(long = "f2")]
        feature_2: String,

        /// Feature 3
        #[arg(long = "f3")]
        feature_3: String,
    },

    /// Generate catchy landing page headlines
    Headline {
        /// Product or service name
        #[arg(long)]
        name: String,

        /// Product description
        #[arg(long)]
        desc: String,
    },
}

// ============================================================================
// Copy command
// ============================================================================

#[derive(Args, Debug)]
pub struct CopyArgs {
    #[command(subcommand)]
    pub command: CopyCommands,
}

#[derive(Subcommand, Debug)]
pub enum CopyCommands {
    /// Pain-Agitate-Solution framework copy
    Pas {
        /// Product or service name
        #[arg(long)]
        name: String,

        /// Product description
        #[arg(long)]
        desc: String,
    },

    /// Attention-Interest-Desire-Action framework copy
    Aida {
        /// Product or service name
        #[arg(long)]
        name: String,

        /// Product description
        #[arg(long)]
        desc: String,
    },

    /// Generate eye-catching calls to action
    Cta {
        /// Product or service name
        #[arg(long)]
        name: String,
    },

    /// Generate bullet-point answers
    Bullets {
        /// Question or topic to answer
        #[arg(long)]
        question: String,
    },
}

// ============================================================================
// Rewrite command
// ============================================================================

#[derive(Args, Debug)]
pub struct RewriteArgs {
    #[command(subcommand)]
    pub command: RewriteCommands,
}

#[derive(Subcommand, Debug)]
pub enum RewriteCommands {
    /// Rephrase content in a different style
    Rephrase {
        /// Content to rephrase (20-1000 chars)
        #[arg(long)]
        content: String,

        /// Desired tone of voice
        #[arg(long)]
        tone: Option<String>,
    },

    /// Shorten content while keeping the message
    Shorten {
        /// Content to shorten (20-1000 chars)
        #[arg(long)]
        content: String,

        /// Desired tone of voice
        #[arg(long)]
        tone: Option<String>,
    },

    /// Change the tone of existing content
    Tone {
        /// Content to transform
        #[arg(long)]
        content: String,

        /// Target tone, e.g. formal, casual, professional
        #[arg(long)]
        tone: String,
    },

    /// Rewrite content with target SEO keywords
    Keywords {
        /// Content to rewrite
        #[arg(long)]
        content: String,

        /// Comma-separated target keywords
        #[arg(long)]
        keywords: String,
    },
}

// ============================================================================
// Write command
// ============================================================================

#[derive(Args, Debug)]
pub struct WriteArgs {
    #[command(subcommand)]
    pub command: WriteCommands,
}

#[derive(Subcommand, Debug)]
pub enum WriteCommands {
    /// Write a structured, persuasive paragraph
    Paragraph {
        /// Topic to write about
        #[arg(long)]
        topic: String,

        /// Additional instructions
        #[arg(long)]
        instructions: Option<String>,
    },

    /// Generate SEO meta title and description for a blog post
    Meta {
        /// Blog post title
        #[arg(long)]
        title: String,

        /// Blog post description
        #[arg(long)]
        desc: String,
    },

    /// Write a compelling conclusion for an article
    Conclusion {
        /// Article topic to conclude
        #[arg(long)]
        topic: String,
    },
}
