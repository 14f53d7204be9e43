//! Rust client for the Writesonic content generation API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use writesonic::{BlogIdeas, GenerationSettings, WritesonicClient};
//!
//! #[tokio::main]
//! async fn main() -> writesonic::Result<()> {
//!     let client = WritesonicClient::new("your-api-key")?;
//!     let settings = GenerationSettings::default();
//!
//!     let ideas = client
//!         .blog()
//!         .ideas(&settings, &BlogIdeas {
//!             topic: "sustainable fashion".into(),
//!             primary_keyword: None,
//!         })
//!         .await?;
//!
//!     for idea in ideas {
//!         println!("{}", idea.text);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/writesonic/0.1.0")]

// Re-export core types
pub use writesonic_core::*;

// Re-export client
pub use writesonic_client::{api, WritesonicClient, WritesonicClientBuilder, DEFAULT_BASE_URL};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
