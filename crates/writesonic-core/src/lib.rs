//! Core types and traits for the Writesonic content API client.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - **Types**: generation settings, per-operation request bodies and the two
//!   result shapes the content API returns
//! - **Decoding**: strict decoders from raw response bytes into those shapes
//! - **Errors**: the full error taxonomy in [`WritesonicError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use writesonic_core::{decode_text_results, Result};
//!
//! fn first_idea(body: &[u8]) -> Result<Option<String>> {
//!     let results = decode_text_results(body)?;
//!     Ok(results.into_iter().next().map(|r| r.text))
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/writesonic-core/0.1.0")]

mod decode;
mod error;
pub mod types;

pub use decode::{decode, decode_landing_pages, decode_text_results};
pub use error::{Result, WritesonicError};
pub use types::*;
