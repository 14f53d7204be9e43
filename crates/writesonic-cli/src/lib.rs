//! # writesonic-cli
//!
//! Command-line interface for the Writesonic content generation API.
//!
//! ## Features
//!
//! - **Content generation**: blog ideas, articles, landing pages, marketing
//!   copy, rewriting and short-form writing
//! - **Pipeline friendly**: JSON whenever stdout is not a terminal
//! - **Persistent defaults**: API key, engine, language and copy count
//!   stored in the user config directory

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
