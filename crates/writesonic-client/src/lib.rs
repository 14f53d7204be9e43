//! HTTP client for the Writesonic content API.
//!
//! This crate provides the main [`WritesonicClient`] for interacting with the API.
//! Every call is a single authenticated POST; nothing is retried.

#![doc(html_root_url = "https://docs.rs/writesonic-client/0.1.0")]

mod client;
pub mod api;

pub use client::{WritesonicClient, WritesonicClientBuilder, DEFAULT_BASE_URL};
pub use writesonic_core::{Result, WritesonicError};
