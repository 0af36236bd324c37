//! itunes_search library: a thin client for the iTunes Search API.
//!
//! This library builds query parameters, issues `search` or `lookup` requests
//! against `https://itunes.apple.com`, and decodes the JSON responses. It also
//! recognizes Apple store-page URLs (apps, albums, tracks, podcasts, episodes,
//! audiobooks, authors, books, music videos, artists, podcast channels) and
//! extracts the country code and numeric identifier, so a caller can pass a
//! store URL directly to `lookup` instead of a numeric ID.
//!
//! # Example
//!
//! ```no_run
//! use itunes_search::{Client, SearchOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new()?;
//! let response = client.search("the beatles", &SearchOptions::default()).await?;
//! println!("{} results", response.result_count);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod client;
pub mod config;
mod error;
pub mod matcher;
mod models;

// Re-export public API
pub use client::{Client, LookupKey, LookupOptions, SearchOptions};
pub use config::LogLevel;
pub use error::ClientError;
pub use matcher::{match_store_url, StoreMatch};
pub use models::SearchResponse;
