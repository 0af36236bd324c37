//! Configuration constants.
//!
//! This module defines the constants used throughout the client: the API
//! host, endpoint names, default parameters, and transport settings.

/// Base URL of the iTunes Search API. All requests are GETs against
/// `{API_BASE_URL}/{endpoint}?{query}`.
pub const API_BASE_URL: &str = "https://itunes.apple.com";

/// Endpoint for keyword search requests.
pub const SEARCH_ENDPOINT: &str = "search";

/// Endpoint for direct-lookup requests (by id, UPC, ISBN, ...).
pub const LOOKUP_ENDPOINT: &str = "lookup";

/// Country storefront used when the caller supplies none.
pub const DEFAULT_COUNTRY: &str = "us";

/// Per-request timeout in seconds.
/// The API itself imposes no cancellation; this is the only guard against a
/// hung connection.
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// User-Agent header sent with every request.
pub const USER_AGENT: &str = concat!("itunes_search/", env!("CARGO_PKG_VERSION"));
