//! Catalog client: request building and dispatch.
//!
//! The client turns a caller's intent (search term + options, or lookup key +
//! options) into exactly one outbound GET and returns the decoded payload or
//! propagates the failure. Each call is a single stateless request/response
//! cycle; there are no retries and no local recovery.

mod params;

use std::collections::BTreeMap;
use std::time::Duration;

use log::debug;
use reqwest::ClientBuilder;

use crate::config::{
    API_BASE_URL, HTTP_TIMEOUT_SECS, LOOKUP_ENDPOINT, SEARCH_ENDPOINT, USER_AGENT,
};
use crate::error::ClientError;
use crate::models::SearchResponse;

pub use params::{LookupKey, LookupOptions, SearchOptions};

/// Client for the iTunes Search API.
///
/// Holds a configured `reqwest::Client`, so connection pooling is reused
/// across calls. The client is `Send + Sync`; concurrent calls are fully
/// independent.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a client against the production API host.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the underlying HTTP client cannot be
    /// constructed.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Creates a client against a custom base URL (a proxy, or a local mock
    /// server in tests). A trailing slash on the base URL is ignored.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the underlying HTTP client cannot be
    /// constructed.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Searches the catalog for a term.
    ///
    /// Merges `options` over the default `{country: "us"}`, always sends the
    /// `explicit` parameter as `Yes`/`No`, and passes the term through
    /// without validation (an empty term is sent as-is).
    ///
    /// # Arguments
    ///
    /// * `term` - The text to search for
    /// * `options` - Optional query refinements (country, media, entity, ...)
    ///
    /// # Errors
    ///
    /// [`ClientError::RequestFailed`] on a non-success HTTP status,
    /// [`ClientError::Transport`] on a network or JSON-decode failure.
    pub async fn search(
        &self,
        term: &str,
        options: &SearchOptions,
    ) -> Result<SearchResponse, ClientError> {
        let mut request_params = params::default_params();
        options.apply(&mut request_params);
        request_params.insert(
            "explicit".to_string(),
            if options.explicit { "Yes" } else { "No" }.to_string(),
        );
        request_params.insert("term".to_string(), term.to_string());

        self.fetch(SEARCH_ENDPOINT, &request_params).await
    }

    /// Looks up catalog entries by an identifying key.
    ///
    /// Merge precedence, lowest to highest: defaults, then `options`, then
    /// the resolved key/value. A [`LookupKey::Url`] is resolved through the
    /// URL matcher first; when the URL is unrecognized the request is still
    /// sent with the merged options only, and the service decides what to do
    /// with it.
    ///
    /// # Arguments
    ///
    /// * `key` - The identifying field (catalog id, UPC, ISBN, store URL, ...)
    /// * `options` - Optional query refinements (country, entity, limit)
    ///
    /// # Errors
    ///
    /// [`ClientError::RequestFailed`] on a non-success HTTP status,
    /// [`ClientError::Transport`] on a network or JSON-decode failure.
    pub async fn lookup(
        &self,
        key: &LookupKey,
        options: &LookupOptions,
    ) -> Result<SearchResponse, ClientError> {
        let mut request_params = params::default_params();
        options.apply(&mut request_params);
        key.apply(&mut request_params);

        self.fetch(LOOKUP_ENDPOINT, &request_params).await
    }

    async fn fetch(
        &self,
        endpoint: &str,
        request_params: &BTreeMap<String, String>,
    ) -> Result<SearchResponse, ClientError> {
        let url = format!(
            "{}/{}?{}",
            self.base_url,
            endpoint,
            params::encode_query(request_params)
        );
        debug!("GET {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::RequestFailed { status });
        }

        Ok(response.json().await?)
    }
}
