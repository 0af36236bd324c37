//! Response payload shapes.

use serde::{Deserialize, Serialize};

/// The JSON payload returned by both the `search` and `lookup` endpoints:
/// `{"resultCount": n, "results": [...]}`.
///
/// Result entries are kept as raw JSON values; their fields vary widely by
/// media kind (track, collection, artist, ...) and are returned verbatim
/// without validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Number of entries in `results`.
    pub result_count: u64,
    /// The matched catalog entries, verbatim.
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
}
