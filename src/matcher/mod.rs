//! Store-page URL recognition.
//!
//! This module classifies a URL string against the known family of Apple
//! store-page shapes and extracts the country storefront code and the numeric
//! catalog identifier. It is a pure function over arbitrary strings: no I/O,
//! no state, and no error channel; anything unrecognized is `None`.
//!
//! Recognition runs in two stages. A top-level pattern pulls the media host
//! label, country, and entity token out of the URL; the (media, entity) pair
//! then selects exactly one shape-specific pattern that extracts the id. For
//! album and podcast pages a nested-item id (`?i=...`, a track or episode)
//! takes precedence over the page's own id, so a URL pointing at a specific
//! track resolves to that track rather than its containing album.

mod shapes;

use std::sync::LazyLock;

use regex::Regex;

pub use shapes::{Media, UrlShape};

/// Top-level classification pattern: media host label, country storefront,
/// and entity token. Country is restricted to lowercase letters and entity
/// to lowercase letters and hyphens, so multi-segment tokens are excluded by
/// construction.
const STORE_URL_PATTERN: &str =
    r"^https?://(?P<media>(?:apps|books|music|podcasts|))\.apple\.com/(?P<country>[a-z]+)/(?P<entity>[a-z-]+)";

static STORE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(STORE_URL_PATTERN).expect("Failed to compile store URL pattern - this is a bug")
});

/// Identifiers extracted from a recognized store-page URL.
///
/// The id never travels without the country that scoped it: both fields come
/// from the same URL parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreMatch {
    /// Country storefront code from the URL path (e.g. `us`).
    pub country: String,
    /// Numeric catalog identifier. For album and podcast pages with an `i`
    /// query parameter this is the nested track/episode id.
    pub id: u64,
}

/// Classifies a URL and extracts its country code and catalog id.
///
/// Returns `None` for anything that is not a recognized store page: wrong
/// host, unknown (media, entity) combination, or a matching shape with no
/// extractable numeric id. A country without an id is not actionable, so it
/// behaves identically to no match. Unparseable input is never an error.
///
/// # Arguments
///
/// * `url` - An arbitrary string, expected to be a URL but not required to
///   be well-formed.
///
/// # Returns
///
/// `Some(StoreMatch)` with the country and the most specific applicable id,
/// or `None`.
pub fn match_store_url(url: &str) -> Option<StoreMatch> {
    let caps = STORE_URL.captures(url)?;
    let media = non_empty(caps.name("media"))?;
    let country = non_empty(caps.name("country"))?;
    let entity = non_empty(caps.name("entity"))?;

    let media = shapes::parse_media(media)?;
    let shape = UrlShape::select(media, entity)?;

    let caps = shape.captures(url)?;
    let id = shape
        .secondary_group()
        .and_then(|group| caps.name(group))
        .or_else(|| caps.name("id"))?
        .as_str()
        .parse::<u64>()
        .ok()?;

    Some(StoreMatch {
        country: country.to_string(),
        id,
    })
}

fn non_empty<'t>(capture: Option<regex::Match<'t>>) -> Option<&'t str> {
    capture.map(|m| m.as_str()).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
