//! Request parameter assembly.
//!
//! Parameters are collected into an ordered map with an explicit merge order,
//! lowest precedence first: hardcoded defaults, then caller options, then the
//! resolved lookup key/value. Later inserts overwrite earlier ones, which
//! keeps the precedence auditable and the resulting query deterministic.

use std::collections::BTreeMap;

use log::warn;
use url::form_urlencoded;

use crate::config::DEFAULT_COUNTRY;
use crate::matcher::match_store_url;

/// Options accepted by [`crate::Client::search`].
///
/// Every field is optional except `explicit`, which the API always receives
/// as a literal `Yes`/`No`. Unset fields contribute no parameter; `media`,
/// `entity`, and `attribute` take the token values documented by the API and
/// are passed through unvalidated.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Country storefront code (defaults to `us`)
    pub country: Option<String>,

    /// Media kind to search within (e.g. `music`, `podcast`, `software`)
    pub media: Option<String>,

    /// Result entity type relative to the media kind (e.g. `album`, `song`)
    pub entity: Option<String>,

    /// Attribute the term is matched against (e.g. `artistTerm`)
    pub attribute: Option<String>,

    /// Maximum number of results to return
    pub limit: Option<u32>,

    /// Language of the response (e.g. `en_us`)
    pub lang: Option<String>,

    /// Whether explicit content may be included; sent as `Yes`/`No`
    pub explicit: bool,
}

impl SearchOptions {
    pub(crate) fn apply(&self, params: &mut BTreeMap<String, String>) {
        apply_param(params, "country", self.country.as_deref());
        apply_param(params, "media", self.media.as_deref());
        apply_param(params, "entity", self.entity.as_deref());
        apply_param(params, "attribute", self.attribute.as_deref());
        apply_param(params, "limit", self.limit.map(|l| l.to_string()).as_deref());
        apply_param(params, "lang", self.lang.as_deref());
    }
}

/// Options accepted by [`crate::Client::lookup`].
#[derive(Debug, Clone, Default)]
pub struct LookupOptions {
    /// Country storefront code (defaults to `us`; overridden by the country
    /// resolved from a store URL)
    pub country: Option<String>,

    /// Result entity type for the returned records (e.g. `album`)
    pub entity: Option<String>,

    /// Maximum number of results to return
    pub limit: Option<u32>,
}

impl LookupOptions {
    pub(crate) fn apply(&self, params: &mut BTreeMap<String, String>) {
        apply_param(params, "country", self.country.as_deref());
        apply_param(params, "entity", self.entity.as_deref());
        apply_param(params, "limit", self.limit.map(|l| l.to_string()).as_deref());
    }
}

/// The identifying field of a direct-lookup request.
///
/// Each variant maps to one wire parameter, except [`LookupKey::Url`], which
/// is first resolved through the URL matcher into a catalog id and country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// Catalog id (`id=...`) for tracks, collections, artists, apps, ...
    Id(u64),
    /// AMG artist id (`amgArtistId=...`)
    AmgArtistId(u64),
    /// AMG album id (`amgAlbumId=...`)
    AmgAlbumId(u64),
    /// AMG video id (`amgVideoId=...`)
    AmgVideoId(u64),
    /// UPC/EAN barcode (`upc=...`)
    Upc(String),
    /// ISBN (`isbn=...`)
    Isbn(String),
    /// A store-page URL to resolve into a catalog id and country. An
    /// unrecognized URL contributes no parameters at all; the request is
    /// still sent with the merged options only.
    Url(String),
}

impl LookupKey {
    pub(crate) fn apply(&self, params: &mut BTreeMap<String, String>) {
        match self {
            Self::Id(id) => {
                params.insert("id".to_string(), id.to_string());
            }
            Self::AmgArtistId(id) => {
                params.insert("amgArtistId".to_string(), id.to_string());
            }
            Self::AmgAlbumId(id) => {
                params.insert("amgAlbumId".to_string(), id.to_string());
            }
            Self::AmgVideoId(id) => {
                params.insert("amgVideoId".to_string(), id.to_string());
            }
            Self::Upc(upc) => {
                params.insert("upc".to_string(), upc.clone());
            }
            Self::Isbn(isbn) => {
                params.insert("isbn".to_string(), isbn.clone());
            }
            Self::Url(url) => match match_store_url(url) {
                Some(store_match) => {
                    // Both come from the same URL parse; the resolved country
                    // overrides any caller-supplied one
                    params.insert("country".to_string(), store_match.country);
                    params.insert("id".to_string(), store_match.id.to_string());
                }
                None => {
                    warn!("Not a recognized store URL, sending lookup with default parameters: {url}");
                }
            },
        }
    }
}

/// The lowest-precedence parameter layer shared by both endpoints.
pub(crate) fn default_params() -> BTreeMap<String, String> {
    BTreeMap::from([("country".to_string(), DEFAULT_COUNTRY.to_string())])
}

/// Serializes the parameter map as an application/x-www-form-urlencoded
/// query string (spaces become `+`).
pub(crate) fn encode_query(params: &BTreeMap<String, String>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in params {
        serializer.append_pair(name, value);
    }
    serializer.finish()
}

fn apply_param(params: &mut BTreeMap<String, String>, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        params.insert(name.to_string(), value.to_string());
    }
}
