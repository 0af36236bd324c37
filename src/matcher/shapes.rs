//! Store URL shape definitions.
//!
//! Each recognized store page is described by a media kind (the host label),
//! an entity token (the first path segment after the country), and a
//! shape-specific extraction pattern. The pair (media, entity) selects
//! exactly one shape; everything else is unrecognized.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use strum_macros::{AsRefStr, EnumIter, EnumString};

// Shape pattern strings. All anchored at the scheme so unrelated path
// suffixes after the captured groups cannot prevent a match. The `name`
// segment is any single path segment; ids are decimal digit runs. For album
// and podcast pages the `i` query parameter names a nested item (track,
// episode) and may appear after any other query parameters.
const APP_URL_PATTERN: &str = r"^https?://apps\.apple\.com/[^/]*/app/[^/]*/id(?P<id>\d+)";
const ARTIST_URL_PATTERN: &str = r"^https?://music\.apple\.com/[^/]*/artist/[^/]*/(?P<id>\d+)";
const AUDIOBOOK_URL_PATTERN: &str =
    r"^https?://books\.apple\.com/[^/]*/audiobook/[^/]*/id(?P<id>\d+)";
const AUTHOR_URL_PATTERN: &str = r"^https?://books\.apple\.com/[^/]*/author/[^/]*/id(?P<id>\d+)";
const BOOK_URL_PATTERN: &str = r"^https?://books\.apple\.com/[^/]*/book/[^/]*/id(?P<id>\d+)";
const MUSIC_VIDEO_URL_PATTERN: &str =
    r"^https?://music\.apple\.com/[^/]*/music-video/[^/]*/(?P<id>\d+)";
const CHANNEL_URL_PATTERN: &str =
    r"^https?://podcasts\.apple\.com/[^/]*/channel/[^/]*/id(?P<id>\d+)";
const PODCAST_URL_PATTERN: &str =
    r"^https?://podcasts\.apple\.com/[^/]*/podcast/[^/]*/id(?P<id>\d+)(?:\?.*i=(?P<episode_id>\d+))?";
const ALBUM_URL_PATTERN: &str =
    r"^https?://music\.apple\.com/[^/]*/album/[^/]*/(?P<id>\d+)(?:\?.*i=(?P<track_id>\d+))?";

static APP_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(APP_URL_PATTERN).expect("Failed to compile app URL pattern - this is a bug")
});

static ARTIST_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ARTIST_URL_PATTERN).expect("Failed to compile artist URL pattern - this is a bug")
});

static AUDIOBOOK_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(AUDIOBOOK_URL_PATTERN)
        .expect("Failed to compile audiobook URL pattern - this is a bug")
});

static AUTHOR_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(AUTHOR_URL_PATTERN).expect("Failed to compile author URL pattern - this is a bug")
});

static BOOK_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(BOOK_URL_PATTERN).expect("Failed to compile book URL pattern - this is a bug")
});

static MUSIC_VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(MUSIC_VIDEO_URL_PATTERN)
        .expect("Failed to compile music video URL pattern - this is a bug")
});

static CHANNEL_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(CHANNEL_URL_PATTERN).expect("Failed to compile channel URL pattern - this is a bug")
});

static PODCAST_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PODCAST_URL_PATTERN).expect("Failed to compile podcast URL pattern - this is a bug")
});

static ALBUM_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ALBUM_URL_PATTERN).expect("Failed to compile album URL pattern - this is a bug")
});

/// Media kind encoded in the store host label (`music.apple.com` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Media {
    /// `apps.apple.com` hosts App Store pages.
    Apps,
    /// `books.apple.com` hosts books, audiobooks, and authors.
    Books,
    /// `music.apple.com` hosts albums, tracks, artists, and music videos.
    Music,
    /// `podcasts.apple.com` hosts podcasts, episodes, and channels.
    Podcasts,
}

/// One of the recognized store page shapes.
///
/// Selected exactly by the (media, entity) pair; each shape knows its
/// extraction pattern and whether a nested-item identifier takes precedence
/// over the page's own id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrlShape {
    /// `/{country}/app/{name}/id{id}`
    App,
    /// `/{country}/audiobook/{name}/id{id}`
    Audiobook,
    /// `/{country}/author/{name}/id{id}`
    Author,
    /// `/{country}/book/{name}/id{id}`
    Book,
    /// `/{country}/artist/{name}/{id}`
    Artist,
    /// `/{country}/music-video/{name}/{id}`
    MusicVideo,
    /// `/{country}/channel/{name}/id{id}`
    PodcastChannel,
    /// `/{country}/album/{name}/{id}`, optionally narrowed to a track by
    /// the `i` query parameter.
    Album,
    /// `/{country}/podcast/{name}/id{id}`, optionally narrowed to an
    /// episode by the `i` query parameter.
    Podcast,
}

impl UrlShape {
    /// Selects the shape for a (media, entity) pair, or `None` when the pair
    /// is not a recognized store page kind.
    ///
    /// App Store URLs carry their kind in the host alone, so any entity
    /// selects the app shape there.
    pub fn select(media: Media, entity: &str) -> Option<Self> {
        match (media, entity) {
            (Media::Apps, _) => Some(Self::App),
            (Media::Books, "audiobook") => Some(Self::Audiobook),
            (Media::Books, "author") => Some(Self::Author),
            (Media::Books, "book") => Some(Self::Book),
            (Media::Music, "artist") => Some(Self::Artist),
            (Media::Music, "music-video") => Some(Self::MusicVideo),
            (Media::Music, "album") => Some(Self::Album),
            (Media::Podcasts, "channel") => Some(Self::PodcastChannel),
            (Media::Podcasts, "podcast") => Some(Self::Podcast),
            _ => None,
        }
    }

    /// Runs this shape's extraction pattern against the URL.
    pub(crate) fn captures<'t>(&self, url: &'t str) -> Option<Captures<'t>> {
        match self {
            Self::App => APP_URL.captures(url),
            Self::Audiobook => AUDIOBOOK_URL.captures(url),
            Self::Author => AUTHOR_URL.captures(url),
            Self::Book => BOOK_URL.captures(url),
            Self::Artist => ARTIST_URL.captures(url),
            Self::MusicVideo => MUSIC_VIDEO_URL.captures(url),
            Self::PodcastChannel => CHANNEL_URL.captures(url),
            Self::Album => ALBUM_URL.captures(url),
            Self::Podcast => PODCAST_URL.captures(url),
        }
    }

    /// Name of the capture group holding the nested-item identifier, for the
    /// shapes that have one. When that group matched, its value wins over
    /// the primary id.
    pub(crate) fn secondary_group(&self) -> Option<&'static str> {
        match self {
            Self::Album => Some("track_id"),
            Self::Podcast => Some("episode_id"),
            _ => None,
        }
    }
}

/// Parses the media host label captured by the top-level pattern.
pub(crate) fn parse_media(label: &str) -> Option<Media> {
    Media::from_str(label).ok()
}
