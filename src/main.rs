//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `itunes_search` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::process;

use itunes_search::{Client, LogLevel, LookupKey, LookupOptions, SearchOptions, SearchResponse};

#[derive(Parser)]
#[command(name = "itunes_search", version, about = "Query the iTunes Search API")]
struct Cli {
    /// Log level (RUST_LOG is respected; this flag overrides it)
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the catalog for a term
    Search {
        /// The text to search for
        term: String,

        /// Country storefront code (default: us)
        #[arg(long)]
        country: Option<String>,

        /// Media kind to search within (e.g. music, podcast, software)
        #[arg(long)]
        media: Option<String>,

        /// Result entity type (e.g. album, song, podcastEpisode)
        #[arg(long)]
        entity: Option<String>,

        /// Attribute the term is matched against (e.g. artistTerm)
        #[arg(long)]
        attribute: Option<String>,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<u32>,

        /// Response language (e.g. en_us)
        #[arg(long)]
        lang: Option<String>,

        /// Include explicit content in the results
        #[arg(long)]
        explicit: bool,
    },

    /// Look up catalog entries by an identifying key or store URL
    Lookup {
        /// The kind of identifier being supplied
        #[arg(value_enum)]
        kind: LookupKind,

        /// The identifier value (numeric id, UPC, ISBN, or a store URL)
        value: String,

        /// Country storefront code (default: us)
        #[arg(long)]
        country: Option<String>,

        /// Result entity type for the returned records
        #[arg(long)]
        entity: Option<String>,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<u32>,
    },
}

/// CLI spelling of the lookup key kinds.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LookupKind {
    /// Catalog id
    Id,
    /// AMG artist id
    AmgArtistId,
    /// AMG album id
    AmgAlbumId,
    /// AMG video id
    AmgVideoId,
    /// UPC/EAN barcode
    Upc,
    /// ISBN
    Isbn,
    /// Store-page URL
    Url,
}

fn resolve_key(kind: LookupKind, value: String) -> Result<LookupKey> {
    let numeric = |value: &str| {
        value
            .parse::<u64>()
            .with_context(|| format!("'{value}' is not a numeric identifier"))
    };
    Ok(match kind {
        LookupKind::Id => LookupKey::Id(numeric(&value)?),
        LookupKind::AmgArtistId => LookupKey::AmgArtistId(numeric(&value)?),
        LookupKind::AmgAlbumId => LookupKey::AmgAlbumId(numeric(&value)?),
        LookupKind::AmgVideoId => LookupKey::AmgVideoId(numeric(&value)?),
        LookupKind::Upc => LookupKey::Upc(value),
        LookupKind::Isbn => LookupKey::Isbn(value),
        LookupKind::Url => LookupKey::Url(value),
    })
}

fn init_logger(level: log::LevelFilter) {
    // Read RUST_LOG first, then override with the CLI-provided level
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module("reqwest", log::LevelFilter::Info);
    builder.filter_module("hyper", log::LevelFilter::Info);
    let _ = builder.try_init();
}

async fn run(command: Command) -> Result<SearchResponse> {
    let client = Client::new().context("Failed to initialize HTTP client")?;

    match command {
        Command::Search {
            term,
            country,
            media,
            entity,
            attribute,
            limit,
            lang,
            explicit,
        } => {
            let options = SearchOptions {
                country,
                media,
                entity,
                attribute,
                limit,
                lang,
                explicit,
            };
            Ok(client.search(&term, &options).await?)
        }
        Command::Lookup {
            kind,
            value,
            country,
            entity,
            limit,
        } => {
            let key = resolve_key(kind, value)?;
            let options = LookupOptions {
                country,
                entity,
                limit,
            };
            Ok(client.lookup(&key, &options).await?)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level.into());

    match run(cli.command).await {
        Ok(response) => {
            println!(
                "{} result{}",
                response.result_count,
                if response.result_count == 1 { "" } else { "s" }
            );
            println!("{}", serde_json::to_string_pretty(&response.results)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("itunes_search error: {:#}", e);
            process::exit(1);
        }
    }
}
