//! Spreadsheet import: fetch, parse, map, append.
//!
//! ```text
//! url ─ normalize_sheet_url ─ CsvSource::fetch ─ parse_csv ─ map_rows_to_cards ─ Deck::append_cards
//! ```
//!
//! An import either appends every usable card or nothing.

pub mod csv;
pub mod mapper;
pub mod sheet_url;
pub mod source;

pub use csv::{parse_csv, write_csv};
pub use mapper::{is_header, map_rows_to_cards, ColumnMap};
pub use sheet_url::normalize_sheet_url;
pub use source::{CsvSource, HttpSheetSource};

use crate::domain::{Card, Deck};
use crate::store::DeckStore;

/// Import failures.
#[derive(Debug)]
pub enum ImportError {
    /// Source could not be retrieved (transport error or non-success status)
    MalformedSource { url: String, reason: String },
    /// Source was retrieved but produced no usable cards
    EmptyResult,
}

impl ImportError {
    pub fn malformed(url: &str, reason: impl std::fmt::Display) -> Self {
        ImportError::MalformedSource {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Returns a user-facing message without the URL or transport details.
    pub fn user_message(&self) -> &'static str {
        match self {
            ImportError::MalformedSource { .. } => {
                "Could not load the spreadsheet. Check that it is published or shared."
            }
            ImportError::EmptyResult => "The spreadsheet has no usable cards.",
        }
    }
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::MalformedSource { url, reason } => {
                write!(f, "Failed to load {}: {}", url, reason)
            }
            ImportError::EmptyResult => write!(f, "No usable cards in import"),
        }
    }
}

impl std::error::Error for ImportError {}

/// Parse CSV text into fresh cards. Zero usable cards is an error.
pub fn cards_from_csv(text: &str) -> Result<Vec<Card>, ImportError> {
    let rows = parse_csv(text);
    let cards = map_rows_to_cards(&rows);
    tracing::debug!("Parsed {} rows into {} cards", rows.len(), cards.len());
    if cards.is_empty() {
        return Err(ImportError::EmptyResult);
    }
    Ok(cards)
}

/// Fetch a sheet and append its cards to a deck.
///
/// Returns the number of cards added. An unknown deck id is a no-op that
/// returns `Ok(0)` without fetching.
pub async fn import_sheet<S: CsvSource>(
    store: &mut DeckStore,
    deck_id: &str,
    url: &str,
    source: &S,
) -> Result<usize, ImportError> {
    if store.deck(deck_id).is_none() {
        tracing::debug!("Ignoring import into unknown deck {}", deck_id);
        return Ok(0);
    }

    let url = normalize_sheet_url(url.trim());
    tracing::info!("Importing cards from {}", url);

    let text = source.fetch(&url).await.inspect_err(|e| {
        tracing::warn!("Import failed: {}", e);
    })?;
    let cards = cards_from_csv(&text)?;

    let Some(deck) = store.deck_mut(deck_id) else {
        return Ok(0);
    };
    let added = deck.append_cards(cards);
    tracing::info!("Imported {} cards into {}", added, deck.name);
    Ok(added)
}

/// Header row written by [`export_deck_csv`]
pub const EXPORT_HEADER: [&str; 4] = ["front", "back", "frontImage", "backImage"];

/// Serialize a deck's cards as CSV that imports back to the same cards.
pub fn export_deck_csv(deck: &Deck) -> String {
    let header = EXPORT_HEADER.map(str::to_string);
    let rows = deck.cards.iter().map(|card| {
        [
            card.front.clone(),
            card.back.clone(),
            card.front_image.clone().unwrap_or_default(),
            card.back_image.clone().unwrap_or_default(),
        ]
    });
    write_csv(std::iter::once(header).chain(rows))
}
