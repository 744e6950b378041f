//! Flashcard decks with spreadsheet import and performance-driven card selection.
//!
//! - [`import`]: CSV parsing, column mapping, sheet URL normalization, fetching
//! - [`srs`]: attempt counters, weak-card tracking, next-card selection
//! - [`store`]: the deck list and its persisted JSON shape
//!
//! Rendering and storage belong to the caller, which feeds plain data in and
//! renders what comes back.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use word_cards::config::{self, Settings};
//! use word_cards::srs::StudyView;
//! use word_cards::{CardSelector, DeckStore, Side};
//!
//! let settings = Settings::from_toml_str("[study]\nrng_seed = 7\ndirection = \"back\"\n").unwrap();
//! let mut storage: HashMap<&str, String> = HashMap::new();
//!
//! let mut store = DeckStore::restore(
//!     storage.get(config::STORAGE_KEY).map(String::as_str),
//!     settings.library.seed_sample_deck,
//! );
//! let deck_id = store.decks()[0].id.clone();
//! let deck = store.deck_mut(&deck_id).unwrap();
//!
//! let mut selector = CardSelector::from_settings(&settings);
//! let first = selector.start(deck, settings.study.mode, settings.study.direction);
//! assert_eq!(first.side, Side::Back);
//! match selector.view(deck) {
//!     StudyView::Card { text, .. } => assert_eq!(text, "加速する"),
//!     StudyView::Empty(reason) => panic!("nothing to study: {:?}", reason),
//! }
//!
//! let card_id = first.card_id.unwrap();
//! selector.record_result(deck, &card_id, false);
//! assert!(selector.weak_set().contains(&deck_id, &card_id));
//!
//! storage.insert(config::STORAGE_KEY, store.to_json().unwrap());
//! assert!(storage[config::STORAGE_KEY].contains("\"wrongCount\":1"));
//! ```

pub mod config;
pub mod domain;
pub mod import;
pub mod srs;
pub mod store;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use domain::{Card, CardDraft, Deck, DeckError, Side, StudyMode};
pub use import::{import_sheet, ImportError};
pub use srs::{CardSelector, Selection};
pub use store::DeckStore;
