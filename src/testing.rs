//! Test fixtures for decks, cards and logging.
//!
//! Compiled for unit tests and for embedders with the `testing` feature.

use std::sync::Once;

use crate::domain::{Card, Deck};

/// Card with a fixed id and preset counters. Front text is the id.
///
/// `attempts` is taken as given so fixtures can describe any stored state.
pub fn card_with_stats(id: &str, attempts: u32, correct: u32, wrong: u32) -> Card {
    Card {
        id: id.to_string(),
        front: id.to_string(),
        back: format!("{id} back"),
        front_image: None,
        back_image: None,
        attempts,
        correct_count: correct,
        wrong_count: wrong,
    }
}

/// Deck with a fixed id, named "`id` deck"
pub fn deck_of(id: &str, cards: Vec<Card>) -> Deck {
    Deck {
        id: id.to_string(),
        name: format!("{id} deck"),
        cards,
    }
}

static LOGGING: Once = Once::new();

/// Route `tracing` output to the test harness. Safe to call from every test.
pub fn init_test_logging() {
    LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "word_cards=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}
