//! The deck store: every deck, in order, with their cards.
//!
//! Serializes transparently as the persisted JSON array of decks. Reading and
//! writing that JSON is the caller's job; this module only converts.

use serde::{Deserialize, Serialize};

use crate::domain::{Card, Deck, DeckError};

/// Turn a recoverable failure into `None`, leaving a warning in the log.
///
/// Used where bad persisted data or bad settings fall back to defaults
/// instead of failing the caller.
pub trait LogOnError<T> {
    fn log_warn(self, context: &str) -> Option<T>;
}

impl<T, E: std::fmt::Display> LogOnError<T> for Result<T, E> {
    fn log_warn(self, context: &str) -> Option<T> {
        self.map_err(|e| tracing::warn!("{}: {}", context, e)).ok()
    }
}

/// Errors converting the store to or from JSON
#[derive(Debug)]
pub enum StoreError {
    Parse(serde_json::Error),
    Serialize(serde_json::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Parse(e) => write!(f, "Failed to parse stored decks: {}", e),
            StoreError::Serialize(e) => write!(f, "Failed to serialize decks: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Parse(e) | StoreError::Serialize(e) => Some(e),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckStore {
    decks: Vec<Deck>,
}

impl DeckStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        serde_json::from_str(raw).map_err(StoreError::Parse)
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string(self).map_err(StoreError::Serialize)
    }

    /// Rebuild the store from persisted JSON.
    ///
    /// Unparseable data is logged and dropped. An empty store gets the sample
    /// deck when `seed_sample` is set.
    pub fn restore(raw: Option<&str>, seed_sample: bool) -> Self {
        let mut store = raw
            .and_then(|json| DeckStore::from_json(json).log_warn("Discarding stored decks"))
            .unwrap_or_default();
        tracing::debug!("Restored {} decks", store.decks.len());

        if store.decks.is_empty() && seed_sample {
            tracing::info!("No decks stored, adding sample deck");
            store.decks.push(sample_deck());
        }
        store
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn deck(&self, deck_id: &str) -> Option<&Deck> {
        self.decks.iter().find(|d| d.id == deck_id)
    }

    pub fn deck_mut(&mut self, deck_id: &str) -> Option<&mut Deck> {
        self.decks.iter_mut().find(|d| d.id == deck_id)
    }

    /// Create an empty deck. The name is trimmed and must not be blank.
    pub fn create_deck(&mut self, name: &str) -> Result<&Deck, DeckError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DeckError::BlankName);
        }

        let mut deck = Deck::new(name.to_string());
        while self.deck(&deck.id).is_some() {
            deck.id = crate::domain::generate_id();
        }
        tracing::info!("Created deck {}", name);
        self.decks.push(deck);
        Ok(&self.decks[self.decks.len() - 1])
    }

    /// Remove a deck, returning it if it existed
    pub fn delete_deck(&mut self, deck_id: &str) -> Option<Deck> {
        let Some(index) = self.decks.iter().position(|d| d.id == deck_id) else {
            tracing::debug!("Ignoring delete of unknown deck {}", deck_id);
            return None;
        };
        let deck = self.decks.remove(index);
        tracing::info!("Deleted deck {} ({} cards)", deck.name, deck.cards.len());
        Some(deck)
    }

    /// Append imported cards to a deck. Unknown deck ids add nothing.
    pub fn import_cards(&mut self, deck_id: &str, cards: Vec<Card>) -> usize {
        match self.deck_mut(deck_id) {
            Some(deck) => deck.append_cards(cards),
            None => {
                tracing::debug!("Ignoring import into unknown deck {}", deck_id);
                0
            }
        }
    }

    /// Reset every card counter in a deck. Returns false for unknown ids.
    pub fn reset_progress(&mut self, deck_id: &str) -> bool {
        match self.deck_mut(deck_id) {
            Some(deck) => {
                deck.reset_progress();
                true
            }
            None => false,
        }
    }
}

/// Deck added on first run
pub fn sample_deck() -> Deck {
    let mut deck = Deck::new("英単語".to_string());
    deck.cards.push(Card::new("accelerate".to_string(), "加速する".to_string(), None, None));

    let mut known = Card::new("reinforce".to_string(), "強化する".to_string(), None, None);
    crate::srs::progress::record_attempt(&mut known, true);
    deck.cards.push(known);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{card_with_stats, deck_of};

    #[test]
    fn test_create_deck_trims_name() {
        let mut store = DeckStore::new();
        let deck = store.create_deck("  Verbs ").unwrap();
        assert_eq!(deck.name, "Verbs");
        assert!(deck.cards.is_empty());
        assert_eq!(store.decks().len(), 1);
    }

    #[test]
    fn test_create_deck_rejects_blank() {
        let mut store = DeckStore::new();
        assert_eq!(store.create_deck("   ").unwrap_err(), DeckError::BlankName);
        assert!(store.is_empty());
    }

    #[test]
    fn test_deck_ids_unique() {
        let mut store = DeckStore::new();
        let a = store.create_deck("a").unwrap().id.clone();
        let b = store.create_deck("a").unwrap().id.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn test_delete_deck() {
        let mut store = DeckStore::new();
        let id = store.create_deck("gone").unwrap().id.clone();

        assert_eq!(store.delete_deck(&id).map(|d| d.name), Some("gone".to_string()));
        assert!(store.delete_deck(&id).is_none());
        assert!(store.deck(&id).is_none());
    }

    #[test]
    fn test_import_cards_unknown_deck() {
        let mut store = DeckStore::new();
        assert_eq!(store.import_cards("ghost", vec![card_with_stats("a", 0, 0, 0)]), 0);
    }

    #[test]
    fn test_reset_progress() {
        let mut store = DeckStore::restore(Some("[]"), true);
        let id = store.decks()[0].id.clone();

        assert!(store.reset_progress(&id));
        assert!(store.deck(&id).unwrap().cards.iter().all(|c| c.attempts == 0));
        assert!(!store.reset_progress("ghost"));
    }

    #[test]
    fn test_json_shape() {
        let mut card = card_with_stats("c1", 2, 1, 1);
        card.front = "cat".to_string();
        card.back = "猫".to_string();
        card.back_image = Some("data:image/png;base64,AA".to_string());
        let store: DeckStore =
            serde_json::from_value(serde_json::to_value(vec![deck_of("d1", vec![card])]).unwrap()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&store.to_json().unwrap()).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["id"], "d1");
        assert_eq!(json[0]["name"], "d1 deck");
        let card = &json[0]["cards"][0];
        assert_eq!(card["front"], "cat");
        assert_eq!(card["back"], "猫");
        assert!(card["frontImage"].is_null());
        assert_eq!(card["backImage"], "data:image/png;base64,AA");
        assert_eq!(card["attempts"], 2);
        assert_eq!(card["correctCount"], 1);
        assert_eq!(card["wrongCount"], 1);
    }

    #[test]
    fn test_json_roundtrip_preserves_order() {
        let mut store = DeckStore::new();
        store.create_deck("first").unwrap();
        store.create_deck("second").unwrap();
        let id = store.decks()[0].id.clone();
        store.import_cards(&id, vec![card_with_stats("x", 1, 0, 1), card_with_stats("y", 0, 0, 0)]);

        let restored = DeckStore::from_json(&store.to_json().unwrap()).unwrap();

        assert_eq!(restored, store);
    }

    #[test]
    fn test_from_json_accepts_stored_layout() {
        let raw = r#"[{"id":"k2j3","name":"英単語","cards":[
            {"id":"a1","front":"accelerate","back":"加速する","frontImage":null,"backImage":null,
             "correctCount":0,"wrongCount":0,"attempts":0}]}]"#;
        let store = DeckStore::from_json(raw).unwrap();
        assert_eq!(store.deck("k2j3").unwrap().cards[0].back, "加速する");
    }

    #[test]
    fn test_restore_invalid_json_starts_fresh() {
        let store = DeckStore::restore(Some("{not json"), false);
        assert!(store.is_empty());
    }

    #[test]
    fn test_restore_seeds_sample_deck() {
        let store = DeckStore::restore(None, true);
        assert_eq!(store.decks().len(), 1);

        let deck = &store.decks()[0];
        assert_eq!(deck.name, "英単語");
        assert_eq!(deck.cards.len(), 2);
        assert_eq!(deck.cards[0].front, "accelerate");
        assert_eq!(deck.cards[0].attempts, 0);
        assert_eq!(deck.cards[1].front, "reinforce");
        assert_eq!((deck.cards[1].attempts, deck.cards[1].correct_count), (1, 1));
    }

    #[test]
    fn test_restore_keeps_stored_decks() {
        let raw = serde_json::to_string(&vec![deck_of("mine", vec![])]).unwrap();
        let store = DeckStore::restore(Some(&raw), true);
        assert_eq!(store.decks().len(), 1);
        assert_eq!(store.decks()[0].id, "mine");
    }

    #[test]
    fn test_log_warn_keeps_ok_drops_err() {
        crate::testing::init_test_logging();
        let ok: Result<u8, String> = Ok(3);
        let failed: Result<u8, String> = Err("boom".to_string());
        assert_eq!(ok.log_warn("unused"), Some(3));
        assert_eq!(failed.log_warn("Discarding value"), None);
    }
}
