//! Per-deck set of weak cards: the latest misses outside weak mode, drained by weak-mode study.

use std::collections::{HashMap, HashSet};

/// Weak card ids keyed by deck id
#[derive(Debug, Clone, Default)]
pub struct WeakSetTracker {
  by_deck: HashMap<String, HashSet<String>>,
}

impl WeakSetTracker {
  pub fn new() -> Self {
    Self::default()
  }

  /// Replace a deck's weak set with the misses recorded since the last rotation.
  ///
  /// Full replacement, not a union.
  pub fn rotate<I>(&mut self, deck_id: &str, session_wrong_ids: I)
  where
    I: IntoIterator<Item = String>,
  {
    let ids: HashSet<String> = session_wrong_ids.into_iter().collect();
    tracing::debug!("Weak set for deck {} rotated to {} cards", deck_id, ids.len());
    self.by_deck.insert(deck_id.to_string(), ids);
  }

  /// Drain on a correct answer, grow on a wrong one. Only called in weak mode.
  pub fn update_during_weak_session(&mut self, deck_id: &str, card_id: &str, correct: bool) {
    if correct {
      if let Some(ids) = self.by_deck.get_mut(deck_id) {
        if ids.remove(card_id) {
          tracing::debug!("Card {} cleared from weak set ({} left)", card_id, ids.len());
        }
      }
    } else {
      self
        .by_deck
        .entry(deck_id.to_string())
        .or_default()
        .insert(card_id.to_string());
    }
  }

  /// Weak ids for a deck; empty if it never had a rotation
  pub fn get(&self, deck_id: &str) -> &HashSet<String> {
    static EMPTY: std::sync::LazyLock<HashSet<String>> = std::sync::LazyLock::new(HashSet::new);
    self.by_deck.get(deck_id).unwrap_or(&*EMPTY)
  }

  pub fn contains(&self, deck_id: &str, card_id: &str) -> bool {
    self.get(deck_id).contains(card_id)
  }

  /// Explicitly forget a deck's weak cards
  pub fn reset(&mut self, deck_id: &str) {
    self.by_deck.remove(deck_id);
  }
}
