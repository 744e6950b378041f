use serde::{Deserialize, Serialize};

use super::{generate_id, Card, CardDraft};
use crate::srs::progress;

/// Named, ordered collection of cards.
///
/// Card order is insertion order; it is the display order and the final
/// tie-break when the scheduler ranks cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub cards: Vec<Card>,
}

/// Counts shown next to a deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeckSummary {
  pub total: usize,
  /// Cards never answered
  pub untried: usize,
  /// Cards answered at least once but never correctly
  pub never_correct: usize,
}

/// Validation errors for deck and card editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
  BlankName,
  BlankCard,
}

impl std::fmt::Display for DeckError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DeckError::BlankName => write!(f, "Deck name is empty"),
      DeckError::BlankCard => write!(f, "Card needs a front or a back"),
    }
  }
}

impl std::error::Error for DeckError {}

impl Deck {
  pub fn new(name: String) -> Self {
    Self {
      id: generate_id(),
      name,
      cards: Vec::new(),
    }
  }

  pub fn card(&self, card_id: &str) -> Option<&Card> {
    self.cards.iter().find(|c| c.id == card_id)
  }

  pub fn card_mut(&mut self, card_id: &str) -> Option<&mut Card> {
    self.cards.iter_mut().find(|c| c.id == card_id)
  }

  pub fn contains(&self, card_id: &str) -> bool {
    self.cards.iter().any(|c| c.id == card_id)
  }

  /// Add a card from user input. Front and back are trimmed; at least one must remain.
  pub fn add_card(&mut self, draft: CardDraft) -> Result<&Card, DeckError> {
    let front = draft.front.trim().to_string();
    let back = draft.back.trim().to_string();
    if front.is_empty() && back.is_empty() {
      return Err(DeckError::BlankCard);
    }

    let mut card = Card::new(front, back, draft.front_image, draft.back_image);
    while self.contains(&card.id) {
      card.id = generate_id();
    }
    self.cards.push(card);
    Ok(&self.cards[self.cards.len() - 1])
  }

  /// Replace a card's text and images, keeping its counters.
  ///
  /// Returns `Ok(false)` if the card no longer exists.
  pub fn update_card(&mut self, card_id: &str, draft: CardDraft) -> Result<bool, DeckError> {
    let front = draft.front.trim().to_string();
    let back = draft.back.trim().to_string();
    if front.is_empty() && back.is_empty() {
      return Err(DeckError::BlankCard);
    }

    let Some(card) = self.card_mut(card_id) else {
      tracing::debug!("Ignoring edit of unknown card {}", card_id);
      return Ok(false);
    };
    card.front = front;
    card.back = back;
    card.front_image = draft.front_image;
    card.back_image = draft.back_image;
    Ok(true)
  }

  /// Remove a card, returning it if it existed
  pub fn remove_card(&mut self, card_id: &str) -> Option<Card> {
    let index = self.cards.iter().position(|c| c.id == card_id)?;
    Some(self.cards.remove(index))
  }

  /// Append imported cards in order. Ids that collide with existing cards are re-keyed.
  pub fn append_cards(&mut self, cards: Vec<Card>) -> usize {
    let count = cards.len();
    for mut card in cards {
      while self.contains(&card.id) {
        card.id = generate_id();
      }
      self.cards.push(card);
    }
    count
  }

  /// Zero the counters of every card in the deck
  pub fn reset_progress(&mut self) {
    for card in &mut self.cards {
      progress::reset(card);
    }
    tracing::info!("Reset progress for deck {} ({} cards)", self.name, self.cards.len());
  }

  pub fn summary(&self) -> DeckSummary {
    DeckSummary {
      total: self.cards.len(),
      untried: self.cards.iter().filter(|c| !c.is_attempted()).count(),
      never_correct: self
        .cards
        .iter()
        .filter(|c| c.is_attempted() && c.correct_count == 0)
        .count(),
    }
  }
}
