use serde::{Deserialize, Serialize};

use super::generate_id;

/// A front/back text pair with optional images and attempt counters.
///
/// Serialized with the camelCase field names of the persisted deck schema.
/// Image fields hold self-contained data (e.g. data URLs) so a deck record
/// stays portable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
  pub id: String,
  pub front: String,
  pub back: String,
  #[serde(default)]
  pub front_image: Option<String>,
  #[serde(default)]
  pub back_image: Option<String>,

  // Stats: attempts == correct_count + wrong_count
  #[serde(default)]
  pub attempts: u32,
  #[serde(default)]
  pub correct_count: u32,
  #[serde(default)]
  pub wrong_count: u32,
}

impl Card {
  /// Create a card with a fresh id and zeroed counters.
  pub fn new(
    front: String,
    back: String,
    front_image: Option<String>,
    back_image: Option<String>,
  ) -> Self {
    Self {
      id: generate_id(),
      front,
      back,
      front_image,
      back_image,
      attempts: 0,
      correct_count: 0,
      wrong_count: 0,
    }
  }

  /// True once the card has been answered at least once
  pub fn is_attempted(&self) -> bool {
    self.attempts > 0
  }

  /// True if both text sides are empty after trimming
  pub fn is_blank(&self) -> bool {
    self.front.trim().is_empty() && self.back.trim().is_empty()
  }
}

/// User-entered card content, validated by [`Deck::add_card`](super::Deck::add_card)
/// and [`Deck::update_card`](super::Deck::update_card).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
  pub front: String,
  pub back: String,
  pub front_image: Option<String>,
  pub back_image: Option<String>,
}

impl CardDraft {
  pub fn text(front: &str, back: &str) -> Self {
    Self {
      front: front.to_string(),
      back: back.to_string(),
      front_image: None,
      back_image: None,
    }
  }

  pub fn with_images(mut self, front_image: Option<String>, back_image: Option<String>) -> Self {
    self.front_image = front_image;
    self.back_image = back_image;
    self
  }
}
