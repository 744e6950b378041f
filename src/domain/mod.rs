pub mod card;
pub mod deck;
pub mod study;

pub use card::{Card, CardDraft};
pub use deck::{Deck, DeckError, DeckSummary};
pub use study::{Side, StudyMode};

use rand::Rng;

/// Length of generated deck and card identifiers
pub const ID_LEN: usize = 32;

/// Generate a random base-36 identifier (32 chars, ~165 bits).
pub fn generate_id() -> String {
  let mut rng = rand::rng();
  (0..ID_LEN)
    .map(|_| {
      let idx = rng.random_range(0..36u8);
      if idx < 10 {
        (b'0' + idx) as char
      } else {
        (b'a' + idx - 10) as char
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_generate_id_charset() {
    let id = generate_id();
    assert_eq!(id.len(), ID_LEN);
    assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
  }
}
