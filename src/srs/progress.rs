//! Per-card attempt counters.
//!
//! Counters only change through these two functions, which keep
//! `attempts == correct_count + wrong_count`.

use crate::domain::Card;

/// Record one answer for a card
pub fn record_attempt(card: &mut Card, correct: bool) {
  card.attempts = card.attempts.saturating_add(1);
  if correct {
    card.correct_count = card.correct_count.saturating_add(1);
  } else {
    card.wrong_count = card.wrong_count.saturating_add(1);
  }
}

/// Zero all counters
pub fn reset(card: &mut Card) {
  card.attempts = 0;
  card.correct_count = 0;
  card.wrong_count = 0;
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::card_with_stats;

  #[test]
  fn test_record_correct() {
    let mut card = card_with_stats("a", 0, 0, 0);
    record_attempt(&mut card, true);
    assert_eq!((card.attempts, card.correct_count, card.wrong_count), (1, 1, 0));
  }

  #[test]
  fn test_record_wrong() {
    let mut card = card_with_stats("a", 0, 0, 0);
    record_attempt(&mut card, false);
    assert_eq!((card.attempts, card.correct_count, card.wrong_count), (1, 0, 1));
  }

  #[test]
  fn test_counter_invariant_over_sequence() {
    let mut card = card_with_stats("a", 0, 0, 0);
    let answers = [true, false, false, true, true, false, true, true, false, false, true];

    for (i, correct) in answers.iter().enumerate() {
      record_attempt(&mut card, *correct);
      assert_eq!(card.attempts, card.correct_count + card.wrong_count);
      assert_eq!(card.attempts as usize, i + 1);
    }
    assert_eq!(card.correct_count, 6);
    assert_eq!(card.wrong_count, 5);
  }

  #[test]
  fn test_reset() {
    let mut card = card_with_stats("a", 5, 2, 3);
    reset(&mut card);
    assert_eq!((card.attempts, card.correct_count, card.wrong_count), (0, 0, 0));
  }

  #[test]
  fn test_counters_saturate() {
    let mut card = card_with_stats("a", u32::MAX, u32::MAX, 0);
    record_attempt(&mut card, true);
    assert_eq!(card.attempts, u32::MAX);
    assert_eq!(card.correct_count, u32::MAX);
  }
}
