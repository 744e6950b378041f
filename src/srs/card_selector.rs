//! Card selection for study sessions.
//!
//! Three strategies pick the next card:
//! - `normal`: least-known card first (untried, then fewest correct, then fewest wrong)
//! - `weak`: uniform pick among the deck's weak cards (latest misses outside weak mode)
//! - `random`: uniform pick over the whole deck
//!
//! Selection is recomputed from the card counters on every pick; no queue is kept.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::progress;
use super::weak_set::WeakSetTracker;
use crate::domain::{Card, Deck, Side, StudyMode};

/// Transient state of the running session
#[derive(Debug, Clone)]
pub struct StudySession {
  deck_id: String,
  mode: StudyMode,
  /// Side shown first for every card
  direction: Side,
  current_card_id: Option<String>,
  show_side: Side,
  /// Cards answered wrong since the last rotation, in first-miss order
  session_wrong_ids: Vec<String>,
}

impl StudySession {
  pub fn new(deck_id: String, mode: StudyMode, direction: Side) -> Self {
    Self {
      deck_id,
      mode,
      direction,
      current_card_id: None,
      show_side: direction,
      session_wrong_ids: Vec::new(),
    }
  }

  pub fn deck_id(&self) -> &str {
    &self.deck_id
  }

  pub fn mode(&self) -> StudyMode {
    self.mode
  }

  pub fn direction(&self) -> Side {
    self.direction
  }

  pub fn current_card_id(&self) -> Option<&str> {
    self.current_card_id.as_deref()
  }

  pub fn show_side(&self) -> Side {
    self.show_side
  }

  pub fn session_wrong_ids(&self) -> &[String] {
    &self.session_wrong_ids
  }

  /// Remember a wrong answer for the next weak set
  fn add_wrong_card(&mut self, card_id: &str) {
    if !self.session_wrong_ids.iter().any(|id| id == card_id) {
      self.session_wrong_ids.push(card_id.to_string());
    }
  }

  /// Whether the pending misses replace the deck's weak set
  pub fn rotates_weak_set(&self) -> bool {
    self.mode != StudyMode::Weak && !self.session_wrong_ids.is_empty()
  }
}

/// Replace the session deck's weak set with its pending misses, then clear them.
/// Weak-mode sessions and sessions without misses leave the set alone.
fn rotate_pending_misses(weak: &mut WeakSetTracker, session: &mut StudySession) {
  if !session.rotates_weak_set() {
    return;
  }
  tracing::info!(
    "Deck {} now has {} weak cards",
    session.deck_id,
    session.session_wrong_ids.len()
  );
  weak.rotate(&session.deck_id, session.session_wrong_ids.drain(..));
}

/// The card to present and the side to show. `card_id` is `None` when
/// nothing is selectable (empty deck, or no weak cards in weak mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
  pub card_id: Option<String>,
  pub side: Side,
}

impl Selection {
  pub fn is_empty(&self) -> bool {
    self.card_id.is_none()
  }

  /// Resolve the selected card in its deck
  pub fn card<'a>(&self, deck: &'a Deck) -> Option<&'a Card> {
    self.card_id.as_deref().and_then(|id| deck.card(id))
  }
}

/// Why no card is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
  /// No session for this deck
  NoSession,
  /// Deck has no selectable card
  NoCards,
  /// Weak mode with an empty weak set
  NoWeakCards,
}

/// What the study screen displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyView<'a> {
  Card {
    card: &'a Card,
    side: Side,
    text: &'a str,
    image: Option<&'a str>,
  },
  Empty(EmptyReason),
}

/// Status line for the active session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyStatus {
  pub deck_name: String,
  pub mode: StudyMode,
  /// `(correct_count, wrong_count)` of the shown card
  pub current_counts: Option<(u32, u32)>,
  pub total_cards: usize,
}

/// Session state machine: Idle (no session) or Active.
///
/// Owns the weak-set tracker and the random source used by `random` and
/// `weak` selection. All calls are synchronous; callers sharing a selector
/// across threads must serialize access themselves.
#[derive(Debug)]
pub struct CardSelector<R = StdRng> {
  rng: R,
  weak: WeakSetTracker,
  session: Option<StudySession>,
}

impl CardSelector<StdRng> {
  /// Selector seeded from the OS
  pub fn new() -> Self {
    Self::with_rng(StdRng::from_os_rng())
  }

  /// Selector with a fixed seed for reproducible random picks
  pub fn seeded(seed: u64) -> Self {
    Self::with_rng(StdRng::seed_from_u64(seed))
  }

  /// Seeded from `study.rng_seed` when configured, otherwise from the OS
  pub fn from_settings(settings: &crate::config::Settings) -> Self {
    match settings.study.rng_seed {
      Some(seed) => Self::seeded(seed),
      None => Self::new(),
    }
  }
}

impl Default for CardSelector<StdRng> {
  fn default() -> Self {
    Self::new()
  }
}

impl<R: Rng> CardSelector<R> {
  pub fn with_rng(rng: R) -> Self {
    Self {
      rng,
      weak: WeakSetTracker::new(),
      session: None,
    }
  }

  pub fn weak_set(&self) -> &WeakSetTracker {
    &self.weak
  }

  pub fn weak_set_mut(&mut self) -> &mut WeakSetTracker {
    &mut self.weak
  }

  pub fn session(&self) -> Option<&StudySession> {
    self.session.as_ref()
  }

  pub fn is_active(&self) -> bool {
    self.session.is_some()
  }

  /// Start a new session, replacing the current one.
  ///
  /// Pending misses of the replaced session become its deck's weak set when it
  /// was not a weak-mode session.
  pub fn start(&mut self, deck: &Deck, mode: StudyMode, direction: Side) -> Selection {
    self.end_session();

    let mut session = StudySession::new(deck.id.clone(), mode, direction);
    session.current_card_id = pick_next_card(&mut self.rng, &self.weak, deck, mode).map(|c| c.id.clone());
    tracing::debug!(
      "Started {} session on deck {} (first card: {:?})",
      mode.as_str(),
      deck.name,
      session.current_card_id
    );

    let selection = Selection {
      card_id: session.current_card_id.clone(),
      side: session.show_side,
    };
    self.session = Some(session);
    selection
  }

  /// Record an answer and select the next card.
  ///
  /// Outside weak mode a wrong answer rotates the weak set before the next
  /// pick, so the deck's weak set always holds the latest misses.
  ///
  /// Unknown cards, a deck other than the session's, or no session at all
  /// leave everything unchanged and return the current selection.
  pub fn record_result(&mut self, deck: &mut Deck, card_id: &str, correct: bool) -> Selection {
    let Some(session) = self.session.as_mut() else {
      tracing::debug!("Ignoring result for {}: no active session", card_id);
      return self.current();
    };
    if session.deck_id != deck.id {
      tracing::debug!("Ignoring result for deck {}: session is on {}", deck.id, session.deck_id);
      return self.current();
    }
    let Some(card) = deck.card_mut(card_id) else {
      tracing::debug!("Ignoring result for unknown card {}", card_id);
      return self.current();
    };

    progress::record_attempt(card, correct);
    if !correct {
      session.add_wrong_card(card_id);
    }
    if session.mode == StudyMode::Weak {
      self.weak.update_during_weak_session(&deck.id, card_id, correct);
    }
    rotate_pending_misses(&mut self.weak, session);

    session.current_card_id =
      pick_next_card(&mut self.rng, &self.weak, deck, session.mode).map(|c| c.id.clone());
    session.show_side = session.direction;

    Selection {
      card_id: session.current_card_id.clone(),
      side: session.show_side,
    }
  }

  /// Toggle the displayed side. `None` when idle.
  pub fn flip(&mut self) -> Option<Side> {
    let session = self.session.as_mut()?;
    session.show_side = session.show_side.flipped();
    Some(session.show_side)
  }

  /// End the active session, folding pending misses into the weak set
  pub fn end_session(&mut self) -> Option<StudySession> {
    let mut session = self.session.take()?;
    rotate_pending_misses(&mut self.weak, &mut session);
    Some(session)
  }

  /// Current selection; empty when idle
  pub fn current(&self) -> Selection {
    match &self.session {
      Some(session) => Selection {
        card_id: session.current_card_id.clone(),
        side: session.show_side,
      },
      None => Selection {
        card_id: None,
        side: Side::Front,
      },
    }
  }

  /// What to display for `deck`
  pub fn view<'a>(&self, deck: &'a Deck) -> StudyView<'a> {
    let Some(session) = self.session.as_ref().filter(|s| s.deck_id == deck.id) else {
      return StudyView::Empty(EmptyReason::NoSession);
    };
    let card = session.current_card_id.as_deref().and_then(|id| deck.card(id));
    match card {
      Some(card) => {
        let (text, image) = match session.show_side {
          Side::Front => (card.front.as_str(), card.front_image.as_deref()),
          Side::Back => (card.back.as_str(), card.back_image.as_deref()),
        };
        StudyView::Card {
          card,
          side: session.show_side,
          text,
          image,
        }
      }
      None if session.mode == StudyMode::Weak => StudyView::Empty(EmptyReason::NoWeakCards),
      None => StudyView::Empty(EmptyReason::NoCards),
    }
  }

  /// Status line for `deck`; `None` when the session is on another deck
  pub fn status(&self, deck: &Deck) -> Option<StudyStatus> {
    let session = self.session.as_ref().filter(|s| s.deck_id == deck.id)?;
    let current_counts = session
      .current_card_id
      .as_deref()
      .and_then(|id| deck.card(id))
      .map(|c| (c.correct_count, c.wrong_count));
    Some(StudyStatus {
      deck_name: deck.name.clone(),
      mode: session.mode,
      current_counts,
      total_cards: deck.cards.len(),
    })
  }
}

/// Priority key for `normal` mode; smaller sorts first
pub fn priority_key(card: &Card) -> (bool, u32, u32) {
  (card.is_attempted(), card.correct_count, card.wrong_count)
}

/// Least-known card. Ties keep deck order.
pub fn pick_least_known(cards: &[Card]) -> Option<&Card> {
  // min_by_key returns the first of equal minimums
  cards.iter().min_by_key(|c| priority_key(c))
}

/// Uniform pick over `cards`
pub fn pick_uniform<'a, R: Rng>(rng: &mut R, cards: &[&'a Card]) -> Option<&'a Card> {
  if cards.is_empty() {
    return None;
  }
  let idx = rng.random_range(0..cards.len());
  Some(cards[idx])
}

/// Pick the next card for `mode`
pub fn pick_next_card<'a, R: Rng>(
  rng: &mut R,
  weak: &WeakSetTracker,
  deck: &'a Deck,
  mode: StudyMode,
) -> Option<&'a Card> {
  match mode {
    StudyMode::Normal => pick_least_known(&deck.cards),
    StudyMode::Random => {
      let all: Vec<&Card> = deck.cards.iter().collect();
      pick_uniform(rng, &all)
    }
    StudyMode::Weak => {
      let weak_ids = weak.get(&deck.id);
      let candidates: Vec<&Card> = deck.cards.iter().filter(|c| weak_ids.contains(&c.id)).collect();
      pick_uniform(rng, &candidates)
    }
  }
}
