use serde::{Deserialize, Serialize};

/// Selection strategy for a study session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StudyMode {
  /// Least-known card first, deterministic
  #[default]
  Normal,
  /// Uniform pick among the deck's weak cards
  Weak,
  /// Uniform pick over the whole deck
  Random,
}

impl StudyMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Normal => "normal",
      Self::Weak => "weak",
      Self::Random => "random",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "normal" => Some(Self::Normal),
      "weak" => Some(Self::Weak),
      "random" => Some(Self::Random),
      _ => None,
    }
  }
}

/// Which face of a card is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Side {
  #[default]
  Front,
  Back,
}

impl Side {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Front => "front",
      Self::Back => "back",
    }
  }

  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "front" => Some(Self::Front),
      "back" => Some(Self::Back),
      _ => None,
    }
  }

  pub fn flipped(&self) -> Self {
    match self {
      Self::Front => Self::Back,
      Self::Back => Self::Front,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_study_mode_from_str() {
    assert_eq!(StudyMode::from_str("normal"), Some(StudyMode::Normal));
    assert_eq!(StudyMode::from_str("weak"), Some(StudyMode::Weak));
    assert_eq!(StudyMode::from_str("random"), Some(StudyMode::Random));
    assert_eq!(StudyMode::from_str("Normal"), None);
    assert_eq!(StudyMode::from_str(""), None);
  }

  #[test]
  fn test_study_mode_as_str_roundtrip() {
    for mode in [StudyMode::Normal, StudyMode::Weak, StudyMode::Random] {
      assert_eq!(StudyMode::from_str(mode.as_str()), Some(mode));
    }
  }

  #[test]
  fn test_study_mode_default_is_normal() {
    assert_eq!(StudyMode::default(), StudyMode::Normal);
  }

  #[test]
  fn test_side_flipped() {
    assert_eq!(Side::Front.flipped(), Side::Back);
    assert_eq!(Side::Back.flipped(), Side::Front);
  }

  #[test]
  fn test_side_from_str() {
    assert_eq!(Side::from_str("front"), Some(Side::Front));
    assert_eq!(Side::from_str("back"), Some(Side::Back));
    assert_eq!(Side::from_str("side"), None);
  }

  #[test]
  fn test_serde_lowercase() {
    assert_eq!(serde_json::to_string(&StudyMode::Weak).unwrap(), "\"weak\"");
    let side: Side = serde_json::from_str("\"back\"").unwrap();
    assert_eq!(side, Side::Back);
  }
}
