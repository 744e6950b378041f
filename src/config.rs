//! Application configuration.
//!
//! Settings load with priority config.toml > environment (.env) > defaults.
//! Fixed values used across the crate live here as constants.

use serde::Deserialize;

use crate::domain::{Side, StudyMode};
use crate::store::LogOnError;

// ==================== Storage ====================

/// Key under which the UI layer persists the deck list
pub const STORAGE_KEY: &str = "word-card-data";

/// Default location of the config file
pub const CONFIG_FILE: &str = "config.toml";

// ==================== Import ====================

/// CSV export endpoint prefix for shared spreadsheets
pub const SHEET_EXPORT_BASE: &str = "https://docs.google.com/spreadsheets/d";

/// Recognized header names (compared lower-cased and trimmed)
pub const HEADER_FRONT: &str = "front";
pub const HEADER_BACK: &str = "back";
pub const HEADER_FRONT_IMAGE: &str = "frontimage";
pub const HEADER_BACK_IMAGE: &str = "backimage";

// ==================== Settings ====================

/// Environment variable for a fixed selection seed
pub const ENV_RNG_SEED: &str = "WORD_CARDS_RNG_SEED";

/// Environment variable toggling the sample deck on first run
pub const ENV_SEED_SAMPLE_DECK: &str = "WORD_CARDS_SEED_SAMPLE_DECK";

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub study: StudySettings,
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct StudySettings {
    /// Fixed seed for random and weak selection; OS entropy when unset
    pub rng_seed: Option<u64>,
    /// Mode preselected for new sessions
    pub mode: StudyMode,
    /// Side shown first
    pub direction: Side,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Add the sample deck when no decks are stored
    pub seed_sample_deck: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            seed_sample_deck: true,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text; missing keys take defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Apply environment overrides for keys not set in config.toml
    fn apply_env(&mut self, file_has_seed: bool, file_has_sample: bool) {
        if !file_has_seed {
            if let Ok(raw) = std::env::var(ENV_RNG_SEED) {
                let context = format!("Ignoring {}={:?}", ENV_RNG_SEED, raw);
                if let Some(seed) = raw.trim().parse::<u64>().log_warn(&context) {
                    tracing::info!("Using selection seed from {}: {}", ENV_RNG_SEED, seed);
                    self.study.rng_seed = Some(seed);
                }
            }
        }

        if !file_has_sample {
            if let Ok(raw) = std::env::var(ENV_SEED_SAMPLE_DECK) {
                match parse_flag(&raw) {
                    Some(flag) => self.library.seed_sample_deck = flag,
                    None => tracing::warn!("Ignoring {}={:?}", ENV_SEED_SAMPLE_DECK, raw),
                }
            }
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Raw view of config.toml used to tell which keys the file sets
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    study: Option<toml::Table>,
    library: Option<toml::Table>,
}

/// Load settings with priority: config.toml > .env / environment > default
pub fn load_settings() -> Settings {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let mut settings = Settings::default();
    let mut file_has_seed = false;
    let mut file_has_sample = false;

    if let Ok(contents) = std::fs::read_to_string(CONFIG_FILE) {
        let context = format!("Ignoring invalid {}", CONFIG_FILE);
        if let Some(parsed) = Settings::from_toml_str(&contents).log_warn(&context) {
            tracing::info!("Using settings from {}", CONFIG_FILE);
            if let Ok(raw) = toml::from_str::<RawConfig>(&contents) {
                file_has_seed = raw.study.is_some_and(|t| t.contains_key("rng_seed"));
                file_has_sample = raw.library.is_some_and(|t| t.contains_key("seed_sample_deck"));
            }
            settings = parsed;
        }
    }

    settings.apply_env(file_has_seed, file_has_sample);
    settings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.study.rng_seed, None);
        assert_eq!(settings.study.mode, StudyMode::Normal);
        assert_eq!(settings.study.direction, Side::Front);
        assert!(settings.library.seed_sample_deck);
    }

    #[test]
    fn test_from_toml_full() {
        let settings = Settings::from_toml_str(
            r#"
            [study]
            rng_seed = 42
            mode = "weak"
            direction = "back"

            [library]
            seed_sample_deck = false
            "#,
        )
        .unwrap();

        assert_eq!(settings.study.rng_seed, Some(42));
        assert_eq!(settings.study.mode, StudyMode::Weak);
        assert_eq!(settings.study.direction, Side::Back);
        assert!(!settings.library.seed_sample_deck);
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let settings = Settings::from_toml_str("[study]\nmode = \"random\"\n").unwrap();
        assert_eq!(settings.study.mode, StudyMode::Random);
        assert_eq!(settings.study.rng_seed, None);
        assert!(settings.library.seed_sample_deck);
    }

    #[test]
    fn test_from_toml_empty() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_from_toml_rejects_unknown_mode() {
        assert!(Settings::from_toml_str("[study]\nmode = \"cram\"\n").is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_header_names_are_lowercase() {
        for name in [HEADER_FRONT, HEADER_BACK, HEADER_FRONT_IMAGE, HEADER_BACK_IMAGE] {
            assert_eq!(name, name.to_lowercase());
        }
    }
}
