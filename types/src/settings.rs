use crate::GameId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tunable per-game parameters.
///
/// Loaded once per session from the external `game_settings` rows and cached;
/// `default_for` supplies the hardcoded fallback when a row is missing or the
/// fetch fails. Read-only during a round.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameSettings {
    #[serde(rename = "game_id")]
    pub game: GameId,
    /// Probability parameter in [0, 1]. Only coinflip, slots, and crash
    /// consult it; the other games derive odds from player choices.
    pub win_chance: f64,
    #[serde(rename = "min_mult")]
    pub min_multiplier: f64,
    #[serde(rename = "max_mult")]
    pub max_multiplier: f64,
}

/// Validation failures for a settings row.
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("win chance out of range for {game}: {got}")]
    ChanceOutOfRange { game: GameId, got: f64 },
    #[error("multiplier bounds inverted for {game}: min={min} max={max}")]
    InvalidBounds { game: GameId, min: f64, max: f64 },
}

impl GameSettings {
    pub fn new(game: GameId, win_chance: f64, min_multiplier: f64, max_multiplier: f64) -> Self {
        Self {
            game,
            win_chance,
            min_multiplier,
            max_multiplier,
        }
    }

    /// Hardcoded defaults, used whenever the external settings are
    /// unavailable.
    pub fn default_for(game: GameId) -> Self {
        match game {
            GameId::Crash => Self::new(game, 0.45, 1.0, 1_000.0),
            GameId::Mines => Self::new(game, 0.50, 1.0, 1_000.0),
            GameId::Slots => Self::new(game, 0.35, 2.0, 100.0),
            GameId::CoinFlip => Self::new(game, 0.50, 2.0, 2.0),
            GameId::Dice => Self::new(game, 0.49, 1.0, 49.0),
            GameId::Roulette => Self::new(game, 0.49, 2.0, 14.0),
            GameId::Keno => Self::new(game, 0.45, 1.5, 50.0),
            GameId::HiLo => Self::new(game, 0.50, 1.95, 1.95),
            GameId::Cases => Self::new(game, 1.0, 0.1, 10.0),
        }
    }

    /// Check ranges; out-of-band edits can produce arbitrary rows.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(0.0..=1.0).contains(&self.win_chance) {
            return Err(SettingsError::ChanceOutOfRange {
                game: self.game,
                got: self.win_chance,
            });
        }
        if self.min_multiplier > self.max_multiplier || self.min_multiplier < 0.0 {
            return Err(SettingsError::InvalidBounds {
                game: self.game,
                min: self.min_multiplier,
                max: self.max_multiplier,
            });
        }
        Ok(())
    }

    /// Clamp a computed multiplier into the configured bounds.
    pub fn clamp(&self, multiplier: f64) -> f64 {
        multiplier.clamp(self.min_multiplier, self.max_multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        for game in GameId::ALL {
            let settings = GameSettings::default_for(game);
            assert_eq!(settings.game, game);
            settings.validate().expect("default settings must validate");
        }
    }

    #[test]
    fn test_chance_out_of_range() {
        let mut settings = GameSettings::default_for(GameId::Crash);
        settings.win_chance = 1.5;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ChanceOutOfRange { .. })
        ));
    }

    #[test]
    fn test_inverted_bounds() {
        let mut settings = GameSettings::default_for(GameId::Keno);
        settings.min_multiplier = 100.0;
        settings.max_multiplier = 1.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_clamp() {
        let settings = GameSettings::default_for(GameId::Crash);
        assert_eq!(settings.clamp(0.5), 1.0);
        assert_eq!(settings.clamp(5_000.0), 1_000.0);
        assert_eq!(settings.clamp(42.0), 42.0);
    }

    #[test]
    fn test_wire_row_shape() {
        // Matches the external game_settings row column names.
        let row = r#"{"game_id":"crash","win_chance":0.45,"min_mult":1.0,"max_mult":1000.0}"#;
        let settings: GameSettings = serde_json::from_str(row).unwrap();
        assert_eq!(settings.game, GameId::Crash);
        assert_eq!(settings.max_multiplier, 1_000.0);

        let back = serde_json::to_value(&settings).unwrap();
        assert_eq!(back["game_id"], "crash");
        assert_eq!(back["min_mult"], 1.0);
    }
}
