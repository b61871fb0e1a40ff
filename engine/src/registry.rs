//! Game registry: static metadata and the session settings cache.
//!
//! The registry holds the per-game tunables fetched once per session from the
//! external settings rows. A missing or failed fetch silently falls back to
//! the hardcoded defaults; play is never blocked on configuration. Games can
//! be toggled inactive by an administrative surface.

use chiprush_types::{GameId, GameSettings};
use std::collections::HashMap;

/// Metadata about a game for menu display.
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub game: GameId,
    pub name: &'static str,
    pub description: &'static str,
    /// Minimum stake (chips).
    pub min_bet: u64,
    /// Maximum stake (chips).
    pub max_bet: u64,
    /// Whether the game supports mid-round cash-out.
    pub early_exit: bool,
    /// Whether the game is currently playable.
    pub active: bool,
}

impl GameInfo {
    const fn new(
        game: GameId,
        name: &'static str,
        description: &'static str,
        min_bet: u64,
        max_bet: u64,
        early_exit: bool,
    ) -> Self {
        Self {
            game,
            name,
            description,
            min_bet,
            max_bet,
            early_exit,
            active: true,
        }
    }
}

/// Registry of available games, their metadata, and cached settings.
#[derive(Clone, Debug)]
pub struct GameRegistry {
    settings: HashMap<GameId, GameSettings>,
    active: HashMap<GameId, bool>,
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRegistry {
    /// A registry with every game active and default settings.
    pub fn new() -> Self {
        let active = GameId::ALL.iter().map(|&g| (g, true)).collect();
        Self {
            settings: HashMap::new(),
            active,
        }
    }

    /// Static metadata for a game.
    pub fn get_info(game: GameId) -> GameInfo {
        match game {
            GameId::Crash => GameInfo::new(
                game,
                "Crash",
                "Cash out before the rocket blows up.",
                1,
                100_000,
                true,
            ),
            GameId::Mines => GameInfo::new(
                game,
                "Mines",
                "Open tiles, dodge the mines, cash out any time.",
                1,
                100_000,
                true,
            ),
            GameId::Slots => GameInfo::new(
                game,
                "Slots",
                "Three reels, one payline, wilds substitute.",
                1,
                100_000,
                false,
            ),
            GameId::CoinFlip => GameInfo::new(
                game,
                "Coin Flip",
                "Heads or tails, double or nothing.",
                1,
                100_000,
                false,
            ),
            GameId::Dice => GameInfo::new(
                game,
                "Dice",
                "Pick a threshold and roll over it.",
                1,
                100_000,
                false,
            ),
            GameId::Roulette => GameInfo::new(
                game,
                "Roulette",
                "Red, black, or the rare green zero.",
                1,
                100_000,
                false,
            ),
            GameId::Keno => GameInfo::new(
                game,
                "Keno",
                "Pick up to five numbers out of twenty.",
                1,
                100_000,
                false,
            ),
            GameId::HiLo => GameInfo::new(
                game,
                "Hi-Lo",
                "Guess whether the next card lands higher or lower.",
                1,
                100_000,
                false,
            ),
            GameId::Cases => GameInfo::new(
                game,
                "Cases",
                "Open a case; something is always inside.",
                100,
                10_000,
                false,
            ),
        }
    }

    /// Replace cached settings with freshly fetched rows. Invalid rows are
    /// skipped with a warning; returns how many were accepted.
    pub fn load_settings(&mut self, rows: Vec<GameSettings>) -> usize {
        let mut accepted = 0;
        for row in rows {
            match row.validate() {
                Ok(()) => {
                    self.settings.insert(row.game, row);
                    accepted += 1;
                }
                Err(err) => {
                    tracing::warn!(game = %row.game, %err, "skipping invalid settings row");
                }
            }
        }
        accepted
    }

    /// Settings for a game: the cached row, or the hardcoded default.
    pub fn settings_for(&self, game: GameId) -> GameSettings {
        self.settings
            .get(&game)
            .copied()
            .unwrap_or_else(|| GameSettings::default_for(game))
    }

    pub fn is_active(&self, game: GameId) -> bool {
        self.active.get(&game).copied().unwrap_or(false)
    }

    pub fn set_active(&mut self, game: GameId, active: bool) {
        self.active.insert(game, active);
    }

    /// All currently playable games.
    pub fn active_games(&self) -> Vec<GameId> {
        GameId::ALL
            .iter()
            .copied()
            .filter(|g| self.is_active(*g))
            .collect()
    }

    /// Metadata for every game with its current active flag.
    pub fn all_games_info(&self) -> Vec<GameInfo> {
        GameId::ALL
            .iter()
            .map(|&g| {
                let mut info = Self::get_info(g);
                info.active = self.is_active(g);
                info
            })
            .collect()
    }
}
