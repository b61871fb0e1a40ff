use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Supported game identifiers.
///
/// The lowercase wire id matches the external `game_settings` rows; the
/// ledger label matches what the settlement call historically reported.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    Crash,
    Mines,
    Slots,
    CoinFlip,
    Dice,
    Roulette,
    Keno,
    HiLo,
    Cases,
}

impl GameId {
    /// All games, in menu order.
    pub const ALL: [GameId; 9] = [
        GameId::Crash,
        GameId::Mines,
        GameId::Slots,
        GameId::CoinFlip,
        GameId::Dice,
        GameId::Roulette,
        GameId::Keno,
        GameId::HiLo,
        GameId::Cases,
    ];

    /// Lowercase id used by the settings table.
    pub fn as_str(&self) -> &'static str {
        match self {
            GameId::Crash => "crash",
            GameId::Mines => "mines",
            GameId::Slots => "slots",
            GameId::CoinFlip => "coinflip",
            GameId::Dice => "dice",
            GameId::Roulette => "roulette",
            GameId::Keno => "keno",
            GameId::HiLo => "hilo",
            GameId::Cases => "cases",
        }
    }

    /// Display label reported to the settlement ledger.
    pub fn ledger_label(&self) -> &'static str {
        match self {
            GameId::Crash => "Crash",
            GameId::Mines => "Mines",
            GameId::Slots => "Slots",
            GameId::CoinFlip => "CoinFlip",
            GameId::Dice => "Dice",
            GameId::Roulette => "Roulette",
            GameId::Keno => "Keno",
            GameId::HiLo => "HiLo",
            GameId::Cases => "Case Opening",
        }
    }

    /// Games that allow cashing out mid-round at the live multiplier.
    pub fn supports_early_exit(&self) -> bool {
        matches!(self, GameId::Crash | GameId::Mines)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized game ids.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown game id: {0}")]
pub struct UnknownGameId(pub String);

impl FromStr for GameId {
    type Err = UnknownGameId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameId::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownGameId(s.to_string()))
    }
}

/// Coin side for coinflip.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    /// The opposite face.
    pub fn other(&self) -> CoinSide {
        match self {
            CoinSide::Heads => CoinSide::Tails,
            CoinSide::Tails => CoinSide::Heads,
        }
    }
}

/// Roulette color bets.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RouletteColor {
    Red,
    Black,
    Green,
}

/// HiLo direction guess.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HiLoGuess {
    Higher,
    Lower,
}

/// Slot machine reel symbols, rarest first.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlotSymbol {
    Wild,
    Seven,
    Diamond,
    Bell,
    Clover,
    Grape,
    Lemon,
    Cherry,
}

impl SlotSymbol {
    /// Symbols in weight-table order.
    pub const ALL: [SlotSymbol; 8] = [
        SlotSymbol::Wild,
        SlotSymbol::Seven,
        SlotSymbol::Diamond,
        SlotSymbol::Bell,
        SlotSymbol::Clover,
        SlotSymbol::Grape,
        SlotSymbol::Lemon,
        SlotSymbol::Cherry,
    ];
}

/// Case tiers with their fixed price and prize bounds.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CaseTier {
    Budget,
    Premium,
    Royal,
}

impl CaseTier {
    /// Opening price in chips.
    pub fn price(&self) -> u64 {
        match self {
            CaseTier::Budget => 100,
            CaseTier::Premium => 1_000,
            CaseTier::Royal => 10_000,
        }
    }

    /// Smallest prize the tier can pay.
    pub fn min_prize(&self) -> u64 {
        match self {
            CaseTier::Budget => 10,
            CaseTier::Premium => 200,
            CaseTier::Royal => 3_000,
        }
    }

    /// Largest prize the tier can pay.
    pub fn max_prize(&self) -> u64 {
        match self {
            CaseTier::Budget => 500,
            CaseTier::Premium => 5_000,
            CaseTier::Royal => 100_000,
        }
    }
}
