use crate::{CoinSide, RouletteColor, SlotSymbol};
use serde::{Deserialize, Serialize};

/// One intermediate reveal step of a round.
///
/// The full sequence is known as soon as the outcome is computed; display
/// pacing is a separate concern (see the engine's reveal schedule).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevealEvent {
    /// Coin landed on this face.
    Coin { face: CoinSide },
    /// Dice roll in [0, 100).
    Roll { value: f64 },
    /// A board tile (mines): position and whether it hides a mine.
    Tile { index: u8, mine: bool },
    /// A slot reel stopping on a symbol.
    Reel { index: u8, symbol: SlotSymbol },
    /// The multiplier at which the rocket crashes.
    CrashPoint { multiplier: f64 },
    /// Roulette pocket and its color.
    Pocket { number: u8, color: RouletteColor },
    /// One keno number leaving the drum; `hit` if the player picked it.
    KenoDraw { number: u8, hit: bool },
    /// A card flip (rank 2..=14, Ace high).
    Card { rank: u8 },
    /// The prize inside an opened case.
    Prize { amount: u64 },
}

/// The settled result of one round.
///
/// Computed entirely up front, held immutable through the reveal animation,
/// reported once, then discarded. Invariants enforced by the constructors:
/// `payout == round(bet * multiplier)` and `multiplier == 0` exactly when
/// `is_win` is false.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundOutcome {
    pub is_win: bool,
    pub multiplier: f64,
    pub payout: u64,
    /// Pre-computed cash-out cap for early-exit games (crash point, mines
    /// full-clear multiplier). `None` for one-shot games.
    pub ceiling: Option<f64>,
    pub reveal: Vec<RevealEvent>,
}

impl RoundOutcome {
    /// Payout for a bet at a multiplier, rounded to whole chips.
    pub fn payout_for(bet: u64, multiplier: f64) -> u64 {
        (bet as f64 * multiplier).round() as u64
    }

    /// A winning outcome at `multiplier` (> 0).
    pub fn win(bet: u64, multiplier: f64, reveal: Vec<RevealEvent>) -> Self {
        debug_assert!(multiplier > 0.0);
        Self {
            is_win: true,
            multiplier,
            payout: Self::payout_for(bet, multiplier),
            ceiling: None,
            reveal,
        }
    }

    /// A losing outcome: multiplier and payout are zero.
    pub fn loss(reveal: Vec<RevealEvent>) -> Self {
        Self {
            is_win: false,
            multiplier: 0.0,
            payout: 0,
            ceiling: None,
            reveal,
        }
    }

    /// Attach the early-exit ceiling.
    pub fn with_ceiling(mut self, ceiling: f64) -> Self {
        self.ceiling = Some(ceiling);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_win_payout_identity() {
        let outcome = RoundOutcome::win(100, 1.96, vec![]);
        assert!(outcome.is_win);
        assert_eq!(outcome.payout, 196);
        assert_eq!(outcome.ceiling, None);
    }

    #[test]
    fn test_loss_is_zero() {
        let outcome = RoundOutcome::loss(vec![]);
        assert!(!outcome.is_win);
        assert_eq!(outcome.multiplier, 0.0);
        assert_eq!(outcome.payout, 0);
    }

    #[test]
    fn test_ceiling_attached() {
        let outcome = RoundOutcome::loss(vec![RevealEvent::CrashPoint { multiplier: 3.5 }])
            .with_ceiling(3.5);
        assert_eq!(outcome.ceiling, Some(3.5));
    }

    proptest! {
        #[test]
        fn prop_payout_identity(bet in 1u64..1_000_000, mult in 0.01f64..1_000.0) {
            let outcome = RoundOutcome::win(bet, mult, vec![]);
            prop_assert_eq!(outcome.payout, (bet as f64 * mult).round() as u64);
            prop_assert!(outcome.is_win);
        }
    }
}
