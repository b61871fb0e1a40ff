use crate::{
    CaseTier, CoinSide, GameId, HiLoGuess, RouletteColor, DICE_MAX_THRESHOLD, DICE_MIN_THRESHOLD,
    HILO_MAX_RANK, HILO_MIN_RANK, KENO_MAX_PICKS, KENO_POOL, MINES_MAX_COUNT,
};
use thiserror::Error;

/// Game-specific bet parameters, chosen by the player before a round is armed.
#[derive(Clone, Debug, PartialEq)]
pub enum BetParams {
    /// Guess which side the coin lands on.
    CoinFlip { side: CoinSide },
    /// Roll-over dice: wins when the roll exceeds `threshold`.
    Dice { threshold: u8 },
    /// Number of mines hidden on the 5x5 board.
    Mines { mines: u8 },
    /// Single payline, three reels.
    Slots,
    /// Cash out before the rocket crashes.
    Crash,
    /// Color bet on a single-zero wheel.
    Roulette { color: RouletteColor },
    /// Up to five numbers from the 1..=20 pool.
    Keno { picks: Vec<u8> },
    /// Higher/lower guess against the face-up card the bet was made on.
    HiLo { guess: HiLoGuess, current: u8 },
    /// Fixed-price case opening.
    Cases { tier: CaseTier },
}

impl BetParams {
    /// Game this parameter set belongs to.
    pub fn game(&self) -> GameId {
        match self {
            BetParams::CoinFlip { .. } => GameId::CoinFlip,
            BetParams::Dice { .. } => GameId::Dice,
            BetParams::Mines { .. } => GameId::Mines,
            BetParams::Slots => GameId::Slots,
            BetParams::Crash => GameId::Crash,
            BetParams::Roulette { .. } => GameId::Roulette,
            BetParams::Keno { .. } => GameId::Keno,
            BetParams::HiLo { .. } => GameId::HiLo,
            BetParams::Cases { .. } => GameId::Cases,
        }
    }
}

/// Validation failures for a bet configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BetError {
    #[error("bet amount must be greater than zero")]
    ZeroAmount,
    #[error("dice threshold out of range (got={got}, allowed={min}..={max})")]
    ThresholdOutOfRange { got: u8, min: u8, max: u8 },
    #[error("mine count out of range (got={got}, allowed=1..={max})")]
    MineCountOutOfRange { got: u8, max: u8 },
    #[error("keno requires at least one pick")]
    NoKenoPicks,
    #[error("too many keno picks (got={got}, max={max})")]
    TooManyKenoPicks { got: usize, max: usize },
    #[error("keno pick out of range (got={got}, pool=1..={pool})")]
    KenoPickOutOfRange { got: u8, pool: u8 },
    #[error("duplicate keno pick: {0}")]
    DuplicateKenoPick(u8),
    #[error("hilo card rank out of range (got={got})")]
    CardOutOfRange { got: u8 },
    #[error("case price mismatch (expected={expected}, got={got})")]
    CasePriceMismatch { expected: u64, got: u64 },
}

/// A bet for one round: stake plus per-game parameters.
///
/// Immutable once a round is armed; validated before any randomness is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct BetConfig {
    pub amount: u64,
    pub params: BetParams,
}

impl BetConfig {
    pub fn new(amount: u64, params: BetParams) -> Self {
        Self { amount, params }
    }

    /// Game this bet targets.
    pub fn game(&self) -> GameId {
        self.params.game()
    }

    /// Check stake and per-game parameter ranges.
    pub fn validate(&self) -> Result<(), BetError> {
        if self.amount == 0 {
            return Err(BetError::ZeroAmount);
        }
        match &self.params {
            BetParams::Dice { threshold } => {
                if *threshold < DICE_MIN_THRESHOLD || *threshold > DICE_MAX_THRESHOLD {
                    return Err(BetError::ThresholdOutOfRange {
                        got: *threshold,
                        min: DICE_MIN_THRESHOLD,
                        max: DICE_MAX_THRESHOLD,
                    });
                }
            }
            BetParams::Mines { mines } => {
                if *mines == 0 || *mines > MINES_MAX_COUNT {
                    return Err(BetError::MineCountOutOfRange {
                        got: *mines,
                        max: MINES_MAX_COUNT,
                    });
                }
            }
            BetParams::Keno { picks } => {
                if picks.is_empty() {
                    return Err(BetError::NoKenoPicks);
                }
                if picks.len() > KENO_MAX_PICKS {
                    return Err(BetError::TooManyKenoPicks {
                        got: picks.len(),
                        max: KENO_MAX_PICKS,
                    });
                }
                for (i, pick) in picks.iter().enumerate() {
                    if *pick == 0 || *pick > KENO_POOL {
                        return Err(BetError::KenoPickOutOfRange {
                            got: *pick,
                            pool: KENO_POOL,
                        });
                    }
                    if picks[..i].contains(pick) {
                        return Err(BetError::DuplicateKenoPick(*pick));
                    }
                }
            }
            BetParams::HiLo { current, .. } => {
                if *current < HILO_MIN_RANK || *current > HILO_MAX_RANK {
                    return Err(BetError::CardOutOfRange { got: *current });
                }
            }
            BetParams::Cases { tier } => {
                if self.amount != tier.price() {
                    return Err(BetError::CasePriceMismatch {
                        expected: tier.price(),
                        got: self.amount,
                    });
                }
            }
            BetParams::CoinFlip { .. }
            | BetParams::Slots
            | BetParams::Crash
            | BetParams::Roulette { .. } => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_amount_rejected() {
        let config = BetConfig::new(0, BetParams::Slots);
        assert_eq!(config.validate(), Err(BetError::ZeroAmount));
    }

    #[test]
    fn test_dice_threshold_bounds() {
        assert!(BetConfig::new(10, BetParams::Dice { threshold: 2 })
            .validate()
            .is_ok());
        assert!(BetConfig::new(10, BetParams::Dice { threshold: 98 })
            .validate()
            .is_ok());
        assert!(matches!(
            BetConfig::new(10, BetParams::Dice { threshold: 1 }).validate(),
            Err(BetError::ThresholdOutOfRange { got: 1, .. })
        ));
        assert!(matches!(
            BetConfig::new(10, BetParams::Dice { threshold: 99 }).validate(),
            Err(BetError::ThresholdOutOfRange { got: 99, .. })
        ));
    }

    #[test]
    fn test_mine_count_bounds() {
        assert!(BetConfig::new(10, BetParams::Mines { mines: 1 })
            .validate()
            .is_ok());
        assert!(BetConfig::new(10, BetParams::Mines { mines: 24 })
            .validate()
            .is_ok());
        assert!(matches!(
            BetConfig::new(10, BetParams::Mines { mines: 0 }).validate(),
            Err(BetError::MineCountOutOfRange { got: 0, .. })
        ));
        assert!(matches!(
            BetConfig::new(10, BetParams::Mines { mines: 25 }).validate(),
            Err(BetError::MineCountOutOfRange { got: 25, .. })
        ));
    }

    #[test]
    fn test_keno_picks() {
        let ok = BetConfig::new(10, BetParams::Keno { picks: vec![1, 5, 20] });
        assert!(ok.validate().is_ok());

        let empty = BetConfig::new(10, BetParams::Keno { picks: vec![] });
        assert_eq!(empty.validate(), Err(BetError::NoKenoPicks));

        let too_many = BetConfig::new(
            10,
            BetParams::Keno {
                picks: vec![1, 2, 3, 4, 5, 6],
            },
        );
        assert!(matches!(
            too_many.validate(),
            Err(BetError::TooManyKenoPicks { got: 6, .. })
        ));

        let out_of_pool = BetConfig::new(10, BetParams::Keno { picks: vec![21] });
        assert!(matches!(
            out_of_pool.validate(),
            Err(BetError::KenoPickOutOfRange { got: 21, .. })
        ));

        let duplicate = BetConfig::new(10, BetParams::Keno { picks: vec![7, 7] });
        assert_eq!(duplicate.validate(), Err(BetError::DuplicateKenoPick(7)));
    }

    #[test]
    fn test_case_price_must_match_tier() {
        let ok = BetConfig::new(1_000, BetParams::Cases { tier: CaseTier::Premium });
        assert!(ok.validate().is_ok());

        let wrong = BetConfig::new(500, BetParams::Cases { tier: CaseTier::Premium });
        assert_eq!(
            wrong.validate(),
            Err(BetError::CasePriceMismatch {
                expected: 1_000,
                got: 500
            })
        );
    }

    #[test]
    fn test_params_map_to_game() {
        assert_eq!(
            BetParams::HiLo {
                guess: HiLoGuess::Higher,
                current: 8
            }
            .game(),
            GameId::HiLo
        );
        assert_eq!(BetParams::Crash.game(), GameId::Crash);
    }
}
