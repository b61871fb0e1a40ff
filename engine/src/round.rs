//! Round lifecycle state machine.
//!
//! A round moves through `Idle -> Armed -> Resolving -> Settled` and back to
//! the start on the next bet. The guard is explicit and independent of any UI
//! layer: arming is rejected while a round is in flight, the balance check
//! happens before any randomness is drawn, and the settlement record is
//! emitted exactly once.
//!
//! `Resolving` covers the reveal animation window: the outcome is already
//! fully computed, which is why crash and mines can show a truthful live
//! cash-out value: it is always capped by the pre-computed ceiling.

use crate::games;
use crate::rng::RandomSource;
use chiprush_types::{BetConfig, BetError, GameId, GameSettings, RoundOutcome, SettlementRecord};
use std::fmt;

/// Phases of one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// No bet placed.
    Idle,
    /// Bet placed, parameters locked, nothing drawn yet.
    Armed,
    /// Outcome computed; reveal in progress.
    Resolving,
    /// Settlement emitted; next arm starts a fresh round.
    Settled,
}

/// Errors from driving the round state machine.
#[derive(Debug, PartialEq)]
pub enum RoundError {
    /// A round is already armed or resolving.
    RoundInFlight { phase: RoundPhase },
    /// The requested transition needs an armed round.
    NotArmed { phase: RoundPhase },
    /// The requested transition needs a resolving round.
    NotResolving { phase: RoundPhase },
    /// The bet exceeds the available balance.
    InsufficientBalance { needed: u64, available: u64 },
    /// The game has no mid-round cash-out.
    EarlyExitUnsupported { game: GameId },
    /// The bet configuration failed validation.
    InvalidBet(BetError),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundInFlight { phase } => write!(f, "round already in flight ({phase:?})"),
            Self::NotArmed { phase } => write!(f, "round is not armed ({phase:?})"),
            Self::NotResolving { phase } => write!(f, "round is not resolving ({phase:?})"),
            Self::InsufficientBalance { needed, available } => {
                write!(f, "insufficient balance: need {needed}, have {available}")
            }
            Self::EarlyExitUnsupported { game } => {
                write!(f, "{game} does not support cash-out")
            }
            Self::InvalidBet(err) => write!(f, "invalid bet: {err}"),
        }
    }
}

impl std::error::Error for RoundError {}

impl From<BetError> for RoundError {
    fn from(err: BetError) -> Self {
        Self::InvalidBet(err)
    }
}

/// One game view's round driver.
///
/// Settings are passed in explicitly per round series rather than read from
/// ambient state, keeping outcome generation pure and testable.
#[derive(Clone, Debug)]
pub struct GameRound {
    settings: GameSettings,
    phase: RoundPhase,
    config: Option<BetConfig>,
    outcome: Option<RoundOutcome>,
}

impl GameRound {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            phase: RoundPhase::Idle,
            config: None,
            outcome: None,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// The locked bet, once armed.
    pub fn config(&self) -> Option<&BetConfig> {
        self.config.as_ref()
    }

    /// The computed outcome, once resolving.
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        self.outcome.as_ref()
    }

    /// Place a bet. Rejects while a round is in flight, rejects invalid
    /// configurations, and rejects stakes above the balance, all before any
    /// randomness is drawn.
    pub fn arm(&mut self, config: BetConfig, balance: u64) -> Result<(), RoundError> {
        if !matches!(self.phase, RoundPhase::Idle | RoundPhase::Settled) {
            return Err(RoundError::RoundInFlight { phase: self.phase });
        }
        config.validate()?;
        if config.amount > balance {
            return Err(RoundError::InsufficientBalance {
                needed: config.amount,
                available: balance,
            });
        }
        self.config = Some(config);
        self.outcome = None;
        self.phase = RoundPhase::Armed;
        Ok(())
    }

    /// Compute the outcome synchronously. The full result, including any
    /// cash-out ceiling, is known before the first reveal.
    pub fn resolve<R: RandomSource>(&mut self, rng: &mut R) -> Result<&RoundOutcome, RoundError> {
        if self.phase != RoundPhase::Armed {
            return Err(RoundError::NotArmed { phase: self.phase });
        }
        let Some(config) = self.config.as_ref() else {
            return Err(RoundError::NotArmed { phase: self.phase });
        };
        let outcome = games::generate_outcome(config, &self.settings, rng);
        tracing::debug!(
            game = %config.game(),
            win = outcome.is_win,
            multiplier = outcome.multiplier,
            "round resolved"
        );
        self.phase = RoundPhase::Resolving;
        Ok(self.outcome.get_or_insert(outcome))
    }

    /// Settle with the pre-computed outcome, emitting the report exactly
    /// once.
    pub fn settle(&mut self) -> Result<SettlementRecord, RoundError> {
        if self.phase != RoundPhase::Resolving {
            return Err(RoundError::NotResolving { phase: self.phase });
        }
        let (Some(config), Some(outcome)) = (self.config.as_ref(), self.outcome.as_ref()) else {
            return Err(RoundError::NotResolving { phase: self.phase });
        };
        self.phase = RoundPhase::Settled;
        Ok(SettlementRecord {
            game: config.game(),
            bet: config.amount,
            win: outcome.payout,
            coefficient: outcome.multiplier,
        })
    }

    /// Early exit for crash and mines: settle now at the live multiplier,
    /// clamped to the pre-computed ceiling.
    pub fn cash_out(&mut self, live_multiplier: f64) -> Result<SettlementRecord, RoundError> {
        if self.phase != RoundPhase::Resolving {
            return Err(RoundError::NotResolving { phase: self.phase });
        }
        let (Some(config), Some(outcome)) = (self.config.as_ref(), self.outcome.as_ref()) else {
            return Err(RoundError::NotResolving { phase: self.phase });
        };
        let game = config.game();
        if !game.supports_early_exit() {
            return Err(RoundError::EarlyExitUnsupported { game });
        }
        let ceiling = outcome.ceiling.unwrap_or(live_multiplier);
        let multiplier = live_multiplier.min(ceiling);
        self.phase = RoundPhase::Settled;
        Ok(SettlementRecord {
            game,
            bet: config.amount,
            win: RoundOutcome::payout_for(config.amount, multiplier),
            coefficient: multiplier,
        })
    }
}
