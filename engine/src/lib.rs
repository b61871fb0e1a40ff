//! Chiprush game engine.
//!
//! This crate contains the deterministic round logic: per-game outcome
//! generators, the round lifecycle state machine, booster application, reveal
//! pacing, and the game registry.
//!
//! ## Determinism requirements
//! - No wall-clock time inside the engine; the crash timeline takes elapsed
//!   milliseconds from a single caller-owned clock.
//! - No ambient randomness; every draw goes through the [`rng::RandomSource`]
//!   seam so tests can replay exact sequences.
//! - No I/O anywhere in this crate. Settlement and settings fetching live in
//!   the client crate.
//!
//! ## Round flow
//! ```rust,ignore
//! use chiprush_engine::{GameRng, GameRound};
//! use chiprush_types::{BetConfig, BetParams, GameSettings, GameId};
//!
//! let mut round = GameRound::new(GameSettings::default_for(GameId::Dice));
//! round.arm(BetConfig::new(100, BetParams::Dice { threshold: 50 }), balance)?;
//! let mut rng = GameRng::for_round(seed, round_id);
//! let outcome = round.resolve(&mut rng)?;      // full outcome known here
//! let record = round.settle()?;                // emitted exactly once
//! ```

pub mod booster;
pub mod games;
pub mod registry;
pub mod reveal;
pub mod rng;
pub mod round;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

pub use booster::{BoosterError, BoosterSlot};
pub use games::generate_outcome;
pub use registry::{GameInfo, GameRegistry};
pub use reveal::{schedule, TimedReveal};
pub use rng::{GameRng, RandomSource};
pub use round::{GameRound, RoundError, RoundPhase};
