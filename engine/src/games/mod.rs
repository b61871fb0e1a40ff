//! Per-game outcome generators.
//!
//! Each module implements one game's probability model and multiplier curve as
//! pure functions of a validated [`BetConfig`], the per-game [`GameSettings`],
//! and an injected [`RandomSource`]. The full [`RoundOutcome`], including the
//! reveal sequence and, for crash/mines, the cash-out ceiling, is known
//! before any animation starts.
//!
//! Balance checks happen in the round state machine BEFORE this dispatch runs,
//! so a rejected bet never consumes randomness.

pub mod cases;
pub mod coinflip;
pub mod crash;
pub mod dice;
pub mod hilo;
pub mod keno;
pub mod mines;
pub mod roulette;
pub mod slots;

use crate::rng::RandomSource;
use chiprush_types::{BetConfig, BetParams, GameSettings, RoundOutcome};

/// Compute the outcome for a validated bet.
pub fn generate_outcome<R: RandomSource>(
    config: &BetConfig,
    settings: &GameSettings,
    rng: &mut R,
) -> RoundOutcome {
    match &config.params {
        BetParams::CoinFlip { side } => coinflip::flip(config.amount, *side, settings, rng),
        BetParams::Dice { threshold } => dice::roll(config.amount, *threshold, rng),
        BetParams::Mines { mines } => mines::generate(*mines, rng),
        BetParams::Slots => slots::spin(config.amount, settings, rng),
        BetParams::Crash => crash::launch(settings, rng),
        BetParams::Roulette { color } => roulette::spin(config.amount, *color, rng),
        BetParams::Keno { picks } => keno::draw(config.amount, picks, rng),
        BetParams::HiLo { guess, current } => {
            hilo::draw(config.amount, *guess, *current, hilo::HiLoRules::default(), rng)
        }
        BetParams::Cases { tier } => cases::open(*tier, rng),
    }
}
