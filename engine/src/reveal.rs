//! Reveal pacing.
//!
//! The outcome is known the instant a round resolves; this module only decides
//! WHEN each pre-computed reveal event is shown. The schedule is plain data
//! (callers own the timers), so tests and headless drivers can read the settled
//! outcome immediately while a UI plays the same sequence over a few seconds.

use crate::games::crash::CrashTimeline;
use chiprush_types::{GameId, RevealEvent, RoundOutcome};

/// Coin spin duration.
const COIN_FLIP_MS: u64 = 2_000;
/// First slot reel stop.
const SLOTS_SPIN_MS: u64 = 1_500;
/// Delay between consecutive reel stops.
const SLOTS_REEL_STAGGER_MS: u64 = 300;
/// Wheel spin duration.
const ROULETTE_SPIN_MS: u64 = 3_000;
/// Delay between keno draws.
const KENO_DRAW_INTERVAL_MS: u64 = 100;
/// Case shake-and-open duration.
const CASE_OPEN_MS: u64 = 3_000;
/// Card flip duration.
const HILO_FLIP_MS: u64 = 600;

/// One reveal event with its display offset from the start of the animation.
#[derive(Clone, Debug, PartialEq)]
pub struct TimedReveal {
    pub at_ms: u64,
    pub event: RevealEvent,
}

/// Pace a resolved outcome's reveal sequence for display.
///
/// Mines returns its layout at time zero: reveals there are player-paced, not
/// timer-paced. Crash schedules its single event at the moment the live curve
/// reaches the crash point.
pub fn schedule(game: GameId, outcome: &RoundOutcome) -> Vec<TimedReveal> {
    let at = |index: usize| -> u64 {
        match game {
            GameId::CoinFlip => COIN_FLIP_MS,
            GameId::Slots => SLOTS_SPIN_MS + index as u64 * SLOTS_REEL_STAGGER_MS,
            GameId::Roulette => ROULETTE_SPIN_MS,
            GameId::Keno => (index as u64 + 1) * KENO_DRAW_INTERVAL_MS,
            GameId::Cases => CASE_OPEN_MS,
            GameId::HiLo => HILO_FLIP_MS,
            GameId::Dice | GameId::Mines => 0,
            GameId::Crash => outcome
                .ceiling
                .map(|point| CrashTimeline::new(point).duration_to_crash_ms())
                .unwrap_or(0),
        }
    };
    outcome
        .reveal
        .iter()
        .enumerate()
        .map(|(index, event)| TimedReveal {
            at_ms: at(index),
            event: event.clone(),
        })
        .collect()
}

/// When the last reveal lands (the earliest the round can display as
/// settled).
pub fn total_duration_ms(schedule: &[TimedReveal]) -> u64 {
    schedule.iter().map(|r| r.at_ms).max().unwrap_or(0)
}
