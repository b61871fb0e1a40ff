//! Crash.
//!
//! The crash point is drawn before launch from a heavy-tailed curve:
//!
//! - 3% of rounds crash instantly at 1.00;
//! - otherwise `point = 0.99 / (1 - U)`;
//! - when a win-chance draw fails and the point exceeds 2.0, the round is
//!   rerolled into the low band `1 + U`;
//! - the result is clamped into `[1, max_mult]`.
//!
//! The live multiplier grows as `e^(0.00006 * elapsed_ms)` and every cash-out
//! is capped by the pre-drawn point. [`CrashTimeline`] is a pure function of a
//! single caller-owned elapsed clock, so the displayed cash-out value can
//! never pass the true crash point.

use crate::rng::RandomSource;
use chiprush_types::{GameSettings, RevealEvent, RoundOutcome};

/// Exponential growth rate of the live multiplier, per millisecond.
pub const GROWTH_RATE_PER_MS: f64 = 6.0e-5;

/// Fraction of rounds that crash on launch.
const INSTANT_CRASH_CHANCE: f64 = 0.03;

/// Numerator of the heavy-tail draw (1% shaved off the fair curve).
const TAIL_NUMERATOR: f64 = 0.99;

/// Points above this are eligible for the failed-win reroll.
const REROLL_FLOOR: f64 = 2.0;

/// Draw the crash point for one round.
pub fn crash_point<R: RandomSource>(settings: &GameSettings, rng: &mut R) -> f64 {
    if rng.chance(INSTANT_CRASH_CHANCE) {
        return 1.0;
    }
    let point = TAIL_NUMERATOR / (1.0 - rng.next_unit());
    if !rng.chance(settings.win_chance) && point > REROLL_FLOOR {
        return 1.0 + rng.next_unit();
    }
    point.clamp(1.0, settings.max_multiplier)
}

/// Generate the round outcome: a losing baseline carrying the crash point as
/// the cash-out ceiling. A cash-out before the point upgrades it to a win.
pub fn launch<R: RandomSource>(settings: &GameSettings, rng: &mut R) -> RoundOutcome {
    let point = crash_point(settings, rng);
    RoundOutcome::loss(vec![RevealEvent::CrashPoint { multiplier: point }]).with_ceiling(point)
}

/// The pre-drawn flight of one crash round.
///
/// All queries take elapsed milliseconds from the same monotonic clock; using
/// two independently advancing timers is exactly the race this type exists to
/// prevent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrashTimeline {
    crash_point: f64,
}

impl CrashTimeline {
    pub fn new(crash_point: f64) -> Self {
        Self { crash_point }
    }

    /// Read the ceiling of a generated crash outcome.
    pub fn from_outcome(outcome: &RoundOutcome) -> Option<Self> {
        outcome.ceiling.map(Self::new)
    }

    pub fn crash_point(&self) -> f64 {
        self.crash_point
    }

    fn raw_multiplier(elapsed_ms: u64) -> f64 {
        (GROWTH_RATE_PER_MS * elapsed_ms as f64).exp()
    }

    /// Displayed multiplier at `elapsed_ms`, capped at the crash point.
    pub fn multiplier_at(&self, elapsed_ms: u64) -> f64 {
        Self::raw_multiplier(elapsed_ms).min(self.crash_point)
    }

    /// True once the live curve has reached the crash point.
    pub fn has_crashed(&self, elapsed_ms: u64) -> bool {
        Self::raw_multiplier(elapsed_ms) >= self.crash_point
    }

    /// Cash-out value at `elapsed_ms`, or `None` if the round already
    /// crashed.
    pub fn cash_out_value(&self, elapsed_ms: u64) -> Option<f64> {
        let multiplier = Self::raw_multiplier(elapsed_ms);
        (multiplier < self.crash_point).then_some(multiplier)
    }

    /// Time until the curve reaches the crash point.
    pub fn duration_to_crash_ms(&self) -> u64 {
        (self.crash_point.ln() / GROWTH_RATE_PER_MS).ceil() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::ScriptedRng;
    use crate::rng::GameRng;
    use chiprush_types::GameId;

    fn settings() -> GameSettings {
        GameSettings::default_for(GameId::Crash)
    }

    #[test]
    fn test_instant_crash() {
        let mut rng = ScriptedRng::with_units([0.01]);
        assert_eq!(crash_point(&settings(), &mut rng), 1.0);
    }

    #[test]
    fn test_tail_draw() {
        // No instant crash, U = 0.5 -> 0.99 / 0.5 = 1.98, win draw passes.
        let mut rng = ScriptedRng::with_units([0.9, 0.5, 0.1]);
        let point = crash_point(&settings(), &mut rng);
        assert!((point - 1.98).abs() < 1e-9);
    }

    #[test]
    fn test_failed_win_rerolls_low() {
        // Tail gives 9.9, win draw fails (0.99 >= 0.45), reroll U = 0.25.
        let mut rng = ScriptedRng::with_units([0.9, 0.9, 0.99, 0.25]);
        let point = crash_point(&settings(), &mut rng);
        assert!((point - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_point_clamped_to_max() {
        // U extremely close to 1 explodes the tail; clamp to max_mult.
        let mut rng = ScriptedRng::with_units([0.9, 0.999_999_9, 0.1]);
        let point = crash_point(&settings(), &mut rng);
        assert_eq!(point, settings().max_multiplier);
    }

    #[test]
    fn test_point_never_below_one() {
        for round_id in 0..1_000 {
            let mut rng = GameRng::for_round(31, round_id);
            let point = crash_point(&settings(), &mut rng);
            assert!(point >= 1.0);
            assert!(point <= settings().max_multiplier);
        }
    }

    #[test]
    fn test_timeline_monotone_until_crash() {
        let timeline = CrashTimeline::new(3.0);
        let mut previous = timeline.multiplier_at(0);
        assert_eq!(previous, 1.0);
        for elapsed in (100..20_000).step_by(100) {
            let current = timeline.multiplier_at(elapsed);
            assert!(current >= previous);
            assert!(current <= 3.0);
            previous = current;
        }
    }

    #[test]
    fn test_cash_out_refused_after_crash() {
        let timeline = CrashTimeline::new(2.0);
        let crash_at = timeline.duration_to_crash_ms();
        assert!(timeline.cash_out_value(crash_at.saturating_sub(1_000)).is_some());
        assert_eq!(timeline.cash_out_value(crash_at + 1), None);
        assert!(timeline.has_crashed(crash_at + 1));
    }

    #[test]
    fn test_instant_point_crashes_at_zero() {
        let timeline = CrashTimeline::new(1.0);
        assert!(timeline.has_crashed(0));
        assert_eq!(timeline.cash_out_value(0), None);
    }

    #[test]
    fn test_launch_outcome_shape() {
        let mut rng = GameRng::for_round(4, 8);
        let outcome = launch(&settings(), &mut rng);
        assert!(!outcome.is_win);
        let ceiling = outcome.ceiling.expect("crash outcome must carry ceiling");
        match outcome.reveal.as_slice() {
            [RevealEvent::CrashPoint { multiplier }] => assert_eq!(*multiplier, ceiling),
            other => panic!("unexpected reveal: {other:?}"),
        }
        let timeline = CrashTimeline::from_outcome(&outcome).unwrap();
        assert_eq!(timeline.crash_point(), ceiling);
    }
}
