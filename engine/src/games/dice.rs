//! Roll-over dice.
//!
//! The player sets a threshold `T` in 2..=98 and wins when a uniform roll in
//! [0, 100) lands strictly above it. The multiplier is the fair inverse of the
//! win probability shaved by a 2% house edge:
//!
//! `multiplier = (100 / (100 - T)) * 0.98`
//!
//! The win probability is entirely player-chosen; the configured win chance is
//! not consulted.

use crate::rng::RandomSource;
use chiprush_types::{RevealEvent, RoundOutcome};

/// House retention on the fair multiplier.
pub const DICE_EDGE: f64 = 0.98;

/// Payout multiplier for a roll-over threshold.
pub fn multiplier(threshold: u8) -> f64 {
    (100.0 / (100.0 - threshold as f64)) * DICE_EDGE
}

/// Roll for `bet` chips over `threshold`.
pub fn roll<R: RandomSource>(bet: u64, threshold: u8, rng: &mut R) -> RoundOutcome {
    let value = rng.next_unit() * 100.0;
    let reveal = vec![RevealEvent::Roll { value }];
    if value > threshold as f64 {
        RoundOutcome::win(bet, multiplier(threshold), reveal)
    } else {
        RoundOutcome::loss(reveal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::ScriptedRng;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_known_multipliers() {
        assert!((multiplier(50) - 1.96).abs() < EPS);
        assert!((multiplier(98) - 49.0).abs() < EPS);
        assert!((multiplier(2) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_multiplier_monotone_in_threshold() {
        let mut previous = multiplier(2);
        for threshold in 3..=98 {
            let current = multiplier(threshold);
            assert!(
                current > previous,
                "multiplier must grow with threshold ({threshold})"
            );
            previous = current;
        }
    }

    #[test]
    fn test_roll_above_threshold_wins() {
        // Roll of 51.0 against threshold 50: win at ~1.96x, payout 196.
        let mut rng = ScriptedRng::with_units([0.51]);
        let outcome = roll(100, 50, &mut rng);
        assert!(outcome.is_win);
        assert!((outcome.multiplier - 1.96).abs() < EPS);
        assert_eq!(outcome.payout, 196);
        assert_eq!(outcome.reveal, vec![RevealEvent::Roll { value: 51.0 }]);
    }

    #[test]
    fn test_roll_at_threshold_loses() {
        // Exactly on the threshold is not strictly above it.
        let mut rng = ScriptedRng::with_units([0.50]);
        let outcome = roll(100, 50, &mut rng);
        assert!(!outcome.is_win);
        assert_eq!(outcome.payout, 0);
    }

    #[test]
    fn test_high_threshold_payout() {
        let mut rng = ScriptedRng::with_units([0.99]);
        let outcome = roll(100, 98, &mut rng);
        assert!(outcome.is_win);
        assert_eq!(outcome.payout, 4_900);
    }

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_multiplier_inverts_win_probability(threshold in 2u8..=98) {
            // multiplier * P(win) is pinned at the house retention for every
            // threshold the slider allows.
            let win_probability = (100.0 - threshold as f64) / 100.0;
            let product = multiplier(threshold) * win_probability;
            prop_assert!((product - DICE_EDGE).abs() < 1e-12);
        }
    }
}
