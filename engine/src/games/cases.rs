//! Case opening.
//!
//! A case always pays a prize; the mixture decides how much of the price
//! comes back:
//!
//! - 60%: 10-80% of the price (net loss);
//! - 30%: 90-120% (near break-even);
//! - 10%: jackpot between 2x the price and the tier maximum, biased toward
//!   the low end by squaring the uniform draw.
//!
//! The prize is clamped into the tier's bounds, so the coefficient is never
//! zero: every opening settles as a win with `multiplier = prize / price`.

use crate::rng::RandomSource;
use chiprush_types::{CaseTier, RevealEvent, RoundOutcome};

/// Mixture boundaries (cumulative).
const LOSS_BUCKET: f64 = 0.6;
const BREAK_EVEN_BUCKET: f64 = 0.9;

/// Draw the prize for one case.
pub fn prize<R: RandomSource>(tier: CaseTier, rng: &mut R) -> u64 {
    let price = tier.price() as f64;
    let bucket = rng.next_unit();
    let raw = if bucket < LOSS_BUCKET {
        price * (0.1 + rng.next_unit() * 0.7)
    } else if bucket < BREAK_EVEN_BUCKET {
        price * (0.9 + rng.next_unit() * 0.3)
    } else {
        let t = rng.next_unit();
        let floor = price * 2.0;
        floor + (tier.max_prize() as f64 - floor) * (t * t)
    };
    (raw.floor() as u64).clamp(tier.min_prize(), tier.max_prize())
}

/// Open a case. The stake is the tier price; the outcome is always a win at
/// `prize / price`.
pub fn open<R: RandomSource>(tier: CaseTier, rng: &mut R) -> RoundOutcome {
    let amount = prize(tier, rng);
    let multiplier = amount as f64 / tier.price() as f64;
    if amount >= tier.price() * 2 {
        tracing::debug!(tier = ?tier, amount, "case jackpot");
    }
    RoundOutcome::win(tier.price(), multiplier, vec![RevealEvent::Prize { amount }])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::ScriptedRng;
    use crate::rng::GameRng;

    #[test]
    fn test_loss_bucket_range() {
        // bucket 0.0, value draw 0.0 -> 10% of price, clamped to tier minimum.
        let mut rng = ScriptedRng::with_units([0.0, 0.0]);
        assert_eq!(prize(CaseTier::Budget, &mut rng), 10);

        let mut rng = ScriptedRng::with_units([0.0, 1.0 - 1e-12]);
        let high_loss = prize(CaseTier::Budget, &mut rng);
        assert!(high_loss <= 80, "loss bucket must stay under 80% of price");
    }

    #[test]
    fn test_break_even_bucket_range() {
        let mut rng = ScriptedRng::with_units([0.7, 0.0]);
        assert_eq!(prize(CaseTier::Premium, &mut rng), 900);

        let mut rng = ScriptedRng::with_units([0.7, 1.0 - 1e-12]);
        let prize_value = prize(CaseTier::Premium, &mut rng);
        assert!(prize_value <= 1_200);
    }

    #[test]
    fn test_jackpot_bucket_bounds() {
        // t = 0: exactly 2x the price.
        let mut rng = ScriptedRng::with_units([0.95, 0.0]);
        assert_eq!(prize(CaseTier::Royal, &mut rng), 20_000);

        // t -> 1: the tier maximum.
        let mut rng = ScriptedRng::with_units([0.95, 1.0 - 1e-12]);
        let top = prize(CaseTier::Royal, &mut rng);
        assert!(top >= 99_000 && top <= 100_000);
    }

    #[test]
    fn test_jackpot_biased_low() {
        // The squared draw at t = 0.5 lands a quarter of the way up the band.
        let mut rng = ScriptedRng::with_units([0.95, 0.5]);
        let value = prize(CaseTier::Royal, &mut rng) as f64;
        let expected = 20_000.0 + (100_000.0 - 20_000.0) * 0.25;
        assert!((value - expected).abs() < 1.0);
    }

    #[test]
    fn test_prize_always_within_tier_bounds() {
        for tier in [CaseTier::Budget, CaseTier::Premium, CaseTier::Royal] {
            for round_id in 0..500 {
                let mut rng = GameRng::for_round(41, round_id);
                let value = prize(tier, &mut rng);
                assert!(value >= tier.min_prize());
                assert!(value <= tier.max_prize());
            }
        }
    }

    #[test]
    fn test_open_is_always_a_win() {
        for round_id in 0..200 {
            let mut rng = GameRng::for_round(43, round_id);
            let outcome = open(CaseTier::Budget, &mut rng);
            assert!(outcome.is_win);
            assert!(outcome.multiplier > 0.0);
            match outcome.reveal.as_slice() {
                [RevealEvent::Prize { amount }] => assert_eq!(outcome.payout, *amount),
                other => panic!("unexpected reveal: {other:?}"),
            }
        }
    }
}
