//! Roulette (color bets on a single-zero wheel).
//!
//! A pocket is drawn uniformly from 0..=36, so green lands with probability
//! exactly 1/37 and each color with 18/37. Red and black pay 2x, green pays
//! 14x; a losing color never pays out on its complement.

use crate::rng::RandomSource;
use chiprush_types::{RevealEvent, RouletteColor, RoundOutcome, ROULETTE_POCKETS};

/// Red numbers on a roulette wheel.
const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

/// Payout multiplier per color bet.
pub fn payout_multiplier(color: RouletteColor) -> f64 {
    match color {
        RouletteColor::Green => 14.0,
        RouletteColor::Red | RouletteColor::Black => 2.0,
    }
}

/// Color of a pocket.
pub fn pocket_color(number: u8) -> RouletteColor {
    if number == 0 {
        RouletteColor::Green
    } else if RED_NUMBERS.contains(&number) {
        RouletteColor::Red
    } else {
        RouletteColor::Black
    }
}

/// Spin for `bet` chips on `color`.
pub fn spin<R: RandomSource>(bet: u64, color: RouletteColor, rng: &mut R) -> RoundOutcome {
    let number = rng.next_below(ROULETTE_POCKETS as u32) as u8;
    let landed = pocket_color(number);
    let reveal = vec![RevealEvent::Pocket {
        number,
        color: landed,
    }];
    if landed == color {
        RoundOutcome::win(bet, payout_multiplier(color), reveal)
    } else {
        RoundOutcome::loss(reveal)
    }
}
