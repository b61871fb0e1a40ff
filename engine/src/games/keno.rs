//! Keno.
//!
//! Ten distinct numbers are drawn from the 1..=20 pool; the payout multiplier
//! is a fixed table indexed by how many of the player's picks were drawn:
//! 0-1 hits pay nothing, 2 pay 1.5x, 3 pay 3x, 4 pay 10x, 5 pay 50x.

use crate::rng::RandomSource;
use chiprush_types::{RevealEvent, RoundOutcome, KENO_DRAW_COUNT, KENO_POOL};

/// Payout table indexed by hit count.
pub const PAYOUTS: [f64; 6] = [0.0, 0.0, 1.5, 3.0, 10.0, 50.0];

/// Draw ten distinct numbers from the pool (partial shuffle, fixed draw
/// count).
pub fn draw_numbers<R: RandomSource>(rng: &mut R) -> Vec<u8> {
    let mut pool: Vec<u8> = (1..=KENO_POOL).collect();
    for i in 0..KENO_DRAW_COUNT {
        let j = i + rng.next_below((pool.len() - i) as u32) as usize;
        pool.swap(i, j);
    }
    pool.truncate(KENO_DRAW_COUNT);
    pool
}

/// Settle a round against an already-drawn set of numbers.
pub fn outcome_for(bet: u64, picks: &[u8], drawn: &[u8]) -> RoundOutcome {
    let mut hits = 0usize;
    let reveal: Vec<RevealEvent> = drawn
        .iter()
        .map(|&number| {
            let hit = picks.contains(&number);
            if hit {
                hits += 1;
            }
            RevealEvent::KenoDraw { number, hit }
        })
        .collect();
    let multiplier = PAYOUTS[hits.min(PAYOUTS.len() - 1)];
    if multiplier > 0.0 {
        RoundOutcome::win(bet, multiplier, reveal)
    } else {
        RoundOutcome::loss(reveal)
    }
}

/// Run a full round: draw then settle.
pub fn draw<R: RandomSource>(bet: u64, picks: &[u8], rng: &mut R) -> RoundOutcome {
    let drawn = draw_numbers(rng);
    outcome_for(bet, picks, &drawn)
}
