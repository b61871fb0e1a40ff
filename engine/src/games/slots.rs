//! Single-payline slot machine.
//!
//! The round is pre-decided by the configured win chance and the reel symbols
//! are then constructed to match the decision; the line is presentation, not
//! the source of truth. On a winning round a base symbol is drawn from the
//! weight table and each reel independently substitutes a Wild 20% of the
//! time; a natural three-Wild line survives only 5% of the time, otherwise it
//! is downgraded to three Sevens. On a losing round a natural draw is fixed up
//! so it can never form a paying line.
//!
//! Line values: 3x Wild pays 100, Seven 50, Diamond 25, Bell 15, Clover 10,
//! Grape 5, Lemon 3, Cherry 2. A Wild substitutes for any symbol.

use crate::rng::RandomSource;
use chiprush_types::{GameSettings, RevealEvent, RoundOutcome, SlotSymbol};

/// Three Wilds on the line.
pub const JACKPOT_MULTIPLIER: f64 = 100.0;

/// Chance that a winning reel shows a Wild instead of the base symbol.
const WILD_SUBSTITUTION_CHANCE: f64 = 0.2;

/// Chance that a natural three-Wild line is kept rather than downgraded.
const JACKPOT_KEEP_CHANCE: f64 = 0.05;

/// Redraw attempts before the loss fix-up falls back to a deterministic step.
const LOSS_REDRAW_ATTEMPTS: u8 = 8;

/// Cumulative draw weights, rarest first.
const SYMBOL_WEIGHTS: [(SlotSymbol, f64); 8] = [
    (SlotSymbol::Wild, 0.02),
    (SlotSymbol::Seven, 0.06),
    (SlotSymbol::Diamond, 0.12),
    (SlotSymbol::Bell, 0.20),
    (SlotSymbol::Clover, 0.35),
    (SlotSymbol::Grape, 0.55),
    (SlotSymbol::Lemon, 0.75),
    (SlotSymbol::Cherry, 1.0),
];

/// Line value for three of a base symbol (Wild has no base value; a full Wild
/// line pays [`JACKPOT_MULTIPLIER`]).
pub fn line_multiplier(symbol: SlotSymbol) -> f64 {
    match symbol {
        SlotSymbol::Wild => 0.0,
        SlotSymbol::Seven => 50.0,
        SlotSymbol::Diamond => 25.0,
        SlotSymbol::Bell => 15.0,
        SlotSymbol::Clover => 10.0,
        SlotSymbol::Grape => 5.0,
        SlotSymbol::Lemon => 3.0,
        SlotSymbol::Cherry => 2.0,
    }
}

fn random_symbol<R: RandomSource>(rng: &mut R) -> SlotSymbol {
    let draw = rng.next_unit();
    for (symbol, cumulative) in SYMBOL_WEIGHTS {
        if draw < cumulative {
            return symbol;
        }
    }
    SlotSymbol::Cherry
}

/// Evaluate a payline: `Some(multiplier)` when it pays.
pub fn evaluate(line: [SlotSymbol; 3]) -> Option<f64> {
    let base = line.iter().copied().find(|s| *s != SlotSymbol::Wild);
    match base {
        None => Some(JACKPOT_MULTIPLIER),
        Some(base) => {
            let all_match = line
                .iter()
                .all(|s| *s == SlotSymbol::Wild || *s == base);
            all_match.then(|| line_multiplier(base))
        }
    }
}

fn winning_line<R: RandomSource>(rng: &mut R) -> [SlotSymbol; 3] {
    let base = random_symbol(rng);
    let mut line = [base; 3];
    for reel in &mut line {
        if rng.chance(WILD_SUBSTITUTION_CHANCE) {
            *reel = SlotSymbol::Wild;
        }
    }
    if line == [SlotSymbol::Wild; 3] && !rng.chance(JACKPOT_KEEP_CHANCE) {
        line = [SlotSymbol::Seven; 3];
    }
    line
}

/// Next non-wild symbol differing from `symbol`, in weight-table order.
fn step_symbol(symbol: SlotSymbol) -> SlotSymbol {
    let position = SlotSymbol::ALL
        .iter()
        .position(|s| *s == symbol)
        .unwrap_or(0);
    let mut next = SlotSymbol::ALL[(position + 1) % SlotSymbol::ALL.len()];
    if next == SlotSymbol::Wild {
        next = SlotSymbol::ALL[(position + 2) % SlotSymbol::ALL.len()];
    }
    next
}

fn losing_line<R: RandomSource>(rng: &mut R) -> [SlotSymbol; 3] {
    let mut line = [
        random_symbol(rng),
        random_symbol(rng),
        random_symbol(rng),
    ];
    // Two leading Wilds match any third reel; break the pair first.
    if line[0] == SlotSymbol::Wild && line[1] == SlotSymbol::Wild {
        line[1] = SlotSymbol::Seven;
    }
    let mut attempts = 0;
    while evaluate(line).is_some() {
        if attempts < LOSS_REDRAW_ATTEMPTS {
            line[2] = random_symbol(rng);
            attempts += 1;
        } else {
            // Deterministic step so scripted random sources stay finite.
            line[2] = step_symbol(line[2]);
        }
    }
    line
}

/// Spin for `bet` chips.
pub fn spin<R: RandomSource>(bet: u64, settings: &GameSettings, rng: &mut R) -> RoundOutcome {
    let winning = rng.chance(settings.win_chance);
    let line = if winning {
        winning_line(rng)
    } else {
        losing_line(rng)
    };
    let reveal = line
        .iter()
        .enumerate()
        .map(|(index, symbol)| RevealEvent::Reel {
            index: index as u8,
            symbol: *symbol,
        })
        .collect();
    match evaluate(line) {
        Some(multiplier) => {
            if multiplier >= JACKPOT_MULTIPLIER {
                tracing::debug!(bet, "slots jackpot line");
            }
            RoundOutcome::win(bet, multiplier, reveal)
        }
        None => RoundOutcome::loss(reveal),
    }
}
