//! HiLo.
//!
//! The player guesses whether the next card (rank 2..=14, Ace high, drawn
//! with replacement) lands higher or lower than the face-up card the bet was
//! made against. A correct guess pays a fixed 1.95x.
//!
//! Under the default rules a tie counts as a win for the guesser; the
//! stricter variant is one flag away.

use crate::rng::RandomSource;
use chiprush_types::{HiLoGuess, RevealEvent, RoundOutcome, HILO_MAX_RANK, HILO_MIN_RANK};

/// Fixed payout on a correct guess.
pub const HILO_MULTIPLIER: f64 = 1.95;

/// Table rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HiLoRules {
    /// A drawn rank equal to the face-up card wins for the guesser.
    pub tie_wins: bool,
}

impl Default for HiLoRules {
    fn default() -> Self {
        Self { tie_wins: true }
    }
}

const RANK_SPAN: u32 = (HILO_MAX_RANK - HILO_MIN_RANK + 1) as u32;

/// Deal the face-up card a guess is made against.
pub fn deal_first_card<R: RandomSource>(rng: &mut R) -> u8 {
    HILO_MIN_RANK + rng.next_below(RANK_SPAN) as u8
}

/// Draw the next card and settle the guess.
pub fn draw<R: RandomSource>(
    bet: u64,
    guess: HiLoGuess,
    current: u8,
    rules: HiLoRules,
    rng: &mut R,
) -> RoundOutcome {
    let next = HILO_MIN_RANK + rng.next_below(RANK_SPAN) as u8;
    let won = match guess {
        HiLoGuess::Higher => next > current || (rules.tie_wins && next == current),
        HiLoGuess::Lower => next < current || (rules.tie_wins && next == current),
    };
    let reveal = vec![RevealEvent::Card { rank: next }];
    if won {
        RoundOutcome::win(bet, HILO_MULTIPLIER, reveal)
    } else {
        RoundOutcome::loss(reveal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::ScriptedRng;
    use crate::rng::GameRng;

    fn scripted_rank(rank: u8) -> ScriptedRng {
        let mut rng = ScriptedRng::new();
        rng.push_int((rank - HILO_MIN_RANK) as u32);
        rng
    }

    #[test]
    fn test_higher_guess_wins() {
        let mut rng = scripted_rank(10);
        let outcome = draw(100, HiLoGuess::Higher, 8, HiLoRules::default(), &mut rng);
        assert!(outcome.is_win);
        assert_eq!(outcome.multiplier, HILO_MULTIPLIER);
        assert_eq!(outcome.payout, 195);
        assert_eq!(outcome.reveal, vec![RevealEvent::Card { rank: 10 }]);
    }

    #[test]
    fn test_lower_guess_loses_on_higher_card() {
        let mut rng = scripted_rank(14);
        let outcome = draw(100, HiLoGuess::Lower, 8, HiLoRules::default(), &mut rng);
        assert!(!outcome.is_win);
        assert_eq!(outcome.payout, 0);
    }

    #[test]
    fn test_tie_favors_guesser_by_default() {
        for guess in [HiLoGuess::Higher, HiLoGuess::Lower] {
            let mut rng = scripted_rank(8);
            let outcome = draw(100, guess, 8, HiLoRules::default(), &mut rng);
            assert!(outcome.is_win, "tie must win under default rules");
        }
    }

    #[test]
    fn test_tie_loses_under_strict_rules() {
        let rules = HiLoRules { tie_wins: false };
        for guess in [HiLoGuess::Higher, HiLoGuess::Lower] {
            let mut rng = scripted_rank(8);
            let outcome = draw(100, guess, 8, rules, &mut rng);
            assert!(!outcome.is_win, "tie must lose under strict rules");
        }
    }

    #[test]
    fn test_dealt_cards_stay_in_rank_range() {
        let mut rng = GameRng::for_round(17, 1);
        for _ in 0..500 {
            let card = deal_first_card(&mut rng);
            assert!((HILO_MIN_RANK..=HILO_MAX_RANK).contains(&card));
        }
    }
}
