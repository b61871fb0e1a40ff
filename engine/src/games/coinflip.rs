//! Coin flip.
//!
//! The round is decided directly by the configured win chance; the displayed
//! face is derived from the decision, so the reveal always agrees with the
//! result. Wins pay a fixed 2x.

use crate::rng::RandomSource;
use chiprush_types::{CoinSide, GameSettings, RevealEvent, RoundOutcome};

/// Fixed payout on a correct guess.
pub const COINFLIP_MULTIPLIER: f64 = 2.0;

/// Flip for `bet` chips on `side`.
pub fn flip<R: RandomSource>(
    bet: u64,
    side: CoinSide,
    settings: &GameSettings,
    rng: &mut R,
) -> RoundOutcome {
    let won = rng.chance(settings.win_chance);
    let face = if won { side } else { side.other() };
    let reveal = vec![RevealEvent::Coin { face }];
    if won {
        RoundOutcome::win(bet, COINFLIP_MULTIPLIER, reveal)
    } else {
        RoundOutcome::loss(reveal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::ScriptedRng;
    use chiprush_types::GameId;

    fn settings() -> GameSettings {
        GameSettings::default_for(GameId::CoinFlip)
    }

    #[test]
    fn test_win_doubles_bet() {
        let mut rng = ScriptedRng::with_units([0.2]); // below 0.5 win chance
        let outcome = flip(100, CoinSide::Heads, &settings(), &mut rng);
        assert!(outcome.is_win);
        assert_eq!(outcome.multiplier, COINFLIP_MULTIPLIER);
        assert_eq!(outcome.payout, 200);
        assert_eq!(outcome.reveal, vec![RevealEvent::Coin { face: CoinSide::Heads }]);
    }

    #[test]
    fn test_loss_shows_opposite_face() {
        let mut rng = ScriptedRng::with_units([0.9]);
        let outcome = flip(100, CoinSide::Heads, &settings(), &mut rng);
        assert!(!outcome.is_win);
        assert_eq!(outcome.payout, 0);
        assert_eq!(outcome.reveal, vec![RevealEvent::Coin { face: CoinSide::Tails }]);
    }

    #[test]
    fn test_win_chance_zero_always_loses() {
        let mut settings = settings();
        settings.win_chance = 0.0;
        let mut rng = ScriptedRng::with_units([0.0]);
        let outcome = flip(100, CoinSide::Tails, &settings, &mut rng);
        assert!(!outcome.is_win);
    }
}
