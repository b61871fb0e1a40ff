//! Operator CLI for the chiprush engine.
//!
//! `list` prints the registry; `play` runs one seeded round and prints its
//! reveal schedule; `simulate` estimates per-game return-to-player over many
//! seeded rounds, which is the quickest way to sanity-check a settings row
//! before it ships.

use anyhow::{bail, Result};
use chiprush_engine::games::crash::CrashTimeline;
use chiprush_engine::games::mines::{MinesBoard, TileReveal};
use chiprush_engine::{reveal, GameRegistry, GameRng, GameRound};
use chiprush_types::{
    BetConfig, BetParams, CaseTier, CoinSide, GameId, GameSettings, HiLoGuess, RouletteColor,
    SettlementRecord, MINES_GRID_SIZE,
};
use clap::{Parser, Subcommand};
use rand::Rng;

#[derive(Parser, Debug)]
#[command(name = "chiprush", about = "Chiprush engine operator tool")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List games with their metadata and default settings.
    List,
    /// Play one round and print the outcome with its reveal schedule.
    Play {
        /// Game id (crash, mines, slots, coinflip, dice, roulette, keno,
        /// hilo, cases).
        game: GameId,
        /// Stake in chips (cases ignore this and use the tier price).
        #[arg(long, default_value_t = 100)]
        bet: u64,
        /// RNG seed; random when omitted.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Estimate return-to-player per game over many seeded rounds.
    Simulate {
        /// Restrict to one game id; all games when omitted.
        #[arg(long)]
        game: Option<GameId>,
        /// Rounds per game.
        #[arg(long, default_value_t = 50_000)]
        rounds: u64,
        /// RNG seed for the whole run.
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

/// Running payout statistics for one game.
#[derive(Default)]
struct Stats {
    rounds: u64,
    wins: u64,
    total_wagered: f64,
    total_returned: f64,
}

impl Stats {
    fn add(&mut self, record: &SettlementRecord) {
        self.rounds += 1;
        if record.win > 0 {
            self.wins += 1;
        }
        self.total_wagered += record.bet as f64;
        self.total_returned += record.win as f64;
    }

    fn rtp(&self) -> f64 {
        if self.total_wagered == 0.0 {
            0.0
        } else {
            self.total_returned / self.total_wagered
        }
    }

    fn house_edge(&self) -> f64 {
        1.0 - self.rtp()
    }

    fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.wins as f64 / self.rounds as f64
        }
    }
}

fn default_params(game: GameId) -> BetParams {
    match game {
        GameId::Crash => BetParams::Crash,
        GameId::Mines => BetParams::Mines { mines: 3 },
        GameId::Slots => BetParams::Slots,
        GameId::CoinFlip => BetParams::CoinFlip {
            side: CoinSide::Heads,
        },
        GameId::Dice => BetParams::Dice { threshold: 50 },
        GameId::Roulette => BetParams::Roulette {
            color: RouletteColor::Red,
        },
        GameId::Keno => BetParams::Keno {
            picks: vec![1, 2, 3, 4, 5],
        },
        GameId::HiLo => BetParams::HiLo {
            guess: HiLoGuess::Higher,
            current: 8,
        },
        GameId::Cases => BetParams::Cases {
            tier: CaseTier::Budget,
        },
    }
}

/// Drive one round to settlement with a fixed play policy: crash cashes out
/// at 2x when the flight allows it, mines opens five tiles then banks.
fn play_round(game: GameId, bet: u64, settings: GameSettings, rng: &mut GameRng) -> Result<SettlementRecord> {
    let params = default_params(game);
    let amount = match &params {
        BetParams::Cases { tier } => tier.price(),
        _ => bet,
    };
    let mut round = GameRound::new(settings);
    round.arm(BetConfig::new(amount, params), u64::MAX)?;
    round.resolve(rng)?;

    match game {
        GameId::Crash => {
            let timeline = round
                .outcome()
                .and_then(CrashTimeline::from_outcome)
                .ok_or_else(|| anyhow::anyhow!("crash round missing its timeline"))?;
            let target = 2.0;
            if timeline.crash_point() > target {
                Ok(round.cash_out(target)?)
            } else {
                Ok(round.settle()?)
            }
        }
        GameId::Mines => {
            let outcome = round
                .outcome()
                .ok_or_else(|| anyhow::anyhow!("mines round missing its outcome"))?;
            let mut board = MinesBoard::from_outcome(outcome);
            for index in 0..MINES_GRID_SIZE {
                if board.safe_revealed() >= 5 {
                    break;
                }
                if matches!(board.reveal(index)?, TileReveal::Mine) {
                    return Ok(round.settle()?);
                }
            }
            Ok(round.cash_out(board.multiplier())?)
        }
        _ => Ok(round.settle()?),
    }
}

fn run_list() {
    let registry = GameRegistry::new();
    println!(
        "{:<10} {:<10} {:<12} {:<10} {:<10} {}",
        "game", "win_chance", "max_mult", "early_exit", "active", "description"
    );
    for info in registry.all_games_info() {
        let settings = registry.settings_for(info.game);
        println!(
            "{:<10} {:<10.2} {:<12.1} {:<10} {:<10} {}",
            info.game.to_string(),
            settings.win_chance,
            settings.max_multiplier,
            info.early_exit,
            info.active,
            info.description
        );
    }
}

fn run_play(game: GameId, bet: u64, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    let settings = GameSettings::default_for(game);
    let mut rng = GameRng::for_round(seed, 0);

    let mut round = GameRound::new(settings);
    let params = default_params(game);
    let amount = match &params {
        BetParams::Cases { tier } => tier.price(),
        _ => bet,
    };
    round.arm(BetConfig::new(amount, params), u64::MAX)?;
    let outcome = round.resolve(&mut rng)?.clone();

    println!("seed: {seed}");
    println!(
        "result: {} (multiplier {:.2}, payout {})",
        if outcome.is_win { "WIN" } else { "LOSS" },
        outcome.multiplier,
        outcome.payout
    );
    for timed in reveal::schedule(game, &outcome) {
        println!("  +{:>5}ms {}", timed.at_ms, serde_json::to_string(&timed.event)?);
    }
    Ok(())
}

fn run_simulate(game: Option<GameId>, rounds: u64, seed: u64) -> Result<()> {
    let games: Vec<GameId> = match game {
        Some(g) => vec![g],
        None => GameId::ALL.to_vec(),
    };
    if rounds == 0 {
        bail!("rounds must be greater than zero");
    }

    println!(
        "{:<10} {:>10} {:>10} {:>10} {:>10}",
        "game", "rounds", "win_rate", "rtp", "edge"
    );
    for game in games {
        let settings = GameSettings::default_for(game);
        let mut stats = Stats::default();
        for round_id in 0..rounds {
            let mut rng = GameRng::for_round(seed, round_id);
            let record = play_round(game, 100, settings, &mut rng)?;
            stats.add(&record);
        }
        println!(
            "{:<10} {:>10} {:>9.1}% {:>9.1}% {:>9.1}%",
            game.to_string(),
            stats.rounds,
            stats.win_rate() * 100.0,
            stats.rtp() * 100.0,
            stats.house_edge() * 100.0
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::List => {
            run_list();
            Ok(())
        }
        Command::Play { game, bet, seed } => run_play(game, bet, seed),
        Command::Simulate { game, rounds, seed } => run_simulate(game, rounds, seed),
    }
}
