//! Chiprush domain types.
//!
//! Defines game identifiers, bet configurations, per-game settings, round
//! outcomes, boosters, and settlement payloads shared by the engine and
//! client crates.

mod bet;
mod booster;
mod constants;
mod game;
mod ledger;
mod outcome;
mod settings;

pub use bet::*;
pub use booster::*;
pub use constants::*;
pub use game::*;
pub use ledger::*;
pub use outcome::*;
pub use settings::*;
