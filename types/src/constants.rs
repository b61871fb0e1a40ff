/// Balance assigned locally when the ledger cannot be reached at startup.
pub const STARTING_BALANCE: u64 = 1_000;

/// Mines board size (5x5 grid).
pub const MINES_GRID_SIZE: u8 = 25;

/// Maximum mines on a board (at least one tile must stay safe).
pub const MINES_MAX_COUNT: u8 = 24;

/// Keno number pool (numbers 1..=KENO_POOL).
pub const KENO_POOL: u8 = 20;

/// Numbers drawn per keno round.
pub const KENO_DRAW_COUNT: usize = 10;

/// Maximum numbers a player may select in keno.
pub const KENO_MAX_PICKS: usize = 5;

/// Card ranks for hilo (2..=14, Ace high).
pub const HILO_MIN_RANK: u8 = 2;
pub const HILO_MAX_RANK: u8 = 14;

/// Dice threshold bounds (roll-over slider).
pub const DICE_MIN_THRESHOLD: u8 = 2;
pub const DICE_MAX_THRESHOLD: u8 = 98;

/// Roulette pockets (0..=36, single-zero wheel).
pub const ROULETTE_POCKETS: u8 = 37;
