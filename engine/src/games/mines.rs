//! Mines.
//!
//! A 5x5 board hides `m` mines. Each safe reveal compounds the running
//! multiplier:
//!
//! `mult *= 1 + (m / (25 - safe_revealed)) * 0.9`
//!
//! where `safe_revealed` counts the tile just opened. Hitting a mine ends the
//! round at multiplier zero. The player may cash out between reveals; the
//! cash-out value is capped by the full-clear multiplier computed up front.
//!
//! The generated outcome is the mine layout itself (as `Tile` reveal events)
//! with a losing baseline; the interactive [`MinesBoard`] drives reveals and
//! the live multiplier against that pre-drawn layout.

use crate::rng::RandomSource;
use chiprush_types::{RevealEvent, RoundOutcome, MINES_GRID_SIZE};
use std::fmt;

/// Growth retention per safe tile.
const GROWTH_SHARE: f64 = 0.9;

/// Multiplier growth factor for the `safe_revealed`-th safe tile (1-based).
pub fn growth_factor(mines: u8, safe_revealed: u8) -> f64 {
    1.0 + (mines as f64 / (MINES_GRID_SIZE - safe_revealed) as f64) * GROWTH_SHARE
}

/// Multiplier after clearing every safe tile (the cash-out ceiling).
pub fn full_clear_multiplier(mines: u8) -> f64 {
    let safe_tiles = MINES_GRID_SIZE - mines;
    (1..=safe_tiles).fold(1.0, |mult, k| mult * growth_factor(mines, k))
}

/// Draw a sorted mine layout with a fixed number of draws (partial shuffle).
pub fn mine_layout<R: RandomSource>(mines: u8, rng: &mut R) -> Vec<u8> {
    let mut tiles: Vec<u8> = (0..MINES_GRID_SIZE).collect();
    for i in 0..mines as usize {
        let j = i + rng.next_below((MINES_GRID_SIZE as usize - i) as u32) as usize;
        tiles.swap(i, j);
    }
    let mut layout = tiles[..mines as usize].to_vec();
    layout.sort_unstable();
    layout
}

/// Generate the round outcome: the mine layout plus the cash-out ceiling.
///
/// The baseline is a loss; a cash-out before any mine upgrades it.
pub fn generate<R: RandomSource>(mines: u8, rng: &mut R) -> RoundOutcome {
    let layout = mine_layout(mines, rng);
    let reveal = layout
        .iter()
        .map(|&index| RevealEvent::Tile { index, mine: true })
        .collect();
    RoundOutcome::loss(reveal).with_ceiling(full_clear_multiplier(mines))
}

/// Errors from interacting with a mines board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinesError {
    /// Tile index outside the 5x5 board.
    OutOfBounds(u8),
    /// Tile already opened.
    AlreadyRevealed(u8),
    /// A mine already ended this board.
    Busted,
}

impl fmt::Display for MinesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(index) => write!(f, "tile index out of bounds: {}", index),
            Self::AlreadyRevealed(index) => write!(f, "tile already revealed: {}", index),
            Self::Busted => write!(f, "board already busted"),
        }
    }
}

impl std::error::Error for MinesError {}

/// Result of opening one tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TileReveal {
    /// Safe tile; the running multiplier after this reveal.
    Safe { multiplier: f64 },
    /// Mine: the round is over at multiplier zero.
    Mine,
}

/// Interactive board state over a pre-drawn layout.
#[derive(Clone, Debug)]
pub struct MinesBoard {
    mines: [bool; MINES_GRID_SIZE as usize],
    revealed: [bool; MINES_GRID_SIZE as usize],
    mine_count: u8,
    safe_revealed: u8,
    multiplier: f64,
    busted: bool,
}

impl MinesBoard {
    /// Build a board from mine positions.
    pub fn new(layout: &[u8]) -> Self {
        let mut mines = [false; MINES_GRID_SIZE as usize];
        let mut mine_count = 0;
        for &index in layout {
            if (index as usize) < mines.len() && !mines[index as usize] {
                mines[index as usize] = true;
                mine_count += 1;
            }
        }
        Self {
            mines,
            revealed: [false; MINES_GRID_SIZE as usize],
            mine_count,
            safe_revealed: 0,
            multiplier: 1.0,
            busted: false,
        }
    }

    /// Rebuild the board from a generated outcome's reveal events.
    pub fn from_outcome(outcome: &RoundOutcome) -> Self {
        let layout: Vec<u8> = outcome
            .reveal
            .iter()
            .filter_map(|event| match event {
                RevealEvent::Tile { index, mine: true } => Some(*index),
                _ => None,
            })
            .collect();
        Self::new(&layout)
    }

    /// Open a tile.
    pub fn reveal(&mut self, index: u8) -> Result<TileReveal, MinesError> {
        if self.busted {
            return Err(MinesError::Busted);
        }
        if index >= MINES_GRID_SIZE {
            return Err(MinesError::OutOfBounds(index));
        }
        let slot = index as usize;
        if self.revealed[slot] {
            return Err(MinesError::AlreadyRevealed(index));
        }
        self.revealed[slot] = true;
        if self.mines[slot] {
            self.busted = true;
            tracing::debug!(index, "mine hit");
            return Ok(TileReveal::Mine);
        }
        self.safe_revealed += 1;
        self.multiplier *= growth_factor(self.mine_count, self.safe_revealed);
        Ok(TileReveal::Safe {
            multiplier: self.multiplier,
        })
    }

    /// Running multiplier (1.0 before the first safe reveal).
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn safe_revealed(&self) -> u8 {
        self.safe_revealed
    }

    pub fn is_busted(&self) -> bool {
        self.busted
    }

    /// True once every safe tile is open.
    pub fn is_cleared(&self) -> bool {
        !self.busted && self.safe_revealed == MINES_GRID_SIZE - self.mine_count
    }
}
