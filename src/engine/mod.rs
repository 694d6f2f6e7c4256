pub mod config;
pub mod eval;
pub mod search;
pub mod utils;

use std::fmt;

use crate::board::*;
use crate::engine::config::*;
use crate::engine::search::*;

pub type Score = i32;

// strictly above anything the cutoff heuristic can return (at most 10 lines)
pub const WIN_SCORE: Score = 16;
pub const DRAW_SCORE: Score = 0;

// don't exceed these pls
pub(crate) const SCORE_NEG_INF: Score = -1_000_000;
pub(crate) const SCORE_POS_INF: Score = 1_000_000;

/// One decision of the side to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Opening hand-over, made before any piece is on the board.
    Select(Piece),
    /// Place the selected piece, then hand `next` to the opponent.
    Place { x: u8, y: u8, next: Piece },
    /// A placement that ends the game; nothing is handed over.
    PlaceLast { x: u8, y: u8 },
}

impl Move {
    pub fn cell(&self) -> Option<Coord> {
        match *self {
            Move::Select(_) => None,
            Move::Place { x, y, .. } | Move::PlaceLast { x, y } => Some((x, y)),
        }
    }

    pub fn next_piece(&self) -> Option<Piece> {
        match *self {
            Move::Select(piece) | Move::Place { next: piece, .. } => Some(piece),
            Move::PlaceLast { .. } => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Select(piece) => write!(f, "give {}", piece),
            Move::Place { x, y, next } => write!(f, "place ({}, {}), give {}", x, y, next),
            Move::PlaceLast { x, y } => write!(f, "place ({}, {})", x, y),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub value: Score,
    /// None only for leaves scored without expanding them.
    pub best_move: Option<Move>,
}

impl SearchResult {
    pub(crate) fn leaf(value: Score) -> SearchResult {
        SearchResult {
            value,
            best_move: None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited by the last search.
    pub nodes: u64,
    /// Searches run so far.
    pub searches: u64,
    /// Depth bound of the last search.
    pub last_depth: Option<Depth>,
}

// single-threaded; searches `pos` for the side to move
pub fn best_move(depth: Depth, pos: &GameState) -> Result<SearchResult, InvalidMove> {
    let mut worker = Worker::from_position(pos, depth);
    worker.search()
}
