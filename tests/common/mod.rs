#![allow(dead_code)]

use quarto::board::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

// full board, no line shares an attribute
pub const DRAWN_BOARD: &str = "c827/50a4/be93/1d6f - 0";

pub fn piece(id: u8) -> Piece {
    Piece::new(id).unwrap()
}

pub fn position(repr: &str) -> GameState {
    GameState::from_compact(repr).unwrap()
}

// random playout from the empty board, stopped right after a hand-over
// that leaves `empty` cells open. playouts that end early are retried
// with the next seed
pub fn random_position(seed: u64, empty: u32) -> GameState {
    assert!(empty >= 1 && empty <= 16);
    for s in seed.. {
        let mut rng = SmallRng::seed_from_u64(s);
        let mut pos = GameState::new();
        loop {
            let pieces: Vec<Piece> = pos.legal_pieces().collect();
            let piece = *pieces.choose(&mut rng).unwrap();
            pos.select(piece).unwrap();
            pos.end_turn();
            if pos.empty_cells() == empty {
                return pos;
            }
            let cells: Vec<Coord> = pos.legal_cells().collect();
            let (x, y) = *cells.choose(&mut rng).unwrap();
            pos.place(x, y).unwrap();
            if pos.is_over() {
                break;
            }
        }
    }
    unreachable!()
}

// can the side to move complete a line with the piece it holds
pub fn can_win_now(pos: &GameState) -> bool {
    pos.legal_cells().any(|(x, y)| {
        let mut temp = *pos;
        temp.place(x, y).unwrap();
        temp.check_winner().is_some()
    })
}
