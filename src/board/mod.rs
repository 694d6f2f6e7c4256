use std::fmt;

pub mod rules;

use rules::has_winning_line;

pub const SIDE: u8 = 4;
pub const CELLS: usize = 16;
pub const PIECES: u8 = 16;

const ALL_CELLS: u16 = 0xFFFF;
const ALL_PIECES: u16 = 0xFFFF;

/// (x, y) coordinates of a cell: column first, then row.
pub type Coord = (u8, u8);

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("cell ({0}, {1}) is off the board")]
    OutOfBounds(u8, u8),
    #[error("cell ({0}, {1}) is already occupied")]
    Occupied(u8, u8),
    #[error("no piece is selected for placement")]
    NothingSelected,
    #[error("piece {0} is already selected")]
    AlreadySelected(Piece),
    #[error("piece {0} is already on the board")]
    AlreadyPlaced(Piece),
    #[error("piece {0} does not exist")]
    NoSuchPiece(u8),
    #[error("no legal move is left")]
    NoLegalMove,
}

/// One of the 16 pieces. Bit k of the id is attribute k.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Piece(u8);

impl Piece {
    pub fn new(id: u8) -> Result<Piece, InvalidMove> {
        if id < PIECES {
            Ok(Piece(id))
        } else {
            Err(InvalidMove::NoSuchPiece(id))
        }
    }

    #[inline(always)]
    pub fn id(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub fn has(self, attribute: u8) -> bool {
        self.0 & (1 << attribute) != 0
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    First = 0,
    Second = 1,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Pieces that may still be handed over, yielded in ascending id order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceSet(u16);

impl PieceSet {
    pub fn size(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, piece: Piece) -> bool {
        self.0 & (1 << piece.id()) != 0
    }
}

impl Iterator for PieceSet {
    type Item = Piece;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let i = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Piece(i))
    }
}

/// Empty cells, yielded in row-major order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellSet(u16);

impl CellSet {
    pub fn size(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, (x, y): Coord) -> bool {
        x < SIDE && y < SIDE && self.0 & (1 << to_index(x, y)) != 0
    }
}

impl Iterator for CellSet {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let i = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(to_coord(i))
    }
}

#[inline(always)]
pub fn to_index(x: u8, y: u8) -> usize {
    (y * SIDE + x) as usize
}

#[inline(always)]
pub fn to_coord(index: usize) -> Coord {
    (index as u8 % SIDE, index as u8 / SIDE)
}

/*
Whole game state: 16 cells, two occupancy masks kept in sync with the
cells, the piece waiting to be placed and the side to move. Copying it
is a flat memcpy, so every search branch owns its own copy.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    cells: [Option<Piece>; CELLS],
    occupied: u16, // cell mask
    placed: u16,   // piece mask
    selected: Option<Piece>,
    current: Side,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl GameState {
    pub fn new() -> GameState {
        GameState {
            cells: [None; CELLS],
            occupied: 0,
            placed: 0,
            selected: None,
            current: Side::First,
        }
    }

    #[inline(always)]
    pub fn cells(&self) -> &[Option<Piece>; CELLS] {
        &self.cells
    }

    pub fn cell(&self, x: u8, y: u8) -> Option<Piece> {
        if x < SIDE && y < SIDE {
            self.cells[to_index(x, y)]
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn selected(&self) -> Option<Piece> {
        self.selected
    }

    #[inline(always)]
    pub fn current_side(&self) -> Side {
        self.current
    }

    /// Put the selected piece on (x, y) and clear the selection.
    pub fn place(&mut self, x: u8, y: u8) -> Result<(), InvalidMove> {
        if x >= SIDE || y >= SIDE {
            return Err(InvalidMove::OutOfBounds(x, y));
        }
        let index = to_index(x, y);
        if self.occupied & (1 << index) != 0 {
            return Err(InvalidMove::Occupied(x, y));
        }
        let piece = self.selected.take().ok_or(InvalidMove::NothingSelected)?;
        self.cells[index] = Some(piece);
        self.occupied |= 1 << index;
        self.placed |= 1 << piece.id();
        Ok(())
    }

    /// Hand `piece` over for the next placement. A different piece
    /// replaces the current selection.
    pub fn select(&mut self, piece: Piece) -> Result<(), InvalidMove> {
        if self.placed & (1 << piece.id()) != 0 {
            return Err(InvalidMove::AlreadyPlaced(piece));
        }
        if self.selected == Some(piece) {
            return Err(InvalidMove::AlreadySelected(piece));
        }
        self.selected = Some(piece);
        Ok(())
    }

    pub fn end_turn(&mut self) {
        self.current = self.current.other();
    }

    pub fn legal_pieces(&self) -> PieceSet {
        let selected = self.selected.map_or(0, |p| 1 << p.id());
        PieceSet(!(self.placed | selected) & ALL_PIECES)
    }

    pub fn legal_cells(&self) -> CellSet {
        CellSet(!self.occupied & ALL_CELLS)
    }

    pub fn empty_cells(&self) -> u32 {
        self.legal_cells().size()
    }

    pub fn filled_cells(&self) -> u32 {
        self.occupied.count_ones()
    }

    /// The side that completed a line. Lines can only be completed by a
    /// placement, and the placing side is still the one to move until it
    /// ends its turn.
    pub fn check_winner(&self) -> Option<Side> {
        if has_winning_line(&self.cells) {
            Some(self.current)
        } else {
            None
        }
    }

    pub fn check_finished(&self) -> bool {
        self.occupied == ALL_CELLS
    }

    pub fn is_draw(&self) -> bool {
        self.check_finished() && self.check_winner().is_none()
    }

    pub fn is_over(&self) -> bool {
        self.check_finished() || self.check_winner().is_some()
    }

    // rebuild a state cell by cell. used by the text formats
    pub(crate) fn from_parts(
        cells: [Option<Piece>; CELLS],
        selected: Option<Piece>,
        current: Side,
    ) -> Result<GameState, InvalidMove> {
        let mut pos = GameState::new();
        pos.current = current;
        for (index, cell) in cells.iter().enumerate() {
            if let Some(piece) = *cell {
                let (x, y) = to_coord(index);
                pos.select(piece)?;
                pos.place(x, y)?;
            }
        }
        if let Some(piece) = selected {
            pos.select(piece)?;
        }
        Ok(pos)
    }

    pub fn assert(&self) -> bool {
        let mut occupied = 0u16;
        let mut placed = 0u16;
        for (i, cell) in self.cells.iter().enumerate() {
            if let Some(piece) = cell {
                // placed once
                assert_eq!(placed & (1 << piece.id()), 0);
                placed |= 1 << piece.id();
                occupied |= 1 << i;
            }
        }
        assert_eq!(occupied, self.occupied);
        assert_eq!(placed, self.placed);
        assert_eq!(self.filled_cells() + self.empty_cells(), CELLS as u32);
        if let Some(piece) = self.selected {
            assert_eq!(placed & (1 << piece.id()), 0);
        }
        true
    }
}

// number of (cell, piece) decision sequences `depth` turns deep.
// a placement that ends the game counts as one sequence
pub fn perft(depth: u16, pos: &GameState) -> Result<u64, InvalidMove> {
    debug_assert!(pos.assert());
    if depth == 0 {
        return Ok(1);
    }

    let mut count: u64 = 0;
    if pos.selected().is_none() {
        for piece in pos.legal_pieces() {
            let mut temp = *pos;
            temp.select(piece)?;
            temp.end_turn();
            count += perft(depth - 1, &temp)?;
        }
        return Ok(count);
    }

    for (x, y) in pos.legal_cells() {
        let mut middle = *pos;
        middle.place(x, y)?;
        if middle.is_over() {
            count += 1;
            continue;
        }
        for piece in middle.legal_pieces() {
            let mut temp = middle;
            temp.select(piece)?;
            temp.end_turn();
            count += perft(depth - 1, &temp)?;
        }
    }
    Ok(count)
}
