/* For importing/exporting positions based on formats */

use std::fmt;

use crate::board::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("expected '<rows> <selected> <side>', got {0} fields")]
    Fields(usize),
    #[error("expected 4 rows of 4 cells separated by '/'")]
    Shape,
    #[error("bad cell '{0}': expected a hex digit or '.'")]
    Cell(char),
    #[error("bad selected piece '{0}': expected a hex digit or '-'")]
    Selected(String),
    #[error("bad side to move '{0}': expected 0 or 1")]
    Side(String),
    #[error("inconsistent position: {0}")]
    Position(#[from] InvalidMove),
}

fn parse_piece(c: char) -> Option<Piece> {
    c.to_digit(16).and_then(|d| Piece::new(d as u8).ok())
}

fn hex(piece: Option<Piece>, empty: char) -> char {
    match piece {
        Some(p) => std::char::from_digit(p.id() as u32, 16).unwrap_or('?'),
        None => empty,
    }
}

impl GameState {
    /*
    A compact position: four rows of cells, top row first, each cell a
    hex piece id or '.', then the selected piece ('-' for none) and the
    side to move. A full drawn board with nothing selected, first side
    to move:

    c827/50a4/be93/1d6f - 0

    A completed line is credited to the side to move, as if that side had
    just placed, so the side field decides the winner of a decided position.
    */
    pub fn from_compact(repr: &str) -> Result<GameState, FormatError> {
        let fields: Vec<&str> = repr.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(FormatError::Fields(fields.len()));
        }

        let rows: Vec<&str> = fields[0].split('/').collect();
        if rows.len() != SIDE as usize || rows.iter().any(|r| r.chars().count() != SIDE as usize) {
            return Err(FormatError::Shape);
        }
        let mut cells = [None; CELLS];
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                cells[y * SIDE as usize + x] = match c {
                    '.' => None,
                    _ => Some(parse_piece(c).ok_or(FormatError::Cell(c))?),
                };
            }
        }

        let selected = match fields[1] {
            "-" => None,
            s => {
                let mut chars = s.chars();
                match (chars.next().and_then(parse_piece), chars.next()) {
                    (Some(p), None) => Some(p),
                    _ => return Err(FormatError::Selected(s.to_string())),
                }
            }
        };

        let side = match fields[2] {
            "0" => Side::First,
            "1" => Side::Second,
            s => return Err(FormatError::Side(s.to_string())),
        };

        Ok(GameState::from_parts(cells, selected, side)?)
    }

    pub fn to_compact(&self) -> String {
        let rows: Vec<String> = self
            .cells()
            .chunks(SIDE as usize)
            .map(|row| row.iter().map(|&c| hex(c, '.')).collect())
            .collect();
        format!(
            "{} {} {}",
            rows.join("/"),
            hex(self.selected(), '-'),
            self.current_side().index()
        )
    }

    // every piece drawn as its four attribute bits, highest first
    pub fn to_pretty_board(&self) -> String {
        let mut repr = String::from("     0    1    2    3\n");
        for y in 0..SIDE {
            repr.push_str(&format!("{} ", y));
            for x in 0..SIDE {
                match self.cell(x, y) {
                    Some(p) => repr.push_str(&format!(" {:04b}", p.id())),
                    None => repr.push_str(" ...."),
                }
            }
            repr.push('\n');
        }
        match self.selected() {
            Some(p) => repr.push_str(&format!("selected: {:04b} ({})", p.id(), p)),
            None => repr.push_str("selected: none"),
        }
        repr.push_str(&format!("; to move: {}\n", self.current_side().index()));
        repr
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_pretty_board())
    }
}
