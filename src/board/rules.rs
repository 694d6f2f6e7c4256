use super::{Piece, CELLS};

/*
Cells are indexed row-major from the top-left:

0  1  2  3
4  5  6  7
8  9  10 11
12 13 14 15

A line is won when its four pieces all have some attribute bit set,
or all have some attribute bit clear.
*/
pub const LINES: [[usize; 4]; 10] = [
    // rows
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [8, 9, 10, 11],
    [12, 13, 14, 15],
    // columns
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    // diagonals
    [0, 5, 10, 15],
    [3, 6, 9, 12],
];

pub const ATTRIBUTE_MASK: u8 = 0b1111;

// attribute bits on which every given piece agrees, either all set or all clear.
// the present and absent halves can't overlap, so they are or'ed together
pub fn common_attributes<I>(pieces: I) -> u8
where
    I: IntoIterator<Item = Piece>,
{
    let mut present = ATTRIBUTE_MASK;
    let mut absent = ATTRIBUTE_MASK;
    for piece in pieces {
        present &= piece.id();
        absent &= !piece.id() & ATTRIBUTE_MASK;
    }
    present | absent
}

#[inline]
pub fn line_pieces<'a>(
    cells: &'a [Option<Piece>; CELLS],
    line: &'a [usize; 4],
) -> impl Iterator<Item = Piece> + 'a {
    line.iter().filter_map(move |&i| cells[i])
}

#[inline]
pub fn filled_in_line(cells: &[Option<Piece>; CELLS], line: &[usize; 4]) -> usize {
    line.iter().filter(|&&i| cells[i].is_some()).count()
}

pub fn line_won(cells: &[Option<Piece>; CELLS], line: &[usize; 4]) -> bool {
    filled_in_line(cells, line) == 4 && common_attributes(line_pieces(cells, line)) != 0
}

pub fn has_winning_line(cells: &[Option<Piece>; CELLS]) -> bool {
    LINES.iter().any(|line| line_won(cells, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(ids: &[u8]) -> Vec<Piece> {
        ids.iter().map(|&id| Piece::new(id).unwrap()).collect()
    }

    #[test]
    fn common_present_and_absent() {
        // 0001, 0011, 0101, 0111 all have bit 0 set and bit 3 clear
        assert_eq!(common_attributes(pieces(&[1, 3, 5, 7])), 0b1001);
        // 0000 and 1111 agree on nothing
        assert_eq!(common_attributes(pieces(&[0, 15])), 0);
    }

    #[test]
    fn every_cell_in_three_or_four_lines() {
        let mut count = [0; CELLS];
        for line in LINES.iter() {
            for &i in line {
                count[i] += 1;
            }
        }
        // corners and the inner square sit on a diagonal
        for &i in &[0, 3, 5, 6, 9, 10, 12, 15] {
            assert_eq!(count[i], 3);
        }
        for &i in &[1, 2, 4, 7, 8, 11, 13, 14] {
            assert_eq!(count[i], 2);
        }
    }

    #[test]
    fn partial_line_never_wins() {
        let mut cells = [None; CELLS];
        for (i, p) in pieces(&[1, 3, 5]).into_iter().enumerate() {
            cells[i] = Some(p);
        }
        assert!(!line_won(&cells, &LINES[0]));
        cells[3] = Some(Piece::new(9).unwrap());
        assert!(line_won(&cells, &LINES[0]));
        assert!(has_winning_line(&cells));
    }
}
