use crate::board::rules::{common_attributes, filled_in_line, line_pieces, LINES};
use crate::board::{GameState, Side};
use crate::engine::*;

pub type EvalFn = fn(&GameState, Side) -> Score;

// score of a position right after a placement, from `me`'s point of view.
// None while the game goes on. The placing side is still the one to move.
pub fn terminal_score(pos: &GameState, me: Side) -> Option<Score> {
    match pos.check_winner() {
        Some(winner) if winner == me => Some(WIN_SCORE),
        Some(_) => Some(-WIN_SCORE),
        None if pos.check_finished() => Some(DRAW_SCORE),
        None => None,
    }
}

/// Lines with three pieces and one hole whose pieces still agree on an
/// attribute, i.e. lines the right piece would complete.
pub fn open_lines(pos: &GameState) -> Score {
    let cells = pos.cells();
    LINES
        .iter()
        .filter(|line| {
            filled_in_line(cells, line) == 3 && common_attributes(line_pieces(cells, line)) != 0
        })
        .count() as Score
}

// open lines favour whoever is about to place
pub fn eval(pos: &GameState, me: Side) -> Score {
    let score = open_lines(pos);
    if pos.current_side() == me {
        score
    } else {
        -score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    fn put(pos: &mut GameState, id: u8, x: u8, y: u8) {
        pos.select(Piece::new(id).unwrap()).unwrap();
        pos.place(x, y).unwrap();
    }

    #[test]
    fn empty_board_is_even() {
        let pos = GameState::new();
        assert_eq!(open_lines(&pos), 0);
        assert_eq!(eval(&pos, Side::First), 0);
        assert_eq!(eval(&pos, Side::Second), 0);
    }

    #[test]
    fn open_line_sign_follows_mover() {
        let mut pos = GameState::new();
        put(&mut pos, 1, 0, 0);
        put(&mut pos, 3, 1, 0);
        put(&mut pos, 5, 2, 0);
        assert_eq!(open_lines(&pos), 1);
        assert_eq!(eval(&pos, Side::First), 1);
        assert_eq!(eval(&pos, Side::Second), -1);
    }

    #[test]
    fn dead_line_does_not_count() {
        let mut pos = GameState::new();
        // 0000, 1111 and 0110 share nothing
        put(&mut pos, 0, 0, 1);
        put(&mut pos, 15, 1, 1);
        put(&mut pos, 6, 2, 1);
        assert_eq!(open_lines(&pos), 0);
    }

    #[test]
    fn terminal_scores() {
        let mut pos = GameState::new();
        put(&mut pos, 1, 0, 0);
        assert_eq!(terminal_score(&pos, Side::First), None);
        put(&mut pos, 3, 1, 0);
        put(&mut pos, 5, 2, 0);
        put(&mut pos, 7, 3, 0);
        assert_eq!(terminal_score(&pos, Side::First), Some(WIN_SCORE));
        assert_eq!(terminal_score(&pos, Side::Second), Some(-WIN_SCORE));
    }
}
