use quarto::board::*;
use quarto::engine::eval::{eval, open_lines, terminal_score};
use quarto::engine::{DRAW_SCORE, WIN_SCORE};
mod common;

#[test]
fn placing_completes_a_row() {
    // 1, 3 and 5 all have bit 0 set, and so does 9
    let mut pos = common::position("135./..../..../.... 9 1");
    assert_eq!(pos.check_winner(), None);
    pos.place(3, 0).unwrap();
    assert_eq!(pos.check_winner(), Some(Side::Second));
    assert!(!pos.check_finished());
    assert_eq!(terminal_score(&pos, Side::Second), Some(WIN_SCORE));
    assert_eq!(terminal_score(&pos, Side::First), Some(-WIN_SCORE));
}

#[test]
fn shared_absence_wins_too() {
    // 0, 2, 4 and 6 all lack bit 0 and bit 3
    let mut pos = common::position("..../0.../2.../4... 6 0");
    pos.place(0, 0).unwrap();
    assert_eq!(pos.check_winner(), Some(Side::First));
}

#[test]
fn full_board_without_line_is_drawn() {
    let pos = common::position(common::DRAWN_BOARD);
    assert!(pos.check_finished());
    assert_eq!(pos.check_winner(), None);
    assert!(pos.is_draw());
    assert_eq!(terminal_score(&pos, Side::First), Some(DRAW_SCORE));
    assert_eq!(pos.legal_cells().size(), 0);
    assert_eq!(pos.legal_pieces().size(), 0);
}

#[test]
fn heuristic_needs_three_in_a_line() {
    // no line holds exactly three pieces
    for repr in &[
        "..../..../..../.... - 0",
        "1.3./..../5.../.... 7 0",
        "c8../50../..../.... 1 1",
        common::DRAWN_BOARD,
    ] {
        let pos = common::position(repr);
        assert_eq!(open_lines(&pos), 0, "{}", repr);
        assert_eq!(eval(&pos, Side::First), 0);
        assert_eq!(eval(&pos, Side::Second), 0);
    }
}

#[test]
fn heuristic_counts_every_open_line() {
    // row 0 (1, 3, 5) and column 0 (1, 9, b) are open; the diagonal
    // 1, 7, d shares bit 0 as well
    let pos = common::position("135./9.../b.7./.... d 0");
    assert_eq!(open_lines(&pos), 2);
    let pos = common::position("135./9.../b.7./...d 0 1");
    assert_eq!(open_lines(&pos), 3);
    assert_eq!(eval(&pos, Side::Second), 3);
    assert_eq!(eval(&pos, Side::First), -3);
}
