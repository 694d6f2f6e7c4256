use quarto::board::*;
use quarto::engine::config::Depth;
use quarto::engine::search::{brute_force_search, Worker};
use quarto::engine::*;
mod common;

#[test]
fn takes_the_win() {
    // 9 completes the bottom row on (3, 3), the last cell tried
    let pos = common::position("..../..../..../135. 9 0");
    for &depth in &[Depth::Limited(1), Depth::Limited(2)] {
        let result = best_move(depth, &pos).unwrap();
        assert_eq!(result.value, WIN_SCORE);
        assert_eq!(result.best_move, Some(Move::PlaceLast { x: 3, y: 3 }));
    }
}

#[test]
fn does_not_hand_over_a_win() {
    // pieces with bit 0 set or bit 3 clear complete the bottom row;
    // after placing 8 only 10, 12 and 14 are safe, unless 8 fills the hole
    let pos = common::position("..../..../..../135. 8 0");
    let result = best_move(Depth::Limited(2), &pos).unwrap();
    assert!(result.value > -WIN_SCORE);

    let (x, y, next) = match result.best_move {
        Some(Move::Place { x, y, next }) => (x, y, next),
        other => panic!("unexpected move {:?}", other),
    };
    let mut after = pos;
    after.place(x, y).unwrap();
    after.select(next).unwrap();
    after.end_turn();
    assert!(!common::can_win_now(&after));
    assert!((x, y) == (3, 3) || [10, 12, 14].contains(&next.id()));
}

#[test]
fn alpha_beta_agrees_with_minimax() {
    for seed in 0..6 {
        for &(empty, depth) in &[
            (4, Depth::Unbounded),
            (5, Depth::Unbounded),
            (6, Depth::Unbounded),
            (8, Depth::Limited(2)),
            (10, Depth::Limited(1)),
        ] {
            let pos = common::random_position(seed * 100, empty);
            let expected = brute_force_search(depth, &pos).unwrap();
            let result = best_move(depth, &pos).unwrap();
            assert_eq!(result, expected, "{} at depth {}", pos.to_compact(), depth);
        }
    }
}

#[test]
fn pruning_visits_fewer_nodes() {
    let pos = common::random_position(7, 6);
    let mut worker = Worker::from_position(&pos, Depth::Unbounded);
    worker.search().unwrap();
    // 6 cells, 5 pieces, 5 cells, 4 pieces, ... without any cut
    assert!(worker.nodes() < 1 + 30 + 30 * 20 + 30 * 20 * 12 + 30 * 20 * 12 * 6 + 30 * 20 * 12 * 6 * 2);
}

#[test]
fn search_is_deterministic() {
    let pos = common::random_position(42, 9);
    let mut first = Worker::from_position(&pos, Depth::Limited(2));
    let mut second = Worker::from_position(&pos, Depth::Limited(2));
    assert_eq!(first.search().unwrap(), second.search().unwrap());
    assert_eq!(first.nodes(), second.nodes());
}

#[test]
fn result_is_always_legal() {
    for seed in 0..10 {
        for &empty in &[16, 12, 7, 3, 1] {
            let pos = common::random_position(seed, empty);
            let result = best_move(Depth::Limited(1), &pos).unwrap();
            match result.best_move.unwrap() {
                Move::Place { x, y, next } => {
                    assert!(pos.legal_cells().contains((x, y)));
                    assert!(pos.legal_pieces().contains(next));
                }
                Move::PlaceLast { x, y } => {
                    let mut after = pos;
                    after.place(x, y).unwrap();
                    assert!(after.is_over());
                }
                Move::Select(_) => panic!("a piece is already selected"),
            }
        }
    }
}

#[test]
fn value_is_bounded() {
    for seed in 0..10 {
        let pos = common::random_position(seed, 11);
        let value = best_move(Depth::Limited(1), &pos).unwrap().value;
        assert!(value >= -WIN_SCORE && value <= WIN_SCORE);
    }
}
