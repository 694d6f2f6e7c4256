use crate::board::*;
use crate::engine::config::*;
use crate::engine::eval::*;
use crate::engine::*;

// running best of one node plus its alpha-beta window
struct Frame {
    maximizing: bool,
    alpha: Score,
    beta: Score,
    best: SearchResult,
}

impl Frame {
    fn new(maximizing: bool, alpha: Score, beta: Score) -> Frame {
        let value = if maximizing { SCORE_NEG_INF } else { SCORE_POS_INF };
        Frame {
            maximizing,
            alpha,
            beta,
            best: SearchResult::leaf(value),
        }
    }

    // strict comparisons keep the first move in enumeration order on ties.
    // returns true when the remaining siblings can be cut
    fn offer(&mut self, value: Score, mov: Move) -> bool {
        if self.maximizing {
            if value > self.best.value {
                self.best = SearchResult { value, best_move: Some(mov) };
            }
            if self.best.value >= self.beta {
                return true;
            }
            self.alpha = self.alpha.max(self.best.value);
        } else {
            if value < self.best.value {
                self.best = SearchResult { value, best_move: Some(mov) };
            }
            if self.best.value <= self.alpha {
                return true;
            }
            self.beta = self.beta.min(self.best.value);
        }
        false
    }
}

// give `piece` to the opponent: select it and pass the turn
#[inline]
fn hand_over(pos: &GameState, piece: Piece) -> Result<GameState, InvalidMove> {
    let mut temp = *pos;
    temp.select(piece)?;
    temp.end_turn();
    Ok(temp)
}

/*
Minimax over whole turns. A turn is a placement of the piece received
(skipped on the very first turn) followed by the choice of the piece the
opponent must place next, and both halves are searched together. Values
are always from the searching side's point of view: it maximizes on its
own turns and the opponent minimizes on theirs.
*/
pub struct Worker {
    position: GameState,
    me: Side,
    bound: Depth,
    eval_fn: EvalFn,
    nodes: u64,
}

impl Worker {
    pub fn from_position(pos: &GameState, bound: Depth) -> Worker {
        Worker {
            position: *pos,
            me: pos.current_side(),
            bound: bound.max(Depth::Limited(1)),
            eval_fn: eval, // default to eval; might change later
            nodes: 0,
        }
    }

    pub fn with_eval(mut self, eval_fn: EvalFn) -> Worker {
        self.eval_fn = eval_fn;
        self
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn search(&mut self) -> Result<SearchResult, InvalidMove> {
        if self.position.is_over() {
            return Err(InvalidMove::NoLegalMove);
        }
        let pos = self.position;
        let result = self.alpha_beta(&pos, 0, SCORE_NEG_INF, SCORE_POS_INF)?;
        debug_assert!(result.best_move.is_some());
        Ok(result)
    }

    fn alpha_beta(
        &mut self,
        pos: &GameState,
        depth: u16,
        alpha: Score,
        beta: Score,
    ) -> Result<SearchResult, InvalidMove> {
        debug_assert!(pos.assert());
        self.nodes += 1;

        if self.bound.reached(depth) {
            let f = self.eval_fn;
            return Ok(SearchResult::leaf(f(pos, self.me)));
        }

        let mut frame = Frame::new(pos.current_side() == self.me, alpha, beta);

        if pos.selected().is_none() {
            // first turn of the game: nothing to place yet
            for piece in pos.legal_pieces() {
                let child = hand_over(pos, piece)?;
                let value = self.alpha_beta(&child, depth + 1, frame.alpha, frame.beta)?.value;
                if frame.offer(value, Move::Select(piece)) {
                    break;
                }
            }
            return Ok(frame.best);
        }

        'cells: for (x, y) in pos.legal_cells() {
            let mut middle = *pos;
            middle.place(x, y)?;

            // a finished game has no piece to hand over
            if let Some(value) = terminal_score(&middle, self.me) {
                if frame.offer(value, Move::PlaceLast { x, y }) {
                    break;
                }
                continue;
            }

            for piece in middle.legal_pieces() {
                let child = hand_over(&middle, piece)?;
                let value = self.alpha_beta(&child, depth + 1, frame.alpha, frame.beta)?.value;
                if frame.offer(value, Move::Place { x, y, next: piece }) {
                    break 'cells;
                }
            }
        }
        Ok(frame.best)
    }
}

// plain minimax with no pruning. same move order and tie-breaking as
// the worker, so both must agree on the value and the move
pub fn brute_force_search(bound: Depth, pos: &GameState) -> Result<SearchResult, InvalidMove> {
    if pos.is_over() {
        return Err(InvalidMove::NoLegalMove);
    }
    minimax(bound.max(Depth::Limited(1)), pos, pos.current_side(), 0)
}

fn minimax(bound: Depth, pos: &GameState, me: Side, depth: u16) -> Result<SearchResult, InvalidMove> {
    if bound.reached(depth) {
        return Ok(SearchResult::leaf(eval(pos, me)));
    }

    // an unbounded window never cuts
    let mut frame = Frame::new(pos.current_side() == me, SCORE_NEG_INF, SCORE_POS_INF);
    let mut consider = |value: Score, mov: Move| {
        let maximizing = frame.maximizing;
        if (maximizing && value > frame.best.value) || (!maximizing && value < frame.best.value) {
            frame.best = SearchResult { value, best_move: Some(mov) };
        }
    };

    if pos.selected().is_none() {
        for piece in pos.legal_pieces() {
            let child = hand_over(pos, piece)?;
            consider(minimax(bound, &child, me, depth + 1)?.value, Move::Select(piece));
        }
    } else {
        for (x, y) in pos.legal_cells() {
            let mut middle = *pos;
            middle.place(x, y)?;
            if let Some(value) = terminal_score(&middle, me) {
                consider(value, Move::PlaceLast { x, y });
                continue;
            }
            for piece in middle.legal_pieces() {
                let child = hand_over(&middle, piece)?;
                consider(
                    minimax(bound, &child, me, depth + 1)?.value,
                    Move::Place { x, y, next: piece },
                );
            }
        }
    }
    Ok(frame.best)
}
