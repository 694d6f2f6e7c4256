use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::*;
use crate::engine::config::DepthPolicy;
use crate::engine::search::Worker;
use crate::engine::*;

/// What a driver needs from a player. `choose_piece` is called when the
/// player must hand a piece over, `place_piece` when it must place the
/// piece it was handed.
pub trait Player {
    fn choose_piece(&mut self, game: &GameState) -> Result<Piece, InvalidMove>;
    fn place_piece(&mut self, game: &GameState) -> Result<Coord, InvalidMove>;
}

impl<P: Player + ?Sized> Player for Box<P> {
    fn choose_piece(&mut self, game: &GameState) -> Result<Piece, InvalidMove> {
        (**self).choose_piece(game)
    }

    fn place_piece(&mut self, game: &GameState) -> Result<Coord, InvalidMove> {
        (**self).place_piece(game)
    }
}

/// Picks uniformly among the legal pieces and cells.
pub struct RandomPlayer<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    pub fn new(rng: R) -> RandomPlayer<R> {
        RandomPlayer { rng }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn choose_piece(&mut self, game: &GameState) -> Result<Piece, InvalidMove> {
        let pieces: Vec<Piece> = game.legal_pieces().collect();
        pieces
            .choose(&mut self.rng)
            .copied()
            .ok_or(InvalidMove::NoLegalMove)
    }

    fn place_piece(&mut self, game: &GameState) -> Result<Coord, InvalidMove> {
        let cells: Vec<Coord> = game.legal_cells().collect();
        cells
            .choose(&mut self.rng)
            .copied()
            .ok_or(InvalidMove::NoLegalMove)
    }
}

/*
Searches once per turn. A turn asks for a placement and then for a
hand-over (or only a hand-over on the opening turn); both come from the
same search, so the move is cached together with the position it was
computed for. The cache only answers when the position still matches.
*/
pub struct MinimaxPlayer {
    policy: DepthPolicy,
    cached: Option<(GameState, Move)>,
    last_result: Option<SearchResult>,
    stats: SearchStats,
}

impl MinimaxPlayer {
    pub fn new(policy: DepthPolicy) -> MinimaxPlayer {
        MinimaxPlayer {
            policy,
            cached: None,
            last_result: None,
            stats: SearchStats::default(),
        }
    }

    pub fn policy(&self) -> DepthPolicy {
        self.policy
    }

    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    pub fn last_result(&self) -> Option<SearchResult> {
        self.last_result
    }

    fn think(&mut self, game: &GameState) -> Result<Move, InvalidMove> {
        let depth = self.policy.depth_for(game);
        let mut worker = Worker::from_position(game, depth);
        let result = worker.search()?;

        self.stats.nodes = worker.nodes();
        self.stats.searches += 1;
        self.stats.last_depth = Some(depth);
        self.last_result = Some(result);

        let mov = result.best_move.ok_or(InvalidMove::NoLegalMove)?;
        self.cached = Some((*game, mov));
        Ok(mov)
    }

    // the cached hand-over, if `game` is where the cached move leads
    fn cached_piece(&self, game: &GameState) -> Option<Piece> {
        let (from, mov) = self.cached?;
        let mut expected = from;
        if let Some((x, y)) = mov.cell() {
            expected.place(x, y).ok()?;
        }
        if expected == *game {
            mov.next_piece()
        } else {
            None
        }
    }
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        MinimaxPlayer::new(DepthPolicy::default())
    }
}

impl Player for MinimaxPlayer {
    fn choose_piece(&mut self, game: &GameState) -> Result<Piece, InvalidMove> {
        let piece = match self.cached_piece(game) {
            Some(piece) => piece,
            None => self.think(game)?.next_piece().ok_or(InvalidMove::NoLegalMove)?,
        };
        self.cached = None;
        Ok(piece)
    }

    fn place_piece(&mut self, game: &GameState) -> Result<Coord, InvalidMove> {
        if let Some((from, mov)) = self.cached {
            if from == *game {
                if let Some(cell) = mov.cell() {
                    return Ok(cell);
                }
            }
        }
        self.think(game)?.cell().ok_or(InvalidMove::NoLegalMove)
    }
}
