use crate::board::*;
use crate::players::Player;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(Side),
    Draw,
}

/// One placement as it happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub side: Side,
    pub piece: Piece,
    pub cell: Coord,
}

/// Referee for one game: applies decisions to the state, keeps the
/// history and decides when the game is over.
#[derive(Clone, Debug, Default)]
pub struct Game {
    state: GameState,
    history: Vec<Turn>,
}

impl Game {
    pub fn new() -> Game {
        Game::from_state(GameState::new())
    }

    pub fn from_state(state: GameState) -> Game {
        Game {
            state,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state.check_winner() {
            Some(side) => Some(Outcome::Win(side)),
            None if self.state.check_finished() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// The side to move gives `piece` to its opponent. Once handed over
    /// a piece cannot be swapped for another.
    pub fn hand_over(&mut self, piece: Piece) -> Result<(), InvalidMove> {
        if self.outcome().is_some() {
            return Err(InvalidMove::NoLegalMove);
        }
        if let Some(given) = self.state.selected() {
            return Err(InvalidMove::AlreadySelected(given));
        }
        self.state.select(piece)?;
        self.state.end_turn();
        Ok(())
    }

    /// The side to move places the piece it was given.
    pub fn put(&mut self, x: u8, y: u8) -> Result<Option<Outcome>, InvalidMove> {
        if self.outcome().is_some() {
            return Err(InvalidMove::NoLegalMove);
        }
        let piece = self.state.selected().ok_or(InvalidMove::NothingSelected)?;
        self.state.place(x, y)?;
        self.history.push(Turn {
            side: self.state.current_side(),
            piece,
            cell: (x, y),
        });
        Ok(self.outcome())
    }

    /// Play one exchange: a hand-over if nothing is selected, then a placement.
    pub fn step(&mut self, players: &mut [&mut dyn Player; 2]) -> Result<Option<Outcome>, InvalidMove> {
        if let Some(outcome) = self.outcome() {
            return Ok(Some(outcome));
        }
        if self.state.selected().is_none() {
            let side = self.state.current_side();
            let piece = players[side.index()].choose_piece(&self.state)?;
            self.hand_over(piece)?;
        }
        let side = self.state.current_side();
        let (x, y) = players[side.index()].place_piece(&self.state)?;
        self.put(x, y)
    }

    pub fn run(&mut self, players: &mut [&mut dyn Player; 2]) -> Result<Outcome, InvalidMove> {
        loop {
            if let Some(outcome) = self.step(players)? {
                return Ok(outcome);
            }
        }
    }
}
