//! Quarto decision engine.
//!
//! - `board`: the 4x4 board, piece pool and the line rules
//! - `engine`: depth policies, the cutoff heuristic and alpha-beta search
//! - `players`: the two-call player interface, a searching and a random player
//! - `game`: a referee that runs two players against each other
//! - `format`: compact and pretty text forms of a position
//!
//! ```
//! use quarto::engine::config::{Depth, DepthPolicy};
//! use quarto::game::Game;
//! use quarto::players::{MinimaxPlayer, RandomPlayer};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let mut engine = MinimaxPlayer::new(DepthPolicy::FixedDepth(Depth::Limited(1)));
//! let mut random = RandomPlayer::new(SmallRng::seed_from_u64(3));
//! let mut game = Game::new();
//! let outcome = game.run(&mut [&mut engine, &mut random]).unwrap();
//! assert_eq!(game.outcome(), Some(outcome));
//! ```
pub mod board;
pub mod engine;
pub mod format;
pub mod game;
pub mod players;
