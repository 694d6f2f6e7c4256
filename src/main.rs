use std::fmt;
use std::str::FromStr;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use quarto::board::*;
use quarto::engine::config::{DepthPolicy, ParsePolicyError};
use quarto::game::{Game, Outcome};
use quarto::players::{MinimaxPlayer, Player, RandomPlayer};

#[derive(Parser, Debug)]
#[command(
    name = "quarto",
    version,
    about = "Play Quarto matches between the search engine and a random player"
)]
struct Args {
    /// First player: random, depth:N, unbounded, complexity:N or budget:N
    #[arg(long, default_value = "budget:518400")]
    first: PlayerKind,
    /// Second player, same forms as --first
    #[arg(long, default_value = "random")]
    second: PlayerKind,
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: u32,
    /// Seed for the random players
    #[arg(long)]
    seed: Option<u64>,
    /// Start every game from this compact position, e.g. "..../..../..../.... - 0"
    #[arg(long)]
    position: Option<String>,
    /// Print every game and every search to stderr
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Debug)]
enum PlayerKind {
    Random,
    Engine(DepthPolicy),
}

impl FromStr for PlayerKind {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "random" => Ok(PlayerKind::Random),
            other => Ok(PlayerKind::Engine(other.parse()?)),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlayerKind::Random => write!(f, "random"),
            PlayerKind::Engine(policy) => write!(f, "engine {:?}", policy),
        }
    }
}

// a seat at the table; keeps the concrete player so stats can be read back
enum Contestant {
    Random(RandomPlayer<SmallRng>),
    Engine(MinimaxPlayer),
}

impl Contestant {
    fn new(kind: &PlayerKind, rng: &mut SmallRng) -> Contestant {
        match kind {
            PlayerKind::Random => {
                Contestant::Random(RandomPlayer::new(SmallRng::seed_from_u64(rng.gen())))
            }
            PlayerKind::Engine(policy) => Contestant::Engine(MinimaxPlayer::new(*policy)),
        }
    }

    fn report(&self, side: Side) {
        if let Contestant::Engine(engine) = self {
            let stats = engine.last_stats();
            let depth = stats.last_depth.map_or("-".to_string(), |d| d.to_string());
            let value = engine.last_result().map_or(0, |r| r.value);
            eprintln!(
                "NOTE: side {} searched {} nodes to depth {}; value {}",
                side.index(),
                stats.nodes,
                depth,
                value
            );
        }
    }
}

impl Player for Contestant {
    fn choose_piece(&mut self, game: &GameState) -> Result<Piece, InvalidMove> {
        match self {
            Contestant::Random(p) => p.choose_piece(game),
            Contestant::Engine(p) => p.choose_piece(game),
        }
    }

    fn place_piece(&mut self, game: &GameState) -> Result<Coord, InvalidMove> {
        match self {
            Contestant::Random(p) => p.place_piece(game),
            Contestant::Engine(p) => p.place_piece(game),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let start = match &args.position {
        Some(repr) => GameState::from_compact(repr)?,
        None => GameState::new(),
    };
    if start.is_over() {
        anyhow::bail!("the starting position is already decided");
    }

    let mut wins = [0u32; 2];
    let mut draws = 0u32;
    for i in 0..args.games {
        let mut first = Contestant::new(&args.first, &mut rng);
        let mut second = Contestant::new(&args.second, &mut rng);
        let mut game = Game::from_state(start);

        let outcome = loop {
            let result = game.step(&mut [&mut first, &mut second])?;
            if args.verbose {
                if let Some(turn) = game.history().last() {
                    eprintln!(
                        "NOTE: game {}: side {} put {} on ({}, {})",
                        i,
                        turn.side.index(),
                        turn.piece,
                        turn.cell.0,
                        turn.cell.1
                    );
                }
                first.report(Side::First);
                second.report(Side::Second);
            }
            if let Some(outcome) = result {
                break outcome;
            }
        };

        match outcome {
            Outcome::Win(side) => wins[side.index()] += 1,
            Outcome::Draw => draws += 1,
        }
        if args.verbose {
            eprintln!("NOTE: game {} over: {:?}\n{}", i, outcome, game.state());
        }
    }

    println!("first  ({}): {} wins", args.first, wins[0]);
    println!("second ({}): {} wins", args.second, wins[1]);
    println!("draws: {}", draws);
    Ok(())
}
