use std::io::{self, BufRead};
use std::str::SplitWhitespace;

use clap::Parser;

use quarto::board::*;
use quarto::engine::config::DepthPolicy;
use quarto::game::{Game, Outcome};
use quarto::players::{MinimaxPlayer, Player};

#[derive(Parser, Debug)]
#[command(name = "interface", about = "Play Quarto against the search engine")]
struct Args {
    /// Let the engine hand over the first piece
    #[arg(long)]
    engine_first: bool,
    /// Engine depth policy: depth:N, unbounded, complexity:N or budget:N
    #[arg(long, default_value = "budget:518400")]
    policy: DepthPolicy,
}

struct GameContext {
    engine: MinimaxPlayer,
    human: Side,
    quit: bool,
}

type Command = fn(&mut SplitWhitespace, &mut Game, &mut GameContext) -> bool;

static HELP_TEXT: &str = "
COMMANDS
========
h                       Display this message.
p                       Print current board.
c                       Print the position in compact form.
g <piece>               Give piece 0-15 to the engine. Bit k of the
                            number is attribute k.
m <x> <y>               Place the piece you were given on column x, row y.
d [policy]              Change the engine's depth policy (depth:N, unbounded,
                            complexity:N or budget:N). Without an argument
                            the current policy is printed.
e                       Print the engine's last evaluation.
l                       List placements so far.
q                       Quit this program.
";

fn command_help(_: &mut SplitWhitespace, _: &mut Game, _: &mut GameContext) -> bool {
    println!("{}", HELP_TEXT);
    false
}

fn command_print(_: &mut SplitWhitespace, game: &mut Game, _: &mut GameContext) -> bool {
    println!("{}", game.state());
    false
}

fn command_compact(_: &mut SplitWhitespace, game: &mut Game, _: &mut GameContext) -> bool {
    println!("{}", game.state().to_compact());
    false
}

fn parse_arg<T: std::str::FromStr>(tokens: &mut SplitWhitespace, what: &str) -> Option<T> {
    match tokens.next().map(|tok| tok.parse::<T>()) {
        Some(Ok(val)) => Some(val),
        Some(Err(_)) => {
            println!("ERROR: could not parse {}", what);
            None
        }
        None => {
            println!("ERROR: missing {}", what);
            None
        }
    }
}

fn command_give(tokens: &mut SplitWhitespace, game: &mut Game, _: &mut GameContext) -> bool {
    if game.state().selected().is_some() {
        println!("ERROR: place your piece first");
        return false;
    }
    let id: u8 = match parse_arg(tokens, "piece") {
        Some(id) => id,
        None => return false,
    };
    match Piece::new(id).and_then(|piece| game.hand_over(piece)) {
        Ok(()) => true,
        Err(err) => {
            println!("ERROR: {}", err);
            false
        }
    }
}

fn command_make_move(tokens: &mut SplitWhitespace, game: &mut Game, _: &mut GameContext) -> bool {
    let x: u8 = match parse_arg(tokens, "x") {
        Some(x) => x,
        None => return false,
    };
    let y: u8 = match parse_arg(tokens, "y") {
        Some(y) => y,
        None => return false,
    };
    match game.put(x, y) {
        Ok(_) => true,
        Err(err) => {
            println!("ERROR: {}", err);
            false
        }
    }
}

fn command_depth(tokens: &mut SplitWhitespace, _: &mut Game, context: &mut GameContext) -> bool {
    let rest: Vec<&str> = tokens.collect();
    if rest.is_empty() {
        println!("{:?}", context.engine.policy());
        return false;
    }
    match rest.join(" ").parse::<DepthPolicy>() {
        Ok(policy) => context.engine = MinimaxPlayer::new(policy),
        Err(err) => println!("ERROR: {}", err),
    }
    false
}

fn command_evaluate(_: &mut SplitWhitespace, _: &mut Game, context: &mut GameContext) -> bool {
    match context.engine.last_result() {
        Some(result) => println!("{}", result.value),
        None => println!("no search yet"),
    }
    false
}

fn command_list(_: &mut SplitWhitespace, game: &mut Game, _: &mut GameContext) -> bool {
    let moves: Vec<String> = game
        .history()
        .iter()
        .map(|t| format!("{}@({},{})", t.piece, t.cell.0, t.cell.1))
        .collect();
    println!("{}", moves.join(", "));
    false
}

fn command_quit(_: &mut SplitWhitespace, _: &mut Game, context: &mut GameContext) -> bool {
    context.quit = true;
    false
}

fn engine_turn(game: &mut Game, context: &mut GameContext) -> anyhow::Result<()> {
    if game.state().selected().is_none() {
        let piece = context.engine.choose_piece(game.state())?;
        game.hand_over(piece)?;
        println!("Your opponent gives you piece {} ({:04b})", piece, piece.id());
    } else {
        println!("Thinking...");
        let (x, y) = context.engine.place_piece(game.state())?;
        game.put(x, y)?;
        println!("Your opponent placed on {} {}", x, y);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut game = Game::new();
    let mut context = GameContext {
        engine: MinimaxPlayer::new(args.policy),
        human: if args.engine_first { Side::Second } else { Side::First },
        quit: false,
    };
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        match game.outcome() {
            Some(Outcome::Win(side)) if side == context.human => {
                println!("{}You win!", game.state());
                return Ok(());
            }
            Some(Outcome::Win(_)) => {
                println!("{}Your opponent wins!", game.state());
                return Ok(());
            }
            Some(Outcome::Draw) => {
                println!("{}It's a draw!", game.state());
                return Ok(());
            }
            None => {}
        }

        if game.state().current_side() != context.human {
            engine_turn(&mut game, &mut context)?;
            continue;
        }

        println!("{}", game.state());
        match game.state().selected() {
            Some(piece) => println!("Your move. Place piece {} with 'm <x> <y>'.", piece),
            None => println!("Your move. Give a piece with 'g <piece>'."),
        }
        let mut move_made = false;
        while !move_made {
            println!("Enter command. 'h' for help.");
            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(()),
            };
            let mut tokens = line.split_whitespace();
            // function returns true if a move is made
            let func: Command = match tokens.next() {
                Some("h") => command_help,
                Some("p") => command_print,
                Some("c") => command_compact,
                Some("g") => command_give,
                Some("m") => command_make_move,
                Some("d") => command_depth,
                Some("e") => command_evaluate,
                Some("l") => command_list,
                Some("q") => command_quit,
                Some(_) => command_help,
                None => |_, _, _| false,
            };
            move_made = func(&mut tokens, &mut game, &mut context);
            if context.quit {
                return Ok(());
            }
        }
    }
}
