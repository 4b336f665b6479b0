use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::arg;
use clap::command;
use clap::Command;

use chesslet::board::plain::read_board;
use chesslet::board::render::render_unicode;
use chesslet::board::Side;
use chesslet::game::{parse_move, Game, GameState, MoveStatus};

fn main() -> Result<()> {
    let matches = command!()
        .propagate_version(true)
        .subcommand(
            Command::new("play")
                .about("Play a game against a random-moving opponent")
                .arg(arg!(
                    -f --file <FILE> "Board configuration file"
                ))
                .arg(
                    arg!(
                        -s --seed <SEED> "Seed for the opponent's move selection"
                    )
                    .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Render a board configuration file")
                .arg(
                    arg!(
                        -f --file <FILE> "Board configuration file"
                    )
                    .required(true),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("play", arg_matches)) => play(
            arg_matches.get_one::<String>("file").cloned(),
            arg_matches.get_one::<u64>("seed").copied(),
        ),
        Some(("show", arg_matches)) => show(arg_matches.get_one::<String>("file").unwrap()),
        None => play(None, None),
        _ => unreachable!("Exhausted list of subcommands"),
    }
}

fn show(file: &str) -> Result<()> {
    let board = read_board(file).with_context(|| format!("could not load board from {}", file))?;
    print!("{}", render_unicode(&board));
    Ok(())
}

fn play(file: Option<String>, seed: Option<u64>) -> Result<()> {
    let filename = match file {
        Some(file) => file,
        None => prompt("File name for initial configuration: ")?,
    };
    let filename = filename.trim();
    let board = read_board(filename).with_context(|| format!("could not load board from {}", filename))?;

    println!("The initial configuration is:");
    print!("{}", render_unicode(&board));

    let mut game = match seed {
        Some(seed) => Game::with_seed(board, seed),
        None => Game::new(board),
    };
    game.classify_start()?;
    if let GameState::Check(side) = game.state {
        println!("{} is in check!", side);
    }

    loop {
        let side = match game.state {
            GameState::Checkmate(side) => {
                println!("Checkmate! {} wins.", side.opposite());
                break;
            }
            GameState::Stalemate(side) => {
                println!("Stalemate! {} cannot move.", side);
                break;
            }
            GameState::AwaitingWhiteMove => Side::White,
            GameState::AwaitingBlackMove => Side::Black,
            GameState::Check(side) => side,
        };

        match side {
            Side::White => white_turn(&mut game)?,
            Side::Black => {
                let (from, to) = game.auto_move()?;
                println!("Black moves {}{}.", from, to);
            }
        }

        print!("{}", render_unicode(&game.board));
        if let GameState::Check(_) = game.state {
            println!("Check!");
        }
    }
    Ok(())
}

fn white_turn(game: &mut Game) -> Result<()> {
    loop {
        let input = prompt("It is your turn (White). Enter your move (e.g. e2e3): ")?;
        let Some((from, to)) = parse_move(&input) else {
            println!("Could not read that move. Enter two locations like e2e3.");
            continue;
        };

        match game.submit_move(from, to)? {
            MoveStatus::Played => return Ok(()),
            MoveStatus::NoPieceAtSource => println!("There is no piece at {}. Please try again.", from),
            MoveStatus::WrongSide => println!("That is not your piece. Please try again."),
            MoveStatus::Illegal => println!("That move is not allowed. Please try again."),
        }
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(line)
}
