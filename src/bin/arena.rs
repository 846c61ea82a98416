//! Self-play match runner for comparing search depths
//!
//! Pits the maximizing engine at one depth against the inverted-perspective
//! engine at another over a batch of seeded games, e.g.
//! `arena 200 5 3` plays 200 games of depth 5 against depth 3.

use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use std::str::FromStr;

use connect4_engine::board::{Board, Side};
use connect4_engine::outcome::{check_outcome, Outcome};
use connect4_engine::search::Searcher;

fn parse_arg<T: FromStr>(arg: Option<String>, default: T, name: &str) -> Result<T> {
    match arg {
        Some(value) => value
            .parse()
            .map_err(|_| anyhow!("could not parse {} '{}'", name, value)),
        None => Ok(default),
    }
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let games: u64 = parse_arg(args.next(), 50, "game count")?;
    let machine_depth: usize = parse_arg(args.next(), 5, "machine depth")?;
    let human_depth: usize = parse_arg(args.next(), 3, "human depth")?;

    if machine_depth == 0 || human_depth == 0 {
        return Err(anyhow!("search depth must be at least 1"));
    }

    println!(
        "Playing {} games: depth {} (machine side) vs depth {} (human side)",
        games, machine_depth, human_depth
    );

    let progress = ProgressBar::new(games);
    progress.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} games"));

    let (machine_wins, human_wins, draws) = (0..games)
        .into_par_iter()
        .map(|seed| {
            let outcome = play_game(seed, machine_depth, human_depth);
            progress.inc(1);
            match outcome {
                Outcome::Win {
                    side: Side::Machine,
                    ..
                } => (1u64, 0u64, 0u64),
                Outcome::Win {
                    side: Side::Human, ..
                } => (0, 1, 0),
                Outcome::Draw => (0, 0, 1),
            }
        })
        .reduce(|| (0, 0, 0), |a, b| (a.0 + b.0, a.1 + b.1, a.2 + b.2));

    progress.finish();

    println!(
        "Depth {} won {}, lost {}, drew {}",
        machine_depth, machine_wins, human_wins, draws
    );
    Ok(())
}

/// Plays one full game; the human side moves first, as in a live game
fn play_game(seed: u64, machine_depth: usize, human_depth: usize) -> Outcome {
    let mut machine = Searcher::from_seed(seed);
    let mut human = Searcher::from_seed(seed.wrapping_add(0x9e37_79b9));
    let mut board = Board::new();
    let mut to_move = Side::Human;

    loop {
        if let Some(outcome) = check_outcome(&board) {
            return outcome;
        }

        let result = match to_move {
            Side::Machine => machine.search(&board, machine_depth, i32::MIN, i32::MAX, true),
            Side::Human => human.search(&board, human_depth, i32::MIN, i32::MAX, false),
        };

        let column = match result.column {
            Some(column) => column,
            // unreachable: the outcome scan above catches finished boards
            None => return Outcome::Draw,
        };

        // the search only proposes open columns
        board.drop_piece(column, to_move).unwrap();
        to_move = to_move.opponent();
    }
}
