use anyhow::Result;

use std::io::{stdin, stdout, Write};
use std::str::FromStr;

use connect4_engine::board::Side;
use connect4_engine::game::{Difficulty, Game};
use connect4_engine::outcome::Outcome;
use connect4_engine::WIDTH;

mod display;

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // choose the machine's strength
    let difficulty = loop {
        print!("Select difficulty, (e)asy / (m)edium / (h)ard: ");
        stdout().flush().expect("failed to flush to stdout!");

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        match Difficulty::from_str(&buffer) {
            Ok(difficulty) => break difficulty,
            Err(_) => println!("Unknown answer given"),
        }
    };

    let mut game = Game::new(difficulty);

    // game loop
    loop {
        let winning_line = match game.outcome() {
            Some(Outcome::Win { line, .. }) => Some(line),
            _ => None,
        };
        display::draw(game.board(), winning_line)?;

        // end states
        if let Some(outcome) = game.outcome() {
            match outcome {
                Outcome::Win {
                    side: Side::Human, ..
                } => println!("You win!"),
                Outcome::Win {
                    side: Side::Machine,
                    ..
                } => println!("The AI wins!"),
                Outcome::Draw => println!("Draw!"),
            }

            loop {
                print!("Play again? y/n: ");
                stdout().flush().expect("failed to flush to stdout!");

                let mut buffer = String::new();
                stdin.read_line(&mut buffer)?;
                match buffer.to_lowercase().chars().next() {
                    Some(_letter @ 'y') => {
                        game = Game::new(difficulty);
                        break;
                    }
                    Some(_letter @ 'n') => return Ok(()),
                    _ => println!("Unknown answer given"),
                }
            }
            continue;
        }

        if game.turn() == Side::Human {
            print!("Move input 1-{}, (h)int, (u)ndo, (q)uit > ", WIDTH);
            stdout().flush().expect("failed to flush to stdout!");

            let mut input_str = String::new();
            stdin.read_line(&mut input_str)?;

            match input_str.trim() {
                "h" => match game.hint() {
                    Ok(column) => println!(
                        "Hint: try column {} ({} hint(s) left)",
                        column + 1,
                        game.hints_left()
                    ),
                    Err(err) => println!("{}", err),
                },
                "u" => match game.undo() {
                    Ok(()) => println!("Rewound to before your last move"),
                    Err(err) => println!("{}", err),
                },
                "q" => return Ok(()),
                input => match input.parse::<usize>() {
                    Ok(column @ 1..=WIDTH) => {
                        if let Err(err) = game.play_human(column - 1) {
                            println!("{}", err);
                        }
                    }
                    _ => println!("Invalid move: {}", input),
                },
            }
        } else {
            println!("AI is thinking...");
            stdout().flush().expect("failed to flush to stdout!");

            // slow down the reply a little
            std::thread::sleep(std::time::Duration::from_millis(600));

            let reply = game.play_machine()?;
            println!(
                "AI plays column {} (score {}, {} nodes searched)",
                reply.column + 1,
                reply.score,
                game.nodes_searched()
            );
        }
    }
}
