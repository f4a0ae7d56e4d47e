use std::fs;
use std::io::{stdin, stdout, Write};

use term_chess::board::{Board, Color, Game, symbol};
use term_chess::notation::parse_move;

fn draw_board(board: &Board) {
    for row in &board.squares {
        for square in row {
            match square {
                None => print!("|."),
                Some(p) => print!("|{}", symbol(p)),
            }
        }
        println!("|");
    }
}

fn save_game(game: &Game, path: &str) {
    match fs::write(path, game.snapshot()) {
        Ok(_) => {
            log::info!("Game saved to {}", path);
            println!("Game saved.");
        }
        Err(e) => {
            log::error!("Cannot save game to {}: {}", path, e);
            println!("Cannot save game: {}", e);
        }
    }
}

fn main() {
    let logger_env = env_logger::Env::default().filter_or("LOG_LEVEL", "INFO");
    env_logger::Builder::from_env(logger_env).format_timestamp_millis().init();

    let mut game = Game::new();

    println!("Enter a move as start and end coordinates, e.g. e2e4");
    println!("To save the game, type: save <file>");
    println!("To quit, type: quit");

    let mut line = String::new();
    loop {
        draw_board(&game.board);
        let side = match game.turn {
            Color::White => "White",
            Color::Black => "Black",
        };
        print!("{} to move: ", side);
        stdout().flush().expect("Cannot flush stdout");

        line.clear();
        let read = stdin().read_line(&mut line).expect("Cannot read stdin");
        if read == 0 {
            break;
        }
        let command = line.trim();

        if command == "quit" {
            break;
        }
        if let Some(path) = command.strip_prefix("save ") {
            save_game(&game, path.trim());
            continue;
        }
        match parse_move(command) {
            Ok((from, to)) => {
                log::debug!("Move requested: {:?} -> {:?}", from, to);
                if !game.play(from, to) {
                    println!("Illegal move. Try again.");
                }
            }
            Err(e) => {
                log::debug!("Rejected command {:?}: {}", command, e);
                println!("Bad command ({}). A valid move looks like: e2e4", e);
            }
        }
    }
}
