use game_app::config::LogFormat;
use game_app::engine::{Board, Game};
use game_app::logging;
use std::io::{self, BufRead};

fn main() -> anyhow::Result<()> {
    // Click logs are debug-level; RUST_LOG=debug shows them
    logging::init_logging(LogFormat::Compact, "warn");

    let mut game = Game::new(Board::random());

    println!("{}", game.board());
    println!("{}", game.score_display());
    println!("Click a tile by typing its id (0-{}), `q` to quit.", game.board().len() - 1);

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();

        match input {
            "" => continue,
            "q" | "quit" => break,
            _ => {}
        }

        match input.parse::<usize>() {
            Ok(id) => match game.click(id) {
                Ok(_) => println!("{}", game.score_display()),
                Err(e) => println!("{}", e),
            },
            Err(_) => println!("Not a tile id: {}", input),
        }
    }

    Ok(())
}
