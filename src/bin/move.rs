use clap::Parser;
use log::{error, info};

use noughts::env::{respond, MoveRequest};
use noughts::game::{Board, Turn};
use noughts::logging;
use noughts::search::Engine;

#[derive(Parser)]
#[command(name = "noughts move", about = "Compute the optimal move for a board.")]
struct Opts {
    /// Board as 9 symbols in row-major order (`X`, `O`, `.`), e.g. "X...O....".
    board: Board,
    /// Side to move. Inferred from the mark counts by default.
    #[arg(long, value_enum)]
    mover: Option<Turn>,
}

fn main() {
    logging();

    let Opts { board, mover } = Opts::parse();
    info!("{:?}", board);

    let request = MoveRequest::new(board, mover);
    let mut engine = Engine::new();
    match respond(&mut engine, &request) {
        Ok(response) => {
            for row in response.scores.chunks(3) {
                let row: Vec<String> = row
                    .iter()
                    .map(|s| s.map_or_else(|| " .".to_string(), |s| format!("{:2}", s)))
                    .collect();
                info!("{}", row.join(" "));
            }
            info!(
                "{:?} plays {} ({} positions searched)",
                request.mover(),
                response.index,
                engine.cache().len()
            );
            match serde_json::to_string(&response) {
                Ok(json) => println!("{}", json),
                Err(err) => error!("serialization failed: {}", err),
            }
        }
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
