use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use clap::Parser;
use log::{info, warn};
use warp::http::StatusCode;
use warp::Filter;

use noughts::env::{respond, ErrorResponse, IndexResponse, MoveRequest, API_VERSION};
use noughts::game::{Board, Turn};
use noughts::logging;
use noughts::search::Engine;

pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = "noughts";

/// Engine shared by all requests. The lock is held for a whole search so a
/// cached score is only ever written once.
type State = Arc<Mutex<Engine>>;

#[derive(Debug, Parser)]
#[command(name = "noughts server", about = "Perfect-play tic-tac-toe move service.")]
struct Opt {
    /// IP and Port of the webserver.
    #[arg(long, default_value = "127.0.0.1:5001")]
    host: SocketAddr,
    /// Solve the whole game before accepting requests.
    #[arg(long)]
    warm: bool,
}

#[tokio::main]
async fn main() {
    logging();

    let Opt { host, warm } = Opt::parse();

    let mut engine = Engine::new();
    if warm {
        let timer = Instant::now();
        engine.evaluate(Board::empty(), Turn::Maximizer);
        info!(
            "solved {} positions in {}ms",
            engine.cache().len(),
            timer.elapsed().as_millis()
        );
    }
    let state: State = Arc::new(Mutex::new(engine));

    let index = warp::get().and(warp::path::end()).map(|| {
        warp::reply::json(&IndexResponse::new(API_VERSION, AUTHOR, PACKAGE_VERSION))
    });

    let r#move = warp::path("move")
        .and(with_state(state))
        .and(warp::post())
        .and(warp::body::json::<MoveRequest>())
        .and_then(step);

    info!("listening on {}", host);
    warp::serve(index.or(r#move)).run(host).await
}

fn with_state(state: State) -> impl Filter<Extract = (State,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

async fn step(state: State, request: MoveRequest) -> Result<impl warp::Reply, Infallible> {
    let timer = Instant::now();
    let result = {
        let mut engine = state.lock().unwrap_or_else(PoisonError::into_inner);
        respond(&mut engine, &request)
    };

    Ok(match result {
        Ok(response) => {
            info!(
                "move {} for {:?} -> {} (score {}) in {}us",
                request.board,
                request.mover(),
                response.index,
                response.score,
                timer.elapsed().as_micros()
            );
            warp::reply::with_status(warp::reply::json(&response), StatusCode::OK)
        }
        Err(err) => {
            warn!("rejected {}: {}", request.board, err);
            warp::reply::with_status(
                warp::reply::json(&ErrorResponse::from(err)),
                StatusCode::BAD_REQUEST,
            )
        }
    })
}
