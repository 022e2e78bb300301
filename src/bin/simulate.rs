use std::time::Instant;

use clap::Parser;
use owo_colors::OwoColorize;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use noughts::agents::Agent;
use noughts::logging;
use noughts::search::Engine;
use noughts::simulate::{play_game, Tally};

#[derive(Parser)]
#[command(
    name = "noughts simulator",
    about = "Simulate games between different agents."
)]
struct Opts {
    /// Agent placing X, moves first.
    #[arg(value_enum, default_value = "perfect")]
    maximizer: Agent,
    /// Agent placing O.
    #[arg(value_enum, default_value = "perfect")]
    minimizer: Agent,
    #[arg(short, long, default_value = "1")]
    game_count: usize,
    /// Seed for the random agents.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    logging();

    let Opts {
        maximizer,
        minimizer,
        game_count,
        seed,
        verbose,
    } = Opts::parse();

    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut engine = Engine::new();
    let mut tally = Tally::default();

    let start = Instant::now();
    for i in 0..game_count {
        let record = play_game(&mut engine, [maximizer, minimizer], &mut rng);
        if verbose {
            println!("{:?}", record.board);
            println!("Moves: {:?}", record.moves);
        }
        println!(
            "{}: {} {:?} {}ms",
            "Finish Game".bright_green(),
            i,
            record.outcome,
            start.elapsed().as_millis()
        );
        tally.record(record.outcome);
    }

    println!(
        "Result: X {} / O {} / draw {} of {}",
        tally.maximizer.green(),
        tally.minimizer.yellow(),
        tally.draws,
        tally.games()
    );
}
