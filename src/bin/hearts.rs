use clap::Parser;
use hearts_sim::agents::Lineup;
use hearts_sim::game::NUM_SEATS;
use hearts_sim::sim::{run_batch, BatchConfig};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hearts-sim", version)]
#[command(about = "Simulate games of Hearts between computer players")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value_t = 100)]
    games: usize,

    /// Strategy per seat, comma separated (naive, heuristic, random)
    #[arg(short, long, default_value_t = Lineup::default())]
    seats: Lineup,

    /// Base seed for reproducible batches
    #[arg(long)]
    seed: Option<u64>,

    /// Spread games across worker threads
    #[arg(short, long)]
    parallel: bool,

    /// Narrate every trick
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "hearts_sim=debug" } else { "hearts_sim=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config =
        BatchConfig::new(args.seats).with_games(args.games).with_parallel(args.parallel);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let summary = run_batch(&config);

    println!("hearts-sim {} | {} game(s), lineup {}", hearts_sim::VERSION, args.games, args.seats);
    for seat in 0..NUM_SEATS {
        println!(
            "Seat {seat} ({:>9}): {:>6} points, {:>6.2} per game",
            args.seats.seat(seat),
            summary.totals[seat],
            summary.average(seat)
        );
    }
    if summary.failed > 0 {
        eprintln!("{} game(s) aborted:", summary.failed);
        for failure in &summary.failures {
            eprintln!("  game {} (seed {}): {}", failure.index, failure.seed, failure.error);
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
