//! Round Simulator CLI - fast in-memory domino tournaments between AIs.
//!
//! Every round is dealt from a seed derived from the tournament seed and
//! played to the end by AI seats through the round flow service.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use domino_engine::domain::rules::PLAYERS;
use domino_engine::domain::{game_seed_from_u64, Tournament};
use domino_engine::{telemetry, EngineConfig};
use metrics::build_round_metrics;
use output::OutputWriter;
use simulator::Simulator;
use tracing::{info, warn};
use types::{AiType, OutputFormat};

#[derive(Parser)]
#[command(name = "round-simulator")]
#[command(about = "Fast in-memory domino round simulator for AI evaluation")]
struct Args {
    /// Number of rounds to simulate
    #[arg(short, long, default_value = "1")]
    rounds: u32,

    /// AI type for all seats (shortcut to set all 4 seats to the same AI)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// AI type for seat 0
    #[arg(long, default_value = "first-match")]
    seat0: AiType,

    /// AI type for seat 1
    #[arg(long, default_value = "first-match")]
    seat1: AiType,

    /// AI type for seat 2
    #[arg(long, default_value = "first-match")]
    seat2: AiType,

    /// AI type for seat 3
    #[arg(long, default_value = "first-match")]
    seat3: AiType,

    /// Tournament seed; omit for a random tournament
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    telemetry::init_tracing_with_default(filter);

    let seat_types = match args.seats {
        Some(ai) => [ai.clone(), ai.clone(), ai.clone(), ai],
        None => [args.seat0, args.seat1, args.seat2, args.seat3],
    };
    let ai_types: [String; PLAYERS] = std::array::from_fn(|i| seat_types[i].name().to_string());

    let game_seed: [u8; 32] = match args.seed {
        Some(s) => game_seed_from_u64(s),
        None => rand::random(),
    };

    if args.show_output {
        info!(rounds = args.rounds, seed = %hex::encode(game_seed), "starting round simulator");
        info!(
            "AI types: seat0={}, seat1={}, seat2={}, seat3={}",
            ai_types[0], ai_types[1], ai_types[2], ai_types[3]
        );
        info!("Output directory: {}", args.output_dir);
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;
    let config = EngineConfig::from_env()?;
    let simulator = Simulator::new(game_seed, ai_types.clone(), config);

    let start = Instant::now();
    let mut tournament = Tournament::new();
    let mut errors = 0;

    for round_no in 1..=args.rounds {
        let round_start = Instant::now();
        match simulator.simulate_round(round_no) {
            Ok(result) => {
                let duration_ms = round_start.elapsed().as_secs_f64() * 1000.0;
                let metrics =
                    build_round_metrics(ai_types.clone(), args.rounds, &result, duration_ms);
                if let Err(e) = output_writer.write_round(&metrics) {
                    warn!("Failed to write metrics for round {}: {}", round_no, e);
                }
                tournament.record(&result.state);
                if args.verbose {
                    info!(
                        round_no,
                        winner = result.winner,
                        points = result.points,
                        "round completed"
                    );
                }
            }
            Err(e) => {
                errors += 1;
                warn!("Round {} failed: {}", round_no, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.clone(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&tournament, &ai_types, errors, elapsed, args.rounds);
    }

    Ok(())
}

fn print_summary(
    tournament: &Tournament,
    ai_types: &[String; PLAYERS],
    errors: u32,
    elapsed: Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Rounds completed: {}/{}", tournament.rounds, total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if tournament.rounds == 0 {
        return;
    }
    println!(
        "Average time per round: {:?}",
        elapsed / tournament.rounds
    );
    println!(
        "Domino rounds: {}, blocked rounds: {} ({:.1}%)",
        tournament.rounds - tournament.blocked_rounds,
        tournament.blocked_rounds,
        pct(tournament.blocked_rounds, tournament.rounds)
    );

    println!("\n=== Results by Seat ===");
    for seat in 0..PLAYERS {
        println!(
            "Seat {} ({}): points={}, wins={} ({:.1}%)",
            seat,
            ai_types[seat],
            tournament.points[seat],
            tournament.wins[seat],
            pct(tournament.wins[seat], tournament.rounds)
        );
    }
    if let Some(leader) = tournament.leader() {
        println!("\nLeader: seat {leader}");
    }
}

fn pct(part: u32, whole: u32) -> f64 {
    part as f64 / whole as f64 * 100.0
}
