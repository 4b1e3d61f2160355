//! Morris-Rust command line.
//!
//! ## Usage
//!
//! - `morris-rust run <input> <output> <depth>` - Run one engine variant
//! - `morris-rust batch [manifest]` - Run every variant over a job list
//! - `morris-rust demo` - Run every variant on a random board

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use morris_rust::board::{Board, Side};
use morris_rust::driver::{Job, Report, load_manifest, parse_depth, run_batch, run_job};
use morris_rust::engine::{Engine, EngineConfig, all_variants};
use morris_rust::movegen::{Phase, PieceGuard, Rules};
use morris_rust::search::Algorithm;

/// Morris-Rust: minimax and alpha-beta search for a morris variant
#[derive(Parser)]
#[command(name = "morris-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Whose piece count gates movement-phase moves
    #[arg(long, value_enum, global = true, default_value_t = PieceGuard::Mover)]
    guard: PieceGuard,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search one board file and write the chosen board
    Run {
        /// File whose first line is the input board
        input: PathBuf,
        /// File to write the resulting board to
        output: PathBuf,
        /// Search depth in plies
        depth: String,
        #[arg(long, value_enum, default_value_t = Algorithm::Minimax)]
        algorithm: Algorithm,
        #[arg(long, value_enum, default_value_t = Phase::Movement)]
        phase: Phase,
        #[arg(long, value_enum, default_value_t = Side::White)]
        side: Side,
    },
    /// Run every engine variant over a job manifest (or the default boards)
    Batch {
        /// Lines of `<input> <output> <depth>`
        manifest: Option<PathBuf>,
    },
    /// Run every engine variant on a random board
    Demo {
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long, default_value_t = 2)]
        depth: u32,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let rules = Rules { guard: cli.guard };

    let result = match cli.command {
        Some(Commands::Run {
            input,
            output,
            depth,
            algorithm,
            phase,
            side,
        }) => run_single(input, output, &depth, algorithm, phase, side, rules),
        Some(Commands::Batch { manifest }) => batch(manifest, rules),
        Some(Commands::Demo { seed, depth }) => demo(seed, depth, rules),
        None => demo(1, 2, rules),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run_single(
    input: PathBuf,
    output: PathBuf,
    depth: &str,
    algorithm: Algorithm,
    phase: Phase,
    side: Side,
    rules: Rules,
) -> Result<()> {
    let job = Job {
        input,
        output,
        depth: parse_depth(depth)?,
    };
    let config = EngineConfig::new(algorithm, phase, side, job.depth).with_rules(rules);
    let report = run_job(config, &job)?;
    println!("{report}");
    Ok(())
}

fn batch(manifest: Option<PathBuf>, rules: Rules) -> Result<()> {
    let jobs = match manifest {
        Some(path) => load_manifest(&path)?,
        None => Job::defaults(),
    };

    let mut failures = 0;
    for (label, result) in run_batch(&jobs, rules) {
        println!("=== {label}");
        match result {
            Ok(report) => println!("{report}\n"),
            Err(err) => {
                failures += 1;
                println!("failed: {err:#}\n");
            }
        }
    }
    if failures > 0 {
        anyhow::bail!("{failures} job(s) failed");
    }
    Ok(())
}

fn demo(seed: u64, depth: u32, rules: Rules) -> Result<()> {
    println!("Morris-Rust: minimax / alpha-beta demo (seed {seed}, depth {depth})\n");
    let mut rng = fastrand::Rng::with_seed(seed);
    let white = rng.usize(4..=8);
    let black = rng.usize(4..=8);
    let board = Board::random(&mut rng, white, black);

    for config in all_variants(depth, rules) {
        let engine = Engine::new(config)?;
        let report = Report {
            config,
            input: board,
            outcome: engine.run(&board),
        };
        println!("=== {}\n{report}\n", config.name());
    }
    Ok(())
}
