//! Ball Court entry point
//!
//! Headless tick driver: builds or restores a court, advances it a fixed
//! number of ticks, and optionally writes a snapshot at the end.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ball_court::{Court, CourtConfig, CourtEvent, Snapshot};

#[derive(Parser, Debug)]
#[command(name = "ball-court")]
#[command(about = "Simulate a ball court with a self-steering paddle")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start a fresh court and tick it
    Run {
        /// Court config JSON (defaults to the classic 300x300 setup)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the config's seed
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1_000)]
        ticks: u64,
        /// Print ball and paddle state every N ticks (0 = never)
        #[arg(long, default_value_t = 0)]
        trace_every: u64,
        /// Write a snapshot here when done
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Restore a snapshot and keep ticking
    Resume {
        #[arg(long)]
        snapshot: PathBuf,
        #[arg(long, default_value_t = 1_000)]
        ticks: u64,
        #[arg(long, default_value_t = 0)]
        trace_every: u64,
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Print the default config as JSON
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Commands::Run {
            config,
            seed,
            ticks,
            trace_every,
            save,
        } => {
            let mut config = match config {
                Some(path) => CourtConfig::load(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => CourtConfig::default(),
            };
            if let Some(seed) = seed {
                config.seed = seed;
            }
            let mut court = config.build().context("building court")?;
            log::info!(
                "Court {}x{} ready with seed {}",
                court.width(),
                court.height(),
                court.seed()
            );
            drive(&mut court, ticks, trace_every);
            finish(&court, save.as_deref())?;
        }
        Commands::Resume {
            snapshot,
            ticks,
            trace_every,
            save,
        } => {
            let mut court = Snapshot::load(&snapshot)
                .and_then(Snapshot::restore)
                .with_context(|| format!("restoring {}", snapshot.display()))?;
            log::info!("Resumed court at tick {}", court.ticks());
            drive(&mut court, ticks, trace_every);
            finish(&court, save.as_deref())?;
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&CourtConfig::default())?);
        }
    }

    Ok(())
}

fn drive(court: &mut Court, ticks: u64, trace_every: u64) {
    let mut hits = 0u64;
    let mut bounces = 0u64;
    for _ in 0..ticks {
        for event in court.advance() {
            match event {
                CourtEvent::PaddleHit { .. } => hits += 1,
                CourtEvent::WallBounce { .. } => bounces += 1,
            }
        }
        if trace_every > 0 && court.ticks().is_multiple_of(trace_every) {
            print_state(court);
        }
    }
    log::info!(
        "Advanced {} ticks: {} paddle hits, {} wall bounces",
        ticks,
        hits,
        bounces
    );
}

fn print_state(court: &Court) {
    let ball = court
        .ball()
        .map(|b| format!("ball=({},{}) vel=({},{})", b.pos().x, b.pos().y, b.vel().x, b.vel().y))
        .unwrap_or_default();
    let paddle = court
        .player()
        .map(|p| format!("paddle_y={} vy={} score={}", p.pos().y, p.vel().y, p.score()))
        .unwrap_or_default();
    println!("tick={} {} {}", court.ticks(), ball, paddle);
}

fn finish(court: &Court, save: Option<&Path>) -> Result<()> {
    print_state(court);
    if let Some(path) = save {
        Snapshot::capture(court)
            .save(path)
            .with_context(|| format!("saving snapshot {}", path.display()))?;
        println!("wrote={}", path.display());
    }
    Ok(())
}
