use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, LevelFilter};

use entropic_core::system_engine;

#[derive(Parser)]
#[command(
    name = "entropic",
    author,
    version,
    about = "Entropic randomness engine CLI"
)]
struct Cli {
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate fixed-length lowercase-hex identifiers.
    Id {
        #[arg(long, default_value_t = 32)]
        length: usize,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Generate RFC-4122 v4 UUIDs.
    Uuid {
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Sample integers uniformly from an inclusive range.
    Int {
        #[arg(long)]
        min: i64,
        #[arg(long)]
        max: i64,
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Draw unit-interval floats.
    Float {
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Run repeated probability-gated decisions and report the hit rate.
    Throttle {
        #[arg(long)]
        probability: f64,
        #[arg(long, default_value_t = 10_000)]
        trials: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    let engine = system_engine().context("resolving the platform entropy source")?;
    debug!("engine precision: {:?}", engine.precision());

    match cli.command {
        Commands::Id { length, count } => {
            for _ in 0..count {
                println!("{}", engine.generate_id(length)?);
            }
        }
        Commands::Uuid { count } => {
            for _ in 0..count {
                println!("{}", engine.generate_uuid_v4()?);
            }
        }
        Commands::Int { min, max, count } => {
            for _ in 0..count {
                println!("{}", engine.sample_int(min, max)?);
            }
        }
        Commands::Float { count } => {
            for _ in 0..count {
                println!("{}", engine.random_unit_float()?);
            }
        }
        Commands::Throttle {
            probability,
            trials,
        } => {
            let mut executed = 0usize;
            for _ in 0..trials {
                if engine.should_execute(probability)? {
                    executed += 1;
                }
            }
            println!(
                "executed {executed}/{trials} ({:.2}%)",
                100.0 * executed as f64 / trials as f64
            );
        }
    }
    Ok(())
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}
