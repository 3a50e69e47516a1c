use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use crate::round::{NumbersJob, RoundConfig};
use crate::solutions::TieBreak;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Solve a Countdown numbers round from the command line
#[derive(Parser, Debug)]
#[command(name = "countdown-numbers")]
#[command(about = "Find the closest reachable value to a target from up to eight drawn numbers")]
#[command(version)]
pub struct CliArgs {
    /// The drawn numbers (between two and eight)
    #[arg(required = true, num_args = 2..=8)]
    pub numbers: Vec<i64>,

    /// Target value to reach
    #[arg(short, long)]
    pub target: i64,

    /// Seed for the hint representative selection (same seed, same hints)
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Prefer the lower candidate when the target is equidistant between
    /// two reachable values
    #[arg(long)]
    pub prefer_lower: bool,

    /// Print the five hints after the result
    #[arg(long)]
    pub hints: bool,

    /// Print every exact solution
    #[arg(long)]
    pub solutions: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(&args.log_level)?;

    let config = RoundConfig {
        tie_break: if args.prefer_lower {
            TieBreak::Lower
        } else {
            TieBreak::Higher
        },
        hint_seed: args.seed,
    };

    info!(
        "Solving {:?} for target {}",
        args.numbers, args.target
    );

    let job = NumbersJob::spawn(args.numbers.clone(), args.target, config)
        .context("Invalid selection")?;
    let solved = job.wait().context("Solving failed")?;

    let closest = solved.closest();
    if closest.is_exact() {
        println!("{} = {}", closest.value, closest.expression);
    } else {
        warn!("No exact solution for {}", closest.target);
        println!(
            "Closest is {} ({} away): {}",
            closest.value,
            closest.distance(),
            closest.expression
        );
    }

    if args.solutions {
        for expr in solved.exact_matches() {
            println!("{expr}");
        }
    }

    if args.hints {
        while let Ok(hint) = solved.next_hint() {
            println!("Hint: {hint}");
        }
    }

    Ok(())
}
