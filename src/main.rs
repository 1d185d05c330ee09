use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use lotto::{load_population, serve, BuildStrategy, Counting, LotteryConfig, MatchEngine};

/// Matches lottery draws read from stdin against the players in a file and
/// prints how many players matched 2, 3, 4 and 5 numbers.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with the picks of one player per line
    #[arg(value_name = "PLAYERS_FILE")]
    players: PathBuf,

    /// How the index buckets are allocated while loading
    #[arg(long, value_enum, default_value_t = CliStrategy::Presized)]
    strategy: CliStrategy,

    /// How matches are counted per player
    #[arg(long, value_enum, default_value_t = CliCounting::Dense)]
    counting: CliCounting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliStrategy {
    Presized,
    Grow,
}

impl From<CliStrategy> for BuildStrategy {
    fn from(strategy: CliStrategy) -> Self {
        match strategy {
            CliStrategy::Presized => BuildStrategy::Presized,
            CliStrategy::Grow => BuildStrategy::Grow,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliCounting {
    Dense,
    Sparse,
}

impl From<CliCounting> for Counting {
    fn from(counting: CliCounting) -> Self {
        match counting {
            CliCounting::Dense => Counting::Dense,
            CliCounting::Sparse => Counting::Sparse,
        }
    }
}

fn run(args: Args) -> lotto::Result<()> {
    let config = LotteryConfig::DEFAULT;
    let population = load_population(&args.players, &config, args.strategy.into(), |line, err| {
        eprintln!("skipping line {line} of {}: {err}", args.players.display())
    })?;
    if population.skipped() != 0 {
        eprintln!(
            "loaded {} players, skipped {} lines",
            population.loaded(),
            population.skipped()
        );
    }
    let mut engine = MatchEngine::with_counting(population.into_index(), args.counting.into());
    serve(&mut engine, io::stdin().lock(), BufWriter::new(io::stdout().lock()))
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
