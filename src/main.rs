use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    time::Instant,
};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sand_slabs::{bonus, solve};

#[derive(Parser)]
#[command(name = "sand_slabs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Part {
    One,
    Two,
    Both,
}

#[derive(Subcommand)]
enum Commands {
    /// Settle a brick snapshot and analyze it
    Run {
        /// Which answer to compute
        #[arg(short, long, value_enum, default_value_t = Part::Both)]
        part: Part,

        #[arg(short, long)]
        /// Print out how long each part took
        timings: bool,

        /// Worker threads for the chain reaction count (defaults to one per core)
        #[arg(long)]
        threads: Option<usize>,

        /// Snapshot to read, stdin if omitted
        file: Option<PathBuf>,
    },
}

fn time<T, F>(timings: bool, f: F) -> T
where
    F: FnOnce() -> T,
{
    let t0 = Instant::now();
    let result = f();
    if timings {
        eprintln!("  took {:?}", t0.elapsed());
    }
    result
}

fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(file) => fs::read_to_string(&file)
            .with_context(|| format!("Could not read file: {}", file.display())),
        None if atty::is(atty::Stream::Stdin) => {
            bail!("No input: pass a file or pipe a snapshot into stdin")
        }
        None => {
            let mut str = String::new();
            io::stdin()
                .read_to_string(&mut str)
                .context("Could not read stdin")?;
            Ok(str)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            part,
            timings,
            threads,
            file,
        } => {
            if let Some(threads) = threads {
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build_global()
                    .context("Could not set up the thread pool")?;
            }

            let input = read_input(file)?;

            if part != Part::Two {
                let n = time(timings, || solve(&input))?;
                println!("First part: {n}");
            }

            if part != Part::One {
                let n = time(timings, || bonus(&input))?;
                println!("Bonus: {n}");
            }
        }
    }

    Ok(())
}
