use std::error::Error;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use topkfi::{write_report, ExpansionPolicy, Limits, TopKError, TopKMiner, TransactionStore};

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Expansion {
    /// Destructive shared-list drain, one support-1 extension per matching transaction.
    Reference,

    /// Exact supports; each extension scans the whole supporting list.
    Aggregated,
}

impl From<Expansion> for ExpansionPolicy {
    fn from(e: Expansion) -> Self {
        match e {
            Expansion::Reference => Self::Reference,
            Expansion::Aggregated => Self::Aggregated,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "mine",
    about = "A program to mine the top-K frequent itemsets.",
    allow_negative_numbers = true
)]
struct Args {
    /// Dataset file, one transaction per line as ascending whitespace-separated integers.
    dataset: PathBuf,

    /// Number of itemsets to extract before the tie with the K-th support is drained.
    k: i64,

    /// Maximum number of itemsets to print; above it, only the count is printed.
    m: i64,

    /// How extracted itemsets are grown by one item.
    #[clap(long, value_enum, default_value = "reference")]
    expansion: Expansion,

    /// Prints debug logs to stderr.
    #[clap(short = 'v', long)]
    verbose: bool,
}

/// Loads the dataset, mines it, and writes the report to `out`.
///
/// Nothing is written to `out` if the dataset cannot be loaded.
fn run<W>(
    dataset: &Path,
    limits: Limits,
    policy: ExpansionPolicy,
    out: W,
) -> topkfi::Result<()>
where
    W: Write,
{
    eprintln!("Loading the dataset...");
    let store = TransactionStore::from_path(dataset)?;
    eprintln!("{} transactions", store.len());

    eprintln!("Mining...");
    let start = Instant::now();
    let results = TopKMiner::new(limits.k()).expansion(policy).mine(&store);
    eprintln!("{} seconds", start.elapsed().as_secs_f64());

    let mut out = BufWriter::new(out);
    write_report(&mut out, &results, limits.max_output())?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::WARN
        })
        .init();

    let limits = match Limits::new(args.k, args.m) {
        Ok(limits) => limits,
        Err(e) => Args::command().error(ErrorKind::InvalidValue, e).exit(),
    };
    debug!(dataset = ?args.dataset, k = limits.k(), m = limits.max_output(), "arguments");

    match run(
        &args.dataset,
        limits,
        args.expansion.into(),
        std::io::stdout().lock(),
    ) {
        Ok(()) => Ok(()),
        Err(TopKError::StdIo(e)) => Err(e.into()),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
