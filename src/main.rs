//! SHA3 Oracle CLI.
//!
//! `sha3 digest <FILE>` prints the SHA3-256 of a file as lowercase hex.

use clap::{Parser, Subcommand};
use sha3_oracle::conformance::{self, CorpusRunner, TestResult};
use sha3_oracle::file::hash_file_with_chunk_size;
use sha3_oracle::BUFFER_SIZE;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sha3")]
#[command(about = "SHA3-256 file hasher", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SHA3-256 digest of a file
    Digest {
        /// File to hash
        file: PathBuf,

        /// Report elapsed time on stderr
        #[arg(long)]
        time: bool,

        /// Bytes read per chunk
        #[arg(long, default_value_t = BUFFER_SIZE)]
        chunk_size: usize,
    },

    /// Run a known-answer corpus (the bundled one if no path is given)
    Check {
        /// Corpus JSON file
        corpus: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_digest(file: PathBuf, time: bool, chunk_size: usize) -> ExitCode {
    let start = Instant::now();
    match hash_file_with_chunk_size(&file, chunk_size) {
        Ok(digest) => {
            println!("{}", digest);
            if time {
                eprintln!("elapsed: {:.3} ms", start.elapsed().as_secs_f64() * 1000.0);
            }
            ExitCode::SUCCESS
        }
        Err(e) if e.is_source_error() => {
            eprintln!("error: cannot read {}: {}", file.display(), e);
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run_check(corpus: Option<PathBuf>) -> ExitCode {
    let runner = match &corpus {
        Some(path) => CorpusRunner::load(path),
        None => conformance::bundled(),
    };
    let runner = match runner {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(2);
        }
    };

    let results = runner.run_all();
    for (id, result) in &results.details {
        match result {
            TestResult::Pass => {}
            TestResult::Fail { expected, actual } => {
                println!("FAIL {} - expected: {}, actual: {}", id, expected, actual)
            }
            TestResult::Skip { reason } => println!("SKIP {} - {}", id, reason),
            TestResult::Error { message } => println!("ERROR {} - {}", id, message),
        }
    }
    println!("{}", results.summary());

    if results.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Digest {
            file,
            time,
            chunk_size,
        } => run_digest(file, time, chunk_size),
        Commands::Check { corpus } => run_check(corpus),
        Commands::Version => {
            println!("sha3 v{}", env!("CARGO_PKG_VERSION"));
            println!("SHA3-256 (Keccak-f[1600], rate 136, capacity 64)");
            ExitCode::SUCCESS
        }
    }
}
