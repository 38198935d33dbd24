use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use mini_scanf::ScanConfig;
use mini_scanf::Scanner;
use mini_scanf::config::DEFAULT_MAX_EXPONENT;
use mini_scanf::config::DEFAULT_TEXT_LIMIT;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    version,
    about = "Scan stdin (or a file) with a scanf-style format and print the converted values.",
    long_about = "Scan stdin (or a file) with a scanf-style format and print the converted \
                  values.\n\nDirectives: %c %d %s %f %x %b %r %w %%\n\nExample:\n  echo 'a 42 \
                  MCMXCIV' | mini-scanf '%c %d %r'"
)]
struct Cli {
    /// The format string.
    format: String,

    /// Read from this file instead of stdin.
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Longest token `%s` and `%w` may store.
    #[arg(long, default_value_t = DEFAULT_TEXT_LIMIT)]
    text_limit: usize,

    /// Largest exponent magnitude `%f` accepts.
    #[arg(long, default_value_t = DEFAULT_MAX_EXPONENT)]
    max_exponent: u32,

    /// Apply the format repeatedly until a scan converts nothing.
    #[arg(long, short, default_value_t = false)]
    repeat: bool,

    /// Log why each scan stopped.
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn main() {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let result = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => run(&args, BufReader::new(file)),
            Err(e) => Err(format!("cannot open {}: {e}", path.display()).into()),
        },
        None => run(&args, io::stdin().lock()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(2);
    }
}

fn run<R: BufRead>(args: &Cli, reader: R) -> Result<(), Box<dyn std::error::Error>> {
    let config = ScanConfig::default()
        .text_limit(args.text_limit)
        .max_exponent(args.max_exponent);
    let mut scanner = Scanner::with_config(reader, config);

    loop {
        let values = scanner.scan_values(&args.format)?;
        for value in &values {
            println!("{value}");
        }
        println!("count: {}", values.len());
        if !args.repeat || values.is_empty() {
            return Ok(());
        }
    }
}
