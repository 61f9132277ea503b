use clap::{ArgAction, Parser};
use num_bigint::BigInt;
use omnipress::{parse_shift, transform_file};
use std::path::PathBuf;
use std::process::ExitCode;

const LONG_ABOUT: &str = "\
This program compresses and decompresses files.
Its compression ratio is very near to no compression (a fraction of a bit),
but it ALWAYS compresses, so you can ALWAYS get 0-length compressed files.
Experiment with very small files first. Use repeatedly (billions of times
or even more).

Examples:
  omnipress -c FILE        compress once
  omnipress -C 5 FILE      compress 5 times
  omnipress -D 5 FILE      decompress 5 times
  omnipress -d FILE        decompress once";

#[derive(Parser)]
#[command(name = "omnipress")]
#[command(version)]
#[command(about = "The compressor that always compresses", long_about = LONG_ABOUT)]
struct Cli {
    /// Compress once (repeatable)
    #[arg(short = 'c', action = ArgAction::Count)]
    compress: u8,

    /// Decompress once (repeatable)
    #[arg(short = 'd', action = ArgAction::Count)]
    decompress: u8,

    /// Compress COUNT times (signed, arbitrary precision; repeatable)
    #[arg(short = 'C', value_name = "COUNT", action = ArgAction::Append, allow_hyphen_values = true)]
    compress_by: Vec<String>,

    /// Decompress COUNT times (signed, arbitrary precision; repeatable)
    #[arg(short = 'D', value_name = "COUNT", action = ArgAction::Append, allow_hyphen_values = true)]
    decompress_by: Vec<String>,

    /// Trace intermediate values to stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// File to rewrite in place
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version go to stdout and are not failures; every
            // other parse error exits 1 like the rest of the error paths
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = err.print();
            return code;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // All flag occurrences accumulate into one net shift before any file
    // access; mixed signs may cancel each other out
    let mut shift = BigInt::from(cli.compress) - BigInt::from(cli.decompress);
    for literal in &cli.compress_by {
        shift += parse_shift(literal)?;
    }
    for literal in &cli.decompress_by {
        shift -= parse_shift(literal)?;
    }

    if cli.verbose {
        eprintln!("net shift: {}", shift);
    }

    transform_file(&cli.file, &shift, cli.verbose)?;
    Ok(())
}
