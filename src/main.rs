use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info, warn};

use numtools::squares::{
    checked_sqrt, load_numbers, mean, weighted_sum_of_squares, FileSink, ResultSink,
};

/// Sum of squares and mean of numbers read from files.
#[derive(Debug, Parser)]
#[command(name = "squares", version)]
struct Cli {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Subcommand)]
enum Mode {
    /// Weighted sum of squares: Σ weight·number²
    Weighted {
        /// File of numbers, whitespace separated (or .csv / .json)
        numbers: PathBuf,
        /// File of weights, one per number
        weights: PathBuf,
        /// Also print the square root of the result
        #[arg(long)]
        sqrt: bool,
        /// Write the result to this file, replacing its content
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Arithmetic mean of the numbers
    Mean {
        /// File of numbers, whitespace separated (or .csv / .json)
        numbers: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli.mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(mode: Mode) -> Result<()> {
    match mode {
        Mode::Weighted {
            numbers,
            weights,
            sqrt,
            output,
        } => {
            let values = load_numbers(&numbers).context("reading numbers")?;
            let weights = load_numbers(&weights).context("reading weights")?;
            if values.is_empty() {
                warn!("{} contains no numbers", numbers.display());
            }

            let result = weighted_sum_of_squares(&values, Some(&weights))?;
            println!("{result}");

            if sqrt {
                println!("{}", checked_sqrt(result)?);
            }

            if let Some(path) = output {
                FileSink::new(path)
                    .write_result(&result.to_string())
                    .context("saving result")?;
            }
        }
        Mode::Mean { numbers } => {
            let values = load_numbers(&numbers).context("reading numbers")?;
            info!("averaging {} numbers", values.len());
            println!("{}", mean(&values)?);
        }
    }
    Ok(())
}
