use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use serde::Serialize;

use numtools::bench::{format_time, loops_line, try_repeat};
use numtools::pi::{estimate_line, pi_estimator, RngSource};

/// Calculates an approximate value of PI and how long it takes
#[derive(Debug, Parser)]
#[command(name = "calc-pi", version)]
struct Args {
    /// Number of random points to use
    #[arg(long, short = 'p', default_value_t = 10_000)]
    npoints: usize,

    /// Number of times to execute the calculation per timing run
    #[arg(long, short = 'n', default_value_t = 100)]
    number: u32,

    /// How many times to repeat the timer
    #[arg(long, short = 'r', default_value_t = 5)]
    repeat: u32,

    /// Seed the point generator for reproducible estimates
    #[arg(long)]
    seed: Option<u64>,

    /// Print the run summary as a JSON object
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct PiRun {
    npoints: usize,
    estimate: f64,
    number: u32,
    repeat: u32,
    runs_secs: Vec<f64>,
    best_secs: f64,
    best: String,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let source = match args.seed {
        Some(seed) => {
            info!("sampling with seed {seed}");
            RngSource::seeded(seed)
        }
        None => RngSource::from_os_rng(),
    };

    let mut calc_pi = pi_estimator(args.npoints, source);
    let estimate = calc_pi().context("estimating pi")?;

    let sample = try_repeat(&mut calc_pi, args.number, args.repeat).context("timing estimator")?;

    if args.json {
        let summary = PiRun {
            npoints: args.npoints,
            estimate,
            number: args.number,
            repeat: args.repeat,
            runs_secs: sample.runs().iter().map(|d| d.as_secs_f64()).collect(),
            best_secs: sample.best(),
            best: format_time(sample.best()),
        };
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("{}", estimate_line(estimate, args.npoints));
        println!("{}", loops_line(args.number, args.repeat, sample.best()));
    }
    Ok(())
}
