use clap::Parser;
use mcpi_rs::{
    consts::{DEFAULT_WORKERS, OUTPUT_FILE},
    driver::{self, RunConfig},
};
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Estimate pi by Monte Carlo, sequential vs parallel", long_about = None)]
struct Args {
    /// Number of samples; runs the built-in size list when omitted
    samples: Option<u64>,

    /// Worker threads for the parallel sampler
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// CSV file the results are written to
    #[arg(short, long, default_value = OUTPUT_FILE)]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mcpi=info,mcpi_rs=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let outcome = RunConfig::new(args.samples, args.workers, args.output)
        .and_then(|config| driver::run(&config));

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
