use crate::{
    consts::DEFAULT_SIZES,
    error::{Error, Result},
    parallel::ParallelSampler,
    report::{self, WriteMode},
    sampler,
    types::{SampleResult, Trials},
};
use std::{num::NonZeroUsize, path::PathBuf, thread};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub sizes: Vec<Trials>,
    pub workers: NonZeroUsize,
    pub output: PathBuf,
}

impl RunConfig {
    /// A single `samples` value replaces the built-in size list.
    pub fn new(samples: Option<u64>, workers: usize, output: PathBuf) -> Result<Self> {
        let sizes = match samples {
            Some(n) => vec![Trials::new(n)?],
            None => DEFAULT_SIZES
                .iter()
                .map(|&n| Trials::new(n))
                .collect::<Result<_>>()?,
        };
        let workers = NonZeroUsize::new(workers).ok_or(Error::ZeroWorkers)?;
        Ok(Self {
            sizes,
            workers,
            output,
        })
    }
}

/// Sequential and parallel results for one sample size.
#[derive(Debug, Clone, Copy)]
pub struct Comparison {
    pub sequential: SampleResult,
    pub parallel: SampleResult,
}

impl Comparison {
    pub fn difference(&self) -> f64 {
        (self.sequential.pi() - self.parallel.pi()).abs()
    }
}

fn print_sequential(result: &SampleResult) {
    println!("---------------- Monte Carlo, sequential ----------------");
    println!("{result}");
    println!("---------------------------------------------------------\n");
}

fn print_parallel(result: &SampleResult, processors: usize) {
    println!("---------------- Monte Carlo, parallel ------------------");
    println!("Processors: {processors}");
    println!("Worker threads: {}", result.workers());
    println!("{result}");
    println!("---------------------------------------------------------\n");
}

fn print_comparison(cmp: &Comparison) {
    println!("Comparison:");
    println!("pi sequential: {:.12}", cmp.sequential.pi());
    println!("pi parallel:   {:.12}", cmp.parallel.pi());
    println!("Difference:    {:.12}", cmp.difference());
}

/// Run both samplers for every configured size and record each pair.
///
/// The first size creates the report fresh, later sizes append. A report
/// that cannot be written is reported and skipped; the run carries on.
pub fn run(config: &RunConfig) -> Result<Vec<Comparison>> {
    let pool = ParallelSampler::new(config.workers)?;
    let processors = thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);

    println!("\n====== STARTING RUNS ACROSS SAMPLE SIZES ======\n");

    let mut comparisons = Vec::with_capacity(config.sizes.len());
    for (i, &trials) in config.sizes.iter().enumerate() {
        println!("\n\n======= RUN WITH {trials} SAMPLES =======\n");
        info!(trials = trials.get(), workers = pool.workers(), "starting size");

        let sequential = sampler::sequential(trials);
        print_sequential(&sequential);

        let parallel = pool.run(trials)?;
        print_parallel(&parallel, processors);

        let cmp = Comparison {
            sequential,
            parallel,
        };
        print_comparison(&cmp);

        let mode = if i == 0 {
            WriteMode::Fresh
        } else {
            WriteMode::Append
        };
        if let Err(err) = report::write_pair(&sequential, &parallel, &config.output, mode) {
            eprintln!("Error: {err}");
            warn!(%err, "skipping report rows");
        }

        comparisons.push(cmp);
    }

    println!("\nAll results saved to: {}", config.output.display());
    println!("\n====== ALL RUNS COMPLETE ======");

    Ok(comparisons)
}
