use crate::{
    error::{Error, Result},
    sampler::count_hits,
    types::{Method, SampleResult, Trials},
};
use isaac_rs::IsaacRng;
use rand::{Rng, SeedableRng};
use rayon::{ThreadPool, ThreadPoolBuilder, prelude::*};
use std::{num::NonZeroUsize, time::Instant};
use tracing::{debug, info};

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix64 finalizer. A bijection on u64.
#[inline]
fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Per-worker seeds from one base seed. Distinct for every worker index.
pub fn derive_seeds(base: u64, workers: NonZeroUsize) -> Vec<u64> {
    (0..workers.get() as u64)
        .map(|i| splitmix64(base.wrapping_add(GOLDEN_GAMMA.wrapping_mul(i + 1))))
        .collect()
}

/// Per-worker seeds with the base drawn from OS entropy.
pub fn worker_seeds(workers: NonZeroUsize) -> Vec<u64> {
    derive_seeds(rand::rng().random(), workers)
}

/// Split `trials` into `workers` shares that differ by at most one and sum to
/// exactly `trials`. The first `trials % workers` shares carry the extra trial.
pub fn partition(trials: u64, workers: NonZeroUsize) -> Vec<u64> {
    let workers = workers.get() as u64;
    let base = trials / workers;
    let extra = trials % workers;
    (0..workers)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect()
}

/// One worker's slice of a parallel run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub worker: usize,
    pub seed: u64,
    pub trials: u64,
}

impl Assignment {
    /// Run this share on a private stream built from the assigned seed.
    pub fn run(&self) -> u64 {
        let mut rng = IsaacRng::seed_from_u64(self.seed);
        let hits = count_hits(&mut rng, self.trials);
        debug!(
            worker = self.worker,
            trials = self.trials,
            hits,
            "worker finished"
        );
        hits
    }
}

/// Pair each seed with its share of `trials`. One worker per seed.
pub fn assign(trials: Trials, seeds: &[u64]) -> Result<Vec<Assignment>> {
    let workers = NonZeroUsize::new(seeds.len()).ok_or(Error::ZeroWorkers)?;
    Ok(seeds
        .iter()
        .zip(partition(trials.get(), workers))
        .enumerate()
        .map(|(worker, (&seed, trials))| Assignment {
            worker,
            seed,
            trials,
        })
        .collect())
}

/// Fixed-size worker pool for the parallel estimate.
pub struct ParallelSampler {
    pool: ThreadPool,
    workers: NonZeroUsize,
}

impl ParallelSampler {
    pub fn new(workers: NonZeroUsize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(|i| format!("mcpi-worker-{i}"))
            .build()?;
        Ok(Self { pool, workers })
    }

    pub fn workers(&self) -> usize {
        self.workers.get()
    }

    pub fn run(&self, trials: Trials) -> Result<SampleResult> {
        let seeds = worker_seeds(self.workers);
        self.run_seeded(trials, &seeds)
    }

    /// Run with caller-provided seeds, exactly one per pool thread.
    ///
    /// Seeding and partitioning happen before the clock starts. The partial
    /// counts are folded with an integer sum, so the total does not depend on
    /// the order workers finish in.
    pub fn run_seeded(&self, trials: Trials, seeds: &[u64]) -> Result<SampleResult> {
        if seeds.len() != self.workers.get() {
            return Err(Error::SeedCount {
                expected: self.workers.get(),
                actual: seeds.len(),
            });
        }
        let plan = assign(trials, seeds)?;
        debug!(?plan, "parallel plan");

        let start = Instant::now();
        let hits: u64 = self
            .pool
            .install(|| plan.par_iter().map(Assignment::run).sum());
        let elapsed = start.elapsed();

        let result = SampleResult::new(Method::Parallel, trials, self.workers(), hits, elapsed);
        info!(
            trials = trials.get(),
            workers = self.workers(),
            hits,
            pi = result.pi(),
            elapsed_us = result.micros(),
            "parallel run finished"
        );
        Ok(result)
    }
}
