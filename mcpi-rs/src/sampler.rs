use crate::types::{Method, SampleResult, Trials};
use isaac_rs::IsaacRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::info;

/// A point falls inside the unit quarter circle.
#[inline]
pub fn is_hit(x: f64, y: f64) -> bool {
    x * x + y * y <= 1.0
}

/// Draw `trials` points in the unit square from `rng` and count the hits.
pub fn count_hits<R: Rng + ?Sized>(rng: &mut R, trials: u64) -> u64 {
    let mut hits = 0u64;
    for _ in 0..trials {
        let x: f64 = rng.random();
        let y: f64 = rng.random();
        if is_hit(x, y) {
            hits += 1;
        }
    }
    hits
}

/// Single-threaded baseline on a stream seeded from OS entropy.
pub fn sequential(trials: Trials) -> SampleResult {
    let mut rng = IsaacRng::from_rng(&mut rand::rng());
    sequential_with(&mut rng, trials)
}

pub fn sequential_with<R: Rng + ?Sized>(rng: &mut R, trials: Trials) -> SampleResult {
    let start = Instant::now();
    let hits = count_hits(rng, trials.get());
    let elapsed = start.elapsed();

    let result = SampleResult::new(Method::Sequential, trials, 1, hits, elapsed);
    info!(
        trials = trials.get(),
        hits,
        pi = result.pi(),
        elapsed_us = result.micros(),
        "sequential run finished"
    );
    result
}
