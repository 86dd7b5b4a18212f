use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type alias for sampling runs
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A sampler was asked for zero trials
    #[error("trial count must be greater than zero")]
    ZeroTrials,

    /// The parallel sampler was configured without workers
    #[error("worker count must be greater than zero")]
    ZeroWorkers,

    /// A seed list did not hold exactly one seed per pool thread
    #[error("expected {expected} worker seeds, got {actual}")]
    SeedCount { expected: usize, actual: usize },

    /// The rayon pool could not be started
    #[error("unable to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// The report file could not be opened for writing
    #[error("could not open {} for writing: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A report row could not be encoded
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
