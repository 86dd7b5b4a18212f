use crate::error::{Error, Result};
use std::{fmt, num::NonZeroU64, time::Duration};

/// Number of trials for one sampler run. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Trials(NonZeroU64);

impl Trials {
    pub fn new(n: u64) -> Result<Self> {
        NonZeroU64::new(n).map(Self).ok_or(Error::ZeroTrials)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl TryFrom<u64> for Trials {
    type Error = Error;

    fn try_from(n: u64) -> Result<Self> {
        Self::new(n)
    }
}

impl fmt::Display for Trials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Sequential,
    Parallel,
}

impl Method {
    /// Label written in the report's method column.
    pub fn label(self) -> &'static str {
        match self {
            Method::Sequential => "Secuencial",
            Method::Parallel => "Paralelo",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Sequential => f.write_str("sequential"),
            Method::Parallel => f.write_str("parallel"),
        }
    }
}

#[inline]
pub fn estimate_pi(hits: u64, trials: Trials) -> f64 {
    4.0 * hits as f64 / trials.get() as f64
}

/// Outcome of one sampler run.
///
/// The three time units all come from the single `elapsed` measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleResult {
    pi: f64,
    hits: u64,
    trials: Trials,
    method: Method,
    workers: usize,
    elapsed: Duration,
}

impl SampleResult {
    pub fn new(
        method: Method,
        trials: Trials,
        workers: usize,
        hits: u64,
        elapsed: Duration,
    ) -> Self {
        Self {
            pi: estimate_pi(hits, trials),
            hits,
            trials,
            method,
            workers,
            elapsed,
        }
    }

    pub fn pi(&self) -> f64 {
        self.pi
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn trials(&self) -> Trials {
        self.trials
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn millis(&self) -> f64 {
        self.seconds() * 1e3
    }

    pub fn micros(&self) -> f64 {
        self.seconds() * 1e6
    }
}

impl fmt::Display for SampleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Samples = {}", self.trials)?;
        writeln!(f, "pi = {:.12}", self.pi)?;
        writeln!(f, "Elapsed (seconds)      => {:.12} s", self.seconds())?;
        writeln!(f, "Elapsed (milliseconds) => {:.8} ms", self.millis())?;
        write!(f, "Elapsed (microseconds) => {:.8} us", self.micros())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_trials_rejected() {
        assert!(matches!(Trials::new(0), Err(Error::ZeroTrials)));
        assert!(matches!(Trials::try_from(0u64), Err(Error::ZeroTrials)));
        assert_eq!(Trials::new(5).unwrap().get(), 5);
    }

    #[test]
    fn test_estimate_pi() {
        let trials = Trials::new(1000).unwrap();
        assert_eq!(estimate_pi(0, trials), 0.0);
        assert_eq!(estimate_pi(1000, trials), 4.0);
        assert_eq!(estimate_pi(500, trials), 2.0);
    }

    #[test]
    fn test_time_units_share_one_measurement() {
        let trials = Trials::new(10).unwrap();
        let result = SampleResult::new(
            Method::Sequential,
            trials,
            1,
            8,
            Duration::from_micros(1500),
        );
        assert!((result.seconds() - 0.0015).abs() < 1e-12);
        assert!((result.millis() - 1.5).abs() < 1e-9);
        assert!((result.micros() - 1500.0).abs() < 1e-6);
        assert_eq!(result.pi(), 3.2);
        assert_eq!(result.hits(), 8);
    }

    #[test]
    fn test_method_labels() {
        assert_eq!(Method::Sequential.label(), "Secuencial");
        assert_eq!(Method::Parallel.label(), "Paralelo");
    }
}
