//! Monte Carlo estimation of π, single-threaded against a fixed worker pool.
//!
//! Both samplers count points of the unit square that land inside the quarter
//! circle. The parallel sampler hands every worker its own seeded ISAAC stream
//! and sums the partial counts once all workers are done.

pub mod consts;
pub mod driver;
pub mod error;
pub mod parallel;
pub mod report;
pub mod sampler;
pub mod types;

pub use error::{Error, Result};
pub use types::{Method, SampleResult, Trials};
