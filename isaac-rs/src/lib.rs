//! # ISAAC: independent pseudo-random streams
//!
//! A Rust implementation of Bob Jenkins' ISAAC generator (Public Domain),
//! wired into the `rand_core` traits. Every [`IsaacRng`] owns its whole state,
//! so a sampler can give each worker a private stream seeded on its own.
//!
//! ```
//! use isaac_rs::IsaacRng;
//! use rand_core::{RngCore, SeedableRng};
//!
//! let mut rng = IsaacRng::seed_from_u64(17);
//! let _word = rng.next_u32();
//! ```

mod isaac;

pub use isaac::IsaacRng;
