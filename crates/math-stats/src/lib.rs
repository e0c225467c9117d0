//! Uniform random sampling over closed integer ranges
//!
//! [`StatsService`] draws independent uniform integers in `[min, max]` for the
//! eight integer element types. Each call builds its own engine from OS
//! entropy unless the service was given an explicit seed.
//!
//! # Example
//!
//! ```rust
//! use math_stats::StatsService;
//!
//! let stats = StatsService::<u8>::new();
//! let samples = stats.sample_uniform(1_000, 10, 20).unwrap();
//! assert_eq!(samples.len(), 1_000);
//! assert!(samples.iter().all(|&v| (10..=20).contains(&v)));
//! ```

pub mod uniform;

pub use uniform::{SamplingPath, StatsService, UniformKernel};

pub use math_core::{Error, Result};

use math_core::ElementSet;

/// Element types with sampling kernels
pub const SAMPLING_TYPES: ElementSet = ElementSet::INTEGERS;
