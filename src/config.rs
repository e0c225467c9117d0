//! Configuration for the service factory

use math_calc::{DotStrategy, ARITHMETIC_TYPES};
use math_core::{ElementSet, Error, Result};
use math_stats::SAMPLING_TYPES;
use serde::{Deserialize, Serialize};

/// Kernel coverage and behaviour of the services handed out by
/// [`MathServices`](crate::MathServices)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Element types the vector and array calculators accept
    pub arithmetic_types: ElementSet,
    /// Element types the sampler accepts
    pub sampling_types: ElementSet,
    /// Dot product realization
    pub dot_strategy: DotStrategy,
    /// Fixed seed for every sampling call; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            arithmetic_types: ARITHMETIC_TYPES,
            sampling_types: SAMPLING_TYPES,
            dot_strategy: DotStrategy::View,
            seed: None,
        }
    }
}

impl ServiceConfig {
    pub fn with_arithmetic_types(mut self, types: ElementSet) -> Self {
        self.arithmetic_types = types;
        self
    }

    pub fn with_sampling_types(mut self, types: ElementSet) -> Self {
        self.sampling_types = types;
        self
    }

    pub fn with_dot_strategy(mut self, strategy: DotStrategy) -> Self {
        self.dot_strategy = strategy;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject coverage sets naming types without kernels
    pub fn validate(&self) -> Result<()> {
        if self.arithmetic_types.intersects(ElementSet::FLOATS) {
            return Err(Error::InvalidParameter(format!(
                "arithmetic kernels exist for integer types only, got {:?}",
                self.arithmetic_types
            )));
        }
        if !SAMPLING_TYPES.contains(self.sampling_types) {
            return Err(Error::InvalidParameter(format!(
                "sampling kernels exist for integer types only, got {:?}",
                self.sampling_types
            )));
        }
        Ok(())
    }
}
