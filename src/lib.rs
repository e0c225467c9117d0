//! Type-dispatched numeric services
//!
//! A single generic entry point, [`MathServices`], hands out services
//! specialized for an element type:
//!
//! - [`VectorCalculator`] - dot products over zero-copy row/column views
//! - [`ArrayCalculator`] - element-wise multiplication
//! - [`StatsService`] - uniform integer sampling for eight integer widths
//!
//! The element type's tag is resolved once when a service is requested;
//! unsupported types fail with [`Error::UnsupportedType`].
//!
//! # Example
//!
//! ```rust
//! use math_services::{MathServices, Vector};
//!
//! let services = MathServices::new();
//!
//! let calc = services.vector_calcs::<i32>().unwrap();
//! let dot = calc.dot(&Vector::new(vec![1, 2, 3]), &Vector::new(vec![4, 5, 6])).unwrap();
//! assert_eq!(dot, 32);
//!
//! let product = services.array_calculator().multiply(&[2, 3, 4], &[5, 6, 7]).unwrap();
//! assert_eq!(product, vec![10, 18, 28]);
//!
//! let samples = services.stats::<u16>().sample_uniform(100, 0, 1).unwrap();
//! assert!(samples.iter().all(|&v| v <= 1));
//!
//! assert!(services.vector_calcs::<f64>().is_err());
//! ```

pub mod config;

pub use config::ServiceConfig;

pub use math_calc::{dot_accumulate, ArrayCalculator, DotStrategy, VectorCalculator};
pub use math_core::{
    ColView, ComputePrimitives, Element, ElementSet, ElementType, Error, Result, RowView,
    ScalarBackend, Vector,
};
pub use math_stats::{SamplingPath, StatsService};

use tracing::debug;

/// Factory for type-specialized calculators and samplers
///
/// Holds only its immutable configuration, so it can be shared freely across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct MathServices {
    config: ServiceConfig,
}

impl MathServices {
    /// Create a factory with default coverage (`int32` arithmetic, all
    /// integer sampling)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory from a validated configuration
    pub fn with_config(config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Sampling service for `T`
    ///
    /// Never fails; an unsupported `T` surfaces as `UnsupportedType` from the
    /// sampling call. Use [`sampler`](Self::sampler) to fail up front.
    pub fn stats<T: Element>(&self) -> StatsService<T> {
        let service = StatsService::with_supported(self.config.sampling_types);
        match self.config.seed {
            Some(seed) => service.with_seed(seed),
            None => service,
        }
    }

    /// Sampling service for `T`, or `UnsupportedType`
    pub fn sampler<T: Element>(&self) -> Result<StatsService<T>> {
        let service = self.stats::<T>();
        let path = service.sampling_path()?;
        debug!(element = %T::TYPE, ?path, "Resolved sampler");
        Ok(service)
    }

    /// Dot-product calculator for `T`, or `UnsupportedType`
    pub fn vector_calcs<T: Element>(&self) -> Result<VectorCalculator<T>> {
        VectorCalculator::with_backend(ScalarBackend::new(), self.config.arithmetic_types)
            .map(|calc| calc.with_strategy(self.config.dot_strategy))
    }

    /// Element-wise array calculator
    pub fn array_calculator(&self) -> ArrayCalculator {
        ArrayCalculator::with_backend(ScalarBackend::new(), self.config.arithmetic_types)
    }
}

/// Sampling service for `T` with default configuration
pub fn stats<T: Element>() -> StatsService<T> {
    MathServices::new().stats()
}

/// Dot-product calculator for `T` with default configuration
pub fn vector_calcs<T: Element>() -> Result<VectorCalculator<T>> {
    MathServices::new().vector_calcs()
}

/// Element-wise array calculator with default configuration
pub fn array_calculator() -> ArrayCalculator {
    MathServices::new().array_calculator()
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ArrayCalculator, DotStrategy, Element, ElementSet, ElementType, Error, MathServices,
        Result, ServiceConfig, StatsService, Vector, VectorCalculator,
    };
}
