//! Dot-product calculator
//!
//! Two interchangeable realizations:
//! - [`DotStrategy::View`]: the operands are borrowed as a 1×N row and an N×1
//!   column and multiplied by the backend's row-by-column kernel
//! - [`DotStrategy::Accumulate`]: a sequential fold over the zipped components
//!
//! Integer arithmetic wraps at native width in both, so they agree exactly.

use crate::ARITHMETIC_TYPES;
use math_core::{
    ColView, ComputePrimitives, Element, ElementSet, ElementType, Error, Result, RowView,
    ScalarBackend, Vector,
};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// How a [`VectorCalculator`] evaluates the dot product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DotStrategy {
    /// Row-by-column product over zero-copy views
    #[default]
    View,
    /// Sequential accumulation loop
    Accumulate,
}

/// Sequential dot product: Σ(x[i] * y[i]) at native width
///
/// Iterates the shorter operand; length validation is the caller's job.
pub fn dot_accumulate<T: Element>(x: &[T], y: &[T]) -> T {
    let mut result = T::zero();
    for (&a, &b) in x.iter().zip(y.iter()) {
        result = result.add_native(a.mul_native(b));
    }
    result
}

/// Dot-product service for one element type
#[derive(Debug, Clone)]
pub struct VectorCalculator<T, P = ScalarBackend> {
    backend: P,
    strategy: DotStrategy,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Element> VectorCalculator<T> {
    /// Create a calculator with the scalar backend and default coverage
    pub fn new() -> Result<Self> {
        Self::with_backend(ScalarBackend::new(), ARITHMETIC_TYPES)
    }
}

impl<T, P> VectorCalculator<T, P>
where
    T: Element,
    P: ComputePrimitives<T>,
{
    /// Create a calculator over `backend`, failing with `UnsupportedType`
    /// unless `T` is an integer tag and a member of `supported`
    ///
    /// Float tags are always refused: the lane kernel reorders the sum, so
    /// the two strategies would round differently.
    pub fn with_backend(backend: P, supported: ElementSet) -> Result<Self> {
        if !T::TYPE.is_integer() || !supported.supports(T::TYPE) {
            return Err(Error::unsupported(T::TYPE, "dot product"));
        }
        debug!(
            element = %T::TYPE,
            backend = backend.backend_name(),
            lanes = backend.lanes(),
            "Resolved dot product kernel"
        );
        Ok(Self {
            backend,
            strategy: DotStrategy::default(),
            _marker: PhantomData,
        })
    }

    /// Set the evaluation strategy
    pub fn with_strategy(mut self, strategy: DotStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> DotStrategy {
        self.strategy
    }

    pub fn element_type(&self) -> ElementType {
        T::TYPE
    }

    pub fn backend(&self) -> &P {
        &self.backend
    }

    /// Dot product of two vectors of equal length
    pub fn dot(&self, x: &Vector<T>, y: &Vector<T>) -> Result<T> {
        self.dot_slices(x.components(), y.components())
    }

    /// Dot product over borrowed slices
    #[instrument(level = "trace", skip(self, x, y), fields(element = %T::TYPE, len = x.len()))]
    pub fn dot_slices(&self, x: &[T], y: &[T]) -> Result<T> {
        if x.len() != y.len() {
            return Err(Error::length_mismatch(x.len(), y.len(), "dot product"));
        }
        match self.strategy {
            DotStrategy::View => RowView::new(x).mul_col(&ColView::new(y), &self.backend),
            DotStrategy::Accumulate => Ok(dot_accumulate(x, y)),
        }
    }
}
