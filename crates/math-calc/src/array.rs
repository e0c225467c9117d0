//! Element-wise array calculator

use crate::ARITHMETIC_TYPES;
use math_core::{ComputePrimitives, Element, ElementSet, Error, Result, ScalarBackend};
use tracing::instrument;

/// Element-wise arithmetic over arrays of any supported element type
///
/// The element type is chosen per call; calls with a type outside
/// `supported` fail with `UnsupportedType` before touching the buffers.
#[derive(Debug, Clone)]
pub struct ArrayCalculator<P = ScalarBackend> {
    backend: P,
    supported: ElementSet,
}

impl ArrayCalculator {
    /// Create a calculator with the scalar backend and default coverage
    pub fn new() -> Self {
        Self::with_backend(ScalarBackend::new(), ARITHMETIC_TYPES)
    }
}

impl Default for ArrayCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> ArrayCalculator<P> {
    /// Create a calculator over `backend` covering the integer tags of
    /// `supported`; float tags are dropped
    pub fn with_backend(backend: P, supported: ElementSet) -> Self {
        Self {
            backend,
            supported: supported & ElementSet::INTEGERS,
        }
    }

    pub fn supported_types(&self) -> ElementSet {
        self.supported
    }

    fn check<T: Element>(&self, x: &[T], y: &[T]) -> Result<()> {
        if !self.supported.supports(T::TYPE) {
            return Err(Error::unsupported(T::TYPE, "element-wise multiply"));
        }
        if x.len() != y.len() {
            return Err(Error::length_mismatch(x.len(), y.len(), "element-wise multiply"));
        }
        Ok(())
    }

    /// Element-wise product into a new array: r[i] = x[i] * y[i]
    #[instrument(level = "trace", skip(self, x, y), fields(element = %T::TYPE, len = x.len()))]
    pub fn multiply<T>(&self, x: &[T], y: &[T]) -> Result<Vec<T>>
    where
        T: Element,
        P: ComputePrimitives<T>,
    {
        self.check(x, y)?;
        let mut result = vec![T::zero(); x.len()];
        self.backend.multiply_into(x, y, &mut result);
        Ok(result)
    }

    /// Element-wise product written into a caller-owned buffer
    pub fn multiply_into<T>(&self, x: &[T], y: &[T], out: &mut [T]) -> Result<()>
    where
        T: Element,
        P: ComputePrimitives<T>,
    {
        self.check(x, y)?;
        if out.len() != x.len() {
            return Err(Error::length_mismatch(x.len(), out.len(), "multiply output"));
        }
        self.backend.multiply_into(x, y, out);
        Ok(())
    }
}
