//! Scalar backend implementation
//!
//! Portable kernels for every element type. The reduction kernels keep
//! several independent accumulators so the compiler can pipeline them.

use crate::element::Element;
use crate::primitives::ComputePrimitives;

const LANES: usize = 4;

/// Scalar backend - works for all element types
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Element> ComputePrimitives<T> for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    fn lanes(&self) -> usize {
        LANES
    }

    fn dot_product(&self, a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len(), "Operands must have same length");

        let n = a.len().min(b.len());
        let (a, b) = (&a[..n], &b[..n]);
        let mut acc = [T::zero(); LANES];

        let a_chunks = a.chunks_exact(LANES);
        let b_chunks = b.chunks_exact(LANES);
        let (a_tail, b_tail) = (a_chunks.remainder(), b_chunks.remainder());

        for (xa, xb) in a_chunks.zip(b_chunks) {
            for lane in 0..LANES {
                acc[lane] = acc[lane].add_native(xa[lane].mul_native(xb[lane]));
            }
        }

        let mut total = acc
            .iter()
            .fold(T::zero(), |sum, &partial| sum.add_native(partial));
        for (&x, &y) in a_tail.iter().zip(b_tail.iter()) {
            total = total.add_native(x.mul_native(y));
        }
        total
    }
}
