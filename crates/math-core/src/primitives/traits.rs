//! Generic compute primitives trait

use crate::element::Element;

/// Trait for computational primitives over one element type
///
/// Kernels assume their preconditions (equal lengths) and only
/// `debug_assert!` them; validation belongs to the calling service.
pub trait ComputePrimitives<T: Element>: Clone + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Number of independent accumulator lanes used by the reduction kernels
    fn lanes(&self) -> usize {
        1
    }

    /// Dot product of two equal-length slices: Σ(a[i] * b[i])
    fn dot_product(&self, a: &[T], b: &[T]) -> T {
        debug_assert_eq!(a.len(), b.len(), "Operands must have same length");

        a.iter()
            .zip(b.iter())
            .fold(T::zero(), |acc, (&x, &y)| acc.add_native(x.mul_native(y)))
    }

    /// Element-wise product written into `out`: out[i] = a[i] * b[i]
    fn multiply_into(&self, a: &[T], b: &[T], out: &mut [T]) {
        debug_assert_eq!(a.len(), b.len(), "Operands must have same length");
        debug_assert_eq!(a.len(), out.len(), "Output must match operand length");

        for ((r, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
            *r = x.mul_native(y);
        }
    }

    /// Sum all elements at native width
    fn sum(&self, data: &[T]) -> T {
        data.iter().fold(T::zero(), |acc, &x| acc.add_native(x))
    }
}
