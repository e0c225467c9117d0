//! Computational primitives with compile-time dispatch
//!
//! The kernels behind the calculators: the 1×N by N×1 row-by-column product
//! and the element-wise multiply.
//!
//! # Architecture
//!
//! - Single `ComputePrimitives<T>` trait for all operations
//! - Concrete backend types, selected at compile time
//! - No heap allocation or dynamic dispatch inside a kernel
//!
//! # Usage
//!
//! ```rust
//! use math_core::{ComputePrimitives, ScalarBackend};
//!
//! let backend = ScalarBackend::new();
//! assert_eq!(backend.dot_product(&[1, 2, 3], &[4, 5, 6]), 32);
//! ```

pub mod scalar;
pub mod traits;

pub use scalar::ScalarBackend;
pub use traits::ComputePrimitives;
