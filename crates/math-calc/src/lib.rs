//! Vector and array calculators
//!
//! Both calculators resolve the element type once, at construction or at the
//! top of each generic call, against the set of types they carry kernels for.
//! Arithmetic coverage defaults to [`ARITHMETIC_TYPES`] (`int32` only).
//!
//! # Example
//!
//! ```rust
//! use math_calc::{ArrayCalculator, VectorCalculator};
//! use math_core::Vector;
//!
//! let calc = VectorCalculator::<i32>::new().unwrap();
//! let dot = calc.dot(&Vector::new(vec![1, 2, 3]), &Vector::new(vec![4, 5, 6])).unwrap();
//! assert_eq!(dot, 32);
//!
//! let arrays = ArrayCalculator::new();
//! assert_eq!(arrays.multiply(&[2, 3, 4], &[5, 6, 7]).unwrap(), vec![10, 18, 28]);
//!
//! // Only int32 has an arithmetic kernel by default
//! assert!(VectorCalculator::<i64>::new().is_err());
//! ```

pub mod array;
pub mod vector;

pub use array::ArrayCalculator;
pub use vector::{dot_accumulate, DotStrategy, VectorCalculator};

pub use math_core::{Error, Result};

use math_core::ElementSet;

/// Element types with arithmetic kernels unless configured otherwise
pub const ARITHMETIC_TYPES: ElementSet = ElementSet::INT32;
