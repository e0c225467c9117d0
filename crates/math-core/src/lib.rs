//! Core types for type-dispatched numeric services
//!
//! This crate provides the foundation shared by the calculator and sampling
//! crates:
//!
//! 1. **Element tags** - the closed [`ElementType`] set and the sealed
//!    [`Element`] trait that maps a generic `T` to its tag
//! 2. **Zero-copy views** - [`RowView`]/[`ColView`] over borrowed buffers
//! 3. **Primitives** - [`ComputePrimitives`] kernels with compile-time backend
//!    selection
//!
//! # Example
//!
//! ```rust
//! use math_core::{ElementType, ScalarBackend, Vector};
//!
//! let x = Vector::new(vec![1i32, 2, 3]);
//! let y = Vector::new(vec![4i32, 5, 6]);
//!
//! assert_eq!(ElementType::of::<i32>(), ElementType::Int32);
//! let dot = x.as_row().mul_col(&y.as_col(), &ScalarBackend::new()).unwrap();
//! assert_eq!(dot, 32);
//! ```

pub mod element;
pub mod error;
pub mod primitives;
pub mod view;

pub use element::{Element, ElementSet, ElementType};
pub use error::{Error, Result};
pub use primitives::{ComputePrimitives, ScalarBackend};
pub use view::{ColView, RowView, Vector};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ColView, ComputePrimitives, Element, ElementSet, ElementType, Error, Result, RowView,
        ScalarBackend, Vector,
    };
}
