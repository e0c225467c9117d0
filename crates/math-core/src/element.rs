//! Element type tags and the generic element trait
//!
//! Every service in the workspace is parameterized by an element type `T`.
//! The closed [`ElementType`] enum is the runtime tag for `T`; it is resolved
//! once when a service is constructed and drives kernel selection from then on.
//!
//! # Design Philosophy
//!
//! - **Closed set**: only the ten primitive types below can be elements
//! - **Resolved once**: `T::TYPE` is a constant, no per-call type comparisons
//! - **Native width**: integer arithmetic wraps at the storage width

use crate::error::{Error, Result};
use bitflags::bitflags;
use bytemuck::Pod;
use num_traits::Num;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::str::FromStr;

/// Runtime tag identifying the storage type of a buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float32,
    Float64,
}

impl ElementType {
    /// All tags, integers first
    pub const ALL: [ElementType; 10] = [
        ElementType::Int8,
        ElementType::UInt8,
        ElementType::Int16,
        ElementType::UInt16,
        ElementType::Int32,
        ElementType::UInt32,
        ElementType::Int64,
        ElementType::UInt64,
        ElementType::Float32,
        ElementType::Float64,
    ];

    /// Resolve the tag of a generic element type
    pub const fn of<T: Element>() -> Self {
        T::TYPE
    }

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::UInt8 => "uint8",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }

    /// Parse a canonical name such as `"int32"` or `"uint8"`
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == name)
            .ok_or_else(|| Error::InvalidParameter(format!("unknown element type '{name}'")))
    }

    /// Storage width in bytes
    pub const fn size_of(self) -> usize {
        match self {
            Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 => 4,
            Self::Int64 | Self::UInt64 | Self::Float64 => 8,
        }
    }

    pub const fn is_integer(self) -> bool {
        !matches!(self, Self::Float32 | Self::Float64)
    }

    pub const fn is_signed(self) -> bool {
        !matches!(
            self,
            Self::UInt8 | Self::UInt16 | Self::UInt32 | Self::UInt64
        )
    }

    /// The single-member set for this tag
    pub const fn flag(self) -> ElementSet {
        match self {
            Self::Int8 => ElementSet::INT8,
            Self::UInt8 => ElementSet::UINT8,
            Self::Int16 => ElementSet::INT16,
            Self::UInt16 => ElementSet::UINT16,
            Self::Int32 => ElementSet::INT32,
            Self::UInt32 => ElementSet::UINT32,
            Self::Int64 => ElementSet::INT64,
            Self::UInt64 => ElementSet::UINT64,
            Self::Float32 => ElementSet::FLOAT32,
            Self::Float64 => ElementSet::FLOAT64,
        }
    }
}

impl Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

bitflags! {
    /// A set of element types, used to declare kernel coverage
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ElementSet: u16 {
        const INT8 = 1 << 0;
        const UINT8 = 1 << 1;
        const INT16 = 1 << 2;
        const UINT16 = 1 << 3;
        const INT32 = 1 << 4;
        const UINT32 = 1 << 5;
        const INT64 = 1 << 6;
        const UINT64 = 1 << 7;
        const FLOAT32 = 1 << 8;
        const FLOAT64 = 1 << 9;

        const INTEGERS = Self::INT8.bits()
            | Self::UINT8.bits()
            | Self::INT16.bits()
            | Self::UINT16.bits()
            | Self::INT32.bits()
            | Self::UINT32.bits()
            | Self::INT64.bits()
            | Self::UINT64.bits();
        const FLOATS = Self::FLOAT32.bits() | Self::FLOAT64.bits();
    }
}

impl ElementSet {
    /// Check whether a tag is a member of this set
    pub fn supports(self, element: ElementType) -> bool {
        self.contains(element.flag())
    }

    /// Iterate the member tags in declaration order
    pub fn types(self) -> impl Iterator<Item = ElementType> {
        ElementType::ALL
            .into_iter()
            .filter(move |t| self.supports(*t))
    }
}

impl From<ElementType> for ElementSet {
    fn from(element: ElementType) -> Self {
        element.flag()
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Base trait for buffer element types
///
/// Sealed: the tag must describe the actual storage type, since services
/// reinterpret `&[T]` as the tagged primitive.
pub trait Element:
    sealed::Sealed + Pod + Num + Copy + PartialOrd + Debug + Send + Sync + 'static
{
    /// Runtime tag for this type
    const TYPE: ElementType;

    /// Multiply at native width (wrapping for integers)
    fn mul_native(self, rhs: Self) -> Self;

    /// Add at native width (wrapping for integers)
    fn add_native(self, rhs: Self) -> Self;
}

macro_rules! impl_integer_element {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Element for $ty {
                const TYPE: ElementType = ElementType::$tag;

                #[inline(always)]
                fn mul_native(self, rhs: Self) -> Self {
                    self.wrapping_mul(rhs)
                }

                #[inline(always)]
                fn add_native(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Element for $ty {
                const TYPE: ElementType = ElementType::$tag;

                #[inline(always)]
                fn mul_native(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline(always)]
                fn add_native(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

impl_integer_element!(
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
);

impl_float_element!(f32 => Float32, f64 => Float64);
