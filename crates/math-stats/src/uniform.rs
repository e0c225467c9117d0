//! Uniform integer sampler
//!
//! Two kernel paths, chosen by element width:
//! - **Direct**: 16, 32 and 64-bit types are sampled at their own width
//! - **Widened**: 8-bit types widen their bounds to `i32`, sample there, and
//!   narrow every draw back with a checked conversion
//!
//! A generic call reaches its kernel through a `match` on the element tag and
//! a checked reinterpretation of the output buffer as the tagged primitive.

use crate::SAMPLING_TYPES;
use math_core::{Element, ElementSet, ElementType, Error, Result};
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::marker::PhantomData;
use tracing::{debug, instrument};

/// Which kernel path an element type samples through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingPath {
    /// Sampled at the element's own width
    Direct,
    /// Sampled in a wider type and narrowed per draw
    Widened { via: ElementType },
}

impl SamplingPath {
    /// Resolve the path for a tag, or `None` when no kernel exists
    pub const fn resolve(element: ElementType) -> Option<Self> {
        match element {
            ElementType::Int8 | ElementType::UInt8 => Some(Self::Widened {
                via: ElementType::Int32,
            }),
            ElementType::Int16
            | ElementType::UInt16
            | ElementType::Int32
            | ElementType::UInt32
            | ElementType::Int64
            | ElementType::UInt64 => Some(Self::Direct),
            ElementType::Float32 | ElementType::Float64 => None,
        }
    }
}

/// Width-specific sampling kernel
pub trait UniformKernel: Element {
    /// Type the distribution is evaluated in
    type Wide: SampleUniform + Copy + PartialOrd + Debug;

    fn widen(self) -> Self::Wide;

    /// Convert a draw back to storage width
    fn narrow(wide: Self::Wide) -> Result<Self>;
}

macro_rules! impl_widened_kernel {
    ($($ty:ty),*) => {
        $(
            impl UniformKernel for $ty {
                type Wide = i32;

                #[inline]
                fn widen(self) -> i32 {
                    i32::from(self)
                }

                #[inline]
                fn narrow(wide: i32) -> Result<Self> {
                    <$ty>::try_from(wide).map_err(|_| {
                        Error::Cast(format!(
                            "sample {wide} outside {} range",
                            <$ty as Element>::TYPE
                        ))
                    })
                }
            }
        )*
    };
}

macro_rules! impl_direct_kernel {
    ($($ty:ty),*) => {
        $(
            impl UniformKernel for $ty {
                type Wide = $ty;

                #[inline(always)]
                fn widen(self) -> $ty {
                    self
                }

                #[inline(always)]
                fn narrow(wide: $ty) -> Result<Self> {
                    Ok(wide)
                }
            }
        )*
    };
}

impl_widened_kernel!(i8, u8);
impl_direct_kernel!(i16, u16, i32, u32, i64, u64);

/// Fill `dst` with independent draws from `[min, max]`; requires `min <= max`
fn fill_uniform<K, R>(dst: &mut [K], min: K, max: K, rng: &mut R) -> Result<()>
where
    K: UniformKernel,
    R: Rng + ?Sized,
{
    let dist = Uniform::new_inclusive(min.widen(), max.widen());
    for slot in dst.iter_mut() {
        *slot = K::narrow(dist.sample(rng))?;
    }
    Ok(())
}

/// Run the `K` kernel on buffers typed as `T`, where `T::TYPE == K::TYPE`
fn fill_as<T, K, R>(dst: &mut [T], min: T, max: T, rng: &mut R) -> Result<()>
where
    T: Element,
    K: UniformKernel,
    R: Rng + ?Sized,
{
    debug_assert_eq!(T::TYPE, K::TYPE);
    let dst: &mut [K] = bytemuck::try_cast_slice_mut(dst)?;
    let min: K = bytemuck::try_cast(min)?;
    let max: K = bytemuck::try_cast(max)?;
    fill_uniform(dst, min, max, rng)
}

fn dispatch<T, R>(dst: &mut [T], min: T, max: T, rng: &mut R) -> Result<()>
where
    T: Element,
    R: Rng + ?Sized,
{
    match T::TYPE {
        ElementType::Int8 => fill_as::<T, i8, R>(dst, min, max, rng),
        ElementType::UInt8 => fill_as::<T, u8, R>(dst, min, max, rng),
        ElementType::Int16 => fill_as::<T, i16, R>(dst, min, max, rng),
        ElementType::UInt16 => fill_as::<T, u16, R>(dst, min, max, rng),
        ElementType::Int32 => fill_as::<T, i32, R>(dst, min, max, rng),
        ElementType::UInt32 => fill_as::<T, u32, R>(dst, min, max, rng),
        ElementType::Int64 => fill_as::<T, i64, R>(dst, min, max, rng),
        ElementType::UInt64 => fill_as::<T, u64, R>(dst, min, max, rng),
        ElementType::Float32 | ElementType::Float64 => {
            Err(Error::unsupported(T::TYPE, "uniform sampling"))
        }
    }
}

/// Uniform sampling service for one element type
///
/// Holds no engine: every call creates one and drops it before returning.
#[derive(Debug, Clone)]
pub struct StatsService<T> {
    supported: ElementSet,
    seed: Option<u64>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Element> Default for StatsService<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> StatsService<T> {
    pub fn new() -> Self {
        Self::with_supported(SAMPLING_TYPES)
    }

    /// Restrict (or widen) the set of element types this service accepts
    pub fn with_supported(supported: ElementSet) -> Self {
        Self {
            supported,
            seed: None,
            _marker: PhantomData,
        }
    }

    /// Seed every call's engine from `seed` instead of OS entropy
    ///
    /// Each call then produces the same sequence for the same arguments.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn element_type(&self) -> ElementType {
        T::TYPE
    }

    /// Kernel path for `T`, or `UnsupportedType`
    pub fn sampling_path(&self) -> Result<SamplingPath> {
        if !self.supported.supports(T::TYPE) {
            return Err(Error::unsupported(T::TYPE, "uniform sampling"));
        }
        SamplingPath::resolve(T::TYPE)
            .ok_or_else(|| Error::unsupported(T::TYPE, "uniform sampling"))
    }

    fn engine(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Draw `count` independent values uniformly from `[min, max]`
    #[instrument(level = "debug", skip(self), fields(element = %T::TYPE))]
    pub fn sample_uniform(&self, count: usize, min: T, max: T) -> Result<Vec<T>> {
        let mut samples = vec![T::zero(); count];
        self.sample_uniform_into(&mut samples, min, max)?;
        Ok(samples)
    }

    /// Fill a caller-owned buffer with uniform draws from `[min, max]`
    pub fn sample_uniform_into(&self, dst: &mut [T], min: T, max: T) -> Result<()> {
        let mut rng = self.engine();
        self.sample_uniform_with(&mut rng, dst, min, max)
    }

    /// Fill `dst` using a caller-supplied engine
    pub fn sample_uniform_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        dst: &mut [T],
        min: T,
        max: T,
    ) -> Result<()> {
        let path = self.sampling_path()?;
        if min > max {
            return Err(Error::invalid_bounds(min, max));
        }
        debug!(?path, count = dst.len(), "Sampling uniform integers");
        dispatch(dst, min, max, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(
            StatsService::<i8>::new().sampling_path().unwrap(),
            SamplingPath::Widened {
                via: ElementType::Int32
            }
        );
        assert_eq!(
            StatsService::<u8>::new().sampling_path().unwrap(),
            SamplingPath::Widened {
                via: ElementType::Int32
            }
        );
        assert_eq!(
            StatsService::<u16>::new().sampling_path().unwrap(),
            SamplingPath::Direct
        );
        assert_eq!(
            StatsService::<i64>::new().sampling_path().unwrap(),
            SamplingPath::Direct
        );
        assert!(StatsService::<f32>::new().sampling_path().is_err());
    }

    #[test]
    fn test_narrow_checks_range() {
        assert_eq!(<u8 as UniformKernel>::narrow(255).unwrap(), 255);
        assert!(<u8 as UniformKernel>::narrow(256).is_err());
        assert!(<u8 as UniformKernel>::narrow(-1).is_err());
        assert_eq!(<i8 as UniformKernel>::narrow(-128).unwrap(), -128);
        assert!(<i8 as UniformKernel>::narrow(128).is_err());
        assert_eq!(200u8.widen(), 200i32);
        assert_eq!((-5i8).widen(), -5i32);
    }

    #[test]
    fn test_float_unsupported() {
        let err = StatsService::<f64>::new()
            .sample_uniform(10, 0.0, 1.0)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedType {
                element: ElementType::Float64,
                ..
            }
        ));
    }

    #[test]
    fn test_restricted_set() {
        let stats = StatsService::<u64>::with_supported(ElementSet::INT32);
        assert!(matches!(
            stats.sample_uniform(1, 0, 1),
            Err(Error::UnsupportedType { .. })
        ));
    }

    #[test]
    fn test_inverted_bounds() {
        let err = StatsService::<i32>::new()
            .sample_uniform(5, 10, -10)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidParameter(_)));
    }

    #[test]
    fn test_zero_count() {
        assert!(StatsService::<u32>::new()
            .sample_uniform(0, 0, 10)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_degenerate_range() {
        let samples = StatsService::<i16>::new().sample_uniform(50, -7, -7).unwrap();
        assert!(samples.iter().all(|&v| v == -7));
    }

    #[test]
    fn test_injected_engine() {
        let stats = StatsService::<u8>::new();
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        stats
            .sample_uniform_with(&mut StdRng::seed_from_u64(7), &mut a, 0, 255)
            .unwrap();
        stats
            .sample_uniform_with(&mut StdRng::seed_from_u64(7), &mut b, 0, 255)
            .unwrap();
        assert_eq!(a, b);
    }
}
