//! Owned vectors and zero-copy row/column views
//!
//! A [`RowView`] or [`ColView`] reinterprets a borrowed buffer as a 1×N or
//! N×1 matrix. Views never copy and never outlive the borrow they were built
//! from, so a service cannot retain a caller's buffer past the call.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::primitives::ComputePrimitives;
use serde::{Deserialize, Serialize};

/// Ordered, fixed-length sequence of components owned by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector<T> {
    components: Vec<T>,
}

impl<T: Element> Vector<T> {
    pub fn new(components: Vec<T>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[T] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Borrow the components as a 1×N row
    pub fn as_row(&self) -> RowView<'_, T> {
        RowView::new(&self.components)
    }

    /// Borrow the components as an N×1 column
    pub fn as_col(&self) -> ColView<'_, T> {
        ColView::new(&self.components)
    }

    pub fn into_components(self) -> Vec<T> {
        self.components
    }
}

impl<T: Element> From<Vec<T>> for Vector<T> {
    fn from(components: Vec<T>) -> Self {
        Self::new(components)
    }
}

impl<T: Element> From<&[T]> for Vector<T> {
    fn from(components: &[T]) -> Self {
        Self::new(components.to_vec())
    }
}

impl<T: Element> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Element> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &self.components
    }
}

fn cast_bytes<T: Element>(bytes: &[u8]) -> Result<&[T]> {
    bytemuck::try_cast_slice(bytes).map_err(|err| {
        log::trace!(
            "Cannot view {} bytes as {}: {:?}",
            bytes.len(),
            T::TYPE,
            err
        );
        Error::from(err)
    })
}

/// Borrowed 1×N row vector
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a, T> {
    data: &'a [T],
}

impl<'a, T: Element> RowView<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    /// View a raw byte buffer as a row of `T`
    ///
    /// Fails when the byte length is not a multiple of `size_of::<T>()` or
    /// the buffer is misaligned for `T`.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        cast_bytes(bytes).map(Self::new)
    }

    pub fn n_cols(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn transpose(self) -> ColView<'a, T> {
        ColView::new(self.data)
    }

    /// Multiply this 1×N row by an N×1 column, yielding the 1×1 result as a
    /// scalar
    pub fn mul_col<P: ComputePrimitives<T>>(
        &self,
        col: &ColView<'_, T>,
        backend: &P,
    ) -> Result<T> {
        if self.n_cols() != col.n_rows() {
            return Err(Error::length_mismatch(
                self.n_cols(),
                col.n_rows(),
                "row-by-column product",
            ));
        }
        Ok(backend.dot_product(self.data, col.as_slice()))
    }
}

/// Borrowed N×1 column vector
#[derive(Debug, Clone, Copy)]
pub struct ColView<'a, T> {
    data: &'a [T],
}

impl<'a, T: Element> ColView<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    /// View a raw byte buffer as a column of `T`
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        cast_bytes(bytes).map(Self::new)
    }

    pub fn n_rows(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    pub fn transpose(self) -> RowView<'a, T> {
        RowView::new(self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::ScalarBackend;

    #[test]
    fn test_views_share_storage() {
        let v = Vector::new(vec![1i32, 2, 3]);
        let row = v.as_row();
        let col = v.as_col();
        assert_eq!(row.as_slice().as_ptr(), v.components().as_ptr());
        assert_eq!(col.as_slice().as_ptr(), v.components().as_ptr());
        assert_eq!(row.n_cols(), 3);
        assert_eq!(col.n_rows(), 3);
    }

    #[test]
    fn test_row_by_column() {
        let x = Vector::new(vec![1i32, 2, 3]);
        let y = Vector::new(vec![4i32, 5, 6]);
        let backend = ScalarBackend::new();
        assert_eq!(x.as_row().mul_col(&y.as_col(), &backend).unwrap(), 32);
    }

    #[test]
    fn test_row_by_column_dimension_mismatch() {
        let x = Vector::new(vec![1i32, 2, 3]);
        let y = Vector::new(vec![4i32, 5]);
        let err = x
            .as_row()
            .mul_col(&y.as_col(), &ScalarBackend::new())
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ArgumentLengthMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_from_bytes() {
        let values = [7i32, -3, 11];
        let bytes: &[u8] = bytemuck::cast_slice(&values);
        let row = RowView::<i32>::from_bytes(bytes).unwrap();
        assert_eq!(row.as_slice(), &values);
        assert_eq!(row.transpose().n_rows(), 3);

        assert!(matches!(
            ColView::<i32>::from_bytes(&bytes[..5]),
            Err(Error::Cast(_))
        ));
    }

    #[test]
    fn test_vector_conversions() {
        let v: Vector<u8> = (1..=4).collect();
        assert_eq!(v.len(), 4);
        assert!(!v.is_empty());
        assert_eq!(Vector::from(&[1u8, 2, 3, 4][..]), v);
        assert_eq!(v.into_components(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_vector_serde_transparent() {
        let v = Vector::new(vec![1i64, -2]);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1,-2]");
    }
}
