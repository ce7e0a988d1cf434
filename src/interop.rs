//! Conversions between the fixed-size vectors and `ndarray`.
//!
//! ```rust
//! use ndarray::array;
//! use vecly::interop::ArrayInterop;
//! use vecly::Vector3;
//!
//! let v = Vector3::from_array_view(array![1.0, 2.0, 3.0].view()).unwrap();
//! assert_eq!(v.to_array1(), array![1.0, 2.0, 3.0]);
//! assert!(Vector3::<f64>::from_array_view(array![1.0, 2.0].view()).is_err());
//! ```

use ndarray::{Array1, ArrayView1};

use crate::error::{dimension_error, Result};
use crate::expr::VecExpr;
use crate::traits::Scalar;
use crate::vector::{Vector2, Vector3, VectorN};

/// Copies a vector into, or out of, a one-dimensional `ndarray`.
pub trait ArrayInterop: Sized {
    type Elem;

    /// Owned copy of the components.
    fn to_array1(&self) -> Array1<Self::Elem>;

    /// Builds a vector from a view of exactly the right length.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the view length differs from the vector
    /// size. Strided views are accepted.
    fn from_array_view(view: ArrayView1<'_, Self::Elem>) -> Result<Self>;
}

#[inline]
fn check_view<T>(view: &ArrayView1<'_, T>, expected: usize) -> Result<()> {
    if view.len() != expected {
        return Err(dimension_error(expected, view.len()));
    }
    Ok(())
}

#[inline]
fn collect_expr<E: VecExpr>(expr: E) -> Array1<E::Scalar> {
    Array1::from_shape_fn(E::SIZE, |i| expr.at(i))
}

impl<T: Scalar> ArrayInterop for Vector2<T> {
    type Elem = T;

    fn to_array1(&self) -> Array1<T> {
        collect_expr(self)
    }

    fn from_array_view(view: ArrayView1<'_, T>) -> Result<Self> {
        check_view(&view, 2)?;
        Ok(Vector2::new(view[0], view[1]))
    }
}

impl<T: Scalar> ArrayInterop for Vector3<T> {
    type Elem = T;

    fn to_array1(&self) -> Array1<T> {
        collect_expr(self)
    }

    fn from_array_view(view: ArrayView1<'_, T>) -> Result<Self> {
        check_view(&view, 3)?;
        Ok(Vector3::new(view[0], view[1], view[2]))
    }
}

impl<T: Scalar, const N: usize> ArrayInterop for VectorN<T, N> {
    type Elem = T;

    fn to_array1(&self) -> Array1<T> {
        Array1::from(self.as_slice().to_vec())
    }

    fn from_array_view(view: ArrayView1<'_, T>) -> Result<Self> {
        check_view(&view, N)?;
        Ok(VectorN::new(std::array::from_fn(|i| view[i])))
    }
}

#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
impl ArrayInterop for crate::simd::avx2::f64x3::F64x3 {
    type Elem = f64;

    fn to_array1(&self) -> Array1<f64> {
        Array1::from(self.to_array().to_vec())
    }

    fn from_array_view(view: ArrayView1<'_, f64>) -> Result<Self> {
        check_view(&view, 3)?;
        Ok(Self::new(view[0], view[1], view[2]))
    }
}

impl<T: Scalar, const N: usize> VectorN<T, N> {
    /// Zero-copy `ndarray` view of the components.
    #[inline]
    pub fn as_array_view(&self) -> ArrayView1<'_, T> {
        ArrayView1::from(self.as_slice())
    }
}

/// Evaluates any expression into an owned `ndarray`.
#[inline]
pub fn expr_to_array1<E: VecExpr>(expr: E) -> Array1<E::Scalar> {
    collect_expr(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VectorError;
    use ndarray::{array, s};

    #[test]
    fn test_vector3_round_trip() {
        let v = Vector3::new(1.5, -2.0, 0.25);
        let a = v.to_array1();
        assert_eq!(a, array![1.5, -2.0, 0.25]);
        assert_eq!(Vector3::from_array_view(a.view()), Ok(v));
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = array![1.0f32, 2.0, 3.0, 4.0];
        assert_eq!(
            Vector2::<f32>::from_array_view(a.view()),
            Err(VectorError::DimensionMismatch {
                expected: 2,
                found: 4
            })
        );
        assert!(VectorN::<f32, 5>::from_array_view(a.view()).is_err());
        assert!(VectorN::<f32, 4>::from_array_view(a.view()).is_ok());
    }

    #[test]
    fn test_strided_view() {
        let a = array![0, 1, 2, 3, 4, 5];
        let v = Vector3::<i64>::from_array_view(a.slice(s![..;2])).unwrap();
        assert_eq!(v, Vector3::new(0, 2, 4));
    }

    #[test]
    fn test_vectorn_view_matches_ndarray_dot() {
        let u = VectorN::new([1.0, 2.0, 3.0, 4.0, 5.0]);
        let v = VectorN::new([5.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!(u.as_array_view().dot(&v.as_array_view()), u.dot(&v));
    }

    #[test]
    fn test_expr_to_array1() {
        let u = Vector3::new(1.0, 2.0, 3.0);
        let w = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(expr_to_array1(&u - &w), array![0.0, 1.0, 2.0]);
    }
}
