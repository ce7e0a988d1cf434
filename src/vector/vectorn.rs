//! N-component vector with array storage.

use std::ops::{Index, IndexMut};

use num::cast::AsPrimitive;
use num::complex::Complex;

use super::{impl_scalar_div_assign, impl_vector_common};
use crate::error::index_error;
use crate::expr::{Cross, VecExpr};
use crate::traits::Scalar;

/// Owning vector of `N` components.
///
/// Shares the full operator set of [`Vector2`](crate::Vector2) and
/// [`Vector3`](crate::Vector3). Dot products of sizes 2 and 3 take the same
/// unrolled path as the named types; `cross` is accepted for `N == 3` only.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VectorN<T, const N: usize> {
    data: [T; N],
}

impl<T: Scalar, const N: usize> VectorN<T, N> {
    #[inline(always)]
    pub fn new(data: [T; N]) -> Self {
        Self { data }
    }

    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }

    /// Evaluates a size-`N` expression, one read per component.
    #[inline(always)]
    pub fn from_expr<E: VecExpr<Scalar = T>>(expr: E) -> Self {
        const { assert!(E::SIZE == N, "expression size must match the vector size") };
        Self {
            data: std::array::from_fn(|i| expr.at(i)),
        }
    }

    #[inline(always)]
    pub fn load(&mut self, data: [T; N]) {
        self.data = data;
    }

    /// Lazy cross product. Fails to build unless `N == 3`.
    #[inline(always)]
    pub fn cross<R>(&self, rhs: R) -> Cross<&Self, R>
    where
        R: VecExpr<Scalar = T>,
    {
        Cross::new(self, rhs)
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline(always)]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.data
    }

    #[inline]
    pub fn map<U: Scalar, F: Fn(T) -> U>(self, f: F) -> VectorN<U, N> {
        VectorN {
            data: self.data.map(f),
        }
    }

    /// Element-wise conversion to another primitive scalar type, with the
    /// semantics of an `as` cast (narrowing truncates, floats saturate).
    #[inline]
    pub fn convert<U>(self) -> VectorN<U, N>
    where
        U: Scalar,
        T: AsPrimitive<U>,
    {
        self.map(|c| c.as_())
    }
}

impl_vector_common!([T, const N: usize] VectorN<T, N>, N);
impl_scalar_div_assign!(array; f32, f64, i32, i64, Complex<f32>, Complex<f64>);

impl<'a, T: Scalar, const N: usize> VecExpr for &'a VectorN<T, N> {
    type Scalar = T;

    const SIZE: usize = N;

    #[inline(always)]
    fn at(&self, i: usize) -> T {
        (**self)[i]
    }
}

impl<T, const N: usize> Index<usize> for VectorN<T, N> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        match self.data.get(i) {
            Some(value) => value,
            None => panic!("{}", index_error(i, N)),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for VectorN<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.data.get_mut(i) {
            Some(value) => value,
            None => panic!("{}", index_error(i, N)),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for VectorN<T, N> {
    #[inline(always)]
    fn from(data: [T; N]) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<VectorN<T, N>> for [T; N] {
    #[inline(always)]
    fn from(v: VectorN<T, N>) -> Self {
        v.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_operators() {
        let u = VectorN::from([1.0, 2.0, 3.0, 4.0, 5.0]);
        let v = VectorN::<f64, 5>::splat(1.0);
        let w = VectorN::<f64, 5>::from_expr(2.0 * &u - &v);
        assert_eq!(w.to_array(), [1.0, 3.0, 5.0, 7.0, 9.0]);
        assert_eq!(&u * &v, 15.0);
        assert_eq!(w.sum(), 25.0);
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = VectorN::from([2.0, 4.0, 8.0, 16.0]);
        let u = VectorN::from([1.0, 1.0, 1.0, 1.0]);
        v += &u;
        v -= 2.0 * &u;
        v *= 2.0;
        v /= 2.0;
        assert_eq!(v.to_array(), [1.0, 3.0, 7.0, 15.0]);

        v /= &VectorN::from([1.0, 3.0, 7.0, 15.0]);
        assert_eq!(v, VectorN::<f64, 4>::splat(1.0));
    }

    #[test]
    fn test_cross_in_three_dimensions() {
        let u = VectorN::from([1.0, 0.0, 0.0]);
        let v = VectorN::from([0.0, 1.0, 0.0]);
        assert_eq!(
            VectorN::<f64, 3>::from_expr(u.cross(&v)).to_array(),
            [0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_convert_to_narrower_types() {
        let v = VectorN::from([1.5f64, -0.25, 3e40, 7.0]);
        let single: VectorN<f32, 4> = v.convert();
        assert_eq!(single.to_array(), [1.5, -0.25, f32::INFINITY, 7.0]);

        let whole: VectorN<i64, 4> = v.convert();
        assert_eq!(whole.to_array(), [1, 0, i64::MAX, 7]);
    }

    #[test]
    fn test_display_and_slice_access() {
        let mut v = VectorN::from([1, 2, 3, 4]);
        v.as_mut_slice()[3] = 9;
        assert_eq!(v.as_slice(), &[1, 2, 3, 9]);
        assert_eq!(v.iter().copied().max(), Some(9));
        assert_eq!(v.to_string(), "(1,2,3,9)");
    }
}
