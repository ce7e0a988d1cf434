//! Two-component vector.

use std::ops::{Index, IndexMut};

use num::cast::AsPrimitive;
use num::complex::Complex;

use super::{impl_scalar_div_assign, impl_vector_common};
use crate::error::index_error;
use crate::expr::{cross2, VecExpr};
use crate::traits::Scalar;

/// Owning 2D vector.
///
/// The cross product of two 2D vectors is the scalar `x0*y1 - y0*x1`, both
/// through [`Vector2::cross`] and the `^` operator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vector2<T> {
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self::new(value, value)
    }

    /// Evaluates a size-2 expression, one read per component.
    #[inline(always)]
    pub fn from_expr<E: VecExpr<Scalar = T>>(expr: E) -> Self {
        const { assert!(E::SIZE == 2, "expression size must be 2") };
        Self {
            x: expr.at(0),
            y: expr.at(1),
        }
    }

    #[inline(always)]
    pub fn load(&mut self, x: T, y: T) {
        self.x = x;
        self.y = y;
    }

    /// Scalar cross product `self.x * rhs.y - self.y * rhs.x`.
    #[inline(always)]
    pub fn cross<R>(&self, rhs: R) -> T
    where
        R: VecExpr<Scalar = T>,
    {
        cross2(self, rhs)
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn map<U: Scalar, F: Fn(T) -> U>(self, f: F) -> Vector2<U> {
        Vector2::new(f(self.x), f(self.y))
    }

    /// Element-wise conversion to another primitive scalar type, with the
    /// semantics of an `as` cast (narrowing truncates, floats saturate).
    #[inline]
    pub fn convert<U>(self) -> Vector2<U>
    where
        U: Scalar,
        T: AsPrimitive<U>,
    {
        self.map(|c| c.as_())
    }
}

impl_vector_common!([T] Vector2<T>, 2);
impl_scalar_div_assign!(Vector2; f32, f64, i32, i64, Complex<f32>, Complex<f64>);

impl<'a, T: Scalar> VecExpr for &'a Vector2<T> {
    type Scalar = T;

    const SIZE: usize = 2;

    #[inline(always)]
    fn at(&self, i: usize) -> T {
        (**self)[i]
    }
}

impl<T> Index<usize> for Vector2<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("{}", index_error(i, 2)),
        }
    }
}

impl<T> IndexMut<usize> for Vector2<T> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("{}", index_error(i, 2)),
        }
    }
}

impl<T> From<[T; 2]> for Vector2<T> {
    #[inline(always)]
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<Vector2<T>> for [T; 2] {
    #[inline(always)]
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}
