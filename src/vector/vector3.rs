//! Three-component vector.

use std::ops::{BitXorAssign, Index, IndexMut};

use num::cast::AsPrimitive;
use num::complex::Complex;

use super::{impl_scalar_div_assign, impl_vector_common};
use crate::error::index_error;
use crate::expr::{Cross, VecExpr};
use crate::traits::Scalar;

/// Owning 3D vector.
///
/// ```rust
/// use vecly::Vector3;
///
/// let mut v = Vector3::new(1.0, 0.0, 1.0);
/// let w = Vector3::new(0.0, 1.0, 0.0);
///
/// v ^= &w;
/// assert_eq!(v, Vector3::new(-1.0, 0.0, 1.0));
/// assert_eq!(v.to_string(), "(-1,0,1)");
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vector3<T> {
    #[inline(always)]
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector with all three components set to `value`.
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// Evaluates a size-3 expression, one read per component.
    #[inline(always)]
    pub fn from_expr<E: VecExpr<Scalar = T>>(expr: E) -> Self {
        const { assert!(E::SIZE == 3, "expression size must be 3") };
        Self {
            x: expr.at(0),
            y: expr.at(1),
            z: expr.at(2),
        }
    }

    /// Re-assigns all components.
    #[inline(always)]
    pub fn load(&mut self, x: T, y: T, z: T) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Lazy cross product `self × rhs`.
    #[inline(always)]
    pub fn cross<R>(&self, rhs: R) -> Cross<&Self, R>
    where
        R: VecExpr<Scalar = T>,
    {
        Cross::new(self, rhs)
    }

    /// Accessor spelling of the `x` field, shared with the register-backed
    /// [`FastVector3`](crate::FastVector3).
    #[inline(always)]
    pub fn x(&self) -> T {
        self.x
    }

    #[inline(always)]
    pub fn y(&self) -> T {
        self.y
    }

    #[inline(always)]
    pub fn z(&self) -> T {
        self.z
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Applies `f` to each component.
    #[inline]
    pub fn map<U: Scalar, F: Fn(T) -> U>(self, f: F) -> Vector3<U> {
        Vector3::new(f(self.x), f(self.y), f(self.z))
    }

    /// Element-wise conversion to another primitive scalar type, with the
    /// semantics of an `as` cast (narrowing truncates, floats saturate).
    #[inline]
    pub fn convert<U>(self) -> Vector3<U>
    where
        U: Scalar,
        T: AsPrimitive<U>,
    {
        self.map(|c| c.as_())
    }
}

impl_vector_common!([T] Vector3<T>, 3);
impl_scalar_div_assign!(Vector3; f32, f64, i32, i64, Complex<f32>, Complex<f64>);

impl<'a, T: Scalar> VecExpr for &'a Vector3<T> {
    type Scalar = T;

    const SIZE: usize = 3;

    #[inline(always)]
    fn at(&self, i: usize) -> T {
        (**self)[i]
    }
}

impl<T> Index<usize> for Vector3<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("{}", index_error(i, 3)),
        }
    }
}

impl<T> IndexMut<usize> for Vector3<T> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("{}", index_error(i, 3)),
        }
    }
}

/// In-place cross product, `self = self × rhs`.
impl<T, E> BitXorAssign<E> for Vector3<T>
where
    T: Scalar,
    E: VecExpr<Scalar = T>,
{
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: E) {
        let old = *self;
        *self = Self::from_expr(Cross::new(&old, rhs));
    }
}

impl<T> From<[T; 3]> for Vector3<T> {
    #[inline(always)]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T> From<Vector3<T>> for [T; 3] {
    #[inline(always)]
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}
