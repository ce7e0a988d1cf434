//! Operator overloading for expression nodes and borrowed vectors.
//!
//! | Operator        | Result                                  |
//! |-----------------|-----------------------------------------|
//! | `a + b`         | [`Sum`]                                 |
//! | `a - b`         | [`Diff`]                                |
//! | `-a`            | [`Negate`]                              |
//! | `a * s`, `s * a`| [`Scaled`] (`s` is one of the scalars)  |
//! | `a / s`         | [`Quotient`] (panics on a tiny divisor) |
//! | `a / b`         | [`ElemDiv`]                             |
//! | `a * b`         | dot product (scalar)                    |
//! | `a ^ b`         | [`Cross`], a scalar for `&Vector2`      |
//!
//! Scalar operators are generated for a fixed list of types so that scaling by
//! anything that is not an arithmetic scalar does not compile.

use std::ops::{Add, BitXor, Div, Mul, Neg, Sub};

use num::complex::Complex;

use super::{
    cross2, dot, Cross, Diff, ElemDiv, ElemProd, Negate, Plus, Quotient, Scaled, Sum, Unit, VecExpr,
};
use crate::traits::Scalar;
use crate::vector::{Vector2, Vector3, VectorN};

/// Invokes `$mac` with every expression type, each preceded by its generics.
macro_rules! for_each_expr_type {
    ($mac:ident!($($head:tt)*)) => {
        $mac!($($head)*
            [L, R] Sum<L, R>,
            [L, R] Diff<L, R>,
            [L, R] ElemProd<L, R>,
            [L, R] ElemDiv<L, R>,
            [L, R] Cross<L, R>,
            [E] Plus<E>,
            [E] Negate<E>,
            [E, S] Scaled<E, S>,
            [E, S] Quotient<E, S>,
            [E: VecExpr] Unit<E>,
            ['a, T] &'a Vector2<T>,
            ['a, T] &'a Vector3<T>,
            ['a, T, const N: usize] &'a VectorN<T, N>,
        );
    };
}

macro_rules! impl_expr_ops {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*, Rhs> Add<Rhs> for $ty
            where
                Self: VecExpr,
                Rhs: VecExpr<Scalar = <Self as VecExpr>::Scalar>,
            {
                type Output = Sum<Self, Rhs>;

                #[inline(always)]
                fn add(self, rhs: Rhs) -> Self::Output {
                    Sum::new(self, rhs)
                }
            }

            impl<$($gen)*, Rhs> Sub<Rhs> for $ty
            where
                Self: VecExpr,
                Rhs: VecExpr<Scalar = <Self as VecExpr>::Scalar>,
            {
                type Output = Diff<Self, Rhs>;

                #[inline(always)]
                fn sub(self, rhs: Rhs) -> Self::Output {
                    Diff::new(self, rhs)
                }
            }

            impl<$($gen)*, Rhs> Mul<Rhs> for $ty
            where
                Self: VecExpr,
                Rhs: VecExpr<Scalar = <Self as VecExpr>::Scalar>,
            {
                type Output = <Self as VecExpr>::Scalar;

                #[inline(always)]
                fn mul(self, rhs: Rhs) -> Self::Output {
                    dot(self, rhs)
                }
            }

            impl<$($gen)*, Rhs> Div<Rhs> for $ty
            where
                Self: VecExpr,
                Rhs: VecExpr<Scalar = <Self as VecExpr>::Scalar>,
            {
                type Output = ElemDiv<Self, Rhs>;

                #[inline(always)]
                fn div(self, rhs: Rhs) -> Self::Output {
                    ElemDiv::new(self, rhs)
                }
            }

            impl<$($gen)*> Neg for $ty
            where
                Self: VecExpr,
            {
                type Output = Negate<Self>;

                #[inline(always)]
                fn neg(self) -> Self::Output {
                    Negate::new(self)
                }
            }
        )*
    };
}

macro_rules! impl_cross_op {
    ($([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*, Rhs> BitXor<Rhs> for $ty
            where
                Self: VecExpr,
                Rhs: VecExpr<Scalar = <Self as VecExpr>::Scalar>,
            {
                type Output = Cross<Self, Rhs>;

                #[inline(always)]
                fn bitxor(self, rhs: Rhs) -> Self::Output {
                    Cross::new(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_scalar_ops {
    ($s:ty; $([$($gen:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($gen)*> Mul<$s> for $ty
            where
                Self: VecExpr,
                <Self as VecExpr>::Scalar: Mul<$s, Output = <Self as VecExpr>::Scalar>,
            {
                type Output = Scaled<Self, $s>;

                #[inline(always)]
                fn mul(self, rhs: $s) -> Self::Output {
                    Scaled::new(self, rhs)
                }
            }

            impl<$($gen)*> Mul<$ty> for $s
            where
                $ty: VecExpr,
                <$ty as VecExpr>::Scalar: Mul<$s, Output = <$ty as VecExpr>::Scalar>,
            {
                type Output = Scaled<$ty, $s>;

                #[inline(always)]
                fn mul(self, rhs: $ty) -> Self::Output {
                    Scaled::new(rhs, self)
                }
            }

            impl<$($gen)*> Div<$s> for $ty
            where
                Self: VecExpr,
                <Self as VecExpr>::Scalar: Div<$s, Output = <Self as VecExpr>::Scalar>,
            {
                type Output = Quotient<Self, $s>;

                #[inline]
                fn div(self, rhs: $s) -> Self::Output {
                    Quotient::new(self, rhs)
                }
            }
        )*
    };
}

/// Unary plus is not an operator in Rust; this is its spelled form.
#[inline(always)]
pub fn plus<E: VecExpr>(expr: E) -> Plus<E> {
    Plus::new(expr)
}

for_each_expr_type!(impl_expr_ops!());

for_each_expr_type!(impl_scalar_ops!(f32;));
for_each_expr_type!(impl_scalar_ops!(f64;));
for_each_expr_type!(impl_scalar_ops!(i32;));
for_each_expr_type!(impl_scalar_ops!(i64;));
for_each_expr_type!(impl_scalar_ops!(Complex<f32>;));
for_each_expr_type!(impl_scalar_ops!(Complex<f64>;));

impl_cross_op!(
    [L, R] Sum<L, R>,
    [L, R] Diff<L, R>,
    [L, R] ElemProd<L, R>,
    [L, R] ElemDiv<L, R>,
    [L, R] Cross<L, R>,
    [E] Plus<E>,
    [E] Negate<E>,
    [E, S] Scaled<E, S>,
    [E, S] Quotient<E, S>,
    [E: VecExpr] Unit<E>,
    ['a, T] &'a Vector3<T>,
    ['a, T, const N: usize] &'a VectorN<T, N>,
);

/// `&F64x3` takes the operators of `&Vector3<f64>`, which scale by `f64` only.
#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
mod register_ops {
    use super::*;
    use crate::simd::avx2::f64x3::F64x3;

    impl_expr_ops!(['a] &'a F64x3);
    impl_scalar_ops!(f64; ['a] &'a F64x3);
    impl_cross_op!(['a] &'a F64x3);
}

/// The 2D cross product is the scalar `u0*v1 - u1*v0`.
impl<'a, T, Rhs> BitXor<Rhs> for &'a Vector2<T>
where
    Self: VecExpr<Scalar = T>,
    Rhs: VecExpr<Scalar = T>,
    T: Scalar,
{
    type Output = T;

    #[inline(always)]
    fn bitxor(self, rhs: Rhs) -> Self::Output {
        cross2(self, rhs)
    }
}
