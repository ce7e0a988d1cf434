//! Lazy vector expressions.
//!
//! Arithmetic on borrowed vectors does not compute anything. `&u + &v` builds a
//! [`Sum`] node holding the two references, `(&u + &v) * 2.0` wraps it in a
//! [`Scaled`] node, and so on. The tree is a plain `Copy` struct whose leaves
//! are `&Vector*` borrows, so the borrow checker guarantees that no expression
//! outlives the vectors it reads.
//!
//! Evaluation happens when the tree is indexed through [`VecExpr::at`] or
//! materialized into a destination ([`FromExpr`], compound assignment). Each
//! destination component is then computed once, in a single pass, with no
//! intermediate vectors.
//!
//! # Sizes
//!
//! Every expression has a size known at compile time ([`VecExpr::SIZE`]).
//! Binary nodes assert that both operands agree in a `const` context, so a
//! mismatch such as `&vector2 + &vector3` fails the build instead of panicking
//! at run time. The same holds for the cross product, which only exists in 3D
//! ([`Cross`]) and in 2D ([`cross2`], scalar valued).
//!
//! # Example
//!
//! ```rust
//! use vecly::{dot, norm, Vector3};
//!
//! let u = Vector3::new(1.0, 2.0, 3.0);
//! let v = Vector3::new(1.0, 1.0, 1.0);
//! let w = Vector3::new(0.0, 1.0, 0.0);
//!
//! // One fused loop, no temporaries.
//! let r = Vector3::from_expr(2.0 * &u + (&v ^ &w) - &v);
//! assert_eq!(r, Vector3::new(0.0, 3.0, 6.0));
//!
//! assert_eq!(dot(&u, &v), 6.0);
//! assert_eq!(norm(&Vector3::new(3.0, 4.0, 0.0)), 5.0);
//! ```

mod nodes;
mod ops;

pub use nodes::{Cross, Diff, ElemDiv, ElemProd, Negate, Plus, Quotient, Scaled, Sum, Unit};
pub use ops::plus;

use std::ops::{BitXor, Div};

use num::{Float, Zero};

use crate::error::{index_error, zero_norm_error, Result};
use crate::traits::{Real, Scalar};

/// A read-only, fixed-size view producing one scalar per component.
///
/// Implemented by every node of this module and by borrowed concrete vectors.
pub trait VecExpr: Copy {
    /// Element type produced by the expression.
    type Scalar: Scalar;

    /// Number of components.
    const SIZE: usize;

    /// Computes component `i`.
    ///
    /// Nothing is cached: each call recomputes the value from the operands.
    ///
    /// # Panics
    ///
    /// Panics if `i >= Self::SIZE`.
    fn at(&self, i: usize) -> Self::Scalar;

    /// Number of components, as a method.
    #[inline(always)]
    fn size(&self) -> usize {
        Self::SIZE
    }

    /// Checked component access.
    #[inline]
    fn get(&self, i: usize) -> Result<Self::Scalar> {
        if i < Self::SIZE {
            Ok(self.at(i))
        } else {
            Err(index_error(i, Self::SIZE))
        }
    }

    /// The whole expression as one AVX2 register, when every leaf is an
    /// [`F64x3`](crate::simd::avx2::f64x3::F64x3). Lane 3 holds `+0.0`.
    #[doc(hidden)]
    #[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
    #[inline(always)]
    fn fused_register(&self) -> Option<crate::simd::avx2::__m256d> {
        None
    }

    /// Materializes the expression into a concrete vector.
    #[inline(always)]
    fn eval<V: FromExpr<Self::Scalar>>(self) -> V {
        V::from_expr(self)
    }

    /// Division by a scalar that reports a negligible divisor instead of panicking.
    #[inline]
    fn checked_div<S>(self, divisor: S) -> Result<Quotient<Self, S>>
    where
        S: Scalar,
        Self::Scalar: Div<S, Output = Self::Scalar>,
    {
        Quotient::try_new(self, divisor)
    }

    /// Element-wise (Hadamard) product.
    #[inline(always)]
    fn elem_prod<R>(self, rhs: R) -> ElemProd<Self, R>
    where
        R: VecExpr<Scalar = Self::Scalar>,
    {
        ElemProd::new(self, rhs)
    }

    /// Element-wise division.
    #[inline(always)]
    fn elem_div<R>(self, rhs: R) -> ElemDiv<Self, R>
    where
        R: VecExpr<Scalar = Self::Scalar>,
    {
        ElemDiv::new(self, rhs)
    }
}

/// Destination of an expression.
pub trait FromExpr<T: Scalar>: Sized {
    /// Evaluates every component of `expr` once and stores the results.
    fn from_expr<E: VecExpr<Scalar = T>>(expr: E) -> Self;
}

/// Size of a binary node, failing const evaluation when the operands differ.
pub(crate) const fn same_size(lhs: usize, rhs: usize) -> usize {
    assert!(
        lhs == rhs,
        "operands of a vector expression must have the same size"
    );
    lhs
}

/// Component `i` of the 3D cross product, with no size check.
#[inline(always)]
pub(crate) fn cross_at<L, R>(lhs: &L, rhs: &R, i: usize) -> L::Scalar
where
    L: VecExpr,
    R: VecExpr<Scalar = L::Scalar>,
{
    match i {
        0 => lhs.at(1) * rhs.at(2) - lhs.at(2) * rhs.at(1),
        1 => lhs.at(2) * rhs.at(0) - lhs.at(0) * rhs.at(2),
        2 => lhs.at(0) * rhs.at(1) - lhs.at(1) * rhs.at(0),
        _ => panic!("{}", index_error(i, 3)),
    }
}

#[inline(always)]
fn cross2_unchecked<L, R>(lhs: &L, rhs: &R) -> L::Scalar
where
    L: VecExpr,
    R: VecExpr<Scalar = L::Scalar>,
{
    lhs.at(0) * rhs.at(1) - lhs.at(1) * rhs.at(0)
}

/// Dot product `Σ lhs[i] * rhs[i]`.
///
/// Sizes 2 and 3 are unrolled; other sizes accumulate in a loop.
#[inline(always)]
pub fn dot<L, R>(lhs: L, rhs: R) -> L::Scalar
where
    L: VecExpr,
    R: VecExpr<Scalar = L::Scalar>,
{
    const {
        assert!(
            L::SIZE == R::SIZE,
            "dot product operands must have the same size"
        )
    };

    match L::SIZE {
        2 => lhs.at(0) * rhs.at(0) + lhs.at(1) * rhs.at(1),
        3 => lhs.at(0) * rhs.at(0) + lhs.at(1) * rhs.at(1) + lhs.at(2) * rhs.at(2),
        _ => (0..L::SIZE).fold(L::Scalar::zero(), |acc, i| acc + lhs.at(i) * rhs.at(i)),
    }
}

/// Squared Euclidean norm, `dot(e, e)`.
#[inline(always)]
pub fn norm2<E: VecExpr>(expr: E) -> E::Scalar {
    dot(expr, expr)
}

/// Euclidean norm.
#[inline(always)]
pub fn norm<E>(expr: E) -> E::Scalar
where
    E: VecExpr,
    E::Scalar: Real,
{
    norm2(expr).sqrt()
}

/// Sum of all components.
#[inline]
pub fn sum<E: VecExpr>(expr: E) -> E::Scalar {
    (0..E::SIZE).fold(E::Scalar::zero(), |acc, i| acc + expr.at(i))
}

/// Cross product through the `^` operator.
///
/// 3D operands give a lazy [`Cross`] node, `Vector2` operands give the scalar
/// `u0*v1 - u1*v0`.
#[inline(always)]
pub fn cross<L, R>(lhs: L, rhs: R) -> L::Output
where
    L: BitXor<R>,
{
    lhs ^ rhs
}

/// Scalar 2D cross product `u0*v1 - u1*v0` of any two size-2 expressions.
#[inline(always)]
pub fn cross2<L, R>(lhs: L, rhs: R) -> L::Scalar
where
    L: VecExpr,
    R: VecExpr<Scalar = L::Scalar>,
{
    const {
        assert!(
            L::SIZE == 2 && R::SIZE == 2,
            "the scalar cross product is only defined for 2D operands"
        )
    };

    cross2_unchecked(&lhs, &rhs)
}

/// Angle between two expressions, in `[0, π]`.
///
/// Computed as `atan2(|u × v|, u · v)`, which keeps full precision near 0 and
/// π where `acos` saturates. In dimensions other than 2 and 3 the cross
/// product norm comes from `|u|²|v|² - (u · v)²`.
///
/// # Errors
///
/// Returns [`VectorError::ZeroNorm`](crate::VectorError::ZeroNorm) if either
/// operand is the zero vector.
pub fn angle<L, R>(lhs: L, rhs: R) -> Result<L::Scalar>
where
    L: VecExpr,
    L::Scalar: Real,
    R: VecExpr<Scalar = L::Scalar>,
{
    let lhs_norm2 = norm2(lhs);
    let rhs_norm2 = norm2(rhs);

    if lhs_norm2.is_zero() || rhs_norm2.is_zero() {
        return Err(zero_norm_error("angle"));
    }

    let cos = dot(lhs, rhs);

    let sin = match L::SIZE {
        2 => cross2_unchecked(&lhs, &rhs).abs(),
        3 => (0..3)
            .map(|i| cross_at(&lhs, &rhs, i))
            .fold(L::Scalar::zero(), |acc, c| acc + c * c)
            .sqrt(),
        _ => (lhs_norm2 * rhs_norm2 - cos * cos)
            .max(L::Scalar::zero())
            .sqrt(),
    };

    Ok(sin.atan2(cos))
}

/// Direction of `expr`, as a lazy node.
///
/// The norm is computed once here. A zero vector stays zero.
#[inline]
pub fn unit<E>(expr: E) -> Unit<E>
where
    E: VecExpr,
    E::Scalar: Real,
{
    Unit::new(expr)
}

/// Like [`unit`], but fails on a zero vector.
#[inline]
pub fn try_unit<E>(expr: E) -> Result<Unit<E>>
where
    E: VecExpr,
    E::Scalar: Real,
{
    let unit = Unit::new(expr);
    if unit.norm().is_zero() {
        Err(zero_norm_error("unit"))
    } else {
        Ok(unit)
    }
}

/// Element-wise (Hadamard) product.
#[inline(always)]
pub fn elem_prod<L, R>(lhs: L, rhs: R) -> ElemProd<L, R>
where
    L: VecExpr,
    R: VecExpr<Scalar = L::Scalar>,
{
    ElemProd::new(lhs, rhs)
}
