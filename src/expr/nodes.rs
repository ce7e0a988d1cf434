//! Node types of the expression tree.
//!
//! Every node is a small `Copy` struct over its operands. Operands are other
//! nodes (held by value, they are just bundles of references) or borrowed
//! concrete vectors.

use std::ops::{Div, Mul};

use num::Zero;

use super::{cross_at, norm, same_size, VecExpr};
use crate::error::{division_error, Result};
use crate::traits::{Real, Scalar};

#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
use crate::simd::avx2::{f64x3::fused, __m256d};

macro_rules! binary_node {
    (
        $(#[$doc:meta])* $name:ident,
        |$l:ident, $r:ident, $i:ident| $body:expr,
        fused: $kernel:ident
    ) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<L, R> {
            lhs: L,
            rhs: R,
        }

        impl<L, R> $name<L, R>
        where
            L: VecExpr,
            R: VecExpr<Scalar = L::Scalar>,
        {
            /// Builds the node. Operands of different sizes fail the build.
            #[inline(always)]
            pub fn new(lhs: L, rhs: R) -> Self {
                const {
                    assert!(
                        L::SIZE == R::SIZE,
                        "operands of a vector expression must have the same size"
                    )
                };
                Self { lhs, rhs }
            }
        }

        impl<L, R> VecExpr for $name<L, R>
        where
            L: VecExpr,
            R: VecExpr<Scalar = L::Scalar>,
        {
            type Scalar = L::Scalar;

            const SIZE: usize = same_size(L::SIZE, R::SIZE);

            #[inline(always)]
            fn at(&self, $i: usize) -> Self::Scalar {
                let $l = &self.lhs;
                let $r = &self.rhs;
                $body
            }

            #[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
            #[inline(always)]
            fn fused_register(&self) -> Option<__m256d> {
                Some(fused::$kernel(
                    self.lhs.fused_register()?,
                    self.rhs.fused_register()?,
                ))
            }
        }
    };
}

binary_node!(
    /// `lhs + rhs`, component by component.
    Sum,
    |l, r, i| l.at(i) + r.at(i),
    fused: add
);

binary_node!(
    /// `lhs - rhs`, component by component.
    Diff,
    |l, r, i| l.at(i) - r.at(i),
    fused: sub
);

binary_node!(
    /// Hadamard product `lhs[i] * rhs[i]`.
    ElemProd,
    |l, r, i| l.at(i) * r.at(i),
    fused: mul
);

binary_node!(
    /// Element-wise division `lhs[i] / rhs[i]`.
    ///
    /// Components follow IEEE semantics; no divisor is checked.
    ElemDiv,
    |l, r, i| l.at(i) / r.at(i),
    fused: div
);

/// Unary plus: reads its operand unchanged.
#[derive(Clone, Copy, Debug)]
pub struct Plus<E> {
    expr: E,
}

impl<E: VecExpr> Plus<E> {
    #[inline(always)]
    pub fn new(expr: E) -> Self {
        Self { expr }
    }
}

impl<E: VecExpr> VecExpr for Plus<E> {
    type Scalar = E::Scalar;

    const SIZE: usize = E::SIZE;

    #[inline(always)]
    fn at(&self, i: usize) -> Self::Scalar {
        self.expr.at(i)
    }

    #[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
    #[inline(always)]
    fn fused_register(&self) -> Option<__m256d> {
        self.expr.fused_register()
    }
}

/// Unary minus.
#[derive(Clone, Copy, Debug)]
pub struct Negate<E> {
    expr: E,
}

impl<E: VecExpr> Negate<E> {
    #[inline(always)]
    pub fn new(expr: E) -> Self {
        Self { expr }
    }
}

impl<E: VecExpr> VecExpr for Negate<E> {
    type Scalar = E::Scalar;

    const SIZE: usize = E::SIZE;

    #[inline(always)]
    fn at(&self, i: usize) -> Self::Scalar {
        -self.expr.at(i)
    }

    #[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
    #[inline(always)]
    fn fused_register(&self) -> Option<__m256d> {
        Some(fused::neg(self.expr.fused_register()?))
    }
}

/// Expression scaled by a scalar, from either side of `*`.
#[derive(Clone, Copy, Debug)]
pub struct Scaled<E, S> {
    expr: E,
    factor: S,
}

impl<E, S> Scaled<E, S>
where
    E: VecExpr,
    S: Scalar,
    E::Scalar: Mul<S, Output = E::Scalar>,
{
    #[inline(always)]
    pub fn new(expr: E, factor: S) -> Self {
        Self { expr, factor }
    }
}

impl<E, S> VecExpr for Scaled<E, S>
where
    E: VecExpr,
    S: Scalar,
    E::Scalar: Mul<S, Output = E::Scalar>,
{
    type Scalar = E::Scalar;

    const SIZE: usize = E::SIZE;

    #[inline(always)]
    fn at(&self, i: usize) -> Self::Scalar {
        self.expr.at(i) * self.factor
    }

    #[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
    #[inline(always)]
    fn fused_register(&self) -> Option<__m256d> {
        Some(fused::scale(
            self.expr.fused_register()?,
            self.factor.to_real()?,
        ))
    }
}

/// Expression divided by a scalar.
///
/// The divisor is validated once, when the node is built.
#[derive(Clone, Copy, Debug)]
pub struct Quotient<E, S> {
    expr: E,
    divisor: S,
}

impl<E, S> Quotient<E, S>
where
    E: VecExpr,
    S: Scalar,
    E::Scalar: Div<S, Output = E::Scalar>,
{
    /// # Panics
    ///
    /// Panics if `divisor` is negligible (see [`Scalar::is_negligible`]).
    #[inline]
    pub fn new(expr: E, divisor: S) -> Self {
        match Self::try_new(expr, divisor) {
            Ok(node) => node,
            Err(e) => panic!("{e}"),
        }
    }

    #[inline]
    pub fn try_new(expr: E, divisor: S) -> Result<Self> {
        if divisor.is_negligible() {
            return Err(division_error(divisor.magnitude()));
        }
        Ok(Self { expr, divisor })
    }
}

impl<E, S> VecExpr for Quotient<E, S>
where
    E: VecExpr,
    S: Scalar,
    E::Scalar: Div<S, Output = E::Scalar>,
{
    type Scalar = E::Scalar;

    const SIZE: usize = E::SIZE;

    #[inline(always)]
    fn at(&self, i: usize) -> Self::Scalar {
        self.expr.at(i) / self.divisor
    }

    #[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
    #[inline(always)]
    fn fused_register(&self) -> Option<__m256d> {
        Some(fused::div_scalar(
            self.expr.fused_register()?,
            self.divisor.to_real()?,
        ))
    }
}

/// 3D cross product `lhs × rhs`.
///
/// Component `i` reads two components of each operand, following the
/// determinant expansion `(u1v2 - u2v1, u2v0 - u0v2, u0v1 - u1v0)`.
#[derive(Clone, Copy, Debug)]
pub struct Cross<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> Cross<L, R>
where
    L: VecExpr,
    R: VecExpr<Scalar = L::Scalar>,
{
    /// Builds the node. Operands that are not 3D fail the build.
    #[inline(always)]
    pub fn new(lhs: L, rhs: R) -> Self {
        const {
            assert!(
                L::SIZE == 3 && R::SIZE == 3,
                "the vector cross product is only defined for 3D operands"
            )
        };
        Self { lhs, rhs }
    }
}

impl<L, R> VecExpr for Cross<L, R>
where
    L: VecExpr,
    R: VecExpr<Scalar = L::Scalar>,
{
    type Scalar = L::Scalar;

    const SIZE: usize = 3;

    #[inline(always)]
    fn at(&self, i: usize) -> Self::Scalar {
        cross_at(&self.lhs, &self.rhs, i)
    }

    #[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
    #[inline(always)]
    fn fused_register(&self) -> Option<__m256d> {
        Some(fused::cross(
            self.lhs.fused_register()?,
            self.rhs.fused_register()?,
        ))
    }
}

/// Direction of an expression.
///
/// Holds the norm computed when the node was built. A zero norm leaves the
/// operand unchanged, so the unit of the zero vector is the zero vector.
#[derive(Clone, Copy, Debug)]
pub struct Unit<E: VecExpr> {
    expr: E,
    norm: E::Scalar,
}

impl<E> Unit<E>
where
    E: VecExpr,
    E::Scalar: Real,
{
    #[inline]
    pub fn new(expr: E) -> Self {
        Self {
            expr,
            norm: norm(expr),
        }
    }

    /// Norm of the operand.
    #[inline(always)]
    pub fn norm(&self) -> E::Scalar {
        self.norm
    }
}

impl<E> VecExpr for Unit<E>
where
    E: VecExpr,
    E::Scalar: Real,
{
    type Scalar = E::Scalar;

    const SIZE: usize = E::SIZE;

    #[inline(always)]
    fn at(&self, i: usize) -> Self::Scalar {
        if self.norm.is_zero() {
            self.expr.at(i)
        } else {
            self.expr.at(i) / self.norm
        }
    }

    #[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
    #[inline(always)]
    fn fused_register(&self) -> Option<__m256d> {
        let r = self.expr.fused_register()?;
        if self.norm.is_zero() {
            Some(r)
        } else {
            Some(fused::div_scalar(r, self.norm.to_real()?))
        }
    }
}
