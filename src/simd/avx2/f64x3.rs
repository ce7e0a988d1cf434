//! AVX2 register-backed 3D vector.
//!
//! This module provides `F64x3`, a drop-in counterpart of `Vector3<f64>` that
//! keeps its three components in one 256-bit `__m256d` register instead of
//! three scalar fields.
//!
//! # Register Layout
//!
//! ```text
//! lane:   0   1   2   3
//!         x   y   z   0.0
//! ```
//!
//! The fourth lane is padding. Every construction path writes `+0.0` there and
//! every kernel that could disturb it (scaling by a negative or non-finite
//! value, element-wise division) clears it again, so it never leaks into a dot
//! product, a norm or a cross product.
//!
//! # Operators
//!
//! `F64x3` has the operator surface of `Vector3<f64>`: `&u + &v`, `2.0 * &u`,
//! `&u ^ &v` and the rest build the same lazy expression nodes, and `*` between
//! two operands is the dot product. When every leaf of a tree is an `F64x3`,
//! evaluating it into an `F64x3` runs the tree register by register:
//!
//! - Addition and subtraction: one `_mm256_add_pd` / `_mm256_sub_pd`
//! - Negation: one `_mm256_xor_pd` with the sign mask
//! - Scalar scaling and division: broadcast with `_mm256_set1_pd`, then one
//!   multiply or divide
//! - Dot product: `_mm256_mul_pd`, then a horizontal add across the two
//!   128-bit halves
//! - Cross product: `_mm256_permute4x64_pd` lane shuffles, two multiplies and
//!   one subtract, no scalar loop
//!
//! Trees that mix in generic vectors fall back to one component at a time.
//! Results match `Vector3<f64>` up to the reassociation of the horizontal
//! reduction, so derived quantities should be compared with a tolerance.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::fmt;
use std::ops::{AddAssign, BitXorAssign, DivAssign, Index, IndexMut, MulAssign, SubAssign};

use num::cast::AsPrimitive;

use crate::error::{division_error, index_error, Result};
use crate::expr::{Cross, ElemDiv, ElemProd, FromExpr, Unit, VecExpr};
use crate::traits::Scalar;
use crate::vector::Vector3;

/// Number of f64 lanes in an AVX2 256-bit register.
pub(crate) const LANE_COUNT: usize = 4;

/// Number of logical components stored in the register.
pub(crate) const COMPONENTS: usize = 3;

/// Blend mask selecting the padding lane.
const PAD_LANE: i32 = 0b1000;

/// `_MM_SHUFFLE(3, 0, 2, 1)`: `(x, y, z, w) -> (y, z, x, w)`.
const YZX: i32 = 0b11_00_10_01;

/// `_MM_SHUFFLE(3, 1, 0, 2)`: `(x, y, z, w) -> (z, x, y, w)`.
const ZXY: i32 = 0b11_01_00_10;

/// Forces the padding lane back to `+0.0`.
#[inline(always)]
unsafe fn clear_pad(r: __m256d) -> __m256d {
    _mm256_blend_pd::<PAD_LANE>(r, _mm256_setzero_pd())
}

/// Dot product of two registers: multiply, fold the high half onto the low
/// half, then add the two remaining lanes.
#[inline(always)]
unsafe fn _mm256_dp_pd(a: __m256d, b: __m256d) -> f64 {
    let prod = _mm256_mul_pd(a, b);
    let pair = _mm_add_pd(
        _mm256_castpd256_pd128(prod),
        _mm256_extractf128_pd::<1>(prod),
    );
    _mm_cvtsd_f64(_mm_add_sd(pair, _mm_unpackhi_pd(pair, pair)))
}

/// Cross product of two registers.
///
/// `a.yzx * b.zxy - (a.yzx * b).yzx`, which expands to
/// `(a1b2 - a2b1, a2b0 - a0b2, a0b1 - a1b0, 0)`.
#[inline(always)]
unsafe fn _mm256_cp_pd(a: __m256d, b: __m256d) -> __m256d {
    let a_yzx = _mm256_permute4x64_pd::<YZX>(a);
    let b_zxy = _mm256_permute4x64_pd::<ZXY>(b);
    let mixed = _mm256_mul_pd(a_yzx, b);
    _mm256_sub_pd(
        _mm256_mul_pd(a_yzx, b_zxy),
        _mm256_permute4x64_pd::<YZX>(mixed),
    )
}

/// Register kernels behind the expression nodes.
///
/// Inputs have `+0.0` in lane 3 and so do the outputs.
pub(crate) mod fused {
    use super::*;

    #[inline(always)]
    pub(crate) fn add(a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_add_pd(a, b) }
    }

    #[inline(always)]
    pub(crate) fn sub(a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_sub_pd(a, b) }
    }

    #[inline(always)]
    pub(crate) fn mul(a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_mul_pd(a, b) }
    }

    /// `0 / 0` in the padding lane is cleared.
    #[inline(always)]
    pub(crate) fn div(a: __m256d, b: __m256d) -> __m256d {
        unsafe { clear_pad(_mm256_div_pd(a, b)) }
    }

    /// Flips the sign bit of lanes 0..2, so `-(+0.0)` is `-0.0`.
    #[inline(always)]
    pub(crate) fn neg(a: __m256d) -> __m256d {
        unsafe { _mm256_xor_pd(a, _mm256_set_pd(0.0, -0.0, -0.0, -0.0)) }
    }

    #[inline(always)]
    pub(crate) fn scale(a: __m256d, factor: f64) -> __m256d {
        unsafe { clear_pad(_mm256_mul_pd(a, _mm256_set1_pd(factor))) }
    }

    #[inline(always)]
    pub(crate) fn div_scalar(a: __m256d, divisor: f64) -> __m256d {
        unsafe { clear_pad(_mm256_div_pd(a, _mm256_set1_pd(divisor))) }
    }

    #[inline(always)]
    pub(crate) fn cross(a: __m256d, b: __m256d) -> __m256d {
        unsafe { _mm256_cp_pd(a, b) }
    }

    #[inline(always)]
    pub(crate) fn dot(a: __m256d, b: __m256d) -> f64 {
        unsafe { _mm256_dp_pd(a, b) }
    }
}

/// 3D double precision vector stored in one AVX2 register.
///
/// # Usage
///
/// ```rust
/// # #[cfg(avx2)]
/// # {
/// use vecly::simd::avx2::f64x3::F64x3;
///
/// let u = F64x3::new(10.0, -100.0, 100.0);
/// let v = F64x3::new(2.2, -100.0, 100.0);
/// assert_eq!(F64x3::from_expr(&u ^ &v), F64x3::new(0.0, -780.0, -780.0));
/// assert_eq!(F64x3::new(3.0, 4.0, 0.0).norm(), 5.0);
/// # }
/// ```
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F64x3 {
    /// AVX2 256-bit register; lane 3 is always `+0.0`
    elements: __m256d,
}

impl F64x3 {
    #[inline(always)]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            elements: unsafe { _mm256_set_pd(0.0, z, y, x) },
        }
    }

    #[inline(always)]
    pub fn zero() -> Self {
        Self {
            elements: unsafe { _mm256_setzero_pd() },
        }
    }

    #[inline(always)]
    pub fn splat(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Wraps a raw register, discarding whatever lane 3 holds.
    #[inline(always)]
    pub fn from_register(r: __m256d) -> Self {
        Self {
            elements: unsafe { clear_pad(r) },
        }
    }

    #[inline(always)]
    pub fn register(self) -> __m256d {
        self.elements
    }

    /// Evaluates any size-3 `f64` expression, in registers when every leaf
    /// of the tree is an `F64x3`.
    #[inline(always)]
    pub fn from_expr<E: VecExpr<Scalar = f64>>(expr: E) -> Self {
        const { assert!(E::SIZE == COMPONENTS, "expression size must be 3") };
        match expr.fused_register() {
            Some(r) => Self { elements: r },
            None => Self::new(expr.at(0), expr.at(1), expr.at(2)),
        }
    }

    /// Re-assigns all components.
    #[inline(always)]
    pub fn load(&mut self, x: f64, y: f64, z: f64) {
        *self = Self::new(x, y, z);
    }

    /// Overwrites every component with the value of `expr`.
    #[inline(always)]
    pub fn assign<E: VecExpr<Scalar = f64>>(&mut self, expr: E) {
        *self = Self::from_expr(expr);
    }

    #[inline(always)]
    fn lanes(&self) -> &[f64; LANE_COUNT] {
        // SAFETY: `__m256d` is 32 bytes holding four f64 lanes and its alignment
        // is stricter than the array's.
        unsafe { &*(&self.elements as *const __m256d as *const [f64; LANE_COUNT]) }
    }

    #[inline(always)]
    fn lanes_mut(&mut self) -> &mut [f64; LANE_COUNT] {
        // SAFETY: see `lanes`.
        unsafe { &mut *(&mut self.elements as *mut __m256d as *mut [f64; LANE_COUNT]) }
    }

    #[inline(always)]
    pub fn x(&self) -> f64 {
        self.lanes()[0]
    }

    #[inline(always)]
    pub fn y(&self) -> f64 {
        self.lanes()[1]
    }

    #[inline(always)]
    pub fn z(&self) -> f64 {
        self.lanes()[2]
    }

    #[inline(always)]
    pub const fn size(&self) -> usize {
        COMPONENTS
    }

    /// Checked component read.
    #[inline]
    pub fn get(&self, i: usize) -> Result<f64> {
        if i < COMPONENTS {
            Ok(self.lanes()[i])
        } else {
            Err(index_error(i, COMPONENTS))
        }
    }

    /// Checked mutable access. The padding lane is never handed out.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Result<&mut f64> {
        if i < COMPONENTS {
            Ok(&mut self.lanes_mut()[i])
        } else {
            Err(index_error(i, COMPONENTS))
        }
    }

    #[inline(always)]
    pub fn to_array(self) -> [f64; 3] {
        let lanes = self.lanes();
        [lanes[0], lanes[1], lanes[2]]
    }

    /// Applies `f` to each component.
    #[inline]
    pub fn map<U: Scalar, F: Fn(f64) -> U>(self, f: F) -> Vector3<U> {
        Vector3::from(self).map(f)
    }

    /// Element-wise conversion to another primitive scalar type, with the
    /// semantics of an `as` cast.
    #[inline]
    pub fn convert<U>(self) -> Vector3<U>
    where
        U: Scalar,
        f64: AsPrimitive<U>,
    {
        Vector3::from(self).convert()
    }

    /// Dot product with horizontal register reduction.
    #[inline(always)]
    pub fn dot<R: VecExpr<Scalar = f64>>(&self, rhs: R) -> f64 {
        fused::dot(self.elements, Self::from_expr(rhs).elements)
    }

    /// Lazy cross product `self × rhs`.
    #[inline(always)]
    pub fn cross<R: VecExpr<Scalar = f64>>(&self, rhs: R) -> Cross<&Self, R> {
        Cross::new(self, rhs)
    }

    #[inline(always)]
    pub fn norm2(&self) -> f64 {
        fused::dot(self.elements, self.elements)
    }

    #[inline(always)]
    pub fn norm(&self) -> f64 {
        self.norm2().sqrt()
    }

    #[inline]
    pub fn sum(&self) -> f64 {
        fused::dot(self.elements, unsafe { _mm256_set_pd(0.0, 1.0, 1.0, 1.0) })
    }

    /// Angle to `rhs` in `[0, π]`, as `atan2(|u × v|, u · v)`.
    ///
    /// # Errors
    ///
    /// Returns `ZeroNorm` if either vector is zero.
    pub fn angle<R: VecExpr<Scalar = f64>>(&self, rhs: R) -> Result<f64> {
        let rhs = Self::from_expr(rhs);
        if self.norm2() == 0.0 || rhs.norm2() == 0.0 {
            return Err(crate::error::zero_norm_error("angle"));
        }
        let normal = fused::cross(self.elements, rhs.elements);
        Ok(fused::dot(normal, normal)
            .sqrt()
            .atan2(fused::dot(self.elements, rhs.elements)))
    }

    /// Lazy unit vector. The zero vector stays zero.
    #[inline]
    pub fn unit(&self) -> Unit<&Self> {
        crate::expr::unit(self)
    }

    /// Lazy unit vector, failing on the zero vector.
    #[inline]
    pub fn try_unit(&self) -> Result<Unit<&Self>> {
        crate::expr::try_unit(self)
    }

    /// Scales to unit length in place. The zero vector stays zero.
    #[inline]
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm != 0.0 {
            self.elements = fused::div_scalar(self.elements, norm);
        }
    }

    /// Lazy Hadamard product.
    #[inline(always)]
    pub fn elem_prod<R: VecExpr<Scalar = f64>>(&self, rhs: R) -> ElemProd<&Self, R> {
        ElemProd::new(self, rhs)
    }

    /// Lazy element-wise division.
    #[inline(always)]
    pub fn elem_div<R: VecExpr<Scalar = f64>>(&self, rhs: R) -> ElemDiv<&Self, R> {
        ElemDiv::new(self, rhs)
    }

    /// Divides in place, reporting a negligible divisor.
    #[inline]
    pub fn try_div_assign(&mut self, divisor: f64) -> Result<()> {
        if divisor.is_negligible() {
            return Err(division_error(divisor.magnitude()));
        }
        self.elements = fused::div_scalar(self.elements, divisor);
        Ok(())
    }

    /// Prints the vector as `(x,y,z)` followed by a newline.
    pub fn show(&self) {
        println!("{self}");
    }
}

impl Default for F64x3 {
    #[inline(always)]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for F64x3 {
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl fmt::Debug for F64x3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("F64x3")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .finish()
    }
}

impl fmt::Display for F64x3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x(), self.y(), self.z())
    }
}

impl Index<usize> for F64x3 {
    type Output = f64;

    #[inline(always)]
    fn index(&self, i: usize) -> &f64 {
        if i >= COMPONENTS {
            panic!("{}", index_error(i, COMPONENTS));
        }
        &self.lanes()[i]
    }
}

impl IndexMut<usize> for F64x3 {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        if i >= COMPONENTS {
            panic!("{}", index_error(i, COMPONENTS));
        }
        &mut self.lanes_mut()[i]
    }
}

impl<'a> VecExpr for &'a F64x3 {
    type Scalar = f64;

    const SIZE: usize = COMPONENTS;

    #[inline(always)]
    fn at(&self, i: usize) -> f64 {
        (**self)[i]
    }

    #[inline(always)]
    fn fused_register(&self) -> Option<__m256d> {
        Some(self.elements)
    }
}

impl FromExpr<f64> for F64x3 {
    #[inline(always)]
    fn from_expr<E: VecExpr<Scalar = f64>>(expr: E) -> Self {
        F64x3::from_expr(expr)
    }
}

impl From<Vector3<f64>> for F64x3 {
    #[inline(always)]
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<F64x3> for Vector3<f64> {
    #[inline(always)]
    fn from(v: F64x3) -> Self {
        Vector3::new(v.x(), v.y(), v.z())
    }
}

impl From<[f64; 3]> for F64x3 {
    #[inline(always)]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<F64x3> for [f64; 3] {
    #[inline(always)]
    fn from(v: F64x3) -> Self {
        v.to_array()
    }
}

/// Compound assignment from any size-3 `f64` expression.
macro_rules! impl_assign_op {
    ($($imp:ident::$method:ident => $kernel:ident),* $(,)?) => {
        $(
            impl<E: VecExpr<Scalar = f64>> $imp<E> for F64x3 {
                #[inline(always)]
                fn $method(&mut self, rhs: E) {
                    self.elements = fused::$kernel(self.elements, Self::from_expr(rhs).elements);
                }
            }
        )*
    };
}

impl_assign_op!(
    AddAssign::add_assign => add,
    SubAssign::sub_assign => sub,
    DivAssign::div_assign => div,
    BitXorAssign::bitxor_assign => cross,
);

impl MulAssign<f64> for F64x3 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: f64) {
        self.elements = fused::scale(self.elements, rhs);
    }
}

impl DivAssign<f64> for F64x3 {
    /// # Panics
    ///
    /// Panics if `|rhs| <= f64::EPSILON`.
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        if let Err(e) = self.try_div_assign(rhs) {
            panic!("{e}");
        }
    }
}
