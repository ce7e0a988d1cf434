//! Element types accepted by vectors and expressions.
//!
//! [`Scalar`] is the closed set of arithmetic types a vector can hold and a
//! vector can be scaled by. It is implemented here for `f32`, `f64`, `i32`,
//! `i64`, `Complex<f32>` and `Complex<f64>` only; every operator that takes a
//! scalar operand is generated for exactly these types, so scaling by any
//! other type is rejected at compile time.
//!
//! [`Real`] narrows [`Scalar`] to floating point types. Operations that need a
//! square root or an arctangent (`norm`, `angle`, `unit`) require it.

use std::fmt::{Debug, Display};
use std::ops::Neg;

use num::complex::Complex;
use num::{Float, Num};

/// Arithmetic element type of a vector.
pub trait Scalar:
    Num + Neg<Output = Self> + Copy + Debug + Display + Send + Sync + 'static
{
    /// Absolute value (modulus for complex numbers) widened to `f64`.
    fn magnitude(self) -> f64;

    /// Returns `true` when dividing by `self` must be rejected.
    ///
    /// Floating types compare their magnitude against machine epsilon,
    /// integers reject zero only.
    fn is_negligible(self) -> bool;

    /// Signed value as an `f64`, or `None` for a complex number with a
    /// non-zero imaginary part.
    fn to_real(self) -> Option<f64>;
}

/// Floating point scalar.
pub trait Real: Scalar + Float {}

impl<T: Scalar + Float> Real for T {}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn magnitude(self) -> f64 {
                    self.abs() as f64
                }

                #[inline(always)]
                fn is_negligible(self) -> bool {
                    self.abs() <= <$t>::EPSILON
                }

                #[inline(always)]
                fn to_real(self) -> Option<f64> {
                    Some(self as f64)
                }
            }

            impl Scalar for Complex<$t> {
                #[inline(always)]
                fn magnitude(self) -> f64 {
                    self.norm() as f64
                }

                #[inline(always)]
                fn is_negligible(self) -> bool {
                    self.norm() <= <$t>::EPSILON
                }

                #[inline(always)]
                fn to_real(self) -> Option<f64> {
                    (self.im == 0.0).then_some(self.re as f64)
                }
            }
        )*
    };
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline(always)]
                fn magnitude(self) -> f64 {
                    (self as f64).abs()
                }

                #[inline(always)]
                fn is_negligible(self) -> bool {
                    self == 0
                }

                #[inline(always)]
                fn to_real(self) -> Option<f64> {
                    Some(self as f64)
                }
            }
        )*
    };
}

impl_scalar_float!(f32, f64);
impl_scalar_int!(i32, i64);
