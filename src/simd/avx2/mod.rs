//! AVX2 SIMD implementation of the 3D vector.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell (2013+) or AMD Excavator (2015+)
//! - **Target Architecture**: x86 or x86_64
//! - **Runtime Detection**: The build script enables this module only when
//!   the build machine (or the requested target features) provide AVX2
//!
//! For the intrinsics to be inlined, compile with `-C target-cpu=native` or
//! `-C target-feature=+avx2`. Without it every intrinsic stays a call, which
//! is correct but slower.
//!
//! # Available Types
//!
//! - [`f64x3::F64x3`]: three `f64` components in one `__m256d`, fourth lane
//!   held at zero
//!
//! # Usage Example
//!
//! ```rust
//! # #[cfg(avx2)]
//! # {
//! use vecly::simd::avx2::f64x3::F64x3;
//!
//! let u = F64x3::splat(1.0);
//! let mut v = F64x3::new(1.0, 2.0, 3.0);
//! v += &u;
//! v *= 2.0;
//! assert_eq!(v.to_array(), [4.0, 6.0, 8.0]);
//!
//! // Trees whose leaves are all `F64x3` evaluate in registers.
//! let w = F64x3::from_expr(2.0 * &u - &v);
//! assert_eq!(w, F64x3::new(-2.0, -4.0, -6.0));
//! # }
//! ```

#[cfg(target_arch = "x86")]
pub use std::arch::x86::__m256d;

#[cfg(target_arch = "x86_64")]
pub use std::arch::x86_64::__m256d;

pub mod f64x3;
