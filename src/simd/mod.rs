//! Register-backed vector backends.
//!
//! The build script inspects the CPU and sets exactly one of the `avx2` or
//! `fallback` cfg flags. With `avx2`, [`crate::FastVector3`] resolves to
//! [`avx2::f64x3::F64x3`]; otherwise it is the generic `Vector3<f64>`.
//! Setting `VECLY_FORCE_FALLBACK=1` at build time selects the fallback on any
//! machine.

#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
pub mod avx2;

/// Name of the backend selected at build time.
#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
pub const BACKEND: &str = "avx2";

/// Name of the backend selected at build time.
#[cfg(not(all(avx2, any(target_arch = "x86", target_arch = "x86_64"))))]
pub const BACKEND: &str = "fallback";
