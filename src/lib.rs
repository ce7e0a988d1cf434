//! Fixed-size 2D, 3D and N-D vectors with lazy expression templates.
//!
//! Arithmetic on borrowed vectors builds a tree of [`expr`] nodes, and the tree
//! is evaluated one component at a time when it lands in a destination. This
//! avoids temporaries in expressions like `v += 3.0 * &u - &w * 5.0`.
//!
//! ```rust
//! use vecly::{Vector3, VecExpr};
//!
//! let u = Vector3::new(1.0, 2.0, 3.0);
//! let mut v = Vector3::new(4.0, 5.0, 6.0);
//!
//! v += 3.0 * &u - &u * 5.0;
//! assert_eq!(v, Vector3::new(2.0, 1.0, 0.0));
//! assert_eq!(&u * &u, 14.0);
//!
//! let w: Vector3<f64> = (&u ^ &v).eval();
//! assert_eq!(w, Vector3::new(-3.0, 6.0, -3.0));
//! ```
//!
//! On CPUs with AVX2, [`FastVector3`] keeps the three components in one
//! 256-bit register (see [`simd`]). [`batch`] runs the common operations over
//! slices of vectors with rayon, and [`interop`] converts to and from
//! `ndarray`.

pub mod batch;
pub mod error;
pub mod expr;
pub mod interop;
pub mod simd;
pub mod traits;
pub mod vector;

pub use error::{Result, VectorError};
pub use expr::{
    angle, cross, cross2, dot, elem_prod, norm, norm2, plus, sum, try_unit, unit, FromExpr,
    VecExpr,
};
pub use simd::BACKEND;
pub use traits::{Real, Scalar};
pub use vector::{Vector2, Vector3, VectorN};

/// Double precision 3D vector backed by the fastest available backend.
#[cfg(all(avx2, any(target_arch = "x86", target_arch = "x86_64")))]
pub type FastVector3 = simd::avx2::f64x3::F64x3;

/// Double precision 3D vector backed by the fastest available backend.
#[cfg(not(all(avx2, any(target_arch = "x86", target_arch = "x86_64"))))]
pub type FastVector3 = Vector3<f64>;

/// Batches up to this many vectors run sequentially; larger ones are split
/// across the rayon thread pool.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Number of vectors handed to one rayon task.
pub const PARALLEL_CHUNK_SIZE: usize = 1024;
