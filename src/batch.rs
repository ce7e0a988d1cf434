//! Batch kernels over slices of vectors.
//!
//! Each kernel applies one vector operation to every element (or every pair of
//! elements) of its input slices. Inputs with at most [`PARALLEL_THRESHOLD`]
//! items run on the calling thread; larger inputs are split into chunks of
//! [`PARALLEL_CHUNK_SIZE`] and processed on the rayon thread pool.
//!
//! The kernels are generic over the vector type: anything whose borrow is a
//! [`VecExpr`] and that can be rebuilt from an expression works, which covers
//! [`Vector2`](crate::Vector2), [`Vector3`](crate::Vector3),
//! [`VectorN`](crate::VectorN) and the AVX2 register type.
//!
//! ```rust
//! use vecly::batch::{par_cross, par_dot};
//! use vecly::Vector3;
//!
//! let a = vec![Vector3::new(1.0, 0.0, 0.0); 8];
//! let b = vec![Vector3::new(0.0, 1.0, 0.0); 8];
//!
//! assert!(par_dot(&a, &b).unwrap().iter().all(|&d| d == 0.0));
//! assert_eq!(par_cross(&a, &b).unwrap()[0], Vector3::new(0.0, 0.0, 1.0));
//! ```

use rayon::prelude::*;

use crate::error::{length_error, Result};
use crate::expr::{angle, dot, norm, unit, Cross, FromExpr, Sum, VecExpr};
use crate::traits::{Real, Scalar};
use crate::{PARALLEL_CHUNK_SIZE, PARALLEL_THRESHOLD};

#[inline(always)]
fn check_lengths<A, B>(a: &[A], b: &[B]) -> Result<()> {
    if a.len() != b.len() {
        return Err(length_error(a.len(), b.len()));
    }
    Ok(())
}

/// Applies `f` to every item.
pub fn par_map<V, U, F>(items: &[V], f: F) -> Vec<U>
where
    V: Sync,
    U: Send,
    F: Fn(&V) -> U + Sync + Send,
{
    // For small batches, stay on the calling thread to avoid threading overhead
    if items.len() <= PARALLEL_THRESHOLD {
        return items.iter().map(f).collect();
    }

    items
        .par_iter()
        .with_min_len(PARALLEL_CHUNK_SIZE)
        .map(f)
        .collect()
}

/// Applies `f` to every pair `(a[i], b[i])`.
///
/// # Errors
///
/// Returns `LengthMismatch` if the slices differ in length.
pub fn par_zip_map<A, B, U, F>(a: &[A], b: &[B], f: F) -> Result<Vec<U>>
where
    A: Sync,
    B: Sync,
    U: Send,
    F: Fn(&A, &B) -> U + Sync + Send,
{
    check_lengths(a, b)?;

    if a.len() <= PARALLEL_THRESHOLD {
        return Ok(a.iter().zip(b).map(|(x, y)| f(x, y)).collect());
    }

    Ok(a
        .par_iter()
        .zip(b.par_iter())
        .with_min_len(PARALLEL_CHUNK_SIZE)
        .map(|(x, y)| f(x, y))
        .collect())
}

/// Pairwise sums `a[i] + b[i]`.
pub fn par_add<V, T>(a: &[V], b: &[V]) -> Result<Vec<V>>
where
    T: Scalar,
    V: FromExpr<T> + Send + Sync,
    for<'a> &'a V: VecExpr<Scalar = T>,
{
    par_zip_map(a, b, |x, y| V::from_expr(Sum::new(x, y)))
}

/// Pairwise dot products.
pub fn par_dot<V, T>(a: &[V], b: &[V]) -> Result<Vec<T>>
where
    T: Scalar,
    V: Sync,
    for<'a> &'a V: VecExpr<Scalar = T>,
{
    par_zip_map(a, b, |x, y| dot(x, y))
}

/// Pairwise 3D cross products.
pub fn par_cross<V, T>(a: &[V], b: &[V]) -> Result<Vec<V>>
where
    T: Scalar,
    V: FromExpr<T> + Send + Sync,
    for<'a> &'a V: VecExpr<Scalar = T>,
{
    par_zip_map(a, b, |x, y| V::from_expr(Cross::new(x, y)))
}

/// Euclidean norm of every vector.
pub fn par_norm<V, T>(items: &[V]) -> Vec<T>
where
    T: Real,
    V: Sync,
    for<'a> &'a V: VecExpr<Scalar = T>,
{
    par_map(items, |v| norm(v))
}

/// Scales every vector to unit length in place. Zero vectors stay zero.
pub fn par_normalize<V, T>(items: &mut [V])
where
    T: Real,
    V: FromExpr<T> + Send + Sync,
    for<'a> &'a V: VecExpr<Scalar = T>,
{
    let normalize = |v: &mut V| {
        let u = V::from_expr(unit(&*v));
        *v = u;
    };

    if items.len() <= PARALLEL_THRESHOLD {
        items.iter_mut().for_each(normalize);
        return;
    }

    items
        .par_chunks_mut(PARALLEL_CHUNK_SIZE)
        .for_each(|chunk| chunk.iter_mut().for_each(normalize));
}

/// Pairwise angles in `[0, π]`.
///
/// # Errors
///
/// Returns `LengthMismatch` if the slices differ in length, or `ZeroNorm` if
/// any vector in either slice is zero.
pub fn par_angle<V, T>(a: &[V], b: &[V]) -> Result<Vec<T>>
where
    T: Real,
    V: Sync,
    for<'a> &'a V: VecExpr<Scalar = T>,
{
    check_lengths(a, b)?;

    if a.len() <= PARALLEL_THRESHOLD {
        return a.iter().zip(b).map(|(x, y)| angle(x, y)).collect();
    }

    a.par_iter()
        .zip(b.par_iter())
        .with_min_len(PARALLEL_CHUNK_SIZE)
        .map(|(x, y)| angle(x, y))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{zero_norm_error, VectorError};
    use crate::vector::{Vector2, Vector3, VectorN};

    const LARGE: usize = PARALLEL_THRESHOLD * 3 + 17;

    fn ramp(n: usize) -> Vec<Vector3<f64>> {
        (0..n)
            .map(|i| {
                let t = i as f64;
                Vector3::new(t + 1.0, -0.5 * t, 2.0)
            })
            .collect()
    }

    #[test]
    fn test_length_mismatch() {
        let a = ramp(3);
        let b = ramp(4);
        assert_eq!(
            par_dot(&a, &b),
            Err(VectorError::LengthMismatch { left: 3, right: 4 })
        );
        assert!(par_add(&a, &b).is_err());
        assert!(par_angle(&a, &b).is_err());
    }

    #[test]
    fn test_empty_inputs() {
        let a: Vec<Vector3<f64>> = Vec::new();
        assert!(par_add(&a, &a).unwrap().is_empty());
        assert!(par_norm(&a).is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let a = ramp(LARGE);
        let b: Vec<_> = a.iter().rev().copied().collect();

        let sums = par_add(&a, &b).unwrap();
        let dots = par_dot(&a, &b).unwrap();
        let crosses = par_cross(&a, &b).unwrap();

        assert_eq!(sums.len(), LARGE);
        for i in (0..LARGE).step_by(997) {
            assert_eq!(sums[i], Vector3::from_expr(&a[i] + &b[i]));
            assert_eq!(dots[i], &a[i] * &b[i]);
            assert_eq!(crosses[i], Vector3::from_expr(&a[i] ^ &b[i]));
        }
    }

    #[test]
    fn test_normalize_in_place() {
        let mut items = ramp(LARGE);
        items[5] = Vector3::zero();
        par_normalize(&mut items);

        assert_eq!(items[5], Vector3::zero());
        for (i, v) in items.iter().enumerate().filter(|(i, _)| *i != 5) {
            assert!((v.norm() - 1.0).abs() < 1e-12, "item {i} has norm {}", v.norm());
        }
    }

    #[test]
    fn test_angle_rejects_zero_vector() {
        let a = vec![Vector2::new(1.0, 0.0), Vector2::new(0.0, 0.0)];
        let b = vec![Vector2::new(0.0, 1.0), Vector2::new(1.0, 1.0)];
        assert_eq!(par_angle(&a, &b), Err(zero_norm_error("angle")));

        let angles = par_angle(&a[..1], &b[..1]).unwrap();
        assert!((angles[0] - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn test_generic_dimension() {
        let a = vec![VectorN::new([1.0f32, 2.0, 2.0, 4.0]); 10];
        let norms = par_norm(&a);
        assert!(norms.iter().all(|&n| (n - 5.0).abs() < 1e-6));
    }

    #[test]
    fn test_zip_map_with_different_types() {
        let a = ramp(4);
        let scales = [1.0, 2.0, 3.0, 4.0];
        let scaled = par_zip_map(&a, &scales, |v, &s| Vector3::from_expr(v * s)).unwrap();
        assert_eq!(scaled[3], Vector3::new(16.0, -6.0, 8.0));
    }
}
