use std::time::Instant;

use vecly::batch::{par_angle, par_cross, par_dot, par_normalize};
use vecly::{FastVector3, Vector2, Vector3, VectorN, BACKEND};

// Small deterministic generator so the demo has no dev-only dependencies
fn sample(seed: &mut u64) -> f64 {
    *seed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    ((*seed >> 11) as f64 / (1u64 << 53) as f64) * 2000.0 - 1000.0
}

// Helper to print throughput the same way for every kernel
fn report(name: &str, n: usize, start: Instant) {
    let micros = start.elapsed().as_secs_f64() * 1e6;
    println!("{name:<28} -> {:>10.2} operations/µs", n as f64 / micros);
}

fn main() {
    println!("backend: {BACKEND}");

    let u = Vector3::new(1.0, 2.0, 3.0);
    let mut v = Vector3::new(4.0, 5.0, 6.0);
    v += 3.0 * &u - &u * 5.0;
    println!("v += 3u - 5u      = {v}");
    println!("u · v             = {}", &u * &v);
    println!("u × v             = {}", Vector3::from_expr(&u ^ &v));
    println!("|u|               = {}", u.norm());
    if let Ok(theta) = u.angle(&v) {
        println!("angle(u, v)       = {theta}");
    }

    let p = Vector2::new(3.0, 4.0);
    let q = Vector2::new(-4.0, 3.0);
    println!("p ^ q (2D)        = {}", &p ^ &q);

    let a = VectorN::new([1.0, 2.0, 3.0, 4.0, 5.0]);
    println!("unit(a)           = {}", VectorN::<f64, 5>::from_expr(a.unit()));

    let f = FastVector3::from(Vector3::new(1.0, 0.0, 0.0));
    let g = FastVector3::from(Vector3::new(0.0, 1.0, 0.0));
    println!("fast x · y        = {}", f.dot(&g));
    if let Ok(theta) = f.angle(&g) {
        println!("fast angle(x, y)  = {theta}");
    }

    const N: usize = 2_000_000;
    let mut seed = 10u64;
    let lhs: Vec<Vector3<f64>> = (0..N)
        .map(|_| Vector3::new(sample(&mut seed), sample(&mut seed), sample(&mut seed)))
        .collect();
    let rhs: Vec<Vector3<f64>> = (0..N)
        .map(|_| Vector3::new(sample(&mut seed), sample(&mut seed), sample(&mut seed)))
        .collect();

    println!();
    println!("batches of {N} vectors:");

    let start = Instant::now();
    let mut fused = lhs.clone();
    for (w, (x, y)) in fused.iter_mut().zip(lhs.iter().zip(&rhs)) {
        *w += 3.0 * x - y * 5.0;
    }
    report("fused w += 3x - 5y", N, start);

    let start = Instant::now();
    let dots = par_dot(&lhs, &rhs).unwrap_or_default();
    report("par_dot", dots.len(), start);

    let start = Instant::now();
    let crosses = par_cross(&lhs, &rhs).unwrap_or_default();
    report("par_cross", crosses.len(), start);

    let start = Instant::now();
    match par_angle(&lhs, &rhs) {
        Ok(angles) => report("par_angle", angles.len(), start),
        Err(e) => println!("par_angle failed: {e}"),
    }

    let start = Instant::now();
    par_normalize(&mut fused);
    report("par_normalize", fused.len(), start);

    let fast_lhs: Vec<FastVector3> = lhs.iter().map(|&x| FastVector3::from(x)).collect();
    let fast_rhs: Vec<FastVector3> = rhs.iter().map(|&x| FastVector3::from(x)).collect();
    let start = Instant::now();
    let fast_crosses = par_cross(&fast_lhs, &fast_rhs).unwrap_or_default();
    report(&format!("par_cross ({BACKEND})"), fast_crosses.len(), start);
}
