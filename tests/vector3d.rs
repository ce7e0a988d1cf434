//! Integration tests for `Vector3`.
//!
//! The scenarios mirror the reference test suite of the library this crate
//! reimplements: construction, every operator and its compound form, the
//! products, norms, angles and unit vectors, and a composite expression that
//! must leave its target unchanged. Decimal inputs are compared with a
//! relative tolerance, exact inputs exactly.

use std::f64::consts::PI;

use vecly::{angle, cross, dot, norm, norm2, sum, unit, VecExpr, Vector3, VectorError};

const TOLERANCE: f64 = 1e-12;

fn assert_close(actual: f64, expected: f64) {
    let error = (actual - expected).abs();
    let scale = expected.abs().max(1.0);
    assert!(
        error <= TOLERANCE * scale,
        "expected {expected}, got {actual} (error {error:e})"
    );
}

fn assert_vec_close(actual: Vector3<f64>, expected: [f64; 3]) {
    for (i, &e) in expected.iter().enumerate() {
        assert_close(actual[i], e);
    }
}

#[test]
fn test_constructors() {
    let a = Vector3::<f64>::zero();
    assert_eq!(a, Vector3::new(0.0, 0.0, 0.0));

    let b = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!((b.x, b.y, b.z), (1.0, 2.0, 3.0));

    let c = Vector3::from_expr(&a + &b);
    assert_eq!(c, b);

    let d = Vector3::splat(2.2);
    assert_eq!(d.to_array(), [2.2; 3]);

    let copy = c;
    assert_eq!(copy, Vector3::new(1.0, 2.0, 3.0));

    let e: Vector3<f64> = (&d - &a).eval();
    assert_eq!(e, d);

    assert_eq!(Vector3::from([4, 5, 6]), Vector3::new(4, 5, 6));
    assert_eq!(Vector3::<f64>::default(), a);
}

#[test]
fn test_load() {
    let mut v = Vector3::zero();
    v.load(1.0, 1.0, 1.0);
    assert_eq!(v, Vector3::splat(1.0));

    v.load(1.0, 2.7, -0.2);
    assert_eq!(v.to_array(), [1.0, 2.7, -0.2]);

    v.load(1.33, 1e8, 1e-8);
    assert_eq!(v.to_array(), [1.33, 1e8, 1e-8]);
}

#[test]
fn test_index_and_checked_access() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    v[1] = 20.0;
    assert_eq!(v[1], 20.0);
    assert_eq!(v.get(2), Ok(3.0));
    assert_eq!(
        v.get(3),
        Err(VectorError::IndexOutOfRange { index: 3, size: 3 })
    );

    *v.get_mut(0).unwrap() = -1.0;
    assert_eq!(v.x, -1.0);
    assert!(v.get_mut(7).is_err());
}

#[test]
#[should_panic(expected = "Index out of range")]
fn test_index_out_of_range_panics() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    let _ = v[3];
}

#[test]
fn test_assignment() {
    let mut v1 = Vector3::zero();
    let mut v2 = Vector3::splat(1.0);
    v1 = v2;
    assert_eq!(v1, Vector3::splat(1.0));

    v2.load(1.34, -10000.02, 0.34);
    v1.assign(&v2);
    assert_eq!(v1.to_array(), [1.34, -10000.02, 0.34]);

    v2.load(1e9, 1e12, 1e-10);
    v1 = v2;
    assert_eq!(v1.to_array(), [1e9, 1e12, 1e-10]);
}

#[test]
fn test_addition() {
    let mut v1 = Vector3::splat(1.0);
    let mut v2 = Vector3::splat(1.0);
    let v3 = Vector3::from_expr(&v1 + &v2 + &v1 + &v1);
    assert_eq!(v3, Vector3::splat(4.0));

    v1.load(34.5, -1.1, 1.5);
    v2.load(-2.1, -3.3, -5.6);
    assert_vec_close(Vector3::from_expr(&v1 + &v2), [32.4, -4.4, -4.1]);

    v1.load(1e6, 1e-6, -1e9);
    v2.load(1e6, 3e-6, 5e9);
    assert_vec_close(Vector3::from_expr(&v1 + &v2), [2e6, 4e-6, 4e9]);
}

#[test]
fn test_add_assign() {
    let mut v1 = Vector3::splat(1.0);
    let v2 = Vector3::splat(1.0);
    let old = v1;
    v1 += &v2 + &v2 + &old;
    assert_eq!(v1, Vector3::splat(4.0));

    v1.load(2.0, 2.0, 2.0);
    v1 += &Vector3::new(3.45, -1.45, 1.25);
    assert_vec_close(v1, [5.45, 0.55, 3.25]);

    v1 += &Vector3::splat(-10.0);
    assert_vec_close(v1, [-4.55, -9.45, -6.75]);

    v1 += &Vector3::new(22.0, 33.0, 44.0);
    assert_vec_close(v1, [17.45, 23.55, 37.25]);
}

#[test]
fn test_subtraction() {
    let v2 = Vector3::splat(1.0);
    let v3 = Vector3::new(-2.56, 2.56, -0.9);
    let v1 = Vector3::from_expr(&v2 - &v2 - &v3);
    assert_eq!(v1.to_array(), [2.56, -2.56, 0.9]);

    let v2 = Vector3::new(1.4, -1.0, 20.0);
    let v3 = Vector3::new(5.5, 2.56, -109.0);
    assert_vec_close(Vector3::from_expr(&v2 - &v3), [-4.1, -3.56, 129.0]);
}

#[test]
fn test_sub_assign() {
    let mut v1 = Vector3::splat(1.0);
    let v2 = Vector3::new(-2.56, 2.56, -0.9);
    let old = v1;
    v1 -= &v2 + &old;
    assert_vec_close(v1, [2.56, -2.56, 0.9]);

    v1.load(1.4, -1.0, 20.0);
    v1 -= &Vector3::new(5.5, 2.56, -109.0);
    assert_vec_close(v1, [-4.1, -3.56, 129.0]);
}

#[test]
fn test_unary_plus_and_minus() {
    let v2 = Vector3::new(-2.3, 4.5, 6.6);
    assert_eq!(Vector3::from_expr(vecly::plus(&v2)), v2);
    assert_eq!(Vector3::from_expr(-&v2).to_array(), [2.3, -4.5, -6.6]);
    assert_eq!(Vector3::from_expr(-(-&v2)), v2);
}

#[test]
fn test_scalar_multiplication() {
    let mut a = 1.1;
    let mut v2 = Vector3::splat(1.0);
    assert_eq!(Vector3::from_expr(&v2 * a), Vector3::splat(1.1));
    assert_eq!(Vector3::from_expr(a * &v2), Vector3::splat(1.1));

    v2.load(1.0, -2.4, 4.56);
    a = -4.25;
    assert_vec_close(Vector3::from_expr(&v2 * a), [-4.25, 10.2, -19.38]);
    assert_vec_close(Vector3::from_expr(a * &v2), [-4.25, 10.2, -19.38]);
}

#[test]
fn test_mul_assign() {
    let mut v = Vector3::new(-2.5, 4.56, 1000.8);
    v *= 1.1;
    assert_vec_close(v, [-2.75, 5.016, 1100.88]);

    v *= -2.32;
    assert_vec_close(v, [6.38, -11.63712, -2554.0416]);
}

#[test]
fn test_scalar_division() {
    let v = Vector3::new(-2.5, 28.0, 10008.0);
    assert_vec_close(Vector3::from_expr(&v / 0.2), [-12.5, 140.0, 50040.0]);

    let v = Vector3::new(-2.4, -7.2, 15.36);
    assert_vec_close(Vector3::from_expr(&v / -2.4), [1.0, 3.0, -6.4]);
}

#[test]
fn test_div_assign() {
    let mut v = Vector3::new(-2.5, 28.0, 10008.0);
    v /= 0.2;
    assert_vec_close(v, [-12.5, 140.0, 50040.0]);

    v.load(-2.4, -7.2, 15.36);
    v /= -2.4;
    assert_vec_close(v, [1.0, 3.0, -6.4]);
}

#[test]
fn test_division_by_negligible_scalar() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    assert!(matches!(
        (&v).checked_div(f64::EPSILON),
        Err(VectorError::DivisionByZero { .. })
    ));
    assert!((&v).checked_div(2.0 * f64::EPSILON).is_ok());

    let mut w = v;
    assert!(w.try_div_assign(0.0).is_err());
    assert_eq!(w, v);
}

#[test]
#[should_panic(expected = "Division by zero")]
fn test_division_by_zero_panics() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    v /= 0.0;
}

#[test]
fn test_element_wise_product() {
    let v2 = Vector3::new(1.0, 2.0, 3.0);
    let v3 = Vector3::new(3.0, -2.0, 1.0);
    assert_eq!(
        Vector3::from_expr(vecly::elem_prod(&v2, &v3)),
        Vector3::new(3.0, -4.0, 3.0)
    );
    assert_eq!(
        Vector3::from_expr(v2.elem_prod(&v3)),
        Vector3::new(3.0, -4.0, 3.0)
    );
}

#[test]
fn test_element_wise_division() {
    let v2 = Vector3::new(1.0, 2.0, 3.0);
    let v3 = Vector3::new(1.0, -2.0, 3.0);
    assert_eq!(Vector3::from_expr(&v2 / &v3), Vector3::new(1.0, -1.0, 1.0));

    let v2 = Vector3::new(2.0, 1.0, 6.6);
    assert_eq!(
        Vector3::from_expr(&v2 / &v3),
        Vector3::new(2.0, -0.5, 6.6 / 3.0)
    );
}

#[test]
fn test_element_wise_div_assign() {
    let mut v2 = Vector3::new(1.0, 2.0, 3.0);
    let v3 = Vector3::new(1.0, -2.0, 3.0);
    v2 /= &v3;
    assert_eq!(v2, Vector3::new(1.0, -1.0, 1.0));

    v2.load(2.0, 1.0, 6.6);
    v2 /= &v3;
    assert_eq!(v2, Vector3::new(2.0, -0.5, 6.6 / 3.0));
}

#[test]
fn test_sum_reduction() {
    let mut v = Vector3::splat(1.0);
    assert_eq!(sum(&v), 3.0);

    v.load(1.1, 2.2, -4.4);
    assert_close(v.sum(), -1.1);
}

#[test]
fn test_dot() {
    let mut v1 = Vector3::splat(1.0);
    let mut v2 = Vector3::splat(2.0);
    assert_eq!(&v1 * &v2, 6.0);

    v1.load(1.4, 1.0, -10.0);
    v2.load(2.0, -5.4, -30.0);
    assert_close(dot(&v1, &v2), 297.4);
    assert_close(v1.dot(&v2), 297.4);

    v1.load(1.0, 0.0, 1.0);
    v2.load(0.0, 1.0, 0.0);
    assert_eq!(&v1 * &v2, 0.0);

    v1.load(2.0, 2.0, 2.0);
    v2.load(2.0, 2.0, 2.0);
    assert_eq!(&v1 * &v2, 12.0);
}

#[test]
fn test_cross() {
    let v2 = Vector3::splat(1.0);
    let v3 = Vector3::splat(1.0);
    assert_eq!(Vector3::from_expr(cross(&v2, &v3)), Vector3::zero());

    let v3 = Vector3::splat(-1.0);
    assert_eq!(Vector3::from_expr(&v2 ^ &v3), Vector3::zero());

    let mut v2 = Vector3::new(1.0, 0.0, 1.0);
    v2 ^= &Vector3::new(0.0, 1.0, 0.0);
    assert_eq!(v2, Vector3::new(-1.0, 0.0, 1.0));

    let mut v2 = Vector3::new(10.0, 0.5, -2.0);
    v2 ^= &Vector3::new(2.2, 0.5, 0.0);
    assert_vec_close(v2, [1.0, -4.4, 3.9]);

    let v2 = Vector3::new(10.0, -100.0, 100.0);
    let v3 = Vector3::new(2.2, -100.0, 100.0);
    assert_eq!(
        Vector3::from_expr(v2.cross(&v3)),
        Vector3::new(0.0, -780.0, -780.0)
    );

    let x = Vector3::new(1.0, 0.0, 0.0);
    let y = Vector3::new(0.0, 1.0, 0.0);
    assert_eq!(Vector3::from_expr(&x ^ &y), Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn test_norm() {
    let mut v = Vector3::new(1.0, 2.0, -2.0);
    assert_eq!(v.norm(), 3.0);

    v.load(-10.0, 2.5, 2.0);
    assert_eq!(norm(&v), 10.5);

    v.load(14.0, -14.0, 0.0);
    assert_close(norm(&v), 14.0 * 2f64.sqrt());

    v.load(0.0, -2.0, 33.0);
    assert_eq!(norm(&v), 1093f64.sqrt());

    v.load(1.0, 0.0, 4.0);
    assert_eq!(norm(&v), 17f64.sqrt());

    assert_eq!(norm(&Vector3::new(3.0, 4.0, 0.0)), 5.0);
}

#[test]
fn test_squared_norm() {
    let mut v = Vector3::new(1.0, 2.0, -2.0);
    assert_eq!(v.norm2(), 9.0);

    v.load(-10.0, 2.5, 2.0);
    assert_eq!(norm2(&v), 110.25);

    v.load(0.0, -2.0, 33.0);
    assert_eq!(norm2(&v), 1093.0);

    v.load(1.0, 0.0, 4.0);
    assert_eq!(norm2(&v), 17.0);
}

#[test]
fn test_angle() {
    let v1 = Vector3::new(1.0, 0.0, 0.0);
    assert_eq!(angle(&v1, &v1), Ok(0.0));
    assert_eq!(angle(&v1, &Vector3::new(-1.0, 0.0, 0.0)), Ok(PI));

    let v1 = Vector3::new(2.0, 1.0, 1.0);
    let v2 = Vector3::new(2.0, 4.0, 5.0);
    assert_close(
        angle(&v1, &v2).unwrap(),
        (13.0 * 30f64.sqrt() / 90.0).acos(),
    );

    let v1 = Vector3::new(-3.0, 2.0, 10.0);
    let v2 = Vector3::new(10.0, 2.0, 10.0);
    assert_close(v1.angle(&v2).unwrap(), (37.0 / 5763f64.sqrt()).acos());
}

#[test]
fn test_angle_with_zero_vector() {
    let zero = Vector3::<f64>::zero();
    let v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(
        angle(&zero, &v),
        Err(VectorError::ZeroNorm { operation: "angle" })
    );
    assert!(v.angle(&zero).is_err());
}

#[test]
fn test_unit_vector() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    v.normalize();
    assert_close(norm(&v), 1.0);

    v.load(1.2, 45.0, -6.6);
    v = Vector3::from_expr(unit(&v));
    assert_close(norm(&v), 1.0);

    v.load(1.2, 45.0, -6.6);
    assert_close(norm(unit(&v)), 1.0);

    v.load(1.2, 0.0, -6.6);
    assert_close(norm(v.unit()), 1.0);
}

#[test]
fn test_unit_of_zero_vector() {
    let mut zero = Vector3::<f64>::zero();
    assert_eq!(Vector3::from_expr(zero.unit()), zero);
    assert!(zero.try_unit().is_err());

    zero.normalize();
    assert_eq!(zero, Vector3::zero());
}

#[test]
fn test_composite_operations() {
    let mut v = Vector3::new(1.0, 2.0, 3.0);
    let u = Vector3::new(1.0, 2.0, 3.0);

    v += 3.0 * &u - &u * 5.0;
    v -= 3.0 * &u - &u * 5.0;
    v *= 3.0 * &u * &u * 5.0;
    v /= 3.0 * &u * &u * 5.0;

    assert_eq!(u, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

    v = Vector3::from_expr(-&v);
    assert_eq!(v.z, -3.0);
}

#[test]
fn test_display() {
    let v = Vector3::new(1.0, 2.5, -3.0);
    assert_eq!(v.to_string(), "(1,2.5,-3)");
    assert_eq!(Vector3::new(1, 2, 3).to_string(), "(1,2,3)");
}

#[test]
fn test_generic_element_types() {
    let a = Vector3::new(1.5f32, -2.0, 4.0);
    let b = Vector3::new(2.0f32, 0.5, 1.0);
    assert_eq!(&a * &b, 6.0f32);
    assert_eq!(Vector3::from_expr(&a * 2.0f32), Vector3::new(3.0, -4.0, 8.0));

    let i = Vector3::new(1i64, 2, 3);
    let j = Vector3::new(4i64, 5, 6);
    assert_eq!(Vector3::from_expr(&i ^ &j), Vector3::new(-3, 6, -3));

    let wide: Vector3<f64> = Vector3::new(1i32, 2, 3).convert();
    assert_eq!(wide, Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(i.map(|c| c * 10), Vector3::new(10, 20, 30));
}
