//! Polynomial Arithmetic Tests
//!
//! Tests for polynomials over GF(p) and Lagrange interpolation.

use rsbrute::{interpolate, FieldPolynomial, Point, PrimeField, RsError};

fn gf(p: u64) -> PrimeField {
    PrimeField::new(p).unwrap()
}

// ============================================================================
// Ring operations
// ============================================================================

#[test]
fn test_add_then_subtract_round_trips() {
    let field = gf(257);
    let a = FieldPolynomial::new(vec![200, 100, 0, 256], field);
    let b = FieldPolynomial::new(vec![100, 200, 5], field);

    let sum = a.add(&b).unwrap();
    assert_eq!(sum.coefficients(), &[43, 43, 5, 256]);
    assert_eq!(sum.subtract(&b).unwrap(), a);
}

#[test]
fn test_negate_is_additive_inverse() {
    let field = gf(13);
    let a = FieldPolynomial::new(vec![1, 0, 12, 7], field);
    assert!(a.add(&a.negate()).unwrap().is_zero());
}

#[test]
fn test_multiply_distributes_over_add() {
    let field = gf(31);
    let a = FieldPolynomial::new(vec![3, 1, 4], field);
    let b = FieldPolynomial::new(vec![1, 5, 9, 2], field);
    let c = FieldPolynomial::new(vec![6, 5], field);

    let left = a.multiply(&b.add(&c).unwrap()).unwrap();
    let right = a.multiply(&b).unwrap().add(&a.multiply(&c).unwrap()).unwrap();
    assert_eq!(left, right);
}

#[test]
fn test_multiply_degrees_add() {
    let field = gf(7);
    let a = FieldPolynomial::new(vec![1, 1], field);
    let b = FieldPolynomial::new(vec![6, 0, 1], field);
    assert_eq!(a.multiply(&b).unwrap().degree(), Some(3));
}

#[test]
fn test_evaluate_matches_direct_sum() {
    let field = gf(257);
    let p = FieldPolynomial::new(vec![83, 111, 114], field);
    for x in 0..20u64 {
        let direct = (83 + 111 * x + 114 * x * x) % 257;
        assert_eq!(p.evaluate(x), direct);
    }
}

#[test]
fn test_linear_factor_has_root() {
    let field = gf(11);
    let factor = FieldPolynomial::linear_factor(4, field);
    assert_eq!(factor.coefficients(), &[7, 1]);
    assert_eq!(factor.evaluate(4), 0);
}

#[test]
fn test_div_rem_by_linear_factor_is_exact_at_root() {
    let field = gf(257);
    let p = FieldPolynomial::new(vec![5, 0, 3, 1], field);
    let root = 9;
    let shifted = p
        .subtract(&FieldPolynomial::constant(p.evaluate(root), field))
        .unwrap();

    let (q, r) = shifted
        .div_rem(&FieldPolynomial::linear_factor(root, field))
        .unwrap();
    assert!(r.is_zero());
    assert_eq!(q.degree(), Some(2));
}

// ============================================================================
// Lagrange interpolation
// ============================================================================

#[test]
fn test_interpolation_through_sor() {
    let field = gf(257);
    let points = [Point::new(0, 83), Point::new(1, 111), Point::new(2, 114)];
    let p = interpolate(&points, field).unwrap();

    assert!(p.degree().unwrap() < 3);
    for point in points {
        assert_eq!(p.evaluate(point.index), point.value);
    }
}

#[test]
fn test_interpolation_reduces_out_of_range_values() {
    let field = gf(7);
    let raw = interpolate(&[Point::new(0, 10), Point::new(1, 15)], field).unwrap();
    let reduced = interpolate(&[Point::new(0, 3), Point::new(1, 1)], field).unwrap();
    assert_eq!(raw, reduced);
}

#[test]
fn test_interpolation_duplicate_index_is_reported() {
    let field = gf(257);
    let points = [Point::new(3, 1), Point::new(3, 2)];
    assert_eq!(interpolate(&points, field), Err(RsError::DuplicateIndex(3)));
}
