//! Lagrange interpolation over GF(p)

use super::FieldPolynomial;
use crate::error::{RsError, RsResult};
use crate::field::PrimeField;
use rustc_hash::FxHashSet as HashSet;

/// A sample `(index, value)` of a polynomial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub index: u64,
    pub value: u64,
}

impl Point {
    pub const fn new(index: u64, value: u64) -> Self {
        Self { index, value }
    }
}

/// Build the unique polynomial of degree < k through k points
///
/// For every point `i` the basis numerator `Π_{j≠i}(x − x_j)` is scaled by
/// `y_i / Π_{j≠i}(x_i − x_j)` and the scaled bases are summed. Indices are
/// compared modulo p; two points sharing an index fail with
/// [`RsError::DuplicateIndex`] before any division happens.
///
/// Cost is O(k³). An empty point set interpolates to the zero polynomial.
pub fn interpolate(points: &[Point], field: PrimeField) -> RsResult<FieldPolynomial> {
    let xs: Vec<u64> = points.iter().map(|p| field.reduce(p.index)).collect();

    let mut seen = HashSet::default();
    for (point, &x) in points.iter().zip(&xs) {
        if !seen.insert(x) {
            return Err(RsError::DuplicateIndex(point.index));
        }
    }

    let mut result = FieldPolynomial::zero(field);
    for (i, point) in points.iter().enumerate() {
        let y = field.reduce(point.value);
        if y == 0 {
            continue;
        }

        let mut numerator = FieldPolynomial::constant(1, field);
        let mut denominator = 1u64;
        for (j, &xj) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = numerator.multiply(&FieldPolynomial::linear_factor(xj, field))?;
            denominator = field.mul(denominator, field.sub(xs[i], xj));
        }

        let scale = field.mul(y, field.inverse(denominator)?);
        result = result.add(&numerator.scalar_multiply(scale))?;
    }

    Ok(result)
}
