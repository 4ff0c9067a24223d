//! Polynomials over a prime field
//!
//! [`FieldPolynomial`] is an immutable value type: every operation returns a
//! new polynomial in canonical form. Coefficients are stored low-to-high
//! degree, each reduced into `[0, p)`, with no trailing zero except for the
//! zero polynomial itself which is stored as `[0]`.
//!
//! Operations between polynomials over different fields are rejected with
//! [`RsError::FieldMismatch`]; there is no implicit coercion between moduli.

pub mod lagrange;

pub use lagrange::{interpolate, Point};

use crate::error::{RsError, RsResult};
use crate::field::PrimeField;
use std::fmt;

/// Polynomial with coefficients in GF(p)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPolynomial {
    coefficients: Vec<u64>,
    field: PrimeField,
}

impl FieldPolynomial {
    /// Build a polynomial from low-to-high coefficients, reducing each one
    ///
    /// An empty coefficient list yields the zero polynomial.
    pub fn new(coefficients: Vec<u64>, field: PrimeField) -> Self {
        let mut coefficients = coefficients;
        for c in coefficients.iter_mut() {
            *c = field.reduce(*c);
        }
        Self::canonical(coefficients, field)
    }

    /// Build a polynomial from signed coefficients (`-2` becomes `p - 2`)
    pub fn from_signed(coefficients: &[i64], field: PrimeField) -> Self {
        let reduced = coefficients
            .iter()
            .map(|&c| field.reduce_signed(c))
            .collect();
        Self::canonical(reduced, field)
    }

    pub fn zero(field: PrimeField) -> Self {
        Self {
            coefficients: vec![0],
            field,
        }
    }

    pub fn constant(value: u64, field: PrimeField) -> Self {
        Self::new(vec![value], field)
    }

    /// The monic linear factor `x - root`
    pub fn linear_factor(root: u64, field: PrimeField) -> Self {
        Self::canonical(vec![field.neg(field.reduce(root)), 1], field)
    }

    /// Strip trailing zeros from already-reduced coefficients
    fn canonical(mut coefficients: Vec<u64>, field: PrimeField) -> Self {
        while coefficients.len() > 1 && coefficients.last() == Some(&0) {
            coefficients.pop();
        }
        if coefficients.is_empty() {
            coefficients.push(0);
        }
        Self {
            coefficients,
            field,
        }
    }

    #[inline]
    pub fn coefficients(&self) -> &[u64] {
        &self.coefficients
    }

    #[inline]
    pub fn field(&self) -> PrimeField {
        self.field
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficients == [0]
    }

    /// Highest power with a non-zero coefficient; `None` for the zero polynomial
    pub fn degree(&self) -> Option<usize> {
        if self.is_zero() {
            None
        } else {
            Some(self.coefficients.len() - 1)
        }
    }

    /// Coefficient of the highest power (0 for the zero polynomial)
    pub fn leading_coefficient(&self) -> u64 {
        self.coefficients.last().copied().unwrap_or(0)
    }

    fn check_field(&self, other: &Self) -> RsResult<()> {
        if self.field != other.field {
            return Err(RsError::FieldMismatch {
                left: self.field.modulus(),
                right: other.field.modulus(),
            });
        }
        Ok(())
    }

    /// Combine coefficients pairwise, padding the shorter operand with zeros
    fn zip_with(&self, other: &Self, op: impl Fn(u64, u64) -> u64) -> RsResult<Self> {
        self.check_field(other)?;
        let len = self.coefficients.len().max(other.coefficients.len());
        let combined = (0..len)
            .map(|i| {
                let a = self.coefficients.get(i).copied().unwrap_or(0);
                let b = other.coefficients.get(i).copied().unwrap_or(0);
                op(a, b)
            })
            .collect();
        Ok(Self::canonical(combined, self.field))
    }

    pub fn add(&self, other: &Self) -> RsResult<Self> {
        let field = self.field;
        self.zip_with(other, |a, b| field.add(a, b))
    }

    pub fn subtract(&self, other: &Self) -> RsResult<Self> {
        let field = self.field;
        self.zip_with(other, |a, b| field.sub(a, b))
    }

    pub fn negate(&self) -> Self {
        let negated = self
            .coefficients
            .iter()
            .map(|&c| self.field.neg(c))
            .collect();
        Self::canonical(negated, self.field)
    }

    pub fn scalar_multiply(&self, scalar: u64) -> Self {
        let scaled = self
            .coefficients
            .iter()
            .map(|&c| self.field.mul(c, scalar))
            .collect();
        Self::canonical(scaled, self.field)
    }

    /// Full convolution of the coefficient arrays, O(n·m)
    pub fn multiply(&self, other: &Self) -> RsResult<Self> {
        self.check_field(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero(self.field));
        }

        let field = self.field;
        let mut product = vec![0u64; self.coefficients.len() + other.coefficients.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coefficients.iter().enumerate() {
                product[i + j] = field.add(product[i + j], field.mul(a, b));
            }
        }
        Ok(Self::canonical(product, field))
    }

    /// Evaluate at `x` with Horner's method
    pub fn evaluate(&self, x: u64) -> u64 {
        let x = self.field.reduce(x);
        self.coefficients
            .iter()
            .rev()
            .fold(0, |acc, &c| self.field.add(self.field.mul(acc, x), c))
    }

    /// Long division: returns `(quotient, remainder)` with
    /// `self = quotient · divisor + remainder` and `deg(remainder) < deg(divisor)`
    pub fn div_rem(&self, divisor: &Self) -> RsResult<(Self, Self)> {
        self.check_field(divisor)?;
        let divisor_degree = divisor.degree().ok_or(RsError::DivisionByZero)?;
        let field = self.field;

        let Some(dividend_degree) = self.degree().filter(|&d| d >= divisor_degree) else {
            return Ok((Self::zero(field), self.clone()));
        };

        let mut remainder = self.coefficients.clone();
        let lead_inverse = field.inverse(divisor.leading_coefficient())?;
        let mut quotient = vec![0u64; dividend_degree - divisor_degree + 1];

        for shift in (0..quotient.len()).rev() {
            let factor = field.mul(remainder[shift + divisor_degree], lead_inverse);
            quotient[shift] = factor;
            if factor == 0 {
                continue;
            }
            for (i, &d) in divisor.coefficients.iter().enumerate() {
                remainder[shift + i] = field.sub(remainder[shift + i], field.mul(factor, d));
            }
        }

        Ok((
            Self::canonical(quotient, field),
            Self::canonical(remainder, field),
        ))
    }
}

impl fmt::Display for FieldPolynomial {
    /// Highest power first, e.g. `114x^2 + 111x + 83 (mod 257)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .coefficients
            .iter()
            .enumerate()
            .rev()
            .filter(|&(_, &c)| c != 0)
            .map(|(power, c)| match power {
                0 => format!("{c}"),
                1 => format!("{c}x"),
                _ => format!("{c}x^{power}"),
            })
            .collect();

        if terms.is_empty() {
            write!(f, "0 (mod {})", self.field.modulus())
        } else {
            write!(f, "{} (mod {})", terms.join(" + "), self.field.modulus())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf(p: u64) -> PrimeField {
        PrimeField::new(p).unwrap()
    }

    #[test]
    fn test_construction_reduces_and_trims() {
        let p = FieldPolynomial::new(vec![12, 0, 11, 0, 0], gf(11));
        assert_eq!(p.coefficients(), &[1]);
        assert_eq!(p.degree(), Some(0));

        let empty = FieldPolynomial::new(vec![], gf(11));
        assert!(empty.is_zero());
        assert_eq!(empty.coefficients(), &[0]);
        assert_eq!(empty.degree(), None);
    }

    #[test]
    fn test_from_signed() {
        let p = FieldPolynomial::from_signed(&[10, -2, 5], gf(11));
        assert_eq!(p.coefficients(), &[10, 9, 5]);
    }

    #[test]
    fn test_add() {
        let p1 = FieldPolynomial::new(vec![0, 2, 3, 1, 1], gf(11));
        let p2 = FieldPolynomial::new(vec![4, 10, 3], gf(11));
        let expected = FieldPolynomial::new(vec![4, 1, 6, 1, 1], gf(11));
        assert_eq!(p1.add(&p2).unwrap(), expected);
    }

    #[test]
    fn test_subtract() {
        let p1 = FieldPolynomial::new(vec![0, 2, 3, 1, 1], gf(11));
        let p2 = FieldPolynomial::new(vec![4, 10, 3], gf(11));
        let expected = FieldPolynomial::new(vec![7, 3, 0, 1, 1], gf(11));
        assert_eq!(p1.subtract(&p2).unwrap(), expected);
    }

    #[test]
    fn test_subtract_to_zero() {
        let p = FieldPolynomial::new(vec![3, 4, 5], gf(7));
        assert!(p.subtract(&p).unwrap().is_zero());
    }

    #[test]
    fn test_multiply() {
        let p1 = FieldPolynomial::new(vec![0, 5, 2, 10], gf(13));
        let p2 = FieldPolynomial::new(vec![5, 3, 1, 12], gf(13));
        let expected = FieldPolynomial::new(vec![0, 12, 12, 9, 1, 8, 3], gf(13));
        assert_eq!(p1.multiply(&p2).unwrap(), expected);
    }

    #[test]
    fn test_multiply_by_zero() {
        let p = FieldPolynomial::new(vec![1, 2, 3], gf(13));
        let zero = FieldPolynomial::zero(gf(13));
        assert!(p.multiply(&zero).unwrap().is_zero());
    }

    #[test]
    fn test_scalar_multiply() {
        let p = FieldPolynomial::new(vec![3, 0, 5], gf(7));
        assert_eq!(p.scalar_multiply(3).coefficients(), &[2, 0, 1]);
        assert!(p.scalar_multiply(7).is_zero());
    }

    #[test]
    fn test_evaluate() {
        let p = FieldPolynomial::from_signed(&[10, -2, 5], gf(11));
        assert_eq!(p.evaluate(5), 4);
        assert_eq!(FieldPolynomial::zero(gf(11)).evaluate(5), 0);
    }

    #[test]
    fn test_field_mismatch() {
        let p1 = FieldPolynomial::new(vec![1, 2], gf(7));
        let p2 = FieldPolynomial::new(vec![1, 2], gf(11));
        assert_eq!(
            p1.add(&p2),
            Err(RsError::FieldMismatch { left: 7, right: 11 })
        );
        assert!(p1.multiply(&p2).is_err());
    }

    #[test]
    fn test_div_rem() {
        // (x^4 - x^3 - x^2 - 2x - 3) / (x + 1) over GF(13)
        let dividend = FieldPolynomial::from_signed(&[-3, -2, -1, -1, 1], gf(13));
        let divisor = FieldPolynomial::from_signed(&[1, 1], gf(13));
        let (q, r) = dividend.div_rem(&divisor).unwrap();

        let rebuilt = q.multiply(&divisor).unwrap().add(&r).unwrap();
        assert_eq!(rebuilt, dividend);
        assert_eq!(q.degree(), Some(3));
        // -1 is a root of the dividend
        assert!(r.is_zero());
    }

    #[test]
    fn test_div_rem_smaller_dividend() {
        let dividend = FieldPolynomial::new(vec![1, 2], gf(7));
        let divisor = FieldPolynomial::new(vec![1, 2, 3], gf(7));
        let (q, r) = dividend.div_rem(&divisor).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, dividend);
    }

    #[test]
    fn test_div_by_zero() {
        let p = FieldPolynomial::new(vec![1, 2], gf(7));
        assert_eq!(
            p.div_rem(&FieldPolynomial::zero(gf(7))),
            Err(RsError::DivisionByZero)
        );
    }

    #[test]
    fn test_display() {
        let p = FieldPolynomial::new(vec![83, 1, 114], gf(257));
        assert_eq!(p.to_string(), "114x^2 + 1x + 83 (mod 257)");
        assert_eq!(FieldPolynomial::zero(gf(257)).to_string(), "0 (mod 257)");
    }
}
