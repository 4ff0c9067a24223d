//! Prime field GF(p)
//!
//! A [`PrimeField`] is the validated modulus every polynomial, codeword and
//! decoder in this crate is parameterized by. It is `Copy` and created once,
//! so there is no process-wide modulus to share or mutate.
//!
//! Field elements are plain `u64` values in `[0, p)`. Products are widened
//! to `u128` before reduction so any modulus up to [`MAX_MODULUS`] is safe.

use crate::error::{ConfigError, RsResult};
use crate::modular::{self, MAX_MODULUS};
use std::fmt;

/// The integers modulo a prime `p`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: u64,
}

impl PrimeField {
    /// Field for byte-valued symbols
    pub const GF257: PrimeField = PrimeField { modulus: 257 };

    /// Create a field, checking that `modulus` is a supported prime
    pub fn new(modulus: u64) -> RsResult<Self> {
        if !(2..=MAX_MODULUS).contains(&modulus) {
            return Err(ConfigError::ModulusOutOfRange(modulus).into());
        }
        if !modular::is_prime(modulus) {
            return Err(ConfigError::NotPrime(modulus).into());
        }
        Ok(Self { modulus })
    }

    #[inline]
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    #[inline]
    pub const fn contains(&self, value: u64) -> bool {
        value < self.modulus
    }

    #[inline]
    pub const fn reduce(&self, value: u64) -> u64 {
        value % self.modulus
    }

    /// Reduce a signed integer with a Euclidean remainder (`-1` maps to `p - 1`)
    #[inline]
    pub fn reduce_signed(&self, value: i64) -> u64 {
        (value as i128).rem_euclid(self.modulus as i128) as u64
    }

    #[inline]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        ((a as u128 + b as u128) % self.modulus as u128) as u64
    }

    #[inline]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        let p = self.modulus as u128;
        ((a as u128 % p + p - b as u128 % p) % p) as u64
    }

    #[inline]
    pub fn neg(&self, a: u64) -> u64 {
        self.sub(0, a)
    }

    #[inline]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        ((a as u128 * b as u128) % self.modulus as u128) as u64
    }

    pub fn pow(&self, base: u64, exp: u64) -> u64 {
        // The modulus is validated non-zero, so this cannot fail
        modular::mod_pow(base, exp, self.modulus).unwrap_or_default()
    }

    /// Multiplicative inverse; fails with `NotInvertible` for zero
    pub fn inverse(&self, a: u64) -> RsResult<u64> {
        modular::mod_inverse(a, self.modulus)
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({})", self.modulus)
    }
}
