//! Integer modular arithmetic
//!
//! Number-theoretic primitives shared by the prime field and by any consumer
//! that needs raw modular inverses or exponentiation (for example a key
//! management layer working modulo a composite).

use crate::error::{ConfigError, RsError, RsResult};

/// Largest modulus accepted by the modular routines
///
/// Bézout coefficients are signed, so the modulus has to fit in an `i64`.
pub const MAX_MODULUS: u64 = i64::MAX as u64;

/// Greatest common divisor by Euclid's algorithm
///
/// `gcd(0, 0)` is defined as 0.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean algorithm
///
/// Returns `(g, x, y)` with `a·x + b·y = g = gcd(a, b)`.
///
/// The running remainders must decrease monotonically, so the arguments
/// have to satisfy `a >= b >= 0`; anything else is rejected with
/// [`ConfigError::GcdArgumentOrder`] rather than returning a mis-signed pair.
pub fn extended_gcd(a: i64, b: i64) -> RsResult<(i64, i64, i64)> {
    if b < 0 || a < b {
        return Err(ConfigError::GcdArgumentOrder { a, b }.into());
    }

    // Only the last two rows of the remainder sequence are kept
    let (mut r0, mut r1) = (a as i128, b as i128);
    let (mut x0, mut x1) = (1i128, 0i128);
    let (mut y0, mut y1) = (0i128, 1i128);

    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (x0, x1) = (x1, x0 - q * x1);
        (y0, y1) = (y1, y0 - q * y1);
    }

    // |x0| <= b and |y0| <= a, both of which fit in i64
    Ok((r0 as i64, x0 as i64, y0 as i64))
}

/// Multiplicative inverse of `a` modulo `modulus`, normalized into `[0, modulus)`
///
/// Derived from `extended_gcd(modulus, a mod modulus)`. Fails with
/// [`RsError::NotInvertible`] when `gcd(a, modulus) != 1`.
pub fn mod_inverse(a: u64, modulus: u64) -> RsResult<u64> {
    if !(2..=MAX_MODULUS).contains(&modulus) {
        return Err(ConfigError::ModulusOutOfRange(modulus).into());
    }

    let reduced = a % modulus;
    let (g, _, y) = extended_gcd(modulus as i64, reduced as i64)?;
    if g != 1 {
        return Err(RsError::NotInvertible { value: a, modulus });
    }

    Ok(y.rem_euclid(modulus as i64) as u64)
}

/// Computes `base^exp mod modulus` by square-and-multiply
///
/// Walks the binary expansion of `exp` from the least significant bit, so
/// the cost is O(log exp) modular multiplications.
pub fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> RsResult<u64> {
    if modulus == 0 {
        return Err(ConfigError::ModulusOutOfRange(modulus).into());
    }

    let m = modulus as u128;
    let mut square = base as u128 % m;
    let mut result = 1 % m;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * square % m;
        }
        square = square * square % m;
        exp >>= 1;
    }

    Ok(result as u64)
}

/// Euler's totient: how many integers in `[1, n)` are coprime to `n`
///
/// Counts by repeated gcd, which is O(n log n). Only meant for small `n`.
/// `φ(1)` follows the usual convention and is 1; `φ(0)` is 0.
pub fn euler_totient(n: u64) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => (1..n).filter(|&k| gcd(n, k) == 1).count() as u64,
    }
}

/// Primality by trial division over 6k ± 1 candidates
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut d = 5u64;
    while d <= n / d {
        if n % d == 0 || n % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }
    true
}
