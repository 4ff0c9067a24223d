//! Codeword construction and fault simulation
//!
//! A codeword is a secret polynomial of degree < K evaluated at the
//! positions `0..N`. The `N - K` extra symbols are the redundancy the
//! decoder uses to outvote corrupted positions.

use crate::error::{ConfigError, RsResult};
use crate::field::PrimeField;
use crate::polynomial::{interpolate, FieldPolynomial, Point};
use rand::seq::index;
use rand::Rng;

/// A sequence of field elements indexed by evaluation position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codeword {
    symbols: Vec<u64>,
    field: PrimeField,
}

impl Codeword {
    /// Wrap received symbols, checking each one is a field element
    pub fn new(symbols: Vec<u64>, field: PrimeField) -> RsResult<Self> {
        check_length(symbols.len(), field)?;
        if let Some((position, &value)) = symbols
            .iter()
            .enumerate()
            .find(|&(_, &value)| !field.contains(value))
        {
            return Err(ConfigError::SymbolOutOfRange {
                position,
                value,
                modulus: field.modulus(),
            }
            .into());
        }
        Ok(Self { symbols, field })
    }

    #[inline]
    pub fn symbols(&self) -> &[u64] {
        &self.symbols
    }

    #[inline]
    pub fn field(&self) -> PrimeField {
        self.field
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol at `position` as an interpolation point
    #[inline]
    pub fn point(&self, position: usize) -> Point {
        Point::new(position as u64, self.symbols[position])
    }

    /// Number of positions where `polynomial` reproduces the received symbol
    pub fn matches(&self, polynomial: &FieldPolynomial) -> usize {
        self.symbols
            .iter()
            .enumerate()
            .filter(|&(position, &symbol)| polynomial.evaluate(position as u64) == symbol)
            .count()
    }
}

/// Positions `0..N` must be distinct field elements
fn check_length(codeword_len: usize, field: PrimeField) -> RsResult<()> {
    if codeword_len as u128 > field.modulus() as u128 {
        return Err(ConfigError::CodewordTooLong {
            codeword_len,
            modulus: field.modulus(),
        }
        .into());
    }
    Ok(())
}

/// Evaluate `polynomial` at positions `0..len`
pub fn encode(polynomial: &FieldPolynomial, len: usize) -> RsResult<Codeword> {
    let field = polynomial.field();
    check_length(len, field)?;
    let symbols = (0..len as u64).map(|x| polynomial.evaluate(x)).collect();
    Ok(Codeword { symbols, field })
}

/// Systematic encoding: the first `message.len()` symbols are the message
///
/// Interpolates the unique polynomial of degree < K through `(i, message[i])`
/// and evaluates it at `0..len`.
pub fn encode_message(message: &[u64], len: usize, field: PrimeField) -> RsResult<Codeword> {
    if message.is_empty() {
        return Err(ConfigError::EmptyMessage.into());
    }
    if message.len() > len {
        return Err(ConfigError::MessageTooLong {
            message_len: message.len(),
            codeword_len: len,
        }
        .into());
    }

    let message = Codeword::new(message.to_vec(), field)?;
    let points: Vec<Point> = (0..message.len()).map(|i| message.point(i)).collect();
    let polynomial = interpolate(&points, field)?;
    encode(&polynomial, len)
}

/// Corrupt `amount` distinct positions in `[0, boundary]`
///
/// Returns a new codeword; the input is left untouched. Every chosen
/// position receives a random field element different from its original
/// symbol, so exactly `amount` symbols change.
pub fn inject_errors<R: Rng + ?Sized>(
    codeword: &Codeword,
    amount: usize,
    boundary: usize,
    rng: &mut R,
) -> RsResult<Codeword> {
    if boundary >= codeword.len() {
        return Err(ConfigError::ErrorBoundaryOutOfRange {
            boundary,
            codeword_len: codeword.len(),
        }
        .into());
    }
    let available = boundary + 1;
    if amount > available {
        return Err(ConfigError::TooManyErrors { amount, available }.into());
    }

    let field = codeword.field;
    let mut symbols = codeword.symbols.clone();
    for position in index::sample(rng, available, amount).iter() {
        let offset = rng.random_range(1..field.modulus());
        symbols[position] = field.add(symbols[position], offset);
    }

    Ok(Codeword { symbols, field })
}
