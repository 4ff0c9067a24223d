//! Error types for finite-field arithmetic and Reed-Solomon decoding

use thiserror::Error;

/// Caller-supplied parameters that can never produce a valid computation
///
/// These are always raised before any search or arithmetic begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Extended Euclid needs its running remainders to decrease
    #[error("extended_gcd requires a >= b >= 0, got a = {a}, b = {b}")]
    GcdArgumentOrder { a: i64, b: i64 },

    /// Modulus is zero, one, or too wide for signed Bézout coefficients
    #[error("modulus {0} is outside the supported range")]
    ModulusOutOfRange(u64),

    /// Modulus is composite
    #[error("modulus {0} is not prime")]
    NotPrime(u64),

    /// Message length of zero
    #[error("message length must be positive")]
    EmptyMessage,

    /// More message symbols than codeword positions
    #[error("message length {message_len} exceeds codeword length {codeword_len}")]
    MessageTooLong {
        message_len: usize,
        codeword_len: usize,
    },

    /// Evaluation positions would wrap around the field
    #[error("codeword length {codeword_len} exceeds the {modulus} elements of the field")]
    CodewordTooLong { codeword_len: usize, modulus: u64 },

    /// Trust boundary past the end of the codeword
    #[error("trust boundary {boundary} is outside [0, {codeword_len}]")]
    TrustBoundaryOutOfRange { boundary: usize, codeword_len: usize },

    /// The trusted suffix alone is longer than a candidate
    #[error(
        "trust boundary {boundary} fixes {trusted} positions but candidates only hold {size}"
    )]
    InvalidFreeSlots {
        boundary: usize,
        trusted: usize,
        size: usize,
    },

    /// Threshold can never be reached
    #[error("match threshold {threshold} exceeds codeword length {codeword_len}")]
    ThresholdTooLarge {
        threshold: usize,
        codeword_len: usize,
    },

    /// Not enough distinct positions to corrupt
    #[error("cannot inject {amount} errors into {available} positions")]
    TooManyErrors { amount: usize, available: usize },

    /// Error boundary past the end of the codeword
    #[error("error boundary {boundary} is outside a codeword of length {codeword_len}")]
    ErrorBoundaryOutOfRange { boundary: usize, codeword_len: usize },

    /// Symbol is not a field element
    #[error("symbol {value} at position {position} is not an element of GF({modulus})")]
    SymbolOutOfRange {
        position: usize,
        value: u64,
        modulus: u64,
    },
}

/// Errors raised by modular arithmetic, polynomial algebra and decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// Malformed parameters
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// No multiplicative inverse exists
    #[error("{value} is not invertible modulo {modulus}")]
    NotInvertible { value: u64, modulus: u64 },

    /// Two interpolation points share an index
    #[error("duplicate interpolation index {0}")]
    DuplicateIndex(u64),

    /// Polynomial operands live in different fields
    #[error("polynomials over different fields (mod {left} and mod {right})")]
    FieldMismatch { left: u64, right: u64 },

    /// Division by the zero polynomial
    #[error("division by the zero polynomial")]
    DivisionByZero,
}

/// Type alias for Result with RsError
pub type RsResult<T> = std::result::Result<T, RsError>;
