//! Finite-field arithmetic and a brute-force Reed-Solomon decoder
//!
//! - [`modular`]: extended Euclid, modular inverse, fast exponentiation, totient
//! - [`field`]: the prime field GF(p) every other type is parameterized by
//! - [`polynomial`]: polynomials over GF(p) and Lagrange interpolation
//! - [`codeword`]: encoding and error injection for simulations
//! - [`reed_solomon`]: candidate search and decoding

pub mod codeword;
pub mod config;
pub mod error;
pub mod field;
pub mod modular;
pub mod polynomial;
pub mod reed_solomon;

pub use codeword::{encode, encode_message, inject_errors, Codeword};
pub use config::DecoderConfig;
pub use error::{ConfigError, RsError, RsResult};
pub use field::PrimeField;
pub use polynomial::{interpolate, FieldPolynomial, Point};
pub use reed_solomon::{decode, DecodeParams, DecodeResult, FailureReason, ReedSolomonDecoder};
