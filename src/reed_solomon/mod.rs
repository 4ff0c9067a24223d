//! Reed-Solomon Error Correction Module
//!
//! Brute-force decoding of codewords produced by evaluating a low-degree
//! polynomial over a prime field. The decoder searches index subsets of the
//! received codeword, interpolates each with Lagrange's formula, and accepts
//! the first polynomial that a strict majority of the redundant symbols
//! agree with.

pub mod candidates;
pub mod decoder;
pub mod types;

pub use candidates::{binomial, CandidateIndexSet, CandidateIndices};
pub use decoder::{decode, ReedSolomonDecoder};
pub use types::{default_match_threshold, DecodeParams, DecodeResult, DecodeState, FailureReason};
