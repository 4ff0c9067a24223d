//! Types and structures for Reed-Solomon decoding

use crate::error::{ConfigError, RsResult};
use crate::polynomial::FieldPolynomial;

/// Per-call decoding parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeParams {
    /// Message length K (number of points per candidate)
    pub message_len: usize,
    /// Positions at or after this index are assumed correct
    pub trust_boundary: usize,
    /// Minimum number of agreeing positions; `None` uses the strict majority default
    pub match_threshold: Option<usize>,
}

impl DecodeParams {
    pub fn new(message_len: usize, trust_boundary: usize) -> Self {
        Self {
            message_len,
            trust_boundary,
            match_threshold: None,
        }
    }

    /// Parameters with no trusted suffix: every K-subset of the codeword is tried
    pub fn untrusted(message_len: usize, codeword_len: usize) -> Self {
        Self::new(message_len, codeword_len)
    }

    pub fn with_match_threshold(mut self, threshold: usize) -> Self {
        self.match_threshold = Some(threshold);
        self
    }

    /// Threshold for a codeword of `codeword_len` symbols, validated against it
    pub fn resolve_threshold(&self, codeword_len: usize) -> RsResult<usize> {
        let threshold = self
            .match_threshold
            .unwrap_or_else(|| default_match_threshold(self.message_len, codeword_len));
        if threshold > codeword_len {
            return Err(ConfigError::ThresholdTooLarge {
                threshold,
                codeword_len,
            }
            .into());
        }
        Ok(threshold)
    }
}

/// `K + ⌈R/2⌉`: the message positions plus a strict majority of the redundancy
pub fn default_match_threshold(message_len: usize, codeword_len: usize) -> usize {
    let redundancy = codeword_len.saturating_sub(message_len);
    message_len + redundancy.div_ceil(2)
}

/// Search state of a single decode call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    Searching,
    Accepted,
    Exhausted,
}

impl DecodeState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, DecodeState::Searching)
    }
}

/// Why a decode produced no polynomial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// Every candidate was tried and none reached the match threshold
    NoConsensus {
        candidates_examined: usize,
        best_matches: usize,
    },
}

/// Outcome of a decode call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeResult {
    Corrected {
        polynomial: FieldPolynomial,
        /// The polynomial evaluated at `0..K`
        message: Vec<u64>,
        /// Positions of the received codeword the polynomial reproduces
        matches: usize,
    },
    Failed { reason: FailureReason },
}

impl DecodeResult {
    pub fn is_corrected(&self) -> bool {
        matches!(self, DecodeResult::Corrected { .. })
    }

    pub fn state(&self) -> DecodeState {
        match self {
            DecodeResult::Corrected { .. } => DecodeState::Accepted,
            DecodeResult::Failed { .. } => DecodeState::Exhausted,
        }
    }

    pub fn polynomial(&self) -> Option<&FieldPolynomial> {
        match self {
            DecodeResult::Corrected { polynomial, .. } => Some(polynomial),
            DecodeResult::Failed { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&[u64]> {
        match self {
            DecodeResult::Corrected { message, .. } => Some(message.as_slice()),
            DecodeResult::Failed { .. } => None,
        }
    }
}
