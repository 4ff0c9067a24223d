//! Candidate index generator
//!
//! Enumerates the index sets the decoder interpolates from. Positions at or
//! after the trust boundary `b` are assumed correct, so every candidate ends
//! with the trusted suffix `b..N` unchanged and only the leading
//! `f = k - (N - b)` slots vary, walking every size-`f` combination of
//! `[0, b)` in lexicographic order.
//!
//! ```text
//! N = 25, k = 10, b = 20
//!
//!        -- varying --   ------ trusted ------
//! it0:  {0, 1, 2, 3, 4,  20, 21, 22, 23, 24}
//! it1:  {0, 1, 2, 3, 5,  20, 21, 22, 23, 24}
//! it2:  {0, 1, 2, 3, 6,  20, 21, 22, 23, 24}
//! ...
//! ```
//!
//! The generator is lazy and carries only the current combination, so the
//! C(b, f) candidates are never materialized.

use crate::error::{ConfigError, RsResult};
use smallvec::SmallVec;
use std::iter::FusedIterator;

/// Indices of one candidate, inline for typical message lengths
pub type CandidateIndexSet = SmallVec<[usize; 32]>;

/// Lexicographic walk over candidate index sets
#[derive(Debug, Clone)]
pub struct CandidateIndices {
    codeword_len: usize,
    size: usize,
    trust_boundary: usize,
    /// Current combination of the free slots, strictly increasing
    combination: SmallVec<[usize; 32]>,
    exhausted: bool,
}

impl CandidateIndices {
    /// Create a generator for candidates of `size` indices out of `codeword_len`
    ///
    /// Requires `0 <= f <= b` where `f = size - (codeword_len - trust_boundary)`.
    pub fn new(codeword_len: usize, size: usize, trust_boundary: usize) -> RsResult<Self> {
        if size == 0 {
            return Err(ConfigError::EmptyMessage.into());
        }
        if size > codeword_len {
            return Err(ConfigError::MessageTooLong {
                message_len: size,
                codeword_len,
            }
            .into());
        }
        if trust_boundary > codeword_len {
            return Err(ConfigError::TrustBoundaryOutOfRange {
                boundary: trust_boundary,
                codeword_len,
            }
            .into());
        }

        let trusted = codeword_len - trust_boundary;
        if trusted > size || size - trusted > trust_boundary {
            return Err(ConfigError::InvalidFreeSlots {
                boundary: trust_boundary,
                trusted,
                size,
            }
            .into());
        }

        let mut generator = Self {
            codeword_len,
            size,
            trust_boundary,
            combination: SmallVec::new(),
            exhausted: false,
        };
        generator.reset();
        Ok(generator)
    }

    /// Number of leading slots that vary between candidates
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.size - (self.codeword_len - self.trust_boundary)
    }

    #[inline]
    pub fn candidate_size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn trust_boundary(&self) -> usize {
        self.trust_boundary
    }

    /// Total number of candidates, C(b, f), saturating at `u128::MAX`
    pub fn total(&self) -> u128 {
        binomial(self.trust_boundary as u128, self.free_slots() as u128)
    }

    #[inline]
    pub fn has_next(&self) -> bool {
        !self.exhausted
    }

    /// Restart the enumeration from the first combination
    pub fn reset(&mut self) {
        self.combination = (0..self.free_slots()).collect();
        self.exhausted = false;
    }

    fn current(&self) -> CandidateIndexSet {
        let mut indices = CandidateIndexSet::with_capacity(self.size);
        indices.extend_from_slice(&self.combination);
        indices.extend(self.trust_boundary..self.codeword_len);
        indices
    }

    /// Step to the next combination in lexicographic order
    fn advance(&mut self) {
        let free = self.combination.len();
        let n = self.trust_boundary;

        // Rightmost slot that can still move up
        let Some(slot) = (0..free).rev().find(|&i| self.combination[i] < n - free + i) else {
            self.exhausted = true;
            return;
        };

        self.combination[slot] += 1;
        for i in slot + 1..free {
            self.combination[i] = self.combination[i - 1] + 1;
        }
    }
}

impl Iterator for CandidateIndices {
    type Item = CandidateIndexSet;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let indices = self.current();
        self.advance();
        Some(indices)
    }
}

impl FusedIterator for CandidateIndices {}

/// C(n, k) by the multiplicative formula, saturating on overflow
pub fn binomial(n: u128, k: u128) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // result * (n - i) is always divisible by (i + 1)
        result = match result.checked_mul(n - i) {
            Some(product) => product / (i + 1),
            None => return u128::MAX,
        };
    }
    result
}
