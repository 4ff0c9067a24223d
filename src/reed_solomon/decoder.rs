//! Brute-force Reed-Solomon decoder
//!
//! ## Algorithm
//!
//! For each candidate index set produced by [`CandidateIndices`], the decoder
//! interpolates the polynomial through the received symbols at those
//! positions, re-evaluates it at every position `0..N` and counts how many
//! received symbols it reproduces. The first candidate reaching the match
//! threshold is accepted.
//!
//! With at most `⌊R/2⌋` errors, the true polynomial reproduces at least
//! `K + ⌈R/2⌉` symbols while any other polynomial of degree < K reproduces
//! at most `K - 1 + ⌊R/2⌋`, so the default threshold only ever accepts the
//! true polynomial. Beyond that radius the decoder may report `NoConsensus`
//! or accept a wrong polynomial.
//!
//! ## Cost
//!
//! C(b, f) candidates, each an O(K³) interpolation plus O(N·K) evaluation.
//! This is an exhaustive search, not a syndrome decoder; the trust boundary
//! is the only pruning.
//!
//! ## Parallel search
//!
//! Candidates are independent, so with [`DecoderConfig::parallel`] the stream
//! is bridged into a rayon pool and the first worker to accept wins. Any
//! accepting candidate within the correction radius yields the same
//! polynomial, so only latency changes.

use super::candidates::{CandidateIndexSet, CandidateIndices};
use super::types::{DecodeParams, DecodeResult, DecodeState, FailureReason};
use crate::codeword::Codeword;
use crate::config::DecoderConfig;
use crate::error::RsResult;
use crate::polynomial::{interpolate, FieldPolynomial, Point};
use log::{debug, trace, warn};
use rayon::prelude::*;
use smallvec::SmallVec;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A candidate that reached the match threshold
struct Accepted {
    polynomial: FieldPolynomial,
    indices: CandidateIndexSet,
    matches: usize,
}

/// Brute-force decoder over a prime field
#[derive(Debug, Clone, Default)]
pub struct ReedSolomonDecoder {
    config: DecoderConfig,
}

impl ReedSolomonDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Recover the polynomial behind a possibly corrupted codeword
    ///
    /// Parameter problems are reported as `Err` before the search starts.
    /// Failing to find a polynomial is not an error: it is returned as
    /// [`DecodeResult::Failed`] with [`FailureReason::NoConsensus`].
    pub fn decode(&self, codeword: &Codeword, params: &DecodeParams) -> RsResult<DecodeResult> {
        let threshold = params.resolve_threshold(codeword.len())?;
        let candidates =
            CandidateIndices::new(codeword.len(), params.message_len, params.trust_boundary)?;

        let mut state = DecodeState::Searching;
        debug!(
            "{:?} N={} K={} b={} over {}: threshold {}, {} candidates",
            state,
            codeword.len(),
            params.message_len,
            params.trust_boundary,
            codeword.field(),
            threshold,
            candidates.total()
        );

        let tracker = SearchTracker::new();
        let threads = self.config.effective_threads();
        let accepted = if threads > 1 {
            self.search_parallel(codeword, candidates, threshold, threads, &tracker)
        } else {
            search_sequential(codeword, candidates, threshold, &tracker)
        };

        let examined = tracker.examined.load(Ordering::Relaxed);
        state = if accepted.is_some() {
            DecodeState::Accepted
        } else {
            DecodeState::Exhausted
        };
        debug!("Search finished in state {:?} after {} candidates", state, examined);

        Ok(match accepted {
            Some(Accepted {
                polynomial,
                indices,
                matches,
            }) => {
                debug!(
                    "Accepted candidate {:?} with {}/{} matching symbols",
                    indices.as_slice(),
                    matches,
                    codeword.len()
                );
                let message = (0..params.message_len as u64)
                    .map(|x| polynomial.evaluate(x))
                    .collect();
                DecodeResult::Corrected {
                    polynomial,
                    message,
                    matches,
                }
            }
            None => DecodeResult::Failed {
                reason: FailureReason::NoConsensus {
                    candidates_examined: examined,
                    best_matches: tracker.best.load(Ordering::Relaxed),
                },
            },
        })
    }

    fn search_parallel(
        &self,
        codeword: &Codeword,
        candidates: CandidateIndices,
        threshold: usize,
        threads: usize,
        tracker: &SearchTracker,
    ) -> Option<Accepted> {
        let pool = match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => pool,
            Err(err) => {
                warn!(
                    "Could not build a pool of {} threads ({}), searching sequentially",
                    threads, err
                );
                return search_sequential(codeword, candidates, threshold, tracker);
            }
        };

        pool.install(|| {
            candidates
                .par_bridge()
                .find_map_any(|indices| check_candidate(codeword, indices, threshold, tracker))
        })
    }
}

/// Counters shared by every worker of one decode call
struct SearchTracker {
    examined: AtomicUsize,
    best: AtomicUsize,
}

impl SearchTracker {
    fn new() -> Self {
        Self {
            examined: AtomicUsize::new(0),
            best: AtomicUsize::new(0),
        }
    }
}

/// Evaluate candidates in generator order; the first to reach the threshold wins
fn search_sequential(
    codeword: &Codeword,
    mut candidates: CandidateIndices,
    threshold: usize,
    tracker: &SearchTracker,
) -> Option<Accepted> {
    candidates.find_map(|indices| check_candidate(codeword, indices, threshold, tracker))
}

/// Interpolate one candidate and count the symbols it reproduces
fn check_candidate(
    codeword: &Codeword,
    indices: CandidateIndexSet,
    threshold: usize,
    tracker: &SearchTracker,
) -> Option<Accepted> {
    let points: SmallVec<[Point; 32]> = indices.iter().map(|&i| codeword.point(i)).collect();

    // The generator never repeats an index, so interpolation cannot fail here
    let polynomial = interpolate(&points, codeword.field()).unwrap_or_else(|err| {
        panic!(
            "candidate {:?} could not be interpolated: {}",
            indices.as_slice(),
            err
        )
    });

    let matches = codeword.matches(&polynomial);
    tracker.examined.fetch_add(1, Ordering::Relaxed);
    tracker.best.fetch_max(matches, Ordering::Relaxed);
    trace!("Candidate {:?}: {} matches", indices.as_slice(), matches);

    (matches >= threshold).then_some(Accepted {
        polynomial,
        indices,
        matches,
    })
}

/// Decode with the default sequential decoder
///
/// `match_threshold` overrides the `K + ⌈R/2⌉` default when given.
pub fn decode(
    codeword: &Codeword,
    message_len: usize,
    trust_boundary: usize,
    match_threshold: Option<usize>,
) -> RsResult<DecodeResult> {
    let params = DecodeParams {
        message_len,
        trust_boundary,
        match_threshold,
    };
    ReedSolomonDecoder::default().decode(codeword, &params)
}
