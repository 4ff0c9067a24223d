//! Configuration for decoding operations

/// Configuration for the candidate search
#[derive(Debug, Clone)]
pub struct DecoderConfig {
    /// Number of threads for computation (0 = auto-detect)
    pub threads: usize,
    /// Whether to race candidates across threads (false = generator order, first match wins)
    pub parallel: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            threads: 0, // Auto-detect CPU cores
            parallel: false,
        }
    }
}

impl DecoderConfig {
    pub fn new(threads: usize, parallel: bool) -> Self {
        Self { threads, parallel }
    }

    /// Sequential search in generator order
    pub fn sequential() -> Self {
        Self::new(1, false)
    }

    /// Parallel search on all available cores
    pub fn parallel() -> Self {
        Self::new(0, true)
    }

    /// Get effective thread count (auto-detect if 0)
    pub fn effective_threads(&self) -> usize {
        match (self.parallel, self.threads) {
            (false, _) => 1, // Sequential mode always uses single thread
            (true, 0) => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            (true, n) => n,
        }
    }
}
