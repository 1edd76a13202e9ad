//! Scheduling knobs for the block loop.

/// Controls how blocks are scheduled across threads.
///
/// None of these settings change the output bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CtrConfig {
    /// Spread blocks over the rayon pool. Ignored without the `parallel` feature.
    pub parallel: bool,
    /// Inputs with fewer blocks than this run on the calling thread.
    pub min_parallel_blocks: usize,
    /// Number of consecutive blocks handed to one worker task.
    pub chunk_blocks: usize,
}

impl CtrConfig {
    /// A configuration that always runs on the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub(crate) fn runs_parallel(&self, nblocks: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && nblocks >= self.min_parallel_blocks
    }
}

impl Default for CtrConfig {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "parallel"),
            min_parallel_blocks: 64,
            chunk_blocks: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_inputs_stay_on_the_calling_thread() {
        let config = CtrConfig::default();
        assert!(!config.runs_parallel(0));
        assert!(!config.runs_parallel(config.min_parallel_blocks - 1));
        assert!(!CtrConfig::sequential().runs_parallel(1 << 20));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn large_inputs_use_the_pool() {
        let config = CtrConfig::default();
        assert!(config.runs_parallel(config.min_parallel_blocks));
    }
}
