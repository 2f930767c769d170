use thiserror::Error;

/// Sum reductions across cooperating worker processes.
///
/// Stride parallelizes by spatial decomposition: every worker runs the same
/// sequential solver loop over its local degrees of freedom, and the only
/// cross-process synchronization point is a global sum. A reduction is
/// collective and blocking — every worker must call it in the same logical
/// step, in the same order, or the run deadlocks.
///
/// The returned sum must be identical on every worker. This is what keeps
/// the workers in lockstep: an adaptive solver feeds the reduced error back
/// into its accept/retry decision, and identical inputs guarantee identical
/// decisions everywhere.
///
/// A failed reduction is fatal and must not be retried; the collective is
/// not idempotent mid-failure and no partial result is meaningful.
pub trait Communicator {
    /// Returns the sum of `local` over all cooperating workers.
    ///
    /// # Errors
    ///
    /// Returns [`CommError`] if the collective fails (worker loss, transport
    /// fault). The caller must treat this as fatal.
    fn sum_f64(&self, local: f64) -> Result<f64, CommError>;

    /// Returns the sum of `local` over all cooperating workers.
    ///
    /// # Errors
    ///
    /// Returns [`CommError`] if the collective fails.
    fn sum_usize(&self, local: usize) -> Result<usize, CommError>;
}

/// A failed collective reduction.
#[derive(Debug, Clone, Error)]
#[error("collective reduction failed: {0}")]
pub struct CommError(String);

impl CommError {
    /// Creates an error with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Identity reduction for single-process runs.
///
/// With one worker the global sum is the local value; `SoloComm` never
/// blocks and never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoloComm;

impl Communicator for SoloComm {
    fn sum_f64(&self, local: f64) -> Result<f64, CommError> {
        Ok(local)
    }

    fn sum_usize(&self, local: usize) -> Result<usize, CommError> {
        Ok(local)
    }
}
