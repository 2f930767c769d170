use std::error::Error as StdError;

use thiserror::Error;

use stride_core::CommError;

/// Errors that can occur during an RK4 run.
#[derive(Debug, Error)]
pub enum Error {
    /// The model's right-hand-side evaluation failed.
    #[error("model RHS evaluation failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    /// The global error reduction failed. Fatal; the collective cannot be
    /// retried mid-failure.
    #[error(transparent)]
    Reduction(#[from] CommError),

    /// Divergence guard: the global error never fell below `rtol` within
    /// the per-interval attempt budget.
    #[error("maximum sub-step attempts exceeded: timestep = {timestep:e}, err = {error:e}")]
    MaxAttemptsExceeded {
        /// The trial timestep at the failing attempt.
        timestep: f64,
        /// The global normalized error at the failing attempt.
        error: f64,
    },
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divergence_message_carries_numeric_values() {
        let err = Error::MaxAttemptsExceeded {
            timestep: 1.5e-4,
            error: 2.0e-2,
        };
        let message = err.to_string();
        assert!(message.contains("1.5e-4"));
        assert!(message.contains("2e-2"));
    }
}
