use super::{Config, Error};

/// Outcome of a sub-step accuracy assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    /// The sub-step met the tolerance; commit it.
    Accept,
    /// The sub-step missed the tolerance; retry with the rescaled timestep.
    Retry,
}

/// Adaptive step-size policy for the embedded 4th-order pair.
///
/// Driven once per sub-step attempt with the global normalized error. The
/// policy is deterministic in the error value, which is identical on every
/// worker after the reduction, so all workers take the same accept/retry
/// path through an interval.
#[derive(Debug, Clone)]
pub(crate) struct StepController {
    timestep: f64,
    max_timestep: f64,
    rtol: f64,
    max_attempts: usize,
    attempts: usize,
    adaptive: bool,
}

impl StepController {
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            timestep: config.timestep(),
            max_timestep: config.max_timestep(),
            rtol: config.rtol(),
            max_attempts: config.max_attempts(),
            attempts: 0,
            adaptive: config.adaptive(),
        }
    }

    /// Returns the trial timestep for the next sub-step attempt.
    pub(crate) fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Resets the attempt counter. Called once per output interval.
    pub(crate) fn begin_interval(&mut self) {
        self.attempts = 0;
    }

    /// Assesses one sub-step attempt against the global normalized error.
    ///
    /// When the error leaves the band `[0.1 * rtol, rtol]` the timestep is
    /// rescaled by `(0.5 * rtol / err)^(1/5)`: the local error of the pair
    /// scales as `dt^5`. Rescaling happens before the accept check, so a
    /// step accepted with a very small error still grows the timestep used
    /// by the next sub-step. A positive ceiling clamps growth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MaxAttemptsExceeded`] when the attempt budget for
    /// the current interval is exhausted, at attempt `max_attempts + 1`.
    pub(crate) fn assess(&mut self, err: f64) -> Result<Verdict, Error> {
        self.attempts += 1;
        if self.attempts > self.max_attempts {
            return Err(Error::MaxAttemptsExceeded {
                timestep: self.timestep,
                error: err,
            });
        }

        if err > self.rtol || err < 0.1 * self.rtol {
            self.timestep /= (err / (0.5 * self.rtol)).powf(0.2);
            if self.max_timestep > 0.0 && self.timestep > self.max_timestep {
                self.timestep = self.max_timestep;
            }
        }

        if err < self.rtol {
            Ok(Verdict::Accept)
        } else {
            Ok(Verdict::Retry)
        }
    }

    /// Lowers the trial timestep on behalf of an external limiter.
    ///
    /// A request above the current trial step is ignored — the step is
    /// already below it. In non-adaptive mode all requests are ignored. The
    /// lowered step is used by the next sub-step, never one already
    /// committed.
    pub(crate) fn limit_timestep(&mut self, dt: f64) {
        if dt > self.timestep {
            return;
        }
        if self.adaptive {
            self.timestep = dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn controller(rtol: f64, timestep: f64, max_timestep: f64) -> StepController {
        let config = Config::new(1.0, 1)
            .unwrap()
            .with_adaptive(true)
            .with_tolerances(1e-5, rtol)
            .unwrap()
            .with_max_timestep(max_timestep)
            .unwrap()
            .with_initial_timestep(timestep)
            .unwrap();
        StepController::new(&config)
    }

    #[test]
    fn error_inside_band_keeps_timestep() {
        let mut ctrl = controller(1e-3, 0.5, 1.0);

        // Band is [0.1 * rtol, rtol]; both endpoints leave dt untouched.
        assert_eq!(ctrl.assess(5e-4).unwrap(), Verdict::Accept);
        assert_relative_eq!(ctrl.timestep(), 0.5);

        assert_eq!(ctrl.assess(1e-4).unwrap(), Verdict::Accept);
        assert_relative_eq!(ctrl.timestep(), 0.5);
    }

    #[test]
    fn error_above_tolerance_shrinks_and_retries() {
        let mut ctrl = controller(1e-3, 0.5, 1.0);
        let err = 4e-3;

        assert_eq!(ctrl.assess(err).unwrap(), Verdict::Retry);
        assert_relative_eq!(
            ctrl.timestep(),
            0.5 / (err / (0.5 * 1e-3)).powf(0.2),
            max_relative = 1e-12
        );
    }

    #[test]
    fn tiny_error_grows_timestep_but_still_accepts() {
        let mut ctrl = controller(1e-3, 0.1, 10.0);
        let err = 1e-6;

        assert_eq!(ctrl.assess(err).unwrap(), Verdict::Accept);
        assert_relative_eq!(
            ctrl.timestep(),
            0.1 / (err / (0.5 * 1e-3)).powf(0.2),
            max_relative = 1e-12
        );
    }

    #[test]
    fn growth_clamps_to_positive_ceiling() {
        let mut ctrl = controller(1e-3, 0.9, 1.0);

        assert_eq!(ctrl.assess(1e-9).unwrap(), Verdict::Accept);
        assert_relative_eq!(ctrl.timestep(), 1.0);
    }

    #[test]
    fn non_positive_ceiling_never_clamps() {
        let mut ctrl = controller(1e-3, 0.9, -1.0);

        assert_eq!(ctrl.assess(1e-9).unwrap(), Verdict::Accept);
        assert!(ctrl.timestep() > 1.0);
    }

    #[test]
    fn divergence_guard_fires_after_budget() {
        let config = Config::new(1.0, 1)
            .unwrap()
            .with_adaptive(true)
            .with_max_attempts(3)
            .unwrap();
        let mut ctrl = StepController::new(&config);

        // Attempts 1..=3 are within budget; attempt 4 is fatal.
        for _ in 0..3 {
            assert_eq!(ctrl.assess(1e-1).unwrap(), Verdict::Retry);
        }
        let err = ctrl.assess(1e-1).unwrap_err();
        assert!(matches!(err, Error::MaxAttemptsExceeded { .. }));
    }

    #[test]
    fn begin_interval_resets_attempt_budget() {
        let config = Config::new(1.0, 1)
            .unwrap()
            .with_adaptive(true)
            .with_max_attempts(2)
            .unwrap();
        let mut ctrl = StepController::new(&config);

        assert_eq!(ctrl.assess(1e-1).unwrap(), Verdict::Retry);
        assert_eq!(ctrl.assess(1e-1).unwrap(), Verdict::Retry);

        ctrl.begin_interval();

        assert!(ctrl.assess(1e-1).is_ok());
    }

    #[test]
    fn limit_timestep_only_lowers() {
        let mut ctrl = controller(1e-3, 0.5, 1.0);

        ctrl.limit_timestep(0.8); // above the trial step, ignored
        assert_relative_eq!(ctrl.timestep(), 0.5);

        ctrl.limit_timestep(0.2);
        assert_relative_eq!(ctrl.timestep(), 0.2);
    }

    #[test]
    fn limit_timestep_ignored_when_non_adaptive() {
        let config = Config::new(1.0, 1).unwrap();
        let mut ctrl = StepController::new(&config);

        ctrl.limit_timestep(0.2);
        assert_relative_eq!(ctrl.timestep(), 1.0);
    }
}
