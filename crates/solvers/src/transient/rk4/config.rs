use thiserror::Error;

/// Configuration for the embedded step-doubling RK4 solver.
///
/// A config is built from the two run parameters every simulation has — the
/// output interval and how many of them to take — with everything else
/// defaulted: `atol = 1e-5`, `rtol = 1e-3`, `max_timestep` equal to the
/// output interval, starting `timestep` equal to `max_timestep`, an attempt
/// budget of 500 per interval, and adaptive stepping off.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    output_interval: f64,
    intervals: usize,
    atol: f64,
    rtol: f64,
    max_timestep: f64,
    timestep: f64,
    max_attempts: usize,
    adaptive: bool,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("output_interval must be finite and positive")]
    OutputInterval,

    #[error("tolerances must be finite and positive")]
    Tolerance,

    #[error("timestep must be finite and positive")]
    Timestep,

    #[error("max_timestep must be finite")]
    MaxTimestep,

    #[error("max_attempts must be at least 1")]
    MaxAttempts,
}

impl Config {
    /// Creates a config for `intervals` output intervals of length
    /// `output_interval`, with all other settings at their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `output_interval` is not finite and positive.
    pub fn new(output_interval: f64, intervals: usize) -> Result<Self, ConfigError> {
        if !output_interval.is_finite() || output_interval <= 0.0 {
            return Err(ConfigError::OutputInterval);
        }

        Ok(Self {
            output_interval,
            intervals,
            atol: 1e-5,
            rtol: 1e-3,
            max_timestep: output_interval,
            timestep: output_interval,
            max_attempts: 500,
            adaptive: false,
        })
    }

    /// Sets the absolute and relative error tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is not finite and positive.
    pub fn with_tolerances(mut self, atol: f64, rtol: f64) -> Result<Self, ConfigError> {
        if !atol.is_finite() || atol <= 0.0 || !rtol.is_finite() || rtol <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        self.atol = atol;
        self.rtol = rtol;
        Ok(self)
    }

    /// Sets the starting timestep.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is not finite and positive.
    pub fn with_initial_timestep(mut self, dt: f64) -> Result<Self, ConfigError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ConfigError::Timestep);
        }
        self.timestep = dt;
        Ok(self)
    }

    /// Sets the timestep ceiling.
    ///
    /// A non-positive value disables the ceiling. Setting a positive ceiling
    /// below the current starting timestep lowers the starting timestep to
    /// match.
    ///
    /// # Errors
    ///
    /// Returns an error if `dt` is not finite.
    pub fn with_max_timestep(mut self, dt: f64) -> Result<Self, ConfigError> {
        if !dt.is_finite() {
            return Err(ConfigError::MaxTimestep);
        }
        self.max_timestep = dt;
        if dt > 0.0 && self.timestep > dt {
            self.timestep = dt;
        }
        Ok(self)
    }

    /// Sets the per-interval sub-step attempt budget (the divergence guard).
    ///
    /// # Errors
    ///
    /// Returns an error if `attempts` is zero.
    pub fn with_max_attempts(mut self, attempts: usize) -> Result<Self, ConfigError> {
        if attempts == 0 {
            return Err(ConfigError::MaxAttempts);
        }
        self.max_attempts = attempts;
        Ok(self)
    }

    /// Enables or disables adaptive (embedded step-doubling) stepping.
    #[must_use]
    pub fn with_adaptive(mut self, adaptive: bool) -> Self {
        self.adaptive = adaptive;
        self
    }

    /// Returns the output interval length.
    #[must_use]
    pub fn output_interval(&self) -> f64 {
        self.output_interval
    }

    /// Returns the number of output intervals in a run.
    #[must_use]
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Returns the absolute tolerance.
    #[must_use]
    pub fn atol(&self) -> f64 {
        self.atol
    }

    /// Returns the relative tolerance.
    #[must_use]
    pub fn rtol(&self) -> f64 {
        self.rtol
    }

    /// Returns the timestep ceiling. Non-positive means no ceiling.
    #[must_use]
    pub fn max_timestep(&self) -> f64 {
        self.max_timestep
    }

    /// Returns the starting timestep.
    #[must_use]
    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Returns the per-interval attempt budget.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Returns whether adaptive stepping is enabled.
    #[must_use]
    pub fn adaptive(&self) -> bool {
        self.adaptive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_output_interval() {
        let config = Config::new(0.25, 10).unwrap();

        assert_eq!(config.output_interval(), 0.25);
        assert_eq!(config.intervals(), 10);
        assert_eq!(config.atol(), 1e-5);
        assert_eq!(config.rtol(), 1e-3);
        assert_eq!(config.max_timestep(), 0.25);
        assert_eq!(config.timestep(), 0.25);
        assert_eq!(config.max_attempts(), 500);
        assert!(!config.adaptive());
    }

    #[test]
    fn rejects_bad_output_interval() {
        assert_eq!(Config::new(0.0, 1), Err(ConfigError::OutputInterval));
        assert_eq!(Config::new(-1.0, 1), Err(ConfigError::OutputInterval));
        assert_eq!(Config::new(f64::NAN, 1), Err(ConfigError::OutputInterval));
    }

    #[test]
    fn rejects_bad_tolerances() {
        let config = Config::new(1.0, 1).unwrap();
        assert_eq!(config.with_tolerances(0.0, 1e-3), Err(ConfigError::Tolerance));
        assert_eq!(
            config.with_tolerances(1e-5, f64::INFINITY),
            Err(ConfigError::Tolerance)
        );
    }

    #[test]
    fn lowering_ceiling_lowers_starting_timestep() {
        let config = Config::new(1.0, 1).unwrap().with_max_timestep(0.1).unwrap();
        assert_eq!(config.max_timestep(), 0.1);
        assert_eq!(config.timestep(), 0.1);
    }

    #[test]
    fn non_positive_ceiling_is_allowed() {
        let config = Config::new(1.0, 1).unwrap().with_max_timestep(-1.0).unwrap();
        assert_eq!(config.max_timestep(), -1.0);
        assert_eq!(config.timestep(), 1.0);
    }

    #[test]
    fn rejects_zero_attempt_budget() {
        let config = Config::new(1.0, 1).unwrap();
        assert_eq!(config.with_max_attempts(0), Err(ConfigError::MaxAttempts));
    }
}
