/// Indicates how a run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Completed all requested output intervals.
    Complete,

    /// Stopped early by an observer action at an output interval.
    StoppedByObserver,
}

/// Work counters accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Model RHS evaluations (four per Runge-Kutta step).
    pub rhs_evals: usize,

    /// Accepted sub-steps.
    pub accepted_steps: usize,

    /// Rejected sub-steps (adaptive mode only).
    pub rejected_steps: usize,
}

/// The result of a completed or observer-stopped run.
///
/// The final state itself lives in the model — it is loaded back at the end
/// of every output interval — so the solution only carries bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// Simulation time reached.
    pub time: f64,

    /// Output intervals completed during this run.
    pub intervals_completed: usize,

    /// Work counters for this run.
    pub stats: Stats,
}
