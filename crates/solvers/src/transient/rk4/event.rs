/// Events emitted while a run is in progress.
///
/// `Step` fires after every accepted sub-step; it is informational and any
/// action returned for it is ignored. `Output` fires once per completed
/// output interval, after the committed state has been loaded back into the
/// model; it carries a view of that state, and returning
/// [`Action::StopEarly`] for it ends the run cleanly before the next
/// interval starts.
///
/// [`Action::StopEarly`]: super::Action::StopEarly
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// An accepted sub-step.
    Step {
        /// Simulation time after the step.
        time: f64,
        /// The step size that was taken.
        dt: f64,
    },

    /// A completed output interval.
    Output {
        /// Simulation time at the output point.
        time: f64,
        /// Zero-based index of the completed interval.
        interval: usize,
        /// Total number of intervals requested for the run.
        intervals: usize,
        /// The committed state at the output point, as loaded into the
        /// model.
        state: &'a [f64],
    },
}
