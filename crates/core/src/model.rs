/// The physics being integrated by a transient solver.
///
/// A model owns its problem-specific representation (fields, mesh data,
/// boundary conditions) and exposes it to the solver as a flat vector of
/// real values. The solver never interprets the entries; it only saves,
/// loads, and measures distances between them.
///
/// Models must be deterministic: evaluating the right-hand side twice at the
/// same `(time, state)` must produce the same derivative.
pub trait Model {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Number of degrees of freedom owned by the local process.
    ///
    /// Queried once at solver construction. The value must not change for
    /// the lifetime of a run; every buffer the solver passes back has
    /// exactly this length.
    fn local_len(&self) -> usize;

    /// Writes the model's current state into `buffer`.
    fn save_state(&self, buffer: &mut [f64]);

    /// Reads state from `buffer` back into the model's own representation.
    fn load_state(&mut self, buffer: &[f64]);

    /// Evaluates the right-hand side `d(state)/dt` at `time`.
    ///
    /// `state` and `deriv` both have length [`local_len`](Model::local_len).
    /// The evaluation may perform distributed field communication internally
    /// (halo exchange, boundary sync); that is opaque to the solver.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type, allowing it to determine
    /// what constitutes a failure within its domain. A failed evaluation is
    /// fatal to the run.
    fn rhs(&mut self, time: f64, state: &[f64], deriv: &mut [f64]) -> Result<(), Self::Error>;
}
