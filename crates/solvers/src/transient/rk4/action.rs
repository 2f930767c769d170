/// Control actions supported by the RK4 solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the run cleanly after the current output interval.
    StopEarly,
}
