//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types,
//! enabling observers to work generically across different solvers.
//!
//! # Example
//!
//! ```rust
//! use stride_core::Observer;
//! use stride_observers::traits::{CanStopEarly, HasOutputInterval};
//!
//! /// Stops once simulation time passes a deadline.
//! struct Deadline {
//!     time: f64,
//! }
//!
//! impl<E: HasOutputInterval, A: CanStopEarly> Observer<E, A> for Deadline {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         match event.completed_interval() {
//!             Some((time, _)) if time >= self.time => Some(A::stop_early()),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

use stride_solvers::transient::rk4;

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

/// An event that may mark a completed output interval.
pub trait HasOutputInterval {
    /// Returns `(time, interval index)` when the event marks a completed
    /// output interval, and `None` for all other events.
    fn completed_interval(&self) -> Option<(f64, usize)>;
}

// --- Implementations for the RK4 solver ---

impl CanStopEarly for rk4::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl HasOutputInterval for rk4::Event<'_> {
    fn completed_interval(&self) -> Option<(f64, usize)> {
        match self {
            rk4::Event::Output { time, interval, .. } => Some((*time, *interval)),
            rk4::Event::Step { .. } => None,
        }
    }
}
