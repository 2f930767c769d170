use stride_core::Observer;

use crate::traits::{CanStopEarly, HasOutputInterval};

/// Stops a run after a fixed number of completed output intervals.
///
/// Works with any solver whose events expose completed intervals and whose
/// actions can signal early termination.
#[derive(Debug, Clone, Copy)]
pub struct StopAfter {
    intervals: usize,
}

impl StopAfter {
    /// Creates an observer that stops after `intervals` completed output
    /// intervals.
    #[must_use]
    pub fn new(intervals: usize) -> Self {
        Self { intervals }
    }
}

impl<E, A> Observer<E, A> for StopAfter
where
    E: HasOutputInterval,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        match event.completed_interval() {
            Some((_, interval)) if interval + 1 >= self.intervals => Some(A::stop_early()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use std::convert::Infallible;
    use stride_core::{Model, SoloComm};
    use stride_solvers::transient::rk4::{Config, Rk4Solver, Status};

    /// Fixed-rate model for driving the solver.
    struct Ramp {
        state: Vec<f64>,
    }

    impl Model for Ramp {
        type Error = Infallible;

        fn local_len(&self) -> usize {
            self.state.len()
        }

        fn save_state(&self, buffer: &mut [f64]) {
            buffer.copy_from_slice(&self.state);
        }

        fn load_state(&mut self, buffer: &[f64]) {
            self.state.copy_from_slice(buffer);
        }

        fn rhs(&mut self, _time: f64, _state: &[f64], deriv: &mut [f64]) -> Result<(), Infallible> {
            deriv.fill(1.0);
            Ok(())
        }
    }

    #[test]
    fn stops_the_solver_after_requested_intervals() {
        let model = Ramp {
            state: vec![0.0; 3],
        };
        let config = Config::new(1.0, 10).unwrap();
        let mut solver = Rk4Solver::new(model, SoloComm, config).unwrap();

        let solution = solver.run(StopAfter::new(2)).unwrap();

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.intervals_completed, 2);
        assert_relative_eq!(solution.time, 2.0);
    }

    #[test]
    fn lets_shorter_runs_complete() {
        let model = Ramp {
            state: vec![0.0; 3],
        };
        let config = Config::new(1.0, 2).unwrap();
        let mut solver = Rk4Solver::new(model, SoloComm, config).unwrap();

        let solution = solver.run(StopAfter::new(5)).unwrap();

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.intervals_completed, 2);
    }
}
