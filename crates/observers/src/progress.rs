use log::info;

use stride_core::Observer;
use stride_solvers::transient::rk4::{Action, Event};

/// Logs each completed output interval through the `log` facade.
///
/// Never returns an action; pair it with other observers via
/// [`Chain`](crate::Chain) when control is needed too.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl Observer<Event<'_>, Action> for LogProgress {
    fn observe(&mut self, event: &Event<'_>) -> Option<Action> {
        if let Event::Output {
            time,
            interval,
            intervals,
            ..
        } = event
        {
            info!("output {}/{} at t = {time:.6}", interval + 1, intervals);
        }
        None
    }
}
