/// Receives solver events and optionally returns control actions.
///
/// Each solver defines its own event and action types; an observer is
/// anything that can react to those events. Observers are invoked
/// synchronously from the solver loop, so they should be cheap.
///
/// Any `FnMut(&Event) -> Option<Action>` closure is an observer:
///
/// ```rust
/// use stride_core::Observer;
///
/// #[derive(Debug)]
/// struct Tick(u64);
///
/// enum Stop {
///     Now,
/// }
///
/// let mut seen = 0;
/// let mut observer = |event: &Tick| {
///     seen += event.0;
///     if seen > 10 { Some(Stop::Now) } else { None }
/// };
///
/// assert!(observer.observe(&Tick(4)).is_none());
/// assert!(observer.observe(&Tick(7)).is_some());
/// ```
pub trait Observer<Event, Action> {
    /// Reacts to a solver event, optionally returning a control action.
    ///
    /// Returning `None` lets the solver proceed normally. Whether and when a
    /// returned action is honored is up to the solver emitting the event.
    fn observe(&mut self, event: &Event) -> Option<Action>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}
