//! Reusable observers for the Stride framework.
//!
//! This crate provides [`Observer`] implementations and capability traits
//! that work across solvers in the Stride ecosystem.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`CanStopEarly`], [`HasOutputInterval`])
//!
//! # Observers
//!
//! - [`Chain`] — invokes two observers in registration order
//! - [`StopAfter`] — stops a run after a fixed number of output intervals
//! - [`LogProgress`] — logs each completed output interval
//!
//! [`Observer`]: stride_core::Observer
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`HasOutputInterval`]: traits::HasOutputInterval

pub mod traits;

mod chain;
mod progress;
mod stop_after;

pub use chain::Chain;
pub use progress::LogProgress;
pub use stop_after::StopAfter;
