//! Core traits and types for the Stride framework.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! models build on:
//!
//! - [`Model`] — the physics being integrated: local problem size, state
//!   save/load, and right-hand-side evaluation
//! - [`StateVec`] — a fixed-length buffer holding the locally owned degrees
//!   of freedom
//! - [`Communicator`] — blocking sum reductions across cooperating worker
//!   processes, with [`SoloComm`] for single-process runs
//! - [`Observer`] — receives solver events and optionally returns control
//!   actions

mod comm;
mod model;
mod observer;
mod state;

pub use comm::{CommError, Communicator, SoloComm};
pub use model::Model;
pub use observer::Observer;
pub use state::StateVec;
