//! Time-integration solvers for the Stride framework.
//!
//! Solvers advance a [`Model`] forward in time, independent of the physical
//! equations being solved. Each solver defines its own configuration, event,
//! action, and error types, and reports progress through the shared
//! [`Observer`] trait.
//!
//! [`Model`]: stride_core::Model
//! [`Observer`]: stride_core::Observer

pub mod transient;
