//! Transient (time-domain) solvers.

pub mod rk4;
