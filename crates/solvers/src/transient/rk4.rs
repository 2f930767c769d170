//! Embedded step-doubling Runge-Kutta solver.
//!
//! This module advances a [`Model`] through a fixed number of output
//! intervals using the classical 4th-order Runge-Kutta scheme. In adaptive
//! mode each sub-step is attempted twice — as two half-steps and as one full
//! step — and the distance between the two candidates estimates the local
//! truncation error without a separate lower-order method:
//!
//! ```text
//! current --dt/2--> . --dt/2--> half-step candidate
//! current --------dt----------> full-step candidate
//! ```
//!
//! The per-entry error norm is summed over the local slice, reduced across
//! all cooperating workers, and normalized by the global problem size. The
//! reduced value is identical on every worker, so every worker takes the
//! same accept/retry decision and the workers stay in lockstep. On
//! acceptance the half-step candidate (the more accurate of the two) is
//! committed.
//!
//! In non-adaptive mode each sub-step is a single Runge-Kutta step with no
//! error check.
//!
//! # Example
//!
//! ```ignore
//! use stride_core::SoloComm;
//! use stride_solvers::transient::rk4::{Config, Rk4Solver};
//!
//! let config = Config::new(0.1, 100)?.with_adaptive(true);
//! let mut solver = Rk4Solver::new(model, SoloComm, config)?;
//!
//! let solution = solver.run_unobserved()?;
//! println!("reached t = {} in {} steps", solution.time, solution.stats.accepted_steps);
//! ```

mod action;
mod config;
mod controller;
mod error;
mod event;
mod norm;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Stats, Status};

use log::{debug, trace};

use stride_core::{Communicator, Model, Observer, StateVec};

use controller::{StepController, Verdict};

/// Embedded step-doubling RK4 solver for a distributed transient model.
///
/// The solver owns three state buffers — the committed state and the two
/// candidate results of an in-flight sub-step — plus the stage scratch
/// buffers of the Runge-Kutta scheme. All are allocated once at
/// construction, sized from [`Model::local_len`], and never reallocated.
#[derive(Debug)]
pub struct Rk4Solver<M, C> {
    model: M,
    comm: C,
    config: Config,
    controller: StepController,
    neq: usize,
    time: f64,
    iteration: usize,
    current: StateVec,
    half: StateVec,
    full: StateVec,
    stages: Stages,
}

impl<M, C> Rk4Solver<M, C>
where
    M: Model,
    C: Communicator,
{
    /// Creates a solver for `model`, coordinating with other workers
    /// through `comm`.
    ///
    /// Performs the one-time collective sum of local problem sizes — every
    /// cooperating worker must construct its solver in the same logical
    /// step — and saves the model's state into the committed buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the size reduction fails.
    pub fn new(model: M, comm: C, config: Config) -> Result<Self, Error> {
        let nlocal = model.local_len();
        let neq = comm.sum_usize(nlocal)?;

        debug!(
            "runge-kutta 4th-order solver: nlocal = {nlocal}, neq = {neq}, adaptive = {}",
            config.adaptive()
        );

        let mut current = StateVec::zeros(nlocal);
        model.save_state(current.as_mut_slice());

        Ok(Self {
            controller: StepController::new(&config),
            half: StateVec::zeros(nlocal),
            full: StateVec::zeros(nlocal),
            stages: Stages::new(nlocal),
            model,
            comm,
            config,
            neq,
            time: 0.0,
            iteration: 0,
            current,
        })
    }

    /// Runs the configured number of output intervals.
    ///
    /// For each interval, sub-steps are attempted until one is accepted
    /// *and* the accumulated time reaches the interval's output point; the
    /// last sub-step is clipped to land exactly on it. After every accepted
    /// sub-step the observer receives [`Event::Step`] (side-effect only).
    /// After each interval the committed state is loaded back into the
    /// model, the iteration counter advances, and the observer receives
    /// [`Event::Output`] carrying a view of that state; answering with
    /// [`Action::StopEarly`] ends the run cleanly before the next interval.
    ///
    /// # Errors
    ///
    /// Returns an error if a model evaluation fails, if the global error
    /// reduction fails, or if an interval exhausts its sub-step attempt
    /// budget (the divergence guard).
    pub fn run<Obs>(&mut self, mut observer: Obs) -> Result<Solution, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let mut stats = Stats::default();
        let total = self.config.intervals();
        let adaptive = self.config.adaptive();
        let atol = self.config.atol();

        for interval in 0..total {
            let target = self.time + self.config.output_interval();
            self.controller.begin_interval();

            let mut running = true;
            while running {
                let dt = loop {
                    let mut dt = self.controller.timestep();
                    running = true;
                    if self.time + dt >= target {
                        // Land the interval's last sub-step exactly on the
                        // output time; accuracy checking still applies.
                        dt = target - self.time;
                        running = false;
                    }

                    if !adaptive {
                        take_step(
                            &mut self.model,
                            &mut self.stages,
                            &mut stats,
                            self.time,
                            dt,
                            self.current.as_slice(),
                            self.half.as_mut_slice(),
                        )?;
                        stats.accepted_steps += 1;
                        break dt;
                    }

                    // Two half-steps, chained through the full-step buffer.
                    take_step(
                        &mut self.model,
                        &mut self.stages,
                        &mut stats,
                        self.time,
                        0.5 * dt,
                        self.current.as_slice(),
                        self.full.as_mut_slice(),
                    )?;
                    take_step(
                        &mut self.model,
                        &mut self.stages,
                        &mut stats,
                        self.time + 0.5 * dt,
                        0.5 * dt,
                        self.full.as_slice(),
                        self.half.as_mut_slice(),
                    )?;

                    // One full step.
                    take_step(
                        &mut self.model,
                        &mut self.stages,
                        &mut stats,
                        self.time,
                        dt,
                        self.current.as_slice(),
                        self.full.as_mut_slice(),
                    )?;

                    let local =
                        norm::local_error(self.half.as_slice(), self.full.as_slice(), atol);
                    let err = self.comm.sum_f64(local)? / self.neq as f64;

                    match self.controller.assess(err)? {
                        Verdict::Accept => {
                            stats.accepted_steps += 1;
                            break dt;
                        }
                        Verdict::Retry => {
                            stats.rejected_steps += 1;
                            trace!(
                                "sub-step rejected at t = {}: err = {err:e}, next timestep = {:e}",
                                self.time,
                                self.controller.timestep()
                            );
                        }
                    }
                };

                // The accepted candidate always lands in `half`; promote it.
                self.current.swap(&mut self.half);
                self.time += dt;

                // Step observers are side-effect only.
                let _ = observer.observe(&Event::Step {
                    time: self.time,
                    dt,
                });
            }

            self.model.load_state(self.current.as_slice());
            self.iteration += 1;

            let action = observer.observe(&Event::Output {
                time: self.time,
                interval,
                intervals: total,
                state: self.current.as_slice(),
            });
            if let Some(Action::StopEarly) = action {
                debug!("run stopped by observer after interval {}", interval + 1);
                return Ok(Solution {
                    status: Status::StoppedByObserver,
                    time: self.time,
                    intervals_completed: interval + 1,
                    stats,
                });
            }
        }

        Ok(Solution {
            status: Status::Complete,
            time: self.time,
            intervals_completed: total,
            stats,
        })
    }

    /// Runs the configured number of output intervals without observation.
    ///
    /// # Errors
    ///
    /// Same conditions as [`run`](Rk4Solver::run).
    pub fn run_unobserved(&mut self) -> Result<Solution, Error> {
        self.run(|_: &Event| None)
    }

    /// Lowers the trial timestep on behalf of an external limiter (e.g. a
    /// CFL condition evaluated outside the solver).
    ///
    /// Requests above the current trial step are ignored, as are all
    /// requests in non-adaptive mode. A lowered step takes effect on the
    /// next sub-step, never one already committed.
    pub fn set_max_timestep(&mut self, dt: f64) {
        self.controller.limit_timestep(dt);
    }

    /// Returns a reference to the model being integrated.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Returns the current simulation time.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Returns the number of output intervals completed so far, across all
    /// calls to [`run`](Rk4Solver::run). Never decreases.
    #[must_use]
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Returns the trial timestep for the next sub-step.
    #[must_use]
    pub fn timestep(&self) -> f64 {
        self.controller.timestep()
    }

    /// Returns the global problem size: the sum of [`Model::local_len`]
    /// over all cooperating workers. Constant for the run.
    #[must_use]
    pub fn global_len(&self) -> usize {
        self.neq
    }
}

/// Scratch buffers for the four Runge-Kutta stages plus the stage input.
#[derive(Debug)]
struct Stages {
    k1: StateVec,
    k2: StateVec,
    k3: StateVec,
    k4: StateVec,
    tmp: StateVec,
}

impl Stages {
    fn new(len: usize) -> Self {
        Self {
            k1: StateVec::zeros(len),
            k2: StateVec::zeros(len),
            k3: StateVec::zeros(len),
            k4: StateVec::zeros(len),
            tmp: StateVec::zeros(len),
        }
    }
}

/// Advances `start` by one classical RK4 step of size `dt` into `result`.
///
/// Four staged RHS evaluations through owned scratch buffers. No
/// communication happens here; if the model needs field communication it
/// performs it inside the evaluation, opaque to the solver.
fn take_step<M: Model>(
    model: &mut M,
    stages: &mut Stages,
    stats: &mut Stats,
    time: f64,
    dt: f64,
    start: &[f64],
    result: &mut [f64],
) -> Result<(), Error> {
    let n = start.len();
    let Stages { k1, k2, k3, k4, tmp } = stages;
    let (k1, k2, k3, k4, tmp) = (
        k1.as_mut_slice(),
        k2.as_mut_slice(),
        k3.as_mut_slice(),
        k4.as_mut_slice(),
        tmp.as_mut_slice(),
    );

    model.rhs(time, start, k1).map_err(Error::model)?;
    for i in 0..n {
        tmp[i] = start[i] + 0.5 * dt * k1[i];
    }
    model.rhs(time + 0.5 * dt, tmp, k2).map_err(Error::model)?;
    for i in 0..n {
        tmp[i] = start[i] + 0.5 * dt * k2[i];
    }
    model.rhs(time + 0.5 * dt, tmp, k3).map_err(Error::model)?;
    for i in 0..n {
        tmp[i] = start[i] + dt * k3[i];
    }
    model.rhs(time + dt, tmp, k4).map_err(Error::model)?;
    for i in 0..n {
        result[i] = start[i] + dt / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
    }

    stats.rhs_evals += 4;
    Ok(())
}
