//! Solver comparison harness.
//!
//! Runs a configured sequence of solvers on one [`Instance`](crate::io::Instance),
//! times each run and measures its [`relative_error`](crate::metric::relative_error)
//! against the instance's reference optimum.

mod config;
mod runner;

pub use config::{EvalConfig, SolverRun, DEFAULT_EPSILONS};
pub use runner::{EvalReport, Evaluation, Evaluator, RunOutcome};
