//! Evaluation loop: run, time and score each configured solver.

use super::config::{EvalConfig, SolverRun};
use crate::dp::DynamicSolver;
use crate::error::Result;
use crate::fptas::{FptasConfig, FptasSolver};
use crate::greedy::GreedySolver;
use crate::io::Instance;
use crate::metric::relative_error;
use crate::model::Solution;
use log::{debug, info, warn};
use std::time::{Duration, Instant};

/// A successful solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub solution: Solution,
    /// Relative error against the reference, when one is available and non-zero.
    pub relative_error: Option<f64>,
}

/// Report for one configured run.
#[derive(Debug)]
pub struct EvalReport {
    pub run: SolverRun,
    /// Wall-clock time spent inside the solver.
    pub elapsed: Duration,
    /// The outcome, or the error that ended the run.
    pub outcome: Result<RunOutcome>,
}

/// Results of an evaluation.
#[derive(Debug)]
pub struct Evaluation {
    /// Reference value the errors are measured against.
    pub reference: Option<u64>,
    /// Whether the reference was computed rather than read from the instance.
    pub reference_computed: bool,
    /// One report per configured run, in order.
    pub reports: Vec<EvalReport>,
}

/// Runs a list of solvers on one instance.
pub struct Evaluator;

impl Evaluator {
    /// Evaluates every configured run.
    ///
    /// The reference is the instance's known optimum, or the exact optimum
    /// from the rolling-row DP when the instance has none. A failing run is
    /// logged and reported; later runs still execute.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_knapsack::eval::{EvalConfig, Evaluator, SolverRun};
    /// use u_knapsack::io::Instance;
    ///
    /// let instance: Instance = "Capacity 7 Optimum 9\n1 1\n3 4\n4 5\n5 7\n".parse().unwrap();
    /// let config = EvalConfig::empty().with_run(SolverRun::Exact);
    /// let evaluation = Evaluator::run(&instance, &config).unwrap();
    /// let outcome = evaluation.reports[0].outcome.as_ref().unwrap();
    /// assert_eq!(outcome.solution.value, 9);
    /// assert_eq!(outcome.relative_error, Some(0.0));
    /// ```
    pub fn run(instance: &Instance, config: &EvalConfig) -> Result<Evaluation> {
        config.validate()?;

        let (reference, reference_computed) = match instance.reference {
            Some(reference) => (Some(reference), false),
            None => match DynamicSolver::optimal_value(&instance.items, &config.dp) {
                Ok(value) => {
                    debug!("computed reference optimum {}", value);
                    (Some(value), true)
                }
                Err(e) => {
                    warn!("no reference value available: {}", e);
                    (None, false)
                }
            },
        };

        let reports = config
            .runs
            .iter()
            .map(|&run| Self::run_one(instance, config, run, reference))
            .collect();

        Ok(Evaluation {
            reference,
            reference_computed,
            reports,
        })
    }

    fn run_one(
        instance: &Instance,
        config: &EvalConfig,
        run: SolverRun,
        reference: Option<u64>,
    ) -> EvalReport {
        let items = &instance.items;
        let start = Instant::now();
        let solved = match run {
            SolverRun::Exact => DynamicSolver::solve(items, &config.dp),
            SolverRun::Fptas { epsilon } => {
                let fptas = FptasConfig::new(epsilon)
                    .with_scale_rule(config.scale_rule)
                    .with_backend(config.backend)
                    .with_dp(config.dp);
                FptasSolver::solve(items, &fptas)
            }
            SolverRun::Greedy => Ok(GreedySolver::solve(items, &config.greedy)),
        };
        let elapsed = start.elapsed();

        let outcome = solved.map(|solution| {
            let relative_error = reference
                .filter(|&r| r > 0)
                .and_then(|r| relative_error(solution.value, r).ok());
            info!(
                "{} took {:?}: value {}, error {:?}",
                run, elapsed, solution.value, relative_error
            );
            RunOutcome {
                solution,
                relative_error,
            }
        });
        if let Err(e) = &outcome {
            warn!("{} failed after {:?}: {}", run, elapsed, e);
        }

        EvalReport {
            run,
            elapsed,
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dp::DpConfig;
    use crate::error::KnapsackError;
    use crate::model::ItemSet;

    fn sample(reference: Option<u64>) -> Instance {
        let items = ItemSet::from_pairs([(1, 1), (4, 3), (5, 4), (7, 5)], 7).unwrap();
        Instance::new(items, reference)
    }

    #[test]
    fn test_default_runs_on_sample() {
        let evaluation = Evaluator::run(&sample(Some(9)), &EvalConfig::default()).unwrap();
        assert_eq!(evaluation.reports.len(), 6);
        assert!(!evaluation.reference_computed);

        for report in &evaluation.reports {
            let outcome = report.outcome.as_ref().unwrap();
            let error = outcome.relative_error.unwrap();
            assert!(error <= 0.0, "{}: error {}", report.run, error);
        }
        // epsilon 1.0 clamps to 0: exact.
        let exact = evaluation.reports[4].outcome.as_ref().unwrap();
        assert_eq!(exact.solution.value, 9);
        // strict greedy packs items 0 and 3.
        let greedy = evaluation.reports[5].outcome.as_ref().unwrap();
        assert_eq!(greedy.solution.value, 8);
    }

    #[test]
    fn test_reference_computed_when_missing() {
        let config = EvalConfig::empty().with_run(SolverRun::Greedy);
        let evaluation = Evaluator::run(&sample(None), &config).unwrap();
        assert_eq!(evaluation.reference, Some(9));
        assert!(evaluation.reference_computed);
    }

    #[test]
    fn test_failed_run_does_not_stop_others() {
        let config = EvalConfig::empty()
            .with_run(SolverRun::Fptas { epsilon: -1.0 })
            .with_run(SolverRun::Greedy);
        let evaluation = Evaluator::run(&sample(Some(9)), &config).unwrap();
        assert!(matches!(
            evaluation.reports[0].outcome,
            Err(KnapsackError::InvalidInput(_))
        ));
        assert!(evaluation.reports[1].outcome.is_ok());
    }

    #[test]
    fn test_table_ceiling_reported_per_run() {
        let config = EvalConfig::empty()
            .with_run(SolverRun::Exact)
            .with_run(SolverRun::Greedy)
            .with_dp(DpConfig::default().with_max_table_cells(10));
        let evaluation = Evaluator::run(&sample(None), &config).unwrap();
        assert_eq!(evaluation.reference, None);
        assert!(matches!(
            evaluation.reports[0].outcome,
            Err(KnapsackError::ResourceExhaustion { .. })
        ));
        let greedy = evaluation.reports[1].outcome.as_ref().unwrap();
        assert_eq!(greedy.relative_error, None);
    }

    #[test]
    fn test_zero_reference_has_no_error() {
        let config = EvalConfig::empty().with_run(SolverRun::Greedy);
        let evaluation = Evaluator::run(&sample(Some(0)), &config).unwrap();
        let outcome = evaluation.reports[0].outcome.as_ref().unwrap();
        assert_eq!(outcome.relative_error, None);
    }

    #[test]
    fn test_exact_run_meets_computed_reference_with_free_items() {
        let items = ItemSet::from_pairs([(5, 0), (3, 2)], 2).unwrap();
        let config = EvalConfig::empty().with_run(SolverRun::Exact);
        let evaluation = Evaluator::run(&Instance::new(items, None), &config).unwrap();
        assert_eq!(evaluation.reference, Some(8));
        let exact = evaluation.reports[0].outcome.as_ref().unwrap();
        assert_eq!(exact.solution.value, 8);
        assert_eq!(exact.relative_error, Some(0.0));
    }
}
