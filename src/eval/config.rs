//! Evaluation configuration.

use crate::dp::DpConfig;
use crate::error::{KnapsackError, Result};
use crate::fptas::{FptasBackend, ScaleRule};
use crate::greedy::GreedyConfig;
use std::fmt;

/// One solver invocation in an evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverRun {
    /// Exact weight-indexed DP with reconstruction.
    Exact,
    /// FPTAS at the given epsilon.
    Fptas { epsilon: f64 },
    /// Greedy ratio heuristic.
    Greedy,
}

impl fmt::Display for SolverRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverRun::Exact => write!(f, "Exact DP"),
            SolverRun::Fptas { epsilon } => write!(f, "FPTAS ({epsilon:.3})"),
            SolverRun::Greedy => write!(f, "Heuristic"),
        }
    }
}

/// Epsilons evaluated by default.
pub const DEFAULT_EPSILONS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// Configuration for [`Evaluator`](super::Evaluator).
///
/// # Examples
///
/// ```
/// use u_knapsack::eval::{EvalConfig, SolverRun};
///
/// let config = EvalConfig::default();
/// assert_eq!(config.runs.len(), 6);
/// assert_eq!(config.runs[5], SolverRun::Greedy);
///
/// let config = EvalConfig::empty()
///     .with_run(SolverRun::Exact)
///     .with_run(SolverRun::Fptas { epsilon: 0.5 });
/// assert_eq!(config.runs.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvalConfig {
    /// Runs in execution order.
    pub runs: Vec<SolverRun>,
    /// Memory ceiling for every table-based run and for the reference.
    pub dp: DpConfig,
    /// Scale factor rule for FPTAS runs.
    pub scale_rule: ScaleRule,
    /// Table backend for FPTAS runs.
    pub backend: FptasBackend,
    /// Greedy heuristic settings.
    pub greedy: GreedyConfig,
}

impl Default for EvalConfig {
    /// FPTAS at each of [`DEFAULT_EPSILONS`], then the heuristic.
    fn default() -> Self {
        let runs = DEFAULT_EPSILONS
            .iter()
            .map(|&epsilon| SolverRun::Fptas { epsilon })
            .chain(std::iter::once(SolverRun::Greedy))
            .collect();
        Self {
            runs,
            ..Self::empty()
        }
    }
}

impl EvalConfig {
    /// Configuration with no runs.
    pub fn empty() -> Self {
        Self {
            runs: Vec::new(),
            dp: DpConfig::default(),
            scale_rule: ScaleRule::default(),
            backend: FptasBackend::default(),
            greedy: GreedyConfig::default(),
        }
    }

    pub fn with_run(mut self, run: SolverRun) -> Self {
        self.runs.push(run);
        self
    }

    pub fn with_runs(mut self, runs: Vec<SolverRun>) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_dp(mut self, dp: DpConfig) -> Self {
        self.dp = dp;
        self
    }

    pub fn with_scale_rule(mut self, rule: ScaleRule) -> Self {
        self.scale_rule = rule;
        self
    }

    pub fn with_backend(mut self, backend: FptasBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn with_greedy(mut self, greedy: GreedyConfig) -> Self {
        self.greedy = greedy;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.runs.is_empty() {
            return Err(KnapsackError::InvalidInput("no solver runs configured".into()));
        }
        self.dp.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs() {
        let config = EvalConfig::default();
        let epsilons: Vec<f64> = config
            .runs
            .iter()
            .filter_map(|run| match run {
                SolverRun::Fptas { epsilon } => Some(*epsilon),
                _ => None,
            })
            .collect();
        assert_eq!(epsilons, DEFAULT_EPSILONS.to_vec());
        assert_eq!(config.runs.last(), Some(&SolverRun::Greedy));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_is_invalid() {
        assert!(EvalConfig::empty().validate().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(SolverRun::Fptas { epsilon: 0.2 }.to_string(), "FPTAS (0.200)");
        assert_eq!(SolverRun::Greedy.to_string(), "Heuristic");
        assert_eq!(SolverRun::Exact.to_string(), "Exact DP");
    }
}
