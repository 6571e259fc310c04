//! FPTAS configuration.

use crate::dp::DpConfig;
use crate::error::{KnapsackError, Result};

/// How the value scale factor `K` is derived from epsilon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScaleRule {
    /// `K = epsilon · vmax / n`.
    ///
    /// Each scaled item loses at most `K` of value, so a selection loses at
    /// most `n · K = epsilon · vmax ≤ epsilon · OPT`. `epsilon = 0` is exact.
    #[default]
    Epsilon,

    /// `K = (1 - epsilon) · vmax / n`.
    ///
    /// Only the factor differs from [`ScaleRule::Epsilon`]: `vmax` still
    /// covers fitting items only, values are never scaled up, and the
    /// reported value is capped at the packed value. Precision grows with
    /// epsilon, and there is no `(1 - epsilon)` guarantee.
    ComplementOfEpsilon,
}

impl ScaleRule {
    /// Scale factor for an already clamped `epsilon`.
    pub fn factor(self, epsilon: f64, max_value: u64, item_count: usize) -> f64 {
        let base = max_value as f64 / item_count as f64;
        match self {
            ScaleRule::Epsilon => epsilon * base,
            ScaleRule::ComplementOfEpsilon => (1.0 - epsilon) * base,
        }
    }
}

/// Table the scaled instance is solved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FptasBackend {
    /// Weight-indexed table via [`DynamicSolver::solve`](crate::dp::DynamicSolver::solve).
    ///
    /// Table size depends on the capacity; scaling only coarsens values.
    #[default]
    WeightTable,

    /// Profit-indexed table via
    /// [`DynamicSolver::solve_by_profit`](crate::dp::DynamicSolver::solve_by_profit).
    ///
    /// Table size is `O(n² / epsilon)` under [`ScaleRule::Epsilon`].
    ProfitTable,
}

/// Configuration for [`FptasSolver`](super::FptasSolver).
///
/// # Examples
///
/// ```
/// use u_knapsack::fptas::{FptasBackend, FptasConfig, ScaleRule};
///
/// let config = FptasConfig::new(0.2)
///     .with_scale_rule(ScaleRule::Epsilon)
///     .with_backend(FptasBackend::ProfitTable);
/// assert!(config.validate().is_ok());
///
/// // epsilon >= 1 means full precision
/// assert_eq!(FptasConfig::new(1.0).effective_epsilon(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FptasConfig {
    /// Accepted relative loss. Values `>= 1` are treated as `0`.
    pub epsilon: f64,

    /// Scale factor derivation.
    pub scale_rule: ScaleRule,

    /// Table used on the scaled instance.
    pub backend: FptasBackend,

    /// Memory ceiling for the underlying table.
    pub dp: DpConfig,
}

impl Default for FptasConfig {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl FptasConfig {
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            scale_rule: ScaleRule::default(),
            backend: FptasBackend::default(),
            dp: DpConfig::default(),
        }
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
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

    pub fn with_dp(mut self, dp: DpConfig) -> Self {
        self.dp = dp;
        self
    }

    /// Epsilon after clamping: `>= 1` becomes `0`.
    pub fn effective_epsilon(&self) -> f64 {
        if self.epsilon >= 1.0 {
            0.0
        } else {
            self.epsilon
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.epsilon.is_nan() || self.epsilon < 0.0 {
            return Err(KnapsackError::InvalidInput(format!(
                "epsilon must be non-negative, got {}",
                self.epsilon
            )));
        }
        self.dp.validate()
    }
}
