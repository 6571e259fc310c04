//! Compares the knapsack solvers on one instance.
//!
//! ```text
//! knapsack-eval data/ks_100.txt
//! knapsack-eval data/ks_100.txt --epsilon 0.1 --epsilon 0.5 --exact
//! knapsack-eval --random 200 --seed 42 --fill inclusive
//! RUST_LOG=debug knapsack-eval data/ks_100.txt
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use u_knapsack::dp::DpConfig;
use u_knapsack::eval::{EvalConfig, Evaluation, Evaluator, SolverRun, DEFAULT_EPSILONS};
use u_knapsack::fptas::{FptasBackend, ScaleRule};
use u_knapsack::greedy::{FillRule, GreedyConfig};
use u_knapsack::io::{random_instance_with, GeneratorConfig, Instance};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Fill {
    /// Skip an item that would fill the knapsack exactly.
    Strict,
    /// Accept an item that fills the knapsack exactly.
    Inclusive,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scale {
    /// K = epsilon * vmax / n
    Epsilon,
    /// K = (1 - epsilon) * vmax / n
    Complement,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Backend {
    Weight,
    Profit,
}

#[derive(Debug, Parser)]
#[command(
    name = "knapsack-eval",
    version,
    about = "Compare exact, FPTAS and greedy knapsack solvers"
)]
struct Options {
    /// Instance file: `<label> <capacity> <label> <optimum>` then `<weight> <value>` lines.
    #[arg(required_unless_present = "random", conflicts_with = "random")]
    file: Option<PathBuf>,

    /// Generate a random instance with this many items instead of reading a file.
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for --random.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Largest weight for --random.
    #[arg(long, default_value_t = 100)]
    max_weight: u64,

    /// Largest value for --random.
    #[arg(long, default_value_t = 1000)]
    max_value: u64,

    /// Capacity as a fraction of total weight for --random.
    #[arg(long, default_value_t = 0.5)]
    capacity_ratio: f64,

    /// FPTAS epsilon; repeat for several runs. Defaults to 0.2 0.4 0.6 0.8 1.0.
    #[arg(short, long = "epsilon", value_name = "E")]
    epsilons: Vec<f64>,

    /// Also run the exact DP.
    #[arg(long)]
    exact: bool,

    /// Skip the greedy heuristic.
    #[arg(long)]
    no_greedy: bool,

    /// Greedy acceptance rule.
    #[arg(long, value_enum, default_value_t = Fill::Strict)]
    fill: Fill,

    /// Let the greedy heuristic fall back to the best single item.
    #[arg(long)]
    best_single: bool,

    /// FPTAS scale factor rule.
    #[arg(long, value_enum, default_value_t = Scale::Epsilon)]
    scale: Scale,

    /// FPTAS table backend.
    #[arg(long, value_enum, default_value_t = Backend::Weight)]
    backend: Backend,

    /// DP table ceiling in cells.
    #[arg(long, value_name = "N")]
    max_cells: Option<usize>,
}

impl Options {
    fn dp_config(&self) -> DpConfig {
        match self.max_cells {
            Some(cells) => DpConfig::default().with_max_table_cells(cells),
            None => DpConfig::default(),
        }
    }

    fn eval_config(&self) -> EvalConfig {
        let epsilons = if self.epsilons.is_empty() {
            DEFAULT_EPSILONS.to_vec()
        } else {
            self.epsilons.clone()
        };

        let mut runs = Vec::new();
        if self.exact {
            runs.push(SolverRun::Exact);
        }
        runs.extend(epsilons.into_iter().map(|epsilon| SolverRun::Fptas { epsilon }));
        if !self.no_greedy {
            runs.push(SolverRun::Greedy);
        }

        let fill_rule = match self.fill {
            Fill::Strict => FillRule::StrictBelow,
            Fill::Inclusive => FillRule::UpToCapacity,
        };
        let scale_rule = match self.scale {
            Scale::Epsilon => ScaleRule::Epsilon,
            Scale::Complement => ScaleRule::ComplementOfEpsilon,
        };
        let backend = match self.backend {
            Backend::Weight => FptasBackend::WeightTable,
            Backend::Profit => FptasBackend::ProfitTable,
        };

        EvalConfig::empty()
            .with_runs(runs)
            .with_dp(self.dp_config())
            .with_scale_rule(scale_rule)
            .with_backend(backend)
            .with_greedy(
                GreedyConfig::default()
                    .with_fill_rule(fill_rule)
                    .with_best_single_item(self.best_single),
            )
    }

    fn load_instance(&self) -> Result<Instance> {
        if let Some(count) = self.random {
            let mut config = GeneratorConfig::new(count)
                .with_max_weight(self.max_weight)
                .with_max_value(self.max_value)
                .with_capacity_ratio(self.capacity_ratio);
            if let Some(seed) = self.seed {
                config = config.with_seed(seed);
            }
            return random_instance_with(&config, &self.dp_config())
                .context("failed to generate a random instance");
        }

        // clap guarantees a file when --random is absent.
        let path = self.file.as_ref().context("no instance file given")?;
        Instance::from_path(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn print_evaluation(instance: &Instance, evaluation: &Evaluation) {
    println!(
        "{} items, capacity {}",
        instance.items.len(),
        instance.items.capacity()
    );
    match evaluation.reference {
        Some(reference) if evaluation.reference_computed => {
            println!("Reference optimum: {reference} (computed)")
        }
        Some(reference) => println!("Reference optimum: {reference}"),
        None => println!("Reference optimum: unavailable"),
    }

    for report in &evaluation.reports {
        println!("----------------");
        println!("{} took {:?}", report.run, report.elapsed);
        match &report.outcome {
            Ok(outcome) => {
                println!("Value achieved: {}", outcome.solution.value);
                println!("Items packed: {}", outcome.solution.selected_count());
                match outcome.relative_error {
                    Some(error) => println!("Difference: {error:.6}"),
                    None => println!("Difference: n/a"),
                }
            }
            Err(e) => println!("Failed: {e}"),
        }
    }
    println!("----------------");
}

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::parse();

    let instance = options.load_instance()?;
    let evaluation = Evaluator::run(&instance, &options.eval_config())?;
    print_evaluation(&instance, &evaluation);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_match_library_default() {
        let options = Options::parse_from(["knapsack-eval", "data.txt"]);
        assert_eq!(options.eval_config().runs, EvalConfig::default().runs);
    }

    #[test]
    fn test_flags_shape_runs() {
        let options = Options::parse_from([
            "knapsack-eval",
            "data.txt",
            "--exact",
            "--no-greedy",
            "-e",
            "0.3",
            "--fill",
            "inclusive",
        ]);
        let config = options.eval_config();
        assert_eq!(
            config.runs,
            vec![SolverRun::Exact, SolverRun::Fptas { epsilon: 0.3 }]
        );
        assert_eq!(config.greedy.fill_rule, FillRule::UpToCapacity);
    }

    #[test]
    fn test_file_or_random_required() {
        assert!(Options::try_parse_from(["knapsack-eval"]).is_err());
        assert!(Options::try_parse_from(["knapsack-eval", "--random", "10"]).is_ok());
        assert!(Options::try_parse_from(["knapsack-eval", "f.txt", "--random", "10"]).is_err());
    }
}
