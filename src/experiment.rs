//! Repeated trials on fresh random graphs.
//!
//! An experiment samples a new G(n, p) graph per trial, runs the GA on it,
//! and records the outcome and wall-clock time. Writing the records out
//! (CSV, plots) is up to the caller; with the `serde` feature every
//! record is serializable.

use crate::error::{CoverError, Result};
use crate::ga::{CoverConfig, CoverRunner, NoProgress, ProgressSink};
use crate::graph::Graph;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::info;

/// Parameters of a multi-trial experiment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    /// Vertices per sampled graph.
    pub vertex_count: usize,

    /// Edge inclusion probability of the G(n, p) model.
    pub edge_probability: f64,

    /// Number of independent trials.
    pub trials: usize,

    /// GA parameters shared by every trial.
    ///
    /// `ga.seed` seeds the whole experiment: graphs and runs draw from a
    /// single RNG, so one seed reproduces every trial.
    pub ga: CoverConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            vertex_count: 20,
            edge_probability: 0.3,
            trials: 10,
            ga: CoverConfig::default(),
        }
    }
}

impl ExperimentConfig {
    /// Sets the vertex count.
    pub fn with_vertex_count(mut self, n: usize) -> Self {
        self.vertex_count = n;
        self
    }

    /// Sets the edge probability.
    pub fn with_edge_probability(mut self, p: f64) -> Self {
        self.edge_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of trials.
    pub fn with_trials(mut self, n: usize) -> Self {
        self.trials = n;
        self
    }

    /// Sets the GA configuration.
    pub fn with_ga(mut self, ga: CoverConfig) -> Self {
        self.ga = ga;
        self
    }

    /// Validates the experiment and its GA configuration.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(CoverError::InvalidConfiguration(
                "trials must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(CoverError::InvalidConfiguration(format!(
                "edge_probability must be in [0, 1], got {}",
                self.edge_probability
            )));
        }
        self.ga.validate(self.vertex_count)
    }
}

/// Outcome of one trial.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialRecord {
    /// One-based trial number.
    pub trial: usize,

    /// Whether the consensus candidate was injected.
    pub use_woc: bool,

    /// Vertices of the sampled graph.
    pub vertex_count: usize,

    /// Edge probability the graph was sampled with.
    pub edge_probability: f64,

    /// Edges actually present in the sampled graph.
    pub edge_count: usize,

    /// Candidates per generation.
    pub population_size: usize,

    /// Generations executed.
    pub generation_count: usize,

    /// Per-gene flip probability.
    pub mutation_rate: f64,

    /// Fraction of the population voting in the consensus.
    pub elite_fraction: f64,

    /// Selected vertices in the returned cover.
    pub cover_size: usize,

    /// Edges left uncovered by the returned cover.
    pub uncovered_edge_count: usize,

    /// Fitness of the returned cover (lower is better).
    pub fitness: f64,

    /// Wall-clock time of the GA run, excluding graph sampling.
    pub elapsed_ms: f64,
}

/// Aggregate statistics over all trials.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentSummary {
    /// Number of trials summarized.
    pub trials: usize,

    /// Trials that ended with every edge covered.
    pub valid_covers: usize,

    /// Mean number of selected vertices.
    pub mean_cover_size: f64,

    /// Mean number of uncovered edges.
    pub mean_uncovered: f64,

    /// Mean final fitness.
    pub mean_fitness: f64,

    /// Lowest final fitness over all trials.
    pub best_fitness: f64,

    /// Mean wall-clock time per run in milliseconds.
    pub mean_elapsed_ms: f64,
}

impl ExperimentSummary {
    /// Summarizes a non-empty list of records.
    pub fn from_records(records: &[TrialRecord]) -> Self {
        let n = records.len().max(1) as f64;
        let mean = |f: fn(&TrialRecord) -> f64| records.iter().map(f).sum::<f64>() / n;

        Self {
            trials: records.len(),
            valid_covers: records
                .iter()
                .filter(|r| r.uncovered_edge_count == 0)
                .count(),
            mean_cover_size: mean(|r| r.cover_size as f64),
            mean_uncovered: mean(|r| r.uncovered_edge_count as f64),
            mean_fitness: mean(|r| r.fitness),
            best_fitness: records
                .iter()
                .map(|r| r.fitness)
                .fold(f64::INFINITY, f64::min),
            mean_elapsed_ms: mean(|r| r.elapsed_ms),
        }
    }

    /// Fraction of trials that produced a valid cover.
    pub fn success_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.valid_covers as f64 / self.trials as f64
        }
    }
}

/// All trial records plus their summary.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentReport {
    /// One record per trial, in trial order.
    pub records: Vec<TrialRecord>,

    /// Aggregate of `records`.
    pub summary: ExperimentSummary,
}

/// Runs an experiment without progress reporting.
pub fn run(config: &ExperimentConfig) -> Result<ExperimentReport> {
    run_with_progress(config, &mut NoProgress)
}

/// Runs an experiment, forwarding every generation of every trial to `sink`.
///
/// # Errors
/// Fails before any trial runs if the configuration is invalid.
pub fn run_with_progress<S: ProgressSink>(
    config: &ExperimentConfig,
    sink: &mut S,
) -> Result<ExperimentReport> {
    config.validate()?;

    let mut rng = match config.ga.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut records = Vec::with_capacity(config.trials);
    for trial in 1..=config.trials {
        let graph = Graph::erdos_renyi(config.vertex_count, config.edge_probability, &mut rng)?;

        let start = Instant::now();
        let result = CoverRunner::run_with_rng(&graph, &config.ga, &mut rng, sink)?;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        info!(
            trial,
            edges = graph.edge_count(),
            cover_size = result.cover_size,
            uncovered = result.uncovered_edge_count,
            elapsed_ms,
            "trial complete"
        );

        records.push(TrialRecord {
            trial,
            use_woc: config.ga.use_woc,
            vertex_count: config.vertex_count,
            edge_probability: config.edge_probability,
            edge_count: graph.edge_count(),
            population_size: config.ga.population_size,
            generation_count: config.ga.generation_count,
            mutation_rate: config.ga.mutation_rate,
            elite_fraction: config.ga.elite_fraction,
            cover_size: result.cover_size,
            uncovered_edge_count: result.uncovered_edge_count,
            fitness: result.fitness,
            elapsed_ms,
        });
    }

    let summary = ExperimentSummary::from_records(&records);
    info!(
        trials = summary.trials,
        valid_covers = summary.valid_covers,
        mean_cover_size = summary.mean_cover_size,
        "experiment complete"
    );

    Ok(ExperimentReport { records, summary })
}
