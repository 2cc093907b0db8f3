//! Evolutionary loop execution.
//!
//! [`CoverRunner`] orchestrates the complete run:
//! initialization → evaluation → ranking → consensus + elite injection →
//! breeding → replacement → repeat.

use super::config::CoverConfig;
use super::consensus::consensus;
use super::fitness::CoverFitness;
use super::operators::reproduce;
use super::progress::{GenerationReport, NoProgress, ProgressSink};
use super::selection::Ranking;
use super::types::{random_population, Candidate, Population};
use crate::error::Result;
use crate::graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Result of a vertex cover run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CoverResult<'g> {
    /// Number of selected vertices in `cover`.
    pub cover_size: usize,

    /// Edges of `graph` left uncovered by `cover`.
    pub uncovered_edge_count: usize,

    /// Fitness of `cover`.
    pub fitness: f64,

    /// The graph that was covered.
    pub graph: &'g Graph,

    /// The best candidate of the final population.
    pub cover: Candidate,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness of each evaluated population, the initial one first and
    /// the final one last (`generations + 1` entries).
    pub fitness_history: Vec<f64>,
}

impl CoverResult<'_> {
    /// Returns `true` if every edge is covered.
    pub fn is_valid_cover(&self) -> bool {
        self.uncovered_edge_count == 0
    }
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use woc_cover::ga::{CoverConfig, CoverRunner};
/// use woc_cover::Graph;
///
/// let graph = Graph::new(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
/// let config = CoverConfig::fast().with_seed(42);
/// let result = CoverRunner::run(&graph, &config).unwrap();
/// assert_eq!(result.cover.len(), 4);
/// ```
pub struct CoverRunner;

impl CoverRunner {
    /// Runs with an RNG seeded from `config.seed`.
    ///
    /// # Errors
    /// Returns [`CoverError::InvalidConfiguration`](crate::CoverError::InvalidConfiguration)
    /// if the configuration is invalid for `graph`.
    pub fn run<'g>(graph: &'g Graph, config: &CoverConfig) -> Result<CoverResult<'g>> {
        Self::run_with_progress(graph, config, &mut NoProgress)
    }

    /// Runs with an RNG seeded from `config.seed`, reporting each generation to `sink`.
    pub fn run_with_progress<'g, S: ProgressSink>(
        graph: &'g Graph,
        config: &CoverConfig,
        sink: &mut S,
    ) -> Result<CoverResult<'g>> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(graph, config, &mut rng, sink)
    }

    /// Runs with a caller-supplied random source.
    ///
    /// `config.seed` is ignored. Given the same RNG state the run is
    /// fully deterministic.
    pub fn run_with_rng<'g, R: Rng, S: ProgressSink>(
        graph: &'g Graph,
        config: &CoverConfig,
        rng: &mut R,
        sink: &mut S,
    ) -> Result<CoverResult<'g>> {
        config.validate(graph.vertex_count())?;

        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            population = config.population_size,
            generations = config.generation_count,
            use_woc = config.use_woc,
            "starting vertex cover run"
        );

        let evaluator = CoverFitness::new(graph);

        // 1. Initialize population
        let mut population = random_population(config.population_size, graph.vertex_count(), rng);
        let mut fitness_history = Vec::with_capacity(config.generation_count + 1);

        // 2. Evolutionary loop
        for generation in 0..config.generation_count {
            let ranking = Ranking::new(evaluator.evaluate_all(&population));
            fitness_history.push(ranking.best_fitness());

            let next = next_generation(&population, &ranking, config, rng);
            let previous = std::mem::replace(&mut population, next);

            let best = ranking.best(&previous);
            debug!(
                generation,
                best_fitness = ranking.best_fitness(),
                best_cover_size = best.cover_size(),
                "generation complete"
            );
            sink.on_generation(&GenerationReport {
                graph,
                best,
                generation,
                best_fitness: ranking.best_fitness(),
            });
        }

        // 3. Pick the best of the final population
        let ranking = Ranking::new(evaluator.evaluate_all(&population));
        fitness_history.push(ranking.best_fitness());

        let cover = ranking.best(&population).clone();
        let uncovered_edge_count = evaluator.uncovered_edges(&cover);

        let result = CoverResult {
            cover_size: cover.cover_size(),
            uncovered_edge_count,
            fitness: ranking.best_fitness(),
            graph,
            cover,
            generations: config.generation_count,
            fitness_history,
        };

        if result.is_valid_cover() {
            info!(
                cover_size = result.cover_size,
                fitness = result.fitness,
                "run finished with a valid cover"
            );
        } else {
            warn!(
                cover_size = result.cover_size,
                uncovered = result.uncovered_edge_count,
                "run finished with uncovered edges"
            );
        }

        Ok(result)
    }
}

/// Builds the next generation from a ranked population.
///
/// Order of the returned population: the consensus candidate (only when
/// `config.use_woc`), then the rank-0 elite, then offspring bred from the
/// whole of `population` until `config.population_size` is reached.
///
/// # Panics
/// Panics if `population` is empty or candidates have fewer than 2 genes.
pub fn next_generation<R: Rng>(
    population: &Population,
    ranking: &Ranking,
    config: &CoverConfig,
    rng: &mut R,
) -> Population {
    let mut next = Vec::with_capacity(config.population_size);

    if config.use_woc {
        let wisdom = consensus(population, ranking, config.elite_count());
        debug!(consensus_cover_size = wisdom.cover_size(), "consensus built");
        next.push(wisdom);
    }

    // Elitism
    next.push(ranking.best(population).clone());

    while next.len() < config.population_size {
        next.push(reproduce(population, config.mutation_rate, rng));
    }

    next
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoverError;
    use crate::ga::consensus::majority_vote;

    fn path4() -> Graph {
        Graph::new(4, &[(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    fn random_graph(n: usize, p: f64, seed: u64) -> Graph {
        Graph::erdos_renyi(n, p, &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn test_rejects_single_vertex_graph() {
        let graph = Graph::new(1, &[]).unwrap();
        let err = CoverRunner::run(&graph, &CoverConfig::default().with_seed(1)).unwrap_err();
        assert!(matches!(err, CoverError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_invalid_config_never_calls_sink() {
        let graph = Graph::new(1, &[]).unwrap();
        let mut calls = 0;
        let mut sink = |_: &GenerationReport<'_>| calls += 1;
        let result = CoverRunner::run_with_progress(&graph, &CoverConfig::default(), &mut sink);
        assert!(result.is_err());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_finds_cover_on_path() {
        let graph = path4();
        let config = CoverConfig::fast().with_seed(42);
        let result = CoverRunner::run(&graph, &config).unwrap();

        assert!(result.is_valid_cover());
        assert_eq!(result.cover_size, 2);
        assert!((result.fitness - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_random_graph_reaches_valid_cover() {
        let graph = random_graph(20, 0.3, 9);
        for use_woc in [true, false] {
            let config = CoverConfig::default()
                .with_population_size(60)
                .with_generation_count(150)
                .with_mutation_rate(0.03)
                .with_woc(use_woc)
                .with_seed(42);
            let result = CoverRunner::run(&graph, &config).unwrap();
            assert!(
                result.is_valid_cover(),
                "use_woc={use_woc}: {} edges uncovered",
                result.uncovered_edge_count
            );
            assert!(result.cover_size < 20);
        }
    }

    #[test]
    fn test_zero_generations_returns_best_initial() {
        let graph = random_graph(12, 0.4, 3);
        let config = CoverConfig::default()
            .with_population_size(25)
            .with_generation_count(0);

        let mut rng = StdRng::seed_from_u64(77);
        let result =
            CoverRunner::run_with_rng(&graph, &config, &mut rng, &mut NoProgress).unwrap();

        // Rebuild the identical initial population from the same seed.
        let mut rng = StdRng::seed_from_u64(77);
        let initial = random_population(25, 12, &mut rng);
        let ranking = Ranking::new(CoverFitness::new(&graph).evaluate_all(&initial));

        assert_eq!(&result.cover, ranking.best(&initial));
        assert!((result.fitness - ranking.best_fitness()).abs() < 1e-12);
        assert_eq!(result.generations, 0);
        assert_eq!(result.fitness_history.len(), 1);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let graph = random_graph(15, 0.3, 5);
        let config = CoverConfig::fast().with_seed(123);
        let a = CoverRunner::run(&graph, &config).unwrap();
        let b = CoverRunner::run(&graph, &config).unwrap();
        assert_eq!(a.cover, b.cover);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_elitism_never_regresses() {
        let graph = random_graph(25, 0.2, 11);
        for use_woc in [true, false] {
            let config = CoverConfig::default()
                .with_population_size(20)
                .with_generation_count(60)
                .with_mutation_rate(0.2)
                .with_woc(use_woc)
                .with_seed(42);
            let result = CoverRunner::run(&graph, &config).unwrap();

            for window in result.fitness_history.windows(2) {
                assert!(
                    window[1] <= window[0],
                    "best fitness regressed: {} > {}",
                    window[1],
                    window[0]
                );
            }
        }
    }

    #[test]
    fn test_fitness_history_length() {
        let graph = path4();
        let config = CoverConfig::fast().with_generation_count(30).with_seed(1);
        let result = CoverRunner::run(&graph, &config).unwrap();
        assert_eq!(result.generations, 30);
        assert_eq!(result.fitness_history.len(), 31);
    }

    #[test]
    fn test_progress_reports_every_generation() {
        let graph = random_graph(10, 0.4, 2);
        let config = CoverConfig::fast().with_generation_count(12).with_seed(8);

        let mut reports = Vec::new();
        let mut sink = |r: &GenerationReport<'_>| {
            let fresh = CoverFitness::new(r.graph).evaluate(r.best);
            reports.push((r.generation, r.best_fitness, fresh));
        };
        let result = CoverRunner::run_with_progress(&graph, &config, &mut sink).unwrap();

        assert_eq!(reports.len(), 12);
        for (i, &(generation, reported, fresh)) in reports.iter().enumerate() {
            assert_eq!(generation, i);
            assert!((reported - fresh).abs() < 1e-12);
            assert!((reported - result.fitness_history[i]).abs() < 1e-12);
        }
    }

    // The final answer comes from a fresh evaluation of the last bred
    // population, not from scores of the generation before it.
    #[test]
    fn test_final_result_uses_final_population() {
        let graph = random_graph(18, 0.3, 21);
        let config = CoverConfig::default()
            .with_population_size(16)
            .with_generation_count(25)
            .with_mutation_rate(0.1)
            .with_seed(4);

        let mut last_reported = f64::INFINITY;
        let mut sink = |r: &GenerationReport<'_>| last_reported = r.best_fitness;
        let result = CoverRunner::run_with_progress(&graph, &config, &mut sink).unwrap();

        let evaluator = CoverFitness::new(&graph);
        assert!((result.fitness - evaluator.evaluate(&result.cover)).abs() < 1e-12);
        assert_eq!(result.uncovered_edge_count, evaluator.uncovered_edges(&result.cover));
        assert_eq!(result.cover_size, result.cover.cover_size());
        assert!(result.fitness <= last_reported);
        assert_eq!(
            result.fitness_history.last().copied(),
            Some(result.fitness)
        );
    }

    #[test]
    fn test_next_generation_composition_with_woc() {
        let graph = random_graph(10, 0.5, 1);
        let mut rng = StdRng::seed_from_u64(42);
        let config = CoverConfig::default()
            .with_population_size(10)
            .with_elite_fraction(0.35);

        let population = random_population(10, 10, &mut rng);
        let ranking = Ranking::new(CoverFitness::new(&graph).evaluate_all(&population));
        let next = next_generation(&population, &ranking, &config, &mut rng);

        assert_eq!(next.len(), 10);
        let elites = ranking.top(&population, 3);
        assert_eq!(next[0], majority_vote(&elites));
        assert_eq!(&next[1], ranking.best(&population));
        assert!(next.iter().all(|c| c.len() == 10));
    }

    #[test]
    fn test_next_generation_composition_without_woc() {
        let graph = random_graph(10, 0.5, 1);
        let mut rng = StdRng::seed_from_u64(42);
        let config = CoverConfig::default()
            .with_population_size(6)
            .with_mutation_rate(0.0)
            .with_woc(false);

        let population = random_population(6, 10, &mut rng);
        let ranking = Ranking::new(CoverFitness::new(&graph).evaluate_all(&population));
        let next = next_generation(&population, &ranking, &config, &mut rng);

        assert_eq!(next.len(), 6);
        assert_eq!(&next[0], ranking.best(&population));
    }

    #[test]
    fn test_offspring_draw_on_non_elite_parents() {
        let graph = path4();
        let mut rng = StdRng::seed_from_u64(42);
        let config = CoverConfig::default()
            .with_population_size(4)
            .with_mutation_rate(0.0)
            .with_woc(false);

        // One valid cover; the rest select nothing.
        let population = vec![
            Candidate::from_bits(&[1, 0, 1, 0]),
            Candidate::from_bits(&[0, 0, 0, 0]),
            Candidate::from_bits(&[0, 0, 0, 0]),
            Candidate::from_bits(&[0, 0, 0, 0]),
        ];
        let ranking = Ranking::new(CoverFitness::new(&graph).evaluate_all(&population));
        assert_eq!(ranking.best_index(), 0);

        // Without mutation, gene 0 or gene 2 can only be unset in an
        // offspring if a non-elite candidate was one of its parents.
        let mut saw_non_elite_genes = false;
        for _ in 0..50 {
            let next = next_generation(&population, &ranking, &config, &mut rng);
            assert_eq!(next[0], population[0]);
            saw_non_elite_genes |= next[1..]
                .iter()
                .any(|child| !child.genes()[0] || !child.genes()[2]);
        }
        assert!(saw_non_elite_genes, "offspring were bred from the elite only");
    }

    #[test]
    fn test_population_of_one_without_woc() {
        let graph = path4();
        let config = CoverConfig::default()
            .with_population_size(1)
            .with_generation_count(10)
            .with_woc(false)
            .with_seed(3);
        let result = CoverRunner::run(&graph, &config).unwrap();
        // Only the elite survives, so the initial candidate never changes.
        assert!(result
            .fitness_history
            .windows(2)
            .all(|w| (w[0] - w[1]).abs() < 1e-12));
    }

    #[test]
    fn test_edgeless_graph_prefers_empty_cover() {
        let graph = Graph::new(8, &[]).unwrap();
        let config = CoverConfig::fast().with_generation_count(100).with_seed(5);
        let result = CoverRunner::run(&graph, &config).unwrap();
        assert!(result.is_valid_cover());
        assert_eq!(result.cover_size, 0);
        assert!(result.fitness.abs() < 1e-12);
    }
}
