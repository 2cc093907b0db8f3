//! Run configuration.
//!
//! [`CoverConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{CoverError, Result};

/// Configuration for a vertex cover run.
///
/// # Defaults
///
/// ```
/// use woc_cover::ga::CoverConfig;
///
/// let config = CoverConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generation_count, 100);
/// assert!(config.use_woc);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use woc_cover::ga::CoverConfig;
///
/// let config = CoverConfig::default()
///     .with_population_size(50)
///     .with_generation_count(200)
///     .with_mutation_rate(0.02)
///     .with_elite_fraction(0.25)
///     .with_woc(false)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverConfig {
    /// Number of candidates in every generation.
    pub population_size: usize,

    /// Number of evaluate → rank → inject → breed → replace cycles.
    ///
    /// Zero is valid: the best of the random initial population is returned.
    pub generation_count: usize,

    /// Per-gene flip probability applied to each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the ranked population voting in the consensus (0.0 exclusive – 1.0).
    ///
    /// The elite count is `floor(elite_fraction * population_size)`,
    /// raised to 1 when that is zero.
    pub elite_fraction: f64,

    /// Whether to insert a Wisdom-of-Crowds consensus candidate each generation.
    pub use_woc: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generation_count: 100,
            mutation_rate: 0.05,
            elite_fraction: 0.2,
            use_woc: true,
            seed: None,
        }
    }
}

impl CoverConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generation_count(mut self, n: usize) -> Self {
        self.generation_count = n;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the elite fraction used by the consensus.
    pub fn with_elite_fraction(mut self, fraction: f64) -> Self {
        self.elite_fraction = fraction.clamp(f64::MIN_POSITIVE, 1.0);
        self
    }

    /// Enables or disables the Wisdom-of-Crowds consensus.
    pub fn with_woc(mut self, use_woc: bool) -> Self {
        self.use_woc = use_woc;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for small graphs or interactive use.
    ///
    /// - Population: 30, Generations: 50
    pub fn fast() -> Self {
        Self {
            population_size: 30,
            generation_count: 50,
            ..Self::default()
        }
    }

    /// Preset balancing cover quality and run time.
    ///
    /// - Population: 100, Generations: 100
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Preset for larger graphs.
    ///
    /// - Population: 200, Generations: 300, Mutation rate: 0.02
    pub fn quality() -> Self {
        Self {
            population_size: 200,
            generation_count: 300,
            mutation_rate: 0.02,
            ..Self::default()
        }
    }

    /// Picks a preset from the graph's vertex count.
    ///
    /// - `vertex_count < 30` → [`fast()`](Self::fast)
    /// - `30 ≤ vertex_count < 150` → [`balanced()`](Self::balanced)
    /// - `vertex_count ≥ 150` → [`quality()`](Self::quality)
    pub fn auto_select(vertex_count: usize) -> Self {
        if vertex_count < 30 {
            Self::fast()
        } else if vertex_count < 150 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Number of elites voting in the consensus for this configuration.
    pub fn elite_count(&self) -> usize {
        super::consensus::elite_count(self.elite_fraction, self.population_size)
    }

    /// Validates the configuration against a graph of `vertex_count` vertices.
    ///
    /// # Errors
    /// Returns [`CoverError::InvalidConfiguration`] describing the first
    /// violated constraint.
    pub fn validate(&self, vertex_count: usize) -> Result<()> {
        if vertex_count < 2 {
            return Err(CoverError::InvalidConfiguration(format!(
                "vertex_count must be at least 2 for one-point crossover, got {vertex_count}"
            )));
        }
        if self.population_size == 0 {
            return Err(CoverError::InvalidConfiguration(
                "population_size must be at least 1".into(),
            ));
        }
        if self.use_woc && self.population_size < 2 {
            return Err(CoverError::InvalidConfiguration(
                "population_size must be at least 2 when use_woc is enabled".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(CoverError::InvalidConfiguration(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !(self.elite_fraction > 0.0 && self.elite_fraction <= 1.0) {
            return Err(CoverError::InvalidConfiguration(format!(
                "elite_fraction must be in (0, 1], got {}",
                self.elite_fraction
            )));
        }
        Ok(())
    }
}
