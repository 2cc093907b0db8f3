//! Minimum vertex cover approximation by genetic search.
//!
//! Provides a genetic algorithm augmented with a Wisdom-of-Crowds (WoC)
//! consensus step:
//!
//! - **Graph**: Immutable undirected input, built from an edge list or
//!   sampled from the Erdős–Rényi G(n, p) model.
//! - **Genetic Algorithm (GA)**: Binary membership encoding, penalty
//!   fitness, stable ranking, elitism, one-point crossover and bit-flip
//!   mutation.
//! - **Wisdom of Crowds**: Majority vote over the elite subset, injected
//!   into every generation.
//! - **Experiments**: Repeated independent trials on fresh random graphs
//!   with per-trial records and a summary.
//!
//! # Architecture
//!
//! The engine is single-threaded and sequential. Randomness is injected
//! through any [`rand::Rng`], so every run is reproducible from a seed.
//! Rendering and persistence are left to callers, which observe a run
//! through [`ga::ProgressSink`] and consume [`ga::CoverResult`].

pub mod error;
pub mod experiment;
pub mod ga;
pub mod graph;

pub use error::CoverError;
pub use graph::Graph;
