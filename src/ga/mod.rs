//! Genetic algorithm with Wisdom-of-Crowds consensus for vertex cover.
//!
//! Each generation the population is scored, ranked, and replaced by:
//! a majority-vote consensus of the elite subset (optional), the single
//! best candidate (elitism), and offspring of one-point crossover plus
//! bit-flip mutation drawn from the whole previous generation.
//!
//! # Key Types
//!
//! - [`Candidate`]: One proposed cover, one binary gene per vertex
//! - [`CoverFitness`]: Uncovered-edge count plus a cover-size tie-breaker
//! - [`Ranking`]: Stable best-first ordering of a scored population
//! - [`CoverConfig`]: Run parameters (population, generations, rates, WoC)
//! - [`CoverRunner`]: Executes the evolutionary loop
//! - [`CoverResult`]: Final cover with statistics
//! - [`ProgressSink`]: Receives a [`GenerationReport`] after each generation
//!
//! # Submodules
//!
//! - [`operators`]: One-point crossover, bit-flip mutation, reproduction
//! - [`consensus`]: Elite majority vote
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Yi, Steyvers, Lee & Dry (2012), "The Wisdom of the Crowd in Combinatorial Problems"

mod config;
pub mod consensus;
mod fitness;
pub mod operators;
mod progress;
mod runner;
mod selection;
mod types;

pub use config::CoverConfig;
pub use fitness::CoverFitness;
pub use progress::{GenerationReport, NoProgress, ProgressSink};
pub use runner::{next_generation, CoverResult, CoverRunner};
pub use selection::Ranking;
pub use types::{random_population, Candidate, Population};
