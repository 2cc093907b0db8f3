//! Wisdom-of-Crowds consensus.
//!
//! The elite subset of a ranked population votes gene by gene; a gene is
//! set in the consensus candidate only when a strict majority of elites
//! set it. Exact ties resolve to `false`.
//!
//! # References
//!
//! - Surowiecki (2004), *The Wisdom of Crowds*
//! - Yi, Steyvers, Lee & Dry (2012), "The Wisdom of the Crowd in
//!   Combinatorial Problems"

use super::selection::Ranking;
use super::types::{Candidate, Population};

/// Number of elites voting in the consensus.
///
/// `floor(elite_fraction * population_size)`, but never less than 1.
pub fn elite_count(elite_fraction: f64, population_size: usize) -> usize {
    ((elite_fraction * population_size as f64).floor() as usize).max(1)
}

/// Majority vote over `elites`.
///
/// Gene `i` of the result is `true` iff `2 * votes_i > elites.len()`.
///
/// # Panics
/// Panics if `elites` is empty.
pub fn majority_vote(elites: &[&Candidate]) -> Candidate {
    assert!(!elites.is_empty(), "consensus needs at least one elite");

    let len = elites[0].len();
    let mut votes = vec![0usize; len];
    for elite in elites {
        for (count, &gene) in votes.iter_mut().zip(elite.genes()) {
            *count += usize::from(gene);
        }
    }

    let genes = votes.into_iter().map(|v| 2 * v > elites.len()).collect();
    Candidate::from_genes(genes)
}

/// Builds the consensus candidate from the best `elite_count` members.
pub fn consensus(population: &Population, ranking: &Ranking, elite_count: usize) -> Candidate {
    let elites = ranking.top(population, elite_count.max(1));
    majority_vote(&elites)
}
