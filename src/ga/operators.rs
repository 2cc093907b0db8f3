//! Binary genetic operators.
//!
//! Reproduction draws two parents uniformly at random, with replacement,
//! from the previous generation, combines them by one-point crossover and
//! then flips each gene independently with the mutation rate.
//!
//! # Crossover Operators
//!
//! - [`one_point_crossover`]: prefix of parent1, suffix of parent2, O(n)
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: per-gene Bernoulli flip, O(n)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Spears & De Jong (1991), "An Analysis of Multi-Point Crossover"

use super::types::{Candidate, Population};
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Child made of `parent1[..point]` followed by `parent2[point..]`.
///
/// # Panics
/// Panics if parents have different lengths or `point` exceeds their length.
pub fn crossover_at(parent1: &Candidate, parent2: &Candidate, point: usize) -> Candidate {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(point <= n, "crossover point {point} out of range for length {n}");

    let mut genes = Vec::with_capacity(n);
    genes.extend_from_slice(&parent1.genes()[..point]);
    genes.extend_from_slice(&parent2.genes()[point..]);
    Candidate::from_genes(genes)
}

/// One-point crossover with the cut drawn uniformly from `1..=n-1`.
///
/// Both parents contribute at least one gene.
///
/// # Panics
/// Panics if parents have different lengths or fewer than 2 genes.
pub fn one_point_crossover<R: Rng>(
    parent1: &Candidate,
    parent2: &Candidate,
    rng: &mut R,
) -> Candidate {
    let n = parent1.len();
    assert!(n >= 2, "one-point crossover needs at least 2 genes, got {n}");

    let point = rng.random_range(1..n);
    crossover_at(parent1, parent2, point)
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Returns a copy of `candidate` with each gene flipped with probability `rate`.
///
/// `rate` is clamped to `[0, 1]`.
pub fn bit_flip_mutation<R: Rng>(candidate: &Candidate, rate: f64, rng: &mut R) -> Candidate {
    let rate = rate.clamp(0.0, 1.0);
    let genes = candidate
        .genes()
        .iter()
        .map(|&g| if rng.random_bool(rate) { !g } else { g })
        .collect();
    Candidate::from_genes(genes)
}

// ============================================================================
// Reproduction
// ============================================================================

/// Index of a parent drawn uniformly from `0..population_size`.
pub fn uniform_parent<R: Rng>(population_size: usize, rng: &mut R) -> usize {
    assert!(population_size > 0, "cannot select from empty population");
    rng.random_range(0..population_size)
}

/// Breeds one offspring from the full previous generation.
///
/// Parents are chosen independently, so the same candidate may be drawn
/// twice.
///
/// # Panics
/// Panics if `population` is empty or candidates have fewer than 2 genes.
pub fn reproduce<R: Rng>(population: &Population, mutation_rate: f64, rng: &mut R) -> Candidate {
    let p1 = &population[uniform_parent(population.len(), rng)];
    let p2 = &population[uniform_parent(population.len(), rng)];
    let child = one_point_crossover(p1, p2, rng);
    bit_flip_mutation(&child, mutation_rate, rng)
}
