//! Fitness ranking.
//!
//! [`Ranking`] orders a population ascending by fitness without moving
//! the candidates themselves: it holds indices into the population it was
//! built from. The sort is stable, so candidates with equal fitness keep
//! their original relative order and the earliest one wins ties.

use super::types::{Candidate, Population};

/// A population's candidates ordered best-first.
#[derive(Debug, Clone)]
pub struct Ranking {
    order: Vec<usize>,
    fitnesses: Vec<f64>,
}

impl Ranking {
    /// Ranks candidates by the given per-candidate fitness values.
    ///
    /// `fitnesses[i]` is the score of population member `i`.
    ///
    /// # Panics
    /// Panics if `fitnesses` is empty.
    pub fn new(fitnesses: Vec<f64>) -> Self {
        assert!(!fitnesses.is_empty(), "cannot rank an empty population");

        let mut order: Vec<usize> = (0..fitnesses.len()).collect();
        // `sort_by` is stable; ties keep index order.
        order.sort_by(|&a, &b| fitnesses[a].total_cmp(&fitnesses[b]));

        Self { order, fitnesses }
    }

    /// Number of ranked candidates.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false`; a ranking is never empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Population indices, best first.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Fitness of population member `index` (population order, not rank).
    pub fn fitness_of(&self, index: usize) -> f64 {
        self.fitnesses[index]
    }

    /// Population index of the rank-0 candidate.
    pub fn best_index(&self) -> usize {
        self.order[0]
    }

    /// Fitness of the rank-0 candidate.
    pub fn best_fitness(&self) -> f64 {
        self.fitnesses[self.order[0]]
    }

    /// The rank-0 candidate of `population`.
    pub fn best<'p>(&self, population: &'p Population) -> &'p Candidate {
        &population[self.best_index()]
    }

    /// The `count` best candidates of `population`, best first.
    ///
    /// `count` is capped at the population size.
    pub fn top<'p>(&self, population: &'p Population, count: usize) -> Vec<&'p Candidate> {
        self.order
            .iter()
            .take(count)
            .map(|&i| &population[i])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(n: usize) -> Population {
        (0..n)
            .map(|i| Candidate::from_bits(&[(i % 2) as u8, (i / 2 % 2) as u8]))
            .collect()
    }

    #[test]
    fn test_ascending_order() {
        let ranking = Ranking::new(vec![3.0, 0.5, 2.25, 1.0]);
        assert_eq!(ranking.order(), &[1, 3, 2, 0]);
        assert_eq!(ranking.best_index(), 1);
        assert!((ranking.best_fitness() - 0.5).abs() < 1e-12);
        assert!((ranking.fitness_of(2) - 2.25).abs() < 1e-12);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let ranking = Ranking::new(vec![1.5, 0.5, 1.5, 0.5, 1.5]);
        assert_eq!(ranking.order(), &[1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_best_and_top() {
        let pop = population(4);
        let ranking = Ranking::new(vec![2.0, 1.0, 0.0, 3.0]);
        assert_eq!(ranking.best(&pop), &pop[2]);

        let top = ranking.top(&pop, 2);
        assert_eq!(top, vec![&pop[2], &pop[1]]);

        assert_eq!(ranking.top(&pop, 10).len(), 4);
    }

    #[test]
    fn test_single_candidate() {
        let ranking = Ranking::new(vec![7.0]);
        assert_eq!(ranking.len(), 1);
        assert!(!ranking.is_empty());
        assert_eq!(ranking.best_index(), 0);
    }

    #[test]
    #[should_panic(expected = "cannot rank an empty population")]
    fn test_empty_panics() {
        Ranking::new(Vec::new());
    }
}
