//! Vertex cover fitness.
//!
//! `fitness = uncovered_edges + cover_size / N`
//!
//! The integer term counts constraint violations; the fractional term is
//! strictly below 1 whenever at least one vertex is left out, so among
//! candidates with the same number of uncovered edges the smaller cover
//! ranks first. Lower is better.

use super::types::{Candidate, Population};
use crate::error::{CoverError, Result};
use crate::graph::Graph;

/// Scores candidates against a fixed graph.
///
/// Evaluation is pure: the same candidate always yields the same score,
/// and nothing is cached between calls.
#[derive(Debug, Clone, Copy)]
pub struct CoverFitness<'g> {
    graph: &'g Graph,
}

impl<'g> CoverFitness<'g> {
    /// Creates an evaluator for `graph`.
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// The graph being scored against.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Number of edges with neither endpoint selected.
    pub fn uncovered_edges(&self, candidate: &Candidate) -> usize {
        self.graph.uncovered_edges(candidate.genes())
    }

    /// Scores one candidate.
    pub fn evaluate(&self, candidate: &Candidate) -> f64 {
        let n = self.graph.vertex_count() as f64;
        self.uncovered_edges(candidate) as f64 + candidate.cover_size() as f64 / n
    }

    /// Scores a candidate supplied from outside the run.
    ///
    /// # Errors
    /// Returns [`CoverError::GraphMismatch`] if the candidate does not have
    /// exactly one gene per vertex.
    pub fn try_evaluate(&self, candidate: &Candidate) -> Result<f64> {
        if candidate.len() != self.graph.vertex_count() {
            return Err(CoverError::GraphMismatch {
                expected: self.graph.vertex_count(),
                actual: candidate.len(),
            });
        }
        Ok(self.evaluate(candidate))
    }

    /// Scores every candidate, preserving population order.
    pub fn evaluate_all(&self, population: &Population) -> Vec<f64> {
        population.iter().map(|c| self.evaluate(c)).collect()
    }
}
