//! Undirected simple graphs.
//!
//! [`Graph`] is the immutable input to a run. It is built either from an
//! explicit edge list ([`Graph::new`]) or from the Erdős–Rényi G(n, p)
//! model ([`Graph::erdos_renyi`]), which is what the experiment driver
//! uses to produce fresh instances per trial.
//!
//! # References
//!
//! - Erdős & Rényi (1959), "On Random Graphs I"
//! - Gilbert (1959), "Random Graphs"

use crate::error::{CoverError, Result};
use rand::Rng;
use std::collections::HashSet;

/// An undirected graph over vertices `0..vertex_count`.
///
/// Edges are stored as `(u, v)` with `u < v`, without duplicates, in the
/// order they were first supplied.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

impl Graph {
    /// Builds a graph from an edge list.
    ///
    /// Edges are unordered: `(1, 0)` and `(0, 1)` name the same edge and
    /// only the first occurrence is kept.
    ///
    /// # Errors
    /// Returns [`CoverError::InvalidGraph`] if `vertex_count` is zero, an
    /// endpoint is out of range, or an edge is a self-loop.
    pub fn new(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        if vertex_count == 0 {
            return Err(CoverError::InvalidGraph(
                "graph must have at least one vertex".into(),
            ));
        }

        let mut seen = HashSet::with_capacity(edges.len());
        let mut normalized = Vec::with_capacity(edges.len());
        for &(u, v) in edges {
            if u >= vertex_count || v >= vertex_count {
                return Err(CoverError::InvalidGraph(format!(
                    "edge ({u}, {v}) references a vertex outside 0..{vertex_count}"
                )));
            }
            if u == v {
                return Err(CoverError::InvalidGraph(format!("self-loop on vertex {u}")));
            }
            let edge = (u.min(v), u.max(v));
            if seen.insert(edge) {
                normalized.push(edge);
            }
        }

        Ok(Self {
            vertex_count,
            edges: normalized,
        })
    }

    /// Samples a G(n, p) random graph.
    ///
    /// Every unordered pair `{u, v}` is included independently with
    /// probability `p` (clamped to `[0, 1]`). Pairs are visited in
    /// lexicographic order.
    ///
    /// # Errors
    /// Returns [`CoverError::InvalidGraph`] if `n` is zero or `p` is NaN.
    pub fn erdos_renyi<R: Rng>(n: usize, p: f64, rng: &mut R) -> Result<Self> {
        if n == 0 {
            return Err(CoverError::InvalidGraph(
                "graph must have at least one vertex".into(),
            ));
        }
        if p.is_nan() {
            return Err(CoverError::InvalidGraph("edge probability is NaN".into()));
        }
        let p = p.clamp(0.0, 1.0);

        let mut edges = Vec::new();
        for u in 0..n {
            for v in (u + 1)..n {
                if rng.random_bool(p) {
                    edges.push((u, v));
                }
            }
        }

        Ok(Self {
            vertex_count: n,
            edges,
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The normalized edge list.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Number of edges incident to `vertex`.
    pub fn degree(&self, vertex: usize) -> usize {
        self.edges
            .iter()
            .filter(|&&(u, v)| u == vertex || v == vertex)
            .count()
    }

    /// Counts edges with neither endpoint selected in `genes`.
    ///
    /// # Panics
    /// Panics if `genes` is shorter than [`vertex_count`](Self::vertex_count).
    pub fn uncovered_edges(&self, genes: &[bool]) -> usize {
        self.edges
            .iter()
            .filter(|&&(u, v)| !(genes[u] || genes[v]))
            .count()
    }

    /// Returns `true` if `genes` selects at least one endpoint of every edge.
    pub fn is_cover(&self, genes: &[bool]) -> bool {
        self.uncovered_edges(genes) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn path4() -> Graph {
        Graph::new(4, &[(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn test_new_normalizes_and_dedups() {
        let g = Graph::new(3, &[(1, 0), (0, 1), (2, 1)]).unwrap();
        assert_eq!(g.edges(), &[(0, 1), (1, 2)]);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_new_rejects_bad_input() {
        assert!(Graph::new(0, &[]).is_err());
        assert!(Graph::new(3, &[(0, 3)]).is_err());
        assert!(matches!(
            Graph::new(3, &[(1, 1)]),
            Err(CoverError::InvalidGraph(_))
        ));
    }

    #[test]
    fn test_edgeless_graph() {
        let g = Graph::new(5, &[]).unwrap();
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_cover(&[false; 5]));
    }

    #[test]
    fn test_uncovered_edges() {
        let g = path4();
        assert_eq!(g.uncovered_edges(&[true, false, true, false]), 0);
        assert_eq!(g.uncovered_edges(&[false; 4]), 3);
        assert_eq!(g.uncovered_edges(&[true, false, false, false]), 2);
        assert!(g.is_cover(&[false, true, true, false]));
        assert!(!g.is_cover(&[false, true, false, false]));
    }

    #[test]
    fn test_degree() {
        let g = path4();
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(1), 2);
        assert_eq!(g.degree(3), 1);
    }

    #[test]
    fn test_erdos_renyi_extremes() {
        let mut rng = StdRng::seed_from_u64(42);

        let empty = Graph::erdos_renyi(10, 0.0, &mut rng).unwrap();
        assert_eq!(empty.edge_count(), 0);

        let complete = Graph::erdos_renyi(10, 1.0, &mut rng).unwrap();
        assert_eq!(complete.edge_count(), 45);
        assert!(complete.edges().iter().all(|&(u, v)| u < v));
    }

    #[test]
    fn test_erdos_renyi_reproducible() {
        let a = Graph::erdos_renyi(15, 0.3, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = Graph::erdos_renyi(15, 0.3, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_erdos_renyi_rejects_invalid() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Graph::erdos_renyi(0, 0.5, &mut rng).is_err());
        assert!(Graph::erdos_renyi(5, f64::NAN, &mut rng).is_err());
    }
}
