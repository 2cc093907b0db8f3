//! Candidate representation.
//!
//! A [`Candidate`] is a fixed-length membership vector: gene `i` is `true`
//! when vertex `i` belongs to the proposed cover. Candidates are built
//! once and never modified afterwards; every operator returns a new one.

use rand::Rng;

/// A proposed vertex cover encoded as one binary gene per vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    genes: Vec<bool>,
}

/// One generation's candidates, in insertion order.
pub type Population = Vec<Candidate>;

impl Candidate {
    /// Wraps an existing gene vector.
    pub fn from_genes(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// Builds a candidate from 0/1 values; any non-zero value counts as selected.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            genes: bits.iter().map(|&b| b != 0).collect(),
        }
    }

    /// Creates a candidate whose genes are independent fair coin flips.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            genes: (0..len).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// Number of genes (equals the graph's vertex count).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns `true` if the candidate has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The gene vector.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Number of selected vertices.
    pub fn cover_size(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// Indices of the selected vertices, ascending.
    pub fn selected(&self) -> Vec<usize> {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &g)| g.then_some(i))
            .collect()
    }

    /// Genes as 0/1 values.
    pub fn to_bits(&self) -> Vec<u8> {
        self.genes.iter().map(|&g| u8::from(g)).collect()
    }
}

/// Creates `size` random candidates of `len` genes each.
pub fn random_population<R: Rng>(size: usize, len: usize, rng: &mut R) -> Population {
    (0..size).map(|_| Candidate::random(len, rng)).collect()
}
