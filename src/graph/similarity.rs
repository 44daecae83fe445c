//! Structural similarity and core classification
//!
//! Every clustering engine builds on these primitives. Similarity compares
//! closed neighborhoods (each vertex counts as its own neighbor); the
//! ε-neighborhood only ranges over open neighbors, so a vertex never counts
//! itself towards μ.

use crate::error::ScanResult;
use crate::graph::{Graph, VertexId};

impl Graph {
    /// `|N[u] ∩ N[v]| / sqrt(|N[u]| * |N[v]|)` over closed neighborhoods.
    /// Symmetric and within [0, 1].
    pub fn structural_similarity(&self, u: VertexId, v: VertexId) -> f64 {
        let nu = self.vertex(u).closed_neighbors();
        let nv = self.vertex(v).closed_neighbors();

        // Unreachable through Graph, which seeds every neighborhood with the vertex
        if nu.is_empty() || nv.is_empty() {
            return 0.0;
        }

        let (small, large) = if nu.len() <= nv.len() { (nu, nv) } else { (nv, nu) };
        let shared = small.iter().filter(|n| large.contains(n)).count();

        shared as f64 / ((nu.len() * nv.len()) as f64).sqrt()
    }

    /// Open neighbors of `v` whose similarity to `v` reaches `eps`
    pub fn epsilon_neighbors(&self, v: VertexId, eps: f64) -> Vec<VertexId> {
        self.vertex(v)
            .open_neighbors()
            .filter(|&u| self.structural_similarity(v, u) >= eps)
            .collect()
    }

    pub fn epsilon_neighborhood_size(&self, v: VertexId, eps: f64) -> usize {
        self.vertex(v)
            .open_neighbors()
            .filter(|&u| self.structural_similarity(v, u) >= eps)
            .count()
    }

    pub fn is_core(&self, v: VertexId, eps: f64, mu: usize) -> bool {
        self.epsilon_neighborhood_size(v, eps) >= mu
    }

    /// ε-neighbors of `v` if it is core, nothing otherwise. Not symmetric.
    pub fn directly_reachable(&self, v: VertexId, eps: f64, mu: usize) -> Vec<VertexId> {
        let neighbors = self.epsilon_neighbors(v, eps);
        if neighbors.len() >= mu {
            neighbors
        } else {
            Vec::new()
        }
    }

    /// Similarity between two vertices named by identity
    pub fn structural_similarity_by_id(&self, u: &str, v: &str) -> ScanResult<f64> {
        Ok(self.structural_similarity(self.id_of(u)?, self.id_of(v)?))
    }

    pub fn epsilon_neighbors_by_id(&self, v: &str, eps: f64) -> ScanResult<Vec<&str>> {
        let neighbors = self.epsilon_neighbors(self.id_of(v)?, eps);
        Ok(neighbors.into_iter().map(|n| self.label(n)).collect())
    }

    pub fn is_core_by_id(&self, v: &str, eps: f64, mu: usize) -> ScanResult<bool> {
        Ok(self.is_core(self.id_of(v)?, eps, mu))
    }
}
