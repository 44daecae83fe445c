//! Cluster statistics and metrics

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cluster::Clustering;
use crate::graph::{Graph, VertexId};

/// Calculate density (actual arcs / potential arcs)
pub fn calculate_density(graph: &Graph, members: &[VertexId]) -> f32 {
    let n = members.len();
    if n <= 1 {
        return 1.0; // By convention, singleton clusters have density 1
    }

    // Potential arcs = n * (n - 1); undirected edges count once per direction
    let potential_edges = n * (n - 1);

    let member_set: HashSet<VertexId> = members.iter().copied().collect();

    let actual_edges: usize = members
        .iter()
        .map(|&v| {
            graph
                .vertex(v)
                .open_neighbors()
                .filter(|n| member_set.contains(n))
                .count()
        })
        .sum();

    actual_edges as f32 / potential_edges as f32
}

/// Aggregate figures for one clustering run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub cluster_count: usize,
    pub clustered_vertices: usize,
    pub unclustered_vertices: usize,
    pub largest_cluster_size: usize,
    pub smallest_cluster_size: usize,
    pub avg_cluster_size: f64,
    pub avg_density: f64,
    pub rounds: usize,
}

/// Summarize a clustering of `graph`
pub fn summarize(graph: &Graph, clustering: &Clustering) -> ClusterSummary {
    let clusters = clustering.clusters(graph);
    let divisor = if clusters.is_empty() { 1.0 } else { clusters.len() as f64 };

    ClusterSummary {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        cluster_count: clusters.len(),
        clustered_vertices: clustering.len(),
        unclustered_vertices: graph.vertex_count() - clustering.len(),
        largest_cluster_size: clusters.iter().map(|c| c.size).max().unwrap_or(0),
        smallest_cluster_size: clusters.iter().map(|c| c.size).min().unwrap_or(0),
        avg_cluster_size: clustering.len() as f64 / divisor,
        avg_density: clusters.iter().map(|c| c.density as f64).sum::<f64>() / divisor,
        rounds: clustering.rounds,
    }
}
