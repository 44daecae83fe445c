//! Cluster analysis module

pub mod sequential;
pub mod bulk;
pub mod metrics;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::ScanParams;
use crate::graph::{Graph, VertexId};

pub use bulk::{cluster_bulk, cluster_bulk_parallel, Connectivity};
pub use sequential::cluster_sequential;

/// Vertex to cluster id. Vertices left out are unclustered.
pub type ClusterAssignment = HashMap<VertexId, u32>;

/// Result of one clustering run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clustering {
    /// Cluster id per labeled vertex
    pub assignment: ClusterAssignment,

    /// Expansion levels (sequential) or merge rounds (bulk) performed
    pub rounds: usize,
}

impl Clustering {
    pub fn cluster_of(&self, v: VertexId) -> Option<u32> {
        self.assignment.get(&v).copied()
    }

    /// Number of labeled vertices
    pub fn len(&self) -> usize {
        self.assignment.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignment.is_empty()
    }

    /// Number of distinct cluster ids in use
    pub fn cluster_count(&self) -> usize {
        let mut ids: Vec<u32> = self.assignment.values().copied().collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    /// Group members by cluster. Members are ordered by identity, clusters by id.
    pub fn clusters(&self, graph: &Graph) -> Vec<Cluster> {
        let mut grouped: HashMap<u32, Vec<VertexId>> = HashMap::new();
        for (&v, &cluster) in &self.assignment {
            grouped.entry(cluster).or_default().push(v);
        }

        let mut clusters: Vec<Cluster> = grouped
            .into_iter()
            .map(|(id, mut members)| {
                members.sort_by(|&a, &b| graph.label(a).cmp(graph.label(b)));
                let density = metrics::calculate_density(graph, &members);
                Cluster {
                    id,
                    size: members.len(),
                    members,
                    density,
                }
            })
            .collect();

        clusters.sort_by_key(|c| c.id);
        clusters
    }

    /// Relabel ids by first appearance in vertex order, so two runs that
    /// found the same partition compare equal.
    pub fn canonical(&self, graph: &Graph) -> ClusterAssignment {
        let mut relabel: HashMap<u32, u32> = HashMap::new();
        let mut out = ClusterAssignment::with_capacity(self.assignment.len());

        for v in graph.vertex_ids() {
            if let Some(&cluster) = self.assignment.get(&v) {
                let next = relabel.len() as u32;
                let id = *relabel.entry(cluster).or_insert(next);
                out.insert(v, id);
            }
        }
        out
    }
}

/// A group of vertices sharing one cluster id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    /// Cluster id as assigned by the engine
    pub id: u32,

    /// Members of this cluster (arena indices)
    pub members: Vec<VertexId>,

    /// Size of the cluster
    pub size: usize,

    /// Density: arcs among members / potential arcs
    pub density: f32,
}

/// Available clustering strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    /// Breadth-first reachability expansion from each core
    Sequential,
    /// Round-based connectivity merge over core edges
    Bulk,
    /// The bulk merge with each round's hooks and flatten run on rayon
    BulkParallel,
}

impl Engine {
    pub const ALL: [Engine; 3] = [Engine::Sequential, Engine::Bulk, Engine::BulkParallel];

    pub fn run(self, graph: &Graph, params: ScanParams) -> Clustering {
        match self {
            Engine::Sequential => cluster_sequential(graph, params),
            Engine::Bulk => cluster_bulk(graph, params),
            Engine::BulkParallel => cluster_bulk_parallel(graph, params),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Engine::Sequential => "sequential",
            Engine::Bulk => "bulk",
            Engine::BulkParallel => "bulk-parallel",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
