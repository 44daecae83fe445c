//! Arena-backed adjacency-set graph

use std::collections::HashMap;
use std::mem;

use crate::error::{ScanError, ScanResult};
use crate::graph::{Vertex, VertexId};

/// Graph owning all its vertices; edges live only in neighbor sets
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertex arena, indexed by `VertexId`
    vertices: Vec<Vertex>,

    /// Mapping from identity strings to arena indices
    index: HashMap<String, VertexId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new graph with pre-allocated capacity
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            index: HashMap::with_capacity(vertex_count),
        }
    }

    /// Add a vertex if the identity is new. Returns whether it was created.
    pub fn add_id(&mut self, id: &str) -> bool {
        if self.index.contains_key(id) {
            return false;
        }
        self.get_or_create(id);
        true
    }

    /// Get or create the vertex for the given identity
    pub fn get_or_create(&mut self, id: &str) -> VertexId {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }

        let idx = VertexId(self.vertices.len() as u32);
        self.index.insert(id.to_string(), idx);
        self.vertices.push(Vertex::new(id, idx));
        idx
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up the arena index of an identity
    pub fn id_of(&self, id: &str) -> ScanResult<VertexId> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| ScanError::VertexNotFound(id.to_string()))
    }

    /// Vertex at an arena index. Indices come from this graph, so this never misses.
    #[inline]
    pub fn vertex(&self, v: VertexId) -> &Vertex {
        &self.vertices[v.index()]
    }

    /// Identity string of an arena index
    #[inline]
    pub fn label(&self, v: VertexId) -> &str {
        self.vertices[v.index()].id()
    }

    /// Add a directed edge between two existing vertices.
    /// Returns false if either endpoint is missing.
    pub fn add_directed_edge(&mut self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&f), Some(&t)) => {
                self.link(f, t);
                true
            }
            _ => false,
        }
    }

    /// Add an undirected edge between two existing vertices.
    /// Returns false if either endpoint is missing.
    pub fn add_undirected_edge(&mut self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&a), Some(&b)) => {
                self.link(a, b);
                self.link(b, a);
                true
            }
            _ => false,
        }
    }

    /// Remove the arc `from -> to`. Clustering never calls this.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&f), Some(&t)) => self.vertices[f.index()].remove_neighbor(t),
            _ => false,
        }
    }

    pub(crate) fn link(&mut self, from: VertexId, to: VertexId) {
        self.vertices[from.index()].add_neighbor(to);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored arcs, self-membership excluded
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::degree).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All arena indices, in insertion order
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + Clone {
        (0..self.vertices.len() as u32).map(VertexId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Rank of every vertex under identity order: `rank[v] < rank[u]` iff `id(v) < id(u)`
    pub fn identity_ranks(&self) -> Vec<u32> {
        let mut order: Vec<VertexId> = self.vertex_ids().collect();
        order.sort_unstable_by(|&a, &b| self.label(a).cmp(self.label(b)));

        let mut ranks = vec![0u32; order.len()];
        for (rank, v) in order.into_iter().enumerate() {
            ranks[v.index()] = rank as u32;
        }
        ranks
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let arena = self.vertices.capacity() * mem::size_of::<Vertex>();
        let ids: usize = self.vertices.iter().map(|v| v.id().len() * 2).sum();
        // BTreeSet nodes carry overhead beyond the payload; count payload only
        let adjacency = self.vertices.iter().map(|v| v.closed_size()).sum::<usize>()
            * mem::size_of::<VertexId>();

        base + arena + ids + adjacency
    }
}
