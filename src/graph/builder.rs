//! Graph construction module

use crate::graph::Graph;

/// Builder for incrementally constructing a Graph from identity pairs
pub struct GraphBuilder {
    /// Graph under construction
    graph: Graph,

    /// Insert edges one-way only
    directed: bool,

    /// Number of edge insertions seen, duplicates included
    edges_added: usize,
}

impl GraphBuilder {
    /// Create a new graph builder with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            graph: Graph::with_capacity(capacity),
            directed: false,
            edges_added: 0,
        }
    }

    /// Choose between directed and undirected insertion
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Add an edge, creating either endpoint on first mention
    pub fn add_edge(&mut self, src_id: &str, dst_id: &str) {
        let src = self.graph.get_or_create(src_id);
        let dst = self.graph.get_or_create(dst_id);

        self.graph.link(src, dst);
        if !self.directed {
            self.graph.link(dst, src);
        }
        self.edges_added += 1;
    }

    /// Add a vertex with no edges
    pub fn add_vertex(&mut self, id: &str) {
        self.graph.get_or_create(id);
    }

    pub fn edges_added(&self) -> usize {
        self.edges_added
    }

    pub fn build(self) -> Graph {
        log::debug!(
            "Built graph with {} vertices from {} edge insertions",
            self.graph.vertex_count(),
            self.edges_added
        );
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
