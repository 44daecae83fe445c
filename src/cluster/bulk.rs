//! Bulk connectivity SCAN: round-based union-find over core edges
//!
//! Every (ε-neighbor, core) pair becomes an edge. Connected components over
//! those edges are found with a pointer forest:
//!
//! 1. Each round, every edge whose endpoints still have different parents
//!    hooks one parent onto the other and is kept; edges whose endpoints
//!    already share a parent are dropped for good.
//! 2. After all hooks of the round, a separate flatten pass points every
//!    vertex straight at its root.
//!
//! Hooks always point the larger identity at the smaller one. On even rounds
//! either direction of an edge may hook; on odd rounds only edges whose first
//! endpoint has the smaller parent do. An edge skipped on an odd round is
//! still kept in the worklist and hooks on a later round. The forest
//! therefore never contains a cycle, and every even round with a live edge
//! merges at least two roots.
//!
//! Components of size one are dropped from the result.
//!
//! The parallel execution runs each round's hooks on rayon with one atomic
//! slot per vertex. A parent is only repointed while it is still a root
//! (compare-and-set), and the flatten reads a settled forest because rayon
//! joins all hook tasks before it starts.

use std::mem;
use std::sync::atomic::{AtomicU32, Ordering};

use rayon::prelude::*;

use crate::cluster::{ClusterAssignment, Clustering};
use crate::config::ScanParams;
use crate::graph::{Edge, Graph, VertexId};

/// How a round's hook and flatten passes are executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Execution {
    /// One edge at a time; later hooks in a round may overwrite earlier ones
    Sequential,
    /// rayon workers with compare-and-set hooks
    Parallel,
}

/// Cluster `graph` with the bulk connectivity merge on the calling thread
pub fn cluster_bulk(graph: &Graph, params: ScanParams) -> Clustering {
    let mut cc = Connectivity::new(graph, params, Execution::Sequential);
    cc.run();
    cc.finish()
}

/// Cluster `graph` with the bulk connectivity merge on the rayon pool
pub fn cluster_bulk_parallel(graph: &Graph, params: ScanParams) -> Clustering {
    let mut cc = Connectivity::new(graph, params, Execution::Parallel);
    cc.run();
    cc.finish()
}

/// All (ε-neighbor, core) pairs of the graph, in vertex order
pub fn core_edges(graph: &Graph, params: ScanParams) -> Vec<Edge> {
    graph
        .vertex_ids()
        .flat_map(|v| core_edges_of(graph, v, params))
        .collect()
}

fn core_edges_of(graph: &Graph, v: VertexId, params: ScanParams) -> Vec<Edge> {
    graph
        .directly_reachable(v, params.epsilon, params.mu)
        .into_iter()
        .map(|u| Edge::new(u, v))
        .collect()
}

/// Which root to repoint for an edge whose endpoint parents differ.
/// Returns `(child, new_parent)`, or `None` when the round's parity skips it.
fn choose_hook(round: usize, pa: u32, pb: u32, ranks: &[u32]) -> Option<(u32, u32)> {
    let a_above = ranks[pa as usize] > ranks[pb as usize];
    if round % 2 == 0 && a_above {
        Some((pa, pb))
    } else if !a_above {
        Some((pb, pa))
    } else {
        None
    }
}

/// State of one bulk connectivity run, steppable one round at a time
pub struct Connectivity<'g> {
    graph: &'g Graph,

    /// Identity-order rank per vertex, the hook tie-breaker
    ranks: Vec<u32>,

    /// parent[v]; a root satisfies parent[r] == r
    parents: Vec<AtomicU32>,

    /// Edges whose endpoints were not yet co-rooted last round
    worklist: Vec<Edge>,

    rounds: usize,

    execution: Execution,
}

impl<'g> Connectivity<'g> {
    /// Extract core edges and start every vertex as its own root
    pub fn new(graph: &'g Graph, params: ScanParams, execution: Execution) -> Self {
        log::info!(
            "Running bulk SCAN ({:?}) over {} vertices (eps={}, mu={})",
            execution,
            graph.vertex_count(),
            params.epsilon,
            params.mu
        );

        let worklist: Vec<Edge> = match execution {
            Execution::Sequential => core_edges(graph, params),
            Execution::Parallel => (0..graph.vertex_count() as u32)
                .into_par_iter()
                .flat_map_iter(|v| core_edges_of(graph, VertexId(v), params))
                .collect(),
        };
        log::info!("Extracted {} core edges", worklist.len());

        let parents = (0..graph.vertex_count() as u32).map(AtomicU32::new).collect();

        Self {
            graph,
            ranks: graph.identity_ranks(),
            parents,
            worklist,
            rounds: 0,
            execution,
        }
    }

    /// Edges still waiting to be merged
    pub fn worklist(&self) -> &[Edge] {
        &self.worklist
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn is_converged(&self) -> bool {
        self.worklist.is_empty()
    }

    /// Current parent of every vertex, indexed by arena slot
    pub fn parents(&self) -> Vec<VertexId> {
        self.parents
            .iter()
            .map(|p| VertexId(p.load(Ordering::Acquire)))
            .collect()
    }

    #[inline]
    fn parent(&self, v: VertexId) -> u32 {
        self.parents[v.index()].load(Ordering::Acquire)
    }

    /// Run one hook pass followed by one flatten pass.
    /// Returns false without doing anything once converged.
    pub fn run_round(&mut self) -> bool {
        if self.is_converged() {
            return false;
        }

        let worklist = mem::take(&mut self.worklist);
        let before = worklist.len();
        self.worklist = match self.execution {
            Execution::Sequential => self.hook_sequential(worklist),
            Execution::Parallel => self.hook_parallel(worklist),
        };

        match self.execution {
            Execution::Sequential => self.flatten_sequential(),
            Execution::Parallel => self.flatten_parallel(),
        }

        log::debug!(
            "Round {}: {} edges in, {} kept",
            self.rounds,
            before,
            self.worklist.len()
        );
        self.rounds += 1;

        debug_assert!(
            self.rounds <= 2 * self.graph.vertex_count() + 2,
            "connectivity merge failed to converge"
        );
        true
    }

    /// Run rounds until no edge is left
    pub fn run(&mut self) {
        while self.run_round() {}
        log::info!("Connectivity converged after {} rounds", self.rounds);
    }

    fn hook_sequential(&self, worklist: Vec<Edge>) -> Vec<Edge> {
        let mut kept = Vec::with_capacity(worklist.len());
        for edge in worklist {
            let pa = self.parent(edge.from);
            let pb = self.parent(edge.to);
            if pa == pb {
                continue;
            }

            kept.push(edge);
            if let Some((child, root)) = choose_hook(self.rounds, pa, pb, &self.ranks) {
                self.parents[child as usize].store(root, Ordering::Release);
            }
        }
        kept
    }

    fn hook_parallel(&self, worklist: Vec<Edge>) -> Vec<Edge> {
        worklist
            .into_par_iter()
            .filter(|edge| {
                let pa = self.parent(edge.from);
                let pb = self.parent(edge.to);
                if pa == pb {
                    return false;
                }

                if let Some((child, root)) = choose_hook(self.rounds, pa, pb, &self.ranks) {
                    // Lost races leave the edge in the worklist for the next round
                    let _ = self.parents[child as usize].compare_exchange(
                        child,
                        root,
                        Ordering::AcqRel,
                        Ordering::Acquire,
                    );
                }
                true
            })
            .collect()
    }

    fn find_root(&self, v: u32) -> u32 {
        let mut current = v;
        loop {
            let next = self.parents[current as usize].load(Ordering::Acquire);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn flatten_sequential(&self) {
        for v in 0..self.parents.len() as u32 {
            let root = self.find_root(v);
            self.parents[v as usize].store(root, Ordering::Release);
        }
    }

    fn flatten_parallel(&self) {
        // Resolve every root before writing any, so no walk sees a half-updated forest
        let roots: Vec<u32> = (0..self.parents.len() as u32)
            .into_par_iter()
            .map(|v| self.find_root(v))
            .collect();

        self.parents
            .par_iter()
            .zip(roots.into_par_iter())
            .for_each(|(slot, root)| slot.store(root, Ordering::Release));
    }

    /// Label components in vertex order and drop singletons
    pub fn finish(self) -> Clustering {
        let n = self.parents.len();
        let mut root_to_cluster = vec![u32::MAX; n];
        let mut cluster_sizes: Vec<usize> = Vec::new();
        let mut labels = Vec::with_capacity(n);

        for v in 0..n as u32 {
            let root = self.find_root(v) as usize;
            if root_to_cluster[root] == u32::MAX {
                root_to_cluster[root] = cluster_sizes.len() as u32;
                cluster_sizes.push(0);
            }
            let cluster = root_to_cluster[root];
            cluster_sizes[cluster as usize] += 1;
            labels.push(cluster);
        }

        let assignment: ClusterAssignment = labels
            .into_iter()
            .enumerate()
            .filter(|&(_, cluster)| cluster_sizes[cluster as usize] > 1)
            .map(|(v, cluster)| (VertexId(v as u32), cluster))
            .collect();

        log::info!(
            "Bulk SCAN labeled {} vertices; {} components before singleton filtering",
            assignment.len(),
            cluster_sizes.len()
        );

        Clustering {
            assignment,
            rounds: self.rounds,
        }
    }
}
