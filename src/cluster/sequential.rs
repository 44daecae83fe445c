//! Sequential SCAN: breadth-first reachability expansion
//!
//! Vertices are visited in arena order. Each unlabeled core vertex opens a
//! new cluster, which then grows level by level: every vertex on the
//! frontier contributes its directly reachable set, and vertices that had no
//! label before are queued for the next level. A vertex reached by a later
//! expansion takes the later cluster id (no hub handling).
//!
//! The first frontier is the core vertex's closed neighborhood, so adjacent
//! cores contribute their reachable sets even when they are not ε-similar
//! to the seed.

use std::collections::hash_map::Entry;

use crate::cluster::{ClusterAssignment, Clustering};
use crate::config::ScanParams;
use crate::graph::{Graph, VertexId};

/// Cluster `graph` by reachability expansion. Outliers are left unlabeled.
pub fn cluster_sequential(graph: &Graph, params: ScanParams) -> Clustering {
    let ScanParams { epsilon, mu } = params;
    log::info!(
        "Running sequential SCAN over {} vertices (eps={}, mu={})",
        graph.vertex_count(),
        epsilon,
        mu
    );

    let mut assignment = ClusterAssignment::new();
    let mut next_cluster: u32 = 0;
    let mut levels = 0;

    for v in graph.vertex_ids() {
        if assignment.contains_key(&v) || !graph.is_core(v, epsilon, mu) {
            continue;
        }

        let cluster = next_cluster;
        next_cluster += 1;
        assignment.insert(v, cluster);

        let mut frontier: Vec<VertexId> = graph.vertex(v).closed_neighbors().iter().copied().collect();
        while !frontier.is_empty() {
            levels += 1;
            let mut next = Vec::new();

            for y in frontier {
                for x in graph.directly_reachable(y, epsilon, mu) {
                    match assignment.entry(x) {
                        Entry::Vacant(slot) => {
                            slot.insert(cluster);
                            next.push(x);
                        }
                        Entry::Occupied(mut slot) => {
                            slot.insert(cluster);
                        }
                    }
                }
            }

            frontier = next;
        }
    }

    log::info!(
        "Sequential SCAN labeled {} vertices into {} clusters ({} levels)",
        assignment.len(),
        next_cluster,
        levels
    );

    Clustering {
        assignment,
        rounds: levels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn build(edges: &[(&str, &str)]) -> Graph {
        let mut builder = GraphBuilder::default();
        for (a, b) in edges {
            builder.add_edge(a, b);
        }
        builder.build()
    }

    fn cluster_by_id(g: &Graph, c: &Clustering, id: &str) -> Option<u32> {
        c.cluster_of(g.id_of(id).unwrap())
    }

    #[test]
    fn path_is_one_cluster_at_half() {
        let g = build(&[("A", "B"), ("B", "C"), ("C", "D")]);
        let c = cluster_sequential(&g, ScanParams::new(0.5, 1));

        assert_eq!(c.len(), 4);
        assert_eq!(c.cluster_count(), 1);
    }

    #[test]
    fn adjacent_core_relabels_through_raw_seed() {
        // sim(A,B) = sim(C,D) ~ 0.816, sim(B,C) ~ 0.667: every vertex is core
        // at mu=1 but B and C are not ε-similar. C's seed still holds B, whose
        // reachable set {A} moves into C's cluster. B keeps the first id.
        let g = build(&[("A", "B"), ("B", "C"), ("C", "D")]);
        let c = cluster_sequential(&g, ScanParams::new(0.7, 1));

        assert_eq!(cluster_by_id(&g, &c, "A"), Some(1));
        assert_eq!(cluster_by_id(&g, &c, "B"), Some(0));
        assert_eq!(cluster_by_id(&g, &c, "C"), Some(1));
        assert_eq!(cluster_by_id(&g, &c, "D"), Some(1));
        assert_eq!(cluster_by_id(&g, &c, "A"), cluster_by_id(&g, &c, "C"));
    }

    #[test]
    fn expansion_follows_chains_of_cores() {
        // A long path: every vertex is core at mu=1, eps=0.5, so the
        // expansion must travel the whole chain from the first seed.
        let ids: Vec<String> = (0..12).map(|i| format!("v{:02}", i)).collect();
        let edges: Vec<(&str, &str)> = ids.windows(2).map(|w| (w[0].as_str(), w[1].as_str())).collect();
        let g = build(&edges);
        let c = cluster_sequential(&g, ScanParams::new(0.5, 1));

        assert_eq!(c.len(), 12);
        assert_eq!(c.cluster_count(), 1);
        assert!(c.rounds > 2);
    }

    #[test]
    fn non_core_leaves_are_outliers_without_core_neighbor() {
        // Star: center has 4 leaves. sim(center, leaf) = 2 / sqrt(10) ~ 0.632
        let g = build(&[("c", "l1"), ("c", "l2"), ("c", "l3"), ("c", "l4")]);

        let c = cluster_sequential(&g, ScanParams::new(0.6, 3));
        assert_eq!(c.len(), 5);
        assert_eq!(cluster_by_id(&g, &c, "c"), Some(0));

        let c = cluster_sequential(&g, ScanParams::new(0.7, 1));
        assert!(c.is_empty());
    }

    #[test]
    fn isolated_vertices_stay_unlabeled() {
        let mut builder = GraphBuilder::default();
        builder.add_edge("a", "b");
        builder.add_vertex("lonely");
        let g = builder.build();

        let c = cluster_sequential(&g, ScanParams::new(0.5, 1));
        assert_eq!(cluster_by_id(&g, &c, "lonely"), None);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn empty_graph_gives_empty_clustering() {
        let c = cluster_sequential(&Graph::new(), ScanParams::default());
        assert!(c.is_empty());
        assert_eq!(c.rounds, 0);
    }
}
