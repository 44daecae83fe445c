use std::collections::HashMap;

use petgraph::unionfind::UnionFind;
use proptest::prelude::*;
use scan_cluster::cluster::bulk::{core_edges, Connectivity, Execution};
use scan_cluster::cluster::{cluster_bulk, cluster_bulk_parallel, cluster_sequential};
use scan_cluster::{Graph, GraphBuilder, ScanParams};

fn build(edges: &[(u8, u8)], isolated: u8) -> Graph {
    let mut builder = GraphBuilder::default();
    for &(a, b) in edges {
        builder.add_edge(&format!("v{}", a), &format!("v{}", b));
    }
    for i in 0..isolated {
        builder.add_vertex(&format!("iso{}", i));
    }
    builder.build()
}

fn edge_list() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..14, 0u8..14), 0..45)
}

/// Component sizes over core edges, computed independently with petgraph
fn oracle(graph: &Graph, params: ScanParams) -> (UnionFind<usize>, HashMap<usize, usize>) {
    let mut uf = UnionFind::new(graph.vertex_count());
    for edge in core_edges(graph, params) {
        uf.union(edge.from.index(), edge.to.index());
    }
    let mut sizes = HashMap::new();
    for v in 0..graph.vertex_count() {
        *sizes.entry(uf.find(v)).or_insert(0) += 1;
    }
    (uf, sizes)
}

proptest! {
    #[test]
    fn prop_similarity_bounded_and_symmetric(edges in edge_list()) {
        let g = build(&edges, 0);
        for u in g.vertex_ids() {
            for v in g.vertex_ids() {
                let s = g.structural_similarity(u, v);
                prop_assert!((0.0..=1.0).contains(&s));
                prop_assert_eq!(s, g.structural_similarity(v, u));
            }
            prop_assert!((g.structural_similarity(u, u) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn prop_lower_mu_keeps_cores(edges in edge_list(), eps in 0.0f64..=1.0, mu1 in 0usize..4, extra in 1usize..4) {
        let g = build(&edges, 0);
        let mu2 = mu1 + extra;
        for v in g.vertex_ids() {
            if g.is_core(v, eps, mu2) {
                prop_assert!(g.is_core(v, eps, mu1));
            }
        }
    }

    #[test]
    fn prop_bulk_filters_singletons(edges in edge_list(), isolated in 0u8..4, eps in 0.0f64..=1.0, mu in 1usize..4) {
        let g = build(&edges, isolated);
        let params = ScanParams::new(eps, mu);
        let clustering = cluster_bulk(&g, params);

        let mut counts: HashMap<u32, usize> = HashMap::new();
        for &cluster in clustering.assignment.values() {
            *counts.entry(cluster).or_insert(0) += 1;
        }
        prop_assert!(counts.values().all(|&n| n > 1));

        let (uf, sizes) = oracle(&g, params);
        for v in g.vertex_ids() {
            let labeled = clustering.cluster_of(v).is_some();
            prop_assert_eq!(labeled, sizes[&uf.find(v.index())] > 1);
        }
    }

    #[test]
    fn prop_bulk_matches_reference_components(edges in edge_list(), eps in 0.0f64..=1.0, mu in 1usize..4) {
        let g = build(&edges, 0);
        let params = ScanParams::new(eps, mu);
        let clustering = cluster_bulk(&g, params);
        let (uf, _) = oracle(&g, params);

        for (&u, &cu) in &clustering.assignment {
            for (&v, &cv) in &clustering.assignment {
                prop_assert_eq!(cu == cv, uf.equiv(u.index(), v.index()));
            }
        }
    }

    #[test]
    fn prop_flatten_is_idempotent(edges in edge_list(), eps in 0.0f64..=1.0, mu in 1usize..4) {
        let g = build(&edges, 2);
        for execution in [Execution::Sequential, Execution::Parallel] {
            let mut cc = Connectivity::new(&g, ScanParams::new(eps, mu), execution);
            while cc.run_round() {
                let parents = cc.parents();
                for p in &parents {
                    prop_assert_eq!(parents[p.index()], *p);
                }
            }
        }
    }

    #[test]
    fn prop_parallel_bulk_agrees(edges in edge_list(), eps in 0.0f64..=1.0, mu in 1usize..4) {
        let g = build(&edges, 1);
        let params = ScanParams::new(eps, mu);
        prop_assert_eq!(cluster_bulk(&g, params).assignment, cluster_bulk_parallel(&g, params).assignment);
    }

    #[test]
    fn prop_engines_are_deterministic(edges in edge_list(), eps in 0.0f64..=1.0, mu in 1usize..4) {
        let g = build(&edges, 1);
        let params = ScanParams::new(eps, mu);
        prop_assert_eq!(
            cluster_sequential(&g, params).canonical(&g),
            cluster_sequential(&g, params).canonical(&g)
        );
        prop_assert_eq!(
            cluster_bulk(&g, params).canonical(&g),
            cluster_bulk(&g, params).canonical(&g)
        );
    }

    #[test]
    fn prop_engines_label_same_vertices(edges in edge_list(), eps in 0.0f64..=1.0, mu in 1usize..4) {
        let g = build(&edges, 1);
        let params = ScanParams::new(eps, mu);
        let seq = cluster_sequential(&g, params);
        let bulk = cluster_bulk(&g, params);

        // Cores and their ε-neighbors, once mu >= 1
        for v in g.vertex_ids() {
            prop_assert_eq!(seq.cluster_of(v).is_some(), bulk.cluster_of(v).is_some());
        }
    }
}
