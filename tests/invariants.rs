// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Invariant tests for the graph searches
//!
//! These tests verify critical invariants on random graphs:
//! 1. Shortest paths - source at zero, relaxation holds at the fixpoint
//! 2. Reachability - depth-first and breadth-first agree, levels are tight
//! 3. Spanning forests - acyclic, spanning, deterministic
//! 4. Cross-checks - results agree with `petgraph::algo`

use petgraph::data::Element;
use petgraph::visit::EdgeRef;
use proptest::prelude::*;
use waygraph::prelude::*;
use waygraph::UnionFind;

// =============================================================================
// Test Helpers
// =============================================================================

type Triple = (u8, u8, u32);

fn edges_strategy() -> impl Strategy<Value = Vec<Triple>> {
    proptest::collection::vec((0u8..12, 0u8..12, 0u32..50), 0..40)
}

fn build(edges: &[Triple], membership: MembershipPolicy) -> Graph<u8, u32> {
    let mut graph = Graph::with_config(GraphConfig::default().with_membership(membership));
    for &(from, to, weight) in edges {
        graph.add_weighted_edge(from, to, weight);
    }
    graph
}

/// Every node appearing anywhere in `edges`
fn endpoints(edges: &[Triple]) -> Vec<u8> {
    let mut nodes: Vec<u8> = edges.iter().flat_map(|&(a, b, _)| [a, b]).collect();
    nodes.sort_unstable();
    nodes.dedup();
    nodes
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: the source is always at distance zero
    #[test]
    fn prop_source_at_zero(edges in edges_strategy(), start in 0u8..12) {
        let graph = build(&edges, MembershipPolicy::SourceKeys);
        let paths = graph.dijkstra(&start).unwrap();
        prop_assert_eq!(paths.get(&start), Some(Distance::Finite(0)));
    }

    /// Property: no edge can shorten a settled distance
    #[test]
    fn prop_relaxation_fixpoint(edges in edges_strategy(), start in 0u8..12) {
        let graph = build(&edges, MembershipPolicy::AllEndpoints);
        let paths = graph.dijkstra(&start).unwrap();

        for &(from, to, weight) in &edges {
            if let Distance::Finite(d_from) = paths.distance(&from) {
                prop_assert!(paths.distance(&to) <= Distance::Finite(d_from + weight));
            }
        }
    }

    /// Property: a member is reachable iff depth-first search visits it
    #[test]
    fn prop_dijkstra_agrees_with_reachability(edges in edges_strategy(), start in 0u8..12) {
        let graph = build(&edges, MembershipPolicy::AllEndpoints);
        let paths = graph.dijkstra(&start).unwrap();
        let reachable = graph.dfs(&start);

        for (node, distance) in paths.iter() {
            prop_assert_eq!(distance.is_finite(), reachable.contains(node));
        }
    }

    /// Property: under the default membership every reached node has a distance
    #[test]
    fn prop_default_membership_reports_reached(edges in edges_strategy(), start in 0u8..12) {
        let graph = build(&edges, MembershipPolicy::SourceKeys);
        let paths = graph.dijkstra(&start).unwrap();
        let reachable = graph.dfs(&start);

        prop_assert_eq!(paths.reachable(), reachable.len());
        for node in &reachable {
            prop_assert!(paths.get(node).is_some_and(|d| d.is_finite()), "node {}", node);
        }
    }

    /// Property: depth-first and breadth-first reach the same set
    #[test]
    fn prop_dfs_equals_bfs(edges in edges_strategy(), start in 0u8..12) {
        let graph = build(&edges, MembershipPolicy::SourceKeys);
        prop_assert_eq!(graph.dfs(&start), graph.bfs(&start));
    }

    /// Property: neighbors of a node at depth d sit at depth d + 1 or less
    #[test]
    fn prop_bfs_levels_tight(edges in edges_strategy(), start in 0u8..12) {
        let graph = build(&edges, MembershipPolicy::SourceKeys);
        let levels = graph.bfs_levels(&start);

        for (node, &depth) in &levels {
            for edge in graph.neighbors_or_empty(node) {
                prop_assert!(levels[&edge.to] <= depth + 1);
            }
        }
    }

    /// Property: the forest is acyclic and spans every component
    #[test]
    fn prop_kruskal_spanning_forest(edges in edges_strategy()) {
        let graph = build(&edges, MembershipPolicy::SourceKeys);
        let forest = graph.kruskal().unwrap();

        let mut accepted = UnionFind::new();
        for edge in &forest {
            prop_assert!(accepted.union(&edge.from, &edge.to), "cycle through {:?}", edge);
        }

        let mut components = UnionFind::with_nodes(&endpoints(&edges));
        for &(from, to, _) in &edges {
            components.union(&from, &to);
        }
        prop_assert_eq!(forest.len(), components.len() - components.component_count());
    }

    /// Property: weights come out in non-decreasing order
    #[test]
    fn prop_kruskal_sorted(edges in edges_strategy()) {
        let graph = build(&edges, MembershipPolicy::SourceKeys);
        let forest = graph.kruskal().unwrap();
        prop_assert!(forest.edges().windows(2).all(|w| w[0].weight <= w[1].weight));
    }

    /// Property: repeated calls on an unmodified graph agree
    #[test]
    fn prop_kruskal_deterministic(edges in edges_strategy()) {
        let graph = build(&edges, MembershipPolicy::SourceKeys);
        prop_assert_eq!(graph.kruskal().unwrap(), graph.kruskal().unwrap());
    }

    /// Property: distances match petgraph's Dijkstra
    #[test]
    fn prop_dijkstra_matches_petgraph(edges in edges_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!edges.is_empty());
        let start = edges[pick.index(edges.len())].0;

        let graph = build(&edges, MembershipPolicy::AllEndpoints);
        let paths = graph.dijkstra(&start).unwrap();

        let view = graph.to_petgraph();
        let start_idx = view.index_of(&start).unwrap();
        let oracle = petgraph::algo::dijkstra(&view.graph, start_idx, None, |e| *e.weight());

        for (node, &idx) in &view.node_indices {
            let expected = Distance::from(oracle.get(&idx).copied());
            prop_assert_eq!(paths.distance(node), expected, "node {}", node);
        }
    }

    /// Property: total weight matches petgraph's minimum spanning tree
    #[test]
    fn prop_kruskal_weight_matches_petgraph(edges in edges_strategy()) {
        let graph = build(&edges, MembershipPolicy::SourceKeys);
        let forest = graph.kruskal().unwrap();

        let view = graph.to_petgraph();
        let oracle: u32 = petgraph::algo::min_spanning_tree(&view.graph)
            .filter_map(|element| match element {
                Element::Edge { weight, .. } => Some(weight),
                Element::Node { .. } => None,
            })
            .sum();

        prop_assert_eq!(forest.total_weight().unwrap(), oracle);
    }

    /// Property: a JSON snapshot restores an equivalent graph
    #[test]
    fn prop_json_snapshot_restores_searches(edges in edges_strategy(), start in 0u8..12) {
        let graph = build(&edges, MembershipPolicy::SourceKeys);
        let restored: Graph<u8, u32> = Graph::from_json(&graph.to_json().unwrap()).unwrap();

        prop_assert_eq!(restored.bfs_order(&start), graph.bfs_order(&start));
        prop_assert_eq!(restored.kruskal().unwrap(), graph.kruskal().unwrap());
    }
}
