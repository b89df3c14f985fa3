// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Minimum spanning forest (Kruskal)

use crate::error::{GraphError, Result};
use crate::store::EdgeStore;
use crate::union_find::UnionFind;
use crate::weight::Weight;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace};

/// Edge accepted into a spanning forest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningEdge<N, W> {
    /// Source node as inserted
    pub from: N,
    /// Destination node as inserted
    pub to: N,
    /// Edge weight (one for an unweighted edge)
    pub weight: W,
}

impl<N, W> SpanningEdge<N, W> {
    /// Consume into a `(from, to, weight)` triple
    #[must_use]
    pub fn into_triple(self) -> (N, N, W) {
        (self.from, self.to, self.weight)
    }
}

/// Minimum spanning forest, edges in acceptance order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningForest<N, W> {
    edges: Vec<SpanningEdge<N, W>>,
}

impl<N, W: Weight> SpanningForest<N, W> {
    /// Accepted edges in ascending weight order
    #[must_use]
    pub fn edges(&self) -> &[SpanningEdge<N, W>] {
        &self.edges
    }

    /// Iterate over accepted edges
    pub fn iter(&self) -> std::slice::Iter<'_, SpanningEdge<N, W>> {
        self.edges.iter()
    }

    /// Sum of accepted edge weights
    ///
    /// # Errors
    /// Fails with [`GraphError::WeightOverflow`] if the sum does not fit `W`.
    pub fn total_weight(&self) -> Result<W>
    where
        N: Debug,
    {
        self.edges.iter().try_fold(W::zero(), |acc, e| {
            acc.checked_add(e.weight)
                .ok_or_else(|| GraphError::overflow(&e.from, &e.to))
        })
    }

    /// Number of accepted edges
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if no edge was accepted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Consume into `(from, to, weight)` triples
    #[must_use]
    pub fn into_triples(self) -> Vec<(N, N, W)> {
        self.edges.into_iter().map(SpanningEdge::into_triple).collect()
    }
}

impl<'a, N, W> IntoIterator for &'a SpanningForest<N, W> {
    type Item = &'a SpanningEdge<N, W>;
    type IntoIter = std::slice::Iter<'a, SpanningEdge<N, W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Minimum spanning forest of `store`, treating edges as undirected
///
/// Candidates are taken in key order then insertion order and stably
/// sorted by weight, so equal weights keep that order. `(u, v)` and
/// `(v, u)` are separate candidates; whichever comes second is rejected
/// once the first has joined the endpoints. Endpoints that are not keys
/// take part as well.
///
/// # Errors
/// Fails if any edge weight cannot be ordered.
pub fn kruskal<N, W>(store: &EdgeStore<N, W>) -> Result<SpanningForest<N, W>>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    let mut candidates = Vec::with_capacity(store.edge_count());
    for (from, record) in store.edges() {
        let weight = record.weight_or_one();
        if !weight.is_comparable() {
            return Err(GraphError::incomparable(from, &record.to));
        }
        candidates.push(SpanningEdge {
            from: from.clone(),
            to: record.to.clone(),
            weight,
        });
    }
    // Stable: ties keep enumeration order
    candidates.sort_by(|a, b| a.weight.partial_cmp(&b.weight).unwrap_or(Ordering::Equal));

    let mut sets = UnionFind::with_nodes(store.nodes());
    let mut edges = Vec::new();
    for candidate in candidates {
        if sets.union(&candidate.from, &candidate.to) {
            trace!(from = ?candidate.from, to = ?candidate.to, weight = ?candidate.weight, "accepted");
            edges.push(candidate);
        }
    }

    debug!(
        candidates = store.edge_count(),
        accepted = edges.len(),
        components = sets.component_count(),
        "spanning forest built"
    );
    Ok(SpanningForest { edges })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted(edges: &[(&'static str, &'static str, u32)]) -> EdgeStore<&'static str, u32> {
        let mut store = EdgeStore::new();
        for &(from, to, w) in edges {
            store.add_edge(from, to, Some(w));
        }
        store
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let store = weighted(&[("a", "b", 1), ("a", "c", 1), ("b", "c", 1)]);
        let forest = kruskal(&store).unwrap();

        assert_eq!(forest.into_triples(), vec![("a", "b", 1), ("a", "c", 1)]);
    }

    #[test]
    fn test_lighter_edges_first() {
        let store = weighted(&[("a", "b", 4), ("b", "c", 1), ("a", "c", 2), ("c", "d", 7)]);
        let forest = kruskal(&store).unwrap();

        assert_eq!(
            forest.clone().into_triples(),
            vec![("b", "c", 1), ("a", "c", 2), ("c", "d", 7)]
        );
        assert_eq!(forest.total_weight().unwrap(), 10);
    }

    #[test]
    fn test_reverse_edge_rejected_after_forward() {
        let store = weighted(&[("a", "b", 3), ("b", "a", 3)]);
        let forest = kruskal(&store).unwrap();

        assert_eq!(forest.len(), 1);
        assert_eq!(forest.edges()[0].from, "a");
    }

    #[test]
    fn test_disconnected_graph_gives_forest() {
        let store = weighted(&[("a", "b", 1), ("c", "d", 2)]);
        let forest = kruskal(&store).unwrap();

        assert_eq!(forest.len(), 2);
        assert_eq!(forest.total_weight().unwrap(), 3);
    }

    #[test]
    fn test_destination_only_nodes_participate() {
        // x and y never appear as a source
        let store = weighted(&[("a", "x", 5), ("a", "y", 2), ("b", "x", 1)]);
        let forest = kruskal(&store).unwrap();

        assert_eq!(forest.len(), 3);
        assert_eq!(forest.total_weight().unwrap(), 8);
    }

    #[test]
    fn test_self_loop_never_accepted() {
        let store = weighted(&[("a", "a", 0)]);
        assert!(kruskal(&store).unwrap().is_empty());
    }

    #[test]
    fn test_empty_store() {
        let store: EdgeStore<&str, u32> = EdgeStore::new();
        let forest = kruskal(&store).unwrap();
        assert!(forest.is_empty());
        assert_eq!(forest.total_weight().unwrap(), 0);
    }

    #[test]
    fn test_total_weight_overflow_is_an_error() {
        let mut store: EdgeStore<&str, u8> = EdgeStore::new();
        store.add_edge("a", "b", Some(200));
        store.add_edge("b", "c", Some(100));

        let forest = kruskal(&store).unwrap();
        assert_eq!(forest.len(), 2);
        assert!(matches!(
            forest.total_weight(),
            Err(GraphError::WeightOverflow { .. })
        ));
    }

    #[test]
    fn test_nan_weight_rejected() {
        let mut store: EdgeStore<&str, f32> = EdgeStore::new();
        store.add_edge("a", "b", Some(1.0));
        store.add_edge("b", "c", Some(f32::NAN));

        assert!(matches!(
            kruskal(&store),
            Err(GraphError::IncomparableWeight { .. })
        ));
    }

    #[test]
    fn test_negative_weights_allowed() {
        let mut store: EdgeStore<&str, i64> = EdgeStore::new();
        store.add_edge("a", "b", Some(-4));
        store.add_edge("b", "c", Some(2));
        store.add_edge("a", "c", Some(-1));

        let forest = kruskal(&store).unwrap();
        assert_eq!(forest.total_weight().unwrap(), -5);
    }
}
