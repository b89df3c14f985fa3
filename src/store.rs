// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Adjacency storage shared by every graph algorithm

use crate::weight::Weight;
use std::collections::HashMap;
use std::hash::Hash;

/// One outgoing edge as stored under its source node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord<N, W> {
    /// Destination node
    pub to: N,
    /// Edge weight, `None` for an unweighted edge
    pub weight: Option<W>,
}

impl<N, W: Weight> EdgeRecord<N, W> {
    /// The stored weight, or one for an unweighted edge
    #[must_use]
    pub fn weight_or_one(&self) -> W {
        self.weight.unwrap_or_else(W::one)
    }
}

/// Node -> ordered outgoing edges
///
/// Keys keep first-insertion order and each adjacency sequence keeps edge
/// insertion order, so every enumeration over the store is deterministic.
/// Destinations are not registered as keys here; that is the graph's
/// membership decision.
#[derive(Debug, Clone)]
pub struct EdgeStore<N, W> {
    /// Keys in first-insertion order
    nodes: Vec<N>,
    /// Map from node to its position in `nodes` and `adjacency`
    node_indices: HashMap<N, usize>,
    /// Outgoing edges, parallel to `nodes`
    adjacency: Vec<Vec<EdgeRecord<N, W>>>,
    edge_count: usize,
}

impl<N, W> Default for EdgeStore<N, W> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            node_indices: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<N: Clone + Eq + Hash, W> EdgeStore<N, W> {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of `node`, registering it with no edges if unseen
    fn slot(&mut self, node: N) -> usize {
        if let Some(&idx) = self.node_indices.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.node_indices.insert(node.clone(), idx);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Register `node` as a key with no outgoing edges
    ///
    /// Returns false if it was already a key.
    pub fn add_node(&mut self, node: N) -> bool {
        let before = self.nodes.len();
        self.slot(node);
        self.nodes.len() > before
    }

    /// Append `to` to the adjacency of `from`
    ///
    /// Duplicate edges are kept as separate records.
    pub fn add_edge(&mut self, from: N, to: N, weight: Option<W>) {
        let idx = self.slot(from);
        self.adjacency[idx].push(EdgeRecord { to, weight });
        self.edge_count += 1;
    }

    /// Outgoing edges of `node`, empty if it is not a key
    #[must_use]
    pub fn neighbors_or_empty(&self, node: &N) -> &[EdgeRecord<N, W>] {
        self.node_indices
            .get(node)
            .map_or(&[][..], |&idx| self.adjacency[idx].as_slice())
    }

    /// Whether `node` is a key
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.node_indices.contains_key(node)
    }

    /// Keys in first-insertion order
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Every edge as `(source, record)`, in key order then insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&N, &EdgeRecord<N, W>)> + '_ {
        self.nodes
            .iter()
            .zip(&self.adjacency)
            .flat_map(|(from, records)| records.iter().map(move |record| (from, record)))
    }

    /// Get node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Check if the store has no keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
