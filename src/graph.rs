// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Weighted graph facade over the edge store and its algorithms

use crate::config::{GraphConfig, MembershipPolicy};
use crate::error::Result;
use crate::shortest_path::{self, ShortestPaths};
use crate::spanning_tree::{self, SpanningForest};
use crate::store::{EdgeRecord, EdgeStore};
use crate::traversal;
use crate::weight::Weight;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use tracing::debug;

/// Directed graph with optionally weighted edges
///
/// Built once through edge insertion, then queried. Queries borrow the graph
/// immutably, so the store cannot change during a search.
#[derive(Debug, Clone)]
pub struct Graph<N, W = u64> {
    /// Adjacency storage
    store: EdgeStore<N, W>,
    /// Options fixed at creation
    config: GraphConfig,
}

impl<N, W> Default for Graph<N, W> {
    fn default() -> Self {
        Self {
            store: EdgeStore::default(),
            config: GraphConfig::default(),
        }
    }
}

impl<N, W> Graph<N, W>
where
    N: Clone + Eq + Hash + fmt::Debug,
{
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with the given configuration
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            store: EdgeStore::new(),
            config,
        }
    }

    /// Build a graph from weighted `(from, to, weight)` triples
    pub fn from_weighted_edges(edges: impl IntoIterator<Item = (N, N, W)>) -> Self {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_weighted_edge(from, to, weight);
        }
        graph
    }

    /// The configuration this graph was created with
    #[must_use]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// The underlying edge store
    #[must_use]
    pub fn store(&self) -> &EdgeStore<N, W> {
        &self.store
    }

    /// Register `node` with no outgoing edges
    ///
    /// Returns false if it was already a member.
    pub fn add_node(&mut self, node: N) -> bool {
        self.store.add_node(node)
    }

    /// Add an unweighted edge from `from` to `to`
    pub fn add_edge(&mut self, from: N, to: N) {
        self.insert_edge(from, to, None);
    }

    /// Add an edge from `from` to `to` carrying `weight`
    pub fn add_weighted_edge(&mut self, from: N, to: N, weight: W) {
        self.insert_edge(from, to, Some(weight));
    }

    /// Add an edge, weighted or not
    ///
    /// Never fails. Duplicate edges are kept. Under
    /// [`MembershipPolicy::AllEndpoints`] the destination becomes a member
    /// too.
    pub fn insert_edge(&mut self, from: N, to: N, weight: Option<W>) {
        if self.config.membership == MembershipPolicy::AllEndpoints {
            self.store.add_node(from.clone());
            self.store.add_node(to.clone());
        }
        self.store.add_edge(from, to, weight);
    }

    /// Check whether `node` is a member
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.store.contains_node(node)
    }

    /// Members in first-insertion order
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        self.store.nodes()
    }

    /// Outgoing edges of `node`, empty for unknown nodes
    #[must_use]
    pub fn neighbors_or_empty(&self, node: &N) -> &[EdgeRecord<N, W>] {
        self.store.neighbors_or_empty(node)
    }

    /// Get node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    /// Get edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    /// Check if the graph has no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Nodes reachable from `start` by depth-first search, `start` included
    #[must_use]
    pub fn dfs(&self, start: &N) -> HashSet<N> {
        traversal::dfs(&self.store, start)
    }

    /// Nodes reachable from `start` by breadth-first search, `start` included
    #[must_use]
    pub fn bfs(&self, start: &N) -> HashSet<N> {
        traversal::bfs(&self.store, start)
    }

    /// Depth-first visiting order from `start`
    #[must_use]
    pub fn dfs_order(&self, start: &N) -> Vec<N> {
        traversal::dfs_order(&self.store, start)
    }

    /// Breadth-first visiting order from `start`
    #[must_use]
    pub fn bfs_order(&self, start: &N) -> Vec<N> {
        traversal::bfs_order(&self.store, start)
    }

    /// Hop count at which breadth-first search reaches each node
    #[must_use]
    pub fn bfs_levels(&self, start: &N) -> HashMap<N, usize> {
        traversal::bfs_levels(&self.store, start)
    }

    // =========================================================================
    // Weighted searches
    // =========================================================================

    /// Shortest distance from `start` to every member and every reached node
    ///
    /// Under [`MembershipPolicy::SourceKeys`] a destination that is not a
    /// member still appears once the search reaches it.
    ///
    /// # Errors
    /// Fails if a weight on an edge the search examines is negative or cannot
    /// be ordered, or if a path total overflows `W`.
    pub fn dijkstra(&self, start: &N) -> Result<ShortestPaths<N, W>>
    where
        W: Weight,
    {
        shortest_path::dijkstra(&self.store, start)
    }

    /// Minimum spanning forest, edges treated as undirected
    ///
    /// # Errors
    /// Fails if any weight cannot be ordered.
    pub fn kruskal(&self) -> Result<SpanningForest<N, W>>
    where
        W: Weight,
    {
        spanning_tree::kruskal(&self.store)
    }

    // =========================================================================
    // Export
    // =========================================================================

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String
    where
        N: fmt::Display,
        W: fmt::Display,
    {
        let mut dot = String::from("digraph waygraph {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=circle];\n\n");

        for node in self.store.nodes() {
            dot.push_str(&format!("  \"{}\";\n", escape_dot(node)));
        }

        dot.push('\n');

        for (from, edge) in self.store.edges() {
            let (from, to) = (escape_dot(from), escape_dot(&edge.to));
            match &edge.weight {
                Some(w) => dot.push_str(&format!("  \"{from}\" -> \"{to}\" [label=\"{w}\"];\n")),
                None => dot.push_str(&format!("  \"{from}\" -> \"{to}\";\n")),
            }
        }

        dot.push_str("}\n");
        dot
    }

    /// Capture members and edges in enumeration order
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot<N, W>
    where
        W: Clone,
    {
        GraphSnapshot {
            config: self.config.clone(),
            nodes: self.store.nodes().to_vec(),
            edges: self
                .store
                .edges()
                .map(|(from, edge)| SnapshotEdge {
                    from: from.clone(),
                    to: edge.to.clone(),
                    weight: edge.weight.clone(),
                })
                .collect(),
        }
    }

    /// Rebuild a graph from a snapshot, preserving every enumeration order
    #[must_use]
    pub fn from_snapshot(snapshot: GraphSnapshot<N, W>) -> Self {
        let mut graph = Self::with_config(snapshot.config);
        for node in snapshot.nodes {
            graph.add_node(node);
        }
        for edge in snapshot.edges {
            graph.insert_edge(edge.from, edge.to, edge.weight);
        }
        graph
    }

    /// Export to JSON
    ///
    /// # Errors
    /// Fails if a node or weight cannot be serialized.
    pub fn to_json(&self) -> Result<String>
    where
        N: Serialize,
        W: Serialize + Clone,
    {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Load a graph from JSON produced by [`Graph::to_json`]
    ///
    /// # Errors
    /// Fails on malformed JSON or mismatched node and weight types.
    pub fn from_json(json: &str) -> Result<Self>
    where
        N: DeserializeOwned,
        W: DeserializeOwned,
    {
        let snapshot: GraphSnapshot<N, W> = serde_json::from_str(json)?;
        let graph = Self::from_snapshot(snapshot);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph loaded from snapshot"
        );
        Ok(graph)
    }

    /// Copy into a petgraph `DiGraph` for use with `petgraph::algo`
    ///
    /// Every endpoint becomes a petgraph node, members first in their
    /// insertion order. Unweighted edges carry weight one.
    #[must_use]
    pub fn to_petgraph(&self) -> PetgraphView<N, W>
    where
        W: Weight,
    {
        let mut view = PetgraphView {
            graph: DiGraph::with_capacity(self.node_count(), self.edge_count()),
            node_indices: HashMap::new(),
        };

        for node in self.store.nodes() {
            view.intern(node);
        }
        for (from, edge) in self.store.edges() {
            let from_idx = view.intern(from);
            let to_idx = view.intern(&edge.to);
            view.graph.add_edge(from_idx, to_idx, edge.weight_or_one());
        }

        view
    }
}

fn escape_dot(value: &impl fmt::Display) -> String {
    value.to_string().replace('\\', "\\\\").replace('"', "\\\"")
}

/// Serializable form of a graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot<N, W> {
    /// Configuration the graph was created with
    #[serde(default)]
    pub config: GraphConfig,
    /// Members in insertion order
    #[serde(default = "Vec::new")]
    pub nodes: Vec<N>,
    /// Edges in enumeration order
    #[serde(default = "Vec::new")]
    pub edges: Vec<SnapshotEdge<N, W>>,
}

/// One edge of a [`GraphSnapshot`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEdge<N, W> {
    /// Source node
    pub from: N,
    /// Destination node
    pub to: N,
    /// Weight, absent for an unweighted edge
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub weight: Option<W>,
}

/// A graph copied into petgraph, with the node lookup table
pub struct PetgraphView<N, W> {
    /// The petgraph copy
    pub graph: DiGraph<N, W>,
    /// Map from node to its petgraph index
    pub node_indices: HashMap<N, NodeIndex>,
}

impl<N: Clone + Eq + Hash, W> PetgraphView<N, W> {
    /// Petgraph index of `node`, if it is an endpoint
    #[must_use]
    pub fn index_of(&self, node: &N) -> Option<NodeIndex> {
        self.node_indices.get(node).copied()
    }

    fn intern(&mut self, node: &N) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(node) {
            return idx;
        }
        let idx = self.graph.add_node(node.clone());
        self.node_indices.insert(node.clone(), idx);
        idx
    }
}
