// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Waygraph - generic weighted graph with classic searches
//!
//! A [`Graph`] is built by inserting directed, optionally weighted edges and
//! then queried with depth-first and breadth-first reachability, Dijkstra
//! shortest paths, and Kruskal minimum spanning forests. All searches share
//! one adjacency store and never modify it.
//!
//! ```
//! use waygraph::{Distance, Graph};
//!
//! let graph = Graph::from_weighted_edges([("A", "B", 1u32), ("B", "C", 2), ("A", "C", 4)]);
//!
//! let paths = graph.dijkstra(&"A").unwrap();
//! assert_eq!(paths.distance(&"C"), Distance::Finite(3));
//!
//! let forest = graph.kruskal().unwrap();
//! assert_eq!(forest.total_weight().unwrap(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod graph;
pub mod shortest_path;
pub mod spanning_tree;
pub mod store;
pub mod traversal;
pub mod union_find;
pub mod weight;

pub use config::{GraphConfig, MembershipPolicy};
pub use error::{GraphError, Result};
pub use graph::{Graph, GraphSnapshot, PetgraphView, SnapshotEdge};
pub use shortest_path::ShortestPaths;
pub use spanning_tree::{SpanningEdge, SpanningForest};
pub use store::{EdgeRecord, EdgeStore};
pub use union_find::UnionFind;
pub use weight::{Distance, Weight};

/// Prelude for common imports
pub mod prelude {
    pub use crate::config::{GraphConfig, MembershipPolicy};
    pub use crate::error::{GraphError, Result};
    pub use crate::graph::Graph;
    pub use crate::weight::{Distance, Weight};
}
