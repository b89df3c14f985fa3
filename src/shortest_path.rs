// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Single-source shortest paths (Dijkstra)

use crate::error::{GraphError, Result};
use crate::store::{EdgeRecord, EdgeStore};
use crate::weight::{Distance, Weight};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace, warn};

/// Heap entry; ordered so the smallest cost pops first
struct State<N, W> {
    cost: W,
    node: N,
}

impl<N, W: PartialOrd> Ord for State<N, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Weights are checked for comparability before an entry is pushed
        other.cost.partial_cmp(&self.cost).unwrap_or(Ordering::Equal)
    }
}

impl<N, W: PartialOrd> PartialOrd for State<N, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, W: PartialOrd> PartialEq for State<N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, W: PartialOrd> Eq for State<N, W> {}

/// Result of a shortest-path search from one source
#[derive(Debug, Clone)]
pub struct ShortestPaths<N, W> {
    source: N,
    distances: HashMap<N, Distance<W>>,
    predecessors: HashMap<N, N>,
}

impl<N, W> ShortestPaths<N, W>
where
    N: Clone + Eq + Hash,
    W: Weight,
{
    /// The node the search started from
    #[must_use]
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Distance to `node`, `None` if it is neither a member nor reached
    #[must_use]
    pub fn get(&self, node: &N) -> Option<Distance<W>> {
        self.distances.get(node).copied()
    }

    /// Distance to `node`, treating non-members as unreachable
    pub fn distance(&self, node: &N) -> Distance<W> {
        self.get(node).unwrap_or(Distance::Infinite)
    }

    /// Iterate over `(node, distance)` for every member and reached node
    pub fn iter(&self) -> impl Iterator<Item = (&N, &Distance<W>)> + '_ {
        self.distances.iter()
    }

    /// Number of members in the result
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Check if the result holds no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Number of members reached from the source (the source included)
    #[must_use]
    pub fn reachable(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Nodes on a shortest path from the source to `target`, both ends included
    ///
    /// Returns `None` when `target` is not a reachable member.
    #[must_use]
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.get(target)?.is_finite() {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            current = self.predecessors.get(current)?;
            path.push(current.clone());
            if path.len() > self.predecessors.len() + 1 {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// Consume the result into a plain distance map
    #[must_use]
    pub fn into_map(self) -> HashMap<N, Distance<W>> {
        self.distances
    }
}

/// Weight of an edge about to be relaxed, rejected if negative or unordered
fn relaxable_weight<N, W>(from: &N, edge: &EdgeRecord<N, W>) -> Result<W>
where
    N: Debug,
    W: Weight,
{
    let weight = edge.weight_or_one();
    match weight.partial_cmp(&W::zero()) {
        None => {
            warn!(from = ?from, to = ?edge.to, "incomparable edge weight");
            Err(GraphError::incomparable(from, &edge.to))
        }
        Some(Ordering::Less) => {
            warn!(from = ?from, to = ?edge.to, weight = ?weight, "negative edge weight");
            Err(GraphError::negative(from, &edge.to))
        }
        Some(_) => Ok(weight),
    }
}

/// Shortest distance from `start` to every key of `store`
///
/// Unreachable keys map to [`Distance::Infinite`]. Every node the search
/// reaches is present with its finite distance, whether or not it is a key,
/// and `start` always maps to zero. Unweighted edges weigh one.
///
/// Only edges leaving reached nodes are examined, so a bad weight elsewhere
/// in the store does not affect this search.
///
/// # Errors
/// Fails if an examined edge weight is negative or cannot be ordered, or if
/// a path total overflows `W`.
pub fn dijkstra<N, W>(store: &EdgeStore<N, W>, start: &N) -> Result<ShortestPaths<N, W>>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    let mut best: HashMap<N, W> = HashMap::new();
    let mut predecessors: HashMap<N, N> = HashMap::new();
    let mut heap = BinaryHeap::new();

    best.insert(start.clone(), W::zero());
    heap.push(State {
        cost: W::zero(),
        node: start.clone(),
    });

    while let Some(State { cost, node }) = heap.pop() {
        // The heap may hold older, longer entries for a node already improved
        if best.get(&node).is_some_and(|&known| cost > known) {
            continue;
        }
        trace!(node = ?node, cost = ?cost, "settled");

        for edge in store.neighbors_or_empty(&node) {
            let weight = relaxable_weight(&node, edge)?;
            let next_cost = cost.checked_add(weight).ok_or_else(|| {
                warn!(from = ?node, to = ?edge.to, "path weight overflow");
                GraphError::overflow(&node, &edge.to)
            })?;
            let improves = best.get(&edge.to).map_or(true, |&known| next_cost < known);
            if improves {
                best.insert(edge.to.clone(), next_cost);
                predecessors.insert(edge.to.clone(), node.clone());
                heap.push(State {
                    cost: next_cost,
                    node: edge.to.clone(),
                });
            }
        }
    }

    let mut distances: HashMap<N, Distance<W>> = store
        .nodes()
        .iter()
        .map(|node| (node.clone(), Distance::Infinite))
        .collect();
    // Reached nodes include the start and any destination that is not a key
    for (node, cost) in best {
        distances.insert(node, Distance::Finite(cost));
    }

    debug!(
        start = ?start,
        members = distances.len(),
        reached = distances.values().filter(|d| d.is_finite()).count(),
        "shortest-path search finished"
    );

    Ok(ShortestPaths {
        source: start.clone(),
        distances,
        predecessors,
    })
}
