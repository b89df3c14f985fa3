// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Reachability by depth-first and breadth-first search
//!
//! Both searches mark a node visited when it is taken off the frontier, so
//! the start node is always visited even if it has no edges or is unknown
//! to the store. Cycles and duplicate edges are harmless: a node already
//! visited is skipped.

use crate::store::EdgeStore;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// Visiting order of a depth-first search from `start`
///
/// Neighbors are pushed in adjacency order and popped in reverse, so the
/// most recently inserted neighbor is explored first.
pub fn dfs_order<N, W>(store: &EdgeStore<N, W>, start: &N) -> Vec<N>
where
    N: Clone + Eq + Hash + Debug,
{
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start.clone()];

    while let Some(node) = stack.pop() {
        if !visited.insert(node.clone()) {
            continue;
        }
        stack.extend(store.neighbors_or_empty(&node).iter().map(|e| e.to.clone()));
        order.push(node);
    }

    debug!(start = ?start, visited = order.len(), "depth-first search finished");
    order
}

/// Visiting order of a breadth-first search from `start`
///
/// Every node at depth k is visited before any node at depth k + 1.
pub fn bfs_order<N, W>(store: &EdgeStore<N, W>, start: &N) -> Vec<N>
where
    N: Clone + Eq + Hash + Debug,
{
    walk_levels(store, start).into_iter().map(|(node, _)| node).collect()
}

/// Depth at which breadth-first search from `start` reaches each node
#[must_use]
pub fn bfs_levels<N, W>(store: &EdgeStore<N, W>, start: &N) -> HashMap<N, usize>
where
    N: Clone + Eq + Hash + Debug,
{
    walk_levels(store, start).into_iter().collect()
}

/// Set of nodes reachable from `start` by depth-first search
#[must_use]
pub fn dfs<N, W>(store: &EdgeStore<N, W>, start: &N) -> HashSet<N>
where
    N: Clone + Eq + Hash + Debug,
{
    dfs_order(store, start).into_iter().collect()
}

/// Set of nodes reachable from `start` by breadth-first search
#[must_use]
pub fn bfs<N, W>(store: &EdgeStore<N, W>, start: &N) -> HashSet<N>
where
    N: Clone + Eq + Hash + Debug,
{
    bfs_order(store, start).into_iter().collect()
}

fn walk_levels<N, W>(store: &EdgeStore<N, W>, start: &N) -> Vec<(N, usize)>
where
    N: Clone + Eq + Hash + Debug,
{
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::from([(start.clone(), 0usize)]);

    // Depths leave the queue in non-decreasing order, so the first visit
    // of a node carries its shortest hop count.
    while let Some((node, depth)) = queue.pop_front() {
        if !visited.insert(node.clone()) {
            continue;
        }
        queue.extend(
            store
                .neighbors_or_empty(&node)
                .iter()
                .map(|e| (e.to.clone(), depth + 1)),
        );
        order.push((node, depth));
    }

    debug!(start = ?start, visited = order.len(), "breadth-first search finished");
    order
}
