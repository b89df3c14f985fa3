// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Union-Find (disjoint set forest) over arbitrary node values
//!
//! Nodes are seeded lazily as singleton sets the first time they are looked
//! up, so any endpoint can be queried without registering it first.
//! - `find(x)`: representative of x's set, with path compression
//! - `union(x, y)`: attach y's root under x's root

use std::collections::HashMap;
use std::hash::Hash;

/// Disjoint set forest keyed by node value
#[derive(Debug, Clone)]
pub struct UnionFind<N> {
    /// Map from node to its slot in `parent`
    indices: HashMap<N, usize>,
    /// Parent pointers (parent[i] == i for a root)
    parent: Vec<usize>,
    /// Number of disjoint sets among seeded nodes
    components: usize,
}

impl<N> Default for UnionFind<N> {
    fn default() -> Self {
        Self {
            indices: HashMap::new(),
            parent: Vec::new(),
            components: 0,
        }
    }
}

impl<N: Clone + Eq + Hash> UnionFind<N> {
    /// Create an empty forest
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a forest with each of `nodes` in its own set
    pub fn with_nodes<'a>(nodes: impl IntoIterator<Item = &'a N>) -> Self
    where
        N: 'a,
    {
        let mut sets = Self::new();
        for node in nodes {
            sets.slot(node);
        }
        sets
    }

    fn slot(&mut self, node: &N) -> usize {
        if let Some(&idx) = self.indices.get(node) {
            return idx;
        }
        let idx = self.parent.len();
        self.indices.insert(node.clone(), idx);
        self.parent.push(idx);
        self.components += 1;
        idx
    }

    fn root_of(&mut self, mut idx: usize) -> usize {
        let mut root = idx;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression: point every node on the path straight at the root
        while self.parent[idx] != root {
            let next = self.parent[idx];
            self.parent[idx] = root;
            idx = next;
        }
        root
    }

    /// Slot index of the representative of `node`'s set
    pub fn find(&mut self, node: &N) -> usize {
        let idx = self.slot(node);
        self.root_of(idx)
    }

    /// Merge the sets of `a` and `b`, attaching `b`'s root under `a`'s root
    ///
    /// Returns true if a merge occurred (they were in different sets).
    pub fn union(&mut self, a: &N, b: &N) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_b] = root_a;
        self.components -= 1;
        true
    }

    /// Whether `a` and `b` are in the same set
    pub fn connected(&mut self, a: &N, b: &N) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets among seeded nodes
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Number of seeded nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if no node has been seeded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
