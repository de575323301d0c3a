//! Weighted directed graph stored as a nested ordered adjacency map.
//!
//! # Data layout
//!
//! `BTreeMap<V, BTreeMap<V, W>>` — one inner map of `neighbor → weight` per
//! vertex.  The ordered maps make every traversal deterministic:
//! [`neighbors`](WeightedGraph::neighbors) and
//! [`vertices`](WeightedGraph::vertices) yield keys in sorted order, so two
//! runs over the same graph visit edges identically.
//!
//! An undirected connection is modeled as two directed edges.  The graph is
//! built once during ingestion and read-only afterwards; there are no
//! deletion operations.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Directed graph keyed by an opaque ordered vertex identifier, with one
/// numeric weight per ordered vertex pair.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, W> {
    adj: BTreeMap<V, BTreeMap<V, W>>,
}

impl<V: Ord + Copy, W: Copy> WeightedGraph<V, W> {
    /// Construct an empty graph.
    pub fn new() -> Self {
        Self { adj: BTreeMap::new() }
    }

    /// Insert a vertex.  Returns `false` (no-op) if it is already present —
    /// vertex identifiers are unique.
    pub fn add_vertex(&mut self, v: V) -> bool {
        match self.adj.entry(v) {
            Entry::Vacant(e) => {
                e.insert(BTreeMap::new());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Set the directed edge `from → to`.
    ///
    /// Both endpoints must already exist as vertices; otherwise the call
    /// returns `false` and mutates nothing.  Re-adding an existing ordered
    /// pair overwrites the stored weight (last write wins) rather than
    /// creating a parallel edge.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> bool {
        if !self.adj.contains_key(&from) || !self.adj.contains_key(&to) {
            return false;
        }
        if let Some(out) = self.adj.get_mut(&from) {
            out.insert(to, weight);
        }
        true
    }

    /// Weight of the directed edge `from → to`, or `None` if either vertex
    /// or the edge itself does not exist.
    pub fn weight(&self, from: V, to: V) -> Option<W> {
        self.adj.get(&from)?.get(&to).copied()
    }

    /// `true` if `v` has been added as a vertex.
    pub fn contains_vertex(&self, v: V) -> bool {
        self.adj.contains_key(&v)
    }

    /// Successors of `v` in sorted order.  Empty (not an error) if `v` is
    /// absent or has no outgoing edges.
    pub fn neighbors(&self, v: V) -> impl Iterator<Item = V> + '_ {
        self.adj.get(&v).into_iter().flat_map(|out| out.keys().copied())
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of directed edges.  A reciprocal pair counts as two, matching
    /// the directed model.
    pub fn edge_count(&self) -> usize {
        self.adj.values().map(BTreeMap::len).sum()
    }

    /// All vertices in key order — used for initialization sweeps.
    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.adj.keys().copied()
    }
}

impl<V: Ord + Copy, W: Copy> Default for WeightedGraph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}
