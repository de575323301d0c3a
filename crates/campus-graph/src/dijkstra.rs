//! Single-source shortest paths (Dijkstra) and path reconstruction.
//!
//! # Frontier
//!
//! The frontier is a `BTreeSet<(W, V)>` ordered by distance, then vertex
//! identifier.  Relaxation removes the neighbor's stale `(old_distance, v)`
//! entry before inserting the fresh one, so every vertex occurs in the set
//! at most once and no decrease-key primitive is needed.  The secondary
//! vertex key makes equal-distance extraction deterministic: repeated runs
//! over the same graph and source produce identical distance and
//! predecessor maps.
//!
//! # Sentinels
//!
//! Internally every vertex starts at `W::max_value()`; a vertex still at the
//! sentinel after the run is unreachable.  The public accessors surface this
//! as `Option` — callers never compare against the sentinel themselves.
//!
//! Correctness requires non-negative edge weights; that is the caller's
//! unchecked precondition.

use std::collections::{BTreeMap, BTreeSet};

use num_traits::{Bounded, Zero};

use crate::graph::WeightedGraph;

/// Distance and predecessor maps from one `shortest_paths` run.
///
/// Owned by the query that produced it; each run starts from a fresh
/// initialization, nothing is cached across queries.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<V, W> {
    source: V,
    dist: BTreeMap<V, W>,
    pred: BTreeMap<V, Option<V>>,
}

/// Run Dijkstra's algorithm over `graph` from `source`.
///
/// Every vertex of the graph appears in the result: reachable vertices with
/// their minimal distance and the predecessor on that path, unreachable ones
/// with the infinity sentinel and no predecessor.  The source keeps no
/// predecessor; reconstruction stops on reaching it rather than following
/// that entry.
pub fn shortest_paths<V, W>(graph: &WeightedGraph<V, W>, source: V) -> ShortestPaths<V, W>
where
    V: Ord + Copy,
    W: Copy + Ord + Zero + Bounded,
{
    let mut dist: BTreeMap<V, W> = BTreeMap::new();
    let mut pred: BTreeMap<V, Option<V>> = BTreeMap::new();
    for v in graph.vertices() {
        dist.insert(v, W::max_value());
        pred.insert(v, None);
    }
    dist.insert(source, W::zero());
    pred.entry(source).or_insert(None);

    // (distance, vertex), ordered — min entry pops first, ties break on the
    // vertex identifier.
    let mut frontier: BTreeSet<(W, V)> = BTreeSet::new();
    frontier.insert((W::zero(), source));

    while let Some((d, v)) = frontier.pop_first() {
        for n in graph.neighbors(v) {
            let Some(w) = graph.weight(v, n) else { continue };
            let alt = d + w;
            let known = dist.get(&n).copied().unwrap_or_else(W::max_value);
            if alt < known {
                // Strict improvement: drop the stale frontier entry (a no-op
                // for first discovery, where `known` is the sentinel), then
                // record the better path.
                frontier.remove(&(known, n));
                dist.insert(n, alt);
                pred.insert(n, Some(v));
                frontier.insert((alt, n));
            }
        }
    }

    ShortestPaths { source, dist, pred }
}

impl<V, W> ShortestPaths<V, W>
where
    V: Ord + Copy,
    W: Copy + Ord + Bounded,
{
    pub fn source(&self) -> V {
        self.source
    }

    /// Shortest distance from the source to `v`, or `None` if `v` is
    /// unreachable (or unknown to the run).
    pub fn distance(&self, v: V) -> Option<W> {
        match self.dist.get(&v) {
            Some(&d) if d < W::max_value() => Some(d),
            _ => None,
        }
    }

    /// The vertex preceding `v` on its shortest path, `None` for the source
    /// and for unreachable vertices.
    pub fn predecessor(&self, v: V) -> Option<V> {
        self.pred.get(&v).copied().flatten()
    }

    pub fn is_reachable(&self, v: V) -> bool {
        self.distance(v).is_some()
    }

    /// Reconstruct the vertex sequence from the source to `dest`, inclusive.
    ///
    /// Walks predecessors backwards from `dest` until the current vertex
    /// *is* the source, then reverses.  `None` when `dest` is unreachable;
    /// `dest == source` yields the single-element path.
    pub fn path_to(&self, dest: V) -> Option<Vec<V>> {
        self.distance(dest)?;

        let mut path = Vec::new();
        let mut current = dest;
        while current != self.source {
            path.push(current);
            current = self.pred.get(&current).copied().flatten()?;
        }
        path.push(self.source);
        path.reverse();
        Some(path)
    }

    /// Full distance map (sentinel included) — initialization sweeps and
    /// determinism checks.
    pub fn distances(&self) -> &BTreeMap<V, W> {
        &self.dist
    }

    /// Full predecessor map, `None` = no predecessor.
    pub fn predecessors(&self) -> &BTreeMap<V, Option<V>> {
        &self.pred
    }
}
