//! `campus-graph` — generic weighted digraph and shortest-path engine.
//!
//! This crate knows nothing about geography: vertices are opaque ordered
//! keys, weights are opaque ordered magnitudes.  The map-aware layers live
//! in `campus-nav`.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`graph`]    | `WeightedGraph<V, W>` adjacency-map container             |
//! | [`dijkstra`] | `shortest_paths`, `ShortestPaths`, path reconstruction    |

pub mod dijkstra;
pub mod graph;

#[cfg(test)]
mod tests;

pub use dijkstra::{ShortestPaths, shortest_paths};
pub use graph::WeightedGraph;
