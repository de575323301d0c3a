//! Ingested campus map: node coordinates, walkable footways, and named
//! buildings.
//!
//! All three collections are produced once by [`crate::osm`] and read-only
//! afterwards.  `footways` and `buildings` keep the order of the source
//! document — the resolver's first-match rules make that order observable,
//! so it is part of the model's contract, not an accident.

use campus_core::{GeoPoint, NodeId, WayId};
use rustc_hash::FxHashMap;

/// An ordered polyline of walkable map nodes.
#[derive(Debug, Clone)]
pub struct Footway {
    /// Source way identifier, for diagnostics.
    pub id: WayId,
    /// Node references in walking order.  Consecutive pairs become graph
    /// edges.
    pub nodes: Vec<NodeId>,
}

/// A named campus building.
#[derive(Debug, Clone)]
pub struct Building {
    /// Full name, matched by substring in building queries.
    pub name: String,
    /// Short code (e.g. "SEO"), matched exactly when present.
    pub abbrev: Option<String>,
    /// Representative coordinate used to find the nearest footway node.
    pub location: GeoPoint,
}

/// Everything the navigator knows about the campus.
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    /// Coordinate of every map node, keyed by its stable identifier.
    pub nodes: FxHashMap<NodeId, GeoPoint>,
    /// Walkable polylines, in source-document order.
    pub footways: Vec<Footway>,
    /// Named buildings, in source-document order.
    pub buildings: Vec<Building>,
}

impl CampusMap {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn footway_count(&self) -> usize {
        self.footways.len()
    }

    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }
}
