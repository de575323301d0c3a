//! Free-text building lookup and nearest-footway-node search.
//!
//! Both lookups are single forward passes whose ties go to the earliest
//! candidate.  Iteration order is the source-document order preserved by
//! [`CampusMap`], so identical inputs always resolve identically.

use campus_core::{GeoPoint, NodeId};

use crate::model::{Building, CampusMap};

/// Find the building matching `query`: a record matches when its
/// abbreviation equals the query exactly or its full name contains the
/// query as a substring.  The first match in insertion order wins.
pub fn find_building<'a>(buildings: &'a [Building], query: &str) -> Option<&'a Building> {
    buildings
        .iter()
        .find(|b| b.abbrev.as_deref() == Some(query) || b.name.contains(query))
}

/// The footway node nearest to `point` by great-circle distance.
///
/// Exhaustive scan over every node reference of every footway — the map is
/// campus-sized and queries are interactive, so no spatial index is kept.
/// Only a strictly smaller distance replaces the current best, so the first
/// minimal candidate encountered wins ties.  `None` when no footway node
/// with a stored coordinate exists.
pub fn nearest_footway_node(map: &CampusMap, point: GeoPoint) -> Option<NodeId> {
    let mut nearest: Option<(NodeId, f64)> = None;

    for footway in &map.footways {
        for &id in &footway.nodes {
            let Some(&pos) = map.nodes.get(&id) else { continue };
            let d = point.distance_miles(pos);
            match nearest {
                Some((_, best)) if d >= best => {}
                _ => nearest = Some((id, d)),
            }
        }
    }

    nearest.map(|(id, _)| id)
}
