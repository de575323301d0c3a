//! Overpass-JSON map ingestion.
//!
//! # Input format
//!
//! An OSM extract as produced by the Overpass API (`[out:json]`, ideally
//! `out center` so building ways carry a representative coordinate): one
//! `elements` array mixing `node` and `way` records.
//!
//! | Element                                  | Becomes                    |
//! |------------------------------------------|----------------------------|
//! | `node` with `lat`/`lon`                  | coordinate-table entry     |
//! | `way` tagged with a walkable `highway`   | [`Footway`] polyline       |
//! | element tagged `building` + `name`       | [`Building`]               |
//!
//! A building's representative coordinate comes from, in order: the
//! Overpass `center` field, the element's own `lat`/`lon` (node buildings),
//! or the centroid of its member nodes found in the extract.  Buildings
//! with no resolvable coordinate are skipped with a warning; abbreviations
//! come from the `short_name` tag, falling back to `ref`.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use campus_core::{GeoPoint, NodeId, WayId};
use rustc_hash::FxHashMap;

use crate::error::{NavError, NavResult};
use crate::model::{Building, CampusMap, Footway};

/// `highway` values a pedestrian may traverse.
const WALKABLE_HIGHWAYS: [&str; 5] = ["footway", "path", "pedestrian", "steps", "crossing"];

// ── Raw Overpass records ──────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OsmDocument {
    elements: Vec<OsmElement>,
}

#[derive(Deserialize)]
struct OsmElement {
    #[serde(rename = "type")]
    kind: String,
    id: i64,
    lat: Option<f64>,
    lon: Option<f64>,
    center: Option<OsmCenter>,
    #[serde(default)]
    nodes: Vec<i64>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

#[derive(Deserialize)]
struct OsmCenter {
    lat: f64,
    lon: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a campus map from an Overpass JSON file.
///
/// # Errors
///
/// Returns [`NavError::Io`] on file errors and [`NavError::Parse`] on
/// malformed JSON.  A load failure is reported to the caller; there is no
/// partial recovery.
pub fn load_map(path: &Path) -> NavResult<CampusMap> {
    let file = std::fs::File::open(path)?;
    load_map_reader(std::io::BufReader::new(file))
}

/// Like [`load_map`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor` over an embedded extract).
pub fn load_map_reader<R: Read>(reader: R) -> NavResult<CampusMap> {
    let doc: OsmDocument =
        serde_json::from_reader(reader).map_err(|e| NavError::Parse(e.to_string()))?;

    // ── Pass 1: node coordinates ──────────────────────────────────────────
    // Ways reference nodes by id, so the full table must exist before any
    // way is interpreted.
    let mut nodes: FxHashMap<NodeId, GeoPoint> = FxHashMap::default();
    for elem in &doc.elements {
        if elem.kind == "node" {
            if let (Some(lat), Some(lon)) = (elem.lat, elem.lon) {
                nodes.insert(NodeId(elem.id), GeoPoint::new(lat, lon));
            }
        }
    }

    // ── Pass 2: footways and buildings ────────────────────────────────────
    let mut footways = Vec::new();
    let mut buildings = Vec::new();
    for elem in &doc.elements {
        if elem.kind == "way" && is_walkable(elem) {
            footways.push(Footway {
                id: WayId(elem.id),
                nodes: elem.nodes.iter().map(|&id| NodeId(id)).collect(),
            });
        }

        if elem.tags.contains_key("building") {
            let Some(name) = elem.tags.get("name") else { continue };
            match building_location(elem, &nodes) {
                Some(location) => buildings.push(Building {
                    name: name.clone(),
                    abbrev: abbreviation(elem),
                    location,
                }),
                None => warn!("skipping building {name:?} ({}): no resolvable coordinate", elem.id),
            }
        }
    }

    info!(
        "map loaded: {} nodes, {} footways, {} buildings",
        nodes.len(),
        footways.len(),
        buildings.len()
    );

    Ok(CampusMap { nodes, footways, buildings })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn is_walkable(elem: &OsmElement) -> bool {
    elem.tags
        .get("highway")
        .is_some_and(|h| WALKABLE_HIGHWAYS.contains(&h.as_str()))
}

fn abbreviation(elem: &OsmElement) -> Option<String> {
    elem.tags
        .get("short_name")
        .or_else(|| elem.tags.get("ref"))
        .cloned()
}

/// Representative coordinate for a building element, trying the Overpass
/// `center`, the element's own position, then the member-node centroid.
fn building_location(elem: &OsmElement, nodes: &FxHashMap<NodeId, GeoPoint>) -> Option<GeoPoint> {
    if let Some(c) = &elem.center {
        return Some(GeoPoint::new(c.lat, c.lon));
    }
    if let (Some(lat), Some(lon)) = (elem.lat, elem.lon) {
        return Some(GeoPoint::new(lat, lon));
    }

    let members: Vec<GeoPoint> = elem
        .nodes
        .iter()
        .filter_map(|id| nodes.get(&NodeId(*id)).copied())
        .collect();
    if members.is_empty() {
        return None;
    }
    let n = members.len() as f64;
    Some(GeoPoint::new(
        members.iter().map(|p| p.lat).sum::<f64>() / n,
        members.iter().map(|p| p.lon).sum::<f64>() / n,
    ))
}
