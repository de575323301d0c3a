//! Walking-graph construction from an ingested map.

use log::warn;
use ordered_float::OrderedFloat;

use campus_core::NodeId;
use campus_graph::WeightedGraph;

use crate::model::CampusMap;

/// Edge weight: walking distance in miles, wrapped for total ordering so it
/// can key the engine's frontier.
pub type Miles = OrderedFloat<f64>;

/// Build the walking graph.
///
/// Every map node becomes a vertex — including nodes no footway touches,
/// which simply remain unreachable.  Each consecutive pair of footway nodes
/// becomes two directed edges (one per walking direction) weighted by the
/// haversine distance between the endpoints.  Footway references to nodes
/// missing from the coordinate table drop that segment with a warning.
pub fn build_walk_graph(map: &CampusMap) -> WeightedGraph<NodeId, Miles> {
    let mut graph = WeightedGraph::new();

    for &id in map.nodes.keys() {
        graph.add_vertex(id);
    }

    for footway in &map.footways {
        for pair in footway.nodes.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            let (Some(&a), Some(&b)) = (map.nodes.get(&from), map.nodes.get(&to)) else {
                warn!("footway {}: dropping segment {from}->{to} with unresolved node", footway.id);
                continue;
            };
            let miles = OrderedFloat(a.distance_miles(b));
            graph.add_edge(from, to, miles);
            graph.add_edge(to, from, miles);
        }
    }

    graph
}
