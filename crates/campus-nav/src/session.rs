//! Interactive navigation session.
//!
//! The session owns the ingested map and the walking graph (built once, at
//! construction, and read-only afterwards).  It alternates between two
//! states: idle — prompting for a start building — and routing — resolving
//! one start/destination pair and reporting the outcome.  The `#` sentinel
//! (or end of input) at the start prompt ends the session.
//!
//! [`route`](NavigationSession::route) is the pure query API; [`run`](
//! NavigationSession::run) wraps it in the console loop.  Both I/O ends are
//! generic so tests can drive a whole session through `Cursor`s.

use std::io::{self, BufRead, Write};

use log::info;

use campus_core::{GeoPoint, NodeId};
use campus_graph::{WeightedGraph, shortest_paths};

use crate::model::{Building, CampusMap};
use crate::network::{Miles, build_walk_graph};
use crate::resolver::{find_building, nearest_footway_node};

/// End-of-session sentinel accepted at the start prompt.
const END_OF_SESSION: &str = "#";

/// Fully resolved endpoints of one routing query: the matched buildings and
/// the footway nodes nearest to them.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub start: Building,
    pub destination: Building,
    pub start_node: NodeId,
    pub start_node_pos: GeoPoint,
    pub dest_node: NodeId,
    pub dest_node_pos: GeoPoint,
}

/// Outcome of one routing query.  Lookup failures and unreachability are
/// ordinary outcomes the session reports before reprompting — none of them
/// ends the process.
#[derive(Debug, Clone)]
pub enum RouteOutcome {
    /// The start query matched no building.
    StartNotFound,
    /// The destination query matched no building.
    DestinationNotFound,
    /// The map has no footway nodes, so coordinates cannot resolve to a
    /// graph vertex.
    NoFootwayNodes,
    /// Both endpoints resolved, but no walking path connects them.
    Unreachable(Resolved),
    /// A shortest walking path was found.
    Route {
        resolved: Resolved,
        /// Total walking distance in miles.
        distance_miles: f64,
        /// Node sequence from start to destination, inclusive.
        path: Vec<NodeId>,
    },
}

pub struct NavigationSession {
    map: CampusMap,
    graph: WeightedGraph<NodeId, Miles>,
}

impl NavigationSession {
    pub fn new(map: CampusMap) -> Self {
        let graph = build_walk_graph(&map);
        Self { map, graph }
    }

    pub fn map(&self) -> &CampusMap {
        &self.map
    }

    pub fn graph(&self) -> &WeightedGraph<NodeId, Miles> {
        &self.graph
    }

    /// Answer one start/destination query.
    ///
    /// Strictly in order: resolve both buildings (failures short-circuit
    /// without touching the engine), resolve the nearest footway node to
    /// each, run the engine from the start node, then reconstruct.  The
    /// distance/predecessor maps are local to this call; nothing is cached
    /// between queries.
    pub fn route(&self, start_query: &str, dest_query: &str) -> RouteOutcome {
        let Some(start) = find_building(&self.map.buildings, start_query) else {
            return RouteOutcome::StartNotFound;
        };
        let Some(destination) = find_building(&self.map.buildings, dest_query) else {
            return RouteOutcome::DestinationNotFound;
        };

        let Some(start_node) = nearest_footway_node(&self.map, start.location) else {
            return RouteOutcome::NoFootwayNodes;
        };
        let Some(dest_node) = nearest_footway_node(&self.map, destination.location) else {
            return RouteOutcome::NoFootwayNodes;
        };
        // Nearest-node hits always carry a stored coordinate.
        let (Some(&start_node_pos), Some(&dest_node_pos)) =
            (self.map.nodes.get(&start_node), self.map.nodes.get(&dest_node))
        else {
            return RouteOutcome::NoFootwayNodes;
        };

        info!(
            "routing {} ({start_node}) -> {} ({dest_node})",
            start.name, destination.name
        );

        let resolved = Resolved {
            start: start.clone(),
            destination: destination.clone(),
            start_node,
            start_node_pos,
            dest_node,
            dest_node_pos,
        };

        let tree = shortest_paths(&self.graph, start_node);
        let (Some(distance), Some(path)) = (tree.distance(dest_node), tree.path_to(dest_node))
        else {
            return RouteOutcome::Unreachable(resolved);
        };

        RouteOutcome::Route {
            resolved,
            distance_miles: distance.into_inner(),
            path,
        }
    }

    /// The console loop: prompt for a start building (`#` ends the
    /// session), then a destination, report, repeat.  End of input ends the
    /// session like the sentinel.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        loop {
            write!(output, "Enter start (partial name or abbreviation), or #> ")?;
            output.flush()?;
            let Some(start_query) = read_query(&mut input)? else { break };
            if start_query == END_OF_SESSION {
                break;
            }

            write!(output, "Enter destination (partial name or abbreviation)> ")?;
            output.flush()?;
            let Some(dest_query) = read_query(&mut input)? else { break };

            report(&mut output, &self.route(&start_query, &dest_query))?;
            writeln!(output)?;
        }
        Ok(())
    }
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn report<W: Write>(output: &mut W, outcome: &RouteOutcome) -> io::Result<()> {
    match outcome {
        RouteOutcome::StartNotFound => writeln!(output, "Start building not found"),
        RouteOutcome::DestinationNotFound => writeln!(output, "Destination building not found"),
        RouteOutcome::NoFootwayNodes => {
            writeln!(output, "No footway nodes on the map; cannot navigate")
        }
        RouteOutcome::Unreachable(resolved) => {
            write_endpoints(output, resolved)?;
            writeln!(output, "Navigating with Dijkstra...")?;
            writeln!(output, "Sorry, destination unreachable")
        }
        RouteOutcome::Route { resolved, distance_miles, path } => {
            write_endpoints(output, resolved)?;
            writeln!(output, "Navigating with Dijkstra...")?;
            writeln!(output, "Distance to dest: {distance_miles:.6} miles")?;
            let rendered: Vec<String> = path.iter().map(|n| n.to_string()).collect();
            writeln!(output, "Path: {}", rendered.join("->"))
        }
    }
}

fn write_endpoints<W: Write>(output: &mut W, r: &Resolved) -> io::Result<()> {
    writeln!(output, "Starting point:")?;
    writeln!(output, " {}", r.start.name)?;
    writeln!(output, " {}", r.start.location)?;
    writeln!(output, "Destination point:")?;
    writeln!(output, " {}", r.destination.name)?;
    writeln!(output, " {}", r.destination.location)?;
    writeln!(output)?;
    writeln!(output, "Nearest start node:")?;
    writeln!(output, " {}", r.start_node)?;
    writeln!(output, " {}", r.start_node_pos)?;
    writeln!(output, "Nearest destination node:")?;
    writeln!(output, " {}", r.dest_node)?;
    writeln!(output, " {}", r.dest_node_pos)?;
    writeln!(output)
}

/// One trimmed line of input; `None` at end of stream.
fn read_query<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
