//! `campus-nav` — map model, ingestion, and the navigation session.
//!
//! Everything geographic lives here: the ingested campus map, the walking
//! graph built from it, free-text building resolution, and the interactive
//! session that answers building-to-building routing queries.  The generic
//! graph machinery it drives lives in `campus-graph`.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`model`]    | `CampusMap`, `Footway`, `Building`                     |
//! | [`osm`]      | Overpass-JSON map loading                              |
//! | [`network`]  | `build_walk_graph`, the `Miles` weight type            |
//! | [`resolver`] | building lookup, nearest-footway-node search           |
//! | [`session`]  | `NavigationSession`, `RouteOutcome`, console loop      |
//! | [`error`]    | `NavError`, `NavResult<T>`                             |

pub mod error;
pub mod model;
pub mod network;
pub mod osm;
pub mod resolver;
pub mod session;


pub use error::{NavError, NavResult};
pub use model::{Building, CampusMap, Footway};
pub use network::{Miles, build_walk_graph};
pub use osm::{load_map, load_map_reader};
pub use resolver::{find_building, nearest_footway_node};
pub use session::{NavigationSession, Resolved, RouteOutcome};
