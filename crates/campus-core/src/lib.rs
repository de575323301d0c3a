//! `campus-core` — foundational types for the campus walking navigator.
//!
//! This crate is a dependency of every other `campus-*` crate.  It
//! intentionally has no `campus-*` dependencies and no external ones.
//!
//! # What lives here
//!
//! | Module  | Contents                                  |
//! |---------|-------------------------------------------|
//! | [`ids`] | `NodeId`, `WayId`                         |
//! | [`geo`] | `GeoPoint`, haversine distance in miles   |

pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{NodeId, WayId};
