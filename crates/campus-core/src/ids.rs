//! Strongly typed identifier wrappers for map entities.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is the stable
//! 64-bit identifier assigned by the map source (OSM), not an array index —
//! it stays valid across reloads of the same extract.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis struct $name(pub $inner);

        impl fmt::Display for $name {
            /// Prints the bare identifier — these IDs surface verbatim in
            /// user-facing route output.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> Self {
                Self(raw)
            }
        }
    };
}

typed_id! {
    /// Identifier of a map node (a point with coordinates).  Graph vertices
    /// are keyed by this.
    pub struct NodeId(i64);
}

typed_id! {
    /// Identifier of a map way.  Kept on footways for provenance and
    /// diagnostics.
    pub struct WayId(i64);
}
