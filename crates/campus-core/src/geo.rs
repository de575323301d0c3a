//! Geographic coordinate type and distance math.
//!
//! `GeoPoint` uses `f64` latitude/longitude: map sources carry up to seven
//! decimal places and route reports echo coordinates back at full precision,
//! so single precision would be visible in the output.

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in miles.
    ///
    /// All walking distances in the navigator are expressed in miles; the
    /// unit only has to be consistent across calls, since routing compares
    /// and sums these values but never converts them.
    pub fn distance_miles(self, other: GeoPoint) -> f64 {
        const R: f64 = 3961.0; // mean Earth radius, miles

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
