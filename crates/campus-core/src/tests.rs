//! Unit tests for campus-core primitives.

#[cfg(test)]
mod ids {
    use crate::{NodeId, WayId};

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(NodeId(463_814_048) > NodeId(463_814_047));
        assert!(WayId(100) > WayId(99));
    }

    #[test]
    fn display_is_bare_id() {
        // Route output joins these with "->", so no type-name decoration.
        assert_eq!(NodeId(463_814_047).to_string(), "463814047");
        assert_eq!(WayId(-7).to_string(), "-7");
    }

    #[test]
    fn from_raw() {
        assert_eq!(NodeId::from(42i64), NodeId(42));
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(41.8716, -87.6477);
        assert!(p.distance_miles(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        // One degree of latitude ≈ 69.1 miles.
        let a = GeoPoint::new(41.0, -87.6);
        let b = GeoPoint::new(42.0, -87.6);
        let d = a.distance_miles(b);
        assert!((d - 69.13).abs() < 0.3, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(41.8716, -87.6477);
        let b = GeoPoint::new(41.8699, -87.6512);
        assert_eq!(a.distance_miles(b), b.distance_miles(a));
    }
}
