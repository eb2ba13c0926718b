use crate::models::GeoPoint;

/// Mean Earth radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the great-circle distance between two points in kilometers
/// using the Haversine formula, rounded to two decimal places.
///
/// Total over finite inputs: out-of-range degrees still produce a
/// mathematically defined result, and NaN propagates per IEEE-754. Callers
/// that need coordinate validation do it before calling (see
/// `checkin_policy`).
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = b.longitude.to_radians() - a.longitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    round2(EARTH_RADIUS_KM * c)
}

/// Round to two decimal places, ties away from zero (the behavior of
/// `f64::round`). Shared with the working-hours aggregation.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEW_YORK: GeoPoint = GeoPoint {
        latitude: 40.7128,
        longitude: -74.0060,
    };
    const LONDON: GeoPoint = GeoPoint {
        latitude: 51.5074,
        longitude: -0.1278,
    };

    // Half the circumference of the 6371 km sphere, the largest possible
    // great-circle distance
    const MAX_DISTANCE_KM: f64 = 20015.09;

    #[test]
    fn test_identity_is_zero() {
        let points = [
            GeoPoint::new(0.0, 0.0),
            NEW_YORK,
            GeoPoint::new(-90.0, 0.0),
            GeoPoint::new(89.9999, 179.9999),
        ];
        for p in points {
            assert_eq!(distance_km(&p, &p), 0.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            (NEW_YORK, LONDON),
            (GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)),
            (GeoPoint::new(-33.8688, 151.2093), GeoPoint::new(35.6762, 139.6503)),
            (GeoPoint::new(52.5200, 13.4050), GeoPoint::new(48.8566, 2.3522)),
        ];
        for (a, b) in pairs {
            assert_eq!(distance_km(&a, &b), distance_km(&b, &a));
        }
    }

    #[test]
    fn test_one_degree_of_longitude_at_equator() {
        let origin = GeoPoint::new(0.0, 0.0);
        let one_east = GeoPoint::new(0.0, 1.0);
        assert_eq!(distance_km(&origin, &one_east), 111.19);
    }

    #[test]
    fn test_new_york_to_london() {
        let d = distance_km(&NEW_YORK, &LONDON);
        // Published references vary slightly by rounding convention
        assert!(
            (5570.22..=5570.25).contains(&d),
            "expected ~5570.2 km, got {d}"
        );
    }

    #[test]
    fn test_antipodal_maximum() {
        let origin = GeoPoint::new(0.0, 0.0);
        let antipode = GeoPoint::new(0.0, 180.0);
        assert_eq!(distance_km(&origin, &antipode), MAX_DISTANCE_KM);

        let north_pole = GeoPoint::new(90.0, 0.0);
        let south_pole = GeoPoint::new(-90.0, 0.0);
        assert_eq!(distance_km(&north_pole, &south_pole), MAX_DISTANCE_KM);
    }

    #[test]
    fn test_quarter_circumference() {
        let origin = GeoPoint::new(0.0, 0.0);
        let quarter = GeoPoint::new(0.0, 90.0);
        assert_eq!(distance_km(&origin, &quarter), 10007.54);
    }

    #[test]
    fn test_range_bound() {
        let points = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(90.0, 0.0),
            GeoPoint::new(-90.0, 0.0),
            GeoPoint::new(45.0, 45.0),
            GeoPoint::new(-45.0, -135.0),
            GeoPoint::new(12.34, -178.9),
            NEW_YORK,
            LONDON,
        ];
        for a in &points {
            for b in &points {
                let d = distance_km(a, b);
                assert!(d >= 0.0, "negative distance for {a:?} -> {b:?}");
                assert!(
                    d <= MAX_DISTANCE_KM,
                    "distance {d} exceeds half circumference for {a:?} -> {b:?}"
                );
            }
        }
    }

    #[test]
    fn test_result_has_at_most_two_decimals() {
        let pairs = [
            (GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0)),
            (NEW_YORK, LONDON),
            (GeoPoint::new(37.7749, -122.4194), GeoPoint::new(37.7750, -122.4194)),
        ];
        for (a, b) in pairs {
            let d = distance_km(&a, &b);
            let scaled = d * 100.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "{d} carries more than two decimal places"
            );
        }
    }

    #[test]
    fn test_nan_propagates() {
        let bad = GeoPoint::new(f64::NAN, 0.0);
        let origin = GeoPoint::new(0.0, 0.0);
        assert!(distance_km(&bad, &origin).is_nan());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(111.194926), 111.19);
        assert_eq!(round2(8.505), 8.51);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(-2.345), -2.35);
    }
}
