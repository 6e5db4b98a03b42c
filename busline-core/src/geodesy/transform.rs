use std::f64::consts::PI;

/// semi-major axis of the Krasovsky 1940 ellipsoid used by GCJ-02
const SEMI_MAJOR_AXIS: f64 = 6378245.0;
/// eccentricity squared of the Krasovsky 1940 ellipsoid
const ECCENTRICITY_SQ: f64 = 0.006_693_421_622_965_943_23;

/// approximate mainland bounding box outside of which no offset is applied
const DOMAIN_LNG: (f64, f64) = (73.66, 135.05);
const DOMAIN_LAT: (f64, f64) = (3.86, 53.55);

/// true if the coordinate falls within the region where GCJ-02 offsets are applied.
/// NaN values always fall outside.
pub fn in_correction_domain(lng: f64, lat: f64) -> bool {
    lng > DOMAIN_LNG.0 && lng < DOMAIN_LNG.1 && lat > DOMAIN_LAT.0 && lat < DOMAIN_LAT.1
}

/// removes the GCJ-02 obfuscation offset from a coordinate, returning the
/// approximate WGS-84 (lng, lat).
///
/// coordinates outside of the correction domain are returned unchanged. this
/// function is pure and never panics.
///
/// # Arguments
///
/// * `lng` - GCJ-02 longitude in degrees
/// * `lat` - GCJ-02 latitude in degrees
///
/// # Returns
///
/// the WGS-84 (longitude, latitude) pair
pub fn to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    if !in_correction_domain(lng, lat) {
        return (lng, lat);
    }
    let (dlng, dlat) = offset(lng, lat);
    (lng - dlng, lat - dlat)
}

/// the GCJ-02 offset (in degrees) that was added to a WGS-84 coordinate near (lng, lat)
fn offset(lng: f64, lat: f64) -> (f64, f64) {
    let x = lng - 105.0;
    let y = lat - 35.0;
    let rad_lat = lat / 180.0 * PI;
    let sin_lat = rad_lat.sin();
    let magic = 1.0 - ECCENTRICITY_SQ * sin_lat * sin_lat;
    let sqrt_magic = magic.sqrt();
    let dlat = (delta_lat(x, y) * 180.0)
        / ((SEMI_MAJOR_AXIS * (1.0 - ECCENTRICITY_SQ)) / (magic * sqrt_magic) * PI);
    let dlng = (delta_lng(x, y) * 180.0) / (SEMI_MAJOR_AXIS / sqrt_magic * rad_lat.cos() * PI);
    (dlng, dlat)
}

fn delta_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

fn delta_lng(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

#[cfg(test)]
mod test {
    use super::{in_correction_domain, to_wgs84};

    #[test]
    fn test_offset_inside_domain_is_small_and_nonzero() {
        for (lng, lat) in [
            (116.397, 39.908),
            (121.4737, 31.2304),
            (113.2644, 23.1291),
            (104.0665, 30.5723),
        ] {
            let (x, y) = to_wgs84(lng, lat);
            let (dx, dy) = ((lng - x).abs(), (lat - y).abs());
            assert!(dx > 0.0 && dx < 0.01, "lng shift {dx} at ({lng},{lat})");
            assert!(dy > 0.0 && dy < 0.01, "lat shift {dy} at ({lng},{lat})");
        }
    }

    #[test]
    fn test_known_beijing_point() {
        // Tiananmen, GCJ-02 -> WGS-84 is roughly (-0.00624, -0.00140)
        let (x, y) = to_wgs84(116.397, 39.908);
        assert!((x - 116.39076).abs() < 1e-4, "{x}");
        assert!((y - 39.90660).abs() < 1e-4, "{y}");
    }

    #[test]
    fn test_outside_domain_is_identity() {
        assert_eq!(to_wgs84(0.0, 0.0), (0.0, 0.0));
        assert_eq!(to_wgs84(-105.2, 39.75), (-105.2, 39.75));
        assert_eq!(to_wgs84(139.69, 35.68), (139.69, 35.68));
    }

    #[test]
    fn test_non_finite_input_passes_through() {
        let (x, y) = to_wgs84(f64::NAN, 39.9);
        assert!(x.is_nan());
        assert_eq!(y, 39.9);
        assert_eq!(to_wgs84(f64::INFINITY, 30.0), (f64::INFINITY, 30.0));
        assert!(!in_correction_domain(f64::NAN, f64::NAN));
    }
}
