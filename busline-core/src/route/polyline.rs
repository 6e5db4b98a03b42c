use super::MalformedPolylineError;
use crate::geodesy::{Coordinate, Gcj02, Wgs84};

/// decodes an AMap polyline string into WGS-84 coordinates.
///
/// pairs are separated by `;` and each pair is `lng,lat` in GCJ-02. traversal
/// order of the input is preserved, as it defines the shape of the route.
///
/// # Arguments
///
/// * `raw` - polyline in the form `"lng,lat;lng,lat;..."`
///
/// # Returns
///
/// all decoded, transformed coordinates, or an error naming the first segment
/// that could not be read as two floats.
pub fn decode_polyline(raw: &str) -> Result<Vec<Coordinate<Wgs84>>, MalformedPolylineError> {
    if raw.trim().is_empty() {
        return Err(MalformedPolylineError::Empty);
    }
    raw.split(';')
        .enumerate()
        .map(|(index, segment)| {
            Coordinate::<Gcj02>::parse_pair(segment)
                .map(|c| c.to_wgs84())
                .ok_or_else(|| MalformedPolylineError::InvalidSegment {
                    index,
                    segment: segment.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::decode_polyline;
    use crate::route::MalformedPolylineError;

    #[test]
    fn test_decode_two_points_in_order() {
        let coords = decode_polyline("116.397,39.908;116.398,39.909").unwrap();
        assert_eq!(coords.len(), 2);
        assert_ne!((coords[0].lng(), coords[0].lat()), (116.397, 39.908));
        assert_ne!((coords[1].lng(), coords[1].lat()), (116.398, 39.909));
        assert!(coords[0].lng() < coords[1].lng());
        assert!(coords[0].lat() < coords[1].lat());
    }

    #[test]
    fn test_decode_rejects_bad_segment() {
        let result = decode_polyline("116.397,39.908;116.398;116.399,39.910");
        assert_eq!(
            result,
            Err(MalformedPolylineError::InvalidSegment {
                index: 1,
                segment: String::from("116.398")
            })
        );
    }

    #[test]
    fn test_decode_rejects_trailing_separator_and_empty() {
        assert!(matches!(
            decode_polyline("116.397,39.908;"),
            Err(MalformedPolylineError::InvalidSegment { index: 1, .. })
        ));
        assert_eq!(decode_polyline("  "), Err(MalformedPolylineError::Empty));
    }
}
