use std::collections::HashSet;

use super::{MalformedStopError, RawStop, Stop};
use crate::geodesy::{Coordinate, Gcj02};

/// builds the stop table of one line from the raw API stop entries.
///
/// each `location` is parsed as GCJ-02 and converted to WGS-84. the
/// `sequence_index` of a stop is read from its `sequence` field, and the output
/// keeps the input order, so callers that need traversal order must sort by
/// `sequence_index`.
///
/// # Arguments
///
/// * `line_id` - id of the line the stops belong to
/// * `raw_stops` - stop entries as delivered by the API
///
/// # Returns
///
/// the stop table, or the first defect found. a missing/malformed location,
/// missing id, non-integer sequence, or a repeated sequence or stop id on the
/// line are all defects.
pub fn build_stops(line_id: &str, raw_stops: &[RawStop]) -> Result<Vec<Stop>, MalformedStopError> {
    let mut sequences: HashSet<u32> = HashSet::with_capacity(raw_stops.len());
    let mut stop_ids: HashSet<&str> = HashSet::with_capacity(raw_stops.len());
    let mut stops = Vec::with_capacity(raw_stops.len());

    for (index, raw) in raw_stops.iter().enumerate() {
        let display_id = raw.id.clone().unwrap_or_default();
        let bus_stop_id = raw
            .id
            .as_deref()
            .ok_or_else(|| MalformedStopError::MissingId {
                index,
                stop_id: raw.name.clone(),
            })?;
        let location =
            raw.location
                .as_deref()
                .ok_or_else(|| MalformedStopError::MissingLocation {
                    index,
                    stop_id: display_id.clone(),
                })?;
        let position = Coordinate::<Gcj02>::parse_pair(location)
            .ok_or_else(|| MalformedStopError::InvalidLocation {
                index,
                stop_id: display_id.clone(),
                location: location.to_string(),
            })?
            .to_wgs84();
        let sequence_index = raw
            .sequence
            .as_deref()
            .and_then(|s| s.trim().parse::<u32>().ok())
            .ok_or_else(|| MalformedStopError::InvalidSequence {
                index,
                stop_id: display_id.clone(),
                sequence: raw.sequence.clone(),
            })?;

        if !sequences.insert(sequence_index) {
            return Err(MalformedStopError::DuplicateSequence {
                line_id: line_id.to_string(),
                sequence: sequence_index,
            });
        }
        if !stop_ids.insert(bus_stop_id) {
            return Err(MalformedStopError::DuplicateStopId {
                line_id: line_id.to_string(),
                stop_id: bus_stop_id.to_string(),
            });
        }

        stops.push(Stop {
            line_id: line_id.to_string(),
            bus_stop_id: bus_stop_id.to_string(),
            name: raw.name.clone(),
            sequence_index,
            position,
        });
    }
    Ok(stops)
}

#[cfg(test)]
mod test {
    use super::build_stops;
    use crate::stop::{MalformedStopError, RawStop};

    #[test]
    fn test_sequence_read_from_field_not_position() {
        let raw = vec![
            RawStop::new("s2", "c", 2, "116.399,39.910"),
            RawStop::new("s0", "a", 0, "116.397,39.908"),
            RawStop::new("s1", "b", 1, "116.398,39.909"),
        ];
        let stops = build_stops("L1", &raw).unwrap();
        let seq: Vec<u32> = stops.iter().map(|s| s.sequence_index).collect();
        assert_eq!(seq, vec![2, 0, 1]);
        assert!(stops.iter().all(|s| s.line_id == "L1"));
        assert_ne!(stops[1].position.lng(), 116.397);
    }

    #[test]
    fn test_missing_location_fails() {
        let mut bad = RawStop::new("s1", "b", 1, "116.398,39.909");
        bad.location = None;
        let raw = vec![RawStop::new("s0", "a", 0, "116.397,39.908"), bad];
        assert_eq!(
            build_stops("L1", &raw),
            Err(MalformedStopError::MissingLocation {
                index: 1,
                stop_id: String::from("s1")
            })
        );
    }

    #[test]
    fn test_malformed_location_fails() {
        let raw = vec![RawStop::new("s0", "a", 0, "116.397;39.908")];
        assert!(matches!(
            build_stops("L1", &raw),
            Err(MalformedStopError::InvalidLocation { index: 0, .. })
        ));
    }

    #[test]
    fn test_bad_sequence_fails() {
        let mut raw = RawStop::new("s0", "a", 0, "116.397,39.908");
        raw.sequence = Some(String::from("first"));
        assert!(matches!(
            build_stops("L1", &[raw]),
            Err(MalformedStopError::InvalidSequence { index: 0, .. })
        ));
    }

    #[test]
    fn test_duplicates_fail() {
        let raw = vec![
            RawStop::new("s0", "a", 1, "116.397,39.908"),
            RawStop::new("s1", "b", 1, "116.398,39.909"),
        ];
        assert_eq!(
            build_stops("L1", &raw),
            Err(MalformedStopError::DuplicateSequence {
                line_id: String::from("L1"),
                sequence: 1
            })
        );
        let raw = vec![
            RawStop::new("s0", "a", 1, "116.397,39.908"),
            RawStop::new("s0", "a", 2, "116.398,39.909"),
        ];
        assert!(matches!(
            build_stops("L1", &raw),
            Err(MalformedStopError::DuplicateStopId { .. })
        ));
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        assert_eq!(build_stops("L1", &[]), Ok(vec![]));
    }
}
