use geo::{Coord, LineString};
use itertools::Itertools;
use std::collections::{HashMap, HashSet};

use super::{
    Aggregation, AggregationError, EmptyGeometryWarning, LineCollection, LineFeature,
    StopCollection,
};
use crate::{geodesy::Crs, line::LineMetadata, stop::Stop};

/// merges the per-line tables of a run into the stop and line collections.
///
/// stops are grouped by `line_id` and sorted by `sequence_index`; each sorted
/// group becomes the path of its line, joined to the line metadata by
/// `line_id`. both collections are tagged WGS-84 (EPSG:4326).
///
/// # Arguments
///
/// * `stops_accum` - per-line stop tables, in fetch order
/// * `meta_accum` - per-line metadata, in fetch order
///
/// # Returns
///
/// the collections along with a warning for each line that has fewer than two
/// stop points. those lines are left out of the line collection but keep their
/// stops in the stop collection. returns an error if the tables contradict each
/// other: stops without metadata, metadata declaring stops with no stop rows,
/// or duplicated line, stop or sequence identifiers.
pub fn aggregate(
    stops_accum: Vec<Vec<Stop>>,
    meta_accum: Vec<LineMetadata>,
) -> Result<Aggregation, AggregationError> {
    let mut known_ids: HashSet<&str> = HashSet::with_capacity(meta_accum.len());
    for meta in meta_accum.iter() {
        if !known_ids.insert(meta.line_id.as_str()) {
            return Err(AggregationError::DuplicateLineMetadata(
                meta.line_id.clone(),
            ));
        }
    }

    let mut groups: HashMap<String, Vec<Stop>> = HashMap::new();
    for stop in stops_accum.into_iter().flatten() {
        groups.entry(stop.line_id.clone()).or_default().push(stop);
    }
    if let Some((line_id, orphans)) = groups
        .iter()
        .filter(|(line_id, _)| !known_ids.contains(line_id.as_str()))
        .sorted_by(|a, b| a.0.cmp(b.0))
        .next()
    {
        return Err(AggregationError::OrphanStops {
            line_id: line_id.clone(),
            count: orphans.len(),
        });
    }

    let mut all_stops: Vec<Stop> = Vec::new();
    let mut features: Vec<LineFeature> = Vec::with_capacity(meta_accum.len());
    let mut warnings: Vec<EmptyGeometryWarning> = vec![];

    for meta in meta_accum.into_iter() {
        let group = match groups.remove(&meta.line_id) {
            Some(group) => group,
            None if meta.stop_count > 0 => {
                return Err(AggregationError::MissingStopRows {
                    line_id: meta.line_id,
                    stop_count: meta.stop_count,
                })
            }
            None => vec![],
        };
        let sorted = sort_line_stops(&meta.line_id, group)?;

        if sorted.len() < 2 {
            log::warn!(
                "line '{}' has {} stop point(s), no line geometry will be built",
                meta.line_id,
                sorted.len()
            );
            warnings.push(EmptyGeometryWarning {
                line_id: meta.line_id.clone(),
                line_name: meta.name.clone(),
                point_count: sorted.len(),
            });
        } else {
            let path = sorted.iter().map(|s| Coord::from(s.position)).collect_vec();
            features.push(LineFeature {
                metadata: meta,
                geometry: LineString::new(path),
            });
        }
        all_stops.extend(sorted);
    }

    Ok(Aggregation {
        stops: StopCollection::new(Crs::Epsg4326, all_stops),
        lines: LineCollection::new(Crs::Epsg4326, features),
        warnings,
    })
}

/// sorts one line's stops into traversal order, rejecting repeated
/// sequence indices or stop ids.
fn sort_line_stops(line_id: &str, mut stops: Vec<Stop>) -> Result<Vec<Stop>, AggregationError> {
    stops.sort_by_key(|s| s.sequence_index);
    if let Some((a, _)) = stops
        .iter()
        .tuple_windows()
        .find(|(a, b)| a.sequence_index == b.sequence_index)
    {
        return Err(AggregationError::DuplicateSequence {
            line_id: line_id.to_string(),
            sequence_index: a.sequence_index,
        });
    }
    let mut seen: HashSet<&str> = HashSet::with_capacity(stops.len());
    for stop in stops.iter() {
        if !seen.insert(stop.bus_stop_id.as_str()) {
            return Err(AggregationError::DuplicateStop {
                line_id: line_id.to_string(),
                bus_stop_id: stop.bus_stop_id.clone(),
            });
        }
    }
    Ok(stops)
}
