use std::path::{Path, PathBuf};

use busline_core::{
    aggregate::{LineCollection, StopCollection},
    geodesy::Crs,
};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use super::{ExportError, LayerExporter};
use crate::util::fs::{check_overwrite, create_dirs};

pub const STOP_LINE_ID: &str = "line_id";
pub const STOP_ID: &str = "bus_stop_id";
pub const STOP_NAME: &str = "name";
pub const STOP_SEQUENCE: &str = "sequence";

/// writes each collection as a GeoJSON FeatureCollection with a named `crs`
/// member identifying the reference system.
pub struct GeoJsonExporter {
    output_directory: PathBuf,
    overwrite: bool,
}

impl GeoJsonExporter {
    pub fn new(output_directory: &Path, overwrite: bool) -> Self {
        Self {
            output_directory: output_directory.to_path_buf(),
            overwrite,
        }
    }

    fn write(
        &self,
        features: Vec<Feature>,
        crs: Crs,
        destination: &str,
    ) -> Result<PathBuf, ExportError> {
        create_dirs(&self.output_directory)?;
        let path = self.output_directory.join(format!("{destination}.geojson"));
        check_overwrite(&path, self.overwrite)?;
        let collection = FeatureCollection {
            bbox: None,
            features,
            foreign_members: Some(crs_member(crs)),
        };
        let body = serde_json::to_string(&collection)
            .map_err(|e| ExportError::GeoJsonError(e.to_string()))?;
        std::fs::write(&path, body)?;
        Ok(path)
    }
}

impl LayerExporter for GeoJsonExporter {
    fn export_stops(
        &self,
        stops: &StopCollection,
        destination: &str,
    ) -> Result<PathBuf, ExportError> {
        let features = stops
            .iter()
            .map(|stop| {
                let mut properties = JsonObject::new();
                properties.insert(STOP_LINE_ID.to_string(), json!(stop.line_id));
                properties.insert(STOP_ID.to_string(), json!(stop.bus_stop_id));
                properties.insert(STOP_NAME.to_string(), json!(stop.name));
                properties.insert(STOP_SEQUENCE.to_string(), json!(stop.sequence_index));
                feature(Value::from(&stop.point()), properties)
            })
            .collect();
        let path = self.write(features, stops.crs(), destination)?;
        log::info!("wrote {} stops to {}", stops.len(), path.display());
        Ok(path)
    }

    fn export_lines(
        &self,
        lines: &LineCollection,
        destination: &str,
    ) -> Result<PathBuf, ExportError> {
        let features = lines
            .iter()
            .map(|line| {
                let properties = match serde_json::to_value(&line.metadata) {
                    Ok(serde_json::Value::Object(map)) => Ok(map),
                    Ok(_) => Err(ExportError::GeoJsonError(String::from(
                        "line metadata did not serialize as an object",
                    ))),
                    Err(e) => Err(ExportError::GeoJsonError(e.to_string())),
                }?;
                Ok(feature(Value::from(&line.geometry), properties))
            })
            .collect::<Result<Vec<_>, ExportError>>()?;
        let path = self.write(features, lines.crs(), destination)?;
        log::info!("wrote {} lines to {}", lines.len(), path.display());
        Ok(path)
    }
}

fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn crs_member(crs: Crs) -> JsonObject {
    let mut members = JsonObject::new();
    members.insert(
        String::from("crs"),
        json!({ "type": "name", "properties": { "name": crs.ogc_urn() } }),
    );
    members
}

#[cfg(test)]
mod test {
    use super::GeoJsonExporter;
    use crate::export::{read_stop_layer, LayerExporter};
    use busline_core::{
        aggregate::aggregate,
        geodesy::{Coordinate, Crs, Wgs84},
        line::LineMetadata,
        stop::Stop,
    };

    fn meta(line_id: &str) -> LineMetadata {
        LineMetadata {
            line_id: line_id.to_string(),
            line_type: String::from("普通公交"),
            name: String::from("快速公交1线"),
            start_stop: String::from("天安门东"),
            end_stop: String::from("北京西站"),
            start_time: String::from("0500"),
            end_time: String::from("2300"),
            distance: None,
            basic_price: String::from("1.0"),
            total_price: String::from("2.0"),
            stop_count: 2,
        }
    }

    fn stop(id: &str, seq: u32, x: f64) -> Stop {
        Stop {
            line_id: String::from("L1"),
            bus_stop_id: id.to_string(),
            name: format!("站{seq}"),
            sequence_index: seq,
            position: Coordinate::<Wgs84>::new(x, 39.9),
        }
    }

    #[test]
    fn test_geojson_round_trip() {
        let dir =
            std::env::temp_dir().join(format!("busline-geojson-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let aggregation = aggregate(
            vec![vec![stop("b", 1, 116.31), stop("a", 0, 116.30)]],
            vec![meta("L1")],
        )
        .unwrap();
        let exporter = GeoJsonExporter::new(&dir, false);
        let stops_path = exporter.export_stops(&aggregation.stops, "stops").unwrap();
        let lines_path = exporter.export_lines(&aggregation.lines, "lines").unwrap();

        let read = read_stop_layer(&stops_path).unwrap();
        assert_eq!(read, aggregation.stops);
        assert_eq!(read.crs(), Crs::Epsg4326);

        let lines = std::fs::read_to_string(&lines_path).unwrap();
        assert!(lines.contains("urn:ogc:def:crs:EPSG::4326"));
        assert!(lines.contains("快速公交1线"));
        assert!(lines.contains("LineString"));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
