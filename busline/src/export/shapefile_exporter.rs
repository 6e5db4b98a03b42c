use std::path::{Path, PathBuf};

use busline_core::{
    aggregate::{LineCollection, StopCollection},
    geodesy::Crs,
};
use shapefile::dbase::{FieldName, FieldValue, Record, TableWriterBuilder};

use super::{ExportError, LayerExporter};
use crate::util::fs::{check_overwrite, create_dirs};

// dBASE field names are limited to 10 bytes
pub const STOP_LINE_ID: &str = "line_id";
pub const STOP_ID: &str = "bus_id";
pub const STOP_NAME: &str = "name";
pub const STOP_SEQUENCE: &str = "sequence";
pub const LINE_ID: &str = "id";
pub const LINE_TYPE: &str = "type";
pub const LINE_NAME: &str = "name";
pub const LINE_START_STOP: &str = "start_stop";
pub const LINE_END_STOP: &str = "end_stop";
pub const LINE_START_TIME: &str = "start_time";
pub const LINE_END_TIME: &str = "end_time";
pub const LINE_DISTANCE: &str = "distance";
pub const LINE_BASIC_PRICE: &str = "basic_pric";
pub const LINE_TOTAL_PRICE: &str = "total_pric";
pub const LINE_STOP_COUNT: &str = "stop_num";

const CHARACTER_WIDTH: u8 = 254;

/// writes ESRI shapefiles (.shp, .shx, .dbf) along with a .prj carrying the
/// collection's reference system and a .cpg declaring UTF-8 attributes.
pub struct ShapefileExporter {
    output_directory: PathBuf,
    overwrite: bool,
}

impl ShapefileExporter {
    pub fn new(output_directory: &Path, overwrite: bool) -> Self {
        Self {
            output_directory: output_directory.to_path_buf(),
            overwrite,
        }
    }

    fn prepare(&self, destination: &str) -> Result<PathBuf, ExportError> {
        create_dirs(&self.output_directory)?;
        let path = self.output_directory.join(format!("{destination}.shp"));
        check_overwrite(&path, self.overwrite)?;
        Ok(path)
    }
}

impl LayerExporter for ShapefileExporter {
    fn export_stops(
        &self,
        stops: &StopCollection,
        destination: &str,
    ) -> Result<PathBuf, ExportError> {
        let path = self.prepare(destination)?;
        let table = TableWriterBuilder::new()
            .add_character_field(field_name(STOP_LINE_ID)?, CHARACTER_WIDTH)
            .add_character_field(field_name(STOP_ID)?, CHARACTER_WIDTH)
            .add_character_field(field_name(STOP_NAME)?, CHARACTER_WIDTH)
            .add_numeric_field(field_name(STOP_SEQUENCE)?, 10, 0);
        {
            let mut writer = shapefile::Writer::from_path(&path, table)
                .map_err(|e| ExportError::ShapefileError(e.to_string()))?;
            for stop in stops.iter() {
                let point = shapefile::Point::new(stop.position.lng(), stop.position.lat());
                let mut record = Record::default();
                record.insert(STOP_LINE_ID.to_string(), character(&stop.line_id));
                record.insert(STOP_ID.to_string(), character(&stop.bus_stop_id));
                record.insert(STOP_NAME.to_string(), character(&stop.name));
                record.insert(
                    STOP_SEQUENCE.to_string(),
                    FieldValue::Numeric(Some(stop.sequence_index as f64)),
                );
                writer
                    .write_shape_and_record(&point, &record)
                    .map_err(|e| ExportError::ShapefileError(e.to_string()))?;
            }
        }
        write_sidecars(&path, stops.crs())?;
        log::info!("wrote {} stops to {}", stops.len(), path.display());
        Ok(path)
    }

    fn export_lines(
        &self,
        lines: &LineCollection,
        destination: &str,
    ) -> Result<PathBuf, ExportError> {
        let path = self.prepare(destination)?;
        let mut table = TableWriterBuilder::new();
        for name in [
            LINE_ID,
            LINE_TYPE,
            LINE_NAME,
            LINE_START_STOP,
            LINE_END_STOP,
            LINE_START_TIME,
            LINE_END_TIME,
        ] {
            table = table.add_character_field(field_name(name)?, CHARACTER_WIDTH);
        }
        let table = table
            .add_numeric_field(field_name(LINE_DISTANCE)?, 18, 6)
            .add_character_field(field_name(LINE_BASIC_PRICE)?, CHARACTER_WIDTH)
            .add_character_field(field_name(LINE_TOTAL_PRICE)?, CHARACTER_WIDTH)
            .add_numeric_field(field_name(LINE_STOP_COUNT)?, 10, 0);
        {
            let mut writer = shapefile::Writer::from_path(&path, table)
                .map_err(|e| ExportError::ShapefileError(e.to_string()))?;
            for line in lines.iter() {
                let points = line
                    .geometry
                    .coords()
                    .map(|c| shapefile::Point::new(c.x, c.y))
                    .collect();
                let polyline = shapefile::Polyline::new(points);
                let meta = &line.metadata;
                let mut record = Record::default();
                record.insert(LINE_ID.to_string(), character(&meta.line_id));
                record.insert(LINE_TYPE.to_string(), character(&meta.line_type));
                record.insert(LINE_NAME.to_string(), character(&meta.name));
                record.insert(LINE_START_STOP.to_string(), character(&meta.start_stop));
                record.insert(LINE_END_STOP.to_string(), character(&meta.end_stop));
                record.insert(LINE_START_TIME.to_string(), character(&meta.start_time));
                record.insert(LINE_END_TIME.to_string(), character(&meta.end_time));
                record.insert(LINE_DISTANCE.to_string(), FieldValue::Numeric(meta.distance));
                record.insert(LINE_BASIC_PRICE.to_string(), character(&meta.basic_price));
                record.insert(LINE_TOTAL_PRICE.to_string(), character(&meta.total_price));
                record.insert(
                    LINE_STOP_COUNT.to_string(),
                    FieldValue::Numeric(Some(meta.stop_count as f64)),
                );
                writer
                    .write_shape_and_record(&polyline, &record)
                    .map_err(|e| ExportError::ShapefileError(e.to_string()))?;
            }
        }
        write_sidecars(&path, lines.crs())?;
        log::info!("wrote {} lines to {}", lines.len(), path.display());
        Ok(path)
    }
}

fn field_name(name: &str) -> Result<FieldName, ExportError> {
    FieldName::try_from(name)
        .map_err(|e| ExportError::ShapefileError(format!("invalid field name '{name}': {e:?}")))
}

fn character(value: &str) -> FieldValue {
    FieldValue::Character(Some(value.to_string()))
}

/// .prj with the ESRI WKT of `crs` and .cpg declaring UTF-8 attribute text
fn write_sidecars(shp_path: &Path, crs: Crs) -> Result<(), ExportError> {
    std::fs::write(shp_path.with_extension("prj"), crs.esri_wkt())?;
    std::fs::write(shp_path.with_extension("cpg"), "UTF-8")?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::ShapefileExporter;
    use crate::export::{read_stop_layer, ExportError, LayerExporter};
    use busline_core::{
        aggregate::aggregate,
        geodesy::{Coordinate, Crs, Wgs84},
        line::LineMetadata,
        stop::Stop,
    };
    use itertools::Itertools;

    fn test_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("busline-shp-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn meta(line_id: &str, stop_count: usize) -> LineMetadata {
        LineMetadata {
            line_id: line_id.to_string(),
            line_type: String::from("bus"),
            name: format!("line {line_id}"),
            start_stop: String::from("a"),
            end_stop: String::from("z"),
            start_time: String::from("0530"),
            end_time: String::from("2230"),
            distance: Some(18.25),
            basic_price: String::from("2.0"),
            total_price: String::from("4.0"),
            stop_count,
        }
    }

    fn stop(line_id: &str, id: &str, seq: u32, x: f64) -> Stop {
        Stop {
            line_id: line_id.to_string(),
            bus_stop_id: id.to_string(),
            name: format!("stop {id}"),
            sequence_index: seq,
            position: Coordinate::<Wgs84>::new(x, 39.9),
        }
    }

    #[test]
    fn test_stop_layer_round_trip() {
        let dir = test_dir("roundtrip");
        let stops = vec![
            vec![stop("L1", "a", 0, 116.30), stop("L1", "b", 1, 116.31)],
            vec![stop("L2", "c", 0, 116.40), stop("L2", "d", 1, 116.41)],
        ];
        let aggregation = aggregate(stops, vec![meta("L1", 2), meta("L2", 2)]).unwrap();
        let exporter = ShapefileExporter::new(&dir, false);
        let path = exporter
            .export_stops(&aggregation.stops, "test_stops")
            .unwrap();
        exporter
            .export_lines(&aggregation.lines, "test_lines")
            .unwrap();

        let read = read_stop_layer(&path).unwrap();
        assert_eq!(read.crs(), Crs::Epsg4326);
        assert_eq!(read.len(), 4);
        let keys = read
            .iter()
            .map(|s| (s.line_id.clone(), s.bus_stop_id.clone()))
            .collect_vec();
        assert_eq!(keys.iter().unique().count(), 4);
        assert_eq!(read.stops()[3].sequence_index, 1);
        assert!((read.stops()[2].position.lng() - 116.40).abs() < 1e-9);

        let lines = shapefile::read(dir.join("test_lines.shp")).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            std::fs::read_to_string(dir.join("test_lines.cpg")).unwrap(),
            "UTF-8"
        );
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = test_dir("overwrite");
        let aggregation =
            aggregate(vec![vec![stop("L1", "a", 0, 116.3)]], vec![meta("L1", 1)]).unwrap();
        let exporter = ShapefileExporter::new(&dir, false);
        exporter.export_stops(&aggregation.stops, "dup").unwrap();
        let second = exporter.export_stops(&aggregation.stops, "dup");
        assert!(matches!(second, Err(ExportError::DestinationExists(_))));

        let overwriting = ShapefileExporter::new(&dir, true);
        assert!(overwriting.export_stops(&aggregation.stops, "dup").is_ok());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
