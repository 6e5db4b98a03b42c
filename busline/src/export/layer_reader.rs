use std::path::Path;

use busline_core::{
    aggregate::StopCollection,
    geodesy::{Coordinate, Crs, Wgs84},
    stop::Stop,
};
use geojson::{FeatureCollection, GeoJson};
use shapefile::dbase::{FieldValue, Record};

use super::{geojson_exporter, shapefile_exporter as shp, ExportError};

/// reads a stop layer written by one of the exporters back into a
/// [`StopCollection`], choosing the format from the file extension.
pub fn read_stop_layer(path: &Path) -> Result<StopCollection, ExportError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("shp") => read_stop_shapefile(path),
        Some("geojson") | Some("json") => read_stop_geojson(path),
        _ => Err(read_error(path, String::from("unsupported layer file type"))),
    }
}

fn read_stop_shapefile(path: &Path) -> Result<StopCollection, ExportError> {
    let prj_path = path.with_extension("prj");
    let prj = std::fs::read_to_string(&prj_path)
        .map_err(|e| read_error(&prj_path, e.to_string()))?;
    let crs = Crs::from_esri_wkt(&prj)
        .ok_or_else(|| ExportError::UnknownCrs(path.display().to_string()))?;

    let rows = shapefile::read(path).map_err(|e| read_error(path, e.to_string()))?;
    let mut stops = Vec::with_capacity(rows.len());
    for (idx, (shape, record)) in rows.into_iter().enumerate() {
        let position = match shape {
            shapefile::Shape::Point(p) => Coordinate::<Wgs84>::new(p.x, p.y),
            other => {
                return Err(read_error(
                    path,
                    format!("unexpected shape type {} at row {idx}", other.shapetype()),
                ))
            }
        };
        stops.push(Stop {
            line_id: record_string(path, &record, shp::STOP_LINE_ID)?,
            bus_stop_id: record_string(path, &record, shp::STOP_ID)?,
            name: record_string(path, &record, shp::STOP_NAME)?,
            sequence_index: record_sequence(path, &record)?,
            position,
        });
    }
    Ok(StopCollection::new(crs, stops))
}

fn record_string(path: &Path, record: &Record, field: &str) -> Result<String, ExportError> {
    match record.get(field) {
        Some(FieldValue::Character(Some(s))) => Ok(s.trim().to_string()),
        Some(FieldValue::Character(None)) => Ok(String::new()),
        Some(other) => Err(read_error(
            path,
            format!("field '{field}' has unexpected type '{}'", other.field_type()),
        )),
        None => Err(read_error(path, format!("field '{field}' missing"))),
    }
}

fn record_sequence(path: &Path, record: &Record) -> Result<u32, ExportError> {
    match record.get(shp::STOP_SEQUENCE) {
        Some(FieldValue::Numeric(Some(n))) if *n >= 0.0 => Ok(*n as u32),
        _ => Err(read_error(
            path,
            format!("field '{}' missing or invalid", shp::STOP_SEQUENCE),
        )),
    }
}

fn read_stop_geojson(path: &Path) -> Result<StopCollection, ExportError> {
    let text = std::fs::read_to_string(path).map_err(|e| read_error(path, e.to_string()))?;
    let collection = match text.parse::<GeoJson>() {
        Ok(GeoJson::FeatureCollection(fc)) => fc,
        Ok(_) => return Err(read_error(path, String::from("not a FeatureCollection"))),
        Err(e) => return Err(read_error(path, e.to_string())),
    };
    let crs = geojson_crs(&collection)
        .ok_or_else(|| ExportError::UnknownCrs(path.display().to_string()))?;

    let mut stops = Vec::with_capacity(collection.features.len());
    for (idx, feature) in collection.features.iter().enumerate() {
        let position = match feature.geometry.as_ref().map(|g| &g.value) {
            Some(geojson::Value::Point(pos)) if pos.len() >= 2 => {
                Coordinate::<Wgs84>::new(pos[0], pos[1])
            }
            _ => return Err(read_error(path, format!("feature {idx} is not a point"))),
        };
        let text_property = |name: &str| -> Result<String, ExportError> {
            feature
                .property(name)
                .and_then(|v| v.as_str())
                .map(String::from)
                .ok_or_else(|| read_error(path, format!("feature {idx} missing '{name}'")))
        };
        let sequence_index = feature
            .property(geojson_exporter::STOP_SEQUENCE)
            .and_then(|v| v.as_u64())
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| read_error(path, format!("feature {idx} missing sequence")))?;
        stops.push(Stop {
            line_id: text_property(geojson_exporter::STOP_LINE_ID)?,
            bus_stop_id: text_property(geojson_exporter::STOP_ID)?,
            name: text_property(geojson_exporter::STOP_NAME)?,
            sequence_index,
            position,
        });
    }
    Ok(StopCollection::new(crs, stops))
}

/// the named crs member of a feature collection, if present
fn geojson_crs(collection: &FeatureCollection) -> Option<Crs> {
    collection
        .foreign_members
        .as_ref()?
        .get("crs")?
        .get("properties")?
        .get("name")?
        .as_str()?
        .parse()
        .ok()
}

fn read_error(path: &Path, message: String) -> ExportError {
    ExportError::LayerReadError {
        path: path.display().to_string(),
        message,
    }
}
