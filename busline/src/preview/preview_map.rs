use std::path::{Path, PathBuf};

use busline_core::route::RouteShapes;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use super::line_color;
use crate::{
    export::ExportError,
    util::fs::{check_overwrite, create_dirs},
};

/// GeoJSON of the drawn route shapes, one styled feature per line. the
/// collection carries a `bbox` over every shape and a `center` member for
/// initialising a map view.
pub fn preview_collection(shapes: &RouteShapes) -> FeatureCollection {
    let features = shapes
        .iter()
        .map(|shape| {
            let mut properties = JsonObject::new();
            properties.insert(String::from("line_id"), json!(shape.line_id));
            properties.insert(String::from("name"), json!(shape.line_name));
            properties.insert(String::from("stroke"), json!(line_color(&shape.line_id)));
            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::from(&shape.path))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();
    let bbox = shapes.bounds().map(|r| {
        vec![r.min().x, r.min().y, r.max().x, r.max().y]
    });
    let foreign_members = shapes.center().map(|c| {
        let mut members = JsonObject::new();
        members.insert(String::from("center"), json!([c.x(), c.y()]));
        members
    });
    FeatureCollection {
        bbox,
        features,
        foreign_members,
    }
}

/// writes [`preview_collection`] to `<directory>/<name>.geojson`
pub fn write_preview(
    shapes: &RouteShapes,
    directory: &Path,
    name: &str,
    overwrite: bool,
) -> Result<PathBuf, ExportError> {
    create_dirs(directory)?;
    let path = directory.join(format!("{name}.geojson"));
    check_overwrite(&path, overwrite)?;
    let body = serde_json::to_string(&preview_collection(shapes))
        .map_err(|e| ExportError::GeoJsonError(e.to_string()))?;
    std::fs::write(&path, body)?;
    log::info!("wrote route preview of {} lines to {}", shapes.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod test {
    use super::preview_collection;
    use crate::preview::line_color;
    use busline_core::{
        geodesy::{Coordinate, Wgs84},
        route::{RouteShape, RouteShapes},
    };

    #[test]
    fn test_preview_styles_each_line() {
        let path = vec![
            Coordinate::<Wgs84>::new(116.0, 39.0),
            Coordinate::<Wgs84>::new(116.2, 39.2),
        ];
        let shapes = RouteShapes(vec![RouteShape::new(
            String::from("L1"),
            String::from("1路"),
            path,
        )]);
        let fc = preview_collection(&shapes);
        assert_eq!(fc.features.len(), 1);
        let stroke = fc.features[0].property("stroke").and_then(|v| v.as_str());
        assert_eq!(stroke, Some(line_color("L1").as_str()));
        assert_eq!(fc.bbox, Some(vec![116.0, 39.0, 116.2, 39.2]));
        assert!(fc.foreign_members.unwrap().contains_key("center"));
    }

    #[test]
    fn test_empty_preview() {
        let fc = preview_collection(&RouteShapes::default());
        assert!(fc.features.is_empty());
        assert!(fc.bbox.is_none());
    }
}
