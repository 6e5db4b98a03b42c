use std::path::{Path, PathBuf};

use busline_core::aggregate::{LineCollection, StopCollection};

use super::{ExportError, GeoJsonExporter, ShapefileExporter};
use crate::config::ExportFormat;

/// persists aggregated collections as named vector layers. the coordinate
/// reference system written is the one tagged on the collection.
pub trait LayerExporter {
    /// writes the stop layer, returning the path of the main file written
    fn export_stops(
        &self,
        stops: &StopCollection,
        destination: &str,
    ) -> Result<PathBuf, ExportError>;

    /// writes the line layer, returning the path of the main file written
    fn export_lines(
        &self,
        lines: &LineCollection,
        destination: &str,
    ) -> Result<PathBuf, ExportError>;
}

/// creates the exporter for a configured format, writing to `output_directory`
pub fn build_exporter(
    format: ExportFormat,
    output_directory: &Path,
    overwrite: bool,
) -> Box<dyn LayerExporter> {
    match format {
        ExportFormat::Shapefile => Box::new(ShapefileExporter::new(output_directory, overwrite)),
        ExportFormat::Geojson => Box::new(GeoJsonExporter::new(output_directory, overwrite)),
    }
}
