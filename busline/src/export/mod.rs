mod destination_names;
mod export_error;
mod geojson_exporter;
mod layer_exporter;
mod layer_reader;
mod shapefile_exporter;

pub use destination_names::DestinationNames;
pub use export_error::ExportError;
pub use geojson_exporter::GeoJsonExporter;
pub use layer_exporter::{build_exporter, LayerExporter};
pub use layer_reader::read_stop_layer;
pub use shapefile_exporter::ShapefileExporter;
