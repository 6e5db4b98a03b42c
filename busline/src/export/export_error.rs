#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("destination '{0}' already exists, enable overwrite to replace it")]
    DestinationExists(String),
    #[error("{0}")]
    OutputDirectoryError(String),
    #[error("failure writing shapefile: {0}")]
    ShapefileError(String),
    #[error("failure writing GeoJSON: {0}")]
    GeoJsonError(String),
    #[error("failure reading layer '{path}': {message}")]
    LayerReadError { path: String, message: String },
    #[error("layer '{0}' has no recognizable coordinate reference system")]
    UnknownCrs(String),
    #[error("failure writing file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
