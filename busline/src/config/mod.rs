mod busline_configuration;
mod export_format;

pub use busline_configuration::{BuslineConfiguration, AMAP_KEY_ENV};
pub use export_format::ExportFormat;
