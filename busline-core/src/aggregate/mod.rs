mod aggregation;
mod aggregation_error;
mod aggregator;
mod empty_geometry_warning;
mod line_collection;
mod run_summary;
mod stop_collection;

pub use aggregation::Aggregation;
pub use aggregation_error::AggregationError;
pub use aggregator::aggregate;
pub use empty_geometry_warning::EmptyGeometryWarning;
pub use line_collection::{LineCollection, LineFeature};
pub use run_summary::RunSummary;
pub use stop_collection::StopCollection;
