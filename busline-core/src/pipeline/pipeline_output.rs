use super::SkipReason;
use crate::{line::LineMetadata, route::RouteShapes, stop::Stop};

/// a requested line that was skipped, with the reason
#[derive(Clone, Debug, PartialEq)]
pub struct SkippedLine {
    pub line_name: String,
    pub reason: SkipReason,
}

/// accumulated intermediates of a pipeline run, ready for aggregation.
/// `metadata` and `stops` are append-only and in fetch order; `stops` holds
/// one table per successful line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PipelineOutput {
    pub city_name: String,
    pub requested: usize,
    pub metadata: Vec<LineMetadata>,
    pub stops: Vec<Vec<Stop>>,
    pub shapes: RouteShapes,
    pub skipped: Vec<SkippedLine>,
}

impl PipelineOutput {
    pub fn succeeded(&self) -> usize {
        self.metadata.len()
    }
}
