use super::{EmptyGeometryWarning, LineCollection, StopCollection};

/// result of merging a run's per-line tables
#[derive(Clone, Debug, PartialEq)]
pub struct Aggregation {
    pub stops: StopCollection,
    pub lines: LineCollection,
    pub warnings: Vec<EmptyGeometryWarning>,
}
