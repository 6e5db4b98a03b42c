/// structural violations found while merging per-line tables. any of these
/// aborts the run.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AggregationError {
    #[error("line '{line_id}' declares {stop_count} stops but no stop rows exist for it")]
    MissingStopRows { line_id: String, stop_count: usize },
    #[error("{count} stop rows reference line '{line_id}' which has no metadata")]
    OrphanStops { line_id: String, count: usize },
    #[error("line '{0}' has more than one metadata record")]
    DuplicateLineMetadata(String),
    #[error("stop '{bus_stop_id}' appears more than once on line '{line_id}'")]
    DuplicateStop {
        line_id: String,
        bus_stop_id: String,
    },
    #[error("sequence {sequence_index} appears more than once on line '{line_id}'")]
    DuplicateSequence {
        line_id: String,
        sequence_index: u32,
    },
}
