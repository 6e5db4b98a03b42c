#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MalformedStopError {
    #[error("stop {index} ('{stop_id}') is missing a location")]
    MissingLocation { index: usize, stop_id: String },
    #[error("stop {index} ('{stop_id}') has malformed location '{location}'")]
    InvalidLocation {
        index: usize,
        stop_id: String,
        location: String,
    },
    #[error("stop {index} ('{stop_id}') is missing an id")]
    MissingId { index: usize, stop_id: String },
    #[error("stop {index} ('{stop_id}') has missing or invalid sequence {sequence:?}")]
    InvalidSequence {
        index: usize,
        stop_id: String,
        sequence: Option<String>,
    },
    #[error("sequence {sequence} appears more than once on line '{line_id}'")]
    DuplicateSequence { line_id: String, sequence: u32 },
    #[error("stop id '{stop_id}' appears more than once on line '{line_id}'")]
    DuplicateStopId { line_id: String, stop_id: String },
}
