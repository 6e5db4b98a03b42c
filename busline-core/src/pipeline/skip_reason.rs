use super::FetchError;
use crate::{route::MalformedPolylineError, stop::MalformedStopError};

/// why a requested line did not make it into the run output
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SkipReason {
    #[error("{0}")]
    Fetch(#[from] FetchError),
    #[error("malformed polyline: {0}")]
    Polyline(#[from] MalformedPolylineError),
    #[error("malformed stops: {0}")]
    Stops(#[from] MalformedStopError),
    #[error("line '{line_id}' was already fetched by keyword '{first_keyword}'")]
    DuplicateLine {
        line_id: String,
        first_keyword: String,
    },
}
