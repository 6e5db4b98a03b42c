use busline_core::{aggregate::AggregationError, pipeline::PipelineError};

use crate::export::ExportError;

#[derive(thiserror::Error, Debug)]
pub enum BuslineAppError {
    #[error("{0}")]
    ConfigurationError(String),
    #[error("failure building HTTP client: {0}")]
    HttpClientError(String),
    #[error("failure reading line names: {0}")]
    LineSourceError(String),
    #[error("invalid user input: {0}")]
    InvalidUserInput(String),
    #[error(transparent)]
    PipelineError(#[from] PipelineError),
    #[error("failure aggregating line data: {0}")]
    AggregationError(#[from] AggregationError),
    #[error(transparent)]
    ExportError(#[from] ExportError),
    #[error("failure writing output: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
