#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("run aborted while processing line {index} '{line_name}': {message}")]
    Aborted {
        index: usize,
        line_name: String,
        message: String,
    },
}
