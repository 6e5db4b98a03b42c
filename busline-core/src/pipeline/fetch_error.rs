/// failure raised by a [`super::LineFetcher`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("API returned an error: {0}")]
    Api(String),
    #[error("no line found for keyword '{0}'")]
    NotFound(String),
    #[error("failure decoding API response: {0}")]
    Decode(String),
    /// raised to stop the whole run. unlike the other variants this is not
    /// converted into a skipped line.
    #[error("run aborted: {0}")]
    Aborted(String),
}
