use super::LineState;

/// receives a report after every line state transition. implementations
/// must return promptly; the pipeline waits on each call.
pub trait ProgressSink {
    /// # Arguments
    ///
    /// * `current_index` - 1-based position of the line in the request list
    /// * `total` - number of requested lines
    /// * `line_name` - requested line keyword
    /// * `state` - the state the line just entered
    fn report(&mut self, current_index: usize, total: usize, line_name: &str, state: LineState);
}

/// discards all progress reports
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _: usize, _: usize, _: &str, _: LineState) {}
}
