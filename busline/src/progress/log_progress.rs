use busline_core::pipeline::{LineState, ProgressSink};

/// reports each terminal line state at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&mut self, current_index: usize, total: usize, line_name: &str, state: LineState) {
        if state.is_terminal() {
            log::info!("[{current_index}/{total}] {line_name}: {state}");
        } else {
            log::debug!("[{current_index}/{total}] {line_name}: {state}");
        }
    }
}
