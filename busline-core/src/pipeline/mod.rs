mod assembled_line;
mod fetch_error;
mod line_fetcher;
mod line_state;
mod pipeline_error;
mod pipeline_ops;
mod pipeline_output;
mod progress_sink;
mod skip_reason;

pub use assembled_line::AssembledLine;
pub use fetch_error::FetchError;
pub use line_fetcher::LineFetcher;
pub use line_state::LineState;
pub use pipeline_error::PipelineError;
pub use pipeline_ops::{assemble_line, run};
pub use pipeline_output::{PipelineOutput, SkippedLine};
pub use progress_sink::{NoProgress, ProgressSink};
pub use skip_reason::SkipReason;
