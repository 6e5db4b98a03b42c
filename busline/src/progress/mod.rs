mod kdam_progress;
mod log_progress;

pub use kdam_progress::KdamProgress;
pub use log_progress::LogProgress;
