pub mod lenient;
mod line_metadata;
mod raw_line_response;

pub use line_metadata::LineMetadata;
pub use raw_line_response::RawLineResponse;
