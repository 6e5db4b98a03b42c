mod line_color;
mod preview_map;

pub use line_color::line_color;
pub use preview_map::{preview_collection, write_preview};
