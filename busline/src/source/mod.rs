mod csv_source;
mod line_name_source;
mod mapbar_source;

pub use csv_source::read_line_names_csv;
pub use line_name_source::LineNameSource;
pub use mapbar_source::{fetch_mapbar_line_names, parse_mapbar_line_names};
