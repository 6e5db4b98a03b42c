mod amap_line_fetcher;
mod amap_response;

pub use amap_line_fetcher::AmapLineFetcher;
pub use amap_response::{parse_amap_response, AmapBusLineResponse};
