//! busline application: adapters around [`busline_core`] for fetching AMap bus
//! lines, reading line name lists, reporting progress and writing vector layers.
pub mod app;
pub mod config;
pub mod export;
pub mod fetch;
pub mod preview;
pub mod progress;
pub mod source;
pub mod util;
