mod malformed_stop_error;
mod raw_stop;
mod stop_builder;
mod stop_record;

pub use malformed_stop_error::MalformedStopError;
pub use raw_stop::RawStop;
pub use stop_record::Stop;
pub use stop_builder::build_stops;
