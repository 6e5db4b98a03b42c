mod busline_app;
mod busline_app_error;
pub mod harvest;

pub use busline_app::{BuslineApp, BuslineOperation};
pub use busline_app_error::BuslineAppError;
