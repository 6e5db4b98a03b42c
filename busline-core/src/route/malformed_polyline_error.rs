#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MalformedPolylineError {
    #[error("polyline is empty")]
    Empty,
    #[error("polyline segment {index} '{segment}' is not a 'lng,lat' pair of floats")]
    InvalidSegment { index: usize, segment: String },
}
