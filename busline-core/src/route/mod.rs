mod malformed_polyline_error;
mod polyline;
mod route_shape;

pub use malformed_polyline_error::MalformedPolylineError;
pub use polyline::decode_polyline;
pub use route_shape::{RouteShape, RouteShapes};
