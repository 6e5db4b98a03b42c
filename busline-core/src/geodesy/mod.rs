mod coordinate;
mod crs;
mod transform;

pub use coordinate::{Coordinate, Gcj02, ReferenceSystem, Wgs84};
pub use crs::Crs;
pub use transform::{in_correction_domain, to_wgs84};
