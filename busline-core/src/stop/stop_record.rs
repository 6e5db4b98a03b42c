use geo::Point;
use serde::{Deserialize, Serialize};

use crate::geodesy::{Coordinate, Wgs84};

/// a bus stop on one line, positioned in WGS-84.
///
/// `(line_id, bus_stop_id)` is unique across a run and `sequence_index` is
/// unique within a line, defining traversal order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Stop {
    pub line_id: String,
    pub bus_stop_id: String,
    pub name: String,
    pub sequence_index: u32,
    pub position: Coordinate<Wgs84>,
}

impl Stop {
    pub fn point(&self) -> Point<f64> {
        Point::from(self.position)
    }
}
