use geo::{BoundingRect, Coord, LineString, MultiLineString, Point, Rect};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::geodesy::{Coordinate, Wgs84};

/// the decoded polyline of one fetched line. this is the drawn route shape
/// reported by the API, which is distinct from the stop-derived line geometry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteShape {
    pub line_id: String,
    pub line_name: String,
    pub path: LineString<f64>,
}

impl RouteShape {
    pub fn new(line_id: String, line_name: String, points: Vec<Coordinate<Wgs84>>) -> Self {
        let path = points.into_iter().map(Coord::from).collect_vec();
        Self {
            line_id,
            line_name,
            path: LineString::new(path),
        }
    }

    /// arithmetic mean of the shape vertices, if there are any
    pub fn mean_point(&self) -> Option<Point<f64>> {
        let n = self.path.0.len();
        if n == 0 {
            return None;
        }
        let (sx, sy) = self
            .path
            .coords()
            .fold((0.0, 0.0), |(sx, sy), c| (sx + c.x, sy + c.y));
        Some(Point::new(sx / n as f64, sy / n as f64))
    }
}

/// all route shapes collected during a run, in fetch order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteShapes(pub Vec<RouteShape>);

impl RouteShapes {
    pub fn iter(&self) -> std::slice::Iter<'_, RouteShape> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// map center used for previews: the mean vertex of the first shape.
    pub fn center(&self) -> Option<Point<f64>> {
        self.0.first().and_then(|s| s.mean_point())
    }

    /// bounding rectangle over every shape
    pub fn bounds(&self) -> Option<Rect<f64>> {
        let mls = MultiLineString::new(self.0.iter().map(|s| s.path.clone()).collect_vec());
        mls.bounding_rect()
    }
}
