use geo::LineString;
use serde::{Deserialize, Serialize};

use crate::{geodesy::Crs, line::LineMetadata};

/// a line's metadata joined to the path through its stops in sequence order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineFeature {
    pub metadata: LineMetadata,
    pub geometry: LineString<f64>,
}

/// every line with a valid geometry, in first-successful-fetch order,
/// sharing one reference system tag
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineCollection {
    crs: Crs,
    lines: Vec<LineFeature>,
}

impl LineCollection {
    pub fn new(crs: Crs, lines: Vec<LineFeature>) -> Self {
        Self { crs, lines }
    }

    pub fn crs(&self) -> Crs {
        self.crs
    }

    pub fn lines(&self) -> &[LineFeature] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineFeature> {
        self.lines.iter()
    }
}
