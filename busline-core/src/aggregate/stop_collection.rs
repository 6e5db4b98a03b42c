use serde::{Deserialize, Serialize};

use crate::{geodesy::Crs, stop::Stop};

/// every stop of a run, ordered by line fetch order then `sequence_index`,
/// sharing one reference system tag
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StopCollection {
    crs: Crs,
    stops: Vec<Stop>,
}

impl StopCollection {
    pub fn new(crs: Crs, stops: Vec<Stop>) -> Self {
        Self { crs, stops }
    }

    pub fn crs(&self) -> Crs {
        self.crs
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stop> {
        self.stops.iter()
    }
}
