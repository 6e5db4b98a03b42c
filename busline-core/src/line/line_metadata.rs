use serde::{Deserialize, Serialize};

use super::RawLineResponse;

/// descriptive attributes of one successfully fetched bus line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineMetadata {
    pub line_id: String,
    #[serde(rename = "type")]
    pub line_type: String,
    pub name: String,
    pub start_stop: String,
    pub end_stop: String,
    pub start_time: String,
    pub end_time: String,
    /// route length as reported by the API, None if missing or not numeric
    pub distance: Option<f64>,
    pub basic_price: String,
    pub total_price: String,
    /// number of stops listed by the API for this line
    pub stop_count: usize,
}

impl From<&RawLineResponse> for LineMetadata {
    fn from(raw: &RawLineResponse) -> Self {
        let distance = raw
            .distance
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite());
        LineMetadata {
            line_id: raw.id.clone(),
            line_type: raw.line_type.clone(),
            name: raw.name.clone(),
            start_stop: raw.start_stop.clone(),
            end_stop: raw.end_stop.clone(),
            start_time: raw.start_time.clone(),
            end_time: raw.end_time.clone(),
            distance,
            basic_price: raw.basic_price.clone(),
            total_price: raw.total_price.clone(),
            stop_count: raw.busstops.len(),
        }
    }
}
