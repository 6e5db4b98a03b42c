use serde::{Deserialize, Serialize};

use super::lenient;
use crate::stop::RawStop;

/// a single bus line as returned by the line lookup API (AMap `buslines[0]`).
/// coordinates in `polyline` and in each stop `location` are GCJ-02.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct RawLineResponse {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub line_type: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub start_stop: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub end_stop: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub start_time: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub end_time: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub distance: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub basic_price: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub total_price: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub polyline: String,
    #[serde(default)]
    pub busstops: Vec<RawStop>,
}
