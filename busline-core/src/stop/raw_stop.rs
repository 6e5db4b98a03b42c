use serde::{Deserialize, Serialize};

use crate::line::lenient;

/// a stop entry of a bus line API response. every field is optional here so
/// that a defective entry is reported by the stop builder instead of failing
/// the decoding of the whole line.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct RawStop {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub sequence: Option<String>,
    /// GCJ-02 `"lng,lat"`
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub location: Option<String>,
}

impl RawStop {
    pub fn new(id: &str, name: &str, sequence: u32, location: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            name: name.to_string(),
            sequence: Some(sequence.to_string()),
            location: Some(location.to_string()),
        }
    }
}
