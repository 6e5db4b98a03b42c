use chrono::{DateTime, Local};

/// layer names for one run: `{city}_stops_{timestamp}` and
/// `{city}_lines_{timestamp}`. the timestamp has millisecond precision so
/// repeated runs for the same city do not collide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestinationNames {
    pub stops: String,
    pub lines: String,
    pub preview: String,
}

impl DestinationNames {
    pub fn new(city_name: &str, timestamp: &DateTime<Local>) -> Self {
        let city = sanitize(city_name);
        let ts = timestamp.format("%Y%m%d_%H%M%S%3f");
        Self {
            stops: format!("{city}_stops_{ts}"),
            lines: format!("{city}_lines_{ts}"),
            preview: format!("{city}_preview_{ts}"),
        }
    }

    pub fn now(city_name: &str) -> Self {
        Self::new(city_name, &Local::now())
    }
}

/// replaces characters that are unsafe in file names
fn sanitize(city_name: &str) -> String {
    city_name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect()
}
