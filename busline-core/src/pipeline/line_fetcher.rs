use super::FetchError;
use crate::line::RawLineResponse;

/// retrieves the raw description of one bus line. timeouts are the
/// responsibility of the implementation.
pub trait LineFetcher {
    /// look up `line_keyword` in `city_name`
    fn fetch(
        &mut self,
        city_name: &str,
        line_keyword: &str,
    ) -> Result<RawLineResponse, FetchError>;
}

impl<F> LineFetcher for F
where
    F: FnMut(&str, &str) -> Result<RawLineResponse, FetchError>,
{
    fn fetch(
        &mut self,
        city_name: &str,
        line_keyword: &str,
    ) -> Result<RawLineResponse, FetchError> {
        self(city_name, line_keyword)
    }
}
