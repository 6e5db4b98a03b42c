use std::time::Duration;

use busline_core::{
    line::RawLineResponse,
    pipeline::{FetchError, LineFetcher},
};
use reqwest::blocking::Client;

use super::parse_amap_response;
use crate::app::BuslineAppError;

/// looks up bus lines through the AMap web service `v3/bus/linename` endpoint
#[derive(Debug)]
pub struct AmapLineFetcher {
    client: Client,
    key: String,
    base_url: String,
}

impl AmapLineFetcher {
    pub fn new(key: String, base_url: &str, timeout: Duration) -> Result<Self, BuslineAppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BuslineAppError::HttpClientError(e.to_string()))?;
        Ok(Self {
            client,
            key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v3/bus/linename", self.base_url)
    }
}

impl LineFetcher for AmapLineFetcher {
    fn fetch(
        &mut self,
        city_name: &str,
        line_keyword: &str,
    ) -> Result<RawLineResponse, FetchError> {
        let params = [
            ("extensions", "all"),
            ("key", self.key.as_str()),
            ("output", "json"),
            ("city", city_name),
            ("offset", "1"),
            ("keywords", line_keyword),
        ];
        log::debug!("GET {} city={city_name} keywords={line_keyword}", self.endpoint());
        let body = self
            .client
            .get(self.endpoint())
            .query(&params)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        parse_amap_response(&body, line_keyword)
    }
}
