use regex::Regex;
use reqwest::blocking::Client;
use std::time::Duration;

use crate::app::BuslineAppError;

/// downloads the mapbar line index page of a city and extracts the line names.
///
/// # Arguments
///
/// * `base_url` - mapbar host, usually `https://bus.mapbar.com`
/// * `city_slug` - pinyin of the city name, for example `beijing`
/// * `timeout` - request timeout
pub fn fetch_mapbar_line_names(
    base_url: &str,
    city_slug: &str,
    timeout: Duration,
) -> Result<Vec<String>, BuslineAppError> {
    let url = format!("{}/{city_slug}/xianlu/", base_url.trim_end_matches('/'));
    log::info!("reading line names from {url}");
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| BuslineAppError::HttpClientError(e.to_string()))?;
    let html = client
        .get(&url)
        .send()
        .and_then(|r| r.error_for_status())
        .and_then(|r| r.text())
        .map_err(|e| BuslineAppError::LineSourceError(format!("GET request to {url} failed: {e}")))?;
    parse_mapbar_line_names(&html)
}

/// collects the text of every `<a target="_blank">` found inside a `<dd>` element.
pub fn parse_mapbar_line_names(html: &str) -> Result<Vec<String>, BuslineAppError> {
    let dd = Regex::new(r"(?is)<dd\b[^>]*>(.*?)</dd>").map_err(regex_error)?;
    let anchor = Regex::new(r#"(?is)<a\b([^>]*)>(.*?)</a>"#).map_err(regex_error)?;
    let blank_target =
        Regex::new(r#"(?i)target\s*=\s*["']?_blank["']?"#).map_err(regex_error)?;
    let tag = Regex::new(r"<[^>]+>").map_err(regex_error)?;

    let mut names = vec![];
    for dd_match in dd.captures_iter(html) {
        for a in anchor.captures_iter(&dd_match[1]) {
            if !blank_target.is_match(&a[1]) {
                continue;
            }
            let text = tag.replace_all(&a[2], "");
            let text = decode_entities(text.trim());
            if !text.is_empty() {
                names.push(text);
            }
        }
    }
    Ok(names)
}

fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}

fn regex_error(e: regex::Error) -> BuslineAppError {
    BuslineAppError::LineSourceError(format!("invalid pattern: {e}"))
}
