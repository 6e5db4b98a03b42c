use busline_core::{
    line::{lenient, RawLineResponse},
    pipeline::FetchError,
};
use serde::Deserialize;

/// envelope of the AMap `v3/bus/linename` response
#[derive(Deserialize, Debug)]
pub struct AmapBusLineResponse {
    #[serde(default, deserialize_with = "lenient::string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub info: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub infocode: String,
    #[serde(default)]
    pub buslines: Vec<RawLineResponse>,
}

/// decodes an AMap line lookup body into the first matching line.
///
/// # Arguments
///
/// * `body` - JSON response text
/// * `keyword` - the line keyword that was searched, for error reporting
pub fn parse_amap_response(body: &str, keyword: &str) -> Result<RawLineResponse, FetchError> {
    let response: AmapBusLineResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    if response.status != "1" {
        return Err(FetchError::Api(format!(
            "{} (infocode {})",
            response.info, response.infocode
        )));
    }
    response
        .buslines
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::NotFound(keyword.to_string()))
}

#[cfg(test)]
mod test {
    use super::parse_amap_response;
    use busline_core::pipeline::FetchError;

    #[test]
    fn test_first_busline_is_taken() {
        let body = r#"{
            "status": "1", "info": "OK", "infocode": "10000", "count": "2",
            "buslines": [
                {"id": "A", "name": "1路", "polyline": "116.397,39.908;116.398,39.909", "busstops": []},
                {"id": "B", "name": "1路(返程)", "polyline": "", "busstops": []}
            ]
        }"#;
        let line = parse_amap_response(body, "1路").unwrap();
        assert_eq!(line.id, "A");
    }

    #[test]
    fn test_api_error() {
        let body = r#"{"status": "0", "info": "INVALID_USER_KEY", "infocode": "10001"}"#;
        assert_eq!(
            parse_amap_response(body, "1路"),
            Err(FetchError::Api(String::from(
                "INVALID_USER_KEY (infocode 10001)"
            )))
        );
    }

    #[test]
    fn test_no_lines() {
        let body = r#"{"status": "1", "info": "OK", "infocode": "10000", "count": "0", "buslines": []}"#;
        assert_eq!(
            parse_amap_response(body, "999路"),
            Err(FetchError::NotFound(String::from("999路")))
        );
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            parse_amap_response("<html>", "1路"),
            Err(FetchError::Decode(_))
        ));
    }
}
