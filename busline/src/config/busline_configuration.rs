use serde::{Deserialize, Serialize};

use super::ExportFormat;
use crate::app::BuslineAppError;

/// environment variable consulted for the AMap web service key
pub const AMAP_KEY_ENV: &str = "AMAP_KEY";

/// defines behaviors for a busline harvest run
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct BuslineConfiguration {
    /// AMap web service key. may also be provided via the CLI or `AMAP_KEY`.
    pub amap_key: Option<String>,
    pub amap_base_url: String,
    pub mapbar_base_url: String,
    pub request_timeout_secs: u64,
    pub output_directory: String,
    pub export_format: ExportFormat,
    /// also write a GeoJSON preview of the drawn route shapes
    pub write_preview: bool,
    pub overwrite: bool,
}

impl Default for BuslineConfiguration {
    fn default() -> Self {
        Self {
            amap_key: None,
            amap_base_url: String::from("https://restapi.amap.com"),
            mapbar_base_url: String::from("https://bus.mapbar.com"),
            request_timeout_secs: 10,
            output_directory: String::from("."),
            export_format: ExportFormat::Shapefile,
            write_preview: true,
            overwrite: false,
        }
    }
}

impl BuslineConfiguration {
    /// the AMap key from, in order of precedence, the CLI, this configuration,
    /// or the `AMAP_KEY` environment variable.
    pub fn resolve_amap_key(&self, cli_key: Option<&String>) -> Result<String, BuslineAppError> {
        cli_key
            .cloned()
            .or_else(|| self.amap_key.clone())
            .or_else(|| std::env::var(AMAP_KEY_ENV).ok())
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                BuslineAppError::ConfigurationError(format!(
                    "no AMap key provided, use --amap-key, the configuration file, or {AMAP_KEY_ENV}"
                ))
            })
    }
}

impl TryFrom<&String> for BuslineConfiguration {
    type Error = BuslineAppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                BuslineAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                BuslineAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                BuslineAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                BuslineAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(BuslineAppError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}

#[cfg(test)]
mod test {
    use super::BuslineConfiguration;
    use crate::config::ExportFormat;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let conf: BuslineConfiguration = toml::from_str(
            r#"
            export_format = "geojson"
            request_timeout_secs = 3
            "#,
        )
        .unwrap();
        assert_eq!(conf.export_format, ExportFormat::Geojson);
        assert_eq!(conf.request_timeout_secs, 3);
        assert_eq!(conf.amap_base_url, "https://restapi.amap.com");
        assert!(conf.write_preview);
    }

    #[test]
    fn test_json_file() {
        let dir = std::env::temp_dir().join(format!("busline-conf-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("conf.json");
        std::fs::write(&file, r#"{"amap_key": "abc", "overwrite": true}"#).unwrap();
        let path = file.to_string_lossy().to_string();
        let conf = BuslineConfiguration::try_from(&path).unwrap();
        assert_eq!(conf.amap_key.as_deref(), Some("abc"));
        assert!(conf.overwrite);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_unsupported_extension() {
        let path = String::from("conf.yaml");
        assert!(BuslineConfiguration::try_from(&path).is_err());
    }

    #[test]
    fn test_cli_key_takes_precedence() {
        let conf = BuslineConfiguration {
            amap_key: Some(String::from("from-file")),
            ..Default::default()
        };
        let cli = String::from("from-cli");
        assert_eq!(conf.resolve_amap_key(Some(&cli)).unwrap(), "from-cli");
        assert_eq!(conf.resolve_amap_key(None).unwrap(), "from-file");
    }
}
