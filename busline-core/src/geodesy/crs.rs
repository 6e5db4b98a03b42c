use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// ESRI WKT for GCS_WGS_1984, the content of a shapefile `.prj` for EPSG:4326
pub const WGS84_ESRI_WKT: &str = r#"GEOGCS["GCS_WGS_1984",DATUM["D_WGS_1984",SPHEROID["WGS_1984",6378137.0,298.257223563]],PRIMEM["Greenwich",0.0],UNIT["Degree",0.0174532925199433]]"#;

/// coordinate reference system tag carried by exported collections.
/// the only system produced by busline is WGS-84 (EPSG:4326).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crs {
    #[default]
    #[serde(rename = "EPSG:4326")]
    Epsg4326,
}

impl Crs {
    pub fn epsg_code(&self) -> u32 {
        match self {
            Crs::Epsg4326 => 4326,
        }
    }

    /// OGC URN form used by the GeoJSON `crs` member
    pub fn ogc_urn(&self) -> String {
        format!("urn:ogc:def:crs:EPSG::{}", self.epsg_code())
    }

    /// ESRI WKT form used for shapefile `.prj` files
    pub fn esri_wkt(&self) -> &'static str {
        match self {
            Crs::Epsg4326 => WGS84_ESRI_WKT,
        }
    }

    /// recognizes a CRS from a `.prj` WKT string
    pub fn from_esri_wkt(wkt: &str) -> Option<Crs> {
        let normalized = wkt.trim();
        if normalized.contains("GCS_WGS_1984") || normalized.contains("\"WGS 84\"") {
            Some(Crs::Epsg4326)
        } else {
            None
        }
    }
}

impl Display for Crs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EPSG:{}", self.epsg_code())
    }
}

impl FromStr for Crs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "EPSG:4326" | "urn:ogc:def:crs:EPSG::4326" | "urn:ogc:def:crs:OGC:1.3:CRS84" => {
                Ok(Crs::Epsg4326)
            }
            other => Err(format!("unsupported coordinate reference system '{other}'")),
        }
    }
}
