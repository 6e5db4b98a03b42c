use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// file format of the exported vector layers
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Shapefile,
    Geojson,
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Shapefile => write!(f, "shapefile"),
            ExportFormat::Geojson => write!(f, "geojson"),
        }
    }
}
