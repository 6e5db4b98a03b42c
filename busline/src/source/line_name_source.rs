use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::app::BuslineAppError;

/// where the list of line keywords to harvest comes from
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum LineNameSource {
    /// the first column of a header-less CSV file
    Csv { file: String },
    /// the line index page of bus.mapbar.com for a city, addressed by its
    /// pinyin slug (for example `beijing`)
    Mapbar {
        city_slug: String,
        base_url: String,
        timeout_secs: u64,
    },
}

impl LineNameSource {
    /// reads the line names, dropping blanks and repeated names while keeping
    /// the first occurrence order.
    pub fn build(&self) -> Result<Vec<String>, BuslineAppError> {
        let names = match self {
            LineNameSource::Csv { file } => super::read_line_names_csv(file)?,
            LineNameSource::Mapbar {
                city_slug,
                base_url,
                timeout_secs,
            } => super::fetch_mapbar_line_names(
                base_url,
                city_slug,
                Duration::from_secs(*timeout_secs),
            )?,
        };
        Ok(clean_names(names))
    }
}

fn clean_names(names: Vec<String>) -> Vec<String> {
    names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unique()
        .collect_vec()
}
