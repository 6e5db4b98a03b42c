use std::path::PathBuf;

use busline_core::{
    geodesy::{Coordinate, Gcj02},
    route::decode_polyline,
};
use clap::{Parser, Subcommand};
use geo::LineString;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use wkt::ToWkt;

use super::{harvest::HarvestArguments, BuslineAppError};
use crate::config::{BuslineConfiguration, ExportFormat};

/// command line tool for harvesting city bus lines and stops into GIS layers
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct BuslineApp {
    /// select the busline operation to run
    #[command(subcommand)]
    pub op: BuslineOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum BuslineOperation {
    /// fetches every requested line of a city from AMap and writes the stop
    /// and line layers.
    Run {
        /// city name as understood by AMap, for example 北京
        #[arg(short, long)]
        city: String,
        /// header-less CSV whose first column lists the line names
        #[arg(long, conflicts_with = "mapbar_slug", required_unless_present = "mapbar_slug")]
        lines_file: Option<String>,
        /// pinyin slug of the city on bus.mapbar.com, for example beijing
        #[arg(long)]
        mapbar_slug: Option<String>,
        /// AMap web service key, overrides the configuration and AMAP_KEY
        #[arg(long)]
        amap_key: Option<String>,
        /// optional TOML or JSON configuration file
        #[arg(long)]
        configuration_file: Option<String>,
        /// output directory, overrides the configuration
        #[arg(short, long)]
        output_directory: Option<String>,
        /// output layer format, overrides the configuration
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,
        /// log each line instead of drawing a progress bar
        #[arg(long, default_value_t = false)]
        no_progress_bar: bool,
    },
    /// converts a single GCJ-02 coordinate to WGS-84
    Convert {
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
    },
    /// decodes an AMap polyline string into a WKT LineString in WGS-84
    Decode {
        #[arg(short, long)]
        polyline: String,
    },
}

impl BuslineOperation {
    pub fn run(&self) -> Result<(), BuslineAppError> {
        match self {
            BuslineOperation::Run {
                city,
                lines_file,
                mapbar_slug,
                amap_key,
                configuration_file,
                output_directory,
                format,
                no_progress_bar,
            } => {
                let mut config = match configuration_file {
                    Some(f) => BuslineConfiguration::try_from(f)?,
                    None => BuslineConfiguration::default(),
                };
                if let Some(dir) = output_directory {
                    config.output_directory = dir.clone();
                }
                if let Some(fmt) = format {
                    config.export_format = *fmt;
                }
                let amap_key = config.resolve_amap_key(amap_key.as_ref())?;
                let args = HarvestArguments {
                    city_name: city.clone(),
                    lines_file: lines_file.clone(),
                    mapbar_slug: mapbar_slug.clone(),
                    amap_key,
                    output_directory: PathBuf::from(&config.output_directory),
                    progress_bar: !no_progress_bar,
                };
                let summary = super::harvest::run_harvest(&args, &config)?;
                println!("{summary}");
                Ok(())
            }
            BuslineOperation::Convert { lng, lat } => {
                let wgs = Coordinate::<Gcj02>::new(*lng, *lat).to_wgs84();
                println!("{wgs}");
                Ok(())
            }
            BuslineOperation::Decode { polyline } => {
                let points = decode_polyline(polyline).map_err(|e| {
                    BuslineAppError::InvalidUserInput(format!("failure decoding polyline: {e}"))
                })?;
                let linestring = LineString::new(points.into_iter().map(geo::Coord::from).collect_vec());
                println!("{}", linestring.to_wkt());
                Ok(())
            }
        }
    }
}
