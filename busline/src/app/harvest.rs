use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use busline_core::{
    aggregate::{aggregate, RunSummary},
    pipeline::{self, LineFetcher, ProgressSink},
};

use super::BuslineAppError;
use crate::{
    config::BuslineConfiguration,
    export::{build_exporter, DestinationNames},
    fetch::AmapLineFetcher,
    preview::write_preview,
    progress::{KdamProgress, LogProgress},
    source::LineNameSource,
};

/// command line values for a harvest run, resolved against the configuration
#[derive(Clone, Debug)]
pub struct HarvestArguments {
    pub city_name: String,
    pub lines_file: Option<String>,
    pub mapbar_slug: Option<String>,
    pub amap_key: String,
    pub output_directory: PathBuf,
    pub progress_bar: bool,
}

impl HarvestArguments {
    fn line_name_source(
        &self,
        config: &BuslineConfiguration,
    ) -> Result<LineNameSource, BuslineAppError> {
        match (&self.lines_file, &self.mapbar_slug) {
            (Some(file), None) => Ok(LineNameSource::Csv { file: file.clone() }),
            (None, Some(slug)) => Ok(LineNameSource::Mapbar {
                city_slug: slug.clone(),
                base_url: config.mapbar_base_url.clone(),
                timeout_secs: config.request_timeout_secs,
            }),
            _ => Err(BuslineAppError::InvalidUserInput(String::from(
                "exactly one of a lines file or a mapbar city slug must be provided",
            ))),
        }
    }
}

/// runs a complete harvest for one city: reads the line names, fetches and
/// assembles each line from AMap, aggregates the results and writes the layers.
///
/// # Returns
///
/// the summary of requested, succeeded and skipped lines
pub fn run_harvest(
    args: &HarvestArguments,
    config: &BuslineConfiguration,
) -> Result<RunSummary, BuslineAppError> {
    let start = std::time::Instant::now();
    let source = args.line_name_source(config)?;
    let lines = source.build()?;
    log::info!("found {} line names for '{}'", lines.len(), args.city_name);
    if lines.is_empty() {
        log::warn!("no line names found, layers will be empty");
    }

    let timeout = Duration::from_secs(config.request_timeout_secs);
    let mut fetcher = AmapLineFetcher::new(args.amap_key.clone(), &config.amap_base_url, timeout)?;
    let mut progress: Box<dyn ProgressSink> = if args.progress_bar {
        let bar = KdamProgress::new(&args.city_name, lines.len())
            .map_err(BuslineAppError::InvalidUserInput)?;
        Box::new(bar)
    } else {
        Box::new(LogProgress)
    };
    let names = DestinationNames::now(&args.city_name);
    let summary = harvest_lines(
        &args.city_name,
        &lines,
        &mut fetcher,
        progress.as_mut(),
        &args.output_directory,
        &names,
        config,
    );
    drop(progress);
    if args.progress_bar {
        eprintln!();
    }
    log::info!(
        "finished '{}' in {:.2} seconds",
        args.city_name,
        start.elapsed().as_secs_f64()
    );
    summary
}

/// assembles `lines` with `fetcher`, aggregates them and writes the stop and
/// line layers (and optionally the route preview) under `output_directory`.
pub fn harvest_lines<F, P>(
    city_name: &str,
    lines: &[String],
    fetcher: &mut F,
    progress: &mut P,
    output_directory: &Path,
    names: &DestinationNames,
    config: &BuslineConfiguration,
) -> Result<RunSummary, BuslineAppError>
where
    F: LineFetcher + ?Sized,
    P: ProgressSink + ?Sized,
{
    let output = pipeline::run(city_name, lines, fetcher, progress)?;
    let aggregation = aggregate(output.stops.clone(), output.metadata.clone())?;

    let exporter = build_exporter(config.export_format, output_directory, config.overwrite);
    let stops_path = exporter.export_stops(&aggregation.stops, &names.stops)?;
    let lines_path = exporter.export_lines(&aggregation.lines, &names.lines)?;
    log::info!(
        "layers written to {} and {}",
        stops_path.display(),
        lines_path.display()
    );
    if config.write_preview && !output.shapes.is_empty() {
        write_preview(
            &output.shapes,
            output_directory,
            &names.preview,
            config.overwrite,
        )?;
    }

    Ok(RunSummary::new(&output, &aggregation))
}

#[cfg(test)]
mod test {
    use super::harvest_lines;
    use crate::{
        app::BuslineAppError,
        config::{BuslineConfiguration, ExportFormat},
        export::{read_stop_layer, DestinationNames},
    };
    use busline_core::{
        line::RawLineResponse,
        pipeline::{FetchError, NoProgress},
        stop::RawStop,
    };
    use chrono::{Local, TimeZone};

    fn raw_line(keyword: &str) -> RawLineResponse {
        RawLineResponse {
            id: format!("id-{keyword}"),
            name: keyword.to_string(),
            polyline: String::from("116.397,39.908;116.398,39.909"),
            busstops: vec![
                RawStop::new(&format!("{keyword}-a"), "a", 1, "116.397,39.908"),
                RawStop::new(&format!("{keyword}-b"), "b", 2, "116.398,39.909"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_harvest_writes_layers_and_skips_failures() {
        let dir = std::env::temp_dir().join(format!("busline-harvest-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let config = BuslineConfiguration {
            export_format: ExportFormat::Geojson,
            ..Default::default()
        };
        let ts = Local.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let names = DestinationNames::new("北京", &ts);
        let lines = vec![String::from("1路"), String::from("2路"), String::from("3路")];
        let mut fetcher = |_: &str, line: &str| match line {
            "2路" => Err(FetchError::NotFound(line.to_string())),
            other => Ok(raw_line(other)),
        };

        let summary = harvest_lines(
            "北京",
            &lines,
            &mut fetcher,
            &mut NoProgress,
            &dir,
            &names,
            &config,
        )
        .unwrap();
        assert_eq!(summary.requested, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.line_records, 2);

        let stops = read_stop_layer(&dir.join(format!("{}.geojson", names.stops))).unwrap();
        assert_eq!(stops.len(), 4);
        assert!(dir.join(format!("{}.geojson", names.lines)).exists());
        assert!(dir.join(format!("{}.geojson", names.preview)).exists());

        // same destination names again without overwrite enabled
        let again = harvest_lines(
            "北京",
            &lines,
            &mut fetcher,
            &mut NoProgress,
            &dir,
            &names,
            &config,
        );
        assert!(matches!(again, Err(BuslineAppError::ExportError(_))));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
