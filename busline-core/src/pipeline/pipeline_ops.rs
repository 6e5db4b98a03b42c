use std::collections::HashMap;

use super::{
    AssembledLine, FetchError, LineFetcher, LineState, PipelineError, PipelineOutput,
    ProgressSink, SkipReason, SkippedLine,
};
use crate::{
    line::{LineMetadata, RawLineResponse},
    route::{decode_polyline, RouteShape},
    stop::build_stops,
};

/// fetches and assembles every requested line in order, one at a time.
///
/// a line whose fetch, polyline decoding or stop building fails is skipped and
/// recorded with its reason; the run continues with the next line. the only
/// failure that stops the run is a fetcher returning [`FetchError::Aborted`].
///
/// # Arguments
///
/// * `city_name` - city passed through to the fetcher
/// * `lines` - requested line keywords, processed in this order
/// * `fetcher` - retrieves the raw line data
/// * `progress` - notified after every line state transition
///
/// # Returns
///
/// the accumulated per-line tables and skipped lines
pub fn run<F, P>(
    city_name: &str,
    lines: &[String],
    fetcher: &mut F,
    progress: &mut P,
) -> Result<PipelineOutput, PipelineError>
where
    F: LineFetcher + ?Sized,
    P: ProgressSink + ?Sized,
{
    let total = lines.len();
    log::info!("assembling {total} lines for city '{city_name}'");
    let mut output = PipelineOutput {
        city_name: city_name.to_string(),
        requested: total,
        ..Default::default()
    };
    // line id -> keyword that first produced it
    let mut fetched_ids: HashMap<String, String> = HashMap::new();

    for (idx, line_name) in lines.iter().enumerate() {
        let current = idx + 1;
        progress.report(current, total, line_name, LineState::Fetching);

        let outcome: Result<AssembledLine, SkipReason> = match fetcher.fetch(city_name, line_name)
        {
            Err(FetchError::Aborted(message)) => {
                log::error!("run aborted at line {current}/{total} '{line_name}': {message}");
                return Err(PipelineError::Aborted {
                    index: current,
                    line_name: line_name.clone(),
                    message,
                });
            }
            Err(e) => Err(SkipReason::from(e)),
            Ok(raw) => match fetched_ids.get(&raw.id) {
                Some(first_keyword) => Err(SkipReason::DuplicateLine {
                    line_id: raw.id.clone(),
                    first_keyword: first_keyword.clone(),
                }),
                None => assemble_line(&raw),
            },
        };

        match outcome {
            Ok(assembled) => {
                log::debug!(
                    "line {current}/{total} '{line_name}' -> id '{}' with {} stops",
                    assembled.metadata.line_id,
                    assembled.stops.len()
                );
                fetched_ids.insert(assembled.metadata.line_id.clone(), line_name.clone());
                output.metadata.push(assembled.metadata);
                output.stops.push(assembled.stops);
                output.shapes.0.push(assembled.shape);
                progress.report(current, total, line_name, LineState::Succeeded);
            }
            Err(reason) => {
                log::warn!("skipping line {current}/{total} '{line_name}': {reason}");
                output.skipped.push(SkippedLine {
                    line_name: line_name.clone(),
                    reason,
                });
                progress.report(current, total, line_name, LineState::Skipped);
            }
        }
    }

    log::info!(
        "assembled {} of {} lines ({} skipped)",
        output.succeeded(),
        total,
        output.skipped.len()
    );
    Ok(output)
}

/// turns one raw API response into its metadata, stop table and route shape.
pub fn assemble_line(raw: &RawLineResponse) -> Result<AssembledLine, SkipReason> {
    let path = decode_polyline(&raw.polyline)?;
    let stops = build_stops(&raw.id, &raw.busstops)?;
    let metadata = LineMetadata::from(raw);
    let shape = RouteShape::new(raw.id.clone(), raw.name.clone(), path);
    Ok(AssembledLine {
        metadata,
        stops,
        shape,
    })
}
