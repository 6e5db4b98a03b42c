use std::fmt::Display;

use super::{Aggregation, EmptyGeometryWarning};
use crate::pipeline::{PipelineOutput, SkippedLine};

/// user-facing account of a run: requested vs succeeded vs skipped lines,
/// plus lines that could not be given a geometry
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    pub city_name: String,
    pub requested: usize,
    pub succeeded: usize,
    pub skipped: Vec<SkippedLine>,
    pub warnings: Vec<EmptyGeometryWarning>,
    pub stop_records: usize,
    pub line_records: usize,
}

impl RunSummary {
    pub fn new(output: &PipelineOutput, aggregation: &Aggregation) -> Self {
        Self {
            city_name: output.city_name.clone(),
            requested: output.requested,
            succeeded: output.succeeded(),
            skipped: output.skipped.clone(),
            warnings: aggregation.warnings.clone(),
            stop_records: aggregation.stops.len(),
            line_records: aggregation.lines.len(),
        }
    }
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{}: requested {} lines, {} succeeded, {} skipped",
            self.city_name,
            self.requested,
            self.succeeded,
            self.skipped.len()
        )?;
        writeln!(
            f,
            "  {} stop records, {} line records",
            self.stop_records, self.line_records
        )?;
        for skipped in self.skipped.iter() {
            writeln!(f, "  skipped '{}': {}", skipped.line_name, skipped.reason)?;
        }
        for warning in self.warnings.iter() {
            writeln!(f, "  warning: {warning}")?;
        }
        Ok(())
    }
}
