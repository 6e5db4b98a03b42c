use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// lifecycle of a requested line within a pipeline run:
/// `Pending -> Fetching -> {Succeeded, Skipped}`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LineState {
    Pending,
    Fetching,
    Succeeded,
    Skipped,
}

impl LineState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LineState::Succeeded | LineState::Skipped)
    }
}

impl Display for LineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineState::Pending => write!(f, "pending"),
            LineState::Fetching => write!(f, "fetching"),
            LineState::Succeeded => write!(f, "succeeded"),
            LineState::Skipped => write!(f, "skipped"),
        }
    }
}
