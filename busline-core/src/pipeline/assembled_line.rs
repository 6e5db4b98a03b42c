use crate::{line::LineMetadata, route::RouteShape, stop::Stop};

/// the per-line tables produced from one successful fetch
#[derive(Clone, Debug, PartialEq)]
pub struct AssembledLine {
    pub metadata: LineMetadata,
    pub stops: Vec<Stop>,
    pub shape: RouteShape,
}
