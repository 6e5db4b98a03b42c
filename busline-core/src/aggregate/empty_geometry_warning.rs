use std::fmt::Display;

/// a line whose metadata exists but whose stops yield fewer than two ordered
/// points, so no line geometry can be built. the line is left out of the
/// [`super::LineCollection`] while its stops remain in the [`super::StopCollection`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmptyGeometryWarning {
    pub line_id: String,
    pub line_name: String,
    pub point_count: usize,
}

impl Display for EmptyGeometryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line '{}' ({}) has {} stop point(s), at least 2 are required for a line geometry",
            self.line_id, self.line_name, self.point_count
        )
    }
}
