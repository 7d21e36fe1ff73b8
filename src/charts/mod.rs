//! Chart builders over record sequences.
//!
//! Each chart groups the input with the dataset utilities, positions shapes
//! with the named accessors, and emits an [`crate::svg::SvgDocument`].

use std::fmt::Write;

mod columns;
mod lines;

pub use columns::ColumnChart;
pub use lines::LineChart;

/// Generate SVG path data connecting the given points in order:
/// `M x0,y0 L x1,y1 …`. Empty input yields an empty string.
#[must_use]
pub fn line_path(points: &[(f64, f64)]) -> String {
    let mut d = String::with_capacity(points.len() * 12);
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { " L" };
        let _ = write!(d, "{cmd} {x},{y}");
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_path() {
        let d = line_path(&[(0.0, 100.0), (100.0, 50.0), (200.0, 75.0)]);
        assert_eq!(d, "M 0,100 L 100,50 L 200,75");
    }

    #[test]
    fn test_line_path_single_point() {
        assert_eq!(line_path(&[(10.0, 20.0)]), "M 10,20");
    }

    #[test]
    fn test_line_path_empty() {
        assert_eq!(line_path(&[]), "");
    }
}
