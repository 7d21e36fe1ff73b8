//! Multi-series line chart.
//!
//! One path per month (serie): the dataset is grouped by month, each group's
//! records are positioned by the category-x and y accessors, and the path is
//! stroked with the series color.

use crate::accessor;
use crate::dataset::max_of;
use crate::error::{Error, Result};
use crate::group::groups;
use crate::record::Record;
use crate::svg::SvgDocument;

use super::line_path;

/// Builder for a line chart with one line per month.
#[derive(Debug, Clone)]
pub struct LineChart {
    width: u32,
    height: u32,
    stroke_width: f64,
}

impl LineChart {
    /// Create a line chart with the given pixel dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            stroke_width: 2.0,
        }
    }

    /// Set the stroke width of each series line.
    #[must_use]
    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Render the records as an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for an empty sequence,
    /// [`Error::ZeroMaximum`] when every income is zero, and
    /// [`Error::InvalidDimensions`] for zero-sized dimensions.
    pub fn render(&self, records: &[Record]) -> Result<SvgDocument> {
        if records.is_empty() {
            return Err(Error::EmptyData);
        }
        let max_income = max_of(records, accessor::value).ok_or(Error::EmptyData)?;
        let chart_height = f64::from(self.height);

        let mut doc = SvgDocument::new(self.width, self.height)?;
        for serie in groups(records, accessor::serie) {
            let mut points = Vec::with_capacity(serie.members.len());
            for (i, record) in serie.members.iter().enumerate() {
                let px = accessor::category_x(record, i);
                let py = accessor::y(record, chart_height, max_income)?;
                points.push((px, py));
            }
            doc = doc.path(
                &line_path(&points),
                serie.key.color().as_css(),
                self.stroke_width,
            );
        }
        Ok(doc)
    }
}
