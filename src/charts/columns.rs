//! Grouped column chart.
//!
//! The dataset is grouped by customer (category); each group becomes a
//! translated `<g>` element holding one column per month record. Column
//! geometry comes from the x/width/y/height accessors, fill from the
//! series color.

use crate::accessor;
use crate::dataset::max_of;
use crate::error::{Error, Result};
use crate::group::groups;
use crate::record::Record;
use crate::svg::{SvgDocument, SvgElement};

/// Builder for a column chart grouped by customer.
#[derive(Debug, Clone)]
pub struct ColumnChart {
    width: u32,
    height: u32,
    labels: bool,
}

impl ColumnChart {
    /// Create a column chart with the given pixel dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            labels: false,
        }
    }

    /// Also render each group's customer name under its columns.
    #[must_use]
    pub fn with_labels(mut self) -> Self {
        self.labels = true;
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
        for (group_index, group) in groups(records, |r| r.customer.clone())
            .iter()
            .enumerate()
        {
            let mut children = Vec::with_capacity(group.members.len() + 1);
            for (i, record) in group.members.iter().enumerate() {
                children.push(SvgElement::Rect {
                    x: accessor::x(record, i),
                    y: accessor::y(record, chart_height, max_income)?,
                    width: accessor::width(record),
                    height: accessor::height(record, chart_height, max_income)?,
                    fill: record.month.color().as_css().to_string(),
                });
            }
            if self.labels {
                children.push(SvgElement::Text {
                    x: 0.0,
                    y: chart_height - 4.0,
                    text: group.key.clone(),
                    font_size: 10.0,
                    fill: "black".to_string(),
                });
            }
            let first = group.members.first().ok_or(Error::EmptyData)?;
            let tx = accessor::category_x(first, group_index);
            doc = doc.group(tx, 0.0, children);
        }
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::demo_dataset;
    use crate::record::Month;

    #[test]
    fn test_one_group_per_customer() {
        let svg = ColumnChart::new(600, 400)
            .render(&demo_dataset())
            .unwrap()
            .render();
        assert_eq!(svg.matches("<g ").count(), 5);
        // Groups are translated 100px apart.
        for tx in [0, 100, 200, 300, 400] {
            assert!(svg.contains(&format!("translate({tx}, 0)")), "tx {tx}");
        }
    }

    #[test]
    fn test_one_column_per_record() {
        let svg = ColumnChart::new(600, 400)
            .render(&demo_dataset())
            .unwrap()
            .render();
        assert_eq!(svg.matches("<rect").count(), 20);
        assert!(svg.contains(r#"width="18""#));
        // Columns inside a group step by 20px.
        for x in [0, 20, 40, 60] {
            assert!(svg.contains(&format!(r#"<rect x="{x}""#)), "x {x}");
        }
    }

    #[test]
    fn test_column_geometry_against_accessors() {
        // The tallest record (income 76000 = max) fills the chart height.
        let svg = ColumnChart::new(600, 400)
            .render(&demo_dataset())
            .unwrap()
            .render();
        assert!(svg.contains(r#"y="0" width="18" height="400""#));
    }

    #[test]
    fn test_labels() {
        let svg = ColumnChart::new(600, 400)
            .with_labels()
            .render(&demo_dataset())
            .unwrap()
            .render();
        assert!(svg.contains("BizSupplies"));
        // Apostrophes and ampersands in names survive escaping.
        assert!(svg.contains("Plumb'n'Stuff"));
    }

    #[test]
    fn test_empty_data() {
        assert!(matches!(
            ColumnChart::new(600, 400).render(&[]),
            Err(Error::EmptyData)
        ));
    }

    #[test]
    fn test_zero_maximum() {
        let records = vec![Record::new(1, Month::Sep16, "Other", 0.0)];
        assert!(matches!(
            ColumnChart::new(600, 400).render(&records),
            Err(Error::ZeroMaximum)
        ));
    }
}
