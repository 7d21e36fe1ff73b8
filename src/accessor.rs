//! Named accessor functions over [`Record`].
//!
//! Accessors are plain function values: pure projections from a record (and,
//! where geometry needs it, the record's index and chart parameters) to a
//! derived value. Dataset utilities and chart builders take them as
//! arguments, so the same record type can be projected differently by
//! different callers.

use crate::error::{Error, Result};
use crate::format::NumberFormat;
use crate::record::{Month, Record, SeriesColor};

/// Horizontal step between adjacent columns, in pixels.
pub const COLUMN_STEP: f64 = 20.0;

/// Horizontal step between category groups, in pixels.
pub const CATEGORY_STEP: f64 = 100.0;

/// Fixed column width, in pixels.
pub const COLUMN_WIDTH: f64 = 18.0;

/// The record's income, unmodified.
#[must_use]
pub fn value(record: &Record) -> f64 {
    record.income
}

/// The record's income as a currency string: `$` prefix, thousands
/// grouping, no decimals (69000 becomes `"$69,000"`).
#[must_use]
pub fn formatted_value(record: &Record) -> String {
    NumberFormat::currency(0).format(record.income)
}

/// The record's customer name.
#[must_use]
pub fn category(record: &Record) -> &str {
    &record.customer
}

/// The record's month (series key).
#[must_use]
pub fn serie(record: &Record) -> Month {
    record.month
}

/// Column x position: [`COLUMN_STEP`] times the record's index.
#[must_use]
pub fn x(_record: &Record, index: usize) -> f64 {
    COLUMN_STEP * index as f64
}

/// Category group x position: [`CATEGORY_STEP`] times the group's index.
#[must_use]
pub fn category_x(_record: &Record, index: usize) -> f64 {
    CATEGORY_STEP * index as f64
}

/// Fixed column width of [`COLUMN_WIDTH`] pixels.
#[must_use]
pub fn width(_record: &Record) -> f64 {
    COLUMN_WIDTH
}

/// Column height: `chart_height * (income / max_value)`.
///
/// # Errors
///
/// Returns [`Error::ZeroMaximum`] when `max_value` is zero, rather than
/// propagating NaN or infinity into the geometry.
pub fn height(record: &Record, chart_height: f64, max_value: f64) -> Result<f64> {
    if max_value == 0.0 {
        return Err(Error::ZeroMaximum);
    }
    Ok(chart_height * (record.income / max_value))
}

/// Column y position: `chart_height - height`.
///
/// Inverted because the vertical SVG coordinate grows downward while chart
/// magnitude grows upward.
///
/// # Errors
///
/// Returns [`Error::ZeroMaximum`] when `max_value` is zero.
pub fn y(record: &Record, chart_height: f64, max_value: f64) -> Result<f64> {
    Ok(chart_height - height(record, chart_height, max_value)?)
}

/// Series color for a month label, or `None` for an unrecognized label.
///
/// The total mapping over known months is [`Month::color`].
#[must_use]
pub fn color(label: &str) -> Option<SeriesColor> {
    label.parse::<Month>().ok().map(Month::color)
}
