//! The tabular record type and its categorical axes.
//!
//! A [`Record`] is one row of the income-by-customer-by-month table that the
//! chart builders consume. Records are constructed once and read thereafter;
//! every derived value is computed fresh by an accessor.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One row of the income table.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Row identifier. Not used by any computation; in demo data one id may
    /// repeat and that must be tolerated.
    pub id: u32,
    /// Reporting period the row belongs to (the series key).
    pub month: Month,
    /// Customer name (the category key).
    pub customer: String,
    /// Income for this customer in this period. Non-negative.
    pub income: f64,
}

impl Record {
    /// Create a new record.
    #[must_use]
    pub fn new(id: u32, month: Month, customer: &str, income: f64) -> Self {
        Self {
            id,
            month,
            customer: customer.to_string(),
            income,
        }
    }
}

/// The closed set of reporting periods in the demo dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    /// September 2016.
    Sep16,
    /// December 2016.
    Dec16,
    /// March 2017.
    Mar17,
    /// June 2017.
    Jun17,
}

impl Month {
    /// All months in chronological order.
    pub const ALL: [Month; 4] = [Month::Sep16, Month::Dec16, Month::Mar17, Month::Jun17];

    /// The label used in the source data, e.g. `"Sep-16"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Month::Sep16 => "Sep-16",
            Month::Dec16 => "Dec-16",
            Month::Mar17 => "Mar-17",
            Month::Jun17 => "Jun-17",
        }
    }

    /// The series color assigned to this month.
    ///
    /// Total mapping: every known month has a color. For string labels that
    /// may be unrecognized, use [`crate::accessor::color`] instead.
    #[must_use]
    pub const fn color(self) -> SeriesColor {
        match self {
            Month::Sep16 => SeriesColor::Blue,
            Month::Dec16 => SeriesColor::Orange,
            Month::Mar17 => SeriesColor::Gray,
            Month::Jun17 => SeriesColor::Yellow,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sep-16" => Ok(Month::Sep16),
            "Dec-16" => Ok(Month::Dec16),
            "Mar-17" => Ok(Month::Mar17),
            "Jun-17" => Ok(Month::Jun17),
            other => Err(Error::UnknownMonth(other.to_string())),
        }
    }
}

/// Named CSS colors used to stroke and fill series shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesColor {
    /// `blue` — September 2016.
    Blue,
    /// `orange` — December 2016.
    Orange,
    /// `gray` — March 2017.
    Gray,
    /// `yellow` — June 2017.
    Yellow,
}

impl SeriesColor {
    /// The CSS color name.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            SeriesColor::Blue => "blue",
            SeriesColor::Orange => "orange",
            SeriesColor::Gray => "gray",
            SeriesColor::Yellow => "yellow",
        }
    }
}

impl fmt::Display for SeriesColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}
