//! Number formatting.
//!
//! Builds reusable formatter values from a compact specifier string, in the
//! spirit of `d3.format`. The supported subset is:
//!
//! - optional `$` — currency prefix
//! - optional `,` — thousands separator in the integer part
//! - optional `.N` — fixed precision of N decimal places (default 6)
//! - a trailing type: `f` (fixed-point) or `%` (multiply by 100, append `%`)
//!
//! ```
//! use vizkit::format::NumberFormat;
//!
//! let dollars = NumberFormat::parse("$,.2f").unwrap();
//! assert_eq!(dollars.format(1000.0), "$1,000.00");
//!
//! let percent = NumberFormat::parse(",.1%").unwrap();
//! assert_eq!(percent.format(0.507), "50.7%");
//! ```

use std::str::FromStr;

use crate::error::{Error, Result};

/// Default precision when the specifier omits `.N`, matching d3.
const DEFAULT_PRECISION: usize = 6;

/// How the formatted value is scaled and suffixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormatKind {
    /// Fixed-point notation (`f`).
    Fixed,
    /// Percentage (`%`): multiply by 100 and append `%`.
    Percent,
}

/// A reusable number-to-string formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    currency: bool,
    grouping: bool,
    precision: usize,
    kind: FormatKind,
}

impl NumberFormat {
    /// Parse a specifier string such as `"$,.2f"` or `",.1%"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] when the specifier does not match
    /// the supported `[$][,][.N](f|%)` subset.
    pub fn parse(spec: &str) -> Result<Self> {
        let invalid = || Error::InvalidFormat(spec.to_string());

        let mut rest = spec;
        let currency = rest.starts_with('$');
        if currency {
            rest = &rest[1..];
        }
        let grouping = rest.starts_with(',');
        if grouping {
            rest = &rest[1..];
        }

        let mut precision = DEFAULT_PRECISION;
        if let Some(stripped) = rest.strip_prefix('.') {
            let digits_end = stripped
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(stripped.len());
            precision = stripped[..digits_end].parse().map_err(|_| invalid())?;
            rest = &stripped[digits_end..];
        }

        let kind = match rest {
            "f" => FormatKind::Fixed,
            "%" => FormatKind::Percent,
            _ => return Err(invalid()),
        };

        Ok(Self {
            currency,
            grouping,
            precision,
            kind,
        })
    }

    /// Currency formatter: `$` prefix, thousands grouping, fixed precision.
    #[must_use]
    pub const fn currency(precision: usize) -> Self {
        Self {
            currency: true,
            grouping: true,
            precision,
            kind: FormatKind::Fixed,
        }
    }

    /// Percentage formatter: value is multiplied by 100 and suffixed `%`.
    #[must_use]
    pub const fn percent(precision: usize) -> Self {
        Self {
            currency: false,
            grouping: true,
            precision,
            kind: FormatKind::Percent,
        }
    }

    /// Plain fixed-point formatter without grouping or prefix.
    #[must_use]
    pub const fn fixed(precision: usize) -> Self {
        Self {
            currency: false,
            grouping: false,
            precision,
            kind: FormatKind::Fixed,
        }
    }

    /// Format a number according to this specification.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let scaled = match self.kind {
            FormatKind::Fixed => value,
            FormatKind::Percent => value * 100.0,
        };

        let negative = scaled.is_sign_negative() && scaled != 0.0;
        let body = format!("{:.*}", self.precision, scaled.abs());
        let body = if self.grouping {
            group_thousands(&body)
        } else {
            body
        };

        let mut out = String::with_capacity(body.len() + 3);
        if negative {
            out.push('-');
        }
        if self.currency {
            out.push('$');
        }
        out.push_str(&body);
        if self.kind == FormatKind::Percent {
            out.push('%');
        }
        out
    }
}

impl FromStr for NumberFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Insert `,` every three digits into the integer part of a plain decimal
/// string (no sign, no exponent).
fn group_thousands(body: &str) -> String {
    let (int_part, frac_part) = match body.find('.') {
        Some(dot) => (&body[..dot], &body[dot..]),
        None => (body, ""),
    };

    let mut grouped = String::with_capacity(body.len() + int_part.len() / 3);
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.push_str(frac_part);
    grouped
}
