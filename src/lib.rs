//! # vizkit
//!
//! Declarative data-shaping utilities and SVG chart primitives.
//!
//! vizkit follows the conventions of declarative visualization libraries:
//! **accessors** (pure projections from a record to a derived value),
//! **comparators** (pure ordering functions), and **dataset utilities**
//! (extrema, stable sorting, multi-level grouping, set algebra, number
//! formatting) that take accessors and comparators as arguments. On top of
//! those sit two chart builders that render a record sequence to inline SVG.
//!
//! ## Quick Start
//!
//! ```rust
//! use vizkit::prelude::*;
//!
//! let data = demo_dataset();
//!
//! // Dataset utilities take accessor functions as arguments.
//! let max_income = max_of(&data, vizkit::accessor::value);
//! assert_eq!(max_income, Some(76000.0));
//!
//! // Group by customer and render grouped columns.
//! let svg = ColumnChart::new(600, 400).render(&data)?.render();
//! assert!(svg.contains("<rect"));
//! # Ok::<(), vizkit::Error>(())
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in visualization code
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Record, month, and series-color types.
pub mod record;

/// The demo income dataset.
pub mod fixture;

/// Named accessor functions over records.
pub mod accessor;

// ============================================================================
// Dataset Utilities
// ============================================================================

/// Extrema, comparator search, and stable sorting.
pub mod dataset;

/// Multi-level grouping.
pub mod group;

/// Set algebra over value sequences.
pub mod set_ops;

/// Number formatting.
pub mod format;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Inline SVG document builder.
pub mod svg;

/// Chart builders (grouped columns, multi-series lines).
pub mod charts;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for vizkit operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust,ignore
/// use vizkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::charts::{line_path, ColumnChart, LineChart};
    pub use crate::dataset::{
        ascending, descending, extent, greatest, least, max_of, min_of, sorted, sorted_by_key,
    };
    pub use crate::error::{Error, Result};
    pub use crate::fixture::demo_dataset;
    pub use crate::format::NumberFormat;
    pub use crate::group::{grouping, groups, groups2, Group, Grouping};
    pub use crate::record::{Month, Record, SeriesColor};
    pub use crate::set_ops::{difference, intersection, union};
    pub use crate::svg::{SvgDocument, SvgElement};
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_prelude_end_to_end() {
        let data = demo_dataset();
        let (lo, hi) = extent(&data, crate::accessor::value).unwrap();
        assert!(lo <= hi);
        let svg = LineChart::new(600, 400).render(&data).unwrap().render();
        assert!(svg.contains("<path"));
    }
}
