//! Inline SVG document builder.
//!
//! Vector-only output: charts are built as a tree of shape elements and
//! serialized to an `<svg>` string. Fills and strokes are CSS color strings
//! because the series palette is named colors. Grouped shapes use `<g>` with
//! a translate transform, which is how the column chart positions each
//! category group.

use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

/// An SVG shape element.
///
/// Field names match SVG attribute names.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Rectangle.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
    },
    /// Path (SVG path data).
    Path {
        d: String,
        fill: Option<String>,
        stroke: Option<String>,
        stroke_width: f64,
    },
    /// Polyline (connected line segments).
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: String,
        stroke_width: f64,
    },
    /// Text.
    Text {
        x: f64,
        y: f64,
        text: String,
        font_size: f64,
        fill: String,
    },
    /// Group with a translate transform; children inherit its placement.
    Group {
        tx: f64,
        ty: f64,
        children: Vec<SvgElement>,
    },
}

/// Builder for an SVG document of fixed dimensions.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    width: u32,
    height: u32,
    elements: Vec<SvgElement>,
}

impl SvgDocument {
    /// Create a new document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            elements: Vec::new(),
        })
    }

    /// Document width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Document height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Add a filled rectangle.
    #[must_use]
    pub fn rect(mut self, x: f64, y: f64, width: f64, height: f64, fill: &str) -> Self {
        self.elements.push(SvgElement::Rect {
            x,
            y,
            width,
            height,
            fill: fill.to_string(),
        });
        self
    }

    /// Add a stroked, unfilled path.
    #[must_use]
    pub fn path(mut self, d: &str, stroke: &str, stroke_width: f64) -> Self {
        self.elements.push(SvgElement::Path {
            d: d.to_string(),
            fill: None,
            stroke: Some(stroke.to_string()),
            stroke_width,
        });
        self
    }

    /// Add a polyline.
    #[must_use]
    pub fn polyline(mut self, points: &[(f64, f64)], stroke: &str, stroke_width: f64) -> Self {
        self.elements.push(SvgElement::Polyline {
            points: points.to_vec(),
            stroke: stroke.to_string(),
            stroke_width,
        });
        self
    }

    /// Add text.
    #[must_use]
    pub fn text(mut self, x: f64, y: f64, text: &str, font_size: f64, fill: &str) -> Self {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill: fill.to_string(),
        });
        self
    }

    /// Add a translated group of elements.
    #[must_use]
    pub fn group(mut self, tx: f64, ty: f64, children: Vec<SvgElement>) -> Self {
        self.elements.push(SvgElement::Group { tx, ty, children });
        self
    }

    /// Add a raw element.
    pub fn add_element(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Render to an SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(1024);
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );
        for element in &self.elements {
            write_element(&mut svg, element, 1);
        }
        svg.push_str("</svg>\n");
        svg
    }

    /// Write the rendered document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

/// Serialize one element (and its children) at the given indent depth.
fn write_element(svg: &mut String, element: &SvgElement, depth: usize) {
    let pad = "  ".repeat(depth);
    match element {
        SvgElement::Rect {
            x,
            y,
            width,
            height,
            fill,
        } => {
            let _ = writeln!(
                svg,
                r#"{pad}<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{fill}"/>"#
            );
        }
        SvgElement::Path {
            d,
            fill,
            stroke,
            stroke_width,
        } => {
            let fill_attr = fill.as_deref().unwrap_or("none");
            let stroke_attr = stroke
                .as_deref()
                .map(|s| format!(r#" stroke="{s}" stroke-width="{stroke_width}""#))
                .unwrap_or_default();
            let _ = writeln!(svg, r#"{pad}<path d="{d}" fill="{fill_attr}"{stroke_attr}/>"#);
        }
        SvgElement::Polyline {
            points,
            stroke,
            stroke_width,
        } => {
            let points_str: String = points
                .iter()
                .map(|(x, y)| format!("{x},{y}"))
                .collect::<Vec<_>>()
                .join(" ");
            let _ = writeln!(
                svg,
                r#"{pad}<polyline points="{points_str}" fill="none" stroke="{stroke}" stroke-width="{stroke_width}"/>"#
            );
        }
        SvgElement::Text {
            x,
            y,
            text,
            font_size,
            fill,
        } => {
            let escaped = escape_xml(text);
            let _ = writeln!(
                svg,
                r#"{pad}<text x="{x}" y="{y}" font-size="{font_size}" fill="{fill}" font-family="sans-serif">{escaped}</text>"#
            );
        }
        SvgElement::Group { tx, ty, children } => {
            let _ = writeln!(svg, r#"{pad}<g transform="translate({tx}, {ty})">"#);
            for child in children {
                write_element(svg, child, depth + 1);
            }
            let _ = writeln!(svg, "{pad}</g>");
        }
    }
}

/// Escape XML special characters in text content.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
