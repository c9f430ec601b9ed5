//! Stroke and line-style definitions.
//!
//! Every outline in a diagram (box edges, arrow lines, region borders, card
//! borders) is described by a [`StrokeDefinition`]. Widths are given in
//! typographic points and converted to canvas units when the SVG attributes
//! are written, so a 2 pt edge looks the same at any output resolution.
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#2c3e50"`, `0.9` |
//! | `width` | `stroke-width` | `0.0278` (2 pt) |
//! | `style` | `stroke-dasharray` | `"0.0514,0.0222"` |
//!
//! Use the [`apply_stroke!`](crate::apply_stroke!) macro to set all of them
//! at once:
//!
//! ```
//! use easel_core::draw::{StrokeDefinition, StrokeStyle};
//! use easel_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let mut stroke = StrokeDefinition::new(Color::new("#7F8C8D").unwrap(), 1.5);
//! stroke.set_style(StrokeStyle::Dashed);
//! let line = svg_element::Line::new().set("x1", 0).set("y1", 0);
//! let line = easel_core::apply_stroke!(line, &stroke);
//! ```

use crate::{color::Color, geometry::points_to_units};

/// Line pattern of a stroke.
///
/// Patterns are expressed as multiples of the stroke width, so heavier lines
/// get proportionally longer dashes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Long dashes
    Dashed,
    /// Short dots
    Dotted,
    /// Alternating dash and dot
    DashDot,
}

impl StrokeStyle {
    /// Returns the on/off pattern in multiples of the stroke width, or `None`
    /// for a solid line.
    pub fn pattern(self) -> Option<&'static [f32]> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some(&[3.7, 1.6]),
            Self::Dotted => Some(&[1.0, 1.65]),
            Self::DashDot => Some(&[6.4, 1.6, 1.0, 1.6]),
        }
    }

    /// Returns the SVG `stroke-dasharray` value for a stroke of the given
    /// width in canvas units.
    pub fn dasharray(self, width_units: f32) -> Option<String> {
        self.pattern().map(|pattern| {
            pattern
                .iter()
                .map(|segment| format!("{:.4}", segment * width_units))
                .collect::<Vec<_>>()
                .join(",")
        })
    }
}

/// A stroke definition for rendering lines and borders.
///
/// # Examples
///
/// ```
/// use easel_core::draw::{StrokeDefinition, StrokeStyle};
/// use easel_core::color::Color;
///
/// let mut stroke = StrokeDefinition::new(Color::new("#E74C3C").unwrap(), 2.0);
/// stroke.set_style(StrokeStyle::Dotted);
/// assert_eq!(stroke.width(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    /// Creates a new solid stroke with the given color and width in points.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width in points.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke width in canvas units.
    pub fn width_units(&self) -> f32 {
        points_to_units(self.width)
    }

    /// Returns the stroke style.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Returns the SVG dasharray for this stroke, or `None` when solid.
    pub fn dasharray(&self) -> Option<String> {
        self.style.dasharray(self.width_units())
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the stroke width in points.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Sets the stroke style.
    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    /// Returns this stroke with its color's alpha replaced.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.color = self.color.with_alpha(alpha);
        self
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity and width (converted to canvas units), plus the dash
/// pattern unless the stroke is solid.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_hex())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width_units());

        if let Some(dasharray) = $stroke.dasharray() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
