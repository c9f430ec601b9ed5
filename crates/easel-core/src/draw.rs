//! Drawable primitives for diagram rendering.
//!
//! This module provides the drawing primitives an Easel scene is built from.
//! Every primitive carries its own caller-supplied position and implements the
//! [`Drawable`] trait, which renders it to layered SVG nodes and reports the
//! area it covers.
//!
//! # Primitives
//!
//! - [`LabeledBox`] - Rounded rectangle with a centered multi-line label
//! - [`Arrow`] - Straight directional segment with an optional midpoint label
//! - [`Region`] - Translucent background used to group other drawables
//! - [`LegendBlock`] - Color key built by [`LegendBuilder`]
//! - [`AnnotationBlock`] - Free-floating text with an optional [`Frame`]
//!
//! # Styling
//!
//! - [`StrokeDefinition`] - Line color, width and dash pattern
//! - [`TextDefinition`] - Font family, size, weight, slant and color
//! - [`TextBlock`] - Computed layout for multi-line text

mod annotation;
mod arrow;
mod labeled_box;
mod layer;
mod legend;
mod region;
mod stroke;
mod text;

pub use annotation::{AnnotationBlock, Frame, VerticalAlign};
pub use arrow::{Arrow, ArrowHead};
pub use labeled_box::{CornerStyle, LabeledBox};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use legend::{LegendBlock, LegendBuilder, LegendEntry};
pub use region::Region;
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{FontSlant, FontWeight, HorizontalAlign, Text, TextBlock, TextDefinition};

use crate::{error::ValidationError, geometry::Bounds};

/// A self-positioned element that can be rendered onto a canvas.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable to SVG nodes grouped by layer.
    fn render_to_layers(&self) -> LayeredOutput;

    /// Returns the area covered by this drawable in canvas units.
    fn bounds(&self) -> Bounds;

    /// Rejects degenerate geometry before anything is rendered.
    fn validate(&self) -> Result<(), ValidationError>;
}
