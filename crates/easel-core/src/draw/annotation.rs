//! Free-floating text blocks with an optional frame.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, HorizontalAlign, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextDefinition},
    error::{ValidationError, check_alpha, check_line_width, check_point},
    geometry::{Bounds, Insets, Point},
};

const ELEMENT: &str = "annotation";

/// Where the text block sits vertically relative to its anchor.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    /// The block hangs below the anchor
    Top,
    /// The block is centered on the anchor
    #[default]
    Center,
    /// The block rests on the anchor
    Bottom,
}

impl VerticalAlign {
    /// Returns the top edge of a block of the given height anchored at `y`.
    pub fn top_edge(self, y: f32, height: f32) -> f32 {
        match self {
            Self::Top => y,
            Self::Center => y - height / 2.0,
            Self::Bottom => y - height,
        }
    }
}

/// Bordered background drawn behind an annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    fill: Color,
    edge: Color,
    edge_width: f32,
    alpha: f32,
    padding: f32,
    corner_radius: f32,
}

impl Frame {
    /// Creates a frame with a 2 pt edge, 0.95 alpha, 0.1 padding and 0.05 corner radius.
    pub fn new(fill: Color, edge: Color) -> Self {
        Self {
            fill,
            edge,
            edge_width: 2.0,
            alpha: 0.95,
            padding: 0.1,
            corner_radius: 0.05,
        }
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn edge(&self) -> Color {
        self.edge
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Returns the gap between the text and the frame edge in canvas units.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Sets the edge width in points.
    pub fn with_edge_width(mut self, width: f32) -> Self {
        self.edge_width = width;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_alpha(ELEMENT, self.alpha)?;
        check_line_width(ELEMENT, self.edge_width)?;
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(ValidationError::NonPositiveSize {
                element: ELEMENT,
                width: self.padding,
                height: self.padding,
            });
        }
        Ok(())
    }
}

/// Multi-line text positioned relative to an anchor point.
///
/// The horizontal alignment comes from the text definition and the vertical
/// alignment from [`VerticalAlign`]. A [`Frame`], when present, is sized from
/// the measured text plus its padding.
///
/// # Examples
///
/// ```
/// # use easel_core::color::Color;
/// # use easel_core::draw::{AnnotationBlock, Drawable, Frame, HorizontalAlign, VerticalAlign};
/// # use easel_core::geometry::Point;
/// let note = AnnotationBlock::new(Point::new(19.7, 13.5), "KEY POINTS:\n- REST for CRUD")
///     .with_align(HorizontalAlign::Right)
///     .with_vertical_align(VerticalAlign::Bottom)
///     .with_frame(Frame::new(
///         Color::new("#FFF9E6").unwrap(),
///         Color::new("#F39C12").unwrap(),
///     ));
///
/// let bounds = note.bounds();
/// assert!(bounds.max_x() > 19.7);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationBlock {
    anchor: Point,
    text: String,
    definition: TextDefinition,
    vertical: VerticalAlign,
    frame: Option<Frame>,
}

impl AnnotationBlock {
    pub fn new(anchor: Point, text: &str) -> Self {
        Self {
            anchor,
            text: text.to_string(),
            definition: TextDefinition::new(),
            vertical: VerticalAlign::default(),
            frame: None,
        }
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn definition(&self) -> &TextDefinition {
        &self.definition
    }

    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Replaces the whole text style.
    pub fn with_style(mut self, definition: TextDefinition) -> Self {
        self.definition = definition;
        self
    }

    pub fn with_align(mut self, align: HorizontalAlign) -> Self {
        self.definition.set_align(align);
        self
    }

    pub fn with_vertical_align(mut self, vertical: VerticalAlign) -> Self {
        self.vertical = vertical;
        self
    }

    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Returns the area covered by the text alone.
    pub fn text_bounds(&self) -> Bounds {
        let size = Text::new(&self.definition, &self.text).calculate_size();
        let left = self
            .definition
            .align()
            .left_edge(self.anchor.x(), size.width());
        let top = self.vertical.top_edge(self.anchor.y(), size.height());
        Point::new(left, top).to_bounds(size)
    }

    /// Returns the area covered by the frame, if any.
    pub fn frame_bounds(&self) -> Option<Bounds> {
        let frame = self.frame.as_ref()?;
        Some(self.text_bounds().add_padding(Insets::uniform(frame.padding)))
    }
}

impl Drawable for AnnotationBlock {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let text_bounds = self.text_bounds();

        if let (Some(frame), Some(bounds)) = (self.frame.as_ref(), self.frame_bounds()) {
            let radius = frame
                .corner_radius
                .min(bounds.width() / 2.0)
                .min(bounds.height() / 2.0);
            let edge = StrokeDefinition::new(frame.edge.with_alpha(frame.alpha), frame.edge_width);
            let rect = svg_element::Rectangle::new()
                .set("x", bounds.min_x())
                .set("y", bounds.min_y())
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("rx", radius)
                .set("ry", radius)
                .set("fill", frame.fill)
                .set("fill-opacity", frame.alpha);
            output.add_to_layer(RenderLayer::Card, Box::new(apply_stroke!(rect, &edge)));
        }

        let anchor = Point::new(self.anchor.x(), text_bounds.center().y());
        if let Some(text) = Text::new(&self.definition, &self.text).render(anchor) {
            output.add_to_layer(RenderLayer::Text, Box::new(text));
        }

        output
    }

    fn bounds(&self) -> Bounds {
        self.frame_bounds().unwrap_or_else(|| self.text_bounds())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_point(ELEMENT, self.anchor)?;
        self.definition.validate(ELEMENT)?;
        match &self.frame {
            Some(frame) => frame.validate(),
            None => Ok(()),
        }
    }
}
