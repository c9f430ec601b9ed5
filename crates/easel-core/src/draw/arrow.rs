//! Straight directional arrows with an optional midpoint label.
//!
//! An arrow is a single segment from `start` to `end`, finished by a filled
//! triangular head at `end`. The head is an explicit polygon rather than an
//! SVG marker so that every rasterizer draws it identically.
//!
//! When labelled, the label sits near the segment midpoint on a light card
//! bordered in the arrow color:
//!
//! ```text
//!                ┌────────────┐
//!                │ HTTP REST  │
//!                └────────────┘
//!   start ───────────●──────────────▶ end
//!                 midpoint
//! ```

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{
        Drawable, FontSlant, LayeredOutput, RenderLayer, StrokeDefinition, StrokeStyle, Text,
        TextDefinition,
    },
    error::{ValidationError, check_alpha, check_line_width, check_point},
    geometry::{Bounds, Insets, Point, Size, points_to_units},
};

const ELEMENT: &str = "arrow";

/// Head length as a multiple of the line width.
const HEAD_LENGTH_FACTOR: f32 = 5.0;

/// Head half-width as a multiple of the line width.
const HEAD_HALF_WIDTH_FACTOR: f32 = 2.5;

/// Horizontal shift of the label from the midpoint, in canvas units.
const LABEL_SHIFT_X: f32 = 0.1;

/// Upward shift of the label for arrows pointing down, in canvas units.
const LABEL_RISE_DOWNWARD: f32 = 0.25;

/// Upward shift of the label for every other arrow, in canvas units.
const LABEL_RISE: f32 = 0.2;

/// Card padding as a multiple of the label font size.
const CARD_PAD_FACTOR: f32 = 0.25;

/// The triangle closing an arrow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    /// Point of the triangle; always the arrow's end point
    pub tip: Point,
    /// Base corner on the left of the travel direction
    pub left: Point,
    /// Base corner on the right of the travel direction
    pub right: Point,
}

impl ArrowHead {
    /// Returns the middle of the triangle's base, where the line stops.
    pub fn base(&self) -> Point {
        self.left.midpoint(self.right)
    }

    fn to_svg_points(self) -> String {
        [self.tip, self.left, self.right]
            .iter()
            .map(|p| format!("{},{}", p.x(), p.y()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A straight arrow from `start` to `end`.
///
/// # Examples
///
/// ```
/// # use easel_core::color::Color;
/// # use easel_core::draw::{Arrow, StrokeStyle};
/// # use easel_core::geometry::Point;
/// let arrow = Arrow::new(
///     Point::new(9.2, 5.0),
///     Point::new(9.5, 6.4),
///     Color::new("#5FA04E").unwrap(),
/// )
/// .with_label("HTTP REST")
/// .with_style(StrokeStyle::Solid);
///
/// assert_eq!(arrow.head().tip, Point::new(9.5, 6.4));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Arrow {
    start: Point,
    end: Point,
    label: Option<String>,
    stroke: StrokeDefinition,
    opacity: f32,
    text: TextDefinition,
}

impl Arrow {
    /// Creates a solid 2.5 pt arrow at 0.8 opacity.
    pub fn new(start: Point, end: Point, color: Color) -> Self {
        Self {
            start,
            end,
            label: None,
            stroke: StrokeDefinition::new(color, 2.5),
            opacity: 0.8,
            text: TextDefinition::new()
                .with_font_size(8.0)
                .with_slant(FontSlant::Italic),
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Sets the label. A blank label leaves the arrow unlabelled.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label)
            .filter(|label| !label.trim().is_empty())
            .map(str::to_string);
        self
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.stroke.set_style(style);
        self
    }

    /// Sets the line width in points.
    pub fn with_width(mut self, width: f32) -> Self {
        self.stroke.set_width(width);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the label font size in points.
    pub fn with_label_font_size(mut self, size: f32) -> Self {
        self.text.set_font_size(size);
        self
    }

    /// Returns the same arrow pointing the other way.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            ..self.clone()
        }
    }

    /// Returns the segment length in canvas units.
    pub fn length(&self) -> f32 {
        self.end.sub_point(self.start).hypot()
    }

    /// Computes the arrowhead triangle at `end`.
    ///
    /// The head is `5 * width` long and `5 * width` wide at its base, shrunk
    /// to fit when the segment is shorter than the head.
    pub fn head(&self) -> ArrowHead {
        let delta = self.end.sub_point(self.start);
        let length = delta.hypot();
        let width = self.stroke.width_units();

        let head_length = (HEAD_LENGTH_FACTOR * width).min(length);
        let half_width = head_length * HEAD_HALF_WIDTH_FACTOR / HEAD_LENGTH_FACTOR;

        let direction = if length > 0.0 {
            delta.scale(1.0 / length)
        } else {
            Point::default()
        };
        let base = self.end.sub_point(direction.scale(head_length));
        let normal = direction.perpendicular().scale(half_width);

        ArrowHead {
            tip: self.end,
            left: base.sub_point(normal),
            right: base.add_point(normal),
        }
    }

    /// Returns the label reference point: the segment midpoint.
    ///
    /// This point does not depend on the arrow's direction.
    pub fn label_midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Returns whether the arrow travels downward on the canvas.
    pub fn points_down(&self) -> bool {
        self.end.y() > self.start.y()
    }

    /// Returns the center of the drawn label text.
    ///
    /// The text's bottom edge sits on the midpoint shifted right and raised,
    /// a little further for arrows pointing down.
    pub fn label_anchor(&self) -> Point {
        let rise = if self.points_down() {
            LABEL_RISE_DOWNWARD
        } else {
            LABEL_RISE
        };
        let half_height = self.label_size().map_or(0.0, |size| size.height() / 2.0);
        self.label_midpoint()
            .add_point(Point::new(LABEL_SHIFT_X, -rise - half_height))
    }

    /// Returns the area of the label card, if the arrow is labelled.
    pub fn label_card(&self) -> Option<Bounds> {
        let pad = points_to_units(self.text.font_size() * CARD_PAD_FACTOR);
        let size = self.label_size()?.add_padding(Insets::uniform(pad));
        Some(Bounds::new_from_center(self.label_anchor(), size))
    }

    fn label_size(&self) -> Option<Size> {
        let label = self.label.as_deref()?;
        Some(Text::new(&self.text, label).calculate_size())
    }

    fn segment_bounds(&self) -> Bounds {
        Bounds::from_extents(
            self.start.x().min(self.end.x()),
            self.start.x().max(self.end.x()),
            self.start.y().min(self.end.y()),
            self.start.y().max(self.end.y()),
        )
    }
}

impl Drawable for Arrow {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let stroke = self.stroke.clone().with_alpha(self.opacity);
        let head = self.head();
        let stop = head.base();

        let line = svg_element::Line::new()
            .set("x1", self.start.x())
            .set("y1", self.start.y())
            .set("x2", stop.x())
            .set("y2", stop.y())
            .set("fill", "none");
        output.add_to_layer(RenderLayer::Arrow, Box::new(apply_stroke!(line, &stroke)));

        let polygon = svg_element::Polygon::new()
            .set("points", head.to_svg_points())
            .set("fill", stroke.color())
            .set("fill-opacity", self.opacity)
            .set("stroke", "none");
        output.add_to_layer(RenderLayer::Arrow, Box::new(polygon));

        if let (Some(label), Some(card)) = (self.label.as_deref(), self.label_card()) {
            let pad = points_to_units(self.text.font_size() * CARD_PAD_FACTOR);
            let border = StrokeDefinition::new(self.stroke.color().with_alpha(0.9), 1.0);
            let rect = svg_element::Rectangle::new()
                .set("x", card.min_x())
                .set("y", card.min_y())
                .set("width", card.width())
                .set("height", card.height())
                .set("rx", pad)
                .set("ry", pad)
                .set("fill", "#ffffff")
                .set("fill-opacity", 0.9);
            output.add_to_layer(RenderLayer::Card, Box::new(apply_stroke!(rect, &border)));

            if let Some(text) = Text::new(&self.text, label).render(self.label_anchor()) {
                output.add_to_layer(RenderLayer::Text, Box::new(text));
            }
        }

        output
    }

    fn bounds(&self) -> Bounds {
        let segment = self.segment_bounds();
        match self.label_card() {
            Some(card) => segment.merge(&card),
            None => segment,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_point(ELEMENT, self.start)?;
        check_point(ELEMENT, self.end)?;
        if self.start == self.end {
            return Err(ValidationError::CoincidentEndpoints { point: self.start });
        }
        check_line_width(ELEMENT, self.stroke.width())?;
        check_alpha(ELEMENT, self.opacity)?;
        if self.label.is_some() {
            self.text.validate(ELEMENT)?;
        }
        Ok(())
    }
}
