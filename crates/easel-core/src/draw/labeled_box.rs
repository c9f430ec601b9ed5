//! Filled rectangle with a centered multi-line label.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{
        Drawable, FontWeight, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextDefinition,
    },
    error::{ValidationError, check_alpha, check_line_width, check_point},
    geometry::{Bounds, Point, Size},
};

const ELEMENT: &str = "box";

/// Corner treatment of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CornerStyle {
    Square,
    /// Rounded corners with the given radius in canvas units.
    Rounded { radius: f32 },
}

impl CornerStyle {
    /// Returns the corner radius in canvas units, clamped so the corners of a
    /// rectangle of the given size never overlap.
    pub fn radius_for(self, size: Size) -> f32 {
        match self {
            Self::Square => 0.0,
            Self::Rounded { radius } => radius
                .max(0.0)
                .min(size.width() / 2.0)
                .min(size.height() / 2.0),
        }
    }
}

impl Default for CornerStyle {
    fn default() -> Self {
        Self::Rounded { radius: 0.08 }
    }
}

/// A filled, outlined rectangle with a label centered inside it.
///
/// The label is split on `\n` and the resulting block is centered both
/// horizontally and vertically in the box. Labels are never wrapped or
/// shrunk; text wider than the box overflows it.
///
/// # Examples
///
/// ```
/// # use easel_core::color::Color;
/// # use easel_core::draw::{Drawable, LabeledBox};
/// # use easel_core::geometry::{Point, Size};
/// let node = LabeledBox::new(
///     Point::new(0.5, 4.4),
///     Size::new(2.3, 0.6),
///     "HTML/CSS\nUI",
///     Color::new("#E34F26").unwrap(),
/// )
/// .with_font_size(8.0);
///
/// assert!(node.validate().is_ok());
/// assert_eq!(node.label_line_centers().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledBox {
    top_left: Point,
    size: Size,
    label: String,
    fill: Color,
    stroke: StrokeDefinition,
    corner: CornerStyle,
    text: TextDefinition,
}

impl LabeledBox {
    /// Creates a box with the house style: `#2C3E50` 2 pt edge, fill at 0.9
    /// alpha, rounded corners and a bold white 9 pt label.
    pub fn new(top_left: Point, size: Size, label: &str, fill: Color) -> Self {
        let edge = Color::new("#2C3E50").unwrap_or_default();
        Self {
            top_left,
            size,
            label: label.to_string(),
            fill: fill.with_alpha(0.9),
            stroke: StrokeDefinition::new(edge, 2.0),
            corner: CornerStyle::default(),
            text: TextDefinition::new()
                .with_font_size(9.0)
                .with_weight(FontWeight::Bold)
                .with_color(Color::new("white").unwrap_or_default()),
        }
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn corner(&self) -> CornerStyle {
        self.corner
    }

    pub fn text(&self) -> &TextDefinition {
        &self.text
    }

    /// Sets the fill opacity, keeping the fill hue.
    pub fn with_fill_alpha(mut self, alpha: f32) -> Self {
        self.fill = self.fill.with_alpha(alpha);
        self
    }

    pub fn with_edge_color(mut self, color: Color) -> Self {
        self.stroke.set_color(color);
        self
    }

    /// Sets the edge width in points.
    pub fn with_edge_width(mut self, width: f32) -> Self {
        self.stroke.set_width(width);
        self
    }

    pub fn with_corner(mut self, corner: CornerStyle) -> Self {
        self.corner = corner;
        self
    }

    /// Sets the label font size in points.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.text.set_font_size(size);
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text.set_color(color);
        self
    }

    /// Toggles the bold label weight.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.text.set_weight(if bold {
            FontWeight::Bold
        } else {
            FontWeight::Normal
        });
        self
    }

    /// Returns the vertical center of each label line.
    pub fn label_line_centers(&self) -> Vec<f32> {
        Text::new(&self.text, &self.label)
            .block()
            .line_centers(self.bounds().center().y())
    }
}

impl Drawable for LabeledBox {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = self.bounds();
        let radius = self.corner.radius_for(self.size);

        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", radius)
            .set("ry", radius)
            .set("fill", self.fill)
            .set("fill-opacity", self.fill.alpha());
        let rect = apply_stroke!(rect, &self.stroke);
        output.add_to_layer(RenderLayer::Shape, Box::new(rect));

        if let Some(label) = Text::new(&self.text, &self.label).render(bounds.center()) {
            output.add_to_layer(RenderLayer::Text, Box::new(label));
        }

        output
    }

    fn bounds(&self) -> Bounds {
        self.top_left.to_bounds(self.size)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_point(ELEMENT, self.top_left)?;
        if !self.size.is_positive() {
            return Err(ValidationError::NonPositiveSize {
                element: ELEMENT,
                width: self.size.width(),
                height: self.size.height(),
            });
        }
        self.text.validate(ELEMENT)?;
        check_line_width(ELEMENT, self.stroke.width())?;
        check_alpha(ELEMENT, self.fill.alpha())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn sample(label: &str) -> LabeledBox {
        LabeledBox::new(
            Point::new(8.5, 2.2),
            Size::new(3.0, 0.8),
            label,
            Color::new("#4A90E2").unwrap(),
        )
    }

    #[test]
    fn test_labeled_box_defaults() {
        let node = sample("Users");
        assert_approx_eq!(f32, node.fill().alpha(), 0.9, epsilon = 1e-6);
        assert_eq!(node.stroke().color().to_hex(), "#2c3e50");
        assert_approx_eq!(f32, node.stroke().width(), 2.0);
        assert_eq!(node.text().weight(), FontWeight::Bold);
        assert_eq!(node.text().color().to_hex(), "#ffffff");
        assert_eq!(node.corner(), CornerStyle::Rounded { radius: 0.08 });
    }

    #[test]
    fn test_labeled_box_bounds() {
        let bounds = sample("Users").bounds();
        assert_approx_eq!(f32, bounds.min_x(), 8.5);
        assert_approx_eq!(f32, bounds.max_x(), 11.5);
        assert_approx_eq!(f32, bounds.center().y(), 2.6, epsilon = 1e-6);
    }

    #[test]
    fn test_labeled_box_single_line_at_center() {
        let centers = sample("Users").label_line_centers();
        assert_eq!(centers.len(), 1);
        assert_approx_eq!(f32, centers[0], 2.6, epsilon = 1e-5);
    }

    #[test]
    fn test_labeled_box_two_lines_straddle_center() {
        let node = sample("Users\n(Browser/Mobile)");
        let centers = node.label_line_centers();
        let step = 9.0 * 1.2 / 72.0;
        assert_approx_eq!(f32, centers[0], 2.6 - step / 2.0, epsilon = 1e-5);
        assert_approx_eq!(f32, centers[1], 2.6 + step / 2.0, epsilon = 1e-5);
    }

    #[test]
    fn test_labeled_box_rejects_zero_width() {
        let node = LabeledBox::new(
            Point::new(0.0, 0.0),
            Size::new(0.0, 0.6),
            "x",
            Color::default(),
        );
        assert_eq!(
            node.validate(),
            Err(ValidationError::NonPositiveSize {
                element: "box",
                width: 0.0,
                height: 0.6
            })
        );
    }

    #[test]
    fn test_labeled_box_rejects_bad_font_size() {
        let node = sample("x").with_font_size(-2.0);
        assert!(matches!(
            node.validate(),
            Err(ValidationError::InvalidFontSize { .. })
        ));
    }

    #[test]
    fn test_labeled_box_rejects_non_finite_origin() {
        let node = LabeledBox::new(
            Point::new(f32::NAN, 0.0),
            Size::new(1.0, 1.0),
            "x",
            Color::default(),
        );
        assert!(matches!(
            node.validate(),
            Err(ValidationError::NonFinitePoint { element: "box", .. })
        ));
    }

    #[test]
    fn test_corner_radius_clamped() {
        let small = Size::new(1.0, 0.1);
        assert_approx_eq!(f32, CornerStyle::default().radius_for(small), 0.05);
        assert_approx_eq!(f32, CornerStyle::Square.radius_for(small), 0.0);
    }

    #[test]
    fn test_labeled_box_renders_rect_and_label() {
        let svg: String = sample("Router\nExpress")
            .render_to_layers()
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect();

        assert!(svg.contains("<rect"));
        assert!(svg.contains("fill=\"#4a90e2\""));
        assert!(svg.contains("Router"));
        assert!(svg.contains("Express"));
        assert!(svg.find("data-layer=\"shape\"") < svg.find("data-layer=\"text\""));
    }

    #[test]
    fn test_labeled_box_empty_label_renders_shape_only() {
        let output = sample("").render_to_layers();
        assert_eq!(output.count(RenderLayer::Shape), 1);
        assert_eq!(output.count(RenderLayer::Text), 0);
    }

    proptest! {
        #[test]
        fn prop_label_block_centered_in_box(
            lines in 1usize..8,
            x in -20.0f32..20.0,
            y in -20.0f32..20.0,
            w in 0.1f32..10.0,
            h in 0.1f32..10.0,
            font in 4.0f32..24.0,
        ) {
            let label = vec!["line"; lines].join("\n");
            let node = LabeledBox::new(Point::new(x, y), Size::new(w, h), &label, Color::default())
                .with_font_size(font);
            let centers = node.label_line_centers();
            let center_y = y + h / 2.0;

            prop_assert_eq!(centers.len(), lines);
            let first = centers[0];
            let last = centers[lines - 1];
            prop_assert!(((first + last) / 2.0 - center_y).abs() < 1e-3);
        }
    }
}
