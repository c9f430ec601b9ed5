//! Translucent background rectangles that group other drawables.
//!
//! A region has no notion of the drawables it groups; it is simply painted
//! first. Add it to the canvas before the boxes it should sit beneath.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{Drawable, FontWeight, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextDefinition},
    error::{ValidationError, check_alpha, check_line_width, check_point},
    geometry::{Bounds, Point, Size},
};

const ELEMENT: &str = "region";

/// Gap between the region's top edge and its caption, in canvas units.
const CAPTION_INSET: f32 = 0.05;

/// Corner radius of every region, in canvas units.
const CORNER_RADIUS: f32 = 0.1;

/// A low-alpha rounded rectangle with an optional caption near its top edge.
///
/// # Examples
///
/// ```
/// # use easel_core::color::Color;
/// # use easel_core::draw::{Drawable, Region};
/// # use easel_core::geometry::{Point, Size};
/// let backend = Region::new(
///     Point::new(0.3, 5.7),
///     Size::new(19.4, 3.3),
///     Color::new("#68A063").unwrap(),
///     0.1,
/// )
/// .with_caption("BACKEND (Node.js + Express.js)");
///
/// assert!(backend.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    top_left: Point,
    size: Size,
    fill: Color,
    alpha: f32,
    edge: Color,
    edge_width: f32,
    caption: Option<String>,
    caption_text: TextDefinition,
}

impl Region {
    /// Creates a region outlined in `#2C3E50`, with the edge sharing the fill's alpha.
    pub fn new(top_left: Point, size: Size, fill: Color, alpha: f32) -> Self {
        Self {
            top_left,
            size,
            fill,
            alpha,
            edge: Color::new("#2C3E50").unwrap_or_default(),
            edge_width: 2.0,
            caption: None,
            caption_text: TextDefinition::new()
                .with_font_size(11.0)
                .with_weight(FontWeight::Bold)
                .with_color(fill.with_alpha(1.0)),
        }
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    pub fn with_caption(mut self, caption: &str) -> Self {
        self.caption = Some(caption.to_string());
        self
    }

    pub fn with_edge_color(mut self, color: Color) -> Self {
        self.edge = color;
        self
    }

    /// Sets the caption font size in points.
    pub fn with_caption_font_size(mut self, size: f32) -> Self {
        self.caption_text.set_font_size(size);
        self
    }

    /// Returns the point the caption is centered on.
    pub fn caption_anchor(&self) -> Point {
        let bounds = self.bounds();
        let block = Text::new(&self.caption_text, self.caption.as_deref().unwrap_or_default()).block();
        Point::new(
            bounds.center().x(),
            bounds.min_y() + CAPTION_INSET + block.block_height() / 2.0,
        )
    }
}

impl Drawable for Region {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = self.bounds();
        let radius = CORNER_RADIUS.min(self.size.width() / 2.0).min(self.size.height() / 2.0);
        let stroke = StrokeDefinition::new(self.edge.with_alpha(self.alpha), self.edge_width);

        let rect = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", radius)
            .set("ry", radius)
            .set("fill", self.fill)
            .set("fill-opacity", self.alpha);
        output.add_to_layer(RenderLayer::Background, Box::new(apply_stroke!(rect, &stroke)));

        if let Some(caption) = self.caption.as_deref() {
            let anchor = self.caption_anchor();
            if let Some(text) = Text::new(&self.caption_text, caption).render(anchor) {
                output.add_to_layer(RenderLayer::Text, Box::new(text));
            }
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
        check_alpha(ELEMENT, self.alpha)?;
        check_line_width(ELEMENT, self.edge_width)?;
        if self.caption.is_some() {
            self.caption_text.validate(ELEMENT)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn frontend() -> Region {
        Region::new(
            Point::new(0.3, 3.4),
            Size::new(19.4, 1.8),
            Color::new("#E34F26").unwrap(),
            0.1,
        )
    }

    #[test]
    fn test_region_rejects_alpha_out_of_range() {
        let region = Region::new(Point::new(0.0, 0.0), Size::new(1.0, 1.0), Color::default(), 1.5);
        assert_eq!(
            region.validate(),
            Err(ValidationError::InvalidAlpha {
                element: "region",
                alpha: 1.5
            })
        );
    }

    #[test]
    fn test_region_rejects_negative_height() {
        let region = Region::new(Point::new(0.0, 0.0), Size::new(1.0, -1.0), Color::default(), 0.1);
        assert!(matches!(
            region.validate(),
            Err(ValidationError::NonPositiveSize { element: "region", .. })
        ));
    }

    #[test]
    fn test_region_edge_and_fill_share_alpha() {
        let svg: String = frontend()
            .render_to_layers()
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect();
        assert!(svg.contains("fill-opacity=\"0.1\""));
        assert!(svg.contains("stroke-opacity=\"0.1\""));
        assert!(svg.contains("stroke=\"#2c3e50\""));
    }

    #[test]
    fn test_region_caption_in_fill_color() {
        let region = frontend().with_caption("FRONTEND");
        let output = region.render_to_layers();
        assert_eq!(output.count(RenderLayer::Background), 1);
        assert_eq!(output.count(RenderLayer::Text), 1);

        let svg: String = output.render().iter().map(|node| node.to_string()).collect();
        assert!(svg.contains("FRONTEND"));
        assert!(svg.contains("fill=\"#e34f26\""));
        assert!(svg.contains("fill-opacity=\"1\""));
    }

    #[test]
    fn test_region_caption_near_top_edge() {
        let region = frontend().with_caption("FRONTEND");
        let anchor = region.caption_anchor();
        assert_approx_eq!(f32, anchor.x(), 10.0, epsilon = 1e-5);
        assert!(anchor.y() > 3.4);
        assert!(anchor.y() < 3.4 + 0.4);
    }

    #[test]
    fn test_region_without_caption() {
        let output = frontend().render_to_layers();
        assert_eq!(output.count(RenderLayer::Text), 0);
    }
}
