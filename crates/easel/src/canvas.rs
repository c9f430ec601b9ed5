//! The drawing surface and its append-only draw list.
//!
//! A [`Canvas`] has fixed extents, a background color and an output
//! resolution. Elements are validated when they are added and painted in
//! the order they were added: later elements cover earlier ones. There is no
//! auto-scaling and no clipping of out-of-bounds elements beyond the image
//! edge itself.

use std::path::Path;

use log::{debug, info, trace};

use easel_core::{
    color::Color,
    draw::{AnnotationBlock, Arrow, Drawable, LabeledBox, LayeredOutput, LegendBlock, Region},
    error::ValidationError,
    geometry::Bounds,
};

use crate::{
    EaselError,
    export::{self, ExportReport, Exporter},
};

/// Any drawable that can be placed on a [`Canvas`].
#[derive(Debug, Clone)]
pub enum Element {
    Box(LabeledBox),
    Arrow(Arrow),
    Region(Region),
    Legend(LegendBlock),
    Annotation(AnnotationBlock),
}

impl Element {
    /// Returns a short name for the element kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Box(_) => "box",
            Self::Arrow(_) => "arrow",
            Self::Region(_) => "region",
            Self::Legend(_) => "legend",
            Self::Annotation(_) => "annotation",
        }
    }

    fn drawable(&self) -> &dyn Drawable {
        match self {
            Self::Box(inner) => inner,
            Self::Arrow(inner) => inner,
            Self::Region(inner) => inner,
            Self::Legend(inner) => inner,
            Self::Annotation(inner) => inner,
        }
    }
}

impl Drawable for Element {
    fn render_to_layers(&self) -> LayeredOutput {
        self.drawable().render_to_layers()
    }

    fn bounds(&self) -> Bounds {
        self.drawable().bounds()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.drawable().validate()
    }
}

impl From<LabeledBox> for Element {
    fn from(value: LabeledBox) -> Self {
        Self::Box(value)
    }
}

impl From<Arrow> for Element {
    fn from(value: Arrow) -> Self {
        Self::Arrow(value)
    }
}

impl From<Region> for Element {
    fn from(value: Region) -> Self {
        Self::Region(value)
    }
}

impl From<LegendBlock> for Element {
    fn from(value: LegendBlock) -> Self {
        Self::Legend(value)
    }
}

impl From<AnnotationBlock> for Element {
    fn from(value: AnnotationBlock) -> Self {
        Self::Annotation(value)
    }
}

/// A bounded drawing surface for one render pass.
///
/// # Examples
///
/// ```
/// use easel::canvas::Canvas;
/// use easel::color::Color;
/// use easel::draw::LabeledBox;
/// use easel::geometry::{Bounds, Point, Size};
///
/// let mut canvas = Canvas::new(
///     Bounds::from_extents(0.0, 20.0, 0.0, 14.0),
///     Color::new("white").unwrap(),
///     300,
/// )
/// .unwrap();
///
/// canvas
///     .draw_box(LabeledBox::new(
///         Point::new(8.5, 2.2),
///         Size::new(3.0, 0.8),
///         "Users\n(Browser/Mobile)",
///         Color::new("#4A90E2").unwrap(),
///     ))
///     .unwrap();
///
/// assert_eq!(canvas.elements().len(), 1);
/// assert_eq!(canvas.pixel_size(), (6000, 4200));
/// ```
#[derive(Debug, Clone)]
pub struct Canvas {
    bounds: Bounds,
    background: Color,
    dpi: u32,
    elements: Vec<Element>,
}

impl Canvas {
    /// Creates an empty canvas.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if the extents are empty, inverted or not
    /// finite, if `dpi` is zero, or if either extent rounds to zero pixels or
    /// overflows a `u32`.
    pub fn new(bounds: Bounds, background: Color, dpi: u32) -> Result<Self, ValidationError> {
        let finite = [bounds.min_x(), bounds.max_x(), bounds.min_y(), bounds.max_y()]
            .iter()
            .all(|value| value.is_finite());
        if !finite || bounds.max_x() <= bounds.min_x() || bounds.max_y() <= bounds.min_y() {
            return Err(ValidationError::InvalidCanvasBounds {
                min_x: bounds.min_x(),
                max_x: bounds.max_x(),
                min_y: bounds.min_y(),
                max_y: bounds.max_y(),
            });
        }
        if dpi == 0 {
            return Err(ValidationError::InvalidResolution { dpi });
        }
        let in_range = |extent: f32| (1.0..=f64::from(u32::MAX)).contains(&pixels(extent, dpi));
        if !in_range(bounds.width()) || !in_range(bounds.height()) {
            return Err(ValidationError::InvalidPixelSize {
                width: bounds.width(),
                height: bounds.height(),
                dpi,
            });
        }

        info!(
            width = bounds.width(),
            height = bounds.height(),
            dpi;
            "Canvas created"
        );

        Ok(Self {
            bounds,
            background,
            dpi,
            elements: Vec::new(),
        })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Returns the draw list in paint order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns the output size in pixels: each extent times the resolution, rounded.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            pixels(self.bounds.width(), self.dpi) as u32,
            pixels(self.bounds.height(), self.dpi) as u32,
        )
    }

    /// Validates an element and appends it to the draw list.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for degenerate geometry; the draw list is
    /// left unchanged.
    pub fn add(&mut self, element: impl Into<Element>) -> Result<(), ValidationError> {
        let element = element.into();
        element.validate()?;

        let bounds = element.bounds();
        if !self.bounds.intersects(bounds) {
            debug!(kind = element.kind(), index = self.elements.len(); "Element lies outside the canvas");
        }
        trace!(kind = element.kind(), element:?; "Element added");

        self.elements.push(element);
        Ok(())
    }

    pub fn draw_box(&mut self, labeled_box: LabeledBox) -> Result<(), ValidationError> {
        self.add(labeled_box)
    }

    pub fn draw_arrow(&mut self, arrow: Arrow) -> Result<(), ValidationError> {
        self.add(arrow)
    }

    pub fn draw_region(&mut self, region: Region) -> Result<(), ValidationError> {
        self.add(region)
    }

    pub fn draw_legend(&mut self, legend: LegendBlock) -> Result<(), ValidationError> {
        self.add(legend)
    }

    pub fn draw_annotation(&mut self, annotation: AnnotationBlock) -> Result<(), ValidationError> {
        self.add(annotation)
    }

    /// Renders the draw list to an SVG document string.
    pub fn render_svg(&self) -> String {
        let svg = export::svg::render_document(self).to_string();
        trace!(svg_len = svg.len(); "SVG rendered");
        svg
    }

    /// Rasterizes the canvas and writes it to `path` as a PNG.
    ///
    /// The image is encoded into a temporary file next to `path`, which then
    /// replaces `path`. On failure `path` is left as it was.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::Io`] if rasterization, encoding or any
    /// filesystem step fails.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<ExportReport, EaselError> {
        let path = path.as_ref();
        let (width, height) = self.pixel_size();
        info!(path:? = path, width, height, elements = self.elements.len(); "Exporting canvas");

        let mut exporter = export::png::Png::new(path, self.dpi);
        exporter.export_canvas(self)?;

        Ok(ExportReport::new(
            path.to_path_buf(),
            width,
            height,
            self.dpi,
            self.elements.len(),
        ))
    }
}

/// Rounded pixel count of `extent` units at `dpi`.
fn pixels(extent: f32, dpi: u32) -> f64 {
    (f64::from(extent) * f64::from(dpi)).round()
}

#[cfg(test)]
mod tests {
    use easel_core::{
        draw::{LegendBuilder, StrokeStyle},
        geometry::{Point, Size},
    };

    use super::*;

    fn canvas() -> Canvas {
        Canvas::new(
            Bounds::from_extents(0.0, 20.0, 0.0, 14.0),
            Color::new("white").unwrap(),
            300,
        )
        .unwrap()
    }

    fn color(hex: &str) -> Color {
        Color::new(hex).unwrap()
    }

    #[test]
    fn test_canvas_rejects_inverted_bounds() {
        let result = Canvas::new(Bounds::from_extents(5.0, 1.0, 0.0, 1.0), Color::default(), 300);
        assert!(matches!(result, Err(ValidationError::InvalidCanvasBounds { .. })));
    }

    #[test]
    fn test_canvas_rejects_zero_dpi() {
        let result = Canvas::new(Bounds::from_extents(0.0, 1.0, 0.0, 1.0), Color::default(), 0);
        assert_eq!(result.unwrap_err(), ValidationError::InvalidResolution { dpi: 0 });
    }

    #[test]
    fn test_canvas_rejects_extent_below_one_pixel() {
        let result = Canvas::new(Bounds::from_extents(0.0, 0.001, 0.0, 1.0), Color::default(), 60);
        assert_eq!(
            result.unwrap_err(),
            ValidationError::InvalidPixelSize {
                width: 0.001,
                height: 1.0,
                dpi: 60
            }
        );
    }

    #[test]
    fn test_canvas_rejects_pixel_overflow() {
        let result = Canvas::new(Bounds::from_extents(0.0, 1.0e9, 0.0, 1.0), Color::default(), 300);
        assert!(matches!(result, Err(ValidationError::InvalidPixelSize { .. })));
    }

    #[test]
    fn test_canvas_pixel_size_rounds() {
        let canvas = Canvas::new(Bounds::from_extents(0.0, 2.5, 0.0, 1.3), Color::default(), 72).unwrap();
        assert_eq!(canvas.pixel_size(), (180, 94));
    }

    #[test]
    fn test_canvas_preserves_insertion_order() {
        let mut canvas = canvas();
        canvas
            .draw_region(Region::new(
                Point::new(0.3, 5.7),
                Size::new(19.4, 3.3),
                color("#68A063"),
                0.1,
            ))
            .unwrap();
        canvas
            .draw_box(LabeledBox::new(
                Point::new(0.5, 6.4),
                Size::new(2.8, 0.8),
                "Express.js\nRouter",
                color("#5FA04E"),
            ))
            .unwrap();
        canvas
            .draw_arrow(
                Arrow::new(Point::new(10.0, 7.2), Point::new(10.0, 10.0), color("#3498DB"))
                    .with_style(StrokeStyle::Dotted),
            )
            .unwrap();

        let kinds: Vec<_> = canvas.elements().iter().map(Element::kind).collect();
        assert_eq!(kinds, ["region", "box", "arrow"]);
    }

    #[test]
    fn test_canvas_add_rejects_and_leaves_list_unchanged() {
        let mut canvas = canvas();
        let err = canvas
            .draw_arrow(Arrow::new(Point::new(1.0, 1.0), Point::new(1.0, 1.0), color("red")))
            .unwrap_err();
        assert!(matches!(err, ValidationError::CoincidentEndpoints { .. }));
        assert!(canvas.elements().is_empty());
    }

    #[test]
    fn test_canvas_accepts_out_of_bounds_element() {
        let mut canvas = canvas();
        let far = LabeledBox::new(Point::new(40.0, 40.0), Size::new(1.0, 1.0), "far", color("red"));
        assert!(canvas.draw_box(far).is_ok());
    }

    #[test]
    fn test_canvas_all_element_kinds() {
        let mut canvas = canvas();
        let legend = LegendBuilder::new(Point::new(0.2, 0.2), 3)
            .entry(color("#E34F26"), "Frontend")
            .build()
            .unwrap();
        canvas.draw_legend(legend).unwrap();
        canvas
            .draw_annotation(AnnotationBlock::new(Point::new(10.0, 0.5), "Stickly"))
            .unwrap();

        let kinds: Vec<_> = canvas.elements().iter().map(Element::kind).collect();
        assert_eq!(kinds, ["legend", "annotation"]);
    }
}
