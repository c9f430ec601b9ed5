//! Color keys built from ordered (color, label) pairs.
//!
//! Entries are laid out in reading order: left to right across the columns,
//! then top to bottom. Each column is as wide as its widest label plus the
//! swatch and gaps, so columns may differ in width.
//!
//! ```text
//!  ┌──────────────────────────────────────────────┐
//!  │                  Components                  │
//!  │ ▆ Frontend   ▆ Backend (Server)  ▆ REST API  │
//!  │ ▆ WebSocket  ▆ Data Storage                  │
//!  └──────────────────────────────────────────────┘
//! ```

use log::debug;
use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    color::Color,
    draw::{
        Drawable, FontWeight, HorizontalAlign, LayeredOutput, RenderLayer, StrokeDefinition, Text,
        TextDefinition,
    },
    error::{ValidationError, check_point},
    geometry::{Bounds, Point, Size},
};

const ELEMENT: &str = "legend";

/// Inner padding of the frame, in canvas units.
const FRAME_PADDING: f32 = 0.1;

/// Frame corner radius, in canvas units.
const FRAME_RADIUS: f32 = 0.05;

/// Opacity of the white frame.
const FRAME_ALPHA: f32 = 0.95;

/// One swatch and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    color: Color,
    label: String,
}

impl LegendEntry {
    pub fn new(color: Color, label: &str) -> Self {
        Self {
            color,
            label: label.to_string(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Collects legend entries and lays them out.
///
/// # Examples
///
/// ```
/// # use easel_core::color::Color;
/// # use easel_core::draw::LegendBuilder;
/// # use easel_core::geometry::Point;
/// let legend = LegendBuilder::new(Point::new(0.2, 0.2), 3)
///     .title("Components")
///     .entry(Color::new("#E34F26").unwrap(), "Frontend (Client)")
///     .entry(Color::new("#68A063").unwrap(), "Backend (Server)")
///     .build()
///     .unwrap();
///
/// assert_eq!(legend.cells().len(), 2);
/// assert_eq!(legend.rows(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct LegendBuilder {
    anchor: Point,
    columns: usize,
    title: Option<String>,
    entries: Vec<LegendEntry>,
    text: TextDefinition,
    title_text: TextDefinition,
}

impl LegendBuilder {
    /// Starts a legend whose frame's top-left corner is `anchor`.
    pub fn new(anchor: Point, columns: usize) -> Self {
        Self {
            anchor,
            columns,
            title: None,
            entries: Vec::new(),
            text: TextDefinition::new()
                .with_font_size(9.0)
                .with_align(HorizontalAlign::Left),
            title_text: TextDefinition::new()
                .with_font_size(10.0)
                .with_weight(FontWeight::Bold),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Appends an entry. Entries keep insertion order; duplicates are kept.
    pub fn entry(mut self, color: Color, label: &str) -> Self {
        self.entries.push(LegendEntry::new(color, label));
        self
    }

    /// Sets the entry font size in points.
    pub fn font_size(mut self, size: f32) -> Self {
        self.text.set_font_size(size);
        self
    }

    /// Sets the title font size in points.
    pub fn title_font_size(mut self, size: f32) -> Self {
        self.title_text.set_font_size(size);
        self
    }

    /// Validates the entries and computes the layout.
    pub fn build(self) -> Result<LegendBlock, ValidationError> {
        check_point(ELEMENT, self.anchor)?;
        if self.columns == 0 {
            return Err(ValidationError::NoLegendColumns);
        }
        if self.entries.is_empty() {
            return Err(ValidationError::EmptyLegend);
        }
        self.text.validate(ELEMENT)?;
        if self.title.is_some() {
            self.title_text.validate(ELEMENT)?;
        }

        let layout = Layout::compute(&self);
        debug!(
            entries = self.entries.len(),
            columns = self.columns,
            rows = layout.rows;
            "Legend laid out"
        );

        Ok(LegendBlock {
            anchor: self.anchor,
            columns: self.columns,
            title: self.title,
            entries: self.entries,
            text: self.text,
            title_text: self.title_text,
            layout,
        })
    }
}

/// Computed positions of every part of a legend.
#[derive(Debug, Clone, PartialEq)]
struct Layout {
    rows: usize,
    swatch: Size,
    swatch_gap: f32,
    title_center_y: Option<f32>,
    cells: Vec<Point>,
    size: Size,
}

impl Layout {
    fn compute(builder: &LegendBuilder) -> Self {
        let font = builder.text.font_size_units();
        let swatch = Size::new(2.0 * font, 0.7 * font);
        let swatch_gap = 0.8 * font;
        let column_gap = 2.0 * font;
        let row_height = Text::new(&builder.text, "x").block().line_step() + 0.5 * font;

        let count = builder.entries.len();
        let used_columns = builder.columns.min(count);
        let rows = count.div_ceil(builder.columns);

        let mut column_widths = vec![0.0_f32; used_columns];
        for (index, entry) in builder.entries.iter().enumerate() {
            let label_width = Text::new(&builder.text, &entry.label).width();
            let column = index % builder.columns;
            column_widths[column] =
                column_widths[column].max(swatch.width() + swatch_gap + label_width);
        }
        let content_width =
            column_widths.iter().sum::<f32>() + column_gap * (used_columns - 1) as f32;

        let (title_width, title_height) = match builder.title.as_deref() {
            Some(title) => {
                let text = Text::new(&builder.title_text, title);
                (text.width(), text.block().block_height())
            }
            None => (0.0, 0.0),
        };
        let title_center_y = builder
            .title
            .as_ref()
            .map(|_| builder.anchor.y() + FRAME_PADDING + title_height / 2.0);

        let rows_top = builder.anchor.y() + FRAME_PADDING + title_height;
        let cells = (0..count)
            .map(|index| {
                let row = index / builder.columns;
                let column = index % builder.columns;
                let x = builder.anchor.x()
                    + FRAME_PADDING
                    + column_widths[..column].iter().sum::<f32>()
                    + column_gap * column as f32;
                let row_center = rows_top + row_height * (row as f32 + 0.5);
                Point::new(x, row_center - swatch.height() / 2.0)
            })
            .collect();

        let size = Size::new(
            content_width.max(title_width) + 2.0 * FRAME_PADDING,
            title_height + row_height * rows as f32 + 2.0 * FRAME_PADDING,
        );

        Self {
            rows,
            swatch,
            swatch_gap,
            title_center_y,
            cells,
            size,
        }
    }
}

/// A laid-out legend, ready to draw.
#[derive(Debug, Clone)]
pub struct LegendBlock {
    anchor: Point,
    columns: usize,
    title: Option<String>,
    entries: Vec<LegendEntry>,
    text: TextDefinition,
    title_text: TextDefinition,
    layout: Layout,
}

impl LegendBlock {
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.layout.rows
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// Returns the top-left corner of each entry's swatch, in insertion order.
    pub fn cells(&self) -> &[Point] {
        &self.layout.cells
    }

    /// Returns the extent of the whole frame.
    pub fn size(&self) -> Size {
        self.layout.size
    }
}

impl Drawable for LegendBlock {
    fn render_to_layers(&self) -> LayeredOutput {
        let mut output = LayeredOutput::new();
        let bounds = self.bounds();
        let layout = &self.layout;

        let frame_edge = StrokeDefinition::new(
            Color::new("#cccccc").unwrap_or_default().with_alpha(FRAME_ALPHA),
            1.0,
        );
        let frame = svg_element::Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("rx", FRAME_RADIUS)
            .set("ry", FRAME_RADIUS)
            .set("fill", "#ffffff")
            .set("fill-opacity", FRAME_ALPHA);
        output.add_to_layer(RenderLayer::Background, Box::new(apply_stroke!(frame, &frame_edge)));

        if let (Some(title), Some(center_y)) = (self.title.as_deref(), layout.title_center_y) {
            let anchor = Point::new(bounds.center().x(), center_y);
            if let Some(text) = Text::new(&self.title_text, title).render(anchor) {
                output.add_to_layer(RenderLayer::Text, Box::new(text));
            }
        }

        for (entry, cell) in self.entries.iter().zip(&layout.cells) {
            let swatch = svg_element::Rectangle::new()
                .set("x", cell.x())
                .set("y", cell.y())
                .set("width", layout.swatch.width())
                .set("height", layout.swatch.height())
                .set("fill", entry.color)
                .set("fill-opacity", entry.color.alpha());
            output.add_to_layer(RenderLayer::Shape, Box::new(swatch));

            let label_anchor = Point::new(
                cell.x() + layout.swatch.width() + layout.swatch_gap,
                cell.y() + layout.swatch.height() / 2.0,
            );
            if let Some(text) = Text::new(&self.text, &entry.label).render(label_anchor) {
                output.add_to_layer(RenderLayer::Text, Box::new(text));
            }
        }

        output
    }

    fn bounds(&self) -> Bounds {
        self.anchor.to_bounds(self.layout.size)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_point(ELEMENT, self.anchor)?;
        if self.columns == 0 {
            return Err(ValidationError::NoLegendColumns);
        }
        if self.entries.is_empty() {
            return Err(ValidationError::EmptyLegend);
        }
        if !self.layout.size.is_positive() {
            return Err(ValidationError::NonPositiveSize {
                element: ELEMENT,
                width: self.layout.size.width(),
                height: self.layout.size.height(),
            });
        }
        self.text.validate(ELEMENT)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn color(hex: &str) -> Color {
        Color::new(hex).unwrap()
    }

    fn five_entries(columns: usize) -> LegendBuilder {
        LegendBuilder::new(Point::new(0.2, 0.2), columns)
            .title("Components")
            .entry(color("#E34F26"), "Frontend (Client)")
            .entry(color("#68A063"), "Backend (Server)")
            .entry(color("#5FA04E"), "REST API")
            .entry(color("#FF6B6B"), "WebSocket (Real-time)")
            .entry(color("#3498DB"), "Data Storage")
    }

    #[test]
    fn test_legend_rejects_zero_columns() {
        let result = LegendBuilder::new(Point::default(), 0)
            .entry(color("red"), "a")
            .build();
        assert_eq!(result.unwrap_err(), ValidationError::NoLegendColumns);
    }

    #[test]
    fn test_legend_rejects_empty() {
        let result = LegendBuilder::new(Point::default(), 3).title("Components").build();
        assert_eq!(result.unwrap_err(), ValidationError::EmptyLegend);
    }

    #[test]
    fn test_legend_preserves_insertion_order_and_duplicates() {
        let legend = LegendBuilder::new(Point::default(), 2)
            .entry(color("red"), "b")
            .entry(color("blue"), "a")
            .entry(color("red"), "b")
            .build()
            .unwrap();
        let labels: Vec<_> = legend.entries().iter().map(LegendEntry::label).collect();
        assert_eq!(labels, ["b", "a", "b"]);
    }

    #[test]
    fn test_legend_reading_order_layout() {
        let legend = five_entries(3).build().unwrap();
        let cells = legend.cells();

        assert_eq!(legend.rows(), 2);
        assert_eq!(cells.len(), 5);

        // First row runs left to right at one height.
        assert_approx_eq!(f32, cells[0].y(), cells[1].y());
        assert_approx_eq!(f32, cells[1].y(), cells[2].y());
        assert!(cells[0].x() < cells[1].x());
        assert!(cells[1].x() < cells[2].x());

        // Second row starts again at the first column, below.
        assert_approx_eq!(f32, cells[3].x(), cells[0].x());
        assert_approx_eq!(f32, cells[4].x(), cells[1].x());
        assert!(cells[3].y() > cells[0].y());
    }

    #[test]
    fn test_legend_single_column() {
        let legend = five_entries(1).build().unwrap();
        assert_eq!(legend.rows(), 5);
        for cell in legend.cells() {
            assert_approx_eq!(f32, cell.x(), legend.cells()[0].x());
        }
    }

    #[test]
    fn test_legend_cells_inside_frame() {
        let legend = five_entries(3).build().unwrap();
        let bounds = legend.bounds();
        assert_approx_eq!(f32, bounds.min_x(), 0.2);
        assert_approx_eq!(f32, bounds.min_y(), 0.2);
        for cell in legend.cells() {
            assert!(cell.x() > bounds.min_x() && cell.x() < bounds.max_x());
            assert!(cell.y() > bounds.min_y() && cell.y() < bounds.max_y());
        }
    }

    #[test]
    fn test_legend_title_adds_height() {
        let titled = five_entries(3).build().unwrap();
        let untitled = LegendBuilder::new(Point::new(0.2, 0.2), 3)
            .entry(color("#E34F26"), "Frontend (Client)")
            .entry(color("#68A063"), "Backend (Server)")
            .entry(color("#5FA04E"), "REST API")
            .entry(color("#FF6B6B"), "WebSocket (Real-time)")
            .entry(color("#3498DB"), "Data Storage")
            .build()
            .unwrap();
        assert!(titled.size().height() > untitled.size().height());
        assert!(untitled.title().is_none());
    }

    #[test]
    fn test_legend_render_layers() {
        let output = five_entries(3).build().unwrap().render_to_layers();
        assert_eq!(output.count(RenderLayer::Background), 1);
        assert_eq!(output.count(RenderLayer::Shape), 5);
        // five labels plus the title
        assert_eq!(output.count(RenderLayer::Text), 6);
    }
}
