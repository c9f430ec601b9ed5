//! Text styling, multi-line layout and measurement.
//!
//! # Overview
//!
//! - [`TextDefinition`] - Reusable text style (family, size, weight, slant, color, alignment)
//! - [`TextBlock`] - Line layout of a multi-line string: per-line step and line centers
//! - [`Text`] - Content paired with a [`TextDefinition`], measurable and renderable
//!
//! # Layout
//!
//! Lines are separated by `\n` and stacked with a fixed step of
//! `font_size * 1.2` points. The whole block is centered on the requested
//! point, so the first line center sits at
//! `center - block_height / 2 + step / 2`.
//!
//! ```
//! # use easel_core::draw::TextBlock;
//! let block = TextBlock::new("Router\n(React Router)", 9.0);
//! assert_eq!(block.line_count(), 2);
//!
//! let centers = block.line_centers(5.0);
//! assert!((centers[0] + centers[1] - 10.0).abs() < 1e-5);
//! ```
//!
//! Widths are measured with cosmic-text against the installed system fonts.

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Style, Weight};
use log::{debug, info};
use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    color::Color,
    error::{ValidationError, check_font_size},
    geometry::{POINTS_PER_UNIT, Point, Size, points_to_units},
};

/// Line spacing as a multiple of the font size.
const LINE_SPACING: f32 = 1.2;

/// Average glyph advance relative to the font size, used when no font could
/// measure a string.
const FALLBACK_ADVANCE: f32 = 0.55;

/// Stroke thickness of a font.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Returns the SVG `font-weight` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Upright or italic glyphs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

impl FontSlant {
    /// Returns the SVG `font-style` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }
}

/// Which side of the anchor the text extends from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    /// Text starts at the anchor
    Left,
    /// Text is centered on the anchor
    #[default]
    Center,
    /// Text ends at the anchor
    Right,
}

impl HorizontalAlign {
    /// Returns the SVG `text-anchor` value
    pub fn text_anchor(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }

    /// Returns the left edge of a run of the given width anchored at `x`.
    pub fn left_edge(self, x: f32, width: f32) -> f32 {
        match self {
            Self::Left => x,
            Self::Center => x - width / 2.0,
            Self::Right => x - width,
        }
    }
}

/// Defines the visual style for text elements in diagrams.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"sans-serif"` |
/// | Font size | `10` pt |
/// | Weight | normal |
/// | Slant | normal |
/// | Color | black |
/// | Alignment | center |
///
/// # Examples
///
/// ```
/// # use easel_core::draw::{FontWeight, TextDefinition};
/// # use easel_core::color::Color;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let style = TextDefinition::new()
///     .with_font_size(9.0)
///     .with_weight(FontWeight::Bold)
///     .with_color(Color::new("white")?);
/// assert_eq!(style.font_size(), 9.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    weight: FontWeight,
    slant: FontSlant,
    color: Color,
    align: HorizontalAlign,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the font family name.
    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn slant(&self) -> FontSlant {
        self.slant
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn align(&self) -> HorizontalAlign {
        self.align
    }

    /// Sets the font family (e.g. `"sans-serif"`, `"monospace"`, `"DejaVu Sans"`).
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }

    pub fn set_slant(&mut self, slant: FontSlant) {
        self.slant = slant;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_align(&mut self, align: HorizontalAlign) {
        self.align = align;
    }

    pub fn with_font_family(mut self, family: &str) -> Self {
        self.set_font_family(family);
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_slant(mut self, slant: FontSlant) -> Self {
        self.slant = slant;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_align(mut self, align: HorizontalAlign) -> Self {
        self.align = align;
        self
    }

    /// Returns the font size in canvas units.
    pub fn font_size_units(&self) -> f32 {
        points_to_units(self.font_size)
    }

    /// Rejects a non-positive font size.
    pub fn validate(&self, element: &'static str) -> Result<(), ValidationError> {
        check_font_size(element, self.font_size)
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: String::from("sans-serif"),
            font_size: 10.0,
            weight: FontWeight::default(),
            slant: FontSlant::default(),
            color: Color::default(),
            align: HorizontalAlign::default(),
        }
    }
}

/// Vertical layout of a multi-line string.
///
/// The layout depends only on the number of lines and the font size, never
/// on the glyphs themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    lines: Vec<String>,
    line_step: f32,
}

impl TextBlock {
    /// Splits `content` on `\n` and lays it out for a font of `font_size` points.
    ///
    /// Empty content yields a block with no lines.
    pub fn new(content: &str, font_size: f32) -> Self {
        let lines = if content.is_empty() {
            Vec::new()
        } else {
            content.split('\n').map(str::to_string).collect()
        };
        Self {
            lines,
            line_step: font_size * LINE_SPACING / POINTS_PER_UNIT,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the distance between consecutive line centers in canvas units.
    pub fn line_step(&self) -> f32 {
        self.line_step
    }

    /// Returns the total height of the block in canvas units.
    pub fn block_height(&self) -> f32 {
        self.line_step * self.lines.len() as f32
    }

    /// Returns the vertical center of every line when the block is centered
    /// on `center_y`.
    pub fn line_centers(&self, center_y: f32) -> Vec<f32> {
        let first = center_y - self.block_height() / 2.0 + self.line_step / 2.0;
        (0..self.lines.len())
            .map(|index| first + index as f32 * self.line_step)
            .collect()
    }
}

/// A renderable text element combining content with styling.
///
/// # Examples
///
/// ```
/// # use easel_core::draw::{Text, TextDefinition};
/// let style = TextDefinition::new().with_font_size(12.0);
/// let text = Text::new(&style, "Socket.IO\nServer");
///
/// assert_eq!(text.block().line_count(), 2);
/// let size = text.calculate_size();
/// assert!(size.width() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct Text<'a> {
    definition: &'a TextDefinition,
    content: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(definition: &'a TextDefinition, content: &'a str) -> Self {
        Self {
            definition,
            content,
        }
    }

    /// Returns the text content of this element.
    pub fn content(&self) -> &str {
        self.content
    }

    /// Returns the line layout of this text.
    pub fn block(&self) -> TextBlock {
        TextBlock::new(self.content, self.definition.font_size())
    }

    /// Returns the width of the widest line in canvas units.
    pub fn width(&self) -> f32 {
        let manager = TEXT_MANAGER.get_or_init(TextManager::new);
        self.content
            .split('\n')
            .map(|line| manager.line_width(line, self.definition))
            .fold(0.0, f32::max)
    }

    /// Calculates the extent of the whole block in canvas units.
    pub fn calculate_size(&self) -> Size {
        if self.content.is_empty() {
            return Size::default();
        }
        Size::new(self.width(), self.block().block_height())
    }

    /// Renders the text with its block centered vertically on `anchor.y()`
    /// and aligned horizontally on `anchor.x()` according to the definition.
    ///
    /// Returns `None` when there is nothing to draw.
    pub fn render(&self, anchor: Point) -> Option<svg_element::Text> {
        let block = self.block();
        if block.is_empty() {
            return None;
        }

        let definition = self.definition;
        let mut rendered = svg_element::Text::new("")
            .set("text-anchor", definition.align().text_anchor())
            .set("dominant-baseline", "central")
            .set("font-family", definition.font_family())
            .set("font-size", definition.font_size_units())
            .set("font-weight", definition.weight().to_svg_value())
            .set("font-style", definition.slant().to_svg_value())
            .set("fill", definition.color())
            .set("fill-opacity", definition.color().alpha());

        for (line, y) in block.lines().iter().zip(block.line_centers(anchor.y())) {
            let tspan = svg_element::TSpan::new("")
                .set("x", anchor.x())
                .set("y", y)
                .add(SvgText::new(line.as_str()));
            rendered = rendered.add(tspan);
        }

        Some(rendered)
    }
}

/// Measures text with a shared cosmic-text `FontSystem`.
///
/// Building a `FontSystem` scans the system fonts, so one instance is kept
/// for the whole process.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Returns the advance width of a single line in canvas units.
    fn line_width(&self, line: &str, text_def: &TextDefinition) -> f32 {
        if line.is_empty() {
            return 0.0;
        }

        let font_size = text_def.font_size();
        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let metrics = Metrics::new(font_size, font_size * LINE_SPACING);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new()
            .family(family_for(text_def.font_family()))
            .weight(match text_def.weight() {
                FontWeight::Normal => Weight::NORMAL,
                FontWeight::Bold => Weight::BOLD,
            })
            .style(match text_def.slant() {
                FontSlant::Normal => Style::Normal,
                FontSlant::Italic => Style::Italic,
            });

        buffer.set_size(None, None);
        buffer.set_text(line, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let width = buffer
            .layout_runs()
            .filter_map(|run| run.glyphs.last().map(|glyph| glyph.x + glyph.w))
            .fold(0.0, f32::max);

        let width = if width > 0.0 {
            width
        } else {
            debug!(line = line; "No font could measure text, estimating width");
            line.chars().count() as f32 * font_size * FALLBACK_ADVANCE
        };

        points_to_units(width)
    }
}

/// Maps CSS generic family names onto cosmic-text families.
fn family_for(name: &str) -> Family<'_> {
    match name {
        "sans-serif" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        other => Family::Name(other),
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
