//! Diagrams expressed as data.
//!
//! A [`Scene`] is an ordered list of placements plus the canvas they are
//! drawn on. It does no drawing itself; [`DiagramBuilder::render_canvas`]
//! replays it onto a fresh [`Canvas`](crate::canvas::Canvas), so the same
//! scene always yields the same image.
//!
//! [`DiagramBuilder::render_canvas`]: crate::DiagramBuilder::render_canvas

use easel_core::{color::Color, geometry::Bounds};

use crate::canvas::Element;

/// An ordered sequence of placements on a fixed canvas.
///
/// # Examples
///
/// ```
/// use easel::Scene;
/// use easel::color::Color;
/// use easel::draw::Region;
/// use easel::geometry::{Bounds, Point, Size};
///
/// let scene = Scene::new(Bounds::from_extents(0.0, 20.0, 0.0, 14.0))
///     .with_description("Data layer only")
///     .with(Region::new(
///         Point::new(0.3, 9.5),
///         Size::new(19.4, 1.5),
///         Color::new("#3498DB").unwrap(),
///         0.1,
///     ));
///
/// assert_eq!(scene.elements().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Scene {
    bounds: Bounds,
    background: Color,
    description: Option<String>,
    elements: Vec<Element>,
}

impl Scene {
    /// Creates an empty scene on a white canvas.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            background: Color::new("white").unwrap_or_default(),
            description: None,
            elements: Vec::new(),
        }
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Sets the one-line summary reported after export.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a placement. Placements are drawn in the order they are added.
    pub fn with(mut self, element: impl Into<Element>) -> Self {
        self.elements.push(element.into());
        self
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

#[cfg(test)]
mod tests {
    use easel_core::{
        draw::{Arrow, LabeledBox},
        geometry::{Point, Size},
    };

    use super::*;

    #[test]
    fn test_scene_keeps_placement_order() {
        let scene = Scene::new(Bounds::from_extents(0.0, 10.0, 0.0, 10.0))
            .with(LabeledBox::new(
                Point::new(1.0, 1.0),
                Size::new(2.0, 1.0),
                "Node.js",
                Color::new("#68A063").unwrap(),
            ))
            .with(Arrow::new(
                Point::new(2.0, 2.0),
                Point::new(2.0, 4.0),
                Color::new("#3498DB").unwrap(),
            ));

        let kinds: Vec<_> = scene.elements().iter().map(Element::kind).collect();
        assert_eq!(kinds, ["box", "arrow"]);
        assert!(scene.description().is_none());
    }

    #[test]
    fn test_scene_defaults_to_white() {
        let scene = Scene::new(Bounds::from_extents(0.0, 1.0, 0.0, 1.0));
        assert_eq!(scene.background().to_hex(), "#ffffff");
    }
}
