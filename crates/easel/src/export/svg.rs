//! Flattening of a canvas into one SVG document.
//!
//! The document's `viewBox` is expressed in canvas units and its `width` and
//! `height` attributes in pixels, so the rasterizer scales one unit to `dpi`
//! pixels. Each element becomes a `<g data-element=".." data-index="..">`
//! group in draw-list order.

use log::debug;
use svg::{Document, node::element as svg_element};

use easel_core::draw::Drawable;

use crate::canvas::Canvas;

/// Builds the SVG document for `canvas`.
pub(crate) fn render_document(canvas: &Canvas) -> Document {
    let bounds = canvas.bounds();
    let (width, height) = canvas.pixel_size();

    let mut doc = Document::new()
        .set(
            "viewBox",
            format!(
                "{} {} {} {}",
                bounds.min_x(),
                bounds.min_y(),
                bounds.width(),
                bounds.height()
            ),
        )
        .set("width", width)
        .set("height", height);

    let background = canvas.background();
    let rect = svg_element::Rectangle::new()
        .set("x", bounds.min_x())
        .set("y", bounds.min_y())
        .set("width", bounds.width())
        .set("height", bounds.height())
        .set("fill", background)
        .set("fill-opacity", background.alpha());
    doc = doc.add(rect);

    for (index, element) in canvas.elements().iter().enumerate() {
        let mut group = svg_element::Group::new()
            .set("data-element", element.kind())
            .set("data-index", index);
        for node in element.render_to_layers().render() {
            group = group.add(node);
        }
        doc = doc.add(group);
    }

    debug!(elements = canvas.elements().len(), width, height; "SVG document built");
    doc
}
