//! Layer-based ordering of the SVG nodes emitted by one drawable.
//!
//! A single drawable usually emits several nodes: a box emits its rectangle
//! and its label, an arrow emits the line, the head, a label card and the
//! label text. [`LayeredOutput`] collects them tagged with a [`RenderLayer`]
//! so that, within that drawable, text always paints above the shapes it
//! annotates. Ordering *between* drawables is decided by the canvas draw list.
//!
//! # Example
//!
//! ```
//! # use easel_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Rectangle, Text};
//! let mut output = LayeredOutput::new();
//!
//! output.add_to_layer(RenderLayer::Text, Box::new(Text::new("Router")));
//! output.add_to_layer(RenderLayer::Shape, Box::new(Rectangle::new()));
//!
//! // Shape renders first even though it was added second
//! let svg_nodes = output.render();
//! assert_eq!(svg_nodes.len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Paint order of the parts of a single drawable.
///
/// Layers are rendered from bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Translucent fills and frames behind everything else
    Background,
    /// Box outlines and fills, legend swatches
    Shape,
    /// Arrow lines and arrowheads
    Arrow,
    /// Background cards that keep labels legible over lines
    Card,
    /// Text labels
    Text,
}

impl RenderLayer {
    /// Returns a human-readable name for this layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Shape => "shape",
            Self::Arrow => "arrow",
            Self::Card => "card",
            Self::Text => "text",
        }
    }
}

/// SVG nodes of one drawable, tagged by layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    /// Creates a new empty `LayeredOutput`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single node to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends every node of another output, keeping their layers.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    /// Returns `true` if no node has been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of nodes on the given layer.
    pub fn count(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes a `<g data-layer="...">` element. Nodes
    /// keep their insertion order inside a layer (the sort is stable).
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.is_empty() {
            return Vec::new();
        }

        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);

                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }

            current_group = current_group.add(node);
        }

        result.push(Box::new(current_group) as SvgNode);

        result
    }
}
