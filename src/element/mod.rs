use egui::{Pos2, Rect};

mod common;
pub(crate) mod image;
pub(crate) mod shape;
pub(crate) mod stroke;
pub(crate) mod text;

pub use common::{
    BINARY_CELL_SIZE, MIN_SHAPE_STROKE_WIDTH, STROKE_TENSION, TEXT_WIDTH_FACTOR, color_from_hex,
    color_to_hex, strictly_contains,
};
pub use self::image::BinaryImage;
pub use shape::{Shape, ShapeKind};
pub use stroke::{
    BrushStyle, CompositeMode, Glow, MarkerStyle, Stroke, StrokeAppearance, StrokeStyle, StrokeTool,
};
pub use text::Text;

use crate::id_generator::ElementId;

/// One drawable unit on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Stroke(Stroke),
    Shape(Shape),
    Text(Text),
    BinaryImage(BinaryImage),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Stroke(s) => s.id(),
            Element::Shape(s) => s.id(),
            Element::Text(t) => t.id(),
            Element::BinaryImage(i) => i.id(),
        }
    }

    /// Tag used in drawing files
    pub fn element_type(&self) -> &'static str {
        match self {
            Element::Stroke(s) => s.tool().name(),
            Element::Shape(_) => "shape",
            Element::Text(_) => "text",
            Element::BinaryImage(_) => "binary-import",
        }
    }

    /// Only shapes and text can be picked up by the select tool.
    pub fn is_selectable(&self) -> bool {
        match self {
            Element::Shape(_) | Element::Text(_) => true,
            Element::Stroke(_) | Element::BinaryImage(_) => false,
        }
    }

    /// Anchor of elements that can be moved as a whole. Strokes have none.
    pub fn position(&self) -> Option<Pos2> {
        match self {
            Element::Stroke(_) => None,
            Element::Shape(s) => Some(s.position()),
            Element::Text(t) => Some(t.position()),
            Element::BinaryImage(i) => Some(i.position()),
        }
    }

    /// Copy of the element moved to `pos`, or `None` for strokes.
    pub fn with_position(&self, pos: Pos2) -> Option<Element> {
        match self {
            Element::Stroke(_) => None,
            Element::Shape(s) => Some(Element::Shape(s.with_position(pos))),
            Element::Text(t) => Some(Element::Text(t.with_position(pos))),
            Element::BinaryImage(i) => Some(Element::BinaryImage(i.with_position(pos))),
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Element::Stroke(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Element::Shape(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_wiggling(&self) -> bool {
        self.as_stroke().is_some_and(Stroke::wiggle)
    }
}

/// Axis-aligned box used for hit-testing and selection handles.
pub fn bounds_of(element: &Element) -> Rect {
    match element {
        Element::Stroke(s) => s.rect(),
        Element::Shape(s) => s.rect(),
        Element::Text(t) => t.rect(),
        Element::BinaryImage(i) => i.rect(),
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;
    use egui::Color32;

    /// Create a new stroke element seeded with its first point
    pub fn create_stroke(
        id: ElementId,
        tool: StrokeTool,
        start: Pos2,
        color: Color32,
        width: f32,
        style: StrokeStyle,
    ) -> Element {
        Element::Stroke(Stroke::new(id, tool, start, color, width, style))
    }

    /// Create a new zero-size shape element
    pub fn create_shape(
        id: ElementId,
        kind: ShapeKind,
        origin: Pos2,
        color: Color32,
        stroke_width: f32,
    ) -> Element {
        Element::Shape(Shape::new(id, kind, origin, color, stroke_width))
    }

    /// Create a new text element
    pub fn create_text(
        id: ElementId,
        content: impl Into<String>,
        anchor: Pos2,
        color: Color32,
        font_size: f32,
    ) -> Element {
        Element::Text(Text::new(id, content, anchor, color, font_size))
    }

    /// Create a new binary image element, if the payload is valid
    pub fn create_binary_image(
        id: ElementId,
        bits: impl Into<String>,
        row_width: usize,
        anchor: Pos2,
    ) -> Option<Element> {
        BinaryImage::new(id, bits, row_width, anchor).map(Element::BinaryImage)
    }
}
