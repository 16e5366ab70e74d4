//! Drawing files: a `KONVA_RLE_V1` header line followed by the RLE-compressed
//! JSON array of elements. Files without the header are read as plain JSON.

use std::collections::HashSet;

use egui::{Pos2, Rect, Vec2};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::element::{
    BinaryImage, BrushStyle, Element, MarkerStyle, Shape, ShapeKind, Stroke, StrokeStyle, StrokeTool,
    Text, color_from_hex, color_to_hex,
};
use crate::error::ImportError;
use crate::id_generator::{ElementId, generate_id};
use crate::rle;

pub const FORMAT_TAG: &str = "KONVA_RLE_V1";

/// Encode elements as a complete drawing file (header included).
pub fn encode_document(elements: &[Element]) -> Result<String, serde_json::Error> {
    let payload = to_json(elements)?;
    Ok(format!("{FORMAT_TAG}\n{}", rle::compress(&payload)))
}

/// JSON array of elements with every `|` escaped, so the text can go
/// through the RLE codec untouched.
pub fn to_json(elements: &[Element]) -> Result<String, serde_json::Error> {
    let wire: Vec<WireElement> = elements.iter().map(WireElement::from).collect();
    let json = serde_json::to_string(&wire)?;
    // `|` only occurs inside JSON strings, where the escape decodes to the same character
    Ok(json.replace(rle::TOKEN_SEPARATOR, "\\u007c"))
}

/// Decode a drawing file, tagged or legacy plain JSON.
pub fn decode_document(contents: &str, max_chars: usize) -> Result<Vec<Element>, ImportError> {
    let json = match strip_tag(contents) {
        Some(payload) => {
            // Editors and download tools often append a newline
            let payload = payload.trim_end();
            debug!("Found {FORMAT_TAG} header, decompressing {} chars", payload.len());
            rle::decompress_limited(payload, max_chars)?
        }
        None => {
            warn!("No {FORMAT_TAG} header, reading as plain JSON");
            if contents.chars().count() > max_chars {
                return Err(ImportError::TooLarge { limit: max_chars });
            }
            contents.to_owned()
        }
    };
    from_json(&json)
}

/// Parse a JSON array of elements, validating every entry.
///
/// Ids must be unique within the file. Legacy numeric or string ids are
/// replaced with fresh ones.
pub fn from_json(json: &str) -> Result<Vec<Element>, ImportError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Array(items) = value else {
        return Err(ImportError::NotAnArray);
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut elements = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let invalid = |reason: String| ImportError::InvalidElement { index, reason };

        let wire: WireElement = serde_json::from_value(item).map_err(|err| invalid(err.to_string()))?;
        let id = wire.id();
        if !seen.insert(id.key()) {
            return Err(invalid(format!("duplicate id {}", id.key())));
        }
        let id = id.resolve();
        elements.push(wire.into_element(id).map_err(invalid)?);
    }
    Ok(elements)
}

fn strip_tag(contents: &str) -> Option<&str> {
    let rest = contents.strip_prefix(FORMAT_TAG)?;
    rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n'))
}

/// Element id as found in a file. Older drawings used numbers or arbitrary
/// strings; those are kept only long enough to check for duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum WireId {
    Element(ElementId),
    Number(u64),
    Text(String),
}

impl WireId {
    fn key(&self) -> String {
        match self {
            WireId::Element(id) => id.to_string(),
            WireId::Number(n) => format!("#{n}"),
            WireId::Text(text) => format!("'{text}'"),
        }
    }

    fn resolve(&self) -> ElementId {
        match self {
            WireId::Element(id) => *id,
            WireId::Number(_) | WireId::Text(_) => generate_id(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "kebab-case")]
enum WireElement {
    Pen(WireStroke),
    Brush(WireStroke),
    Marker(WireStroke),
    Eraser(WireStroke),
    Shape(WireShape),
    Text(WireText),
    BinaryImport(WireBinary),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireStroke {
    id: WireId,
    points: Vec<f32>,
    #[serde(default)]
    base_points: Vec<f32>,
    color: String,
    size: f32,
    #[serde(default = "full_opacity")]
    opacity: f32,
    #[serde(default)]
    wiggle: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    marker_style: Option<MarkerStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    brush_style: Option<BrushStyle>,
}

fn full_opacity() -> f32 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireShape {
    id: WireId,
    shape_type: ShapeKind,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: String,
    stroke_width: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireText {
    id: WireId,
    text: String,
    x: f32,
    y: f32,
    color: String,
    font_size: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireBinary {
    id: WireId,
    bits: String,
    row_width: usize,
    x: f32,
    y: f32,
}

fn flatten(points: &[Pos2]) -> Vec<f32> {
    points.iter().flat_map(|p| [p.x, p.y]).collect()
}

fn unflatten(coords: &[f32], field: &str) -> Result<Vec<Pos2>, String> {
    if coords.len() % 2 != 0 {
        return Err(format!("`{field}` has an odd number of coordinates"));
    }
    Ok(coords.chunks_exact(2).map(|xy| Pos2::new(xy[0], xy[1])).collect())
}

fn parse_color(hex: &str) -> Result<egui::Color32, String> {
    color_from_hex(hex).ok_or_else(|| format!("invalid color `{hex}`"))
}

impl From<&Element> for WireElement {
    fn from(element: &Element) -> Self {
        match element {
            Element::Stroke(stroke) => {
                let (marker_style, brush_style) = match stroke.style() {
                    StrokeStyle::Plain => (None, None),
                    StrokeStyle::Marker(style) => (Some(style), None),
                    StrokeStyle::Brush(style) => (None, Some(style)),
                };
                let wire = WireStroke {
                    id: WireId::Element(stroke.id()),
                    points: flatten(stroke.points()),
                    base_points: flatten(stroke.base_points()),
                    color: color_to_hex(stroke.color()),
                    size: stroke.width(),
                    opacity: stroke.opacity(),
                    wiggle: stroke.wiggle(),
                    marker_style,
                    brush_style,
                };
                match stroke.tool() {
                    StrokeTool::Pen => WireElement::Pen(wire),
                    StrokeTool::Brush => WireElement::Brush(wire),
                    StrokeTool::Marker => WireElement::Marker(wire),
                    StrokeTool::Eraser => WireElement::Eraser(wire),
                }
            }
            Element::Shape(shape) => WireElement::Shape(WireShape {
                id: WireId::Element(shape.id()),
                shape_type: shape.kind(),
                x: shape.position().x,
                y: shape.position().y,
                width: shape.size().x,
                height: shape.size().y,
                color: color_to_hex(shape.color()),
                stroke_width: shape.stroke_width(),
            }),
            Element::Text(text) => WireElement::Text(WireText {
                id: WireId::Element(text.id()),
                text: text.content().to_owned(),
                x: text.position().x,
                y: text.position().y,
                color: color_to_hex(text.color()),
                font_size: text.font_size(),
            }),
            Element::BinaryImage(image) => WireElement::BinaryImport(WireBinary {
                id: WireId::Element(image.id()),
                bits: image.bits().to_owned(),
                row_width: image.row_width(),
                x: image.position().x,
                y: image.position().y,
            }),
        }
    }
}

impl WireElement {
    fn id(&self) -> &WireId {
        match self {
            WireElement::Pen(s) | WireElement::Brush(s) | WireElement::Marker(s) | WireElement::Eraser(s) => &s.id,
            WireElement::Shape(s) => &s.id,
            WireElement::Text(t) => &t.id,
            WireElement::BinaryImport(b) => &b.id,
        }
    }

    /// Validate and build the element under `id`.
    fn into_element(self, id: ElementId) -> Result<Element, String> {
        let (tool, stroke) = match self {
            WireElement::Pen(s) => (StrokeTool::Pen, s),
            WireElement::Brush(s) => (StrokeTool::Brush, s),
            WireElement::Marker(s) => (StrokeTool::Marker, s),
            WireElement::Eraser(s) => (StrokeTool::Eraser, s),
            WireElement::Shape(s) => {
                let rect = Rect::from_min_size(Pos2::new(s.x, s.y), Vec2::new(s.width, s.height));
                let color = parse_color(&s.color)?;
                return Shape::from_box(id, s.shape_type, rect, color, s.stroke_width)
                    .map(Element::Shape)
                    .ok_or_else(|| "shape has a negative size".to_owned());
            }
            WireElement::Text(t) => {
                let color = parse_color(&t.color)?;
                return Ok(Element::Text(Text::new(
                    id,
                    t.text,
                    Pos2::new(t.x, t.y),
                    color,
                    t.font_size,
                )));
            }
            WireElement::BinaryImport(b) => {
                return BinaryImage::new(id, b.bits, b.row_width, Pos2::new(b.x, b.y))
                    .map(Element::BinaryImage)
                    .ok_or_else(|| "binary image needs `0`/`1` bits and a non-zero row width".to_owned());
            }
        };

        let points = unflatten(&stroke.points, "points")?;
        let base_points = if stroke.base_points.is_empty() {
            points.clone()
        } else {
            unflatten(&stroke.base_points, "basePoints")?
        };
        let style = match tool {
            StrokeTool::Marker => StrokeStyle::Marker(stroke.marker_style.unwrap_or_default()),
            StrokeTool::Brush => StrokeStyle::Brush(stroke.brush_style.unwrap_or_default()),
            StrokeTool::Pen | StrokeTool::Eraser => StrokeStyle::Plain,
        };

        Stroke::from_parts(
            id,
            tool,
            points,
            base_points,
            parse_color(&stroke.color)?,
            stroke.size,
            stroke.opacity,
            stroke.wiggle,
            style,
        )
        .map(Element::Stroke)
        .ok_or_else(|| "`points` and `basePoints` differ in length".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use crate::id_generator::generate_id;
    use egui::Color32;

    #[test]
    fn test_pipe_never_reaches_the_codec() {
        let text = factory::create_text(generate_id(), "a|b||c", Pos2::ZERO, Color32::BLACK, 20.0);
        let json = to_json(std::slice::from_ref(&text)).unwrap();

        assert!(!json.contains('|'));
        assert_eq!(from_json(&json).unwrap(), vec![text]);
    }

    #[test]
    fn test_strip_tag_accepts_crlf() {
        assert_eq!(strip_tag("KONVA_RLE_V1\r\n[1"), Some("[1"));
        assert_eq!(strip_tag("KONVA_RLE_V1\n[1"), Some("[1"));
        assert_eq!(strip_tag("[]"), None);
    }

    #[test]
    fn test_wire_tags() {
        let json = to_json(&[factory::create_shape(
            generate_id(),
            ShapeKind::Rectangle,
            Pos2::new(1.0, 2.0),
            Color32::RED,
            2.0,
        )])
        .unwrap();

        assert!(json.contains(r#""tool":"shape""#));
        assert!(json.contains(r#""shapeType":"square""#));
        assert!(json.contains(r##""color":"#ff0000""##));
    }
}
