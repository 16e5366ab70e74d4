use std::f32::consts::PI;

use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::id_generator::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Stored as `"square"` in drawing files
    #[default]
    #[serde(rename = "square", alias = "rectangle")]
    Rectangle,
    Circle,
    Triangle,
    Star,
    Diamond,
}

/// Outlined shape occupying an axis-aligned box
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ElementId,
    kind: ShapeKind,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Color32,
    stroke_width: f32,
}

impl Shape {
    /// Zero-size shape at `origin`, ready to be dragged open.
    pub fn new(id: ElementId, kind: ShapeKind, origin: Pos2, color: Color32, stroke_width: f32) -> Self {
        Self {
            id,
            kind,
            x: origin.x,
            y: origin.y,
            width: 0.0,
            height: 0.0,
            color,
            stroke_width,
        }
    }

    /// Rebuild a shape from a stored box. Negative sizes are refused.
    pub fn from_box(
        id: ElementId,
        kind: ShapeKind,
        rect: Rect,
        color: Color32,
        stroke_width: f32,
    ) -> Option<Self> {
        if rect.width() < 0.0 || rect.height() < 0.0 {
            return None;
        }
        Some(Self {
            id,
            kind,
            x: rect.min.x,
            y: rect.min.y,
            width: rect.width(),
            height: rect.height(),
            color,
            stroke_width,
        })
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn position(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position(), self.size())
    }

    pub fn with_position(&self, pos: Pos2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            ..self.clone()
        }
    }

    /// Copy of this shape spanning the drag from `start` to `current`.
    ///
    /// The origin is always the min corner, so the size never goes negative
    /// whichever way the pointer travels.
    pub fn dragged(&self, start: Pos2, current: Pos2) -> Self {
        Self {
            x: start.x.min(current.x),
            y: start.y.min(current.y),
            width: (current.x - start.x).abs(),
            height: (current.y - start.y).abs(),
            ..self.clone()
        }
    }

    /// Centre and radius of the circle inscribed in the box.
    pub fn circle(&self) -> (Pos2, f32) {
        (self.rect().center(), self.width.min(self.height) / 2.0)
    }

    /// Closed polygon for every kind except circle, which returns an empty list.
    pub fn outline(&self) -> Vec<Pos2> {
        let rect = self.rect();
        match self.kind {
            ShapeKind::Rectangle => vec![
                rect.left_top(),
                rect.right_top(),
                rect.right_bottom(),
                rect.left_bottom(),
            ],
            ShapeKind::Circle => Vec::new(),
            ShapeKind::Triangle => vec![
                rect.center_top(),
                rect.left_bottom(),
                rect.right_bottom(),
            ],
            ShapeKind::Diamond => vec![
                rect.center_top(),
                rect.right_center(),
                rect.center_bottom(),
                rect.left_center(),
            ],
            ShapeKind::Star => {
                let (center, outer) = self.circle();
                let inner = outer * 0.4;
                (0..10)
                    .map(|i| {
                        let radius = if i % 2 == 0 { outer } else { inner };
                        let angle = i as f32 * PI / 5.0;
                        Pos2::new(center.x + radius * angle.sin(), center.y - radius * angle.cos())
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::generate_id;

    fn shape(kind: ShapeKind) -> Shape {
        Shape::new(generate_id(), kind, Pos2::new(10.0, 10.0), Color32::BLACK, 2.0)
    }

    #[test]
    fn test_drag_normalizes_box() {
        let start = Pos2::new(100.0, 100.0);
        let dragged = shape(ShapeKind::Rectangle).dragged(start, Pos2::new(40.0, 30.0));

        assert_eq!(dragged.position(), Pos2::new(40.0, 30.0));
        assert_eq!(dragged.size(), Vec2::new(60.0, 70.0));
    }

    #[test]
    fn test_star_outline_has_ten_vertices() {
        let star = shape(ShapeKind::Star).dragged(Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0));
        let outline = star.outline();

        assert_eq!(outline.len(), 10);
        // First vertex is the top spike
        assert!((outline[0].x - 50.0).abs() < 1e-4);
        assert!((outline[0].y - 0.0).abs() < 1e-4);
    }

    #[test]
    fn test_circle_uses_shorter_side() {
        let circle = shape(ShapeKind::Circle).dragged(Pos2::new(0.0, 0.0), Pos2::new(40.0, 20.0));
        let (center, radius) = circle.circle();

        assert_eq!(center, Pos2::new(20.0, 10.0));
        assert_eq!(radius, 10.0);
        assert!(circle.outline().is_empty());
    }

    #[test]
    fn test_from_box_rejects_negative_size() {
        let rect = Rect::from_min_max(Pos2::new(10.0, 10.0), Pos2::new(0.0, 0.0));
        assert!(Shape::from_box(generate_id(), ShapeKind::Diamond, rect, Color32::RED, 2.0).is_none());
    }
}
