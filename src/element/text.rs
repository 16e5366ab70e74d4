use egui::{Color32, Pos2, Rect, Vec2};

use crate::element::common::TEXT_WIDTH_FACTOR;
use crate::id_generator::ElementId;

#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    id: ElementId,
    content: String,
    x: f32,
    y: f32,
    color: Color32,
    font_size: f32,
}

impl Text {
    pub fn new(id: ElementId, content: impl Into<String>, anchor: Pos2, color: Color32, font_size: f32) -> Self {
        Self {
            id,
            content: content.into(),
            x: anchor.x,
            y: anchor.y,
            color,
            font_size,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn position(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn with_position(&self, pos: Pos2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            ..self.clone()
        }
    }

    /// Approximate box: every character is taken as 0.6 em wide.
    pub fn rect(&self) -> Rect {
        let width = self.content.chars().count() as f32 * self.font_size * TEXT_WIDTH_FACTOR;
        Rect::from_min_size(self.position(), Vec2::new(width, self.font_size))
    }
}
