use std::ops::RangeInclusive;

use egui::Color32;

use crate::config::EditorConfig;
use crate::element::{BrushStyle, MarkerStyle, ShapeKind, StrokeStyle, StrokeTool};

pub const SIZE_RANGE: RangeInclusive<f32> = 2.0..=80.0;
pub const ERASER_SIZE_RANGE: RangeInclusive<f32> = 6.0..=200.0;

/// Toolbar state that new elements are created from
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSettings {
    color: Color32,
    size: f32,
    eraser_size: f32,
    pub marker_style: MarkerStyle,
    pub brush_style: BrushStyle,
    pub shape_kind: ShapeKind,
    /// New strokes wiggle forever while this is on
    pub wiggle_mode: bool,
    background: Color32,
    brush_multiplier: f32,
    marker_multiplier: f32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self::from_config(&EditorConfig::default())
    }
}

impl ToolSettings {
    pub fn from_config(config: &EditorConfig) -> Self {
        Self {
            color: config.default_color(),
            size: clamp(config.default_size, &SIZE_RANGE),
            eraser_size: clamp(config.default_eraser_size, &ERASER_SIZE_RANGE),
            marker_style: MarkerStyle::default(),
            brush_style: BrushStyle::default(),
            shape_kind: ShapeKind::default(),
            wiggle_mode: false,
            background: config.background(),
            brush_multiplier: config.brush_size_multiplier,
            marker_multiplier: config.marker_size_multiplier,
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = clamp(size, &SIZE_RANGE);
    }

    pub fn eraser_size(&self) -> f32 {
        self.eraser_size
    }

    pub fn set_eraser_size(&mut self, size: f32) {
        self.eraser_size = clamp(size, &ERASER_SIZE_RANGE);
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Width of a new stroke drawn with `tool`
    pub fn stroke_width(&self, tool: StrokeTool) -> f32 {
        match tool {
            StrokeTool::Pen => self.size,
            StrokeTool::Brush => self.size * self.brush_multiplier,
            StrokeTool::Marker => self.size * self.marker_multiplier,
            StrokeTool::Eraser => self.eraser_size,
        }
    }

    pub fn stroke_style(&self, tool: StrokeTool) -> StrokeStyle {
        match tool {
            StrokeTool::Marker => StrokeStyle::Marker(self.marker_style),
            StrokeTool::Brush => StrokeStyle::Brush(self.brush_style),
            StrokeTool::Pen | StrokeTool::Eraser => StrokeStyle::Plain,
        }
    }

    /// Erasers always paint with the background color.
    pub fn stroke_color(&self, tool: StrokeTool) -> Color32 {
        match tool {
            StrokeTool::Eraser => self.background,
            _ => self.color,
        }
    }

    /// Font size used when committing text
    pub fn font_size(&self) -> f32 {
        self.size * 2.0
    }
}

fn clamp(value: f32, range: &RangeInclusive<f32>) -> f32 {
    value.clamp(*range.start(), *range.end())
}
