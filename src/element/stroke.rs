use egui::{Color32, Pos2, Rect};
use serde::{Deserialize, Serialize};

use crate::element::common;
use crate::id_generator::ElementId;

/// Which freehand tool produced a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeTool {
    Pen,
    Brush,
    Marker,
    Eraser,
}

impl StrokeTool {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pen => "pen",
            Self::Brush => "brush",
            Self::Marker => "marker",
            Self::Eraser => "eraser",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    #[default]
    Highlighter,
    Thick,
    Neon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushStyle {
    #[default]
    Charcoal,
    Soft,
}

/// Style sub-kind of a stroke. Only markers and brushes have one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeStyle {
    Plain,
    Marker(MarkerStyle),
    Brush(BrushStyle),
}

impl StrokeStyle {
    /// Opacity a freshly drawn stroke gets for this style.
    pub fn opacity(&self) -> f32 {
        match self {
            Self::Plain => 1.0,
            Self::Marker(MarkerStyle::Highlighter) => 0.4,
            Self::Marker(_) => 0.6,
            Self::Brush(BrushStyle::Charcoal) => 0.7,
            Self::Brush(_) => 0.9,
        }
    }
}

/// How a stroke is blended onto the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeMode {
    SourceOver,
    /// Removes what is underneath
    DestinationOut,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Color32,
    pub blur: f32,
    pub opacity: f32,
}

/// Everything a renderer needs to paint a stroke's polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeAppearance {
    pub color: Color32,
    pub width: f32,
    pub opacity: f32,
    pub tension: f32,
    pub composite: CompositeMode,
    pub glow: Option<Glow>,
}

/// Freehand path made of render points and the base points they wiggle around
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: ElementId,
    tool: StrokeTool,
    points: Vec<Pos2>,
    base_points: Vec<Pos2>,
    color: Color32,
    width: f32,
    opacity: f32,
    wiggle: bool,
    style: StrokeStyle,
}

impl Stroke {
    /// Start a stroke at `start`; the point goes into both render and base points.
    pub fn new(
        id: ElementId,
        tool: StrokeTool,
        start: Pos2,
        color: Color32,
        width: f32,
        style: StrokeStyle,
    ) -> Self {
        Self {
            id,
            tool,
            points: vec![start],
            base_points: vec![start],
            color,
            width,
            opacity: style.opacity(),
            wiggle: false,
            style,
        }
    }

    /// Rebuild a stroke from stored geometry. Returns `None` when the two
    /// point lists differ in length.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: ElementId,
        tool: StrokeTool,
        points: Vec<Pos2>,
        base_points: Vec<Pos2>,
        color: Color32,
        width: f32,
        opacity: f32,
        wiggle: bool,
        style: StrokeStyle,
    ) -> Option<Self> {
        if points.len() != base_points.len() {
            return None;
        }
        Some(Self {
            id,
            tool,
            points,
            base_points,
            color,
            width,
            opacity,
            wiggle,
            style,
        })
    }

    pub fn with_wiggle(mut self, wiggle: bool) -> Self {
        self.wiggle = wiggle;
        self
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn tool(&self) -> StrokeTool {
        self.tool
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn base_points(&self) -> &[Pos2] {
        &self.base_points
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn wiggle(&self) -> bool {
        self.wiggle
    }

    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    /// Copy of this stroke with `pos` appended to both point lists.
    pub fn with_point(&self, pos: Pos2) -> Self {
        let mut next = self.clone();
        next.points.push(pos);
        next.base_points.push(pos);
        next
    }

    /// Copy of this stroke whose render points are replaced. Base points are
    /// left alone, so the replacement must have the same length.
    pub fn with_render_points(&self, points: Vec<Pos2>) -> Option<Self> {
        if points.len() != self.base_points.len() {
            return None;
        }
        Some(Self {
            points,
            ..self.clone()
        })
    }

    pub fn rect(&self) -> Rect {
        common::calculate_bounds(&self.points, self.width / 2.0)
    }

    /// Render hints. Erasers paint in `background` and cut through what is below.
    pub fn appearance(&self, background: Color32) -> StrokeAppearance {
        let (color, composite) = match self.tool {
            StrokeTool::Eraser => (background, CompositeMode::DestinationOut),
            _ => (self.color, CompositeMode::SourceOver),
        };
        let glow = match self.style {
            StrokeStyle::Marker(MarkerStyle::Neon) => Some(Glow {
                color: self.color,
                blur: 8.0,
                opacity: 0.6,
            }),
            _ => None,
        };

        StrokeAppearance {
            color,
            width: self.width,
            opacity: self.opacity,
            tension: common::STROKE_TENSION,
            composite,
            glow,
        }
    }
}
