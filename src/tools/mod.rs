use egui::Pos2;

use crate::command::Command;
use crate::element::StrokeTool;
use crate::state::EditorModel;

/// Tool trait defines the interface for all drawing tools
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Called when the tool is selected (activated).
    fn activate(&mut self, _model: &EditorModel) {
        // default: do nothing
    }

    /// Called when the tool is deselected. Drops any gesture in progress.
    fn deactivate(&mut self, _model: &EditorModel) {
        // default: do nothing
    }

    /// Handle pointer press on the canvas.
    fn on_pointer_down(&mut self, pos: Pos2, model: &EditorModel, settings: &ToolSettings) -> Option<Command>;

    /// Handle pointer movement. Only does something while a gesture is active.
    fn on_pointer_move(&mut self, pos: Pos2, model: &EditorModel, settings: &ToolSettings) -> Option<Command>;

    /// Handle pointer release. Ends the gesture; never changes elements.
    fn on_pointer_up(&mut self, pos: Pos2, model: &EditorModel) -> Option<Command>;

    /// True while a drawing, dragging or resizing gesture is active
    fn is_busy(&self) -> bool {
        false
    }
}

mod draw_stroke_tool;
mod selection_tool;
mod settings;
mod shape_tool;
mod text_tool;

pub use draw_stroke_tool::DrawStrokeTool;
pub use selection_tool::{SelectionState, SelectionTool};
pub use settings::{ERASER_SIZE_RANGE, SIZE_RANGE, ToolSettings};
pub use shape_tool::ShapeTool;
pub use text_tool::TextTool;

/// Toolbar buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolMode {
    Select,
    Pen,
    Brush,
    Marker,
    Eraser,
    Shape,
    Text,
}

impl ToolMode {
    pub fn stroke_tool(&self) -> Option<StrokeTool> {
        match self {
            Self::Pen => Some(StrokeTool::Pen),
            Self::Brush => Some(StrokeTool::Brush),
            Self::Marker => Some(StrokeTool::Marker),
            Self::Eraser => Some(StrokeTool::Eraser),
            Self::Select | Self::Shape | Self::Text => None,
        }
    }
}

/// Enum representing all available tool types
#[derive(Debug, Clone)]
pub enum ToolType {
    Selection(SelectionTool),
    DrawStroke(DrawStrokeTool),
    Shape(ShapeTool),
    Text(TextTool),
}

impl ToolType {
    /// Fresh tool instance for a toolbar mode
    pub fn for_mode(mode: ToolMode) -> Self {
        match mode {
            ToolMode::Select => Self::Selection(SelectionTool::new()),
            ToolMode::Shape => Self::Shape(ShapeTool::new()),
            ToolMode::Text => Self::Text(TextTool),
            ToolMode::Pen => Self::DrawStroke(DrawStrokeTool::new(StrokeTool::Pen)),
            ToolMode::Brush => Self::DrawStroke(DrawStrokeTool::new(StrokeTool::Brush)),
            ToolMode::Marker => Self::DrawStroke(DrawStrokeTool::new(StrokeTool::Marker)),
            ToolMode::Eraser => Self::DrawStroke(DrawStrokeTool::new(StrokeTool::Eraser)),
        }
    }

    pub fn mode(&self) -> ToolMode {
        match self {
            Self::Selection(_) => ToolMode::Select,
            Self::Shape(_) => ToolMode::Shape,
            Self::Text(_) => ToolMode::Text,
            Self::DrawStroke(tool) => match tool.stroke_tool() {
                StrokeTool::Pen => ToolMode::Pen,
                StrokeTool::Brush => ToolMode::Brush,
                StrokeTool::Marker => ToolMode::Marker,
                StrokeTool::Eraser => ToolMode::Eraser,
            },
        }
    }
}

impl Default for ToolType {
    fn default() -> Self {
        Self::for_mode(ToolMode::Pen)
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Selection(tool) => tool.name(),
            Self::DrawStroke(tool) => tool.name(),
            Self::Shape(tool) => tool.name(),
            Self::Text(tool) => tool.name(),
        }
    }

    fn activate(&mut self, model: &EditorModel) {
        match self {
            Self::Selection(tool) => tool.activate(model),
            Self::DrawStroke(tool) => tool.activate(model),
            Self::Shape(tool) => tool.activate(model),
            Self::Text(tool) => tool.activate(model),
        }
    }

    fn deactivate(&mut self, model: &EditorModel) {
        match self {
            Self::Selection(tool) => tool.deactivate(model),
            Self::DrawStroke(tool) => tool.deactivate(model),
            Self::Shape(tool) => tool.deactivate(model),
            Self::Text(tool) => tool.deactivate(model),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, model: &EditorModel, settings: &ToolSettings) -> Option<Command> {
        match self {
            Self::Selection(tool) => tool.on_pointer_down(pos, model, settings),
            Self::DrawStroke(tool) => tool.on_pointer_down(pos, model, settings),
            Self::Shape(tool) => tool.on_pointer_down(pos, model, settings),
            Self::Text(tool) => tool.on_pointer_down(pos, model, settings),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, model: &EditorModel, settings: &ToolSettings) -> Option<Command> {
        match self {
            Self::Selection(tool) => tool.on_pointer_move(pos, model, settings),
            Self::DrawStroke(tool) => tool.on_pointer_move(pos, model, settings),
            Self::Shape(tool) => tool.on_pointer_move(pos, model, settings),
            Self::Text(tool) => tool.on_pointer_move(pos, model, settings),
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, model: &EditorModel) -> Option<Command> {
        match self {
            Self::Selection(tool) => tool.on_pointer_up(pos, model),
            Self::DrawStroke(tool) => tool.on_pointer_up(pos, model),
            Self::Shape(tool) => tool.on_pointer_up(pos, model),
            Self::Text(tool) => tool.on_pointer_up(pos, model),
        }
    }

    fn is_busy(&self) -> bool {
        match self {
            Self::Selection(tool) => tool.is_busy(),
            Self::DrawStroke(tool) => tool.is_busy(),
            Self::Shape(tool) => tool.is_busy(),
            Self::Text(tool) => tool.is_busy(),
        }
    }
}
