use egui::Pos2;

use crate::command::Command;
use crate::element::{Element, Stroke, StrokeTool};
use crate::id_generator::{ElementId, generate_id};
use crate::state::EditorModel;
use crate::tools::{Tool, ToolSettings};

/// Freehand drawing with pen, brush, marker or eraser
#[derive(Debug, Clone)]
pub struct DrawStrokeTool {
    tool: StrokeTool,
    // The stroke being drawn (if any)
    current_stroke: Option<ElementId>,
}

impl DrawStrokeTool {
    pub fn new(tool: StrokeTool) -> Self {
        Self {
            tool,
            current_stroke: None,
        }
    }

    pub fn stroke_tool(&self) -> StrokeTool {
        self.tool
    }

    pub fn current_stroke(&self) -> Option<ElementId> {
        self.current_stroke
    }
}

impl Tool for DrawStrokeTool {
    fn name(&self) -> &'static str {
        self.tool.name()
    }

    fn deactivate(&mut self, _model: &EditorModel) {
        self.current_stroke = None;
    }

    fn on_pointer_down(&mut self, pos: Pos2, _model: &EditorModel, settings: &ToolSettings) -> Option<Command> {
        let id = generate_id();
        let stroke = Stroke::new(
            id,
            self.tool,
            pos,
            settings.stroke_color(self.tool),
            settings.stroke_width(self.tool),
            settings.stroke_style(self.tool),
        )
        .with_wiggle(settings.wiggle_mode && self.tool != StrokeTool::Eraser);

        self.current_stroke = Some(id);
        Some(Command::AddElement(Element::Stroke(stroke)))
    }

    fn on_pointer_move(&mut self, pos: Pos2, model: &EditorModel, _settings: &ToolSettings) -> Option<Command> {
        let id = self.current_stroke?;
        // Points always go onto the top-most element, and only while it is still ours
        let stroke = model
            .last_element()
            .filter(|element| element.id() == id)?
            .as_stroke()?;
        Some(Command::UpdateElement(Element::Stroke(stroke.with_point(pos))))
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _model: &EditorModel) -> Option<Command> {
        self.current_stroke = None;
        None
    }

    fn is_busy(&self) -> bool {
        self.current_stroke.is_some()
    }
}
