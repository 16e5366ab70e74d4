use egui::Pos2;

use crate::command::Command;
use crate::element::{Element, MIN_SHAPE_STROKE_WIDTH, Shape};
use crate::id_generator::{ElementId, generate_id};
use crate::state::EditorModel;
use crate::tools::{Tool, ToolSettings};

/// Drags open rectangles, circles, triangles, stars and diamonds
#[derive(Debug, Clone, Default)]
pub struct ShapeTool {
    /// Shape being resized and the point where the drag began
    resizing: Option<(ElementId, Pos2)>,
}

impl ShapeTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for ShapeTool {
    fn name(&self) -> &'static str {
        "Shape"
    }

    fn deactivate(&mut self, _model: &EditorModel) {
        self.resizing = None;
    }

    fn on_pointer_down(&mut self, pos: Pos2, _model: &EditorModel, settings: &ToolSettings) -> Option<Command> {
        let id = generate_id();
        let shape = Shape::new(
            id,
            settings.shape_kind,
            pos,
            settings.color(),
            settings.size().max(MIN_SHAPE_STROKE_WIDTH),
        );
        self.resizing = Some((id, pos));
        Some(Command::AddElement(Element::Shape(shape)))
    }

    fn on_pointer_move(&mut self, pos: Pos2, model: &EditorModel, _settings: &ToolSettings) -> Option<Command> {
        let (id, start) = self.resizing?;
        let shape = model.find_element_by_id(id)?.as_shape()?;
        Some(Command::UpdateElement(Element::Shape(shape.dragged(start, pos))))
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _model: &EditorModel) -> Option<Command> {
        self.resizing = None;
        None
    }

    fn is_busy(&self) -> bool {
        self.resizing.is_some()
    }
}
