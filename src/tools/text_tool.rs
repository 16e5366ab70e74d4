use egui::Pos2;

use crate::command::Command;
use crate::state::EditorModel;
use crate::tools::{Tool, ToolSettings};

/// Places a text anchor. The content comes later from the text prompt.
#[derive(Debug, Clone, Default)]
pub struct TextTool;

impl Tool for TextTool {
    fn name(&self) -> &'static str {
        "Text"
    }

    fn on_pointer_down(&mut self, pos: Pos2, _model: &EditorModel, _settings: &ToolSettings) -> Option<Command> {
        Some(Command::BeginTextEntry { anchor: pos })
    }

    fn on_pointer_move(&mut self, _pos: Pos2, _model: &EditorModel, _settings: &ToolSettings) -> Option<Command> {
        None
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _model: &EditorModel) -> Option<Command> {
        None
    }
}
