use egui::{Pos2, Vec2};
use log::debug;

use crate::command::Command;
use crate::id_generator::ElementId;
use crate::state::EditorModel;
use crate::tools::{Tool, ToolSettings};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    /// Moving the selected element; `offset` is pointer minus element origin
    Dragging { id: ElementId, offset: Vec2 },
}

/// Picks up shapes and text and drags them around
#[derive(Debug, Clone, Default)]
pub struct SelectionTool {
    state: SelectionState,
}

impl SelectionTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }
}

impl Tool for SelectionTool {
    fn name(&self) -> &'static str {
        "Selection"
    }

    fn deactivate(&mut self, _model: &EditorModel) {
        self.state = SelectionState::Idle;
    }

    fn on_pointer_down(&mut self, pos: Pos2, model: &EditorModel, _settings: &ToolSettings) -> Option<Command> {
        let hit = model
            .hit_test(pos)
            .and_then(|element| Some((element.id(), element.position()?)));

        match hit {
            Some((id, origin)) => {
                debug!("Selected {id}");
                self.state = SelectionState::Dragging {
                    id,
                    offset: pos - origin,
                };
                Some(Command::SelectElement(id))
            }
            None => {
                self.state = SelectionState::Idle;
                Some(Command::ClearSelection)
            }
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, model: &EditorModel, _settings: &ToolSettings) -> Option<Command> {
        let SelectionState::Dragging { id, offset } = self.state else {
            return None;
        };
        let moved = model.find_element_by_id(id)?.with_position(pos - offset)?;
        Some(Command::UpdateElement(moved))
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _model: &EditorModel) -> Option<Command> {
        self.state = SelectionState::Idle;
        None
    }

    fn is_busy(&self) -> bool {
        !matches!(self.state, SelectionState::Idle)
    }
}
