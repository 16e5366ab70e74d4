use egui::Pos2;
use log::debug;

use super::{CommandError, CommandResult};
use crate::element::Element;
use crate::id_generator::ElementId;
use crate::state::EditorModel;

/// Changes a tool asks the model to make
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a new element; this is an undoable step and clears redo
    AddElement(Element),

    /// Replace an existing element (same id) with a new value. Used for
    /// in-gesture edits such as dragging, resizing and extending a stroke.
    UpdateElement(Element),

    /// Select an element by id
    SelectElement(ElementId),

    /// Clear the current selection
    ClearSelection,

    /// Remember where text should go; the UI is asked for the content
    BeginTextEntry { anchor: Pos2 },
}

impl Command {
    pub fn execute(self, model: &mut EditorModel) -> CommandResult {
        match self {
            Command::AddElement(element) => {
                debug!("Adding {} {}", element.element_type(), element.id());
                model.add_element(element);
            }
            Command::UpdateElement(element) => {
                let id = element.id();
                if !model.replace_element(element) {
                    return Err(CommandError::ElementNotFound(id));
                }
            }
            Command::SelectElement(id) => {
                if model.find_element_by_id(id).is_none() {
                    return Err(CommandError::ElementNotFound(id));
                }
                model.select(id);
            }
            Command::ClearSelection => model.clear_selection(),
            Command::BeginTextEntry { anchor } => model.set_pending_text(anchor),
        }
        Ok(())
    }

    /// Whether applying this command adds an undo step
    pub fn is_destructive(&self) -> bool {
        matches!(self, Command::AddElement(_))
    }
}
