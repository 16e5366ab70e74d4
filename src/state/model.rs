use egui::Pos2;

use crate::command::History;
use crate::element::{Element, bounds_of, strictly_contains};
use crate::id_generator::ElementId;

/// The drawing and the transient state that hangs off it.
///
/// Selection is an id lookup into the element list, so an element that has
/// been undone simply stops being selected.
#[derive(Debug, Clone, Default)]
pub struct EditorModel {
    history: History,
    selection: Option<ElementId>,
    pointer_pos: Pos2,
    pending_text: Option<Pos2>,
}

impl EditorModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        self.history.elements()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn find_element_by_id(&self, id: ElementId) -> Option<&Element> {
        self.history.get(id)
    }

    pub fn last_element(&self) -> Option<&Element> {
        self.elements().last()
    }

    /// Push a new element on top. Clears redo.
    pub fn add_element(&mut self, element: Element) {
        self.history.push(element);
    }

    /// Replace an element by id. Returns false if it is gone.
    pub fn replace_element(&mut self, element: Element) -> bool {
        self.history.replace(element)
    }

    /// Replace the drawing wholesale. Clears redo and selection.
    pub fn replace_all(&mut self, elements: Vec<Element>) {
        self.history.replace_all(elements);
        self.selection = None;
    }

    /// Install a rewritten copy of the current list, keeping redo.
    pub fn set_elements(&mut self, elements: Vec<Element>) {
        self.history.set_elements(elements);
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Remove everything, redo included.
    pub fn clear_all(&mut self) {
        self.history.clear();
        self.selection = None;
    }

    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    /// The selected element, if it is still in the drawing
    pub fn selected_element(&self) -> Option<&Element> {
        self.selection.and_then(|id| self.find_element_by_id(id))
    }

    pub fn select(&mut self, id: ElementId) {
        self.selection = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Top-most selectable element whose bounds strictly contain `pos`.
    pub fn hit_test(&self, pos: Pos2) -> Option<&Element> {
        self.elements()
            .iter()
            .rev()
            .filter(|element| element.is_selectable())
            .find(|element| strictly_contains(bounds_of(element), pos))
    }

    /// Last known pointer position, used for cursor and eraser previews
    pub fn pointer_pos(&self) -> Pos2 {
        self.pointer_pos
    }

    pub fn set_pointer_pos(&mut self, pos: Pos2) {
        self.pointer_pos = pos;
    }

    pub fn pending_text(&self) -> Option<Pos2> {
        self.pending_text
    }

    pub fn set_pending_text(&mut self, anchor: Pos2) {
        self.pending_text = Some(anchor);
    }

    pub fn take_pending_text(&mut self) -> Option<Pos2> {
        self.pending_text.take()
    }
}
