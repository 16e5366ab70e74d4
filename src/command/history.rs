use log::debug;

use crate::element::Element;
use crate::id_generator::ElementId;

/// Current element list plus the elements popped off it by undo.
///
/// Both stacks hold whole element values, never diffs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    /// The drawing as it stands, in paint order
    elements: Vec<Element>,
    /// Undone elements; the last entry is the next one to redo
    redo_stack: Vec<Element>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Undone elements, next-to-redo first
    pub fn redo_entries(&self) -> impl Iterator<Item = &Element> {
        self.redo_stack.iter().rev()
    }

    /// Append a new element. Any pending redo is discarded.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
        if !self.redo_stack.is_empty() {
            debug!("Dropping {} redo entries", self.redo_stack.len());
            self.redo_stack.clear();
        }
    }

    /// Move the top-most element onto the redo stack. Returns false if
    /// there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.elements.pop() {
            Some(element) => {
                self.redo_stack.push(element);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone element back on top. Returns false if
    /// there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(element) => {
                self.elements.push(element);
                true
            }
            None => false,
        }
    }

    /// Swap in a new value for the element with the same id.
    pub fn replace(&mut self, element: Element) -> bool {
        match self.index_of(element.id()) {
            Some(index) => {
                self.elements[index] = element;
                true
            }
            None => false,
        }
    }

    /// Replace the whole drawing. Redo is cleared.
    pub fn replace_all(&mut self, elements: Vec<Element>) {
        self.elements = elements;
        self.redo_stack.clear();
    }

    /// Swap in a rewritten copy of the current list (same elements, new
    /// values). Redo is kept.
    pub fn set_elements(&mut self, elements: Vec<Element>) {
        self.elements = elements;
    }

    /// Returns true if there are elements that can be undone
    pub fn can_undo(&self) -> bool {
        !self.elements.is_empty()
    }

    /// Returns true if there are elements that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear the drawing and its redo stack
    pub fn clear(&mut self) {
        self.elements.clear();
        self.redo_stack.clear();
    }

    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }
}
