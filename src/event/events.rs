use egui::Pos2;

use crate::id_generator::ElementId;
use crate::tools::ToolMode;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ToolChanged {
        old: ToolMode,
        new: ToolMode,
    },
    DocumentChanged(DocumentEvent),
    SelectionChanged(SelectionEvent),
    /// The text tool placed an anchor; the UI should ask for the content
    TextPromptRequested {
        anchor: Pos2,
    },
    /// Cosmetic progress for export/import overlays
    Progress(ProgressEvent),
    /// An import did not apply; the drawing is unchanged
    ImportFailed {
        reason: String,
    },
    /// An export did not produce a file
    ExportFailed {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    ElementAdded(ElementId),
    ElementUpdated(ElementId),
    Undone(ElementId),
    Redone(ElementId),
    Cleared,
    Loaded { count: usize },
    /// Wiggle pass rewrote render points
    Animated,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    Selected(ElementId),
    Cleared,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEvent {
    pub label: &'static str,
    /// 0 to 100
    pub percent: u8,
    /// False once the overlay should close
    pub visible: bool,
}
