use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use crate::event::{DocumentEvent, EditorEvent, EventHandler};

/// Writes every event to the log
#[derive(Debug, Default)]
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        match event {
            // One per frame; too noisy for debug
            EditorEvent::DocumentChanged(DocumentEvent::Animated) => {}
            EditorEvent::ImportFailed { reason } => warn!("Import failed: {reason}"),
            EditorEvent::ExportFailed { reason } => warn!("Export failed: {reason}"),
            other => debug!("{other:?}"),
        }
    }
}

/// Keeps a shared copy of every event, for UIs that poll and for tests
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<EditorEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take everything recorded so far
    pub fn drain(&self) -> Vec<EditorEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn snapshot(&self) -> Vec<EditorEvent> {
        self.events.borrow().clone()
    }
}

impl EventHandler for EventRecorder {
    fn handle_event(&mut self, event: &EditorEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
