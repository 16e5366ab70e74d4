mod bus;
mod events;
mod handlers;

pub use bus::EventBus;
pub use events::*;
pub use handlers::{EventRecorder, LoggingEventHandler};

pub trait EventHandler {
    fn handle_event(&mut self, event: &EditorEvent);
}
