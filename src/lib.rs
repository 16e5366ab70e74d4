#![warn(clippy::all, rust_2018_idioms)]

pub mod animation;
pub mod command;
pub mod config;
pub mod editor;
pub mod element;
pub mod error;
pub mod event;
pub mod export;
pub mod file_format;
pub mod file_handler;
pub mod id_generator;
pub mod input;
pub mod rle;
pub mod state;
pub mod tools;

pub use animation::WiggleAnimator;
pub use command::{Command, History};
pub use config::EditorConfig;
pub use editor::{Editor, EditorMessage};
pub use element::Element;
pub use error::{ExportError, ImportError};
pub use export::{ExportArtifact, RasterSurface};
pub use id_generator::ElementId;
pub use input::InputEvent;
pub use state::EditorModel;
pub use tools::{Tool, ToolMode, ToolSettings};
