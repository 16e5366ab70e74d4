//! The editor: one owner for the drawing, the active tool and the animation
//! clock.
//!
//! Pointer events and frame ticks both rewrite the element list. They never
//! race because every change goes through `&mut Editor`, either by direct
//! calls or through the [`EditorMessage`] queue drained by [`Editor::run`].

use egui::{Color32, Pos2};
use futures::StreamExt;
use futures::channel::{mpsc, oneshot};
use futures::io::AsyncRead;
use log::{debug, info, warn};

use crate::animation::WiggleAnimator;
use crate::command::Command;
use crate::config::EditorConfig;
use crate::element::{BinaryImage, BrushStyle, Element, MarkerStyle, ShapeKind, Text};
use crate::error::{ExportError, ImportError};
use crate::event::{
    DocumentEvent, EditorEvent, EventBus, EventHandler, LoggingEventHandler, ProgressEvent,
    SelectionEvent,
};
use crate::export::{self, ExportArtifact, RasterSurface};
use crate::file_handler::{self, FileHandler, ImportKind, ImportTicket};
use crate::id_generator::{ElementId, generate_id};
use crate::input::InputEvent;
use crate::state::EditorModel;
use crate::tools::{Tool, ToolMode, ToolSettings, ToolType};

const EXPORT_LABEL: &str = "Exporting drawing";
const IMPORT_LABEL: &str = "Importing drawing";

/// Everything the UI can ask of the editor, for queue-driven use
#[derive(Debug)]
pub enum EditorMessage {
    Input(InputEvent),
    FrameTick,
    SetTool(ToolMode),
    SetColor(Color32),
    SetSize(f32),
    SetEraserSize(f32),
    SetMarkerStyle(MarkerStyle),
    SetBrushStyle(BrushStyle),
    SetShapeKind(ShapeKind),
    SetWiggleMode(bool),
    CommitText(String),
    CancelText,
    Undo,
    Redo,
    ClearAll,
    /// Contents of a file the UI already read
    ImportText(String),
    /// Claim the import slot; the UI reads the file while the queue keeps
    /// running, then sends [`EditorMessage::FinishImport`]
    BeginImport(oneshot::Sender<Result<ImportTicket, ImportError>>),
    FinishImport { ticket: ImportTicket, contents: String },
    CancelImport(ImportTicket),
    ExportRle(oneshot::Sender<Result<ExportArtifact, ExportError>>),
}

pub type EditorSender = mpsc::UnboundedSender<EditorMessage>;
pub type EditorReceiver = mpsc::UnboundedReceiver<EditorMessage>;

/// Queue for feeding an [`Editor::run`] loop
pub fn channel() -> (EditorSender, EditorReceiver) {
    mpsc::unbounded()
}

#[derive(Debug)]
pub struct Editor {
    config: EditorConfig,
    settings: ToolSettings,
    model: EditorModel,
    tool: ToolType,
    animator: WiggleAnimator,
    files: FileHandler,
    event_bus: EventBus,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        let event_bus = EventBus::new();
        event_bus.subscribe(Box::new(LoggingEventHandler));

        Self {
            settings: ToolSettings::from_config(&config),
            model: EditorModel::new(),
            tool: ToolType::default(),
            animator: WiggleAnimator::new(config.wiggle),
            files: FileHandler::new(config.max_import_chars),
            event_bus,
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut ToolSettings {
        &mut self.settings
    }

    pub fn model(&self) -> &EditorModel {
        &self.model
    }

    pub fn elements(&self) -> &[Element] {
        self.model.elements()
    }

    pub fn tool(&self) -> &ToolType {
        &self.tool
    }

    pub fn tool_mode(&self) -> ToolMode {
        self.tool.mode()
    }

    pub fn animator(&self) -> &WiggleAnimator {
        &self.animator
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    pub fn is_importing(&self) -> bool {
        self.files.is_busy()
    }

    /// Switch tools. Any gesture in progress is dropped; choosing the
    /// select tool also clears the selection.
    pub fn set_tool(&mut self, mode: ToolMode) {
        let old = self.tool.mode();
        self.tool.deactivate(&self.model);
        self.tool = ToolType::for_mode(mode);
        self.tool.activate(&self.model);

        if mode == ToolMode::Select {
            self.apply(Command::ClearSelection);
        }
        self.event_bus.emit(EditorEvent::ToolChanged { old, new: mode });
    }

    pub fn set_wiggle_mode(&mut self, on: bool) {
        self.settings.wiggle_mode = on;
    }

    /// Feed one pointer event through the active tool.
    pub fn handle_input(&mut self, event: InputEvent) {
        let Some(pos) = event.position() else {
            debug!("Ignoring {event:?}: no stage position");
            return;
        };

        let command = match event {
            InputEvent::PointerDown { .. } => {
                self.model.set_pointer_pos(pos);
                self.tool.on_pointer_down(pos, &self.model, &self.settings)
            }
            InputEvent::PointerMove { .. } => {
                self.model.set_pointer_pos(pos);
                self.tool.on_pointer_move(pos, &self.model, &self.settings)
            }
            InputEvent::PointerUp { .. } => self.tool.on_pointer_up(pos, &self.model),
        };

        if let Some(command) = command {
            self.apply(command);
        }
    }

    fn apply(&mut self, command: Command) {
        let event = match &command {
            Command::AddElement(element) => {
                EditorEvent::DocumentChanged(DocumentEvent::ElementAdded(element.id()))
            }
            Command::UpdateElement(element) => {
                EditorEvent::DocumentChanged(DocumentEvent::ElementUpdated(element.id()))
            }
            Command::SelectElement(id) => EditorEvent::SelectionChanged(SelectionEvent::Selected(*id)),
            Command::ClearSelection => {
                if self.model.selection().is_none() {
                    return;
                }
                EditorEvent::SelectionChanged(SelectionEvent::Cleared)
            }
            Command::BeginTextEntry { anchor } => EditorEvent::TextPromptRequested { anchor: *anchor },
        };

        match command.execute(&mut self.model) {
            Ok(()) => self.event_bus.emit(event),
            Err(err) => warn!("Command not applied: {err}"),
        }
    }

    /// Turn the pending text anchor into a text element. Blank content or a
    /// missing anchor does nothing.
    pub fn commit_text(&mut self, content: &str) -> Option<ElementId> {
        let anchor = self.model.take_pending_text()?;
        if content.trim().is_empty() {
            debug!("Discarding empty text at {anchor:?}");
            return None;
        }

        let id = generate_id();
        let text = Text::new(id, content, anchor, self.settings.color(), self.settings.font_size());
        self.apply(Command::AddElement(Element::Text(text)));
        Some(id)
    }

    pub fn cancel_text(&mut self) {
        self.model.take_pending_text();
    }

    pub fn undo(&mut self) -> bool {
        let Some(id) = self.model.last_element().map(Element::id) else {
            return false;
        };
        self.model.undo();
        self.event_bus.emit(EditorEvent::DocumentChanged(DocumentEvent::Undone(id)));
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.model.redo() {
            return false;
        }
        if let Some(id) = self.model.last_element().map(Element::id) {
            self.event_bus.emit(EditorEvent::DocumentChanged(DocumentEvent::Redone(id)));
        }
        true
    }

    /// Remove every element, redo history included.
    pub fn clear_all(&mut self) {
        info!("Clearing {} elements", self.model.elements().len());
        self.model.clear_all();
        self.event_bus.emit(EditorEvent::DocumentChanged(DocumentEvent::Cleared));
    }

    /// One animation frame. Returns true if any render points changed.
    pub fn frame_tick(&mut self) -> bool {
        match self.animator.tick(self.model.elements()) {
            Some(elements) => {
                self.model.set_elements(elements);
                self.event_bus.emit(EditorEvent::DocumentChanged(DocumentEvent::Animated));
                true
            }
            None => false,
        }
    }

    pub fn export_png(&mut self, surface: &mut dyn RasterSurface) -> Result<ExportArtifact, ExportError> {
        export::export_png(
            surface,
            self.config.export_region(),
            self.config.export_pixel_ratio,
            self.config.export_background(),
        )
        .inspect_err(|err| {
            self.event_bus.emit(EditorEvent::ExportFailed {
                reason: err.to_string(),
            })
        })
    }

    pub fn export_rle(&mut self) -> Result<ExportArtifact, ExportError> {
        let bus = &self.event_bus;
        let result = export::export_rle(self.model.elements(), |percent| {
            bus.emit(progress(EXPORT_LABEL, percent, true));
        });
        bus.emit(progress(EXPORT_LABEL, 100, false));

        if let Err(err) = &result {
            bus.emit(EditorEvent::ExportFailed {
                reason: err.to_string(),
            });
        }
        result
    }

    /// Start an import; the UI should disable its import control until
    /// [`Editor::finish_import`] or [`Editor::cancel_import`].
    pub fn begin_import(&mut self) -> Result<ImportTicket, ImportError> {
        match self.files.begin_import() {
            Ok(ticket) => {
                self.event_bus.emit(progress(IMPORT_LABEL, 0, true));
                Ok(ticket)
            }
            Err(err) => {
                self.event_bus.emit(EditorEvent::ImportFailed {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    pub fn cancel_import(&mut self, ticket: ImportTicket) {
        self.files.cancel_import(ticket);
        self.event_bus.emit(progress(IMPORT_LABEL, 0, false));
    }

    /// Decode `contents` and replace the drawing with it. On failure the
    /// drawing is left as it was.
    pub fn finish_import(&mut self, ticket: ImportTicket, contents: &str) -> Result<usize, ImportError> {
        let result = self.files.finish_import(ticket, contents);
        let outcome = match result {
            Ok(elements) => {
                let count = elements.len();
                self.model.replace_all(elements);
                self.event_bus.emit(EditorEvent::DocumentChanged(DocumentEvent::Loaded { count }));
                self.event_bus.emit(progress(IMPORT_LABEL, 100, true));
                Ok(count)
            }
            Err(err) => {
                self.event_bus.emit(EditorEvent::ImportFailed {
                    reason: err.to_string(),
                });
                Err(err)
            }
        };
        self.event_bus.emit(progress(IMPORT_LABEL, 100, false));
        outcome
    }

    /// Read an uploaded file and import it according to its kind. A drawing
    /// replaces the canvas; a PNG is added on top at the last pointer
    /// position.
    ///
    /// The editor stays borrowed until the read completes. Queue-driven UIs
    /// should use [`EditorMessage::BeginImport`] instead.
    pub async fn import_file<R: AsyncRead + Unpin>(
        &mut self,
        kind: ImportKind,
        reader: R,
    ) -> Result<usize, ImportError> {
        match kind {
            ImportKind::Drawing => self.import_from_reader(reader).await,
            ImportKind::Png => {
                let bytes = match file_handler::read_bytes(reader).await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        self.event_bus.emit(EditorEvent::ImportFailed {
                            reason: err.to_string(),
                        });
                        return Err(err);
                    }
                };
                let anchor = self.model.pointer_pos();
                self.import_png_as_binary(&bytes, anchor).map(|_| 1)
            }
        }
    }

    /// Read a drawing file and import it.
    pub async fn import_from_reader<R: AsyncRead + Unpin>(&mut self, reader: R) -> Result<usize, ImportError> {
        let ticket = self.begin_import()?;
        match file_handler::read_text(reader).await {
            Ok(contents) => {
                self.event_bus.emit(progress(IMPORT_LABEL, 50, true));
                self.finish_import(ticket, &contents)
            }
            Err(err) => {
                self.cancel_import(ticket);
                self.event_bus.emit(EditorEvent::ImportFailed {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Add a PNG as a binary image on top of the drawing.
    pub fn import_png_as_binary(&mut self, bytes: &[u8], anchor: Pos2) -> Result<ElementId, ImportError> {
        let id = generate_id();
        match BinaryImage::from_png(id, bytes, self.config.binary_threshold, anchor) {
            Ok(image) => {
                self.apply(Command::AddElement(Element::BinaryImage(image)));
                Ok(id)
            }
            Err(err) => {
                let err = ImportError::from(err);
                self.event_bus.emit(EditorEvent::ImportFailed {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    pub fn dispatch(&mut self, message: EditorMessage) {
        match message {
            EditorMessage::Input(event) => self.handle_input(event),
            EditorMessage::FrameTick => {
                self.frame_tick();
            }
            EditorMessage::SetTool(mode) => self.set_tool(mode),
            EditorMessage::SetColor(color) => self.settings.set_color(color),
            EditorMessage::SetSize(size) => self.settings.set_size(size),
            EditorMessage::SetEraserSize(size) => self.settings.set_eraser_size(size),
            EditorMessage::SetMarkerStyle(style) => self.settings.marker_style = style,
            EditorMessage::SetBrushStyle(style) => self.settings.brush_style = style,
            EditorMessage::SetShapeKind(kind) => self.settings.shape_kind = kind,
            EditorMessage::SetWiggleMode(on) => self.set_wiggle_mode(on),
            EditorMessage::CommitText(content) => {
                self.commit_text(&content);
            }
            EditorMessage::CancelText => self.cancel_text(),
            EditorMessage::Undo => {
                self.undo();
            }
            EditorMessage::Redo => {
                self.redo();
            }
            EditorMessage::ClearAll => self.clear_all(),
            // Failures of the import messages are reported on the event bus
            EditorMessage::ImportText(contents) => {
                if let Ok(ticket) = self.begin_import() {
                    let _ = self.finish_import(ticket, &contents);
                }
            }
            EditorMessage::BeginImport(reply) => {
                if let Err(Ok(ticket)) = reply.send(self.begin_import()) {
                    debug!("Import requester went away");
                    self.cancel_import(ticket);
                }
            }
            EditorMessage::FinishImport { ticket, contents } => {
                let _ = self.finish_import(ticket, &contents);
            }
            EditorMessage::CancelImport(ticket) => self.cancel_import(ticket),
            EditorMessage::ExportRle(reply) => {
                if reply.send(self.export_rle()).is_err() {
                    debug!("Export requester went away");
                }
            }
        }
    }

    /// Apply queued messages in order until every sender is dropped, then
    /// hand the editor back.
    pub async fn run(mut self, mut messages: EditorReceiver) -> Self {
        while let Some(message) = messages.next().await {
            self.dispatch(message);
        }
        self
    }
}

fn progress(label: &'static str, percent: u8, visible: bool) -> EditorEvent {
    EditorEvent::Progress(ProgressEvent {
        label,
        percent,
        visible,
    })
}
