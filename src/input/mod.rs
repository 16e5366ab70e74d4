use egui::Pos2;

/// Pointer events in stage coordinates.
///
/// `position` is `None` when the stage cannot resolve where the pointer is,
/// for example after it left the capture area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed or touch started
    PointerDown { position: Option<Pos2> },
    /// Pointer moved, with or without a button held
    PointerMove { position: Option<Pos2> },
    /// Mouse button released or touch ended
    PointerUp { position: Option<Pos2> },
}

impl InputEvent {
    pub fn down(pos: Pos2) -> Self {
        Self::PointerDown { position: Some(pos) }
    }

    pub fn moved(pos: Pos2) -> Self {
        Self::PointerMove { position: Some(pos) }
    }

    pub fn up(pos: Pos2) -> Self {
        Self::PointerUp { position: Some(pos) }
    }

    pub fn position(&self) -> Option<Pos2> {
        match self {
            Self::PointerDown { position } | Self::PointerMove { position } | Self::PointerUp { position } => {
                *position
            }
        }
    }
}
