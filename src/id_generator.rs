use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of an element for its whole lifetime.
///
/// Random ids keep imported drawings from colliding with elements that are
/// already on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(Uuid);

impl ElementId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

pub fn generate_id() -> ElementId {
    ElementId(Uuid::new_v4())
}
