mod model;

pub use model::EditorModel;
