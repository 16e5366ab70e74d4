use binart_paint::command::{Command, CommandError, History};
use binart_paint::element::{Element, ShapeKind, StrokeStyle, StrokeTool, factory};
use binart_paint::id_generator::generate_id;
use binart_paint::state::EditorModel;
use egui::{Color32, Pos2};

fn pen_stroke(x: f32) -> Element {
    factory::create_stroke(
        generate_id(),
        StrokeTool::Pen,
        Pos2::new(x, x),
        Color32::BLACK,
        4.0,
        StrokeStyle::Plain,
    )
}

#[test]
fn test_undo_then_redo_restores_list() {
    let mut history = History::new();
    history.push(pen_stroke(1.0));
    history.push(pen_stroke(2.0));
    let before = history.elements().to_vec();

    assert!(history.undo());
    assert_eq!(history.elements().len(), 1);
    assert!(history.redo());
    assert_eq!(history.elements(), before.as_slice());
    assert!(!history.can_redo());
}

#[test]
fn test_undo_on_empty_is_noop() {
    let mut history = History::new();
    assert!(!history.undo());
    assert!(!history.redo());
    assert!(history.elements().is_empty());
}

#[test]
fn test_push_clears_redo() {
    let mut history = History::new();
    history.push(pen_stroke(1.0));
    history.push(pen_stroke(2.0));
    history.undo();
    assert!(history.can_redo());

    history.push(pen_stroke(3.0));
    assert!(!history.can_redo());
    assert!(!history.redo());
}

#[test]
fn test_redo_order_is_last_undone_first() {
    let mut history = History::new();
    let first = pen_stroke(1.0);
    let second = pen_stroke(2.0);
    history.push(first.clone());
    history.push(second.clone());
    history.undo();
    history.undo();

    let pending: Vec<_> = history.redo_entries().map(Element::id).collect();
    assert_eq!(pending, vec![first.id(), second.id()]);

    history.redo();
    assert_eq!(history.elements(), &[first]);
}

#[test]
fn test_replace_keeps_redo() {
    let mut history = History::new();
    let stroke = pen_stroke(1.0);
    history.push(stroke.clone());
    history.push(pen_stroke(2.0));
    history.undo();

    let extended = Element::Stroke(stroke.as_stroke().unwrap().with_point(Pos2::new(5.0, 5.0)));
    assert!(history.replace(extended.clone()));
    assert_eq!(history.get(stroke.id()), Some(&extended));
    assert!(history.can_redo());
}

#[test]
fn test_update_of_missing_element_fails() {
    let mut model = EditorModel::new();
    let shape = factory::create_shape(generate_id(), ShapeKind::Circle, Pos2::ZERO, Color32::RED, 2.0);
    let id = shape.id();

    assert_eq!(
        Command::UpdateElement(shape).execute(&mut model),
        Err(CommandError::ElementNotFound(id))
    );
    assert!(model.elements().is_empty());
}

#[test]
fn test_clear_all_drops_redo_and_selection() {
    let mut model = EditorModel::new();
    let shape = factory::create_shape(generate_id(), ShapeKind::Star, Pos2::ZERO, Color32::RED, 2.0);
    let id = shape.id();
    Command::AddElement(shape).execute(&mut model).unwrap();
    Command::AddElement(pen_stroke(1.0)).execute(&mut model).unwrap();
    Command::SelectElement(id).execute(&mut model).unwrap();
    model.undo();

    model.clear_all();
    assert!(model.elements().is_empty());
    assert_eq!(model.selection(), None);
    assert!(!model.redo());
}
