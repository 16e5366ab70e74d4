use binart_paint::editor::Editor;
use binart_paint::element::{Element, MarkerStyle, ShapeKind, StrokeStyle, StrokeTool};
use binart_paint::event::{EditorEvent, EventRecorder, SelectionEvent};
use binart_paint::input::InputEvent;
use binart_paint::tools::ToolMode;
use egui::{Color32, Pos2};

fn pos(x: f32, y: f32) -> Pos2 {
    Pos2::new(x, y)
}

// Press at `from`, move through `path`, release at the last point
fn drag(editor: &mut Editor, from: Pos2, path: &[Pos2]) {
    editor.handle_input(InputEvent::down(from));
    for &p in path {
        editor.handle_input(InputEvent::moved(p));
    }
    let end = path.last().copied().unwrap_or(from);
    editor.handle_input(InputEvent::up(end));
}

fn only_stroke(editor: &Editor) -> &binart_paint::element::Stroke {
    assert_eq!(editor.elements().len(), 1);
    editor.elements()[0].as_stroke().expect("expected a stroke")
}

#[test]
fn test_pen_stroke_collects_points() {
    let mut editor = Editor::default();
    drag(&mut editor, pos(10.0, 10.0), &[pos(20.0, 20.0), pos(30.0, 25.0)]);

    let stroke = only_stroke(&editor);
    assert_eq!(stroke.tool(), StrokeTool::Pen);
    assert_eq!(stroke.points(), &[pos(10.0, 10.0), pos(20.0, 20.0), pos(30.0, 25.0)]);
    assert_eq!(stroke.points().len(), stroke.base_points().len());
    assert_eq!(stroke.opacity(), 1.0);
    assert!(!stroke.wiggle());
}

#[test]
fn test_moves_without_press_do_nothing() {
    let mut editor = Editor::default();
    editor.handle_input(InputEvent::moved(pos(5.0, 5.0)));
    editor.handle_input(InputEvent::up(pos(5.0, 5.0)));

    assert!(editor.elements().is_empty());
    assert_eq!(editor.model().pointer_pos(), pos(5.0, 5.0));
}

#[test]
fn test_missing_position_is_ignored() {
    let mut editor = Editor::default();
    editor.handle_input(InputEvent::down(pos(1.0, 1.0)));
    editor.handle_input(InputEvent::PointerMove { position: None });
    editor.handle_input(InputEvent::PointerUp { position: None });

    assert_eq!(only_stroke(&editor).points().len(), 1);
}

#[test]
fn test_marker_and_brush_opacity() {
    let mut editor = Editor::default();
    editor.set_tool(ToolMode::Marker);
    drag(&mut editor, pos(0.0, 0.0), &[pos(1.0, 1.0)]);
    editor.settings_mut().marker_style = MarkerStyle::Neon;
    drag(&mut editor, pos(0.0, 0.0), &[pos(1.0, 1.0)]);
    editor.set_tool(ToolMode::Brush);
    drag(&mut editor, pos(0.0, 0.0), &[pos(1.0, 1.0)]);

    let opacities: Vec<f32> = editor
        .elements()
        .iter()
        .map(|e| e.as_stroke().unwrap().opacity())
        .collect();
    assert_eq!(opacities, vec![0.4, 0.6, 0.7]);

    let size = editor.settings().size();
    let widths: Vec<f32> = editor.elements().iter().map(|e| e.as_stroke().unwrap().width()).collect();
    assert_eq!(widths, vec![size * 2.0, size * 2.0, size * 1.5]);
    assert_eq!(
        editor.elements()[1].as_stroke().unwrap().style(),
        StrokeStyle::Marker(MarkerStyle::Neon)
    );
}

#[test]
fn test_eraser_paints_background_and_never_wiggles() {
    let mut editor = Editor::default();
    editor.set_wiggle_mode(true);
    editor.settings_mut().set_color(Color32::RED);
    editor.set_tool(ToolMode::Eraser);
    drag(&mut editor, pos(0.0, 0.0), &[pos(10.0, 0.0)]);

    let stroke = only_stroke(&editor);
    assert_eq!(stroke.color(), editor.config().background());
    assert_eq!(stroke.width(), editor.settings().eraser_size());
    assert!(!stroke.wiggle());
}

#[test]
fn test_shape_drag_normalizes_box() {
    let mut editor = Editor::default();
    editor.set_tool(ToolMode::Shape);
    editor.settings_mut().shape_kind = ShapeKind::Triangle;
    drag(&mut editor, pos(100.0, 100.0), &[pos(70.0, 50.0), pos(40.0, 30.0)]);

    assert_eq!(editor.elements().len(), 1);
    let shape = editor.elements()[0].as_shape().unwrap();
    assert_eq!(shape.kind(), ShapeKind::Triangle);
    assert_eq!(shape.position(), pos(40.0, 30.0));
    assert_eq!(shape.size(), egui::vec2(60.0, 70.0));
}

#[test]
fn test_select_and_drag_shape() {
    let mut editor = Editor::default();
    editor.set_tool(ToolMode::Shape);
    drag(&mut editor, pos(40.0, 30.0), &[pos(100.0, 100.0)]);

    let recorder = EventRecorder::new();
    editor.subscribe(Box::new(recorder.clone()));
    editor.set_tool(ToolMode::Select);
    drag(&mut editor, pos(70.0, 65.0), &[pos(80.0, 75.0)]);

    let id = editor.elements()[0].id();
    assert_eq!(editor.model().selection(), Some(id));
    assert_eq!(editor.elements()[0].position(), Some(pos(50.0, 40.0)));
    assert!(
        recorder
            .snapshot()
            .contains(&EditorEvent::SelectionChanged(SelectionEvent::Selected(id)))
    );

    // Empty canvas clears
    editor.handle_input(InputEvent::down(pos(500.0, 500.0)));
    assert_eq!(editor.model().selection(), None);
}

#[test]
fn test_strokes_are_not_selectable() {
    let mut editor = Editor::default();
    drag(&mut editor, pos(0.0, 0.0), &[pos(50.0, 50.0)]);
    editor.set_tool(ToolMode::Select);
    editor.handle_input(InputEvent::down(pos(25.0, 25.0)));

    assert_eq!(editor.model().selection(), None);
}

#[test]
fn test_topmost_shape_wins() {
    let mut editor = Editor::default();
    editor.set_tool(ToolMode::Shape);
    drag(&mut editor, pos(0.0, 0.0), &[pos(100.0, 100.0)]);
    drag(&mut editor, pos(20.0, 20.0), &[pos(60.0, 60.0)]);

    editor.set_tool(ToolMode::Select);
    editor.handle_input(InputEvent::down(pos(30.0, 30.0)));
    assert_eq!(editor.model().selection(), Some(editor.elements()[1].id()));

    // Edges do not count as inside
    editor.handle_input(InputEvent::down(pos(20.0, 40.0)));
    assert_eq!(editor.model().selection(), Some(editor.elements()[0].id()));
}

#[test]
fn test_choosing_select_clears_selection() {
    let mut editor = Editor::default();
    editor.set_tool(ToolMode::Shape);
    drag(&mut editor, pos(0.0, 0.0), &[pos(10.0, 10.0)]);
    editor.set_tool(ToolMode::Select);
    editor.handle_input(InputEvent::down(pos(5.0, 5.0)));
    assert!(editor.model().selection().is_some());

    editor.set_tool(ToolMode::Select);
    assert_eq!(editor.model().selection(), None);
}

#[test]
fn test_text_prompt_and_commit() {
    let mut editor = Editor::default();
    let recorder = EventRecorder::new();
    editor.subscribe(Box::new(recorder.clone()));
    editor.set_tool(ToolMode::Text);
    editor.handle_input(InputEvent::down(pos(15.0, 25.0)));

    assert!(recorder.drain().contains(&EditorEvent::TextPromptRequested {
        anchor: pos(15.0, 25.0)
    }));
    assert!(editor.elements().is_empty());

    let id = editor.commit_text("hello").unwrap();
    let Element::Text(text) = &editor.elements()[0] else {
        panic!("expected text");
    };
    assert_eq!(text.id(), id);
    assert_eq!(text.content(), "hello");
    assert_eq!(text.position(), pos(15.0, 25.0));
    assert_eq!(text.font_size(), editor.settings().size() * 2.0);

    // The anchor is consumed
    assert_eq!(editor.commit_text("again"), None);
}

#[test]
fn test_blank_text_is_not_committed() {
    let mut editor = Editor::default();
    editor.set_tool(ToolMode::Text);
    editor.handle_input(InputEvent::down(pos(1.0, 1.0)));

    assert_eq!(editor.commit_text("   "), None);
    assert!(editor.elements().is_empty());
}

#[test]
fn test_editor_undo_redo() {
    let mut editor = Editor::default();
    drag(&mut editor, pos(0.0, 0.0), &[pos(1.0, 1.0)]);
    drag(&mut editor, pos(5.0, 5.0), &[pos(6.0, 6.0)]);

    assert!(editor.undo());
    assert_eq!(editor.elements().len(), 1);
    assert!(editor.redo());
    assert_eq!(editor.elements().len(), 2);
    assert!(!editor.redo());

    editor.clear_all();
    assert!(editor.elements().is_empty());
    assert!(!editor.undo());
}
