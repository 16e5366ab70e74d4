use binart_paint::animation::{WiggleAnimator, wiggle_points};
use binart_paint::config::WiggleConfig;
use binart_paint::editor::Editor;
use binart_paint::element::{ShapeKind, StrokeStyle, StrokeTool, factory};
use binart_paint::id_generator::generate_id;
use binart_paint::input::InputEvent;
use binart_paint::tools::ToolMode;
use egui::{Color32, Pos2};

fn wiggly_editor() -> Editor {
    let mut editor = Editor::default();
    editor.set_wiggle_mode(true);
    editor
}

#[test]
fn test_wiggle_offsets_follow_formula() {
    let base = [Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0)];
    let moved = wiggle_points(&base, 0.5, 6.0, 1.5);

    let expected_y1 = 10.0 + (0.5f32 * 6.0 + 3.0 * 0.37).sin() * 1.5;
    assert_eq!(moved.len(), 2);
    assert!((moved[0].x - (3.0f32).sin() * 1.5).abs() < 1e-5);
    assert!((moved[1].y - expected_y1).abs() < 1e-5);

    // Same inputs, same output
    assert_eq!(moved, wiggle_points(&base, 0.5, 6.0, 1.5));
}

#[test]
fn test_tick_rewrites_points_but_not_base() {
    let mut editor = wiggly_editor();
    editor.handle_input(InputEvent::down(Pos2::new(0.0, 0.0)));
    editor.handle_input(InputEvent::moved(Pos2::new(10.0, 5.0)));
    editor.handle_input(InputEvent::up(Pos2::new(10.0, 5.0)));

    assert!(editor.frame_tick());

    let config = WiggleConfig::default();
    let stroke = editor.elements()[0].as_stroke().unwrap();
    assert_eq!(stroke.base_points(), &[Pos2::new(0.0, 0.0), Pos2::new(10.0, 5.0)]);
    assert_eq!(
        stroke.points(),
        wiggle_points(stroke.base_points(), config.time_step, config.frequency, config.amplitude).as_slice()
    );
}

#[test]
fn test_tick_without_wiggle_leaves_drawing_alone() {
    let mut editor = Editor::default();
    editor.handle_input(InputEvent::down(Pos2::new(0.0, 0.0)));
    editor.handle_input(InputEvent::moved(Pos2::new(10.0, 5.0)));
    let before = editor.elements().to_vec();

    assert!(!editor.frame_tick());
    assert_eq!(editor.elements(), before.as_slice());
    // The clock still runs
    assert!(editor.animator().time() > 0.0);
}

#[test]
fn test_points_added_mid_animation_stay_aligned() {
    let mut editor = wiggly_editor();
    editor.handle_input(InputEvent::down(Pos2::new(0.0, 0.0)));
    editor.handle_input(InputEvent::moved(Pos2::new(1.0, 1.0)));
    editor.frame_tick();
    editor.handle_input(InputEvent::moved(Pos2::new(2.0, 2.0)));
    editor.frame_tick();

    let stroke = editor.elements()[0].as_stroke().unwrap();
    assert_eq!(stroke.points().len(), 3);
    assert_eq!(
        stroke.base_points(),
        &[Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0), Pos2::new(2.0, 2.0)]
    );
}

#[test]
fn test_only_wiggling_strokes_change() {
    let still = factory::create_stroke(
        generate_id(),
        StrokeTool::Pen,
        Pos2::new(3.0, 3.0),
        Color32::BLACK,
        2.0,
        StrokeStyle::Plain,
    );
    let shape = factory::create_shape(generate_id(), ShapeKind::Diamond, Pos2::ZERO, Color32::RED, 2.0);
    let mut editor = wiggly_editor();
    editor.handle_input(InputEvent::down(Pos2::new(50.0, 50.0)));

    let mut elements = vec![still.clone(), shape.clone()];
    elements.extend(editor.elements().iter().cloned());

    let mut animator = WiggleAnimator::default();
    let next = animator.tick(&elements).unwrap();
    assert_eq!(next[0], still);
    assert_eq!(next[1], shape);
    assert_ne!(next[2], elements[2]);
}

#[test]
fn test_wiggle_mode_only_affects_new_strokes() {
    let mut editor = Editor::default();
    editor.handle_input(InputEvent::down(Pos2::new(0.0, 0.0)));
    editor.handle_input(InputEvent::up(Pos2::new(0.0, 0.0)));
    editor.set_wiggle_mode(true);
    editor.set_tool(ToolMode::Brush);
    editor.handle_input(InputEvent::down(Pos2::new(5.0, 5.0)));

    let flags: Vec<bool> = editor
        .elements()
        .iter()
        .map(|e| e.as_stroke().unwrap().wiggle())
        .collect();
    assert_eq!(flags, vec![false, true]);
}
