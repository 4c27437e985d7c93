use egui::{Color32, pos2};
use humming_paint::canvas::PromptRecord;
use humming_paint::tools::Cursor;
use humming_paint::{
    Canvas, ColorError, DrawingSession, Edition, Primitive, SessionConfig, SizeChoice, ToolMode,
};

fn create_session(edition: Edition) -> (DrawingSession, Canvas) {
    let session = DrawingSession::new(SessionConfig::for_edition(edition)).unwrap();
    let mut canvas = Canvas::new();
    session.sync_surface(&mut canvas);
    (session, canvas)
}

#[test]
fn test_startup_defaults() {
    let (session, canvas) = create_session(Edition::Text);
    assert_eq!(session.mode(), ToolMode::Pencil);
    assert_eq!(session.stroke_color(), Color32::BLACK);
    assert_eq!(session.background_color(), Color32::WHITE);
    assert_eq!(session.stroke_width(), 1);
    assert_eq!(session.font_size(), Some(12));

    assert_eq!(canvas.active_tool(), Some(ToolMode::Pencil));
    assert_eq!(canvas.cursor(), Cursor::Pencil);
    assert_eq!(canvas.color_indicator().foreground, Color32::WHITE);

    let (legacy, _) = create_session(Edition::Eraser);
    assert_eq!(legacy.stroke_width(), 2);
    assert_eq!(legacy.font_size(), None);
}

#[test]
fn test_set_mode_updates_affordances() {
    let (mut session, mut canvas) = create_session(Edition::Text);

    assert!(session.set_mode(ToolMode::Eraser, &mut canvas));
    assert_eq!(canvas.cursor(), Cursor::DotBox);
    assert_eq!(canvas.active_tool(), Some(ToolMode::Eraser));

    assert!(session.set_mode(ToolMode::Circle, &mut canvas));
    assert_eq!(canvas.cursor(), Cursor::Crosshair);

    assert!(session.set_mode(ToolMode::Text, &mut canvas));
    assert_eq!(canvas.cursor(), Cursor::TextCaret);
    assert_eq!(canvas.active_tool(), Some(ToolMode::Text));
}

#[test]
fn test_set_mode_is_idempotent() {
    let (mut session, mut canvas) = create_session(Edition::Text);
    session.set_width(SizeChoice::Fixed(7), &mut canvas);
    session.set_color(Color32::RED, &mut canvas);

    session.on_press(pos2(1.0, 1.0), &mut canvas);
    assert!(session.set_mode(ToolMode::Square, &mut canvas));
    assert!(session.gesture().is_idle());

    session.on_press(pos2(2.0, 2.0), &mut canvas);
    assert!(!session.set_mode(ToolMode::Square, &mut canvas));
    // the second call left the new gesture alone
    assert_eq!(session.gesture().anchor(), Some(pos2(2.0, 2.0)));

    assert_eq!(session.stroke_width(), 7);
    assert_eq!(session.stroke_color(), Color32::RED);
    assert_eq!(session.font_size(), Some(12));
}

#[test]
fn test_unavailable_mode_is_refused() {
    let (mut session, mut canvas) = create_session(Edition::Eraser);
    assert!(!session.set_mode(ToolMode::Square, &mut canvas));
    assert!(!session.set_mode(ToolMode::Text, &mut canvas));
    assert_eq!(session.mode(), ToolMode::Pencil);
    assert_eq!(canvas.active_tool(), Some(ToolMode::Pencil));
}

#[test]
fn test_fixed_width() {
    let (mut session, mut canvas) = create_session(Edition::Shapes);
    assert_eq!(session.set_width(SizeChoice::Fixed(10), &mut canvas), 10);
    // zero violates the minimum and is ignored
    assert_eq!(session.set_width(SizeChoice::Fixed(0), &mut canvas), 10);
    assert!(canvas.prompts().is_empty());
}

#[test]
fn test_custom_width_prompt() {
    let (mut session, mut canvas) = create_session(Edition::Text);
    session.set_width(SizeChoice::Fixed(5), &mut canvas);

    canvas.answer_integer(Some(42));
    assert_eq!(session.set_width(SizeChoice::PromptCustom, &mut canvas), 42);

    match canvas.prompts() {
        [PromptRecord::Integer(prompt)] => {
            assert_eq!((prompt.min, prompt.max, prompt.initial), (1, 100, 5));
        }
        other => panic!("expected one integer prompt, got {other:?}"),
    }
}

#[test]
fn test_cancelled_custom_width_keeps_prior_value() {
    let (mut session, mut canvas) = create_session(Edition::Text);
    session.set_width(SizeChoice::Fixed(5), &mut canvas);

    canvas.answer_integer(None);
    assert_eq!(session.set_width(SizeChoice::PromptCustom, &mut canvas), 5);
    assert_eq!(session.stroke_width(), 5);
}

#[test]
fn test_out_of_range_custom_width_counts_as_cancel() {
    let (mut session, mut canvas) = create_session(Edition::Sketch);
    canvas.answer_integer(Some(80));
    assert_eq!(session.set_width(SizeChoice::PromptCustom, &mut canvas), 2);

    match canvas.prompts() {
        [PromptRecord::Integer(prompt)] => assert_eq!(prompt.max, 50),
        other => panic!("expected one integer prompt, got {other:?}"),
    }
}

#[test]
fn test_font_size_prompt_and_bounds() {
    let (mut session, mut canvas) = create_session(Edition::Text);

    canvas.answer_integer(Some(48));
    assert_eq!(session.set_font_size(SizeChoice::PromptCustom, &mut canvas), Some(48));

    canvas.answer_integer(None);
    assert_eq!(session.set_font_size(SizeChoice::PromptCustom, &mut canvas), Some(48));

    assert_eq!(session.set_font_size(SizeChoice::Fixed(5), &mut canvas), Some(48));
    assert_eq!(session.set_font_size(SizeChoice::Fixed(121), &mut canvas), Some(48));
    assert_eq!(session.set_font_size(SizeChoice::Fixed(120), &mut canvas), Some(120));

    match canvas.prompts() {
        [PromptRecord::Integer(first), PromptRecord::Integer(_)] => {
            assert_eq!((first.min, first.max, first.initial), (6, 120, 12));
        }
        other => panic!("expected two integer prompts, got {other:?}"),
    }
}

#[test]
fn test_font_size_without_text_tool() {
    let (mut session, mut canvas) = create_session(Edition::Shapes);
    canvas.answer_integer(Some(20));
    assert_eq!(session.set_font_size(SizeChoice::PromptCustom, &mut canvas), None);
    assert!(canvas.prompts().is_empty());
}

#[test]
fn test_color_indicator_foreground() {
    let (mut session, mut canvas) = create_session(Edition::Text);

    session.set_color_hex("#FFFFFF", &mut canvas).unwrap();
    assert_eq!(canvas.color_indicator().fill, Color32::WHITE);
    assert_eq!(canvas.color_indicator().foreground, Color32::BLACK);

    session.set_color_hex("#000000", &mut canvas).unwrap();
    assert_eq!(canvas.color_indicator().foreground, Color32::WHITE);
}

#[test]
fn test_invalid_color_string_changes_nothing() {
    let (mut session, mut canvas) = create_session(Edition::Text);
    let result = session.set_color_hex("blue", &mut canvas);
    assert!(matches!(result, Err(ColorError::MissingHash(_))));
    assert_eq!(session.stroke_color(), Color32::BLACK);
}

#[test]
fn test_color_forces_pencil_in_eraser_edition() {
    let (mut session, mut canvas) = create_session(Edition::Eraser);
    session.set_mode(ToolMode::Eraser, &mut canvas);

    session.set_color(Color32::RED, &mut canvas);

    assert_eq!(session.mode(), ToolMode::Pencil);
    assert_eq!(canvas.active_tool(), Some(ToolMode::Pencil));
}

#[test]
fn test_color_keeps_mode_in_later_editions() {
    let (mut session, mut canvas) = create_session(Edition::Shapes);
    session.set_mode(ToolMode::Eraser, &mut canvas);

    session.set_color(Color32::RED, &mut canvas);

    assert_eq!(session.mode(), ToolMode::Eraser);
}

#[test]
fn test_policy_flag_overrides_edition() {
    let mut config = SessionConfig::for_edition(Edition::Text);
    config.color_selection_forces_pencil_mode = true;
    let mut session = DrawingSession::new(config).unwrap();
    let mut canvas = Canvas::new();
    session.set_mode(ToolMode::Circle, &mut canvas);

    session.set_color(Color32::YELLOW, &mut canvas);

    assert_eq!(session.mode(), ToolMode::Pencil);
}

#[test]
fn test_clear_survives_in_every_mode() {
    let (mut session, mut canvas) = create_session(Edition::Text);

    for mode in [ToolMode::Pencil, ToolMode::Eraser, ToolMode::Square, ToolMode::Circle] {
        session.set_mode(mode, &mut canvas);
        session.on_press(pos2(1.0, 1.0), &mut canvas);
        session.on_release(pos2(9.0, 9.0), &mut canvas);
        assert!(!canvas.display_list().is_empty(), "{mode}");

        session.clear(&mut canvas);
        assert!(canvas.display_list().is_empty(), "{mode}");
        assert_eq!(session.mode(), mode);

        session.on_press(pos2(3.0, 3.0), &mut canvas);
        session.on_release(pos2(3.0, 3.0), &mut canvas);
        assert_eq!(canvas.display_list().len(), 1, "{mode}");
        session.clear(&mut canvas);
    }

    session.set_mode(ToolMode::Text, &mut canvas);
    session.clear(&mut canvas);
    canvas.answer_text(Some("still here".to_owned()));
    session.on_press(pos2(3.0, 3.0), &mut canvas);
    assert!(matches!(canvas.display_list(), [Primitive::TextLabel { .. }]));
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = SessionConfig::for_edition(Edition::Shapes);
    config.background_color = "#zzzzzz".to_owned();
    assert!(DrawingSession::new(config).is_err());
}
