use glam::Vec2;
use running_train::{
    AppCommand, AppController, AppIntent, AppState, MotionMode, PointerModifiers, TrackShape,
    TrainOptions,
};

fn press(pos: Vec2, modifiers: PointerModifiers) -> AppIntent {
    AppIntent::PointerPressed {
        canvas_pos: pos,
        modifiers,
    }
}

const SHIFT: PointerModifiers = PointerModifiers {
    shift: true,
    command: false,
};

const CTRL: PointerModifiers = PointerModifiers {
    shift: false,
    command: true,
};

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_drag_moves_control_point_and_release_ends_drag() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let before = state.perimeter().expect("Start-Strecke gültig");

    controller
        .handle_intent(&mut state, press(Vec2::new(151.0, 331.0), PointerModifiers::default()))
        .expect("Press sollte durchlaufen");
    assert_eq!(state.dragged_point, Some(0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerDragged {
                canvas_pos: Vec2::new(100.0, 250.0),
            },
        )
        .expect("Drag sollte durchlaufen");

    let track = state.track.as_ref().expect("Strecke vorhanden");
    assert_eq!(track.points()[0], Vec2::new(100.0, 250.0));
    let after = state.perimeter().expect("Strecke gültig");
    assert!(after > before, "Umfang sollte wachsen: {before} → {after}");

    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("Release sollte durchlaufen");
    assert_eq!(state.dragged_point, None);
}

#[test]
fn test_shift_click_inserts_point_on_nearest_segment() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, press(Vec2::new(300.0, 455.0), SHIFT))
        .expect("Einfügen sollte durchlaufen");

    let track = state.track.as_ref().expect("Strecke vorhanden");
    assert_eq!(track.point_count(), 5);
    // Zwischen (150,450) und (450,450) eingefügt
    assert_eq!(track.points()[2], Vec2::new(300.0, 455.0));
    assert_eq!(state.slider_max(), 5.0);
    assert_eq!(state.car_count(), 5);
}

#[test]
fn test_ctrl_click_removes_point_and_wraps_progress() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ProgressChanged { value: 3.5 })
        .expect("Slider sollte durchlaufen");
    assert_eq!(state.progress, 3.5);

    controller
        .handle_intent(&mut state, press(Vec2::new(450.0, 150.0), CTRL))
        .expect("Entfernen sollte durchlaufen");

    assert_eq!(state.point_count(), 3);
    assert!((state.progress - 0.5).abs() < 1e-5, "progress = {}", state.progress);
}

#[test]
fn test_ctrl_click_never_drops_below_two_points() {
    let mut controller = AppController::new();
    let options = TrainOptions {
        initial_points: vec![[100.0, 100.0], [300.0, 100.0]],
        ..TrainOptions::default()
    };
    let mut state = AppState::from_options(options);

    controller
        .handle_intent(&mut state, press(Vec2::new(100.0, 100.0), CTRL))
        .expect("Abgelehntes Entfernen ist kein Fehler");

    assert_eq!(state.point_count(), 2);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::RemovePoint { index: 0 })
    ));
}

#[test]
fn test_play_advances_and_wraps_progress() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.playback.speed = 1.0;

    controller
        .handle_intent(&mut state, AppIntent::FrameAdvanced { dt: 0.5 })
        .expect("Frame sollte durchlaufen");
    assert_eq!(state.progress, 0.0, "pausiert bewegt sich nichts");

    controller
        .handle_intent(&mut state, AppIntent::PlayPauseRequested)
        .expect("Play sollte durchlaufen");
    assert!(state.playback.playing);

    for _ in 0..9 {
        controller
            .handle_intent(&mut state, AppIntent::FrameAdvanced { dt: 0.5 })
            .expect("Frame sollte durchlaufen");
    }
    // 4.5 Segmente auf einer 4-Punkt-Strecke
    assert!((state.progress - 0.5).abs() < 1e-4, "progress = {}", state.progress);
}

#[test]
fn test_display_toggles_change_scene() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let scene = controller.build_render_scene(&state);
    assert!(matches!(scene.track, Some(TrackShape::Rails { .. })));
    assert!(!scene.smoke);

    for intent in [
        AppIntent::SimpleTrackToggled { enabled: true },
        AppIntent::SmokeToggled { enabled: true },
        AppIntent::SceneryToggled { enabled: false },
        AppIntent::MotionModeChanged {
            mode: MotionMode::Naive,
        },
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Schalter sollte durchlaufen");
    }

    let scene = controller.build_render_scene(&state);
    assert!(matches!(scene.track, Some(TrackShape::Simple { ref segments }) if segments.len() == 4));
    assert!(scene.smoke);
    assert!(!scene.scenery);
    assert_eq!(state.display.motion_mode, MotionMode::Naive);
    assert_eq!(scene.cars.len(), 4);
    assert!(scene.cars[0].is_locomotive);
    assert!(scene.cars[1..].iter().all(|c| !c.is_locomotive));
}

#[test]
fn test_reset_restores_initial_track() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let initial = state.perimeter().expect("Start-Strecke gültig");

    controller
        .handle_intent(&mut state, press(Vec2::new(300.0, 455.0), SHIFT))
        .expect("Einfügen sollte durchlaufen");
    assert_eq!(state.point_count(), 5);

    controller
        .handle_intent(&mut state, AppIntent::ResetTrackRequested)
        .expect("Reset sollte durchlaufen");

    assert_eq!(state.point_count(), 4);
    assert_eq!(state.perimeter(), Some(initial));
}

#[test]
fn test_invalid_initial_points_render_nothing() {
    let mut controller = AppController::new();
    let options = TrainOptions {
        initial_points: vec![[100.0, 100.0]],
        ..TrainOptions::default()
    };
    let mut state = AppState::from_options(options);
    assert!(state.track.is_none());

    let scene = controller.build_render_scene(&state);
    assert!(!scene.has_track());
    assert!(scene.cars.is_empty());

    // Editieren ohne Strecke ist ein Fehler, kein Panic
    let result = controller.handle_command(
        &mut state,
        AppCommand::InsertPointOnTrack {
            position: Vec2::new(10.0, 10.0),
        },
    );
    assert!(result.is_err());
}
