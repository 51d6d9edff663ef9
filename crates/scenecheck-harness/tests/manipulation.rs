//! Manipulation scenarios against the fake modeler

use pretty_assertions::assert_eq;
use scenecheck_harness::{
    logging, AppError, GradingContext, HarnessConfig, HarnessError, ManipulationRequest,
    ManipulatorKind, ManipulatorState, SettlePolicy, ShapeKind, Vec2,
};
use scenecheck_test_utils::{
    AppEvent, FakeModeler, ROTATE_DEGREES_PER_PIXEL, SCALE_PER_PIXEL, TRANSLATE_PER_PIXEL,
};
use tempfile::TempDir;

fn context(dir: &TempDir) -> GradingContext {
    logging::init();
    let config = HarnessConfig::new()
        .with_scan_root(dir.path())
        .with_settle(SettlePolicy::with_timeout_ms(200), SettlePolicy::with_timeout_ms(200));
    GradingContext::new(config).unwrap()
}

fn drag_x(kind: ManipulatorKind, axis: usize, dx: f64) -> ManipulationRequest {
    ManipulationRequest::new(kind, axis, Vec2::ZERO, Vec2::new(dx, 0.0))
}

#[test]
fn translate_on_x_moves_the_cube() {
    let dir = tempfile::tempdir().unwrap();
    let modeler = FakeModeler::new();

    let scenario = context(&dir)
        .setup_manipulation(&modeler.launcher(), &drag_x(ManipulatorKind::Translate, 0, 10.0))
        .unwrap();

    assert_eq!(scenario.state(), ManipulatorState::Dragged);
    assert_eq!(
        scenario.transformation().translation(),
        [10.0 * TRANSLATE_PER_PIXEL, 0.0, 0.0]
    );

    let app = scenario.app();
    assert!(app.is_visible());
    let [(kind, shape_transform)] = app.shapes() else {
        panic!("expected exactly one shape");
    };
    assert_eq!(*kind, ShapeKind::Cube);
    assert!(shape_transform.same_node(scenario.transformation()));

    let manipulator = app.current_manipulator().unwrap();
    assert_eq!(manipulator.kind(), ManipulatorKind::Translate);
    assert_eq!(manipulator.picked_axis(), Some(0));
    assert!(manipulator
        .transformation()
        .is_some_and(|t| t.same_node(scenario.transformation())));
}

#[test]
fn scenario_calls_happen_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let modeler = FakeModeler::new();

    let scenario = context(&dir)
        .setup_manipulation(&modeler.launcher(), &drag_x(ManipulatorKind::Translate, 0, 10.0))
        .unwrap();

    let expected = vec![
        AppEvent::Launched { interactive: false },
        AppEvent::Visible(true),
        AppEvent::ShapeAdded(ShapeKind::Cube),
        AppEvent::ManipulatorBound(ManipulatorKind::Translate),
        AppEvent::ManipulatorInstalled(ManipulatorKind::Translate),
        AppEvent::Refreshed,
        AppEvent::Picked {
            axis: 0,
            position: Vec2::ZERO,
        },
        AppEvent::Dragged {
            position: Vec2::ZERO,
            delta: Vec2::new(10.0, 0.0),
        },
        AppEvent::Refreshed,
    ];
    assert_eq!(modeler.events(), expected);

    // The live application is handed back; closing it is the caller's call.
    scenario.dispose();
    assert_eq!(modeler.events().last(), Some(&AppEvent::Disposed));
}

#[test]
fn rotate_and_scale_follow_the_picked_axis() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir);
    let modeler = FakeModeler::new();

    let rotated = ctx
        .setup_manipulation(&modeler.launcher(), &drag_x(ManipulatorKind::Rotate, 1, 20.0))
        .unwrap();
    assert_eq!(
        rotated.transformation().snapshot().rotation_degrees,
        [0.0, 20.0 * ROTATE_DEGREES_PER_PIXEL, 0.0]
    );

    let scaled = ctx
        .setup_manipulation(&modeler.launcher(), &drag_x(ManipulatorKind::Scale, 2, 50.0))
        .unwrap();
    assert_eq!(
        scaled.transformation().snapshot().scale,
        [1.0, 1.0, 1.0 + 50.0 * SCALE_PER_PIXEL]
    );
    assert_eq!(modeler.launches(), 2);
}

#[test]
fn harness_passes_axis_through_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let modeler = FakeModeler::new();

    let scenario = context(&dir)
        .setup_manipulation(&modeler.launcher(), &drag_x(ManipulatorKind::Translate, 7, 10.0))
        .unwrap();

    let manipulator = scenario.app().current_manipulator().unwrap();
    assert_eq!(manipulator.picked_axis(), Some(7));
    // Out-of-range axes are the manipulator's business, not the harness's.
    assert_eq!(scenario.transformation().translation(), [0.0; 3]);
    assert_eq!(scenario.state(), ManipulatorState::Dragged);
}

#[test]
fn vertical_drag_is_left_to_the_manipulator() {
    let dir = tempfile::tempdir().unwrap();
    let modeler = FakeModeler::new();
    let request = ManipulationRequest::new(
        ManipulatorKind::Translate,
        0,
        Vec2::new(4.0, 4.0),
        Vec2::new(0.0, 5.0),
    );

    let scenario = context(&dir)
        .setup_manipulation(&modeler.launcher(), &request)
        .unwrap();
    assert_eq!(scenario.transformation().translation(), [0.0; 3]);
}

#[test]
fn manipulator_construction_failure_is_returned() {
    let dir = tempfile::tempdir().unwrap();
    let modeler = FakeModeler::new().without_manipulator(ManipulatorKind::Rotate);

    let err = context(&dir)
        .setup_manipulation(&modeler.launcher(), &drag_x(ManipulatorKind::Rotate, 0, 10.0))
        .unwrap_err();

    assert!(matches!(
        err,
        HarnessError::Application(AppError::ManipulatorConstruction {
            kind: ManipulatorKind::Rotate,
            ..
        })
    ));
    assert!(err.to_string().contains("rotate manipulator"));

    let events = modeler.events();
    assert!(!events.iter().any(|e| matches!(e, AppEvent::Dragged { .. })));
    assert_eq!(events.last(), Some(&AppEvent::Disposed));
}

#[test]
fn configured_shape_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let config = HarnessConfig::from_toml_str("shape = \"sphere\"")
        .unwrap()
        .with_scan_root(dir.path());
    let ctx = GradingContext::new(config).unwrap();
    let modeler = FakeModeler::new();

    let scenario = ctx
        .setup_manipulation(&modeler.launcher(), &drag_x(ManipulatorKind::Translate, 0, 1.0))
        .unwrap();
    assert_eq!(scenario.app().shapes()[0].0, ShapeKind::Sphere);
    assert!(modeler.events().contains(&AppEvent::ShapeAdded(ShapeKind::Sphere)));
}

#[test]
fn slow_startup_is_waited_for() {
    let dir = tempfile::tempdir().unwrap();
    let modeler = FakeModeler::new().ready_after(3);

    let scenario = context(&dir)
        .setup_manipulation(&modeler.launcher(), &drag_x(ManipulatorKind::Translate, 0, 10.0))
        .unwrap();
    assert_eq!(scenario.state(), ManipulatorState::Dragged);
}

#[test]
fn unready_application_is_disposed() {
    let dir = tempfile::tempdir().unwrap();
    let config = HarnessConfig::new()
        .with_scan_root(dir.path())
        .with_settle(SettlePolicy::with_timeout_ms(20), SettlePolicy::with_timeout_ms(20));
    let modeler = FakeModeler::new().never_ready();

    let err = GradingContext::new(config)
        .unwrap()
        .setup_manipulation(&modeler.launcher(), &drag_x(ManipulatorKind::Translate, 0, 10.0))
        .unwrap_err();

    let HarnessError::NotReady { waited } = err else {
        panic!("expected not ready, got {err}");
    };
    assert!(waited.as_millis() >= 20);
    let events = modeler.events();
    assert!(!events.iter().any(|e| matches!(e, AppEvent::ShapeAdded(_))));
    assert_eq!(events.last(), Some(&AppEvent::Disposed));
}

#[test]
fn into_app_keeps_the_application_open() {
    let dir = tempfile::tempdir().unwrap();
    let modeler = FakeModeler::new();

    let app = context(&dir)
        .setup_manipulation(&modeler.launcher(), &drag_x(ManipulatorKind::Translate, 0, 10.0))
        .unwrap()
        .into_app();
    assert!(app.is_visible());
    assert!(!modeler.events().contains(&AppEvent::Disposed));
}
