//! Scripted fake modeler
//!
//! Records every call the harness makes into a shared event log that outlives
//! the application, so tests can check ordering after `dispose`.

use crate::fixtures::cube_renderer;
use kurbo::Vec2;
use parking_lot::Mutex;
use scenecheck_harness::{
    AppError, Application, LaunchOptions, Manipulator, ManipulatorKind, ShapeKind,
};
use scenecheck_image::{save_png, RgbaImage};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// World units moved per pixel of horizontal drag
pub const TRANSLATE_PER_PIXEL: f64 = 0.01;
/// Degrees rotated per pixel of horizontal drag
pub const ROTATE_DEGREES_PER_PIXEL: f64 = 0.5;
/// Scale factor change per pixel of horizontal drag
pub const SCALE_PER_PIXEL: f64 = 0.01;

type EventLog = Arc<Mutex<Vec<AppEvent>>>;
type Renderer = Arc<dyn Fn(&str) -> RgbaImage + Send + Sync>;

/// Call observed by the fake
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Launched { interactive: bool },
    Visible(bool),
    SceneLoaded(PathBuf),
    ImageWritten(PathBuf),
    Refreshed,
    ShapeAdded(ShapeKind),
    ManipulatorBound(ManipulatorKind),
    ManipulatorInstalled(ManipulatorKind),
    Picked { axis: usize, position: Vec2 },
    Dragged { position: Vec2, delta: Vec2 },
    Disposed,
}

/// Translation, rotation and scale of one shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: [f64; 3],
    pub rotation_degrees: [f64; 3],
    pub scale: [f64; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: [0.0; 3],
            rotation_degrees: [0.0; 3],
            scale: [1.0; 3],
        }
    }
}

/// Shared handle to a shape's transform
#[derive(Debug, Clone, Default)]
pub struct FakeTransformation(Arc<Mutex<Transform>>);

impl FakeTransformation {
    pub fn snapshot(&self) -> Transform {
        *self.0.lock()
    }

    pub fn translation(&self) -> [f64; 3] {
        self.0.lock().translation
    }

    pub fn same_node(&self, other: &FakeTransformation) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FakeCamera {
    pub eye: [f64; 3],
}

impl Default for FakeCamera {
    fn default() -> Self {
        Self { eye: [3.0, 4.0, 5.0] }
    }
}

/// Manipulator applying fixed per-pixel drag rates along the picked axis
#[derive(Debug)]
pub struct FakeManipulator {
    kind: ManipulatorKind,
    transformation: Option<FakeTransformation>,
    picked_axis: Option<usize>,
    log: EventLog,
}

impl FakeManipulator {
    fn new(kind: ManipulatorKind, log: EventLog) -> Self {
        Self {
            kind,
            transformation: None,
            picked_axis: None,
            log,
        }
    }

    pub fn kind(&self) -> ManipulatorKind {
        self.kind
    }

    pub fn picked_axis(&self) -> Option<usize> {
        self.picked_axis
    }

    pub fn transformation(&self) -> Option<&FakeTransformation> {
        self.transformation.as_ref()
    }
}

impl Manipulator for FakeManipulator {
    type Transformation = FakeTransformation;
    type Camera = FakeCamera;

    fn set_transformation(&mut self, transformation: FakeTransformation) {
        self.transformation = Some(transformation);
        self.log.lock().push(AppEvent::ManipulatorBound(self.kind));
    }

    fn set_picked_info(&mut self, axis: usize, _camera: &FakeCamera, position: Vec2) {
        self.picked_axis = Some(axis);
        self.log.lock().push(AppEvent::Picked { axis, position });
    }

    fn dragged(&mut self, position: Vec2, delta: Vec2) {
        self.log.lock().push(AppEvent::Dragged { position, delta });

        let (Some(transformation), Some(axis)) = (&self.transformation, self.picked_axis) else {
            return;
        };
        if axis > 2 {
            return;
        }

        let mut transform = transformation.0.lock();
        match self.kind {
            ManipulatorKind::Translate => transform.translation[axis] += delta.x * TRANSLATE_PER_PIXEL,
            ManipulatorKind::Rotate => {
                transform.rotation_degrees[axis] += delta.x * ROTATE_DEGREES_PER_PIXEL;
            }
            ManipulatorKind::Scale => transform.scale[axis] *= 1.0 + delta.x * SCALE_PER_PIXEL,
        }
    }
}

/// Launch script for fake applications
#[derive(Clone)]
pub struct FakeModeler {
    log: EventLog,
    renderer: Renderer,
    ready_after_polls: Option<usize>,
    unconstructible: Vec<ManipulatorKind>,
    fail_launch: bool,
}

impl Default for FakeModeler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FakeModeler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeModeler")
            .field("ready_after_polls", &self.ready_after_polls)
            .field("unconstructible", &self.unconstructible)
            .field("fail_launch", &self.fail_launch)
            .finish_non_exhaustive()
    }
}

impl FakeModeler {
    /// Ready on first poll, renders with [`cube_renderer`]
    pub fn new() -> Self {
        Self {
            log: Arc::default(),
            renderer: Arc::new(cube_renderer),
            ready_after_polls: Some(0),
            unconstructible: Vec::new(),
            fail_launch: false,
        }
    }

    pub fn with_renderer(mut self, renderer: impl Fn(&str) -> RgbaImage + Send + Sync + 'static) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }

    /// Report not-ready for the first `polls` checks
    pub fn ready_after(mut self, polls: usize) -> Self {
        self.ready_after_polls = Some(polls);
        self
    }

    pub fn never_ready(mut self) -> Self {
        self.ready_after_polls = None;
        self
    }

    pub fn without_manipulator(mut self, kind: ManipulatorKind) -> Self {
        self.unconstructible.push(kind);
        self
    }

    pub fn failing_launch(mut self) -> Self {
        self.fail_launch = true;
        self
    }

    pub fn launch(&self, options: LaunchOptions) -> Result<FakeApplication, AppError> {
        if self.fail_launch {
            return Err(AppError::Launch("display unavailable".to_string()));
        }
        self.log.lock().push(AppEvent::Launched {
            interactive: options.interactive,
        });
        Ok(FakeApplication {
            log: Arc::clone(&self.log),
            renderer: Arc::clone(&self.renderer),
            ready_after_polls: self.ready_after_polls,
            polls: AtomicUsize::new(0),
            unconstructible: self.unconstructible.clone(),
            visible: false,
            scene: None,
            shapes: Vec::new(),
            manipulator: None,
            camera: FakeCamera::default(),
        })
    }

    pub fn launcher(&self) -> impl Fn(LaunchOptions) -> Result<FakeApplication, AppError> + '_ {
        move |options| self.launch(options)
    }

    pub fn events(&self) -> Vec<AppEvent> {
        self.log.lock().clone()
    }

    pub fn launches(&self) -> usize {
        self.log
            .lock()
            .iter()
            .filter(|e| matches!(e, AppEvent::Launched { .. }))
            .count()
    }
}

/// Fake modeler instance
pub struct FakeApplication {
    log: EventLog,
    renderer: Renderer,
    ready_after_polls: Option<usize>,
    polls: AtomicUsize,
    unconstructible: Vec<ManipulatorKind>,
    visible: bool,
    scene: Option<String>,
    shapes: Vec<(ShapeKind, FakeTransformation)>,
    manipulator: Option<FakeManipulator>,
    camera: FakeCamera,
}

impl fmt::Debug for FakeApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeApplication")
            .field("visible", &self.visible)
            .field("scene_loaded", &self.scene.is_some())
            .field("shapes", &self.shapes.len())
            .field("manipulator", &self.manipulator)
            .finish_non_exhaustive()
    }
}

impl FakeApplication {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn scene(&self) -> Option<&str> {
        self.scene.as_deref()
    }

    pub fn shapes(&self) -> &[(ShapeKind, FakeTransformation)] {
        &self.shapes
    }

    pub fn current_manipulator(&self) -> Option<&FakeManipulator> {
        self.manipulator.as_ref()
    }

    fn record(&self, event: AppEvent) {
        self.log.lock().push(event);
    }
}

impl Application for FakeApplication {
    type Transformation = FakeTransformation;
    type Camera = FakeCamera;
    type Manipulator = FakeManipulator;

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.record(AppEvent::Visible(visible));
    }

    fn is_ready(&self) -> bool {
        let polls = self.polls.fetch_add(1, Ordering::Relaxed);
        self.visible && self.ready_after_polls.is_some_and(|after| polls >= after)
    }

    fn load_scene(&mut self, path: &Path) -> Result<(), AppError> {
        let text = fs::read_to_string(path).map_err(|e| AppError::scene_load(path, e.to_string()))?;
        self.scene = Some(text);
        self.record(AppEvent::SceneLoaded(path.to_path_buf()));
        Ok(())
    }

    fn write_image(&mut self, path: &Path) -> Result<RgbaImage, AppError> {
        let image = (self.renderer)(self.scene.as_deref().unwrap_or_default());
        save_png(&image, path).map_err(|e| AppError::render(path, e.to_string()))?;
        self.record(AppEvent::ImageWritten(path.to_path_buf()));
        Ok(image)
    }

    fn refresh(&mut self) {
        self.record(AppEvent::Refreshed);
    }

    fn add_shape(&mut self, kind: ShapeKind) -> Result<FakeTransformation, AppError> {
        let transformation = FakeTransformation::default();
        self.shapes.push((kind, transformation.clone()));
        self.record(AppEvent::ShapeAdded(kind));
        Ok(transformation)
    }

    fn new_manipulator(&self, kind: ManipulatorKind) -> Result<FakeManipulator, AppError> {
        if self.unconstructible.contains(&kind) {
            return Err(AppError::ManipulatorConstruction {
                kind,
                message: "no accessible constructor".to_string(),
            });
        }
        Ok(FakeManipulator::new(kind, Arc::clone(&self.log)))
    }

    fn set_current_manipulator(&mut self, manipulator: FakeManipulator) {
        self.record(AppEvent::ManipulatorInstalled(manipulator.kind));
        self.manipulator = Some(manipulator);
    }

    fn current_manipulator_mut(&mut self) -> Option<&mut FakeManipulator> {
        self.manipulator.as_mut()
    }

    fn view_camera(&self) -> FakeCamera {
        self.camera
    }

    fn dispose(self) {
        self.record(AppEvent::Disposed);
    }
}
