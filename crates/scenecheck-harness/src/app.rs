//! Application collaborator interface
//!
//! The modeler, its scene graph, shapes and manipulators live outside this
//! crate. The harness drives them only through these traits.

use crate::error::AppError;
use kurbo::Vec2;
use scenecheck_image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Shape the application can add to its scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Unit cube
    #[default]
    Cube,
    /// Cylinder
    Cylinder,
    /// Sphere
    Sphere,
}

impl ShapeKind {
    /// Get human-readable name
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Sphere => "sphere",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Manipulator variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManipulatorKind {
    /// Moves along an axis
    Translate,
    /// Rotates about an axis
    Rotate,
    /// Scales along an axis
    Scale,
}

impl ManipulatorKind {
    /// Get human-readable name
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ManipulatorKind::Translate => "translate",
            ManipulatorKind::Rotate => "rotate",
            ManipulatorKind::Scale => "scale",
        }
    }
}

impl fmt::Display for ManipulatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interactive control bound to one transformation
pub trait Manipulator {
    /// Transformation handle the manipulator edits
    type Transformation;
    /// Camera used to interpret pointer input
    type Camera;

    /// Bind to a transformation
    fn set_transformation(&mut self, transformation: Self::Transformation);

    /// Select the axis and reference frame for the next drag
    fn set_picked_info(&mut self, axis: usize, camera: &Self::Camera, position: Vec2);

    /// Apply a pointer drag
    fn dragged(&mut self, position: Vec2, delta: Vec2);
}

/// Running modeler instance
pub trait Application {
    /// Handle to a shape's transformation; clones refer to the same node
    type Transformation: Clone;
    /// View camera
    type Camera;
    /// Manipulator type the application can host
    type Manipulator: Manipulator<Transformation = Self::Transformation, Camera = Self::Camera>;

    /// Show or hide the window
    fn set_visible(&mut self, visible: bool);

    /// Check if window and layout initialization have completed
    fn is_ready(&self) -> bool;

    /// Load a scene description, replacing the current scene
    fn load_scene(&mut self, path: &Path) -> Result<(), AppError>;

    /// Render the current view, write it to `path`, and return the image
    fn write_image(&mut self, path: &Path) -> Result<RgbaImage, AppError>;

    /// Force a redraw
    fn refresh(&mut self);

    /// Add a new shape and return its transformation
    fn add_shape(&mut self, kind: ShapeKind) -> Result<Self::Transformation, AppError>;

    /// Instantiate a manipulator
    fn new_manipulator(&self, kind: ManipulatorKind) -> Result<Self::Manipulator, AppError>;

    /// Install the manipulator the application draws and dispatches to
    fn set_current_manipulator(&mut self, manipulator: Self::Manipulator);

    /// Get the installed manipulator
    fn current_manipulator_mut(&mut self) -> Option<&mut Self::Manipulator>;

    /// Get the perspective view camera
    fn view_camera(&self) -> Self::Camera;

    /// Close the window and release the instance
    fn dispose(self)
    where
        Self: Sized;
}

/// Options for starting an application instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaunchOptions {
    /// Whether the instance accepts user input
    pub interactive: bool,
}

/// Creates fresh application instances
pub trait ApplicationLauncher {
    /// Application type launched
    type App: Application;

    /// Start a new instance
    fn launch(&self, options: LaunchOptions) -> Result<Self::App, AppError>;
}

impl<F, A> ApplicationLauncher for F
where
    F: Fn(LaunchOptions) -> Result<A, AppError>,
    A: Application,
{
    type App = A;

    fn launch(&self, options: LaunchOptions) -> Result<A, AppError> {
        self(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_display_lowercase() {
        assert_eq!(ShapeKind::Cube.to_string(), "cube");
        assert_eq!(ManipulatorKind::Translate.to_string(), "translate");
        assert_eq!(ShapeKind::default(), ShapeKind::Cube);
    }

    #[test]
    fn launch_defaults_to_non_interactive() {
        assert!(!LaunchOptions::default().interactive);
    }
}
