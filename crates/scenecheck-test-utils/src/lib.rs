//! Testing utilities for scenecheck workspace
//!
//! A scripted stand-in for the modeler plus fixture writers.

#![allow(missing_docs)]

pub mod fake;
pub mod fixtures;

pub use fake::{
    AppEvent, FakeApplication, FakeCamera, FakeManipulator, FakeModeler, FakeTransformation,
    Transform, ROTATE_DEGREES_PER_PIXEL, SCALE_PER_PIXEL, TRANSLATE_PER_PIXEL,
};
pub use fixtures::{
    cube_renderer, nudged, write_fixture, write_source, BACKGROUND, BOX_SCENE_XML, CUBE_COLOR,
    EMPTY_SCENE_XML, RENDER_HEIGHT, RENDER_WIDTH,
};
