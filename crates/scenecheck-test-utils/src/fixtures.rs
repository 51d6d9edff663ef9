//! Fixture files and a toy renderer

use scenecheck_harness::AssetLayout;
use scenecheck_image::{save_png, PackedRgb, RgbaImage};
use std::fs;
use std::path::Path;

pub const RENDER_WIDTH: u32 = 32;
pub const RENDER_HEIGHT: u32 = 24;
pub const BACKGROUND: PackedRgb = PackedRgb::new(0x20, 0x20, 0x20);
pub const CUBE_COLOR: PackedRgb = PackedRgb::new(0x30, 0x90, 0xD0);

pub const BOX_SCENE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<scene>
  <camera type="perspective" eye="3 4 5" target="0 0 0" up="0 1 0"/>
  <light position="5 5 5" color="1 1 1"/>
  <node name="box">
    <cube/>
  </node>
</scene>
"#;

pub const EMPTY_SCENE_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<scene/>
"#;

/// Background fill, plus a square when the scene mentions a cube
pub fn cube_renderer(scene: &str) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(RENDER_WIDTH, RENDER_HEIGHT, BACKGROUND.to_rgba());
    if scene.contains("<cube") {
        for y in 4..20 {
            for x in 8..24 {
                image.put_pixel(x, y, CUBE_COLOR.to_rgba());
            }
        }
    }
    image
}

/// Write `<name>.xml` and `<name>.correct.png` into `layout.dir`
pub fn write_fixture(layout: &AssetLayout, name: &str, scene_xml: &str, reference: &RgbaImage) {
    fs::create_dir_all(&layout.dir).unwrap();
    fs::write(layout.scene_path(name), scene_xml).unwrap();
    save_png(reference, &layout.reference_path(name)).unwrap();
}

/// Write a source file below `root`, creating parent directories
pub fn write_source(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Shift each channel of `color` by the given signed amounts
pub fn nudged(color: PackedRgb, delta: [i16; 3]) -> PackedRgb {
    let [red, green, blue] = color.rgb();
    let shift = |value: u8, by: i16| u8::try_from(i16::from(value) + by).unwrap();
    PackedRgb::new(shift(red, delta[0]), shift(green, delta[1]), shift(blue, delta[2]))
}
