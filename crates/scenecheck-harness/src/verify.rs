//! Rendered-scene verification against a reference image

use crate::app::Application;
use crate::config::AssetLayout;
use crate::error::HarnessError;
use scenecheck_image::{compare_images, load_reference, ComparisonReport};

/// Render the application's view for `fixture` and compare to its reference
///
/// The application is hidden and disposed right after rendering, whether or
/// not the render succeeded. A missing reference image is an error, not a
/// skip. Returns the report only when every channel is within `tolerance`.
pub fn compare_rendered<A: Application>(
    mut app: A,
    layout: &AssetLayout,
    fixture: &str,
    tolerance: u8,
) -> Result<ComparisonReport, HarnessError> {
    let produced_path = layout.produced_path(fixture);
    let rendered = app.write_image(&produced_path);

    app.set_visible(false);
    app.dispose();

    let produced = rendered?;
    tracing::info!(
        fixture,
        width = produced.width(),
        height = produced.height(),
        path = %produced_path.display(),
        "produced image"
    );

    let reference_path = layout.reference_path(fixture);
    let reference = load_reference(&reference_path)?;
    tracing::debug!(
        width = reference.width(),
        height = reference.height(),
        path = %reference_path.display(),
        "reference image"
    );

    let report = compare_images(&reference, &produced, tolerance)?.ensure_match()?;
    Ok(report)
}
