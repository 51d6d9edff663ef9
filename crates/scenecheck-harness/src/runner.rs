//! Scene regression runner
//!
//! Gate on import compliance, load the fixture's scene, then verify the
//! rendered view.

use crate::app::{Application, ApplicationLauncher, LaunchOptions};
use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::settle::wait_until_ready;
use crate::verify::compare_rendered;
use scenecheck_image::ComparisonReport;
use scenecheck_imports::{ImportGate, ImportScan};

/// Run the regression check for one fixture
///
/// A failing import verdict stops the run before any application is
/// launched.
pub fn run_scene<S, L>(
    gate: &ImportGate<S>,
    launcher: &L,
    config: &HarnessConfig,
    fixture: &str,
) -> Result<ComparisonReport, HarnessError>
where
    S: ImportScan,
    L: ApplicationLauncher,
{
    gate.require_pass()?;

    tracing::info!(fixture, "running scene regression");
    let mut app = launcher.launch(LaunchOptions { interactive: false })?;

    if let Err(err) = prepare(&mut app, config, fixture) {
        app.dispose();
        return Err(err);
    }

    compare_rendered(app, &config.assets, fixture, config.tolerance)
}

fn prepare<A: Application>(
    app: &mut A,
    config: &HarnessConfig,
    fixture: &str,
) -> Result<(), HarnessError> {
    app.set_visible(true);
    wait_until_ready(app, &config.scene_settle)?;

    let scene = config.assets.scene_path(fixture);
    tracing::debug!(path = %scene.display(), "loading scene");
    app.load_scene(&scene)?;
    Ok(())
}
