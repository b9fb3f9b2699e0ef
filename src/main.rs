//! sysbar — system bar appearance controller.
//!
//! Drives the controller against an in-memory window through the plugin-call
//! surface. Run with:  `RUST_LOG=debug sysbar`

use anyhow::Result;
use serde_json::json;
use sysbar_bridge::{BarPlugin, PluginCall};
use sysbar_config::{default_path, load as load_config};
use sysbar_controller::BarController;
use sysbar_core::Insets;
use sysbar_platform::{HeadlessWindow, InsetSnapshot};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("sysbar v{} starting", env!("CARGO_PKG_VERSION"));

    let config = load_config(default_path()).unwrap_or_default();

    let mut window = HeadlessWindow::new(config.window.api_level);
    window.set_dark_mode(config.window.dark_mode);

    let mut plugin = BarPlugin::new(BarController::new(config.window.api_level));
    plugin.controller_mut().attach(&mut window);

    // First layout pass delivers the initial inset snapshot.
    let snapshot = InsetSnapshot {
        status_bar: Insets::new(config.window.status_bar_height, 0, 0, 0),
        navigation_bar: Insets::new(0, config.window.navigation_bar_height, 0, 0),
        display_cutout: Insets::new(config.window.cutout_top, 0, 0, 0),
    };
    window.set_insets(Some(snapshot));
    plugin.controller_mut().insets_changed(&mut window, &snapshot);

    plugin.handle(
        &mut window,
        &PluginCall::new(
            "setStyle",
            json!({ "style": config.bars.style, "color": config.bars.color }),
        ),
    )?;
    plugin.handle(
        &mut window,
        &PluginCall::new(
            "setOverlaysWebView",
            json!({ "value": config.bars.overlays_content }),
        ),
    )?;
    if let Some(background) = &config.bars.background {
        plugin.handle(
            &mut window,
            &PluginCall::new("setBackground", json!({ "color": background })),
        )?;
    }

    // A full hide/show cycle; stored colours survive it.
    plugin.handle(&mut window, &PluginCall::new("hide", json!({ "animated": true })))?;
    plugin.handle(&mut window, &PluginCall::new("show", json!({ "animated": true })))?;

    let insets = plugin.handle(&mut window, &PluginCall::new("getSafeAreaInsets", json!({})))?;
    tracing::info!("safe area insets: {insets}");
    tracing::info!(
        "final state: {:?} ({} / {})",
        plugin.controller().state().style,
        plugin.controller().state().status_bar_color,
        plugin.controller().state().nav_bar_color,
    );

    Ok(())
}
