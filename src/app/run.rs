//! Native-window entry points.
//!
//! Each `run_*` function takes the receiving half of a telemetry channel
//! plus a [`DashboardConfig`], opens a native window and blocks until it is
//! closed. The producer side keeps running independently and stops on its
//! own once the receiver is gone.

use std::sync::mpsc::Receiver;

use eframe::egui;

use super::{DashLayout, DashboardApp};
use crate::config::DashboardConfig;
use crate::source::TelemetryFrame;

/// Open the combined dashboard: G dial, force scope and pedal gauges.
pub fn run_dashboard(rx: Receiver<TelemetryFrame>, cfg: DashboardConfig) -> eframe::Result<()> {
    run_layout(rx, cfg, DashLayout::Combined, egui::vec2(1800.0, 800.0))
}

/// Open the standalone polar G dial.
pub fn run_g_dial(rx: Receiver<TelemetryFrame>, cfg: DashboardConfig) -> eframe::Result<()> {
    run_layout(rx, cfg, DashLayout::Dial, egui::vec2(800.0, 800.0))
}

/// Open the standalone scrolling force scope.
pub fn run_force_scope(rx: Receiver<TelemetryFrame>, cfg: DashboardConfig) -> eframe::Result<()> {
    run_layout(rx, cfg, DashLayout::Scope, egui::vec2(1900.0, 1000.0))
}

fn run_layout(
    rx: Receiver<TelemetryFrame>,
    mut cfg: DashboardConfig,
    layout: DashLayout,
    default_size: egui::Vec2,
) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Application icon from icon.svg, unless the caller set one.
    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts.viewport.clone().with_inner_size(default_size);
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(move |_cc| {
            let app = DashboardApp::new(rx, layout, &cfg)?;
            Ok(Box::new(app))
        }),
    )
}

/// Load the bundled `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file is missing or cannot be parsed/rendered; the
/// window then falls back to the platform default icon.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
