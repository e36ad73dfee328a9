//! Configuration of the dashboard windows.
//!
//! Plain data, filled in by the binary that opens a window and handed to one
//! of the `run_*` entry points; `..Default::default()` covers the common
//! case. Validation happens when the window builds its session, so invalid
//! values are reported before anything is drawn.

use eframe::egui::Color32;
use eframe::NativeOptions;

use crate::data::scale::SymmetricScale;

/// Sampling cadence and on-screen history of a scrolling window.
#[derive(Debug, Clone, Copy)]
pub struct WindowSizing {
    /// Polling cadence of the acquisition loop.
    pub sampling_rate_hz: u32,
    /// Seconds of history visible at once.
    pub display_seconds: f64,
}

impl Default for WindowSizing {
    fn default() -> Self {
        Self {
            sampling_rate_hz: 110,
            display_seconds: 5.0,
        }
    }
}

impl WindowSizing {
    /// Ring capacity: one slot per expected sample in the visible span.
    pub fn capacity(&self) -> usize {
        (f64::from(self.sampling_rate_hz) * self.display_seconds).floor() as usize
    }
}

/// One plotted telemetry channel.
#[derive(Debug, Clone)]
pub struct ChannelSpec {
    /// Key used by the telemetry source, e.g. `finalFF`.
    pub name: String,
    /// Legend label, e.g. `FFB (N)`.
    pub label: String,
    /// Explicit trace color; `None` allocates from the global palette.
    pub color: Option<Color32>,
    /// Trace width in points.
    pub width: f32,
}

impl ChannelSpec {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            color: None,
            width: 1.5,
        }
    }

    pub fn with_color(mut self, color: Color32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

/// Geometry of the polar G dial.
#[derive(Debug, Clone)]
pub struct GDialConfig {
    /// Radius of the outermost ring, in g; also fixes the plot bounds.
    pub max_g: f64,
    /// Radial spacing between rings, in g.
    pub ring_step: f64,
    /// Color of the acceleration marker.
    pub marker_color: Color32,
}

impl Default for GDialConfig {
    fn default() -> Self {
        Self {
            max_g: 2.0,
            ring_step: 0.5,
            marker_color: Color32::RED,
        }
    }
}

/// One vertical input gauge on the combined dashboard.
#[derive(Debug, Clone)]
pub struct PedalSpec {
    /// Telemetry channel holding the input, expected in `0..=1`.
    pub channel: String,
    pub label: String,
    pub color: Color32,
}

impl PedalSpec {
    pub fn new(channel: impl Into<String>, label: impl Into<String>, color: Color32) -> Self {
        Self {
            channel: channel.into(),
            label: label.into(),
            color,
        }
    }
}

fn default_pedals() -> Vec<PedalSpec> {
    vec![
        PedalSpec::new("brake", "Brake", Color32::RED),
        PedalSpec::new("gas", "Throttle", Color32::GREEN),
        PedalSpec::new("clutch", "Clutch", Color32::BLUE),
        PedalSpec::new("handbrake", "Handbrake", Color32::from_rgb(128, 0, 128)),
    ]
}

/// Top-level configuration shared by all window entry points.
#[derive(Clone)]
pub struct DashboardConfig {
    pub title: String,
    pub sizing: WindowSizing,
    /// Value-axis autoscale policy of the scope.
    pub scale: SymmetricScale,
    /// Channels plotted by the scope, in draw order.
    pub channels: Vec<ChannelSpec>,
    pub dial: GDialConfig,
    /// Gauges shown by the combined dashboard.
    pub pedals: Vec<PedalSpec>,
    /// Draw the scope's background grid.
    pub show_grid: bool,
    /// Override the eframe window options; `None` picks a per-view default
    /// size and the bundled icon.
    pub native_options: Option<NativeOptions>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Telemetry Dashboard".to_string(),
            sizing: WindowSizing::default(),
            scale: SymmetricScale::default(),
            channels: vec![ChannelSpec::new("finalFF", "FFB (N)").with_color(Color32::RED)],
            dial: GDialConfig::default(),
            pedals: default_pedals(),
            show_grid: true,
            native_options: None,
        }
    }
}
