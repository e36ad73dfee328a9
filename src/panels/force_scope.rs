//! Scrolling line scope for the plotted telemetry channels.
//!
//! The time axis is pinned to the session's scroll window, so traces sweep
//! left at constant speed; the value axis follows the symmetric autoscale
//! policy. The user can still box-zoom into a region, the next frame snaps
//! back to the live view.

use egui::Ui;
use egui_plot::{Legend, Line, Plot};

use crate::config::ChannelSpec;
use crate::data::session::TelemetrySession;
use crate::look::{alloc_color, ChannelLook};

struct ScopeTrace {
    name: String,
    label: String,
    look: ChannelLook,
}

pub struct ForceScopePanel {
    traces: Vec<ScopeTrace>,
    show_grid: bool,
}

impl ForceScopePanel {
    /// Channels without an explicit color get one from the global palette,
    /// keyed by their position in `specs`.
    pub fn new(specs: &[ChannelSpec], show_grid: bool) -> Self {
        let traces = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| ScopeTrace {
                name: spec.name.clone(),
                label: spec.label.clone(),
                look: ChannelLook {
                    color: spec.color.unwrap_or_else(|| alloc_color(i)),
                    width: spec.width,
                },
            })
            .collect();
        Self { traces, show_grid }
    }

    pub fn ui(&mut self, ui: &mut Ui, session: &TelemetrySession) {
        let (x_lo, x_hi) = session.x_bounds();
        let y_bounds = session.y_bounds();
        Plot::new("force_scope")
            .legend(Legend::default())
            .show_grid(self.show_grid)
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .x_axis_label("Time (s)")
            .y_axis_label("Value")
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(x_lo..=x_hi);
                if let Some((y_lo, y_hi)) = y_bounds {
                    plot_ui.set_plot_bounds_y(y_lo..=y_hi);
                }
                for trace in &self.traces {
                    if let Some(points) = session.series(&trace.name) {
                        plot_ui.line(
                            Line::new(&trace.label, points)
                                .color(trace.look.color)
                                .width(trace.look.width),
                        );
                    }
                }
            });
    }
}
