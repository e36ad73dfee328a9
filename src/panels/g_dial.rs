//! Polar G-force dial: concentric reference rings, a crosshair and a marker
//! at the current `(lateral, longitudinal)` acceleration.

use egui::{Align2, Color32, Ui};
use egui_plot::{HLine, Line, Plot, PlotPoint, Points, Text, VLine};

use crate::config::GDialConfig;
use crate::data::session::TelemetrySession;

const CIRCLE_SEGMENTS: usize = 120;

pub struct GDialPanel {
    cfg: GDialConfig,
}

impl GDialPanel {
    pub fn new(cfg: GDialConfig) -> Self {
        Self { cfg }
    }

    pub fn ui(&mut self, ui: &mut Ui, session: &TelemetrySession) {
        let max_g = self.cfg.max_g;
        Plot::new("g_dial")
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(-max_g..=max_g);
                plot_ui.set_plot_bounds_y(-max_g..=max_g);
                self.draw_rings(plot_ui);
                if let Some(acc) = session.latest_acc_g() {
                    // Dial plane is lateral (x) vs longitudinal (z).
                    plot_ui.points(
                        Points::new("", vec![[acc[0], acc[2]]])
                            .radius(5.0)
                            .color(self.cfg.marker_color),
                    );
                }
            });
    }

    /// Rings every `ring_step` g, radius labels on the diagonal, crosshair
    /// through the origin. The 1 g ring and the outermost ring are
    /// emphasized.
    fn draw_rings(&self, plot_ui: &mut egui_plot::PlotUi) {
        let steps = if self.cfg.ring_step > 0.0 {
            (self.cfg.max_g / self.cfg.ring_step).round() as usize
        } else {
            0
        };
        for i in 1..=steps {
            let r = self.cfg.ring_step * i as f64;
            let (color, width) = if i == steps {
                (Color32::BLUE, 2.0)
            } else if (r - 1.0).abs() < 1e-9 {
                (Color32::YELLOW, 2.0)
            } else {
                (Color32::GRAY, 1.0)
            };
            let circle: Vec<[f64; 2]> = (0..=CIRCLE_SEGMENTS)
                .map(|k| {
                    let angle = std::f64::consts::TAU * k as f64 / CIRCLE_SEGMENTS as f64;
                    [r * angle.cos(), r * angle.sin()]
                })
                .collect();
            plot_ui.line(Line::new("", circle).color(color).width(width));

            let d = r / std::f64::consts::SQRT_2;
            plot_ui.text(
                Text::new(
                    "",
                    PlotPoint::new(d, d),
                    egui::RichText::new(format!("{r:.1}")).color(Color32::RED),
                )
                .anchor(Align2::CENTER_CENTER),
            );
        }
        plot_ui.hline(HLine::new("", 0.0).color(Color32::GRAY));
        plot_ui.vline(VLine::new("", 0.0).color(Color32::GRAY));
    }
}
