//! Vertical input gauges for the driver controls.
//!
//! Each gauge reads its channel's most recent raw value from the session;
//! nothing is buffered here. The fill is bottom-up and clamped to `0..=1`,
//! a channel the source has not reported yet shows as empty.

use egui::Ui;

use crate::config::PedalSpec;
use crate::data::session::TelemetrySession;

const MIN_GAUGE_WIDTH: f32 = 24.0;

pub struct PedalsPanel {
    pedals: Vec<PedalSpec>,
}

impl PedalsPanel {
    pub fn new(pedals: Vec<PedalSpec>) -> Self {
        Self { pedals }
    }

    pub fn ui(&mut self, ui: &mut Ui, session: &TelemetrySession) {
        if self.pedals.is_empty() {
            return;
        }
        let height = ui.available_height();
        let spacing = ui.spacing().item_spacing.x;
        let count = self.pedals.len() as f32;
        let width = ((ui.available_width() - spacing * (count - 1.0)) / count).max(MIN_GAUGE_WIDTH);
        ui.horizontal(|ui| {
            for pedal in &self.pedals {
                let value = Self::fill_fraction(session, &pedal.channel);
                Self::gauge(ui, egui::vec2(width, height), pedal, value);
            }
        });
    }

    /// Fill fraction of one gauge: the channel's most recent raw value
    /// clamped to `0..=1`, or zero while the source has not reported it.
    pub fn fill_fraction(session: &TelemetrySession, channel: &str) -> f32 {
        session.latest_value(channel).unwrap_or(0.0).clamp(0.0, 1.0) as f32
    }

    fn gauge(ui: &mut Ui, size: egui::Vec2, spec: &PedalSpec, value: f32) {
        let (rect, _resp) = ui.allocate_exact_size(size, egui::Sense::hover());
        let visuals = ui.visuals();
        let text_color = visuals.strong_text_color();
        let frame_stroke = visuals.widgets.inactive.bg_stroke;
        let background = visuals.extreme_bg_color;

        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(3), background);
        let fill_h = rect.height() * value;
        let fill = egui::Rect::from_min_max(
            egui::pos2(rect.min.x, rect.max.y - fill_h),
            rect.max,
        );
        ui.painter()
            .rect_filled(fill, egui::CornerRadius::same(3), spec.color);
        ui.painter().rect_stroke(
            rect,
            egui::CornerRadius::same(3),
            frame_stroke,
            egui::StrokeKind::Inside,
        );

        ui.painter().text(
            egui::pos2(rect.center().x, rect.min.y + 10.0),
            egui::Align2::CENTER_CENTER,
            &spec.label,
            egui::FontId::proportional(12.0),
            text_color,
        );
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("{:.0}%", f64::from(value) * 100.0),
            egui::FontId::proportional(14.0),
            text_color,
        );
    }
}
