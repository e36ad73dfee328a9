//! Per-frame loop: drain pending telemetry, then render the active layout.

use eframe::egui;

use super::{DashLayout, DashboardApp};

impl DashboardApp {
    /// Ingest every frame that arrived since the previous repaint. Painting
    /// runs at display cadence, so several samples may land per repaint.
    fn drain_frames(&mut self) {
        while let Ok(frame) = self.rx.try_recv() {
            if let Err(err) = self.session.ingest(&frame) {
                log::warn!("dropping telemetry frame: {err}");
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_frames();

        match self.layout {
            DashLayout::Dial => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    self.dial.ui(ui, &self.session);
                });
            }
            DashLayout::Scope => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    self.scope.ui(ui, &self.session);
                });
            }
            DashLayout::Combined => {
                egui::SidePanel::left("dash_dial")
                    .resizable(true)
                    .default_width(360.0)
                    .show(ctx, |ui| {
                        self.dial.ui(ui, &self.session);
                    });
                egui::SidePanel::right("dash_pedals")
                    .resizable(true)
                    .default_width(220.0)
                    .show(ctx, |ui| {
                        self.pedals.ui(ui, &self.session);
                    });
                egui::CentralPanel::default().show(ctx, |ui| {
                    self.scope.ui(ui, &self.session);
                });
            }
        }

        // Keep repainting so the scroll stays smooth between samples.
        ctx.request_repaint_after(std::time::Duration::from_millis(16));
    }
}
