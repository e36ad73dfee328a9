//! Scrolling scope plotting force feedback against steering angle.
//!
//! Run with:
//! ```bash
//! cargo run --example force_scope
//! ```

use eframe::egui::Color32;
use forcedash::{
    channel_telemetry, run_force_scope, spawn_polling, ChannelSpec, DashboardConfig, SourceError,
    TelemetryFrame, TelemetrySource,
};

/// Steering sweeps with a correlated spring force plus road rumble.
#[derive(Default)]
struct WheelRig {
    tick: u64,
}

impl TelemetrySource for WheelRig {
    fn poll(&mut self) -> Result<TelemetryFrame, SourceError> {
        let t = self.tick as f64 / 110.0;
        self.tick += 1;
        let steer = 120.0 * (0.4 * t).sin();
        let rumble = 0.6 * (9.0 * t).sin() + 0.3 * (23.0 * t).sin();
        let ff = -0.035 * steer + rumble;
        Ok(TelemetryFrame::new()
            .with_value("finalFF", ff)
            .with_value("steerAngle", steer))
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let cfg = DashboardConfig {
        title: "Force Feedback".to_string(),
        channels: vec![
            ChannelSpec::new("finalFF", "FFB (N)").with_color(Color32::RED),
            ChannelSpec::new("steerAngle", "Steering (deg)").with_color(Color32::BLUE),
        ],
        ..Default::default()
    };
    let (sink, rx) = channel_telemetry();
    let _poller = spawn_polling(WheelRig::default(), cfg.sizing.sampling_rate_hz, sink);
    run_force_scope(rx, cfg)
}
