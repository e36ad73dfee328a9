//! Combined dashboard: G dial, force scope and pedal gauges side by side.
//!
//! Run with:
//! ```bash
//! cargo run --example dashboard
//! ```

use forcedash::{
    channel_telemetry, run_dashboard, spawn_polling, DashboardConfig, SourceError, TelemetryFrame,
    TelemetrySource,
};

/// A lap-like pattern: alternating throttle and braking phases, cornering
/// loads on the dial, shift pulses on the clutch.
#[derive(Default)]
struct LapRig {
    tick: u64,
}

impl TelemetrySource for LapRig {
    fn poll(&mut self) -> Result<TelemetryFrame, SourceError> {
        let t = self.tick as f64 / 110.0;
        self.tick += 1;
        let phase = (0.45 * t).sin();
        let steer = 140.0 * (0.4 * t).sin();
        let ff = -0.03 * steer + 0.5 * (11.0 * t).sin();
        let lateral = 1.5 * (0.4 * t).sin();
        let longitudinal = -1.3 * phase;
        Ok(TelemetryFrame::new()
            .with_value("finalFF", ff)
            .with_value("steerAngle", steer)
            .with_value("gas", phase.max(0.0))
            .with_value("brake", ((-phase).max(0.0) * 0.9).min(1.0))
            .with_value("clutch", (3.0 * t).sin().powi(32))
            .with_value("handbrake", (0.07 * t).sin().powi(64))
            .with_acc_g([lateral, 0.02 * (2.0 * t).sin(), longitudinal]))
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let cfg = DashboardConfig::default();
    let (sink, rx) = channel_telemetry();
    let _poller = spawn_polling(LapRig::default(), cfg.sizing.sampling_rate_hz, sink);
    run_dashboard(rx, cfg)
}
