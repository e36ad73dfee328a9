//! Standalone polar G-force dial fed by a synthetic driving pattern.
//!
//! Run with:
//! ```bash
//! cargo run --example g_dial
//! ```

use forcedash::{
    channel_telemetry, run_g_dial, spawn_polling, DashboardConfig, SourceError, TelemetryFrame,
    TelemetrySource,
};

/// Sweeps the marker through cornering and braking loads.
#[derive(Default)]
struct CorneringRig {
    tick: u64,
}

impl TelemetrySource for CorneringRig {
    fn poll(&mut self) -> Result<TelemetryFrame, SourceError> {
        let t = self.tick as f64 / 110.0;
        self.tick += 1;
        let lateral = 1.6 * (0.45 * t).sin() * (0.13 * t).cos();
        let longitudinal = 1.2 * (0.31 * t).sin();
        let vertical = 0.05 * (2.0 * t).sin();
        let ff = 4.0 * (0.45 * t).sin() + 0.5 * (7.0 * t).sin();
        Ok(TelemetryFrame::new()
            .with_value("finalFF", ff)
            .with_acc_g([lateral, vertical, longitudinal]))
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let cfg = DashboardConfig {
        title: "G-Force Dial".to_string(),
        ..Default::default()
    };
    let (sink, rx) = channel_telemetry();
    let _poller = spawn_polling(CorneringRig::default(), cfg.sizing.sampling_rate_hz, sink);
    run_g_dial(rx, cfg)
}
