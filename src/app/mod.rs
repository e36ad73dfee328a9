//! Application wiring: the eframe app type and the window entry points.
//!
//! | Sub-module | Responsibility |
//! |------------|----------------|
//! | `run`      | Native-window entry points and icon loading |
//! | `update`   | Per-frame drain/ingest/render loop |

mod run;
mod update;

pub use run::{run_dashboard, run_force_scope, run_g_dial};

use std::sync::mpsc::Receiver;

use crate::config::DashboardConfig;
use crate::data::session::TelemetrySession;
use crate::error::DashError;
use crate::panels::{ForceScopePanel, GDialPanel, PedalsPanel};
use crate::source::TelemetryFrame;

/// Which views a window shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashLayout {
    /// Polar G dial only.
    Dial,
    /// Scrolling force scope only.
    Scope,
    /// Dial on the left, scope in the center, pedal gauges on the right.
    Combined,
}

/// One telemetry window: drains its frame receiver, folds frames into its
/// own [`TelemetrySession`] and renders the panels of its layout.
///
/// Windows share nothing, so several can run in separate processes against
/// separate sources without stepping on each other.
pub struct DashboardApp {
    rx: Receiver<TelemetryFrame>,
    session: TelemetrySession,
    layout: DashLayout,
    dial: GDialPanel,
    scope: ForceScopePanel,
    pedals: PedalsPanel,
}

impl DashboardApp {
    /// Validate `cfg` and build the app. Reported errors cover window
    /// sizing, the autoscale policy and the channel set.
    pub fn new(
        rx: Receiver<TelemetryFrame>,
        layout: DashLayout,
        cfg: &DashboardConfig,
    ) -> Result<Self, DashError> {
        let session = TelemetrySession::new(
            cfg.sizing.capacity(),
            cfg.sizing.display_seconds,
            cfg.scale,
            cfg.channels.iter().map(|c| c.name.clone()),
        )?;
        Ok(Self {
            rx,
            session,
            layout,
            dial: GDialPanel::new(cfg.dial.clone()),
            scope: ForceScopePanel::new(&cfg.channels, cfg.show_grid),
            pedals: PedalsPanel::new(cfg.pedals.clone()),
        })
    }

    pub fn session(&self) -> &TelemetrySession {
        &self.session
    }
}
