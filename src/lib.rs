//! forcedash: real-time sim-racing telemetry windows built on egui/eframe.
//!
//! Three views over one polled telemetry stream:
//! - [`run_g_dial`]: polar G-force dial with reference rings,
//! - [`run_force_scope`]: scrolling line scope for force-feedback channels,
//! - [`run_dashboard`]: dial, scope and pedal gauges combined.
//!
//! A producer implements [`TelemetrySource`] (or pushes frames through a
//! [`TelemetrySink`] directly), [`spawn_polling`] samples it on a timer and
//! the window owning the receiving half folds frames into its
//! [`TelemetrySession`]. The scrolling behavior lives in
//! [`SampleWindow`] and [`scroll_window`] and is testable without any UI.

pub mod app;
pub mod config;
pub mod data;
mod error;
pub mod look;
pub mod panels;
pub mod source;

pub use app::{run_dashboard, run_force_scope, run_g_dial, DashLayout, DashboardApp};
pub use config::{ChannelSpec, DashboardConfig, GDialConfig, PedalSpec, WindowSizing};
pub use data::scale::SymmetricScale;
pub use data::session::TelemetrySession;
pub use data::window::{scroll_window, SampleWindow};
pub use error::DashError;
pub use source::{
    channel_telemetry, spawn_polling, SourceError, TelemetryFrame, TelemetrySink, TelemetrySource,
};
