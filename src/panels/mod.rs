//! Dashboard view panels.
//!
//! Each panel is a plain struct with a `ui` method rendering one view over
//! a [`TelemetrySession`](crate::data::session::TelemetrySession); the app
//! decides which panels a window shows and where.

mod force_scope;
mod g_dial;
mod pedals;

pub use force_scope::ForceScopePanel;
pub use g_dial::GDialPanel;
pub use pedals::PedalsPanel;
