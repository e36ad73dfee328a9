//! Data model: sample window, autoscale policy and per-window session state.

pub mod scale;
pub mod session;
pub mod window;

pub use scale::SymmetricScale;
pub use session::TelemetrySession;
pub use window::{scroll_window, SampleWindow};
