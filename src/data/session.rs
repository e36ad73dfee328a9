//! Per-window telemetry state.
//!
//! [`TelemetrySession`] owns everything one dashboard window accumulates at
//! runtime: the sample window behind the scope, the latched acceleration
//! vector behind the G dial and the latest raw value of every channel the
//! source has ever reported (the pedal gauges read those). All state lives
//! in the session a window owns, so several windows can run side by side
//! without sharing anything.

use std::collections::HashMap;

use crate::data::scale::SymmetricScale;
use crate::data::window::{scroll_window, SampleWindow};
use crate::error::DashError;
use crate::source::TelemetryFrame;

#[derive(Debug)]
pub struct TelemetrySession {
    window: SampleWindow,
    scale: SymmetricScale,
    display_seconds: f64,
    last_acc_g: Option<[f64; 3]>,
    latest: HashMap<String, f64>,
}

impl TelemetrySession {
    /// Build a session plotting the given channels over a scrolling span of
    /// `display_seconds`, with room for `capacity` samples.
    pub fn new<I, S>(
        capacity: usize,
        display_seconds: f64,
        scale: SymmetricScale,
        channels: I,
    ) -> Result<Self, DashError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !display_seconds.is_finite() || display_seconds <= 0.0 {
            return Err(DashError::EmptyDisplayWindow(display_seconds));
        }
        scale.validate()?;
        Ok(Self {
            window: SampleWindow::new(capacity, channels)?,
            scale,
            display_seconds,
            last_acc_g: None,
            latest: HashMap::new(),
        })
    }

    /// Fold one frame into the session.
    ///
    /// The plotted channels are appended to the sample window, the
    /// acceleration vector (when present) replaces the latched one and every
    /// channel value in the frame becomes readable via
    /// [`Self::latest_value`]. A frame missing a plotted channel is rejected
    /// as a whole and leaves the session unchanged.
    pub fn ingest(&mut self, frame: &TelemetryFrame) -> Result<(), DashError> {
        let mut plotted = HashMap::with_capacity(self.window.channel_count());
        for name in self.window.channel_names() {
            match frame.values.get(name) {
                Some(v) => {
                    plotted.insert(name.to_owned(), *v);
                }
                None => {
                    return Err(DashError::MissingChannel {
                        name: name.to_owned(),
                        timestamp: frame.timestamp,
                    })
                }
            }
        }
        self.window.append(frame.timestamp, &plotted)?;

        if let Some(acc) = frame.acc_g {
            self.last_acc_g = Some(acc);
        }
        for (name, v) in &frame.values {
            self.latest.insert(name.clone(), *v);
        }
        log::trace!(
            "ingested t={:.3}s max_abs={:.3} samples={}",
            frame.timestamp,
            self.window.max_abs().unwrap_or(0.0),
            self.window.len()
        );
        Ok(())
    }

    /// Time-axis range for the scope: scrolls with the newest sample, sits
    /// at `(0, display_seconds)` until one span has been recorded.
    pub fn x_bounds(&self) -> (f64, f64) {
        scroll_window(
            self.window.latest_timestamp().unwrap_or(0.0),
            self.display_seconds,
        )
    }

    /// Value-axis range per the autoscale policy, `None` while no sample has
    /// arrived yet.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.scale.range_for(&self.window)
    }

    /// Plot points of one plotted channel, `None` for unknown names.
    pub fn series(&self, channel: &str) -> Option<Vec<[f64; 2]>> {
        self.window.series(channel)
    }

    /// Acceleration from the most recent frame that carried one; the dial
    /// marker holds its last position between updates.
    pub fn latest_acc_g(&self) -> Option<[f64; 3]> {
        self.last_acc_g
    }

    /// Most recent raw value of any channel the source has reported,
    /// plotted or not.
    pub fn latest_value(&self, channel: &str) -> Option<f64> {
        self.latest.get(channel).copied()
    }

    pub fn display_seconds(&self) -> f64 {
        self.display_seconds
    }

    pub fn window(&self) -> &SampleWindow {
        &self.window
    }
}
