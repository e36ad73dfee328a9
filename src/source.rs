//! Telemetry input: frames, the producer-side sink and the polling loop.
//!
//! Acquisition code implements [`TelemetrySource`] and never touches the UI;
//! [`spawn_polling`] drives it on its own thread and pushes stamped
//! [`TelemetryFrame`]s through an `mpsc` channel into the window that owns
//! the receiving half.

use std::collections::HashMap;
use std::sync::mpsc::{Receiver, SendError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Boxed error type returned by [`TelemetrySource::poll`].
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// One acquisition result: every named scalar channel sampled on this tick,
/// plus the optional three-axis acceleration vector for the G dial.
#[derive(Debug, Clone, Default)]
pub struct TelemetryFrame {
    /// Seconds since the producing clock started.
    pub timestamp: f64,
    /// Named scalar channels (force feedback, steering angle, pedals, ...).
    pub values: HashMap<String, f64>,
    /// Acceleration in g: `[lateral, vertical, longitudinal]`.
    pub acc_g: Option<[f64; 3]>,
}

impl TelemetryFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style timestamp override for sources that stamp themselves.
    pub fn with_timestamp(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Builder-style channel insert.
    pub fn with_value(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    /// Builder-style acceleration vector.
    pub fn with_acc_g(mut self, acc_g: [f64; 3]) -> Self {
        self.acc_g = Some(acc_g);
        self
    }
}

/// Sending half handed to telemetry producers.
///
/// Cheap to clone; every clone feeds the same dashboard window.
#[derive(Clone)]
pub struct TelemetrySink {
    tx: Sender<TelemetryFrame>,
}

impl TelemetrySink {
    /// Push one frame towards the UI. Fails once the window has closed.
    pub fn send_frame(&self, frame: TelemetryFrame) -> Result<(), SendError<TelemetryFrame>> {
        self.tx.send(frame)
    }
}

/// Create a frame channel: the sink goes to the producer, the receiver to
/// one of the `run_*` window entry points.
pub fn channel_telemetry() -> (TelemetrySink, Receiver<TelemetryFrame>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (TelemetrySink { tx }, rx)
}

/// A pollable acquisition backend (shared-memory reader, wheelbase driver,
/// synthetic rig in the demos, ...).
///
/// `poll` is called once per sampling tick and returns the complete channel
/// set for that instant. Timestamps are stamped by the polling loop, so
/// sources may leave `timestamp` at its default.
pub trait TelemetrySource {
    fn poll(&mut self) -> Result<TelemetryFrame, SourceError>;
}

/// Drive `source` on a dedicated thread at `sampling_rate_hz`.
///
/// Each tick polls the source, stamps the frame with seconds since the loop
/// started and forwards it through `sink`. The loop ends when the source
/// returns an error or the receiving window has been dropped.
pub fn spawn_polling<S>(mut source: S, sampling_rate_hz: u32, sink: TelemetrySink) -> JoinHandle<()>
where
    S: TelemetrySource + Send + 'static,
{
    thread::spawn(move || {
        // 0 Hz clamps to 1 Hz so the interval stays finite.
        let interval = Duration::from_secs_f64(1.0 / f64::from(sampling_rate_hz.max(1)));
        let start = Instant::now();
        log::info!("telemetry poller started at {sampling_rate_hz} Hz");
        loop {
            let mut frame = match source.poll() {
                Ok(frame) => frame,
                Err(err) => {
                    log::error!("telemetry source failed, stopping poller: {err}");
                    break;
                }
            };
            frame.timestamp = start.elapsed().as_secs_f64();
            if sink.send_frame(frame).is_err() {
                log::debug!("telemetry receiver dropped, stopping poller");
                break;
            }
            thread::sleep(interval);
        }
    })
}
