//! Bounded sample storage for scrolling telemetry displays.
//!
//! [`SampleWindow`] keeps the most recent samples of a fixed set of named
//! channels, index-aligned with a shared timestamp sequence:
//! - every channel always holds exactly as many values as there are
//!   timestamps,
//! - a sample is admitted only when it covers the full channel set, so one
//!   malformed frame can never skew the sequences against each other,
//! - once full, each append evicts the oldest sample from every sequence.

use std::collections::{HashMap, VecDeque};

use crate::error::DashError;

#[derive(Debug)]
struct ChannelBuffer {
    name: String,
    values: VecDeque<f64>,
}

/// Fixed-capacity ring of timestamped multi-channel samples.
#[derive(Debug)]
pub struct SampleWindow {
    capacity: usize,
    timestamps: VecDeque<f64>,
    channels: Vec<ChannelBuffer>,
}

impl SampleWindow {
    /// Create a window holding up to `capacity` samples of the given
    /// channels. Channel order here is the order [`Self::channel_names`]
    /// reports, which the scope uses as its draw order.
    pub fn new<I, S>(capacity: usize, channels: I) -> Result<Self, DashError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if capacity == 0 {
            return Err(DashError::ZeroCapacity);
        }
        let mut bufs: Vec<ChannelBuffer> = Vec::new();
        for name in channels {
            let name = name.into();
            if bufs.iter().any(|b| b.name == name) {
                return Err(DashError::DuplicateChannel(name));
            }
            bufs.push(ChannelBuffer {
                name,
                values: VecDeque::with_capacity(capacity),
            });
        }
        Ok(Self {
            capacity,
            timestamps: VecDeque::with_capacity(capacity),
            channels: bufs,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of samples currently held (identical across all channels).
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn channel_names(&self) -> impl Iterator<Item = &str> {
        self.channels.iter().map(|b| b.name.as_str())
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Append one sample covering the entire channel set.
    ///
    /// The sample is validated before anything is stored: a missing or
    /// unexpected channel rejects the whole sample and leaves the window
    /// untouched. On success every sequence grows by one, and if the window
    /// was full the oldest sample is dropped from every sequence.
    pub fn append(&mut self, timestamp: f64, values: &HashMap<String, f64>) -> Result<(), DashError> {
        let mut ordered = Vec::with_capacity(self.channels.len());
        for buf in &self.channels {
            match values.get(buf.name.as_str()) {
                Some(v) => ordered.push(*v),
                None => {
                    return Err(DashError::MissingChannel {
                        name: buf.name.clone(),
                        timestamp,
                    })
                }
            }
        }
        if values.len() != self.channels.len() {
            let name = values
                .keys()
                .find(|k| self.channels.iter().all(|b| &b.name != *k))
                .cloned()
                .unwrap_or_default();
            return Err(DashError::UnknownChannel { name, timestamp });
        }

        self.timestamps.push_back(timestamp);
        for (buf, v) in self.channels.iter_mut().zip(ordered) {
            buf.values.push_back(v);
        }
        if self.timestamps.len() > self.capacity {
            self.timestamps.pop_front();
            for buf in &mut self.channels {
                buf.values.pop_front();
            }
        }
        Ok(())
    }

    /// Timestamps oldest-first, index-aligned with every channel sequence.
    pub fn timestamps(&self) -> &VecDeque<f64> {
        &self.timestamps
    }

    /// Values of one channel oldest-first, or `None` for an unknown name.
    pub fn values(&self, channel: &str) -> Option<&VecDeque<f64>> {
        self.channels
            .iter()
            .find(|b| b.name == channel)
            .map(|b| &b.values)
    }

    /// `[t, v]` pairs of one channel in plot order, or `None` for an
    /// unknown name.
    pub fn series(&self, channel: &str) -> Option<Vec<[f64; 2]>> {
        self.values(channel).map(|vals| {
            self.timestamps
                .iter()
                .zip(vals.iter())
                .map(|(t, v)| [*t, *v])
                .collect()
        })
    }

    pub fn latest_timestamp(&self) -> Option<f64> {
        self.timestamps.back().copied()
    }

    /// Largest absolute value across all channels, `None` when no finite
    /// value is stored.
    pub fn max_abs(&self) -> Option<f64> {
        let mut max_abs = f64::NEG_INFINITY;
        for buf in &self.channels {
            for v in &buf.values {
                let a = v.abs();
                if a > max_abs {
                    max_abs = a;
                }
            }
        }
        if max_abs.is_finite() {
            Some(max_abs)
        } else {
            None
        }
    }

    /// Half-width of a zero-centered value range with fractional headroom:
    /// `max_abs * (1 + margin)`. `None` when the window holds no values.
    ///
    /// An all-zero window yields `Some(0.0)`; renderers that need a non-empty
    /// axis span apply a floor on top, see
    /// [`SymmetricScale`](crate::data::scale::SymmetricScale).
    pub fn symmetric_bound(&self, margin: f64) -> Option<f64> {
        self.max_abs().map(|m| m * (1.0 + margin))
    }
}

/// Time-axis range for a scrolling display: `(current_time - display_seconds,
/// current_time)` once enough time has elapsed, `(0, display_seconds)` while
/// the recording is still shorter than one display span.
///
/// The visible span is always exactly `display_seconds` wide, so traces move
/// at constant speed and never rescale horizontally.
pub fn scroll_window(current_time: f64, display_seconds: f64) -> (f64, f64) {
    if current_time > display_seconds {
        (current_time - display_seconds, current_time)
    } else {
        (0.0, display_seconds)
    }
}
