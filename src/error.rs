use thiserror::Error;

/// Errors surfaced by window construction and the per-sample data contract.
#[derive(Debug, Error)]
pub enum DashError {
    #[error("window capacity must be at least one sample")]
    ZeroCapacity,
    #[error("duplicate channel {0:?} in window configuration")]
    DuplicateChannel(String),
    #[error("channel {name:?} missing from sample at t={timestamp}s")]
    MissingChannel { name: String, timestamp: f64 },
    #[error("unexpected channel {name:?} in sample at t={timestamp}s")]
    UnknownChannel { name: String, timestamp: f64 },
    #[error("display window must span a positive number of seconds, got {0}")]
    EmptyDisplayWindow(f64),
    #[error("autoscale margin must be finite and non-negative, got {0}")]
    InvalidMargin(f64),
    #[error("autoscale floor must be finite and positive, got {0}")]
    InvalidFloor(f64),
}
