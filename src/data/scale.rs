//! Symmetric autoscale policy for the scope's value axis.

use crate::data::window::SampleWindow;
use crate::error::DashError;

/// Zero-centered autoscale: the axis spans `±(max_abs.max(min_bound) *
/// (1 + margin))` over everything currently in the window.
///
/// The floor keeps the span positive while every sample is zero (engine off,
/// wheel centered), so the scope shows flat lines on a stable axis instead
/// of a degenerate zero-height range.
#[derive(Debug, Clone, Copy)]
pub struct SymmetricScale {
    /// Fractional headroom above the largest magnitude (`0.1` = 10 %).
    pub margin: f64,
    /// Lower clamp on the magnitude before the margin is applied.
    pub min_bound: f64,
}

impl Default for SymmetricScale {
    fn default() -> Self {
        Self {
            margin: 0.1,
            min_bound: 1.0,
        }
    }
}

impl SymmetricScale {
    pub fn new(margin: f64, min_bound: f64) -> Result<Self, DashError> {
        let scale = Self { margin, min_bound };
        scale.validate()?;
        Ok(scale)
    }

    /// Fields are public, so consumers re-validate before first use.
    pub fn validate(&self) -> Result<(), DashError> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(DashError::InvalidMargin(self.margin));
        }
        if !self.min_bound.is_finite() || self.min_bound <= 0.0 {
            return Err(DashError::InvalidFloor(self.min_bound));
        }
        Ok(())
    }

    /// Floored half-width for the window, `None` while it holds no values
    /// (callers keep their previous axis range in that case).
    pub fn bound_for(&self, window: &SampleWindow) -> Option<f64> {
        window
            .max_abs()
            .map(|m| m.max(self.min_bound) * (1.0 + self.margin))
    }

    /// `(-bound, bound)` per [`Self::bound_for`].
    pub fn range_for(&self, window: &SampleWindow) -> Option<(f64, f64)> {
        self.bound_for(window).map(|b| (-b, b))
    }
}
