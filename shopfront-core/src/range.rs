//! Dual-thumb range selection — the price filter's state machine.
//!
//! Values are f64 cents. The two thumbs stay ordered with at least one cent
//! of separation; every mutation funnels through [`RangeSelection::set_thumb`]
//! so the pointer and keyboard paths cannot drift apart in edge-case handling.
//! A committed selection publishes as an optional param pair: a value sitting
//! on its bound means "no filter" and commits as absent.

use crate::money::Money;

/// Minimum separation between the thumbs, in cents.
const GAP: f64 = 1.0;

/// Which thumb a gesture or key event addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumb {
    Min,
    Max,
}

/// Direction of a keyboard step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Decrease,
    Increase,
}

/// The committed param pair. `None` means the value sits on its bound.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeParams {
    pub price_min: Option<String>,
    pub price_max: Option<String>,
}

/// Two ordered values inside a bounded interval.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSelection {
    min: f64,
    max: f64,
    value_min: f64,
    value_max: f64,
}

impl RangeSelection {
    /// Build a selection spanning the full interval. A reversed or zero-width
    /// interval yields a degenerate (inert) selection rather than an error.
    pub fn new(min: f64, max: f64) -> Self {
        let max = if max.is_finite() && max > min { max } else { min };
        RangeSelection {
            min,
            max,
            value_min: min,
            value_max: max,
        }
    }

    /// Build a selection with an initial pair, clamped into the bounds.
    pub fn with_values(min: f64, max: f64, value_min: f64, value_max: f64) -> Self {
        let mut sel = RangeSelection::new(min, max);
        sel.set_values(value_min, value_max);
        sel
    }

    /// True when the interval cannot hold two separated thumbs. All positional
    /// math is skipped for a degenerate selection.
    pub fn is_degenerate(&self) -> bool {
        self.max - self.min < GAP
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn values(&self) -> (f64, f64) {
        (self.value_min, self.value_max)
    }

    pub fn value(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::Min => self.value_min,
            Thumb::Max => self.value_max,
        }
    }

    /// Keyboard step size: 1% of the interval.
    pub fn step(&self) -> f64 {
        (self.max - self.min) / 100.0
    }

    /// Move one thumb to a target value. The moving thumb clamps against the
    /// other one (never closer than [`GAP`]) and against its own bound; the
    /// stationary thumb never moves.
    pub fn set_thumb(&mut self, thumb: Thumb, value: f64) {
        if self.is_degenerate() || !value.is_finite() {
            return;
        }
        match thumb {
            Thumb::Min => self.value_min = value.clamp(self.min, self.value_max - GAP),
            Thumb::Max => self.value_max = value.clamp(self.value_min + GAP, self.max),
        }
    }

    /// Normalize a pair against the bounds (used when mounting or restoring).
    pub fn set_values(&mut self, value_min: f64, value_max: f64) {
        if self.is_degenerate() {
            return;
        }
        let hi = if value_max.is_finite() {
            value_max.clamp(self.min + GAP, self.max)
        } else {
            self.max
        };
        let lo = if value_min.is_finite() {
            value_min.clamp(self.min, hi - GAP)
        } else {
            self.min
        };
        self.value_min = lo;
        self.value_max = hi;
    }

    /// Reset the selection to the full interval.
    pub fn reset(&mut self) {
        self.value_min = self.min;
        self.value_max = self.max;
    }

    /// Map a track ratio (0..=1) to a value.
    pub fn value_at(&self, ratio: f64) -> f64 {
        self.min + ratio.clamp(0.0, 1.0) * (self.max - self.min)
    }

    /// A thumb's position along the track as a ratio, for rendering. A
    /// degenerate selection renders fixed at the track endpoints.
    pub fn ratio_of(&self, thumb: Thumb) -> f64 {
        let span = self.max - self.min;
        if span < GAP {
            return match thumb {
                Thumb::Min => 0.0,
                Thumb::Max => 1.0,
            };
        }
        (self.value(thumb) - self.min) / span
    }

    /// Pointer-drag path: move a thumb to a track ratio.
    pub fn drag_to(&mut self, thumb: Thumb, ratio: f64) {
        if self.is_degenerate() {
            return;
        }
        let value = self.value_at(ratio);
        self.set_thumb(thumb, value);
    }

    /// Keyboard path: one 1% step in the given direction.
    pub fn key_step(&mut self, thumb: Thumb, direction: StepDirection) {
        if self.is_degenerate() {
            return;
        }
        let delta = match direction {
            StepDirection::Decrease => -self.step(),
            StepDirection::Increase => self.step(),
        };
        self.set_thumb(thumb, self.value(thumb) + delta);
    }

    /// Publish the selection as filter params. Only interior values commit;
    /// a thumb resting on its bound commits as absent ("no filter").
    pub fn commit(&self) -> RangeParams {
        let price_min = (self.value_min > self.min)
            .then(|| Money::from_cents(self.value_min.round() as i64).to_param());
        let price_max = (self.value_max < self.max)
            .then(|| Money::from_cents(self.value_max.round() as i64).to_param());
        RangeParams {
            price_min,
            price_max,
        }
    }
}
