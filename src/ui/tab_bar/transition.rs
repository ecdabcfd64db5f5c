// SPDX-License-Identifier: MPL-2.0
//! Eased opacity transitions for the tab bar highlight.

use crate::config::defaults::STANDARD_EASING;
use crate::config::MotionConfig;
use std::time::{Duration, Instant};

/// CSS-style cubic bezier easing curve with fixed endpoints (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    /// `cubic-bezier(0.2, 0, 0, 1)`
    pub const STANDARD: Self = Self {
        x1: STANDARD_EASING.0,
        y1: STANDARD_EASING.1,
        x2: STANDARD_EASING.2,
        y2: STANDARD_EASING.3,
    };

    /// Creates a curve. `x1` and `x2` are clamped to `[0, 1]` so the curve
    /// stays a function of time.
    #[must_use]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x1: x1.clamp(0.0, 1.0),
            y1,
            x2: x2.clamp(0.0, 1.0),
            y2,
        }
    }

    fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    }

    fn bezier_slope(p1: f32, p2: f32, s: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    }

    /// Finds the curve parameter whose x coordinate equals `x`.
    fn solve_parameter(&self, x: f32) -> f32 {
        let mut s = x;
        for _ in 0..8 {
            let error = Self::bezier(self.x1, self.x2, s) - x;
            if error.abs() < 1e-6 {
                return s;
            }
            let slope = Self::bezier_slope(self.x1, self.x2, s);
            if slope.abs() < 1e-6 {
                break;
            }
            s = (s - error / slope).clamp(0.0, 1.0);
        }

        // Newton stalled; bisect.
        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        s = x;
        for _ in 0..32 {
            let value = Self::bezier(self.x1, self.x2, s);
            if (value - x).abs() < 1e-6 {
                break;
            }
            if value < x {
                low = s;
            } else {
                high = s;
            }
            s = (low + high) / 2.0;
        }
        s
    }

    /// Eased progress for linear progress `t` in `[0, 1]`.
    #[must_use]
    pub fn ease(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        Self::bezier(self.y1, self.y2, self.solve_parameter(t))
    }
}

/// Durations and easing shared by every slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Used when the highlight becomes more visible.
    pub tap_in: Duration,
    /// Used when the highlight fades.
    pub tap_out: Duration,
    pub easing: CubicBezier,
}

impl Timing {
    #[must_use]
    pub fn from_config(config: &MotionConfig) -> Self {
        Self {
            tap_in: config.tap_in(),
            tap_out: config.tap_out(),
            easing: CubicBezier::STANDARD,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::from_config(&MotionConfig::default())
    }
}

/// Opacity animation of one highlight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightTransition {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
    easing: CubicBezier,
}

impl HighlightTransition {
    /// A transition already at rest on `value`.
    #[must_use]
    pub fn settled(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started_at: now,
            duration: Duration::ZERO,
            easing: CubicBezier::STANDARD,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Painted opacity at `now`.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.ease(progress)
    }

    #[must_use]
    pub fn is_running(&self, now: Instant) -> bool {
        !self.duration.is_zero() && now.saturating_duration_since(self.started_at) < self.duration
    }

    /// Starts animating toward `target` from the currently painted value.
    ///
    /// Re-targeting to the current target keeps the running animation.
    pub fn retarget(&mut self, target: f32, now: Instant, timing: &Timing) {
        if target == self.to {
            return;
        }
        let current = self.value_at(now);
        self.from = current;
        self.to = target;
        self.started_at = now;
        self.easing = timing.easing;
        self.duration = if target > current {
            timing.tap_in
        } else {
            timing.tap_out
        };
    }
}
