//! Easing curves for timed transitions
//!
//! Every curve maps linear progress in [0, 1] to eased progress with
//! `apply(0) == 0` and `apply(1) == 1`.

use serde::{Deserialize, Serialize};

/// Named easing curve, selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed
    #[default]
    Linear,
    /// Quadratic acceleration from rest (used when hiding)
    InQuad,
    /// Quadratic deceleration to rest
    OutQuad,
    /// Cubic deceleration to rest
    OutCubic,
    /// Cubic acceleration then deceleration
    InOutCubic,
    /// Exponential deceleration (used when showing)
    OutExpo,
}

impl Easing {
    /// Map linear progress to eased progress
    ///
    /// Progress outside [0, 1] is clamped first.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => ease_in_quad(t),
            Self::OutQuad => ease_out_quad(t),
            Self::OutCubic => ease_out_cubic(t),
            Self::InOutCubic => ease_in_out_cubic(t),
            Self::OutExpo => ease_out_expo(t),
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::InQuad => write!(f, "in-quad"),
            Self::OutQuad => write!(f, "out-quad"),
            Self::OutCubic => write!(f, "out-cubic"),
            Self::InOutCubic => write!(f, "in-out-cubic"),
            Self::OutExpo => write!(f, "out-expo"),
        }
    }
}

pub fn ease_in_quad(t: f32) -> f32 {
    t * t
}

pub fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - 4.0 * (1.0 - t) * (1.0 - t) * (1.0 - t)
    }
}

/// Exponential ease-out: `1 - 2^(-10t)`
///
/// The raw curve stops at ~0.999 for t = 1, so the endpoint is pinned.
pub fn ease_out_expo(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2f32.powf(-10.0 * t)
    }
}
