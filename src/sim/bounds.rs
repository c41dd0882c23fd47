//! Rectangle extents for the container and its controls

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Width/height of a laid-out element
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Largest top-left offset that keeps `control` fully inside `container`
///
/// Each axis is clamped to 0 when the control is at least as large as the
/// container. Non-finite extents (NaN, infinity) also collapse to 0.
pub fn max_offset(container: Bounds, control: Bounds) -> Vec2 {
    let axis = |outer: f32, inner: f32| {
        let span = outer - inner;
        if span.is_finite() { span.max(0.0) } else { 0.0 }
    };
    Vec2::new(
        axis(container.width, control.width),
        axis(container.height, control.height),
    )
}
