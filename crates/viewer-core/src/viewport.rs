//! Viewport dimensions and the derived aspect ratio.

/// Current drawable size in pixels.
///
/// Nothing derived from it is stored: the aspect ratio is computed at the
/// moment of use so a resize can never leave a stale value behind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
}

impl ViewportState {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width clamped to at least one pixel.
    #[inline]
    pub fn safe_width(&self) -> f32 {
        self.width.max(1.0)
    }

    /// Height clamped to at least one pixel (a collapsed panel reports 0).
    #[inline]
    pub fn safe_height(&self) -> f32 {
        self.height.max(1.0)
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.safe_width() / self.safe_height()
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
