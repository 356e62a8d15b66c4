use crate::viewport::ViewportState;
use std::f32::consts::PI;

/// Latest pointer position rescaled to `[-1, 1]` across the viewport.
///
/// Positions outside the viewport (a drag leaving the window) map outside
/// that range and are kept as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub normalized_x: f32,
    pub normalized_y: f32,
}

impl PointerSample {
    pub fn from_client(client_x: f32, client_y: f32, viewport: ViewportState) -> Self {
        Self {
            normalized_x: (client_x / viewport.safe_width()) * 2.0 - 1.0,
            normalized_y: (client_y / viewport.safe_height()) * 2.0 - 1.0,
        }
    }
}

/// Rotation applied to the loaded object for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationTarget {
    pub pitch: f32,
    pub yaw: f32,
}

/// Fixed scale factors (fractions of π) from a pointer sample to angles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrientationMapper {
    pub yaw_scale: f32,
    pub pitch_scale: f32,
}

impl OrientationMapper {
    pub fn new(yaw_scale: f32, pitch_scale: f32) -> Self {
        Self {
            yaw_scale,
            pitch_scale,
        }
    }

    /// Pure function of the sample: the same sample always gives the same
    /// orientation, with no history involved.
    #[inline]
    pub fn orientation(&self, sample: PointerSample) -> OrientationTarget {
        OrientationTarget {
            yaw: sample.normalized_x * PI * self.yaw_scale,
            pitch: sample.normalized_y * PI * self.pitch_scale,
        }
    }
}

impl Default for OrientationMapper {
    fn default() -> Self {
        Self::new(crate::constants::YAW_SCALE, crate::constants::PITCH_SCALE)
    }
}
