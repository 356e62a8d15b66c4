//! Camera description and viewport synchronization.
//!
//! Both projection kinds keep their clip planes fixed for the lifetime of the
//! camera. A viewport sync only touches what depends on the window size:
//! the symmetric bounds for orthographic cameras, the aspect for perspective
//! ones. The projection matrix is rebuilt from scratch on every sync.

use crate::viewport::ViewportState;
use glam::{Mat4, Vec3};

/// Fixed projection parameters chosen at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Projection {
    Orthographic {
        frustum_size: f32,
        near: f32,
        far: f32,
    },
    Perspective {
        fovy_radians: f32,
        near: f32,
        far: f32,
    },
}

/// Symmetric orthographic frustum bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthoBounds {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl OrthoBounds {
    /// Bounds for a vertical extent `frustum_size` stretched by `aspect`.
    pub fn from_frustum(frustum_size: f32, aspect: f32) -> Self {
        let half_w = frustum_size * aspect / 2.0;
        let half_h = frustum_size / 2.0;
        Self {
            left: -half_w,
            right: half_w,
            top: half_h,
            bottom: -half_h,
        }
    }

    /// Shrinks (zoom > 1) or grows (zoom < 1) the bounds about their center.
    #[inline]
    pub fn zoomed(&self, zoom: f32) -> Self {
        Self {
            left: self.left / zoom,
            right: self.right / zoom,
            top: self.top / zoom,
            bottom: self.bottom / zoom,
        }
    }
}

/// Right-handed look-at camera with either projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub zoom: f32,
    projection: Projection,
    viewport: ViewportState,
    aspect: f32,
    projection_matrix: Mat4,
}

impl Camera {
    pub fn new(projection: Projection, eye: Vec3, target: Vec3, viewport: ViewportState) -> Self {
        let mut camera = Self {
            eye,
            target,
            up: Vec3::Y,
            zoom: 1.0,
            projection,
            viewport,
            aspect: 1.0,
            projection_matrix: Mat4::IDENTITY,
        };
        camera.sync_viewport(viewport);
        camera
    }

    /// Recompute every size-dependent projection parameter from `viewport`.
    ///
    /// Runs synchronously so the next rendered frame already uses the new
    /// projection.
    pub fn sync_viewport(&mut self, viewport: ViewportState) {
        self.viewport = viewport;
        self.aspect = viewport.aspect_ratio();
        self.update_projection_matrix();
    }

    /// Rebuild the cached projection matrix from the current parameters.
    pub fn update_projection_matrix(&mut self) {
        self.projection_matrix = match self.projection {
            Projection::Orthographic {
                frustum_size,
                near,
                far,
            } => {
                let b = OrthoBounds::from_frustum(frustum_size, self.aspect).zoomed(self.zoom);
                Mat4::orthographic_rh(b.left, b.right, b.bottom, b.top, near, far)
            }
            Projection::Perspective {
                fovy_radians,
                near,
                far,
            } => Mat4::perspective_rh(fovy_radians, self.aspect, near, far),
        };
    }

    #[inline]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    #[inline]
    pub fn is_orthographic(&self) -> bool {
        matches!(self.projection, Projection::Orthographic { .. })
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    #[inline]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Orthographic bounds before zoom; `None` for perspective cameras.
    #[inline]
    pub fn bounds(&self) -> Option<OrthoBounds> {
        match self.projection {
            Projection::Orthographic { frustum_size, .. } => {
                Some(OrthoBounds::from_frustum(frustum_size, self.aspect))
            }
            Projection::Perspective { .. } => None,
        }
    }

    /// Compute the clip-space projection matrix.
    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix()
    }
}
