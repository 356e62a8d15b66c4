//! Orbit controls: drag to rotate the camera around its target, wheel to zoom.
//!
//! The camera position is kept as a spherical offset from the target
//! (`theta` around +Y measured from +Z, `phi` down from +Y). Pointer input
//! only accumulates pending deltas; `update` applies them once per frame so
//! damping can ease the motion out over several frames. Panning is not
//! supported.

use crate::camera::Camera;
use crate::constants::{
    ORBIT_DAMPING_FACTOR, ORBIT_MAX_DISTANCE, ORBIT_MAX_ZOOM, ORBIT_MIN_DISTANCE, ORBIT_MIN_ZOOM,
    ORBIT_POLE_EPSILON, ORBIT_ROTATE_SPEED, ORBIT_SETTLE_EPSILON, ORBIT_ZOOM_SPEED,
};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitSettings {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub enable_zoom: bool,
    pub zoom_speed: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            enable_zoom: true,
            zoom_speed: ORBIT_ZOOM_SPEED,
            min_zoom: ORBIT_MIN_ZOOM,
            max_zoom: ORBIT_MAX_ZOOM,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
}

impl Spherical {
    pub fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return Self::default();
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_offset(self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct DragState {
    active: bool,
    last_x: f32,
    last_y: f32,
}

#[derive(Clone, Debug)]
pub struct OrbitController {
    pub settings: OrbitSettings,
    spherical: Spherical,
    delta_theta: f32,
    delta_phi: f32,
    pending_scale: f32,
    drag: DragState,
}

impl OrbitController {
    pub fn new(settings: OrbitSettings, camera: &Camera) -> Self {
        Self {
            settings,
            spherical: Spherical::from_offset(camera.eye - camera.target),
            delta_theta: 0.0,
            delta_phi: 0.0,
            pending_scale: 1.0,
            drag: DragState::default(),
        }
    }

    #[inline]
    pub fn spherical(&self) -> Spherical {
        self.spherical
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.active
    }

    pub fn begin_drag(&mut self, x: f32, y: f32) {
        self.drag = DragState {
            active: true,
            last_x: x,
            last_y: y,
        };
    }

    pub fn end_drag(&mut self) {
        self.drag.active = false;
    }

    /// Feed a pointer position while dragging; returns false when idle.
    pub fn drag_to(&mut self, x: f32, y: f32, viewport_height: f32) -> bool {
        if !self.drag.active {
            return false;
        }
        let dx = x - self.drag.last_x;
        let dy = y - self.drag.last_y;
        self.drag.last_x = x;
        self.drag.last_y = y;
        self.rotate_by_pixels(dx, dy, viewport_height);
        true
    }

    /// Queue a rotation for `dx`, `dy` pixels of drag; a full viewport height
    /// of travel turns the camera once around.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.delta_theta -= TAU * dx / h * self.settings.rotate_speed;
        self.delta_phi -= TAU * dy / h * self.settings.rotate_speed;
    }

    #[inline]
    fn zoom_scale(&self) -> f32 {
        0.95_f32.powf(self.settings.zoom_speed)
    }

    /// Wheel zoom. Negative `delta_y` (scrolling up) zooms in.
    ///
    /// Orthographic cameras change `zoom` and rebuild their projection right
    /// away; perspective cameras queue a dolly applied by the next `update`.
    pub fn zoom(&mut self, camera: &mut Camera, delta_y: f32) {
        if !self.settings.enable_zoom || delta_y == 0.0 {
            return;
        }
        let s = self.zoom_scale();
        let zoom_in = delta_y < 0.0;
        if camera.is_orthographic() {
            let next = if zoom_in {
                camera.zoom / s
            } else {
                camera.zoom * s
            };
            camera.zoom = next.clamp(self.settings.min_zoom, self.settings.max_zoom);
            camera.update_projection_matrix();
        } else if zoom_in {
            self.pending_scale *= s;
        } else {
            self.pending_scale /= s;
        }
    }

    /// Apply pending rotation and dolly to the camera. Returns true when the
    /// camera eye moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let before = camera.eye;
        let (step_theta, step_phi) = if self.settings.enable_damping {
            (
                self.delta_theta * self.settings.damping_factor,
                self.delta_phi * self.settings.damping_factor,
            )
        } else {
            (self.delta_theta, self.delta_phi)
        };

        let mut s = self.spherical;
        s.theta += step_theta;
        s.phi = (s.phi + step_phi).clamp(ORBIT_POLE_EPSILON, PI - ORBIT_POLE_EPSILON);
        s.radius = (s.radius * self.pending_scale)
            .clamp(self.settings.min_distance, self.settings.max_distance);
        self.spherical = s;
        camera.eye = camera.target + s.to_offset();

        if self.settings.enable_damping {
            let keep = 1.0 - self.settings.damping_factor;
            self.delta_theta *= keep;
            self.delta_phi *= keep;
            if self.delta_theta.abs() < ORBIT_SETTLE_EPSILON {
                self.delta_theta = 0.0;
            }
            if self.delta_phi.abs() < ORBIT_SETTLE_EPSILON {
                self.delta_phi = 0.0;
            }
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
        self.pending_scale = 1.0;

        camera.eye != before
    }
}
