use glam::Vec3;

// Shared viewer tuning constants used by both web and native frontends.

// Asset and host page
pub const DEFAULT_MODEL_PATH: &str = "./richard_savage_voice_logo.glb";
pub const CONTAINER_ID: &str = "container3D";

// Orthographic camera
pub const FRUSTUM_SIZE: f32 = 5.0; // vertical extent; smaller zooms in
pub const ORTHO_NEAR: f32 = 0.1;
pub const ORTHO_FAR: f32 = 1000.0;

// Perspective camera
pub const PERSPECTIVE_FOVY_DEG: f32 = 45.0;
pub const PERSPECTIVE_NEAR: f32 = 0.1;
pub const PERSPECTIVE_FAR: f32 = 1000.0;
pub const PERSPECTIVE_DISTANCE: f32 = 8.0; // eye distance on +Z for pointer-follow variants

// Camera placement (isometric-like default, orbitable)
pub const CAMERA_POSITION: [f32; 3] = [10.0, 10.0, 10.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];

// Background (light neutral for contrast against dark models)
pub const BACKGROUND_HEX: u32 = 0xe0e0e0;

// Pointer-to-orientation scale factors (fractions of π)
pub const YAW_SCALE: f32 = 0.25;
pub const PITCH_SCALE: f32 = 0.15;

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.08;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_MIN_ZOOM: f32 = 0.1;
pub const ORBIT_MAX_ZOOM: f32 = 20.0;
pub const ORBIT_MIN_DISTANCE: f32 = 0.5;
pub const ORBIT_MAX_DISTANCE: f32 = 500.0;
pub const ORBIT_POLE_EPSILON: f32 = 1e-6; // keeps phi strictly inside (0, π)
pub const ORBIT_SETTLE_EPSILON: f32 = 1e-6; // pending deltas below this are dropped

// Model placement
pub const MODEL_SCALE: f32 = 1.0;
pub const MODEL_UPRIGHT_X_RADIANS: f32 = -std::f32::consts::FRAC_PI_2; // Blender Z-up -> Y-up

// Material override applied to every mesh after load
pub const MATERIAL_ROUGHNESS: f32 = 0.3;
pub const MATERIAL_METALNESS: f32 = 0.4;

// Three-point light rig: (hex color, intensity, position)
pub const KEY_LIGHT: (u32, f32, [f32; 3]) = (0xffffff, 1.2, [2.0, 8.0, 6.0]);
pub const FILL_LIGHT: (u32, f32, [f32; 3]) = (0xffffff, 0.5, [-4.0, 2.0, 2.0]);
pub const RIM_LIGHT: (u32, f32, [f32; 3]) = (0xffffff, 0.7, [0.0, 5.0, -10.0]);
pub const AMBIENT_LIGHT: (u32, f32) = (0x404040, 0.6);

// Soft rig used by the pointer-follow variant
pub const SOFT_KEY_LIGHT: (u32, f32, [f32; 3]) = (0xffffff, 1.0, [500.0, 500.0, 500.0]);
pub const SOFT_AMBIENT_LIGHT: (u32, f32) = (0x333333, 1.0);

#[inline]
pub fn camera_position_vec3() -> Vec3 {
    Vec3::from(CAMERA_POSITION)
}

#[inline]
pub fn camera_target_vec3() -> Vec3 {
    Vec3::from(CAMERA_TARGET)
}
