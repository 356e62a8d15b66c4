//! Viewer variants: which projection, light rig and interaction to use.

use crate::camera::Projection;
use crate::constants::*;
use crate::lighting::LightRig;
use crate::model::MaterialOverride;
use crate::orbit::OrbitSettings;
use crate::pointer::OrientationMapper;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Orthographic isometric view with damped orbit controls.
    Isometric,
    /// Perspective view; the object turns to follow the pointer.
    FollowPointer,
    /// Perspective view with orbit controls.
    Perspective,
}

impl Variant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "isometric" | "ortho" | "orthographic" => Some(Variant::Isometric),
            "follow" | "follow-pointer" | "pointer" => Some(Variant::FollowPointer),
            "perspective" => Some(Variant::Perspective),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ViewerConfig {
    pub model_path: String,
    pub projection: Projection,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    pub background_hex: u32,
    /// Clear with zero alpha so the page behind the canvas shows through.
    pub transparent_background: bool,
    pub lights: LightRig,
    pub material: MaterialOverride,
    pub model_scale: f32,
    pub model_upright_x: f32,
    /// `None` disables orbit controls.
    pub orbit: Option<OrbitSettings>,
    /// `None` leaves the object orientation alone.
    pub follow_pointer: Option<OrientationMapper>,
}

impl ViewerConfig {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Isometric => Self::isometric(),
            Variant::FollowPointer => Self::follow_pointer(),
            Variant::Perspective => Self::perspective(),
        }
    }

    pub fn isometric() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.to_string(),
            projection: Projection::Orthographic {
                frustum_size: FRUSTUM_SIZE,
                near: ORTHO_NEAR,
                far: ORTHO_FAR,
            },
            camera_position: camera_position_vec3(),
            camera_target: camera_target_vec3(),
            background_hex: BACKGROUND_HEX,
            transparent_background: false,
            lights: LightRig::three_point(),
            material: MaterialOverride::default(),
            model_scale: MODEL_SCALE,
            model_upright_x: MODEL_UPRIGHT_X_RADIANS,
            orbit: Some(OrbitSettings::default()),
            follow_pointer: None,
        }
    }

    pub fn follow_pointer() -> Self {
        Self {
            projection: perspective_projection(),
            camera_position: Vec3::new(0.0, 0.0, PERSPECTIVE_DISTANCE),
            transparent_background: true,
            lights: LightRig::soft(),
            orbit: None,
            follow_pointer: Some(OrientationMapper::default()),
            ..Self::isometric()
        }
    }

    pub fn perspective() -> Self {
        Self {
            projection: perspective_projection(),
            ..Self::isometric()
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::isometric()
    }
}

fn perspective_projection() -> Projection {
    Projection::Perspective {
        fovy_radians: PERSPECTIVE_FOVY_DEG.to_radians(),
        near: PERSPECTIVE_NEAR,
        far: PERSPECTIVE_FAR,
    }
}
