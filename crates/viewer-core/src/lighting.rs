//! Light rig description and color helpers.

use crate::constants::{
    AMBIENT_LIGHT, FILL_LIGHT, KEY_LIGHT, RIM_LIGHT, SOFT_AMBIENT_LIGHT, SOFT_KEY_LIGHT,
};
use glam::Vec3;

/// Maximum directional lights the shader evaluates.
pub const MAX_DIRECTIONAL_LIGHTS: usize = 3;

/// Linear RGB color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb(pub Vec3);

impl Rgb {
    /// Decode a `0xRRGGBB` sRGB hex value into linear RGB.
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
        Self(Vec3::new(channel(16), channel(8), channel(0)))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        self.0.to_array()
    }
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Parallel light shining from `position` toward the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Rgb,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    pub fn new(hex: u32, intensity: f32, position: [f32; 3]) -> Self {
        Self {
            color: Rgb::from_hex(hex),
            intensity,
            position: Vec3::from(position),
        }
    }

    /// Unit vector pointing from the lit surface toward the light.
    pub fn direction_to_light(&self) -> Vec3 {
        self.position.try_normalize().unwrap_or(Vec3::Y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

impl AmbientLight {
    pub fn new(hex: u32, intensity: f32) -> Self {
        Self {
            color: Rgb::from_hex(hex),
            intensity,
        }
    }

    #[inline]
    pub fn radiance(&self) -> Vec3 {
        self.color.0 * self.intensity
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    pub directional: Vec<DirectionalLight>,
    pub ambient: AmbientLight,
}

impl LightRig {
    /// Key, fill and rim lights plus a subtle grey ambient.
    pub fn three_point() -> Self {
        let light = |(hex, intensity, pos): (u32, f32, [f32; 3])| {
            DirectionalLight::new(hex, intensity, pos)
        };
        Self {
            directional: vec![light(KEY_LIGHT), light(FILL_LIGHT), light(RIM_LIGHT)],
            ambient: AmbientLight::new(AMBIENT_LIGHT.0, AMBIENT_LIGHT.1),
        }
    }

    /// One distant top light with a flat ambient fill.
    pub fn soft() -> Self {
        let (hex, intensity, pos) = SOFT_KEY_LIGHT;
        Self {
            directional: vec![DirectionalLight::new(hex, intensity, pos)],
            ambient: AmbientLight::new(SOFT_AMBIENT_LIGHT.0, SOFT_AMBIENT_LIGHT.1),
        }
    }

    /// Pack into fixed-size arrays for the shader; unused slots have zero
    /// intensity. Lights past `MAX_DIRECTIONAL_LIGHTS` are dropped.
    pub fn packed(&self) -> PackedLights {
        let mut packed = PackedLights {
            directions: [[0.0; 4]; MAX_DIRECTIONAL_LIGHTS],
            colors: [[0.0; 4]; MAX_DIRECTIONAL_LIGHTS],
            ambient: [0.0; 4],
        };
        if self.directional.len() > MAX_DIRECTIONAL_LIGHTS {
            log::warn!(
                "[lights] rig has {} directional lights, only {} are rendered",
                self.directional.len(),
                MAX_DIRECTIONAL_LIGHTS
            );
        }
        for (i, light) in self
            .directional
            .iter()
            .take(MAX_DIRECTIONAL_LIGHTS)
            .enumerate()
        {
            packed.directions[i] = light.direction_to_light().extend(0.0).to_array();
            packed.colors[i] = light.color.0.extend(light.intensity).to_array();
        }
        packed.ambient = self.ambient.radiance().extend(1.0).to_array();
        packed
    }
}

impl Default for LightRig {
    fn default() -> Self {
        Self::three_point()
    }
}

/// Shader-ready light data: `colors[i].w` carries the intensity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackedLights {
    pub directions: [[f32; 4]; MAX_DIRECTIONAL_LIGHTS],
    pub colors: [[f32; 4]; MAX_DIRECTIONAL_LIGHTS],
    pub ambient: [f32; 4],
}
