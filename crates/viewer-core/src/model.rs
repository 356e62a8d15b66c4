//! CPU-side model geometry and the object transform it is drawn with.

use crate::pointer::OrientationTarget;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
    /// `[roughness, metalness]`
    pub pbr: [f32; 2],
}

/// Axis-aligned bounds in model space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a [f32; 3]>) -> Option<Self> {
        let mut iter = points.into_iter().map(|p| Vec3::from(*p));
        let first = iter.next()?;
        Some(iter.fold(Self { min: first, max: first }, |b, p| Self {
            min: b.min.min(p),
            max: b.max.max(p),
        }))
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Material values forced onto every vertex after decoding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialOverride {
    pub roughness: f32,
    pub metalness: f32,
}

impl Default for MaterialOverride {
    fn default() -> Self {
        Self {
            roughness: crate::constants::MATERIAL_ROUGHNESS,
            metalness: crate::constants::MATERIAL_METALNESS,
        }
    }
}

/// Decoded triangle list with node transforms already baked in.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub bounds: Aabb,
    pub mesh_count: usize,
}

impl ModelData {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn apply_material_override(&mut self, material: MaterialOverride) {
        for v in &mut self.vertices {
            v.pbr = [material.roughness, material.metalness];
        }
    }
}

/// Placement of the loaded object in the scene.
///
/// `upright` is a fixed correction applied before the per-frame
/// `orientation`, which is overwritten (never accumulated) each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObjectTransform {
    pub scale: f32,
    pub upright: Quat,
    pub orientation: OrientationTarget,
}

impl ObjectTransform {
    pub fn new(scale: f32, upright_x_radians: f32) -> Self {
        Self {
            scale,
            upright: Quat::from_rotation_x(upright_x_radians),
            orientation: OrientationTarget::default(),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let follow = Quat::from_euler(
            EulerRot::YXZ,
            self.orientation.yaw,
            self.orientation.pitch,
            0.0,
        );
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            follow * self.upright,
            Vec3::ZERO,
        )
    }
}

/// A model that finished loading, owned by the viewer context.
#[derive(Clone, Debug)]
pub struct LoadedModel {
    pub data: ModelData,
    pub transform: ObjectTransform,
}
