//! GLB decoding and the load outcome handed to the viewer context.
//!
//! Fetching the bytes is platform work (HTTP on the web, a file read on
//! native); everything after that lives here so both front-ends decode and
//! report the same way.

use crate::model::{Aabb, MaterialOverride, ModelData, Vertex};
use glam::{Mat3, Mat4, Vec3};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid glTF: {0}")]
    Decode(#[from] gltf::Error),
    #[error("model contains no triangle geometry")]
    NoGeometry,
}

/// Result of one load attempt, consumed once by the viewer context.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(ModelData),
    Failed(LoadError),
}

impl From<Result<ModelData, LoadError>> for LoadOutcome {
    fn from(result: Result<ModelData, LoadError>) -> Self {
        match result {
            Ok(data) => LoadOutcome::Loaded(data),
            Err(e) => LoadOutcome::Failed(e),
        }
    }
}

/// Download progress; `total` is unknown when the server omits a length.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadProgress {
    pub loaded: u64,
    pub total: Option<u64>,
}

impl LoadProgress {
    pub fn percent(&self) -> Option<f64> {
        match self.total {
            Some(total) if total > 0 => Some(self.loaded as f64 / total as f64 * 100.0),
            _ => None,
        }
    }

    pub fn log(&self) {
        match self.percent() {
            Some(pct) => log::info!("[load] {}% loaded", pct),
            None => log::info!("[load] {} bytes loaded", self.loaded),
        }
    }
}

/// Decode a GLB (or embedded-buffer glTF) blob and apply `material`.
pub fn decode_glb(bytes: &[u8], material: MaterialOverride) -> Result<ModelData, LoadError> {
    let mut data = decode_geometry(bytes)?;
    data.apply_material_override(material);
    log::info!(
        "[load] decoded {} meshes, {} vertices, {} triangles, size=({:.2},{:.2},{:.2})",
        data.mesh_count,
        data.vertices.len(),
        data.triangle_count(),
        data.bounds.size().x,
        data.bounds.size().y,
        data.bounds.size().z
    );
    Ok(data)
}

/// Decode geometry with the materials the file declares.
pub fn decode_geometry(bytes: &[u8]) -> Result<ModelData, LoadError> {
    let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(bytes)?;
    let buffers = gltf::import_buffers(&document, None, blob)?;

    let mut builder = MeshBuilder::default();
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next());
    match scene {
        Some(scene) => {
            for node in scene.nodes() {
                builder.visit_node(&node, Mat4::IDENTITY, &buffers);
            }
        }
        None => {
            // No scene graph: take every mesh untransformed.
            for mesh in document.meshes() {
                builder.push_mesh(&mesh, Mat4::IDENTITY, &buffers);
            }
        }
    }
    builder.finish()
}

#[derive(Default)]
struct MeshBuilder {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    mesh_count: usize,
}

impl MeshBuilder {
    fn visit_node(&mut self, node: &gltf::Node, parent: Mat4, buffers: &[gltf::buffer::Data]) {
        let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
        if let Some(mesh) = node.mesh() {
            self.push_mesh(&mesh, world, buffers);
        }
        for child in node.children() {
            self.visit_node(&child, world, buffers);
        }
    }

    fn push_mesh(&mut self, mesh: &gltf::Mesh, world: Mat4, buffers: &[gltf::buffer::Data]) {
        let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
        let mut pushed = false;
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::warn!(
                    "[load] skipping {:?} primitive in mesh {:?}",
                    primitive.mode(),
                    mesh.name()
                );
                continue;
            }
            let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
            let Some(positions) = reader.read_positions() else {
                continue;
            };
            let positions: Vec<Vec3> = positions
                .map(|p| world.transform_point3(Vec3::from(p)))
                .collect();
            if positions.is_empty() {
                continue;
            }
            let local_indices: Vec<u32> = match reader.read_indices() {
                Some(ix) => ix.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };
            if local_indices
                .iter()
                .any(|&i| i as usize >= positions.len())
            {
                log::warn!("[load] primitive index out of range, skipped");
                continue;
            }
            let normals: Vec<Vec3> = match reader.read_normals() {
                Some(ns) if ns.len() == positions.len() => ns
                    .map(|n| (normal_matrix * Vec3::from(n)).normalize_or_zero())
                    .collect(),
                _ => generate_normals(&positions, &local_indices),
            };

            let pbr = primitive.material().pbr_metallic_roughness();
            let color = pbr.base_color_factor();
            let material = [pbr.roughness_factor(), pbr.metallic_factor()];

            let base = self.vertices.len() as u32;
            self.vertices
                .extend(positions.iter().zip(normals.iter()).map(|(p, n)| Vertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                    color,
                    pbr: material,
                }));
            self.indices.extend(local_indices.iter().map(|i| base + i));
            pushed = true;
        }
        if pushed {
            self.mesh_count += 1;
        }
    }

    fn finish(self) -> Result<ModelData, LoadError> {
        if self.indices.len() < 3 {
            return Err(LoadError::NoGeometry);
        }
        let bounds = Aabb::from_points(self.vertices.iter().map(|v| &v.position))
            .ok_or(LoadError::NoGeometry)?;
        Ok(ModelData {
            vertices: self.vertices,
            indices: self.indices,
            bounds,
            mesh_count: self.mesh_count,
        })
    }
}

/// Area-weighted vertex normals from triangle faces. Vertices shared through
/// the index buffer get smoothed normals; unindexed triangles come out flat.
pub fn generate_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let face = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += face;
        normals[b] += face;
        normals[c] += face;
    }
    normals
        .into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y))
        .collect()
}
