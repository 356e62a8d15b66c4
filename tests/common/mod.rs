//! Small GLB fixtures for loader tests.
//!
//! Documents are built as `gltf_json::Root` values; only the GLB container
//! framing around the serialized JSON and the binary payload is written here.

#![allow(dead_code)]

use gltf_json as json;
use gltf_json::validation::Checked::Valid;
use std::collections::BTreeMap;

const GLB_MAGIC: &[u8; 4] = b"glTF";
const CHUNK_JSON: u32 = 0x4E4F_534A;
const CHUNK_BIN: u32 = 0x004E_4942;

/// Wrap a JSON document and binary payload into a GLB container. The BIN
/// chunk is omitted when `bin` is empty.
pub fn glb(json: &str, bin: &[u8]) -> Vec<u8> {
    let mut json_bytes = json.as_bytes().to_vec();
    while json_bytes.len() % 4 != 0 {
        json_bytes.push(b' ');
    }
    let mut bin_bytes = bin.to_vec();
    while bin_bytes.len() % 4 != 0 {
        bin_bytes.push(0);
    }
    let has_bin = !bin_bytes.is_empty();
    let total = 12 + 8 + json_bytes.len() + if has_bin { 8 + bin_bytes.len() } else { 0 };

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(GLB_MAGIC);
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json_bytes.len() as u32).to_le_bytes());
    out.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    out.extend_from_slice(&json_bytes);
    if has_bin {
        out.extend_from_slice(&(bin_bytes.len() as u32).to_le_bytes());
        out.extend_from_slice(&CHUNK_BIN.to_le_bytes());
        out.extend_from_slice(&bin_bytes);
    }
    out
}

fn assemble(root: &json::Root, bin: &[u8]) -> Vec<u8> {
    let text = json::serialize::to_string(root).expect("serialize glTF JSON");
    glb(&text, bin)
}

/// Binary payload plus the views and accessors describing it.
#[derive(Default)]
struct Payload {
    data: Vec<u8>,
    views: Vec<json::buffer::View>,
    accessors: Vec<json::Accessor>,
}

impl Payload {
    fn push_view(
        &mut self,
        bytes: &[u8],
        target: json::buffer::Target,
    ) -> json::Index<json::buffer::View> {
        let offset = self.data.len();
        self.data.extend_from_slice(bytes);
        while self.data.len() % 4 != 0 {
            self.data.push(0);
        }
        self.views.push(json::buffer::View {
            buffer: json::Index::new(0),
            byte_length: bytes.len().into(),
            byte_offset: Some((offset as u64).into()),
            byte_stride: None,
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            target: Some(Valid(target)),
        });
        json::Index::new(self.views.len() as u32 - 1)
    }

    fn push_accessor(
        &mut self,
        view: json::Index<json::buffer::View>,
        count: usize,
        component: json::accessor::ComponentType,
        type_: json::accessor::Type,
        bounds: Option<([f32; 3], [f32; 3])>,
    ) -> json::Index<json::Accessor> {
        let to_value =
            |v: [f32; 3]| json::Value::Array(v.into_iter().map(json::Value::from).collect());
        self.accessors.push(json::Accessor {
            buffer_view: Some(view),
            byte_offset: Some(0u64.into()),
            count: count.into(),
            component_type: Valid(json::accessor::GenericComponentType(component)),
            extensions: Default::default(),
            extras: Default::default(),
            type_: Valid(type_),
            min: bounds.map(|(min, _)| to_value(min)),
            max: bounds.map(|(_, max)| to_value(max)),
            name: None,
            normalized: false,
            sparse: None,
        });
        json::Index::new(self.accessors.len() as u32 - 1)
    }

    fn positions(&mut self, positions: &[[f32; 3]]) -> json::Index<json::Accessor> {
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        for p in positions {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
        let view = self.push_view(
            bytemuck::cast_slice(positions),
            json::buffer::Target::ArrayBuffer,
        );
        self.push_accessor(
            view,
            positions.len(),
            json::accessor::ComponentType::F32,
            json::accessor::Type::Vec3,
            Some((min, max)),
        )
    }

    fn indices_u16(&mut self, indices: &[u16]) -> json::Index<json::Accessor> {
        let view = self.push_view(
            bytemuck::cast_slice(indices),
            json::buffer::Target::ElementArrayBuffer,
        );
        self.push_accessor(
            view,
            indices.len(),
            json::accessor::ComponentType::U16,
            json::accessor::Type::Scalar,
            None,
        )
    }

    fn buffers(&self) -> Vec<json::Buffer> {
        if self.data.is_empty() {
            return Vec::new();
        }
        vec![json::Buffer {
            byte_length: self.data.len().into(),
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            uri: None,
        }]
    }
}

fn node(mesh: Option<u32>) -> json::Node {
    json::Node {
        camera: None,
        children: None,
        extensions: Default::default(),
        extras: Default::default(),
        matrix: None,
        mesh: mesh.map(json::Index::new),
        name: None,
        rotation: None,
        scale: None,
        skin: None,
        translation: None,
        weights: None,
    }
}

fn triangle_mesh(
    positions: json::Index<json::Accessor>,
    indices: Option<json::Index<json::Accessor>>,
    material: Option<json::Index<json::Material>>,
) -> json::Mesh {
    let mut attributes = BTreeMap::new();
    attributes.insert(Valid(json::mesh::Semantic::Positions), positions);
    json::Mesh {
        extensions: Default::default(),
        extras: Default::default(),
        name: None,
        primitives: vec![json::mesh::Primitive {
            attributes,
            extensions: Default::default(),
            extras: Default::default(),
            indices,
            material,
            mode: Valid(json::mesh::Mode::Triangles),
            targets: None,
        }],
        weights: None,
    }
}

fn root(
    payload: Payload,
    nodes: Vec<json::Node>,
    meshes: Vec<json::Mesh>,
    materials: Vec<json::Material>,
) -> (json::Root, Vec<u8>) {
    let buffers = payload.buffers();
    let root = json::Root {
        accessors: payload.accessors,
        animations: Vec::new(),
        asset: json::Asset {
            copyright: None,
            extensions: Default::default(),
            extras: Default::default(),
            generator: Some("viewer-tests".to_string()),
            min_version: None,
            version: "2.0".to_string(),
        },
        buffers,
        buffer_views: payload.views,
        cameras: Vec::new(),
        extensions: Default::default(),
        extensions_required: Vec::new(),
        extensions_used: Vec::new(),
        extras: Default::default(),
        images: Vec::new(),
        materials,
        meshes,
        nodes,
        samplers: Vec::new(),
        scene: Some(json::Index::new(0)),
        scenes: vec![json::Scene {
            extensions: Default::default(),
            extras: Default::default(),
            name: None,
            nodes: vec![json::Index::new(0)],
        }],
        skins: Vec::new(),
        textures: Vec::new(),
    };
    (root, payload.data)
}

/// One red triangle in the XY plane (no normals, no indices) placed by a
/// node translated to `translation`.
pub fn triangle_glb(translation: [f32; 3]) -> Vec<u8> {
    let mut payload = Payload::default();
    let positions = payload.positions(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);

    let material = json::Material {
        pbr_metallic_roughness: json::material::PbrMetallicRoughness {
            base_color_factor: json::material::PbrBaseColorFactor([1.0, 0.0, 0.0, 1.0]),
            metallic_factor: json::material::StrengthFactor(0.0),
            roughness_factor: json::material::StrengthFactor(1.0),
            ..Default::default()
        },
        ..Default::default()
    };
    let placed = json::Node {
        translation: Some(translation),
        ..node(Some(0))
    };

    let (root, bin) = root(
        payload,
        vec![placed],
        vec![triangle_mesh(positions, None, Some(json::Index::new(0)))],
        vec![material],
    );
    assemble(&root, &bin)
}

/// A unit quad made of two indexed triangles sharing an edge, nested under a
/// parent node scaled by 2.
pub fn indexed_quad_glb() -> Vec<u8> {
    let mut payload = Payload::default();
    let positions = payload.positions(&[
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
    ]);
    let indices = payload.indices_u16(&[0, 1, 2, 0, 2, 3]);

    let parent = json::Node {
        children: Some(vec![json::Index::new(1)]),
        scale: Some([2.0, 2.0, 2.0]),
        ..node(None)
    };

    let (root, bin) = root(
        payload,
        vec![parent, node(Some(0))],
        vec![triangle_mesh(positions, Some(indices), None)],
        Vec::new(),
    );
    assemble(&root, &bin)
}

/// A valid GLB whose scene has a node but no meshes.
pub fn empty_scene_glb() -> Vec<u8> {
    let empty = json::Node {
        name: Some("empty".to_string()),
        ..node(None)
    };
    let (root, bin) = root(Payload::default(), vec![empty], Vec::new(), Vec::new());
    assemble(&root, &bin)
}
