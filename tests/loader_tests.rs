// Host-side tests for GLB decoding and load bookkeeping.

mod common;

use glam::Vec3;
use viewer_core::{
    decode_geometry, decode_glb, generate_normals, LoadError, LoadOutcome, LoadProgress,
    MaterialOverride,
};

#[test]
fn node_translation_is_baked_into_vertices() {
    let data = decode_geometry(&common::triangle_glb([1.0, 2.0, 3.0])).unwrap();

    assert_eq!(data.vertices.len(), 3);
    assert_eq!(data.triangle_count(), 1);
    assert_eq!(data.mesh_count, 1);
    assert_eq!(data.bounds.min, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(data.bounds.max, Vec3::new(2.0, 3.0, 3.0));
}

#[test]
fn missing_normals_are_generated_from_faces() {
    let data = decode_geometry(&common::triangle_glb([0.0, 0.0, 0.0])).unwrap();
    for v in &data.vertices {
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        assert_eq!(v.color, [1.0, 0.0, 0.0, 1.0]);
    }
}

#[test]
fn material_override_replaces_file_values() {
    let bytes = common::triangle_glb([0.0, 0.0, 0.0]);

    let raw = decode_geometry(&bytes).unwrap();
    assert!(raw.vertices.iter().all(|v| v.pbr == [1.0, 0.0]));

    let data = decode_glb(&bytes, MaterialOverride::default()).unwrap();
    assert!(data.vertices.iter().all(|v| v.pbr == [0.3, 0.4]));
    // Base color is left as authored
    assert!(data.vertices.iter().all(|v| v.color == [1.0, 0.0, 0.0, 1.0]));
}

#[test]
fn parent_scale_applies_to_child_mesh() {
    let data = decode_geometry(&common::indexed_quad_glb()).unwrap();

    assert_eq!(data.vertices.len(), 4);
    assert_eq!(data.indices, vec![0, 1, 2, 0, 2, 3]);
    assert_eq!(data.triangle_count(), 2);
    assert_eq!(data.bounds.min, Vec3::ZERO);
    assert_eq!(data.bounds.max, Vec3::new(2.0, 2.0, 0.0));
    for v in &data.vertices {
        assert!((Vec3::from(v.normal) - Vec3::Z).length() < 1e-5);
    }
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let err = decode_glb(b"definitely not a model", MaterialOverride::default()).unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)), "got {:?}", err);
}

#[test]
fn scene_without_meshes_has_no_geometry() {
    let err = decode_geometry(&common::empty_scene_glb()).unwrap_err();
    assert!(matches!(err, LoadError::NoGeometry), "got {:?}", err);
}

#[test]
fn outcome_wraps_result() {
    let ok: LoadOutcome = decode_geometry(&common::triangle_glb([0.0, 0.0, 0.0])).into();
    assert!(matches!(ok, LoadOutcome::Loaded(_)));

    let failed: LoadOutcome = Err(LoadError::Fetch("404".into())).into();
    assert!(matches!(failed, LoadOutcome::Failed(LoadError::Fetch(_))));
}

#[test]
fn progress_percent_needs_known_total() {
    let half = LoadProgress {
        loaded: 512,
        total: Some(1024),
    };
    assert_eq!(half.percent(), Some(50.0));

    let unknown = LoadProgress {
        loaded: 512,
        total: None,
    };
    assert_eq!(unknown.percent(), None);

    let empty = LoadProgress {
        loaded: 0,
        total: Some(0),
    };
    assert_eq!(empty.percent(), None);
}

#[test]
fn shared_vertices_get_smoothed_normals() {
    // Two faces folded along the shared edge 0-1
    let positions = [
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, -1.0),
    ];
    let indices = [0, 1, 2, 0, 1, 3];
    let normals = generate_normals(&positions, &indices);

    assert!((normals[2] - Vec3::Z).length() < 1e-6);
    assert!((normals[3] - Vec3::Y).length() < 1e-6);
    let shared = Vec3::new(0.0, 1.0, 1.0).normalize();
    assert!((normals[0] - shared).length() < 1e-6);
    assert!((normals[1] - shared).length() < 1e-6);
}

#[test]
fn degenerate_faces_fall_back_to_up() {
    let positions = [Vec3::ZERO, Vec3::X, Vec3::X * 2.0];
    let normals = generate_normals(&positions, &[0, 1, 2]);
    assert!(normals.iter().all(|n| *n == Vec3::Y));
}
