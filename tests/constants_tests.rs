// Host-side tests for constants, light rigs and variant selection.

use viewer_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Clip planes must be ordered and positive
    assert!(ORTHO_NEAR > 0.0 && ORTHO_NEAR < ORTHO_FAR);
    assert!(PERSPECTIVE_NEAR > 0.0 && PERSPECTIVE_NEAR < PERSPECTIVE_FAR);
    assert!(FRUSTUM_SIZE > 0.0);
    assert!(PERSPECTIVE_FOVY_DEG > 0.0 && PERSPECTIVE_FOVY_DEG < 180.0);

    // Damping factor is a per-frame fraction
    assert!(ORBIT_DAMPING_FACTOR > 0.0 && ORBIT_DAMPING_FACTOR <= 1.0);
    assert!(ORBIT_MIN_ZOOM > 0.0 && ORBIT_MIN_ZOOM < 1.0 && ORBIT_MAX_ZOOM > 1.0);
    assert!(ORBIT_MIN_DISTANCE > 0.0 && ORBIT_MIN_DISTANCE < ORBIT_MAX_DISTANCE);

    // Material factors are normalized
    assert!((0.0..=1.0).contains(&MATERIAL_ROUGHNESS));
    assert!((0.0..=1.0).contains(&MATERIAL_METALNESS));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn follow_pointer_keeps_object_facing_forward() {
    // Yaw and pitch never reach a quarter turn for in-window pointers
    assert!(YAW_SCALE > 0.0 && YAW_SCALE < 0.5);
    assert!(PITCH_SCALE > 0.0 && PITCH_SCALE < 0.5);
    assert!(PITCH_SCALE < YAW_SCALE);
}

#[test]
fn default_camera_distance_fits_clip_and_orbit_range() {
    let eye = camera_position_vec3();
    let dist = (eye - camera_target_vec3()).length();
    assert!(dist > ORTHO_NEAR && dist < ORTHO_FAR);
    assert!(dist > ORBIT_MIN_DISTANCE && dist < ORBIT_MAX_DISTANCE);
    assert!(PERSPECTIVE_DISTANCE > ORBIT_MIN_DISTANCE);
}

#[test]
fn three_point_rig_packs_into_shader_slots() {
    let packed = LightRig::three_point().packed();

    assert_eq!(packed.colors[0][3], KEY_LIGHT.1);
    assert_eq!(packed.colors[1][3], FILL_LIGHT.1);
    assert_eq!(packed.colors[2][3], RIM_LIGHT.1);
    for dir in packed.directions {
        let len = glam::Vec4::from(dir).truncate().length();
        assert!((len - 1.0).abs() < 1e-6);
        assert_eq!(dir[3], 0.0);
    }
    // Ambient 0x404040 at 0.6, linearized
    let expected = srgb_to_linear(64.0 / 255.0) * AMBIENT_LIGHT.1;
    assert!((packed.ambient[0] - expected).abs() < 1e-6);
    assert_eq!(packed.ambient[0], packed.ambient[2]);
}

#[test]
fn soft_rig_leaves_unused_slots_dark() {
    let packed = LightRig::soft().packed();
    assert_eq!(packed.colors[0][3], 1.0);
    assert_eq!(packed.colors[1], [0.0; 4]);
    assert_eq!(packed.colors[2], [0.0; 4]);

    let d = packed.directions[0];
    let s = 1.0 / 3f32.sqrt();
    assert!((d[0] - s).abs() < 1e-6 && (d[1] - s).abs() < 1e-6 && (d[2] - s).abs() < 1e-6);
}

#[test]
fn extra_directional_lights_are_dropped() {
    let mut rig = LightRig::three_point();
    rig.directional
        .push(DirectionalLight::new(0xff0000, 9.0, [1.0, 0.0, 0.0]));
    let packed = rig.packed();
    assert!(packed.colors.iter().all(|c| c[3] != 9.0));
}

#[test]
fn hex_colors_decode_to_linear() {
    let white = Rgb::from_hex(0xffffff).0;
    assert!((white - glam::Vec3::ONE).length() < 1e-5);
    assert_eq!(Rgb::from_hex(0x000000).to_array(), [0.0, 0.0, 0.0]);
    let red = Rgb::from_hex(0xff0000).to_array();
    assert!((red[0] - 1.0).abs() < 1e-5);
    assert_eq!([red[1], red[2]], [0.0, 0.0]);
    // Mid grey is darker once linearized
    assert!(Rgb::from_hex(0x808080).0.x < 0.25);
}

#[test]
fn variant_names_resolve() {
    assert_eq!(Variant::from_name("isometric"), Some(Variant::Isometric));
    assert_eq!(Variant::from_name(" Ortho "), Some(Variant::Isometric));
    assert_eq!(Variant::from_name("follow-pointer"), Some(Variant::FollowPointer));
    assert_eq!(Variant::from_name("PERSPECTIVE"), Some(Variant::Perspective));
    assert_eq!(Variant::from_name("fisheye"), None);
}

#[test]
fn variant_configs_pick_matching_interaction() {
    let iso = ViewerConfig::for_variant(Variant::Isometric);
    assert!(matches!(iso.projection, Projection::Orthographic { .. }));
    assert!(iso.orbit.is_some() && iso.follow_pointer.is_none());
    assert!(!iso.transparent_background);

    let follow = ViewerConfig::for_variant(Variant::FollowPointer);
    assert!(matches!(follow.projection, Projection::Perspective { .. }));
    assert!(follow.orbit.is_none() && follow.follow_pointer.is_some());
    assert!(follow.transparent_background);
    assert_eq!(follow.lights.directional.len(), 1);

    let persp = ViewerConfig::for_variant(Variant::Perspective);
    assert!(matches!(persp.projection, Projection::Perspective { .. }));
    assert!(persp.orbit.is_some());
    assert_eq!(persp.model_path, DEFAULT_MODEL_PATH);
}
