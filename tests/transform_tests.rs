use glam::{Mat4, Quat, Vec3};
use scene_lab::transform::Placement;

/// The vehicle placement from the lab scene, used as the literal reference
/// case for composition order.
fn vehicle_placement() -> Placement {
    Placement::new(Vec3::new(-5.0, -2.2, 0.0))
        .with_uniform_scale(1.2)
        .rotated(270.0, Vec3::Y)
        .rotated(35.0, Vec3::X)
        .rotated(-40.0, Vec3::new(1.0, 0.0, 1.0))
}

fn assert_mat4_close(a: Mat4, b: Mat4) {
    for (x, y) in a.to_cols_array().iter().zip(b.to_cols_array().iter()) {
        assert!((x - y).abs() < 1e-5, "matrices differ:\n{a}\n{b}");
    }
}

#[test]
fn test_composition_matches_explicit_matrix_product() {
    let expected = Mat4::from_translation(Vec3::new(-5.0, -2.2, 0.0))
        * Mat4::from_scale(Vec3::splat(1.2))
        * Mat4::from_axis_angle(Vec3::Y, 270.0_f32.to_radians())
        * Mat4::from_axis_angle(Vec3::X, 35.0_f32.to_radians())
        * Mat4::from_axis_angle(Vec3::new(1.0, 0.0, 1.0).normalize(), (-40.0_f32).to_radians());

    assert_mat4_close(vehicle_placement().matrix(), expected);
}

#[test]
fn test_composition_matches_pointwise_reference() {
    // Independent path: apply the steps to a point by hand with quaternions,
    // rightmost rotation first, then scale, then translate.
    let placement = vehicle_placement();
    let point = Vec3::new(0.3, -1.0, 2.0);

    let mut reference = point;
    for rotation in placement.rotations.iter().rev() {
        let q = Quat::from_axis_angle(rotation.axis.normalize(), rotation.degrees.to_radians());
        reference = q * reference;
    }
    reference *= placement.scale;
    reference += placement.translation;

    let transformed = placement.matrix().transform_point3(point);
    assert!(
        (transformed - reference).length() < 1e-4,
        "matrix path {transformed} vs pointwise path {reference}"
    );
}

#[test]
fn test_rotation_order_changes_result() {
    let yx = Placement::new(Vec3::ZERO)
        .rotated(270.0, Vec3::Y)
        .rotated(35.0, Vec3::X);
    let xy = Placement::new(Vec3::ZERO)
        .rotated(35.0, Vec3::X)
        .rotated(270.0, Vec3::Y);

    let p = Vec3::new(1.0, 2.0, 3.0);
    let a = yx.matrix().transform_point3(p);
    let b = xy.matrix().transform_point3(p);
    assert!(
        (a - b).length() > 1e-3,
        "rotation composition must be order-sensitive"
    );
}

#[test]
fn test_background_placement_translation_survives_composition() {
    let placement = Placement::new(Vec3::new(0.0, -2.0, -85.0))
        .with_uniform_scale(3.0)
        .rotated(270.0, Vec3::Y);

    // Rotation and scale act on the local origin, so the translation column
    // comes through untouched.
    let origin = placement.matrix().transform_point3(Vec3::ZERO);
    assert!((origin - Vec3::new(0.0, -2.0, -85.0)).length() < 1e-5);
}
