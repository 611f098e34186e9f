
use vek::*;


/// Round each component to the nearest multiple of `grid`.
pub fn snap(v: Vec3<f32>, grid: f32) -> Vec3<f32> {
    v.map(|n| (n / grid).round() * grid)
}

/// Like `snap`, but in a lattice shifted by `offset`.
pub fn snap_offset(v: Vec3<f32>, offset: Vec3<f32>, grid: f32) -> Vec3<f32> {
    snap(v + offset, grid) - offset
}

/// Round a rotation matrix to the nearest axis-aligned rotation.
///
/// Orientations reachable by composing quarter turns have every matrix entry
/// near -1, 0, or 1, so entrywise rounding is the matrix form of snapping
/// Euler angles to multiples of 90 degrees.
pub fn snap_rotation(m: Mat3<f32>) -> Mat3<f32> {
    let [m00, m01, m02, m10, m11, m12, m20, m21, m22] =
        m.into_row_array().map(f32::round);
    Mat3::new(m00, m01, m02, m10, m11, m12, m20, m21, m22)
}


#[test]
fn test_snap_rounds_to_half_grid() {
    assert_eq!(
        snap(Vec3::new(0.49, -0.02, 1.51), 0.5),
        Vec3::new(0.5, 0.0, 1.5),
    );
    assert_eq!(
        snap(Vec3::new(-1.26, 0.74, 0.0), 0.5),
        Vec3::new(-1.5, 0.5, 0.0),
    );
}

#[test]
fn test_snap_idempotent() {
    let v = snap(Vec3::new(3.141, -2.718, 0.577), 0.5);
    assert_eq!(snap(v, 0.5), v);
}

#[test]
fn test_snap_offset_shifts_lattice() {
    let offset = Vec3::new(0.25, 0.0, 0.25);
    assert_eq!(
        snap_offset(Vec3::new(0.8, 0.1, -0.2), offset, 1.0),
        Vec3::new(0.75, 0.0, -0.25),
    );
    // zero offset degenerates to plain snap
    assert_eq!(
        snap_offset(Vec3::new(0.8, 0.1, -0.2), Vec3::zero(), 1.0),
        snap(Vec3::new(0.8, 0.1, -0.2), 1.0),
    );
}

#[test]
fn test_snap_rotation_removes_drift() {
    // accumulate a quarter turn out of many uneven increments
    let mut m = Mat3::identity();
    for _ in 0..9 {
        m = Mat3::rotation_3d(std::f32::consts::FRAC_PI_2 / 9.0, Vec3::unit_x()) * m;
    }
    let snapped = snap_rotation(m);
    // exact quarter turn about +x: y maps to z, z maps to -y
    let quarter_x = Mat3::new(
        1.0, 0.0, 0.0,
        0.0, 0.0, -1.0,
        0.0, 1.0, 0.0,
    );
    assert_eq!(snapped, quarter_x);
    assert_eq!(snap_rotation(snapped), snapped);
}
