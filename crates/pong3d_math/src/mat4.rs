//! 4x4 Matrix utilities
//!
//! Matrices are stored column-major (`m[column][row]`), which is also the
//! memory layout WGSL expects for `mat4x4<f32>`, so they can be copied into
//! uniform buffers as-is.

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a homogeneous point by a 4x4 matrix
///
/// result = M * [x, y, z, 1]
pub fn transform_point(m: Mat4, p: [f32; 3]) -> [f32; 4] {
    let mut out = [0.0f32; 4];
    for (row, value) in out.iter_mut().enumerate() {
        *value = m[0][row] * p[0] + m[1][row] * p[1] + m[2][row] * p[2] + m[3][row];
    }
    out
}

/// Translation matrix
pub fn translation(t: [f32; 3]) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = t[0];
    m[3][1] = t[1];
    m[3][2] = t[2];
    m
}

/// Right-handed perspective projection with a 0..1 depth range (wgpu clip space)
///
/// `fov_y` is in radians.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let nf = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * nf, -1.0],
        [0.0, 0.0, near * far * nf, 0.0],
    ]
}

/// Right-handed look-at view matrix
pub fn look_at(eye: [f32; 3], target: [f32; 3], up: [f32; 3]) -> Mat4 {
    let f = normalize([
        target[0] - eye[0],
        target[1] - eye[1],
        target[2] - eye[2],
    ]);
    let s = normalize(cross(f, up));
    let u = cross(s, f);

    [
        [s[0], u[0], -f[0], 0.0],
        [s[1], u[1], -f[1], 0.0],
        [s[2], u[2], -f[2], 0.0],
        [-dot(s, eye), -dot(u, eye), dot(f, eye), 1.0],
    ]
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = dot(v, v).sqrt();
    if len > 0.0 {
        [v[0] / len, v[1] / len, v[2] / len]
    } else {
        v
    }
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if !approx_eq(a[i][j], b[i][j]) {
                    return false;
                }
            }
        }
        true
    }

    /// Project a point and divide by w
    fn to_ndc(m: Mat4, p: [f32; 3]) -> [f32; 3] {
        let c = transform_point(m, p);
        [c[0] / c[3], c[1] / c[3], c[2] / c[3]]
    }

    #[test]
    fn test_identity_transform() {
        let p = transform_point(IDENTITY, [1.0, 2.0, 3.0]);
        assert_eq!(p, [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_translation() {
        let m = translation([-0.9, 0.35, 0.0]);
        let p = transform_point(m, [0.1, 1.0, 0.1]);
        assert!(approx_eq(p[0], -0.8));
        assert!(approx_eq(p[1], 1.35));
        assert!(approx_eq(p[2], 0.1));
        assert_eq!(p[3], 1.0);
    }

    #[test]
    fn test_mul_identity() {
        let a = translation([1.0, 2.0, 3.0]);
        assert!(mat_approx_eq(mul(IDENTITY, a), a));
        assert!(mat_approx_eq(mul(a, IDENTITY), a));
    }

    #[test]
    fn test_mul_composes_translations() {
        let a = translation([1.0, 0.0, 0.0]);
        let b = translation([0.0, 2.0, 0.0]);
        assert!(mat_approx_eq(mul(a, b), translation([1.0, 2.0, 0.0])));
    }

    #[test]
    fn test_mul_applies_right_operand_first() {
        // Scale then translate vs translate then scale
        let mut scale = IDENTITY;
        scale[0][0] = 2.0;
        let shift = translation([1.0, 0.0, 0.0]);

        let p = transform_point(mul(shift, scale), [1.0, 0.0, 0.0]);
        assert!(approx_eq(p[0], 3.0));

        let p = transform_point(mul(scale, shift), [1.0, 0.0, 0.0]);
        assert!(approx_eq(p[0], 4.0));
    }

    #[test]
    fn test_perspective_depth_range() {
        let proj = perspective(45f32.to_radians(), 1.0, 0.1, 10.0);

        let near = to_ndc(proj, [0.0, 0.0, -0.1]);
        let far = to_ndc(proj, [0.0, 0.0, -10.0]);
        assert!(approx_eq(near[2], 0.0), "near plane should map to 0, got {}", near[2]);
        assert!(approx_eq(far[2], 1.0), "far plane should map to 1, got {}", far[2]);
    }

    #[test]
    fn test_perspective_aspect() {
        let proj = perspective(45f32.to_radians(), 2.0, 0.1, 10.0);
        assert!(approx_eq(proj[0][0] * 2.0, proj[1][1]));
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = [0.0, 0.0, 3.0];
        let view = look_at(eye, [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);

        let p = transform_point(view, eye);
        assert!(approx_eq(p[0], 0.0) && approx_eq(p[1], 0.0) && approx_eq(p[2], 0.0));

        // Target ends up straight ahead (negative Z)
        let t = transform_point(view, [0.0, 0.0, 0.0]);
        assert!(approx_eq(t[2], -3.0));
    }

    #[test]
    fn test_look_at_keeps_axes() {
        let view = look_at([0.0, 0.0, 3.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let right = transform_point(view, [1.0, 0.0, 0.0]);
        let up = transform_point(view, [0.0, 1.0, 0.0]);
        assert!(approx_eq(right[0], 1.0));
        assert!(approx_eq(up[1], 1.0));
    }

    #[test]
    fn test_scene_origin_is_visible() {
        let view = look_at([0.0, 0.0, 3.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        let proj = perspective(45f32.to_radians(), 1.0, 0.1, 10.0);
        let ndc = to_ndc(mul(proj, view), [0.0, 0.0, 0.0]);

        assert!(approx_eq(ndc[0], 0.0));
        assert!(approx_eq(ndc[1], 0.0));
        assert!(ndc[2] > 0.0 && ndc[2] < 1.0);
    }
}
