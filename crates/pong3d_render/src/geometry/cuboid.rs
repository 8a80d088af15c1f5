//! Axis-aligned cuboid geometry
//!
//! A cuboid has 8 corners and 6 faces; each face is two triangles, so the
//! unindexed triangle list has 36 vertices. Faces are emitted in the order
//! bottom, top, front, back, left, right and wound counter-clockwise when
//! seen from outside.

use crate::pipeline::ColorVertex;

/// Vertices in one cuboid triangle list
pub const CUBOID_VERTEX_COUNT: usize = 6 * 2 * 3;

pub const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Corner indices of each face, counter-clockwise from outside
///
/// Corner `i` sits at (±x, ±y, ±z) with bit 0 = x, bit 1 = y, bit 2 = z.
const FACES: [[usize; 4]; 6] = [
    [0, 1, 5, 4], // bottom (-Y)
    [2, 6, 7, 3], // top (+Y)
    [4, 5, 7, 6], // front (+Z)
    [0, 2, 3, 1], // back (-Z)
    [0, 4, 6, 2], // left (-X)
    [1, 3, 7, 5], // right (+X)
];

/// One RGBA color per face
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceColors {
    pub bottom: [f32; 4],
    pub top: [f32; 4],
    pub front: [f32; 4],
    pub back: [f32; 4],
    pub left: [f32; 4],
    pub right: [f32; 4],
}

impl FaceColors {
    /// Same color on every face
    pub const fn uniform(color: [f32; 4]) -> Self {
        Self {
            bottom: color,
            top: color,
            front: color,
            back: color,
            left: color,
            right: color,
        }
    }

    /// Override the +Z face
    pub const fn with_front(mut self, color: [f32; 4]) -> Self {
        self.front = color;
        self
    }

    fn in_face_order(&self) -> [[f32; 4]; 6] {
        [self.bottom, self.top, self.front, self.back, self.left, self.right]
    }
}

/// Build the triangle list for a cuboid centred on the origin
pub fn cuboid(half_extents: [f32; 3], colors: FaceColors) -> Vec<ColorVertex> {
    let [hx, hy, hz] = half_extents;
    let corner = |i: usize| -> [f32; 3] {
        [
            if i & 1 != 0 { hx } else { -hx },
            if i & 2 != 0 { hy } else { -hy },
            if i & 4 != 0 { hz } else { -hz },
        ]
    };

    let mut vertices = Vec::with_capacity(CUBOID_VERTEX_COUNT);
    for (face, color) in FACES.iter().zip(colors.in_face_order()) {
        let [a, b, c, d] = *face;
        for i in [a, b, c, a, c, d] {
            vertices.push(ColorVertex::new(corner(i), color));
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
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

    #[test]
    fn test_vertex_count() {
        let verts = cuboid([0.1, 1.0, 0.1], FaceColors::uniform(GREEN));
        assert_eq!(verts.len(), CUBOID_VERTEX_COUNT);
        assert_eq!(CUBOID_VERTEX_COUNT, 36);
    }

    #[test]
    fn test_vertices_on_bounds() {
        let verts = cuboid([0.1, 1.0, 0.1], FaceColors::uniform(GREEN));
        for v in &verts {
            assert_eq!(v.position[0].abs(), 0.1);
            assert_eq!(v.position[1].abs(), 1.0);
            assert_eq!(v.position[2].abs(), 0.1);
        }
    }

    #[test]
    fn test_triangles_face_outward() {
        let verts = cuboid([0.5, 0.25, 1.0], FaceColors::uniform(WHITE));
        for tri in verts.chunks(3) {
            let (a, b, c) = (tri[0].position, tri[1].position, tri[2].position);
            let normal = cross(sub(b, a), sub(c, a));
            let centroid = [
                (a[0] + b[0] + c[0]) / 3.0,
                (a[1] + b[1] + c[1]) / 3.0,
                (a[2] + b[2] + c[2]) / 3.0,
            ];
            assert!(dot(normal, centroid) > 0.0, "triangle {:?} faces inward", tri);
        }
    }

    #[test]
    fn test_front_face_color() {
        let colors = FaceColors::uniform(GREEN).with_front(BLUE);
        let verts = cuboid([0.1, 1.0, 0.1], colors);

        // Face order: bottom, top, front, ...
        for (i, v) in verts.iter().enumerate() {
            let expected = if (12..18).contains(&i) { BLUE } else { GREEN };
            assert_eq!(v.color, expected, "vertex {}", i);
        }
        // The front face lies on +Z
        assert!(verts[12..18].iter().all(|v| v.position[2] > 0.0));
    }

    #[test]
    fn test_each_face_covers_its_side() {
        let verts = cuboid([1.0, 1.0, 1.0], FaceColors::uniform(GREEN));
        let expected_axis = [(1, -1.0), (1, 1.0), (2, 1.0), (2, -1.0), (0, -1.0), (0, 1.0)];
        for (face, (axis, value)) in verts.chunks(6).zip(expected_axis) {
            assert!(face.iter().all(|v| v.position[axis] == value));
        }
    }
}
