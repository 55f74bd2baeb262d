/// Geometry primitives for the sketches
use nalgebra::Point3;

/// A line segment between two points
pub type Edge = (Point3<f64>, Point3<f64>);

/// The 8 corners of an axis-aligned cube centered on the origin
pub fn cube_vertices(half: f64) -> Vec<Point3<f64>> {
    let mut vertices = Vec::with_capacity(8);
    for x in [-half, half] {
        for y in [-half, half] {
            for z in [-half, half] {
                vertices.push(Point3::new(x, y, z));
            }
        }
    }
    vertices
}

/// The 12 edges of a cube: every pair of corners differing in exactly one coordinate.
pub fn cube_edges(half: f64) -> Vec<Edge> {
    let vertices = cube_vertices(half);
    let side = 2.0 * half;

    let mut edges = Vec::with_capacity(12);
    for (i, p1) in vertices.iter().enumerate() {
        for p2 in &vertices[i + 1..] {
            let diff = (p1.x - p2.x).abs() + (p1.y - p2.y).abs() + (p1.z - p2.z).abs();
            if (diff - side).abs() < 1e-12 {
                edges.push((*p1, *p2));
            }
        }
    }
    edges
}

/// Which side of a box a face belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    /// The face at +x
    Right,
    /// The face at +z
    Front,
    Top,
}

/// A flat four-cornered face, corners in winding order
#[derive(Debug, Clone, PartialEq)]
pub struct Quad {
    pub kind: FaceKind,
    pub corners: [Point3<f64>; 4],
}

/// A square slab standing on the xz plane. "Up" is towards -y, matching canvas
/// coordinates where y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slab {
    pub half_width: f64,
    /// y of the bottom face
    pub base: f64,
    pub height: f64,
}

impl Slab {
    pub fn new(half_width: f64, base: f64, height: f64) -> Self {
        Self {
            half_width,
            base,
            height,
        }
    }

    pub fn top(&self) -> f64 {
        self.base - self.height
    }

    /// The faces seen from an isometric view, in back-to-front drawing order.
    pub fn visible_faces(&self) -> [Quad; 3] {
        let h = self.half_width;
        let (bottom, top) = (self.base, self.top());

        [
            Quad {
                kind: FaceKind::Right,
                corners: [
                    Point3::new(h, bottom, -h),
                    Point3::new(h, bottom, h),
                    Point3::new(h, top, h),
                    Point3::new(h, top, -h),
                ],
            },
            Quad {
                kind: FaceKind::Front,
                corners: [
                    Point3::new(-h, bottom, h),
                    Point3::new(h, bottom, h),
                    Point3::new(h, top, h),
                    Point3::new(-h, top, h),
                ],
            },
            Quad {
                kind: FaceKind::Top,
                corners: [
                    Point3::new(-h, top, -h),
                    Point3::new(h, top, -h),
                    Point3::new(h, top, h),
                    Point3::new(-h, top, h),
                ],
            },
        ]
    }
}
