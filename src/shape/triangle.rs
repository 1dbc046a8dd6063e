//! Definition of the triangle shape.

use crate::math::{Vector2, DEFAULT_EPSILON};
use crate::query::sat;
use crate::shape::AxisAlignedLine2;
use crate::utils;

/// Error indicating that a set of vertices does not form a usable triangle.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum TriangleError {
    /// A triangle needs exactly three vertices.
    #[error("expected exactly 3 vertices, got {0}")]
    InvalidVertexCount(usize),
    /// Two of the vertices are approximately the same point.
    #[error("at least two vertices coincide: {0:?} and {1:?}")]
    DuplicateVertices(Vector2, Vector2),
    /// The three vertices lie on a single line.
    #[error("vertices {0:?}, {1:?}, {2:?} are collinear and do not form a triangle")]
    CollinearVertices(Vector2, Vector2, Vector2),
}

/// A convex shape with exactly three vertices.
///
/// Triangles are position-independent: every query takes the world-space
/// origin of the triangle as a separate argument, so one validated instance
/// can be tested against many placements without cloning.
///
/// Construction validates the vertices and precomputes the unit edge
/// normals, which are the triangle's candidate separating axes for every
/// subsequent SAT test. The value is immutable afterwards.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct Triangle2 {
    vertices: [Vector2; 3],
    normals: [Vector2; 3],
}

impl Triangle2 {
    /// Creates a triangle from the given vertices.
    ///
    /// Fails if any two vertices approximately coincide (within
    /// [`DEFAULT_EPSILON`] per component) or if the three vertices are
    /// collinear.
    pub fn new(vertices: [Vector2; 3]) -> Result<Triangle2, TriangleError> {
        let [a, b, c] = vertices;

        if abs_diff_eq!(a, b) {
            return Err(TriangleError::DuplicateVertices(a, b));
        }
        if abs_diff_eq!(a, c) {
            return Err(TriangleError::DuplicateVertices(a, c));
        }
        if abs_diff_eq!(b, c) {
            return Err(TriangleError::DuplicateVertices(b, c));
        }

        if utils::is_collinear(a, b, c, DEFAULT_EPSILON) {
            return Err(TriangleError::CollinearVertices(a, b, c));
        }

        // The duplicate-vertex check bounds every edge away from zero
        // length, so the unguarded normalization cannot see a degenerate
        // input here.
        let normals = [
            (b - a).perp().normalize(),
            (c - b).perp().normalize(),
            (a - c).perp().normalize(),
        ];

        Ok(Triangle2 { vertices, normals })
    }

    /// Creates a triangle from a slice of vertices, which must have length 3.
    pub fn from_slice(vertices: &[Vector2]) -> Result<Triangle2, TriangleError> {
        match *vertices {
            [a, b, c] => Triangle2::new([a, b, c]),
            _ => Err(TriangleError::InvalidVertexCount(vertices.len())),
        }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> &[Vector2; 3] {
        &self.vertices
    }

    /// The three unit edge normals of this triangle, one perpendicular to
    /// each edge.
    #[inline]
    pub fn normals(&self) -> &[Vector2; 3] {
        &self.normals
    }

    /// Projects this triangle, placed at `pos`, onto `axis`.
    #[inline]
    pub fn project_along_axis(&self, pos: Vector2, axis: Vector2) -> AxisAlignedLine2 {
        sat::project_points_along_axis(axis, pos, &self.vertices)
    }
}

#[cfg(test)]
mod test {
    use super::{Triangle2, TriangleError};
    use crate::math::Vector2;

    #[test]
    fn test_rejects_duplicate_vertices() {
        let res = Triangle2::new([
            Vector2::new(0.0, 0.0),
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
        ]);

        assert_eq!(
            res,
            Err(TriangleError::DuplicateVertices(
                Vector2::new(0.0, 0.0),
                Vector2::new(0.0, 0.0)
            ))
        );
    }

    #[test]
    fn test_rejects_collinear_vertices() {
        let res = Triangle2::new([
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(2.0, 2.0),
        ]);

        assert!(matches!(res, Err(TriangleError::CollinearVertices(..))));
    }

    #[test]
    fn test_rejects_wrong_vertex_count() {
        let two = [Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)];
        assert_eq!(
            Triangle2::from_slice(&two),
            Err(TriangleError::InvalidVertexCount(2))
        );
    }

    #[test]
    fn test_normals_are_unit_and_perpendicular() {
        let tri = Triangle2::new([
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
        ])
        .unwrap();

        let [a, b, c] = *tri.vertices();
        let edges = [b - a, c - b, a - c];

        for (normal, edge) in tri.normals().iter().zip(edges.iter()) {
            assert!(abs_diff_eq!(normal.magnitude(), 1.0, epsilon = 1.0e-6));
            assert!(abs_diff_eq!(normal.dot(edge), 0.0, epsilon = 1.0e-6));
        }
    }

    #[test]
    fn test_project_along_axis() {
        let tri = Triangle2::new([
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(0.0, 4.0),
        ])
        .unwrap();

        let proj = tri.project_along_axis(Vector2::new(2.0, 0.0), Vector2::UNIT_X);
        assert_eq!(proj.axis, Vector2::UNIT_X);
        assert_eq!(proj.min, 2.0);
        assert_eq!(proj.max, 6.0);
    }
}
