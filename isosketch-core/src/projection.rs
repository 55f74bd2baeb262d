/// Isometric projection: rotate a point, then drop its depth
use nalgebra::{Matrix3, Point2, Point3};

use crate::matrix::{from_column, multiply, to_column};
use crate::transform::{rotation_matrix, ViewAngles};

/// Apply a rotation matrix to a point
pub fn rotate_point(point: &Point3<f64>, rotation: &Matrix3<f64>) -> Point3<f64> {
    from_column(&multiply(rotation, &to_column(point)))
}

/// Project a 3D point onto the screen plane. The rotated z is discarded.
pub fn project(x: f64, y: f64, z: f64, xz_angle: f64, y_angle: f64) -> Point2<f64> {
    let rotated = rotate_point(&Point3::new(x, y, z), &rotation_matrix(xz_angle, y_angle));
    Point2::new(rotated.x, rotated.y)
}

/// [`project`] with both angles at zero
pub fn project_flat(x: f64, y: f64, z: f64) -> Point2<f64> {
    project(x, y, z, 0.0, 0.0)
}

/// A fixed viewing direction, with its rotation computed once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsometricView {
    angles: ViewAngles,
    rotation: Matrix3<f64>,
}

impl IsometricView {
    /// Looking straight down the z axis
    pub const FLAT: IsometricView = IsometricView {
        angles: ViewAngles { xz: 0.0, y: 0.0 },
        rotation: Matrix3::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0),
    };

    pub fn new(xz_angle: f64, y_angle: f64) -> Self {
        Self::from_angles(ViewAngles::new(xz_angle, y_angle))
    }

    pub fn from_angles(angles: ViewAngles) -> Self {
        Self {
            angles,
            rotation: rotation_matrix(angles.xz, angles.y),
        }
    }

    /// True isometric view: 45 degrees around the vertical axis, then tilted so the
    /// three axes foreshorten equally.
    pub fn classic() -> Self {
        Self::new(std::f64::consts::FRAC_PI_4, (1.0 / 2f64.sqrt()).atan())
    }

    pub fn angles(&self) -> ViewAngles {
        self.angles
    }

    pub fn rotation(&self) -> &Matrix3<f64> {
        &self.rotation
    }

    pub fn rotate(&self, point: &Point3<f64>) -> Point3<f64> {
        rotate_point(point, &self.rotation)
    }

    pub fn project(&self, point: &Point3<f64>) -> Point2<f64> {
        let rotated = self.rotate(point);
        Point2::new(rotated.x, rotated.y)
    }

    pub fn project_all(&self, points: &[Point3<f64>]) -> Vec<Point2<f64>> {
        points.iter().map(|p| self.project(p)).collect()
    }
}

impl Default for IsometricView {
    fn default() -> Self {
        Self::FLAT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::transpose;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_flat_projection_drops_depth() {
        for &(x, y, z) in &[(1.0, 2.0, 3.0), (-0.5, 0.25, -7.0), (0.0, 0.0, 0.0)] {
            let p = project(x, y, z, 0.0, 0.0);
            assert_eq!((p.x, p.y), (x, y));
            assert_eq!(project_flat(x, y, z), p);
        }
    }

    #[test]
    fn test_rotate_then_inverse() {
        let point = Point3::new(0.3, -1.2, 2.5);
        for &(xz, y) in &[(0.2, 0.9), (-1.3, 2.2), (3.0, -0.4)] {
            let r = rotation_matrix(xz, y);
            let back = rotate_point(&rotate_point(&point, &r), &transpose(&r));
            assert!((back - point).norm() < EPS);
        }
    }

    #[test]
    fn test_rotation_preserves_length() {
        let point = Point3::new(1.0, 2.0, -2.0);
        let rotated = rotate_point(&point, &rotation_matrix(0.8, -0.6));
        assert!((rotated.coords.norm() - 3.0).abs() < EPS);
    }

    #[test]
    fn test_view_matches_free_function() {
        let view = IsometricView::new(0.5, 0.25);
        let p = view.project(&Point3::new(1.0, -1.0, 0.5));
        let q = project(1.0, -1.0, 0.5, 0.5, 0.25);
        assert!((p - q).norm() < EPS);
        assert_eq!(view.angles(), ViewAngles::new(0.5, 0.25));
    }

    #[test]
    fn test_flat_constant_is_identity() {
        assert_eq!(IsometricView::FLAT, IsometricView::new(0.0, 0.0));
        assert_eq!(IsometricView::default(), IsometricView::FLAT);
    }

    #[test]
    fn test_classic_view_foreshortens_axes_equally() {
        let view = IsometricView::classic();
        let lengths: Vec<f64> = view
            .project_all(&[
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
            ])
            .iter()
            .map(|p| p.coords.norm())
            .collect();
        let expected = (2.0f64 / 3.0).sqrt();
        for length in lengths {
            assert!((length - expected).abs() < EPS);
        }
    }
}
