/// Elementary rotations and the mutable view-angle state
use nalgebra::Matrix3;

use crate::matrix::multiply;

/// The two viewing angles of an isometric projection (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewAngles {
    /// Rotation mixing the x and z axes
    pub xz: f64,
    /// Rotation mixing the y and z axes
    pub y: f64,
}

impl ViewAngles {
    pub fn new(xz: f64, y: f64) -> Self {
        Self { xz, y }
    }

    pub fn zero() -> Self {
        Self { xz: 0.0, y: 0.0 }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dxz: f64, dy: f64) {
        self.xz += dxz;
        self.y += dy;
    }
}

impl Default for ViewAngles {
    fn default() -> Self {
        Self::zero()
    }
}

/// Rotation about the vertical axis, mixing x and z. y is left fixed.
pub fn xz_rotation(angle: f64) -> Matrix3<f64> {
    let (sin, cos) = angle.sin_cos();
    Matrix3::new(
        cos, 0.0, -sin, //
        0.0, 1.0, 0.0, //
        sin, 0.0, cos,
    )
}

/// Rotation in the plane orthogonal to x, mixing y and z.
pub fn y_rotation(angle: f64) -> Matrix3<f64> {
    let (sin, cos) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0, //
        0.0, cos, sin, //
        0.0, -sin, cos,
    )
}

/// Combined rotation: the xz rotation first, then the y rotation.
///
/// Rotations don't commute, so swapping the two factors tilts the view differently.
pub fn rotation_matrix(xz_angle: f64, y_angle: f64) -> Matrix3<f64> {
    multiply(&y_rotation(y_angle), &xz_rotation(xz_angle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{identity3, transpose};
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_view_angles() {
        let mut angles = ViewAngles::zero();
        assert_eq!(angles, ViewAngles::default());

        angles.rotate(0.1, 0.2);
        angles.rotate(0.1, -0.05);
        assert!((angles.xz - 0.2).abs() < EPS);
        assert!((angles.y - 0.15).abs() < EPS);
    }

    #[test]
    fn test_identity_rotation() {
        assert_eq!(rotation_matrix(0.0, 0.0), identity3());
    }

    #[test]
    fn test_rotation_is_orthogonal() {
        for i in -8..=8 {
            for j in -8..=8 {
                let r = rotation_matrix(i as f64 * 0.4, j as f64 * 0.35);
                let product = multiply(&r, &transpose(&r));
                assert!(
                    (product - identity3()).norm() < EPS,
                    "not orthogonal at ({i}, {j})"
                );
            }
        }
    }

    #[test]
    fn test_quarter_turn_about_vertical() {
        let r = xz_rotation(FRAC_PI_2);
        // x axis goes to +z, z axis goes to -x
        assert!((r[(2, 0)] - 1.0).abs() < EPS);
        assert!((r[(0, 2)] + 1.0).abs() < EPS);
        assert_eq!(r[(1, 1)], 1.0);
    }

    #[test]
    fn test_composition_order_matters() {
        let (a, b) = (0.7, 1.1);
        let applied = rotation_matrix(a, b);
        let swapped = multiply(&xz_rotation(a), &y_rotation(b));
        assert!((applied - swapped).norm() > 0.1);

        let half_turn = rotation_matrix(PI, 0.0);
        assert!((half_turn[(0, 0)] + 1.0).abs() < EPS);
    }
}
