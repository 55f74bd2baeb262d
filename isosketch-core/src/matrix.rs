/// Small dense matrix kernel
///
/// Matrices are row-major: the first index is the row. The projection path works on
/// fixed-size `SMatrix` values so shape errors are caught at compile time; `DMatrix`
/// variants check shapes at runtime.
use nalgebra::{DMatrix, Matrix3, Matrix3x1, Point3, SMatrix};

use crate::error::{IsoError, Result};

/// Matrix product of fixed-size operands. The shared dimension `K` makes a mismatch
/// unrepresentable.
pub fn multiply<const R: usize, const K: usize, const C: usize>(
    a: &SMatrix<f64, R, K>,
    b: &SMatrix<f64, K, C>,
) -> SMatrix<f64, R, C> {
    let mut result = SMatrix::<f64, R, C>::zeros();
    for i in 0..R {
        for j in 0..K {
            for k in 0..C {
                result[(i, k)] += a[(i, j)] * b[(j, k)];
            }
        }
    }
    result
}

/// Matrix product of runtime-shaped operands.
pub fn multiply_dyn(a: &DMatrix<f64>, b: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    if a.ncols() != b.nrows() {
        return Err(IsoError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let mut result = zeros(b.ncols(), a.nrows());
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            for k in 0..b.ncols() {
                result[(i, k)] += a[(i, j)] * b[(j, k)];
            }
        }
    }
    Ok(result)
}

/// The `n`x`n` identity matrix
pub fn identity(n: usize) -> DMatrix<f64> {
    DMatrix::from_fn(n, n, |row, col| if row == col { 1.0 } else { 0.0 })
}

/// A zero matrix `width` columns wide and `height` rows tall.
pub fn zeros(width: usize, height: usize) -> DMatrix<f64> {
    DMatrix::zeros(height, width)
}

pub fn identity3() -> Matrix3<f64> {
    Matrix3::identity()
}

pub fn transpose<const R: usize, const C: usize>(m: &SMatrix<f64, R, C>) -> SMatrix<f64, C, R> {
    m.transpose()
}

/// Lay a point out as a 3x1 column vector
pub fn to_column(point: &Point3<f64>) -> Matrix3x1<f64> {
    Matrix3x1::new(point.x, point.y, point.z)
}

pub fn from_column(column: &Matrix3x1<f64>) -> Point3<f64> {
    Point3::new(column[(0, 0)], column[(1, 0)], column[(2, 0)])
}
