//! The 4x4 affine value type shared by the builder and the mapper.

use std::ops::Mul;

use nalgebra::{Matrix3, Matrix4, Vector3, Vector4};
use ndarray::{Array2, ArrayView2};

use super::vec3;
use crate::error::{Error, Result};

const BOTTOM_ROW: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

/// Voxel-to-world affine of a volume.
///
/// Maps homogeneous voxel indices `(i, j, k, 1)` to homogeneous physical
/// coordinates. The bottom row is always exactly `[0, 0, 0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    inner: Matrix4<f64>,
}

impl Default for Affine {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine {
    /// The identity transform (unit spacing, no rotation, origin at zero).
    pub fn identity() -> Self {
        Self {
            inner: Matrix4::identity(),
        }
    }

    /// Build from row-major rows.
    ///
    /// Fails with [`Error::InvalidAffine`] if any entry is non-finite or the
    /// bottom row is not `[0, 0, 0, 1]`.
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Result<Self> {
        if rows.iter().flatten().any(|v| !v.is_finite()) {
            return Err(Error::InvalidAffine(
                "all entries must be finite".to_string(),
            ));
        }
        if rows[3] != BOTTOM_ROW {
            return Err(Error::InvalidAffine(format!(
                "bottom row must be [0, 0, 0, 1], got {:?}",
                rows[3]
            )));
        }
        Ok(Self {
            inner: Matrix4::from_fn(|r, c| rows[r][c]),
        })
    }

    /// Build from a dynamically shaped 2D array, which must be 4x4.
    pub fn from_array(array: ArrayView2<'_, f64>) -> Result<Self> {
        let (nrows, ncols) = array.dim();
        if (nrows, ncols) != (4, 4) {
            return Err(Error::InvalidDimensions(format!(
                "affine must be 4x4, got {}x{}",
                nrows, ncols
            )));
        }
        Self::from_rows(std::array::from_fn(|r| {
            std::array::from_fn(|c| array[[r, c]])
        }))
    }

    /// Build from NIfTI quaternion parameters.
    ///
    /// `quatern` holds `(b, c, d)`; `a` is recovered from the unit-norm
    /// constraint. `pixdim[0]` is qfac, `pixdim[1..4]` the voxel spacing.
    /// Non-finite parameters fail with [`Error::InvalidAffine`].
    #[allow(clippy::many_single_char_names)]
    pub fn from_qform(quatern: [f64; 3], qoffset: [f64; 3], pixdim: [f64; 4]) -> Result<Self> {
        let [b, c, d] = quatern;
        let a = (1.0 - b * b - c * c - d * d).max(0.0).sqrt();

        let qfac = if pixdim[0] < 0.0 { -1.0 } else { 1.0 };
        let [i, j, k] = [pixdim[1].abs(), pixdim[2], pixdim[3] * qfac];

        let linear = Matrix3::new(
            (a * a + b * b - c * c - d * d) * i,
            2.0 * (b * c - a * d) * j,
            2.0 * (b * d + a * c) * k,
            2.0 * (b * c + a * d) * i,
            (a * a - b * b + c * c - d * d) * j,
            2.0 * (c * d - a * b) * k,
            2.0 * (b * d - a * c) * i,
            2.0 * (c * d + a * b) * j,
            (a * a - b * b - c * c + d * d) * k,
        );
        Self::from_parts(&linear, &Vector3::from(qoffset)).checked_finite()
    }

    /// Assemble from the three scaled axis columns and the origin.
    pub(crate) fn from_axes(columns: [[f64; 3]; 3], origin: [f64; 3]) -> Result<Self> {
        let linear = Matrix3::from_fn(|r, c| columns[c][r]);
        Self::from_parts(&linear, &Vector3::from(origin)).checked_finite()
    }

    fn checked_finite(self) -> Result<Self> {
        if self.inner.iter().all(|v| v.is_finite()) {
            Ok(self)
        } else {
            Err(Error::InvalidAffine(format!(
                "all entries must be finite, got {:?}",
                self.rows()
            )))
        }
    }

    fn from_parts(linear: &Matrix3<f64>, translation: &Vector3<f64>) -> Self {
        let mut inner = Matrix4::identity();
        inner.fixed_view_mut::<3, 3>(0, 0).copy_from(linear);
        inner.fixed_view_mut::<3, 1>(0, 3).copy_from(translation);
        Self { inner }
    }

    /// Row-major copy of the matrix.
    pub fn rows(&self) -> [[f64; 4]; 4] {
        std::array::from_fn(|r| std::array::from_fn(|c| self.inner[(r, c)]))
    }

    /// Copy of the matrix as an owned `ndarray` array.
    pub fn to_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((4, 4), |(r, c)| self.inner[(r, c)])
    }

    /// The underlying `nalgebra` matrix.
    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.inner
    }

    fn linear(&self) -> Matrix3<f64> {
        self.inner.fixed_view::<3, 3>(0, 0).into_owned()
    }

    fn translation(&self) -> Vector3<f64> {
        self.inner.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// World position of voxel `(0, 0, 0)`.
    pub fn origin(&self) -> [f64; 3] {
        self.translation().into()
    }

    /// Voxel spacing, taken as the Euclidean norm of each axis column.
    pub fn spacing(&self) -> [f64; 3] {
        std::array::from_fn(|c| self.inner.fixed_view::<3, 1>(0, c).norm())
    }

    /// Determinant of the 3x3 linear part.
    ///
    /// Equal to the determinant of the full matrix since the bottom row is fixed.
    pub fn determinant(&self) -> f64 {
        self.linear().determinant()
    }

    /// Determinant normalised by the product of the axis lengths.
    ///
    /// In `[-1, 1]`; magnitude 1 for orthogonal axes, near 0 for nearly
    /// dependent ones. Columns are normalised before the determinant is
    /// taken, so very small or very large spacing does not under/overflow.
    pub fn relative_determinant(&self) -> f64 {
        let spacing = self.spacing();
        if spacing.iter().any(|&s| s == 0.0) {
            return 0.0;
        }
        let unit = Matrix3::from_fn(|r, c| self.inner[(r, c)] / spacing[c]);
        unit.determinant()
    }

    /// Inverse transform (world to voxel).
    ///
    /// The linear part is inverted by LU decomposition with partial pivoting
    /// and the translation becomes `-L⁻¹ t`, so the result keeps an exact
    /// `[0, 0, 0, 1]` bottom row. Fails with [`Error::SingularMatrix`] when a
    /// pivot is zero.
    pub fn inverse(&self) -> Result<Self> {
        let linear_inv = self
            .linear()
            .lu()
            .try_inverse()
            .ok_or_else(|| Error::SingularMatrix {
                determinant: self.determinant(),
            })?;
        let translation = -(linear_inv * self.translation());
        Ok(Self::from_parts(&linear_inv, &translation))
    }

    /// `self · other`: apply `other` first, then `self`.
    pub fn compose(&self, other: &Affine) -> Self {
        Self {
            inner: self.inner * other.inner,
        }
    }

    /// Map a voxel index to world coordinates.
    pub fn voxel_to_world(&self, voxel_index: &[f64]) -> Result<[f64; 3]> {
        Ok(self.apply(vec3("voxel index", voxel_index)?))
    }

    /// Multiply the homogeneous point `(p, 1)` and drop the last component.
    pub(crate) fn apply(&self, point: [f64; 3]) -> [f64; 3] {
        let out = self.inner * Vector4::new(point[0], point[1], point[2], 1.0);
        [out.x, out.y, out.z]
    }
}

impl Mul for Affine {
    type Output = Affine;

    fn mul(self, rhs: Affine) -> Affine {
        self.compose(&rhs)
    }
}

impl Mul<&Affine> for &Affine {
    type Output = Affine;

    fn mul(self, rhs: &Affine) -> Affine {
        self.compose(rhs)
    }
}
