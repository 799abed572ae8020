//! Affine construction from origin, spacing and axis directions.

use super::{vec3, Affine};
use crate::error::Result;

/// Builder for a volume affine.
///
/// Column `n` of the result is axis direction `n` scaled by `spacing[n]`;
/// column 3 is the origin. Directions are used as given: they need not be
/// unit length or mutually orthogonal.
///
/// # Example
///
/// ```
/// use voxmap::AffineBuilder;
///
/// let affine = AffineBuilder::new()
///     .origin(&[20.0, 10.0, 5.0])
///     .spacing(&[1.0, 1.0, 5.0])
///     .x_dir(&[-1.0, 0.0, 0.0])
///     .y_dir(&[0.0, 0.0, 1.0])
///     .build()
///     .unwrap();
/// assert_eq!(affine.origin(), [20.0, 10.0, 5.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AffineBuilder {
    origin: Vec<f64>,
    spacing: Vec<f64>,
    x_dir: Vec<f64>,
    y_dir: Vec<f64>,
    z_dir: Vec<f64>,
}

impl Default for AffineBuilder {
    fn default() -> Self {
        Self {
            origin: vec![0.0, 0.0, 0.0],
            spacing: vec![1.0, 1.0, 1.0],
            x_dir: vec![1.0, 0.0, 0.0],
            y_dir: vec![0.0, 1.0, 0.0],
            z_dir: vec![0.0, 0.0, 1.0],
        }
    }
}

impl AffineBuilder {
    /// Start from the identity: zero origin, unit spacing, standard basis.
    pub fn new() -> Self {
        Self::default()
    }

    /// World position of voxel `(0, 0, 0)`.
    pub fn origin(mut self, origin: &[f64]) -> Self {
        self.origin = origin.to_vec();
        self
    }

    /// Voxel size along each axis.
    pub fn spacing(mut self, spacing: &[f64]) -> Self {
        self.spacing = spacing.to_vec();
        self
    }

    /// Direction of the first axis.
    pub fn x_dir(mut self, x_dir: &[f64]) -> Self {
        self.x_dir = x_dir.to_vec();
        self
    }

    /// Direction of the second axis.
    pub fn y_dir(mut self, y_dir: &[f64]) -> Self {
        self.y_dir = y_dir.to_vec();
        self
    }

    /// Direction of the third axis. Defaults to `(0, 0, 1)`.
    pub fn z_dir(mut self, z_dir: &[f64]) -> Self {
        self.z_dir = z_dir.to_vec();
        self
    }

    /// Assemble the affine.
    ///
    /// Fails with [`crate::Error::InvalidDimensions`] if any vector does not
    /// have exactly three components, and with [`crate::Error::InvalidAffine`]
    /// if a resulting entry is NaN or infinite.
    pub fn build(&self) -> Result<Affine> {
        let origin = vec3("origin", &self.origin)?;
        let spacing = vec3("spacing", &self.spacing)?;
        let directions = [
            vec3("x_dir", &self.x_dir)?,
            vec3("y_dir", &self.y_dir)?,
            vec3("z_dir", &self.z_dir)?,
        ];

        let columns: [[f64; 3]; 3] =
            std::array::from_fn(|axis| directions[axis].map(|v| v * spacing[axis]));
        let affine = Affine::from_axes(columns, origin)?;

        tracing::debug!(?origin, ?spacing, ?directions, "built volume affine");
        Ok(affine)
    }
}

/// Build a volume affine; `z_dir` defaults to `(0, 0, 1)` when `None`.
pub fn get_affine(
    origin: &[f64],
    spacing: &[f64],
    x_dir: &[f64],
    y_dir: &[f64],
    z_dir: Option<&[f64]>,
) -> Result<Affine> {
    let mut builder = AffineBuilder::new()
        .origin(origin)
        .spacing(spacing)
        .x_dir(x_dir)
        .y_dir(y_dir);
    if let Some(z_dir) = z_dir {
        builder = builder.z_dir(z_dir);
    }
    builder.build()
}
