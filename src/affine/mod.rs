//! Volume affines and voxel-index mapping between volumes.
//!
//! A volume's affine maps homogeneous voxel indices `(i, j, k, 1)` into a
//! shared physical space. [`AffineBuilder`] assembles one from an origin,
//! per-axis spacing and axis directions; [`VoxelMapper`] carries an index
//! from one volume's grid into another's.

pub mod builder;
pub mod mapping;
pub mod matrix;

pub use builder::{get_affine, AffineBuilder};
pub use mapping::{map_voxel_index, VoxelMapper, VoxelMapperBuilder};
pub use matrix::Affine;

use crate::error::{Error, Result};

/// Check that `values` holds exactly three components.
pub(crate) fn vec3(name: &str, values: &[f64]) -> Result<[f64; 3]> {
    <[f64; 3]>::try_from(values).map_err(|_| Error::vector_length(name, 3, values.len()))
}
