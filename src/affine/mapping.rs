//! Voxel-index mapping from one volume's grid to another's.

use super::{vec3, Affine};
use crate::error::Result;

/// Relative determinant below which inversion logs a warning.
pub const DEFAULT_NEAR_SINGULAR_TOLERANCE: f64 = 1e-12;

/// Maps voxel indices of a source volume into a target volume.
///
/// Each index `v` becomes `target · (source⁻¹ · (v, 1))` with the homogeneous
/// component dropped. The source inverse is computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelMapper {
    source_inverse: Affine,
    target: Affine,
    same_space: bool,
}

/// Configuration for [`VoxelMapper`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoxelMapperBuilder {
    near_singular_tolerance: f64,
}

impl Default for VoxelMapperBuilder {
    fn default() -> Self {
        Self {
            near_singular_tolerance: DEFAULT_NEAR_SINGULAR_TOLERANCE,
        }
    }
}

impl VoxelMapperBuilder {
    /// Builder with the default near-singular tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Warn when `|det| / (|c0| |c1| |c2|)` of the source affine falls below this.
    pub fn near_singular_tolerance(mut self, tolerance: f64) -> Self {
        self.near_singular_tolerance = tolerance;
        self
    }

    /// Invert `source` and build the mapper.
    ///
    /// Fails with [`crate::Error::SingularMatrix`] if `source` is not invertible.
    pub fn build(&self, source: &Affine, target: &Affine) -> Result<VoxelMapper> {
        let source_inverse = source.inverse()?;

        let relative_det = source.relative_determinant();
        if relative_det.abs() < self.near_singular_tolerance {
            tracing::warn!(
                relative_det,
                tolerance = self.near_singular_tolerance,
                "source affine is nearly singular; mapped indices may be inaccurate"
            );
        }

        Ok(VoxelMapper {
            source_inverse,
            target: *target,
            same_space: source == target,
        })
    }
}

impl VoxelMapper {
    /// Mapper with default configuration.
    pub fn new(source: &Affine, target: &Affine) -> Result<Self> {
        VoxelMapperBuilder::new().build(source, target)
    }

    /// Start configuring a mapper.
    pub fn builder() -> VoxelMapperBuilder {
        VoxelMapperBuilder::new()
    }

    /// Map a source voxel index into the target grid.
    pub fn map(&self, voxel_index: &[f64]) -> Result<[f64; 3]> {
        let index = vec3("voxel index", voxel_index)?;
        // target · source⁻¹ is exactly the identity here.
        if self.same_space {
            return Ok(index);
        }
        let world = self.source_inverse.apply(index);
        let mapped = self.target.apply(world);
        tracing::debug!(?index, ?mapped, "mapped voxel index");
        Ok(mapped)
    }
}

/// Map `voxel_index_a` from volume A's grid into volume B's grid.
///
/// `affine_a` must be invertible.
///
/// # Example
///
/// ```
/// use voxmap::{get_affine, map_voxel_index};
///
/// let a = get_affine(&[0.0; 3], &[1.0, 1.0, 5.0], &[1.0, 0.0, 5.0], &[0.0, 1.0, 0.0], None)?;
/// let b = get_affine(
///     &[20.0, 10.0, 5.0],
///     &[1.0, 1.0, 5.0],
///     &[-1.0, 0.0, 0.0],
///     &[0.0, 0.0, 1.0],
///     None,
/// )?;
/// let mapped = map_voxel_index(&[10.0, 2.0, 12.0], &a, &b)?;
/// assert!((mapped[2] + 31.0).abs() < 1e-9);
/// # Ok::<(), voxmap::Error>(())
/// ```
pub fn map_voxel_index(
    voxel_index_a: &[f64],
    affine_a: &Affine,
    affine_b: &Affine,
) -> Result<[f64; 3]> {
    VoxelMapper::new(affine_a, affine_b)?.map(voxel_index_a)
}
