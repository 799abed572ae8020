//! # voxmap
//!
//! Map voxel indices between 3D image volumes through their affine
//! transforms.
//!
//! Every volume carries a 4x4 affine taking homogeneous voxel indices
//! `(i, j, k, 1)` into a shared physical space. Given the affines of two
//! volumes, an index in the first grid can be carried into the second by
//! inverting the first affine and applying the second.
//!
//! ## Quick start
//!
//! ```
//! use voxmap::{get_affine, map_voxel_index};
//!
//! let a = get_affine(&[0.0; 3], &[1.0, 1.0, 5.0], &[1.0, 0.0, 5.0], &[0.0, 1.0, 0.0], None)?;
//! let b = get_affine(
//!     &[20.0, 10.0, 5.0],
//!     &[1.0, 1.0, 5.0],
//!     &[-1.0, 0.0, 0.0],
//!     &[0.0, 0.0, 1.0],
//!     None,
//! )?;
//!
//! // Same affine on both sides is the identity.
//! assert_eq!(map_voxel_index(&[10.0, 2.0, 12.0], &a, &a)?, [10.0, 2.0, 12.0]);
//!
//! let in_b = map_voxel_index(&[10.0, 2.0, 12.0], &a, &b)?;
//! # assert!((in_b[0] - 10.0).abs() < 1e-9);
//! # Ok::<(), voxmap::Error>(())
//! ```
//!
//! ## Logging
//!
//! Events are emitted through `tracing`; install a subscriber to see them.
//! Inverting a nearly singular affine emits a `warn` event.

pub mod affine;
pub mod error;

pub use affine::{
    get_affine, map_voxel_index, Affine, AffineBuilder, VoxelMapper, VoxelMapperBuilder,
};
pub use error::{Error, Result};
