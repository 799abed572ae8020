//! Map a sample voxel index between two volumes and print it.
//!
//! Run with: cargo run --example map_voxel

use tracing_subscriber::EnvFilter;
use voxmap::{get_affine, map_voxel_index};

fn main() -> voxmap::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Volume A
    let affine_a = get_affine(
        &[0.0, 0.0, 0.0],
        &[1.0, 1.0, 5.0],
        &[1.0, 0.0, 5.0],
        &[0.0, 1.0, 0.0],
        None,
    )?;

    // Volume B
    let affine_b = get_affine(
        &[20.0, 10.0, 5.0],
        &[1.0, 1.0, 5.0],
        &[-1.0, 0.0, 0.0],
        &[0.0, 0.0, 1.0],
        None,
    )?;

    let voxel_index_a = [10.0, 2.0, 12.0];
    let voxel_index_b = map_voxel_index(&voxel_index_a, &affine_a, &affine_b)?;
    println!("{:?}", voxel_index_b);

    Ok(())
}
