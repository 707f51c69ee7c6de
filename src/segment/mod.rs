//! Intensity clustering pipeline.
//!
//! ## Stages
//!
//! | Stage | Module | Produces |
//! |-------|--------|----------|
//! | Grayscale conversion | `grayscale` | intensity grid (H, W) |
//! | Histogram | `histogram` | 256 intensity counts |
//! | Centroid seeding | `centroids` | K distinct start values |
//! | Convergence loop | `kmeans` | label grid + final centroids |
//! | Palette | `palette` | K evenly spaced hues |
//! | Recoloring | `colorize` | RGB image (H, W, 3) |
//!
//! `pipeline` wires the stages together behind one entry point.
//!
//! ## Architecture
//!
//! - **Synchronous** - no stage blocks on I/O; only the recoloring stage
//!   runs pixel-parallel, it has no cross-pixel dependencies and
//!   observable results do not change
//! - **Deterministic** - the one randomized stage (centroid seeding)
//!   takes an explicit seed
//! - **Fail-fast** - invalid cluster counts and empty images are rejected
//!   before the loop starts; no partial computation

pub mod centroids;
pub mod colorize;
pub mod grayscale;
pub mod histogram;
pub mod kmeans;
pub mod palette;
pub mod pipeline;
mod rng;
