//! Full segmentation pipeline.
//!
//! Wires the stages together: grayscale conversion, histogram, centroid
//! seeding, the convergence loop, and recoloring. Each buffer is owned by
//! the stage producing it and handed on read-only.

use ndarray::{Array2, Array3, ArrayView3};

use super::centroids::{init_centroids_sampled, init_centroids_weighted};
use super::colorize::colorize_labels;
use super::grayscale::grayscale_average_u8;
use super::histogram::intensity_histogram;
use super::kmeans::run_lloyd;
use super::palette::{generate_palette, Rgb};
use crate::error::SegmentError;

/// Cluster count used when the caller does not supply one.
pub const DEFAULT_CLUSTER_COUNT: usize = 3;

/// Safety bound on assign/update passes. 1-D k-means over 256 intensity
/// bins settles in far fewer passes; the bound only guards oscillation.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// How initial centroids are drawn. Both strategies weight intensities by
/// frequency and yield K distinct values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitStrategy {
    /// Draw from the cumulative intensity histogram.
    #[default]
    HistogramWeighted,
    /// Draw random pixel positions and keep their intensities.
    PixelSample,
}

/// Configuration surface of the pipeline.
#[derive(Clone, Copy, Debug)]
pub struct SegmentOptions {
    /// Number of intensity clusters (K).
    pub cluster_count: usize,
    /// Seed for centroid initialization; fixed seed, fixed output.
    pub seed: u64,
    /// Iteration safety bound.
    pub max_iterations: usize,
    /// Centroid seeding strategy.
    pub init: InitStrategy,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        SegmentOptions {
            cluster_count: DEFAULT_CLUSTER_COUNT,
            seed: 0,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            init: InitStrategy::HistogramWeighted,
        }
    }
}

/// Everything a segmentation run produces.
#[derive(Clone, Debug)]
pub struct Segmentation {
    /// Recolored RGB image, shape (height, width, 3).
    pub image: Array3<u8>,
    /// Cluster index per pixel.
    pub labels: Array2<u8>,
    /// Final centroid intensity per cluster index.
    pub centroids: Vec<u8>,
    /// Color per cluster index.
    pub palette: Vec<Rgb>,
    /// Assign/update passes executed.
    pub iterations: usize,
    /// False when the iteration bound cut the loop short.
    pub converged: bool,
}

/// Segment an image into K intensity clusters and recolor it.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `options` - Cluster count, seed, iteration bound, init strategy
///
/// # Errors
/// [`SegmentError::EmptyImage`] for zero-sized input,
/// [`SegmentError::InvalidClusterCount`] for K = 0, and
/// [`SegmentError::InsufficientDistinctIntensities`] when the image holds
/// fewer distinct intensities than K. All are raised before any clustering
/// work starts.
pub fn segment_u8(
    input: ArrayView3<u8>,
    options: &SegmentOptions,
) -> Result<Segmentation, SegmentError> {
    let (height, width, _) = input.dim();
    if height == 0 || width == 0 {
        return Err(SegmentError::EmptyImage { width, height });
    }

    let gray = grayscale_average_u8(input);
    let centroids = match options.init {
        InitStrategy::HistogramWeighted => {
            let histogram = intensity_histogram(gray.view());
            init_centroids_weighted(&histogram, options.cluster_count, options.seed)?
        }
        InitStrategy::PixelSample => {
            init_centroids_sampled(gray.view(), options.cluster_count, options.seed)?
        }
    };

    let outcome = run_lloyd(gray.view(), centroids, options.max_iterations);
    let palette = generate_palette(outcome.centroids.len());
    let image = colorize_labels(outcome.labels.view(), &palette);

    Ok(Segmentation {
        image,
        labels: outcome.labels,
        centroids: outcome.centroids,
        palette,
        iterations: outcome.iterations,
        converged: outcome.converged,
    })
}
