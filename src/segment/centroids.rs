//! Initial centroid selection.
//!
//! Both initializers draw intensities in proportion to how often they
//! occur in the image and keep drawing until K distinct values are
//! collected. The distinct-intensity precondition is checked up front;
//! without it the rejection loop could never terminate.

use ndarray::ArrayView2;

use super::histogram::{distinct_intensities, intensity_histogram, INTENSITY_LEVELS};
use super::rng::SegmentRng;
use crate::error::SegmentError;

/// Validate a requested cluster count against the intensities available.
fn check_cluster_count(k: usize, available: usize) -> Result<(), SegmentError> {
    if k == 0 {
        return Err(SegmentError::InvalidClusterCount { requested: k });
    }
    if k > available {
        return Err(SegmentError::InsufficientDistinctIntensities {
            requested: k,
            available,
        });
    }
    Ok(())
}

/// Pick K distinct initial centroids, weighted by intensity frequency.
///
/// Drawing a uniform index into the total pixel mass and locating it in
/// the cumulative histogram is equivalent to drawing from the multiset
/// of all pixel intensities.
///
/// # Arguments
/// * `histogram` - 256-entry intensity counts
/// * `k` - Number of clusters (1 to the number of distinct intensities)
/// * `seed` - Random seed for deterministic results
///
/// # Returns
/// K distinct intensity values; order defines cluster identity.
pub fn init_centroids_weighted(
    histogram: &[u32; INTENSITY_LEVELS],
    k: usize,
    seed: u64,
) -> Result<Vec<u8>, SegmentError> {
    check_cluster_count(k, distinct_intensities(histogram))?;

    let mut cumulative = [0u64; INTENSITY_LEVELS];
    let mut total = 0u64;
    for (intensity, &count) in histogram.iter().enumerate() {
        total += count as u64;
        cumulative[intensity] = total;
    }

    let mut rng = SegmentRng::new(seed);
    let mut centroids: Vec<u8> = Vec::with_capacity(k);
    while centroids.len() < k {
        let draw = rng.next_index(total as usize) as u64;
        let intensity = cumulative.partition_point(|&c| c <= draw) as u8;
        if !centroids.contains(&intensity) {
            centroids.push(intensity);
        }
    }
    Ok(centroids)
}

/// Pick K distinct initial centroids by sampling random pixel positions.
///
/// Alternative initializer with the same weighting as
/// [`init_centroids_weighted`]: a pixel position is uniform, so its
/// intensity arrives in proportion to its frequency.
pub fn init_centroids_sampled(
    gray: ArrayView2<u8>,
    k: usize,
    seed: u64,
) -> Result<Vec<u8>, SegmentError> {
    let histogram = intensity_histogram(gray);
    check_cluster_count(k, distinct_intensities(&histogram))?;

    let (height, width) = gray.dim();
    let mut rng = SegmentRng::new(seed);
    let mut centroids: Vec<u8> = Vec::with_capacity(k);
    while centroids.len() < k {
        let position = rng.next_index(height * width);
        let intensity = gray[[position / width, position % width]];
        if !centroids.contains(&intensity) {
            centroids.push(intensity);
        }
    }
    Ok(centroids)
}
