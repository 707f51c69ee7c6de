//! Iterative k-means over the intensity grid.
//!
//! Each pass labels every pixel with its nearest centroid, then recomputes
//! each centroid as the integer mean of its members. The loop stops when a
//! pass changes no label. Centroid order is stable across passes: index i
//! names the same cluster from start to finish.

use ndarray::{Array2, ArrayView2};
use tracing::warn;

use super::centroids::init_centroids_weighted;
use super::histogram::intensity_histogram;
use crate::error::SegmentError;

/// Result of a clustering run.
#[derive(Clone, Debug)]
pub struct ClusterOutcome {
    /// Cluster index per pixel, parallel to the intensity grid.
    pub labels: Array2<u8>,
    /// Final centroid intensity per cluster index.
    pub centroids: Vec<u8>,
    /// Assign/update passes executed.
    pub iterations: usize,
    /// False when the iteration bound stopped a still-moving labeling.
    pub converged: bool,
}

/// Index of the centroid nearest to `intensity`.
///
/// Ties keep the lowest index: only a strictly smaller distance replaces
/// the current candidate.
fn nearest_centroid(intensity: u8, centroids: &[u8]) -> u8 {
    let mut nearest = 0usize;
    let mut min_distance = (intensity as i32 - centroids[0] as i32).abs();

    for (index, &centroid) in centroids.iter().enumerate().skip(1) {
        let distance = (intensity as i32 - centroid as i32).abs();
        if distance < min_distance {
            min_distance = distance;
            nearest = index;
        }
    }
    nearest as u8
}

/// Label every pixel with its nearest centroid.
///
/// Centroid values are read-only for the duration of the pass.
///
/// # Arguments
/// * `gray` - Intensity grid
/// * `centroids` - Current centroid set (non-empty)
/// * `labels` - Label grid to mutate, parallel to `gray`
///
/// # Returns
/// True if any pixel's label differs from its previous value.
pub fn assign_clusters(
    gray: ArrayView2<u8>,
    centroids: &[u8],
    labels: &mut Array2<u8>,
) -> bool {
    let (height, width) = gray.dim();
    let mut changed = false;

    for y in 0..height {
        for x in 0..width {
            let nearest = nearest_centroid(gray[[y, x]], centroids);
            if labels[[y, x]] != nearest {
                labels[[y, x]] = nearest;
                changed = true;
            }
        }
    }
    changed
}

/// Recompute each centroid as the mean intensity of its members.
///
/// Integer truncation, matching the rest of the pipeline. A cluster with
/// no members keeps its previous centroid value.
pub fn update_centroids(gray: ArrayView2<u8>, labels: ArrayView2<u8>, centroids: &mut [u8]) {
    let (height, width) = gray.dim();
    let mut sums = vec![0u64; centroids.len()];
    let mut counts = vec![0u64; centroids.len()];

    for y in 0..height {
        for x in 0..width {
            let cluster = labels[[y, x]] as usize;
            sums[cluster] += gray[[y, x]] as u64;
            counts[cluster] += 1;
        }
    }

    for (index, centroid) in centroids.iter_mut().enumerate() {
        if counts[index] > 0 {
            *centroid = (sums[index] / counts[index]) as u8;
        }
    }
}

/// Run assign/update passes until no label changes.
///
/// Every pass runs assign then update and checks the change flag from the
/// assign step, so one update still executes after the final non-changing
/// assignment. Swapping that order would shift the final centroid values.
///
/// The zero-initialized label grid is not a real assignment; the first
/// pass always counts as changed. `max_iterations` bounds pathological
/// oscillation; hitting it is non-fatal and reported via
/// [`ClusterOutcome::converged`].
pub fn run_lloyd(
    gray: ArrayView2<u8>,
    mut centroids: Vec<u8>,
    max_iterations: usize,
) -> ClusterOutcome {
    let (height, width) = gray.dim();
    let mut labels = Array2::<u8>::zeros((height, width));
    let mut iterations = 0;
    let mut converged = false;

    while iterations < max_iterations {
        let moved = assign_clusters(gray, &centroids, &mut labels);
        update_centroids(gray, labels.view(), &mut centroids);
        iterations += 1;

        if !moved && iterations > 1 {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            iterations,
            "clustering stopped at the iteration bound before labels settled"
        );
    }

    ClusterOutcome {
        labels,
        centroids,
        iterations,
        converged,
    }
}

/// Cluster an intensity grid into K groups.
///
/// Seeds centroids from the frequency-weighted histogram, then runs the
/// convergence loop.
///
/// # Arguments
/// * `gray` - Intensity grid of shape (height, width)
/// * `k` - Number of clusters
/// * `seed` - Random seed for centroid initialization
/// * `max_iterations` - Safety bound on assign/update passes
pub fn cluster_intensities(
    gray: ArrayView2<u8>,
    k: usize,
    seed: u64,
    max_iterations: usize,
) -> Result<ClusterOutcome, SegmentError> {
    let (height, width) = gray.dim();
    if height == 0 || width == 0 {
        return Err(SegmentError::EmptyImage { width, height });
    }

    let histogram = intensity_histogram(gray);
    let centroids = init_centroids_weighted(&histogram, k, seed)?;
    Ok(run_lloyd(gray, centroids, max_iterations))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sum of squared pixel-to-assigned-centroid distances.
    fn sum_squared_error(gray: ArrayView2<u8>, labels: ArrayView2<u8>, centroids: &[u8]) -> u64 {
        let mut sse = 0u64;
        for (&intensity, &label) in gray.iter().zip(labels.iter()) {
            let d = intensity as i64 - centroids[label as usize] as i64;
            sse += (d * d) as u64;
        }
        sse
    }

    #[test]
    fn test_nearest_tie_keeps_lowest_index() {
        // 100 is equidistant from 90 and 110
        assert_eq!(nearest_centroid(100, &[90, 110]), 0);
        assert_eq!(nearest_centroid(100, &[110, 90]), 0);
    }

    #[test]
    fn test_assign_reports_change_only_on_difference() {
        let gray = Array2::from_shape_vec((1, 2), vec![0u8, 255]).unwrap();
        let mut labels = Array2::<u8>::zeros((1, 2));

        assert!(assign_clusters(gray.view(), &[0, 255], &mut labels));
        assert_eq!(labels[[0, 0]], 0);
        assert_eq!(labels[[0, 1]], 1);

        // Same centroids again: nothing to change
        assert!(!assign_clusters(gray.view(), &[0, 255], &mut labels));
    }

    #[test]
    fn test_update_takes_truncated_mean() {
        let gray = Array2::from_shape_vec((1, 3), vec![10u8, 11, 200]).unwrap();
        let labels = Array2::from_shape_vec((1, 3), vec![0u8, 0, 1]).unwrap();
        let mut centroids = vec![0u8, 0];

        update_centroids(gray.view(), labels.view(), &mut centroids);

        assert_eq!(centroids, vec![10, 200]); // (10 + 11) / 2 = 10
    }

    #[test]
    fn test_update_keeps_empty_cluster_value() {
        let gray = Array2::from_shape_vec((1, 2), vec![0u8, 255]).unwrap();
        let labels = Array2::from_shape_vec((1, 2), vec![0u8, 2]).unwrap();
        let mut centroids = vec![0u8, 128, 255];

        update_centroids(gray.view(), labels.view(), &mut centroids);

        assert_eq!(centroids[1], 128);
    }

    #[test]
    fn test_black_white_pair_settles_immediately() {
        let gray = Array2::from_shape_vec((1, 2), vec![0u8, 255]).unwrap();

        let outcome = run_lloyd(gray.view(), vec![0, 255], 100);

        assert!(outcome.converged);
        assert_eq!(outcome.centroids, vec![0, 255]);
        assert_eq!(outcome.labels[[0, 0]], 0);
        assert_eq!(outcome.labels[[0, 1]], 1);
    }

    #[test]
    fn test_single_cluster_is_whole_image_mean() {
        let gray = Array2::from_shape_vec((2, 2), vec![10u8, 20, 30, 41]).unwrap();

        let outcome = cluster_intensities(gray.view(), 1, 0, 100).unwrap();

        assert!(outcome.converged);
        assert!(outcome.labels.iter().all(|&l| l == 0));
        assert_eq!(outcome.centroids, vec![25]); // 101 / 4, truncated
    }

    #[test]
    fn test_labels_stay_in_range() {
        let gray = Array2::from_shape_fn((16, 16), |(y, x)| ((y * 16 + x) % 256) as u8);

        let outcome = cluster_intensities(gray.view(), 4, 11, 100).unwrap();

        assert!(outcome.labels.iter().all(|&l| (l as usize) < 4));
        assert_eq!(outcome.centroids.len(), 4);
    }

    #[test]
    fn test_sse_non_increasing_across_passes() {
        let gray = Array2::from_shape_fn((12, 12), |(y, x)| ((y * 23 + x * 5) % 256) as u8);
        let histogram = intensity_histogram(gray.view());
        let mut centroids = init_centroids_weighted(&histogram, 5, 3).unwrap();
        let mut labels = Array2::<u8>::zeros(gray.dim());

        let mut previous = u64::MAX;
        for _ in 0..20 {
            let moved = assign_clusters(gray.view(), &centroids, &mut labels);
            let sse = sum_squared_error(gray.view(), labels.view(), &centroids);
            assert!(sse <= previous);
            previous = sse;

            update_centroids(gray.view(), labels.view(), &mut centroids);
            if !moved {
                break;
            }
        }
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let gray = Array2::from_shape_fn((10, 10), |(y, x)| ((y * 29 + x * 13) % 256) as u8);

        let a = cluster_intensities(gray.view(), 3, 77, 100).unwrap();
        let b = cluster_intensities(gray.view(), 3, 77, 100).unwrap();

        assert_eq!(a.labels, b.labels);
        assert_eq!(a.centroids, b.centroids);
        assert_eq!(a.iterations, b.iterations);
    }

    #[test]
    fn test_iteration_bound_reports_non_converged() {
        let gray = Array2::from_shape_vec((1, 3), vec![0u8, 100, 255]).unwrap();

        let outcome = run_lloyd(gray.view(), vec![0, 255], 1);

        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 1);
        assert!(outcome.labels.iter().all(|&l| (l as usize) < 2));
    }

    #[test]
    fn test_empty_image_rejected() {
        let gray = Array2::<u8>::zeros((0, 5));

        let err = cluster_intensities(gray.view(), 2, 0, 100).unwrap_err();

        assert_eq!(err, SegmentError::EmptyImage { width: 5, height: 0 });
    }

    #[test]
    fn test_too_many_clusters_rejected_before_loop() {
        let gray = Array2::<u8>::from_elem((3, 3), 50);

        let err = cluster_intensities(gray.view(), 2, 0, 100).unwrap_err();

        assert_eq!(
            err,
            SegmentError::InsufficientDistinctIntensities {
                requested: 2,
                available: 1,
            }
        );
    }
}
