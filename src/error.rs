//! Error types for the segmentation pipeline.
//!
//! All error conditions are detected before the clustering loop starts;
//! a run either fails up front or produces a complete labeling.

use thiserror::Error;

/// Errors reported by the segmentation pipeline.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SegmentError {
    /// The requested cluster count was zero.
    #[error("cluster count must be at least 1 (requested {requested})")]
    InvalidClusterCount { requested: usize },

    /// The image holds fewer distinct intensity levels than requested
    /// clusters, so K distinct centroids cannot be seeded.
    #[error(
        "requested {requested} clusters but the image has only {available} distinct intensity levels"
    )]
    InsufficientDistinctIntensities { requested: usize, available: usize },

    /// The image has zero width or height.
    #[error("image must have non-zero dimensions (got {width}x{height})")]
    EmptyImage { width: usize, height: usize },
}
