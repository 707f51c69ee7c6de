//! ClusterMap Rust Extensions
//!
//! Intensity k-means image segmentation implemented in Rust
//! with Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//!
//! The pipeline accepts images with multiple channel configurations:
//! - **Grayscale**: (height, width, 1) - single channel
//! - **RGB**: (height, width, 3) - 3 color channels
//! - **RGBA**: (height, width, 4) - 3 color channels + alpha (ignored)
//!
//! Values are 8-bit (0-255) throughout; clustering operates on the 256
//! intensity bins, so there is no float image variant.
//!
//! ## Pipeline
//!
//! An input image is reduced to a single intensity channel, clustered
//! into K intensity groups with iterative k-means, and recolored so each
//! cluster gets a distinct hue. Centroid seeding is the only randomized
//! stage and takes an explicit seed; a fixed seed reproduces labels,
//! centroids, and output colors exactly.

pub mod error;
pub mod segment;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::SegmentError;
pub use segment::pipeline::{segment_u8, InitStrategy, SegmentOptions, Segmentation};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use ndarray::Array2;
    use numpy::{IntoPyArray, PyArray1, PyArray2, PyArray3, PyReadonlyArray2, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::segment::grayscale::grayscale_average_u8;
    use crate::segment::histogram::intensity_histogram as intensity_histogram_impl;
    use crate::segment::palette::generate_palette;
    use crate::segment::pipeline::{segment_u8, SegmentOptions};

    fn options(clusters: usize, seed: u64, max_iterations: usize) -> SegmentOptions {
        SegmentOptions {
            cluster_count: clusters,
            seed,
            max_iterations,
            ..Default::default()
        }
    }

    // ========================================================================
    // Segmentation
    // ========================================================================

    /// Segment an image into K intensity clusters and recolor it.
    ///
    /// Returns an RGB image where each pixel carries its cluster's hue.
    #[pyfunction]
    pub fn segment<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        clusters: usize,
        seed: u64,
        max_iterations: usize,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = segment_u8(image.as_array(), &options(clusters, seed, max_iterations))
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(result.image.into_pyarray(py))
    }

    /// Segment an image and return the per-pixel cluster indices.
    #[pyfunction]
    pub fn segment_labels<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        clusters: usize,
        seed: u64,
        max_iterations: usize,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let result = segment_u8(image.as_array(), &options(clusters, seed, max_iterations))
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(result.labels.into_pyarray(py))
    }

    // ========================================================================
    // Pipeline Stages
    // ========================================================================

    /// Reduce an image to a single intensity channel (channel average).
    #[pyfunction]
    pub fn grayscale_average<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> Bound<'py, PyArray2<u8>> {
        grayscale_average_u8(image.as_array()).into_pyarray(py)
    }

    /// Tabulate intensity frequency over an intensity grid.
    #[pyfunction]
    pub fn intensity_histogram<'py>(
        py: Python<'py>,
        gray: PyReadonlyArray2<'py, u8>,
    ) -> Bound<'py, PyArray1<u32>> {
        let histogram = intensity_histogram_impl(gray.as_array());
        histogram.to_vec().into_pyarray(py)
    }

    /// Generate the K-color cluster palette as a (K, 3) RGB array.
    #[pyfunction]
    pub fn cluster_palette<'py>(py: Python<'py>, clusters: usize) -> Bound<'py, PyArray2<u8>> {
        let colors = generate_palette(clusters);
        let mut array = Array2::<u8>::zeros((colors.len(), 3));
        for (index, color) in colors.iter().enumerate() {
            for channel in 0..3 {
                array[[index, channel]] = color[channel];
            }
        }
        array.into_pyarray(py)
    }

    /// ClusterMap Rust extension module
    #[pymodule]
    pub fn clustermap_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(segment, m)?)?;
        m.add_function(wrap_pyfunction!(segment_labels, m)?)?;
        m.add_function(wrap_pyfunction!(grayscale_average, m)?)?;
        m.add_function(wrap_pyfunction!(intensity_histogram, m)?)?;
        m.add_function(wrap_pyfunction!(cluster_palette, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::clustermap_rust;
