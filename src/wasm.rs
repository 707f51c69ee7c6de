//! WebAssembly exports for the segmentation pipeline.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images
//! travel as flat byte slices of length `width * height * channels` with
//! 1, 3, or 4 channels; clustering errors surface as JavaScript errors.

use ndarray::Array3;
use wasm_bindgen::prelude::*;

use crate::segment::grayscale::grayscale_average_u8;
use crate::segment::palette::generate_palette;
use crate::segment::pipeline::{segment_u8, SegmentOptions};

fn image_from_flat(data: &[u8], width: usize, height: usize, channels: usize) -> Array3<u8> {
    Array3::from_shape_vec((height, width, channels), data.to_vec())
        .expect("Invalid dimensions")
}

// ============================================================================
// Segmentation
// ============================================================================

/// Segment an image into K intensity clusters and recolor it.
///
/// # Arguments
/// * `data` - Flat pixel bytes (length = width * height * channels)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - 1, 3, or 4 channels per pixel
/// * `clusters` - Number of intensity clusters (K)
/// * `seed` - Random seed for centroid initialization
///
/// # Returns
/// Flat RGB bytes (length = width * height * 3)
#[wasm_bindgen]
pub fn segment_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    clusters: usize,
    seed: u64,
) -> Result<Vec<u8>, JsValue> {
    let input = image_from_flat(data, width, height, channels);
    let options = SegmentOptions {
        cluster_count: clusters,
        seed,
        ..Default::default()
    };

    let result = segment_u8(input.view(), &options)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(result.image.into_raw_vec_and_offset().0)
}

/// Segment an image and return the per-pixel cluster indices.
///
/// # Returns
/// Flat cluster indices (length = width * height), each in [0, clusters)
#[wasm_bindgen]
pub fn segment_labels_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    clusters: usize,
    seed: u64,
) -> Result<Vec<u8>, JsValue> {
    let input = image_from_flat(data, width, height, channels);
    let options = SegmentOptions {
        cluster_count: clusters,
        seed,
        ..Default::default()
    };

    let result = segment_u8(input.view(), &options)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(result.labels.into_raw_vec_and_offset().0)
}

// ============================================================================
// Pipeline Stages
// ============================================================================

/// Reduce an image to a single intensity channel (channel average).
///
/// # Returns
/// Flat intensity bytes (length = width * height)
#[wasm_bindgen]
pub fn grayscale_average_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Vec<u8> {
    let input = image_from_flat(data, width, height, channels);
    grayscale_average_u8(input.view()).into_raw_vec_and_offset().0
}

/// Generate the K-color cluster palette.
///
/// # Returns
/// Flat RGB bytes (length = clusters * 3), one color per cluster index
#[wasm_bindgen]
pub fn cluster_palette_wasm(clusters: usize) -> Vec<u8> {
    generate_palette(clusters)
        .into_iter()
        .flat_map(|color| color.into_iter())
        .collect()
}
