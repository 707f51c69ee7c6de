//! Intensity histogram over the 8-bit range.

use ndarray::ArrayView2;

/// Number of representable 8-bit intensity levels.
pub const INTENSITY_LEVELS: usize = 256;

/// Tabulate intensity frequency across an image.
///
/// # Arguments
/// * `gray` - Intensity grid of shape (height, width)
///
/// # Returns
/// 256-entry count array; index = intensity, value = pixel count.
/// The counts always sum to `width * height`.
pub fn intensity_histogram(gray: ArrayView2<u8>) -> [u32; INTENSITY_LEVELS] {
    let mut histogram = [0u32; INTENSITY_LEVELS];
    for &intensity in gray.iter() {
        histogram[intensity as usize] += 1;
    }
    histogram
}

/// Count intensity levels that occur at least once.
pub fn distinct_intensities(histogram: &[u32; INTENSITY_LEVELS]) -> usize {
    histogram.iter().filter(|&&count| count > 0).count()
}
