//! Render cluster labels as palette colors.

use ndarray::{Array3, ArrayView2, Axis, Zip};

use super::palette::Rgb;

/// Map each pixel's cluster label to its palette color.
///
/// Every label must be a valid palette index. Per-pixel lookups have no
/// cross-pixel dependency and the label grid is frozen here, so rows
/// recolor in parallel.
///
/// # Arguments
/// * `labels` - Cluster index per pixel, shape (height, width)
/// * `palette` - One color per cluster index
///
/// # Returns
/// RGB image of shape (height, width, 3)
pub fn colorize_labels(labels: ArrayView2<u8>, palette: &[Rgb]) -> Array3<u8> {
    let (height, width) = labels.dim();
    let mut output = Array3::<u8>::zeros((height, width, 3));

    Zip::from(output.lanes_mut(Axis(2)))
        .and(labels)
        .par_for_each(|mut pixel, &label| {
            let [r, g, b] = palette[label as usize];
            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
        });

    output
}
