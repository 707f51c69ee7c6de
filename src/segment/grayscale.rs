//! Grayscale conversion for the clustering pipeline.
//!
//! Uses the channel-average method: `floor((R + G + B) / 3)` with integer
//! division. Clustering operates on 8-bit intensity bins, so the average
//! is kept in integer arithmetic end to end.
//!
//! ## Supported Formats
//!
//! - **Grayscale**: (height, width, 1) - the single channel passes through
//! - **RGB**: (height, width, 3) - channels are averaged
//! - **RGBA**: (height, width, 4) - RGB averaged, alpha ignored

use ndarray::{Array2, ArrayView3};

/// Reduce an image to a single intensity channel.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
///
/// # Returns
/// Intensity grid of shape (height, width) with values 0-255
pub fn grayscale_average_u8(input: ArrayView3<u8>) -> Array2<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array2::<u8>::zeros((height, width));

    // Grayscale: already a single intensity channel
    if channels == 1 {
        for y in 0..height {
            for x in 0..width {
                output[[y, x]] = input[[y, x, 0]];
            }
        }
        return output;
    }

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as u16;
            let g = input[[y, x, 1]] as u16;
            let b = input[[y, x, 2]] as u16;
            output[[y, x]] = ((r + g + b) / 3) as u8;
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn test_average_black_and_white() {
        let mut img = Array3::<u8>::zeros((1, 2, 3));
        img[[0, 1, 0]] = 255;
        img[[0, 1, 1]] = 255;
        img[[0, 1, 2]] = 255;

        let gray = grayscale_average_u8(img.view());

        assert_eq!(gray[[0, 0]], 0);
        assert_eq!(gray[[0, 1]], 255);
    }

    #[test]
    fn test_average_truncates() {
        let mut img = Array3::<u8>::zeros((1, 1, 3));
        img[[0, 0, 0]] = 1; // (1 + 0 + 0) / 3 = 0

        let gray = grayscale_average_u8(img.view());

        assert_eq!(gray[[0, 0]], 0);
    }

    #[test]
    fn test_average_mixed_channels() {
        let mut img = Array3::<u8>::zeros((1, 1, 3));
        img[[0, 0, 0]] = 10;
        img[[0, 0, 1]] = 20;
        img[[0, 0, 2]] = 30;

        let gray = grayscale_average_u8(img.view());

        assert_eq!(gray[[0, 0]], 20);
    }

    #[test]
    fn test_grayscale_passthrough() {
        let mut img = Array3::<u8>::zeros((2, 1, 1));
        img[[0, 0, 0]] = 77;
        img[[1, 0, 0]] = 200;

        let gray = grayscale_average_u8(img.view());

        assert_eq!(gray[[0, 0]], 77);
        assert_eq!(gray[[1, 0]], 200);
    }

    #[test]
    fn test_rgba_ignores_alpha() {
        let mut img = Array3::<u8>::zeros((1, 1, 4));
        img[[0, 0, 0]] = 60;
        img[[0, 0, 1]] = 60;
        img[[0, 0, 2]] = 60;
        img[[0, 0, 3]] = 5;

        let gray = grayscale_average_u8(img.view());

        assert_eq!(gray[[0, 0]], 60);
    }

    #[test]
    fn test_output_dimensions() {
        let img = Array3::<u8>::zeros((3, 5, 3));

        let gray = grayscale_average_u8(img.view());

        assert_eq!(gray.dim(), (3, 5));
    }
}
