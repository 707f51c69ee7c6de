//! Cluster palette generation.
//!
//! Clusters are rendered as evenly spaced hues at full saturation and
//! value, so neighboring cluster indices stay visually far apart.

/// An 8-bit RGB triple.
pub type Rgb = [u8; 3];

/// Convert an HSV color to RGB.
///
/// Standard six-sector conversion: hue in degrees (wraps at 360),
/// saturation and value in 0.0-1.0.
#[inline]
pub fn hsv_to_rgb(hue: u32, saturation: f32, value: f32) -> Rgb {
    let h = hue % 360;
    let sector = (h / 60) % 6;
    let f = h as f32 / 60.0 - (h / 60) as f32;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - f * saturation);
    let t = value * (1.0 - (1.0 - f) * saturation);

    let (r, g, b) = match sector {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
}

/// Generate K visually distinct colors, one per cluster index.
///
/// Cluster i gets hue `(i * 360) / k` (integer division) at full
/// saturation and value. Deterministic in K alone.
pub fn generate_palette(k: usize) -> Vec<Rgb> {
    (0..k)
        .map(|index| hsv_to_rgb((index * 360 / k) as u32, 1.0, 1.0))
        .collect()
}
