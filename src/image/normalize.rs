//! Grayscale normalization of raw real-valued grids.

use crate::image::{Grid, IntensityGrid, RealGrid};

/// Converts a real-valued grid into 8-bit grayscale, scaling linearly so the
/// source maximum maps to 255.
///
/// Each sample becomes `round(v * 255 / max)` clamped to `[0, 255]`, so
/// negative samples map to 0. When the source maximum is not strictly
/// positive (all samples non-positive, or no finite samples at all) there is
/// nothing to scale against and the output is all zeros.
pub fn normalize(source: &RealGrid) -> IntensityGrid {
    let width = source.width();
    let height = source.height();

    let max = source
        .as_slice()
        .iter()
        .fold(f64::NEG_INFINITY, |acc, &v| acc.max(v));
    if !(max > 0.0) {
        return Grid::from_raw(vec![0u8; width * height], width, height);
    }

    let data = source
        .as_slice()
        .iter()
        .map(|&v| (v * 255.0 / max).round().clamp(0.0, 255.0) as u8)
        .collect();
    Grid::from_raw(data, width, height)
}
