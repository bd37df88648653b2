//! Saving intensity grids as grayscale PNG rasters.
//!
//! Available when the `image-io` feature is enabled. PNG keeps the artifact
//! lossless, which matters for crops that are compared pixel-for-pixel.

use crate::image::IntensityGrid;
use crate::util::{GridMatchError, GridMatchResult};
use std::path::Path;

/// Converts a grid into an 8-bit grayscale image buffer.
pub fn gray_image_from_grid(grid: &IntensityGrid) -> GridMatchResult<image::GrayImage> {
    let width = u32::try_from(grid.width()).map_err(|_| GridMatchError::ImageIo {
        reason: format!("grid width {} exceeds raster limits", grid.width()),
    })?;
    let height = u32::try_from(grid.height()).map_err(|_| GridMatchError::ImageIo {
        reason: format!("grid height {} exceeds raster limits", grid.height()),
    })?;
    image::GrayImage::from_raw(width, height, grid.as_slice().to_vec()).ok_or_else(|| {
        GridMatchError::ImageIo {
            reason: "buffer length does not match raster dimensions".to_string(),
        }
    })
}

/// Saves a grid to `path` as a grayscale PNG.
pub fn save_gray_png<P: AsRef<Path>>(grid: &IntensityGrid, path: P) -> GridMatchResult<()> {
    let img = gray_image_from_grid(grid)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|err| GridMatchError::ImageIo {
            reason: err.to_string(),
        })
}
