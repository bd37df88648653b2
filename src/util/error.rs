//! Error types for gridmatch.

use thiserror::Error;

/// Result alias for gridmatch operations.
pub type GridMatchResult<T> = std::result::Result<T, GridMatchError>;

/// Errors surfaced by the matching pipeline and its boundary helpers.
///
/// Finding no candidate above the threshold is not an error; the pipeline
/// reports it as a regular outcome.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GridMatchError {
    /// A grid or region was declared with a zero extent.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The backing buffer length does not match the declared extents.
    #[error("buffer holds {got} samples, expected {expected}")]
    BufferSizeMismatch { expected: usize, got: usize },
    /// The requested region extends outside the source grid.
    #[error(
        "region {width}x{height} at ({x}, {y}) exceeds grid {grid_width}x{grid_height}"
    )]
    RegionOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        grid_width: usize,
        grid_height: usize,
    },
    /// The template is larger than the searched grid in at least one dimension.
    #[error(
        "template {template_width}x{template_height} exceeds search grid {grid_width}x{grid_height}"
    )]
    TemplateTooLarge {
        template_width: usize,
        template_height: usize,
        grid_width: usize,
        grid_height: usize,
    },
    /// The numeric-array container could not be opened or parsed.
    #[error("mat container error: {reason}")]
    MatIo { reason: String },
    /// The requested variable is absent from the container.
    #[error("variable \"{name}\" not found in mat container")]
    VariableNotFound { name: String },
    /// The requested variable is not a numeric 2-D matrix.
    #[error("variable \"{name}\" is not a numeric 2-D matrix")]
    VariableNotNumeric2d { name: String },
    /// Raster encoding or writing failed.
    #[error("image io error: {reason}")]
    ImageIo { reason: String },
}
