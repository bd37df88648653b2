//! Loading real-valued grids from MATLAB Level 5 containers.
//!
//! Available when the `mat-io` feature is enabled. MAT arrays are stored
//! column-major; grids returned here are row-major, with every numeric
//! MATLAB class widened to `f64`.

use crate::image::RealGrid;
use crate::util::{GridMatchError, GridMatchResult};
use matfile::{MatFile, NumericData};
use std::fs::File;
use std::path::Path;

/// Reads the named 2-D numeric variable from a MAT container.
pub fn load_real_grid<P: AsRef<Path>>(path: P, name: &str) -> GridMatchResult<RealGrid> {
    let file = File::open(path).map_err(|err| GridMatchError::MatIo {
        reason: err.to_string(),
    })?;
    let mat = MatFile::parse(file).map_err(|err| GridMatchError::MatIo {
        reason: err.to_string(),
    })?;
    let array = mat
        .find_by_name(name)
        .ok_or_else(|| GridMatchError::VariableNotFound {
            name: name.to_string(),
        })?;

    let dims = array.size();
    if dims.len() != 2 {
        return Err(GridMatchError::VariableNotNumeric2d {
            name: name.to_string(),
        });
    }
    let rows = dims[0];
    let cols = dims[1];

    let samples = numeric_to_f64(array.data()).ok_or_else(|| {
        GridMatchError::VariableNotNumeric2d {
            name: name.to_string(),
        }
    })?;
    let expected = rows
        .checked_mul(cols)
        .ok_or(GridMatchError::InvalidDimensions {
            width: cols,
            height: rows,
        })?;
    if samples.len() != expected {
        return Err(GridMatchError::VariableNotNumeric2d {
            name: name.to_string(),
        });
    }

    grid_from_column_major(&samples, rows, cols)
}

/// Reorders a column-major sample buffer into a row-major grid of
/// `cols x rows`.
fn grid_from_column_major(samples: &[f64], rows: usize, cols: usize) -> GridMatchResult<RealGrid> {
    let mut data = vec![0.0f64; rows * cols];
    for col in 0..cols {
        for row in 0..rows {
            data[row * cols + col] = samples[col * rows + row];
        }
    }
    RealGrid::from_vec(data, cols, rows)
}

fn numeric_to_f64(data: &NumericData) -> Option<Vec<f64>> {
    match data {
        NumericData::Double { real, .. } => Some(real.clone()),
        NumericData::Single { real, .. } => Some(real.iter().map(|&v| v as f64).collect()),
        NumericData::Int8 { real, .. } => Some(real.iter().map(|&v| v as f64).collect()),
        NumericData::UInt8 { real, .. } => Some(real.iter().map(|&v| v as f64).collect()),
        NumericData::Int16 { real, .. } => Some(real.iter().map(|&v| v as f64).collect()),
        NumericData::UInt16 { real, .. } => Some(real.iter().map(|&v| v as f64).collect()),
        NumericData::Int32 { real, .. } => Some(real.iter().map(|&v| v as f64).collect()),
        NumericData::UInt32 { real, .. } => Some(real.iter().map(|&v| v as f64).collect()),
        NumericData::Int64 { real, .. } => Some(real.iter().map(|&v| v as f64).collect()),
        NumericData::UInt64 { real, .. } => Some(real.iter().map(|&v| v as f64).collect()),
    }
}
