//! Template statistics precomputation for the correlation scan.

use crate::image::IntensityGrid;

/// Zero-mean template buffer with precomputed deviation statistics.
///
/// `var_t` is the sum of squared deviations from the template mean, computed
/// with f64 accumulation. A flat template has `var_t == 0` and scores 0 at
/// every placement rather than failing.
#[derive(Clone, Debug)]
pub struct TemplatePlan {
    width: usize,
    height: usize,
    var_t: f32,
    zero_mean: Vec<f32>,
}

impl TemplatePlan {
    /// Builds a plan from a template grid.
    pub fn from_grid(template: &IntensityGrid) -> Self {
        let width = template.width();
        let height = template.height();
        let count = (width * height) as f64;

        let mut sum = 0.0f64;
        let mut sum_sq = 0.0f64;
        for &value in template.as_slice() {
            let v = value as f64;
            sum += v;
            sum_sq += v * v;
        }

        let mean = sum / count;
        let var_t = (sum_sq - sum * sum / count).max(0.0);
        let zero_mean = template
            .as_slice()
            .iter()
            .map(|&value| (value as f64 - mean) as f32)
            .collect();

        Self {
            width,
            height,
            var_t: var_t as f32,
            zero_mean,
        }
    }

    /// Returns the template width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the template height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the sum of squared deviations from the template mean.
    pub fn var_t(&self) -> f32 {
        self.var_t
    }

    /// Returns the zero-mean template buffer in row-major order.
    pub fn zero_mean(&self) -> &[f32] {
        &self.zero_mean
    }
}
