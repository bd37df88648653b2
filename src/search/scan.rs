//! Lazy row-major ZNCC scan.

use crate::image::IntensityGrid;
use crate::template::TemplatePlan;
use crate::util::{GridMatchError, GridMatchResult};

/// Variance floor below which a window or template counts as flat.
pub(crate) const MIN_VARIANCE: f32 = 1e-8;

/// Candidate placement with its correlation fitness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchCandidate {
    /// Column of the window's top-left corner in the searched grid.
    pub x: usize,
    /// Row of the window's top-left corner in the searched grid.
    pub y: usize,
    /// ZNCC score at this placement, nominally in `[-1, 1]`.
    pub fitness: f32,
}

/// Lazy iterator over threshold-passing candidates.
///
/// Placements are visited in row-major order (all columns of row 0 left to
/// right, then row 1, and so on) and only placements with
/// `fitness >= threshold` are yielded, so consumers may stop early without
/// paying for the rest of the scan.
pub struct Matches<'a> {
    image: &'a IntensityGrid,
    plan: TemplatePlan,
    threshold: f32,
    x: usize,
    y: usize,
    max_x: usize,
    max_y: usize,
    exhausted: bool,
}

/// Starts a lazy ZNCC scan of `image` for `template`.
///
/// Fails with `TemplateTooLarge` when the template exceeds the searched grid
/// in either dimension. Flat windows and flat templates score exactly 0, so
/// they never pass a positive threshold.
pub fn match_template<'a>(
    image: &'a IntensityGrid,
    template: &IntensityGrid,
    threshold: f32,
) -> GridMatchResult<Matches<'a>> {
    if template.width() > image.width() || template.height() > image.height() {
        return Err(GridMatchError::TemplateTooLarge {
            template_width: template.width(),
            template_height: template.height(),
            grid_width: image.width(),
            grid_height: image.height(),
        });
    }

    Ok(Matches {
        max_x: image.width() - template.width(),
        max_y: image.height() - template.height(),
        image,
        plan: TemplatePlan::from_grid(template),
        threshold,
        x: 0,
        y: 0,
        exhausted: false,
    })
}

impl Iterator for Matches<'_> {
    type Item = MatchCandidate;

    fn next(&mut self) -> Option<MatchCandidate> {
        while !self.exhausted {
            let (x, y) = (self.x, self.y);
            if self.x < self.max_x {
                self.x += 1;
            } else {
                self.x = 0;
                if self.y < self.max_y {
                    self.y += 1;
                } else {
                    self.exhausted = true;
                }
            }

            let fitness = score_at(self.image, &self.plan, x, y);
            if fitness >= self.threshold {
                return Some(MatchCandidate { x, y, fitness });
            }
        }
        None
    }
}

/// Computes the normalized correlation coefficient for a single placement.
///
/// Returns 0 when the template or the window under it has no variance, and
/// `f32::NEG_INFINITY` when the placement does not fit inside the image.
pub fn score_at(image: &IntensityGrid, plan: &TemplatePlan, x: usize, y: usize) -> f32 {
    let img_width = image.width();
    let img_height = image.height();
    let tpl_width = plan.width();
    let tpl_height = plan.height();

    if tpl_width > img_width || tpl_height > img_height {
        return f32::NEG_INFINITY;
    }
    if x > img_width - tpl_width || y > img_height - tpl_height {
        return f32::NEG_INFINITY;
    }

    let zero_mean = plan.zero_mean();
    let n = (tpl_width * tpl_height) as f32;

    let mut dot = 0.0f32;
    let mut sum_i = 0.0f32;
    let mut sum_i2 = 0.0f32;
    for ty in 0..tpl_height {
        let img_row = image.row(y + ty).expect("row within bounds for scan");
        let base = ty * tpl_width;
        for tx in 0..tpl_width {
            let value = img_row[x + tx] as f32;
            dot += zero_mean[base + tx] * value;
            sum_i += value;
            sum_i2 += value * value;
        }
    }

    let var_i = sum_i2 - (sum_i * sum_i) / n;
    if plan.var_t() <= MIN_VARIANCE || var_i <= MIN_VARIANCE {
        return 0.0;
    }

    let score = dot / (plan.var_t() * var_i).sqrt();
    if score.is_finite() {
        score
    } else {
        0.0
    }
}
