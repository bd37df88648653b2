//! Rayon row-parallel scan (feature-gated).
//!
//! Rows of placements are scored on independent worker threads and the
//! per-row results are concatenated in row order, so the returned vector
//! carries exactly the candidates, and the ordering, of the sequential scan.

use crate::image::IntensityGrid;
use crate::search::scan::{score_at, MatchCandidate};
use crate::template::TemplatePlan;
use crate::util::{GridMatchError, GridMatchResult};
use rayon::prelude::*;

/// Row-parallel equivalent of [`match_template`](crate::match_template).
///
/// Materializes the candidate list instead of streaming it; numeric results
/// and candidate order match the sequential scan.
pub fn match_template_par(
    image: &IntensityGrid,
    template: &IntensityGrid,
    threshold: f32,
) -> GridMatchResult<Vec<MatchCandidate>> {
    if template.width() > image.width() || template.height() > image.height() {
        return Err(GridMatchError::TemplateTooLarge {
            template_width: template.width(),
            template_height: template.height(),
            grid_width: image.width(),
            grid_height: image.height(),
        });
    }

    let plan = TemplatePlan::from_grid(template);
    let max_x = image.width() - template.width();
    let max_y = image.height() - template.height();

    let rows: Vec<Vec<MatchCandidate>> = (0..=max_y)
        .into_par_iter()
        .map(|y| {
            let mut row_candidates = Vec::new();
            for x in 0..=max_x {
                let fitness = score_at(image, &plan, x, y);
                if fitness >= threshold {
                    row_candidates.push(MatchCandidate { x, y, fitness });
                }
            }
            row_candidates
        })
        .collect();

    Ok(rows.into_iter().flatten().collect())
}
