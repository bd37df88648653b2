//! End-to-end matching pipeline.
//!
//! Wires normalization, template extraction, the correlation scan, and best
//! selection into a single run over two raw grids. Any stage error aborts
//! the run; finding no candidate above the threshold is a regular outcome,
//! not an error.

use crate::image::{normalize, IntensityGrid, RealGrid, Rect};
use crate::search::scan::{match_template, MatchCandidate};
use crate::select::select_best;
use crate::util::GridMatchResult;

/// Artifact name for the normalized first grid.
pub const IMAGE1_GRAY_NAME: &str = "image1GreyScaled";
/// Artifact name for the normalized second grid.
pub const IMAGE2_GRAY_NAME: &str = "image2GreyScaled";
/// Artifact name for the template crop.
pub const TEMPLATE_NAME: &str = "templateImage";
/// Artifact name for the matched-region crop.
pub const BEST_MATCH_NAME: &str = "bestMatchImage";

/// Caller-supplied matching parameters.
#[derive(Clone, Copy, Debug)]
pub struct PipelineConfig {
    /// Template rectangle, cropped from the first grid.
    pub template_region: Rect,
    /// Minimum fitness a placement must reach to count as a candidate.
    pub threshold: f32,
}

/// Terminal outcome of a pipeline run.
#[derive(Clone, Debug)]
pub enum MatchOutcome {
    /// At least one placement met the threshold.
    Found {
        /// The winning placement.
        best: MatchCandidate,
        /// Template-sized crop of the second grid at the winning placement.
        matched_region: IntensityGrid,
    },
    /// No placement reached the threshold.
    NoMatch,
}

/// Artifacts and outcome of a completed pipeline run.
pub struct PipelineReport {
    /// Normalized first grid.
    pub image1_gray: IntensityGrid,
    /// Normalized second grid.
    pub image2_gray: IntensityGrid,
    /// Template crop taken from the first grid.
    pub template: IntensityGrid,
    /// Search outcome.
    pub outcome: MatchOutcome,
    template_region: Rect,
}

impl PipelineReport {
    /// Returns the winning candidate, if any placement met the threshold.
    pub fn best(&self) -> Option<&MatchCandidate> {
        match &self.outcome {
            MatchOutcome::Found { best, .. } => Some(best),
            MatchOutcome::NoMatch => None,
        }
    }

    /// Pixel shift `(template.x - best.x, template.y - best.y)` between the
    /// template origin and the matched origin.
    pub fn shift(&self) -> Option<(i64, i64)> {
        self.best().map(|best| {
            (
                self.template_region.x as i64 - best.x as i64,
                self.template_region.y as i64 - best.y as i64,
            )
        })
    }

    /// Enumerates the artifacts to persist, as `(name, grid)` pairs.
    ///
    /// Both normalized grids are always present; the template and
    /// matched-region crops are only emitted for a successful match. The
    /// file extension is left to the sink.
    pub fn artifacts(&self) -> Vec<(&'static str, &IntensityGrid)> {
        let mut artifacts = vec![
            (IMAGE1_GRAY_NAME, &self.image1_gray),
            (IMAGE2_GRAY_NAME, &self.image2_gray),
        ];
        if let MatchOutcome::Found { matched_region, .. } = &self.outcome {
            artifacts.push((TEMPLATE_NAME, &self.template));
            artifacts.push((BEST_MATCH_NAME, matched_region));
        }
        artifacts
    }
}

/// Single-shot orchestrator for the normalize, crop, scan, select sequence.
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Creates a pipeline with the given parameters.
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Runs the full pipeline over two raw grids.
    ///
    /// The template region is cropped from `image1` after normalization and
    /// searched for in the normalized `image2`. On success the matched
    /// region is cropped from `image2` for reporting.
    pub fn run(&self, image1: &RealGrid, image2: &RealGrid) -> GridMatchResult<PipelineReport> {
        let region = self.config.template_region;

        let image1_gray = normalize(image1);
        let image2_gray = normalize(image2);
        #[cfg(feature = "tracing")]
        tracing::info!(
            image1_width = image1_gray.width(),
            image1_height = image1_gray.height(),
            image2_width = image2_gray.width(),
            image2_height = image2_gray.height(),
            "normalized source grids"
        );

        let template = image1_gray.crop(region)?;

        let candidates = match_template(&image2_gray, &template, self.config.threshold)?;
        let best = select_best(candidates);
        #[cfg(feature = "tracing")]
        match &best {
            Some(best) => tracing::info!(
                x = best.x,
                y = best.y,
                fitness = best.fitness,
                "best candidate selected"
            ),
            None => tracing::info!(threshold = self.config.threshold, "no candidate met threshold"),
        }

        let outcome = match best {
            Some(best) => {
                let matched_region = image2_gray.crop(Rect {
                    x: best.x,
                    y: best.y,
                    width: region.width,
                    height: region.height,
                })?;
                MatchOutcome::Found {
                    best,
                    matched_region,
                }
            }
            None => MatchOutcome::NoMatch,
        };

        Ok(PipelineReport {
            image1_gray,
            image2_gray,
            template,
            outcome,
            template_region: region,
        })
    }
}
