//! GridMatch locates a rectangular template cropped from one grayscale grid
//! inside a second grid by normalized cross-correlation.
//!
//! The crate covers the full offline registration pipeline: grayscale
//! normalization of raw real-valued arrays, region-of-interest extraction,
//! an exhaustive row-major ZNCC scan, and best-candidate selection. Optional
//! parallelism is available via the `rayon` feature; the `mat-io` and
//! `image-io` features add the MAT-container source and PNG artifact sink
//! used by the companion CLI.

pub mod image;
pub mod pipeline;
pub mod search;
pub mod select;
pub mod template;
pub mod util;

#[cfg(feature = "image-io")]
pub mod io;
#[cfg(feature = "mat-io")]
pub mod mat;

pub use image::{normalize, Grid, IntensityGrid, RealGrid, Rect};
pub use pipeline::{MatchOutcome, Pipeline, PipelineConfig, PipelineReport};
pub use search::scan::{match_template, score_at, MatchCandidate, Matches};
pub use select::select_best;
pub use template::TemplatePlan;
pub use util::{GridMatchError, GridMatchResult};

#[cfg(feature = "rayon")]
pub use search::parallel::match_template_par;
