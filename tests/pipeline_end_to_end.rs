use gridmatch::pipeline::{
    BEST_MATCH_NAME, IMAGE1_GRAY_NAME, IMAGE2_GRAY_NAME, TEMPLATE_NAME,
};
use gridmatch::{Grid, GridMatchError, MatchOutcome, Pipeline, PipelineConfig, RealGrid, Rect};

// 4x4 grid, zero except the 2x2 block [[10, 20], [30, 40]] at (x0, y0).
fn block_grid(x0: usize, y0: usize) -> RealGrid {
    let mut data = vec![0.0f64; 16];
    data[y0 * 4 + x0] = 10.0;
    data[y0 * 4 + x0 + 1] = 20.0;
    data[(y0 + 1) * 4 + x0] = 30.0;
    data[(y0 + 1) * 4 + x0 + 1] = 40.0;
    Grid::from_vec(data, 4, 4).unwrap()
}

#[test]
fn pipeline_locates_a_unique_block() {
    let image1 = block_grid(0, 0);
    let image2 = block_grid(1, 1);

    let pipeline = Pipeline::new(PipelineConfig {
        template_region: Rect {
            x: 0,
            y: 0,
            width: 2,
            height: 2,
        },
        threshold: 0.99,
    });
    let report = pipeline.run(&image1, &image2).unwrap();

    let best = report.best().expect("block should be found");
    assert_eq!((best.x, best.y), (1, 1));
    assert!((best.fitness - 1.0).abs() < 1e-4);
    assert_eq!(report.shift(), Some((-1, -1)));

    // Both crops hold the same normalized block.
    assert_eq!(report.template.as_slice(), &[64u8, 128, 191, 255]);
    match &report.outcome {
        MatchOutcome::Found { matched_region, .. } => {
            assert_eq!(matched_region.as_slice(), report.template.as_slice());
        }
        MatchOutcome::NoMatch => panic!("expected a match"),
    }

    let artifacts = report.artifacts();
    let names: Vec<_> = artifacts.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        vec![
            IMAGE1_GRAY_NAME,
            IMAGE2_GRAY_NAME,
            TEMPLATE_NAME,
            BEST_MATCH_NAME,
        ]
    );
}

#[test]
fn constant_search_grid_yields_no_match() {
    let image1 = block_grid(1, 0);
    let image2 = Grid::from_vec(vec![7.0f64; 16], 4, 4).unwrap();

    let pipeline = Pipeline::new(PipelineConfig {
        template_region: Rect {
            x: 1,
            y: 0,
            width: 2,
            height: 2,
        },
        threshold: 0.5,
    });
    let report = pipeline.run(&image1, &image2).unwrap();

    assert!(report.best().is_none());
    assert_eq!(report.shift(), None);
    assert!(matches!(report.outcome, MatchOutcome::NoMatch));

    // Only the two normalized grids are emitted when nothing matched.
    let names: Vec<_> = report.artifacts().iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec![IMAGE1_GRAY_NAME, IMAGE2_GRAY_NAME]);
}

#[test]
fn pipeline_rejects_template_region_outside_image1() {
    let image1 = block_grid(0, 0);
    let image2 = block_grid(1, 1);

    let pipeline = Pipeline::new(PipelineConfig {
        template_region: Rect {
            x: 3,
            y: 3,
            width: 2,
            height: 2,
        },
        threshold: 0.9,
    });
    let err = pipeline.run(&image1, &image2).err().unwrap();
    assert_eq!(
        err,
        GridMatchError::RegionOutOfBounds {
            x: 3,
            y: 3,
            width: 2,
            height: 2,
            grid_width: 4,
            grid_height: 4,
        }
    );
}

#[test]
fn pipeline_rejects_template_larger_than_image2() {
    let mut data = vec![0.0f64; 36];
    for (i, value) in data.iter_mut().enumerate() {
        *value = i as f64;
    }
    let image1 = Grid::from_vec(data, 6, 6).unwrap();
    let image2 = block_grid(0, 0);

    let pipeline = Pipeline::new(PipelineConfig {
        template_region: Rect {
            x: 0,
            y: 0,
            width: 5,
            height: 5,
        },
        threshold: 0.9,
    });
    let err = pipeline.run(&image1, &image2).err().unwrap();
    assert_eq!(
        err,
        GridMatchError::TemplateTooLarge {
            template_width: 5,
            template_height: 5,
            grid_width: 4,
            grid_height: 4,
        }
    );
}
