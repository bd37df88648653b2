#![cfg(feature = "rayon")]

use gridmatch::{match_template, match_template_par, Grid, IntensityGrid, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_grid(rng: &mut StdRng, width: usize, height: usize) -> IntensityGrid {
    let data = (0..width * height).map(|_| rng.random::<u8>()).collect();
    Grid::from_vec(data, width, height).unwrap()
}

#[test]
fn parallel_scan_matches_sequential_scan() {
    let mut rng = StdRng::seed_from_u64(101);
    let image = random_grid(&mut rng, 48, 40);
    let template = image
        .crop(Rect {
            x: 17,
            y: 9,
            width: 8,
            height: 6,
        })
        .unwrap();

    for threshold in [-2.0f32, 0.0, 0.4, 0.95] {
        let sequential: Vec<_> = match_template(&image, &template, threshold)
            .unwrap()
            .collect();
        let parallel = match_template_par(&image, &template, threshold).unwrap();
        assert_eq!(
            sequential, parallel,
            "candidate streams diverge at threshold {threshold}"
        );
    }
}

#[test]
fn parallel_scan_rejects_oversized_templates() {
    let mut rng = StdRng::seed_from_u64(113);
    let image = random_grid(&mut rng, 6, 6);
    let template = random_grid(&mut rng, 8, 3);
    assert!(match_template_par(&image, &template, 0.5).is_err());
}
