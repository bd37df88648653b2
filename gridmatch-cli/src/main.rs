use clap::Parser;
use gridmatch::io::save_gray_png;
use gridmatch::mat::load_real_grid;
use gridmatch::{MatchOutcome, Pipeline, PipelineConfig, Rect};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "GridMatch CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for pipeline stages.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
struct RectConfig {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
}

impl From<RectConfig> for Rect {
    fn from(value: RectConfig) -> Self {
        Rect {
            x: value.x,
            y: value.y,
            width: value.width,
            height: value.height,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Config {
    mat_file: String,
    image1_key: String,
    image2_key: String,
    output_dir: String,
    threshold: f32,
    template: RectConfig,
}

fn validate(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    if config.mat_file.is_empty() {
        return Err("mat_file must be set in the config".into());
    }
    if config.image1_key.is_empty() || config.image2_key.is_empty() {
        return Err("image1_key and image2_key must be set in the config".into());
    }
    if config.output_dir.is_empty() {
        return Err("output_dir must be set in the config".into());
    }
    if !(0.0..=1.0).contains(&config.threshold) {
        return Err("threshold must lie within [0.0, 1.0]".into());
    }
    if config.template.width == 0 || config.template.height == 0 {
        return Err("template region must have positive width and height".into());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("gridmatch=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    validate(&config)?;

    let template: Rect = config.template.into();
    let mat_name = Path::new(&config.mat_file)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.mat_file.clone());

    println!("Processing MAT project file \"{mat_name}\"");
    println!("Using \"{}\" variable as source image", config.image1_key);
    println!("Searching match in \"{}\" variable", config.image2_key);
    println!("Template location:      ({}, {})", template.x, template.y);
    println!("Template size:          ({}, {})", template.width, template.height);
    println!("Fitness threshold:      {}", config.threshold);

    let image1 = load_real_grid(&config.mat_file, &config.image1_key)?;
    let image2 = load_real_grid(&config.mat_file, &config.image2_key)?;

    let pipeline = Pipeline::new(PipelineConfig {
        template_region: template,
        threshold: config.threshold,
    });
    let report = pipeline.run(&image1, &image2)?;

    fs::create_dir_all(&config.output_dir)?;
    let out_dir = Path::new(&config.output_dir);
    for (name, grid) in report.artifacts() {
        save_gray_png(grid, out_dir.join(format!("{name}.png")))?;
    }

    match &report.outcome {
        MatchOutcome::Found { best, .. } => {
            println!("Best match fitness:     {}", best.fitness);
            println!("Best match location:    ({}, {})", best.x, best.y);
            let dx = template.x as i64 - best.x as i64;
            let dy = template.y as i64 - best.y as i64;
            println!("Shift:                  ({dx}, {dy})");
        }
        MatchOutcome::NoMatch => {
            println!("No matches found");
        }
    }

    Ok(())
}
