use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

mod cli;
mod logger;
mod output;

use cli::Args;
use logger::init_logger;
use output::save_image_as_png;
use whitted::config::SceneConfig;
use whitted::scene::{blood_moon, Scene};
use whitted::shaders::BlinnPhongShader;
use whitted::Renderer;

const DEFAULT_WIDTH: usize = 640;
const DEFAULT_HEIGHT: usize = 360;
const DEFAULT_MAX_DEPTH: usize = 2;

/// Scene and reflection depth from the scene file or the built-in scene, with
/// command line overrides applied.
fn load_scene(args: &Args) -> Result<(Scene, usize)> {
    let (mut scene, max_depth) = match &args.config {
        Some(path) => {
            let config = SceneConfig::load(path)?;
            let scene = config.build().with_context(|| format!("failed to build scene from {}", path.display()))?;
            (scene, config.max_depth)
        }
        None => (blood_moon(DEFAULT_WIDTH, DEFAULT_HEIGHT), DEFAULT_MAX_DEPTH),
    };

    if let Some(width) = args.width {
        scene.width = width;
    }
    if let Some(height) = args.height {
        scene.height = height;
    }

    Ok((scene, args.max_depth.unwrap_or(max_depth)))
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    let (scene, max_depth) = load_scene(&args)?;
    info!(
        "{} surfaces, image {}x{}, max depth {}",
        scene.surfaces.len(),
        scene.width,
        scene.height,
        max_depth
    );

    let shader = BlinnPhongShader::default();
    let renderer = Renderer::new(&scene, &shader, max_depth).with_tile_rows(args.tile_rows);

    let start = Instant::now();
    let image = if args.sequential { renderer.render()? } else { renderer.render_parallel()? };
    info!("rendered in {:.2?}", start.elapsed());

    save_image_as_png(&image, &args.output)
}
