//! Nearest-hit dispatch and image assembly.
//!
//! [`trace`] intersects a ray batch with every surface, groups the rays by the
//! surface they hit first and hands each group to the shader, which may call
//! back into [`trace`] for reflections. [`Renderer`] drives it for a whole
//! image, either as one batch or as row tiles traced in parallel.

use std::ops::Range;

use log::{debug, info, trace as trace_log};
use rayon::prelude::*;

use crate::color::{self, Color};
use crate::error::TraceError;
use crate::mask;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::shader::{ShadeContext, Shader};
use crate::vector::Vec3Batch;

/// Color of every ray in `ray`; rays that hit nothing are black.
pub fn trace(
    scene: &Scene,
    shader: &dyn Shader,
    ray: &Ray,
    depth: usize,
    max_depth: usize,
) -> Result<Vec3Batch, TraceError> {
    let lanes = ray.lanes();
    debug!("tracing {} rays at depth {}", lanes, depth);

    let distances: Vec<Vec<f64>> = scene.surfaces.iter().map(|s| s.intersects(ray)).collect();
    let nearest = distances.iter().fold(vec![f64::INFINITY; lanes], |acc, d| mask::minimum(&acc, d));

    let raytrace = |bounce: &Ray, next_depth: usize| trace(scene, shader, bounce, next_depth, max_depth);

    let mut color = Vec3Batch::splat(color::BLACK, lanes);
    for (index, (surface, distance)) in scene.surfaces.iter().zip(&distances).enumerate() {
        let hit: Vec<bool> = nearest.iter().zip(distance).map(|(&n, &d)| n != f64::INFINITY && d == n).collect();
        if !mask::any(&hit) {
            continue;
        }
        trace_log!("surface {} is nearest for {} rays", index, mask::count(&hit));

        let sub_ray = ray.extract(&hit);
        let sub_distance: Vec<f64> = distance.iter().zip(&hit).filter(|(_, &h)| h).map(|(&d, _)| d).collect();
        let ctx = ShadeContext {
            ray: &sub_ray,
            surface: surface.as_ref(),
            distance: &sub_distance,
            scene,
            raytrace: &raytrace,
            depth,
            max_depth,
        };

        color += shader.shade(&ctx)?.place(&hit);
    }

    Ok(color)
}

/// Row-major RGB image with one linear color per pixel.
#[derive(Debug, Clone)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>,
}

impl Image {
    /// Lane `j * width + i` becomes pixel `(i, j)`.
    pub fn from_batch(width: usize, height: usize, colors: &Vec3Batch) -> Image {
        mask::assert_lanes(width * height, colors.len());
        Image { width, height, pixels: colors.iter().collect() }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    /// Interleaved 8-bit RGB, rows top to bottom.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&c| color::to_rgb8(c)).collect()
    }
}

/// Renders a scene with a fixed shader and reflection depth.
pub struct Renderer<'a> {
    scene: &'a Scene,
    shader: &'a dyn Shader,
    pub max_depth: usize,
    /// Pixel rows per tile in [`render_parallel`](Self::render_parallel).
    pub tile_rows: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(scene: &'a Scene, shader: &'a dyn Shader, max_depth: usize) -> Renderer<'a> {
        Renderer { scene, shader, max_depth, tile_rows: 16 }
    }

    pub fn with_tile_rows(self, tile_rows: usize) -> Renderer<'a> {
        Renderer { tile_rows: tile_rows.max(1), ..self }
    }

    /// Traces the whole image as a single batch.
    pub fn render(&self) -> Result<Image, TraceError> {
        info!("rendering {}x{} as one batch, max depth {}", self.scene.width, self.scene.height, self.max_depth);

        let colors = self.render_rows(0..self.scene.height)?;
        Ok(Image::from_batch(self.scene.width, self.scene.height, &colors))
    }

    /// Traces row tiles concurrently. Tiles only share the read-only scene,
    /// so the result is identical to [`render`](Self::render).
    pub fn render_parallel(&self) -> Result<Image, TraceError> {
        let (width, height) = (self.scene.width, self.scene.height);
        if width == 0 || height == 0 {
            return Err(TraceError::EmptyImage { width, height });
        }

        let starts: Vec<usize> = (0..height).step_by(self.tile_rows).collect();
        info!(
            "rendering {}x{} in {} tiles of {} rows, max depth {}",
            width,
            height,
            starts.len(),
            self.tile_rows,
            self.max_depth
        );

        let tiles = starts
            .into_par_iter()
            .map(|start| self.render_rows(start..(start + self.tile_rows).min(height)))
            .collect::<Result<Vec<Vec3Batch>, TraceError>>()?;

        let colors: Vec3Batch = tiles.iter().flat_map(|tile| tile.iter()).collect();
        Ok(Image::from_batch(width, height, &colors))
    }

    /// Colors for the pixel rows in `rows`, row-major.
    pub fn render_rows(&self, rows: Range<usize>) -> Result<Vec3Batch, TraceError> {
        let rays = self.scene.camera.create_rays_for_rows(self.scene.width, self.scene.height, rows)?;
        trace(self.scene, self.shader, &rays, 0, self.max_depth)
    }
}
