use std::ops::Range;

use glam::DVec3;

use crate::error::TraceError;
use crate::ray::Ray;
use crate::vector::Vec3Batch;

/// Pinhole camera looking down +z through a screen on the z = 0 plane.
///
/// The screen spans x in [-1, 1] and keeps the image aspect ratio vertically,
/// lifted by 0.25 so the horizon sits below the image center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub origin: DVec3,
}

impl Camera {
    pub fn new(origin: DVec3) -> Camera {
        return Camera { origin };
    }

    /// One batched primary ray per pixel. Pixel `(i, j)` is lane `j * width + i`.
    pub fn create_rays(&self, width: usize, height: usize) -> Result<Ray, TraceError> {
        self.create_rays_for_rows(width, height, 0..height)
    }

    /// Primary rays for the pixel rows in `rows` only. Lanes are laid out the
    /// same way as in [`create_rays`](Self::create_rays), starting at `rows.start`.
    /// Rows past the image or an out-of-order range yield fewer or no rays.
    pub fn create_rays_for_rows(&self, width: usize, height: usize, rows: Range<usize>) -> Result<Ray, TraceError> {
        if width == 0 || height == 0 {
            return Err(TraceError::EmptyImage { width, height });
        }

        let aspect_ratio = width as f64 / height as f64;
        let xs = linspace(-1.0, 1.0, width);
        let ys = linspace(1.0 / aspect_ratio + 0.25, -1.0 / aspect_ratio + 0.25, height);

        let end = rows.end.min(height);
        let start = rows.start.min(end);
        let screen: Vec3Batch = ys[start..end]
            .iter()
            .flat_map(|&y| xs.iter().map(move |&x| DVec3::new(x, y, 0.0)))
            .collect();

        let origin = Vec3Batch::splat(self.origin, screen.len());
        let direction = &screen - self.origin;

        return Ok(Ray::new(origin, direction));
    }
}

/// `count` evenly spaced samples from `start` to `stop`, both included.
fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![start];
    }

    let step = (stop - start) / (count - 1) as f64;
    let mut samples: Vec<f64> = (0..count).map(|i| i as f64 * step + start).collect();
    if let Some(last) = samples.last_mut() {
        *last = stop;
    }
    samples
}
