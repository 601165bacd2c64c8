use crate::error::TraceError;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::surface::Surface;
use crate::vector::Vec3Batch;

/// Traces a batch of rays through the whole scene at the given depth.
///
/// Shaders call back into this for secondary rays without knowing how the
/// scene is traversed.
pub type Raytrace<'a> = dyn Fn(&Ray, usize) -> Result<Vec3Batch, TraceError> + 'a;

/// The rays of one batch that all hit the same surface.
pub struct ShadeContext<'a> {
    pub ray: &'a Ray,
    pub surface: &'a dyn Surface,
    /// Hit distance per ray.
    pub distance: &'a [f64],
    pub scene: &'a Scene,
    pub raytrace: &'a Raytrace<'a>,
    pub depth: usize,
    pub max_depth: usize,
}

/// Turns surface hits into colors.
pub trait Shader: Send + Sync {
    /// One color per ray in `ctx.ray`.
    fn shade(&self, ctx: &ShadeContext) -> Result<Vec3Batch, TraceError>;
}
