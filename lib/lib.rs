//! Batched Whitted-style ray tracing: spheres under one point light with
//! Lambert diffuse, Blinn-Phong highlights, hard shadows and depth-limited
//! mirror reflections. Whole images are traced as structure-of-arrays batches
//! with boolean masks in place of per-pixel branches.

pub mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod light;
pub mod mask;
pub mod material;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shader;
pub mod shaders;
pub mod surface;
pub mod surfaces;
pub mod util;
pub mod vector;

pub use error::TraceError;
pub use ray::Ray;
pub use render::{trace, Image, Renderer};
pub use scene::Scene;
pub use vector::{Vec3Batch, Vector3};
