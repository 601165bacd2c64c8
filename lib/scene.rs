use glam::DVec3;

use crate::camera::Camera;
use crate::color::Color;
use crate::error::TraceError;
use crate::light::Light;
use crate::material::Material;
use crate::surface::{same_surface, Surface};
use crate::surfaces::{CheckerSphere, Sphere};

/// Everything a render reads: camera, surfaces, one light and the image size.
///
/// Surface order is significant; a surface's position in `surfaces` is how the
/// shadow test finds its own distance among all candidates.
pub struct Scene {
    pub camera: Camera,
    pub surfaces: Vec<Box<dyn Surface>>,
    pub light: Light,
    pub width: usize,
    pub height: usize,
}

impl Scene {
    pub fn new(camera: Camera, surfaces: Vec<Box<dyn Surface>>, light: Light, width: usize, height: usize) -> Scene {
        Scene { camera, surfaces, light, width, height }
    }

    /// Position of `surface` in the surface list, compared by identity.
    pub fn index_of(&self, surface: &dyn Surface) -> Result<usize, TraceError> {
        self.surfaces
            .iter()
            .position(|candidate| same_surface(candidate.as_ref(), surface))
            .ok_or(TraceError::SurfaceNotInScene)
    }
}

/// Two small spheres resting on a huge checkered "ground" sphere, lit by a
/// yellow light from the upper left.
pub fn blood_moon(width: usize, height: usize) -> Scene {
    let surfaces: Vec<Box<dyn Surface>> = vec![
        Box::new(Sphere::new(
            DVec3::new(0.75, 0.0, 1.0),
            0.6,
            Material::new(Color::new(0.0, 0.0, 1.0)).with_reflection(0.3).with_diffuse(0.5).with_specular(0.5),
        )),
        Box::new(CheckerSphere::new(
            DVec3::new(0.0, -99999.5, 0.0),
            99999.0,
            Material::new(Color::new(0.75, 0.75, 0.75)).with_reflection(0.7),
        )),
        Box::new(Sphere::new(
            DVec3::new(-0.75, 0.0, 1.0),
            0.5,
            Material::new(Color::new(0.5, 0.25, 0.5)).with_reflection(0.7),
        )),
    ];

    let camera = Camera::new(DVec3::new(0.0, 0.35, -1.0));
    let light = Light::new(DVec3::new(5.0, 5.0, -10.0)).with_color(Color::new(1.0, 1.0, 0.0));

    return Scene::new(camera, surfaces, light, width, height);
}
