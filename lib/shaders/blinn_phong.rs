use log::trace;

use crate::color;
use crate::error::TraceError;
use crate::mask;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::shader::{ShadeContext, Shader};
use crate::surface::Surface;
use crate::util::reflect;
use crate::vector::{Vec3Batch, Vector3};

/// Ambient + Lambert diffuse + Blinn-Phong specular, hard shadows from the
/// single scene light and one mirror bounce per depth level.
///
/// The shadow mask is applied to the whole accumulated color, ambient term
/// included, so points in shadow come out black.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinnPhongShader {
    /// Exponent of the specular highlight.
    pub shininess: f64,
    /// Offset along the normal for secondary ray origins, keeps them from
    /// hitting the surface they start on.
    pub epsilon: f64,
}

impl Default for BlinnPhongShader {
    fn default() -> Self {
        BlinnPhongShader { shininess: 50.0, epsilon: 1e-4 }
    }
}

impl BlinnPhongShader {
    /// Lit mask for rays leaving `surface` toward the light: a lane is lit
    /// when no surface is strictly closer along its shadow ray than `surface`
    /// itself. The surface must be part of `scene`.
    pub fn shadows(&self, scene: &Scene, surface: &dyn Surface, shadow_ray: &Ray) -> Result<Vec<bool>, TraceError> {
        let own = scene.index_of(surface)?;

        let distances: Vec<Vec<f64>> = scene.surfaces.iter().map(|s| s.intersects(shadow_ray)).collect();
        let closest = distances
            .iter()
            .fold(vec![f64::INFINITY; shadow_ray.lanes()], |acc, d| mask::minimum(&acc, d));

        Ok(mask::lanes_equal(&distances[own], &closest))
    }
}

impl Shader for BlinnPhongShader {
    fn shade(&self, ctx: &ShadeContext) -> Result<Vec3Batch, TraceError> {
        let scene = ctx.scene;
        let material = ctx.surface.material();
        let lanes = ctx.ray.lanes();

        let point = ctx.ray.at(ctx.distance);
        let normal = ctx.surface.normal(&point);
        let to_light = (scene.light.position - &point).normalize();
        let to_camera = (scene.camera.origin - &point).normalize();
        let bounce_origin = &point + &(&normal * self.epsilon);

        let mut color = Vec3Batch::splat(color::WHITE * material.ambient, lanes);

        let lit = self.shadows(scene, ctx.surface, &Ray::new(bounce_origin.clone(), to_light.clone()))?;
        trace!("{} of {} lanes lit at depth {}", mask::count(&lit), lanes, ctx.depth);

        // Lambert
        let lambert: Vec<f64> = normal.dot(&to_light).iter().map(|&d| d.max(0.0)).collect();
        color += ctx.surface.color_at(&point).scale(material.diffuse).scale_lanes(&lambert);

        // Blinn-Phong
        let half_vector = (&to_light + &to_camera).normalize();
        let highlight: Vec<f64> =
            normal.dot(&half_vector).iter().map(|&d| d.clamp(0.0, 1.0).powf(self.shininess)).collect();
        color += Vec3Batch::from_scaled(scene.light.color * material.specular, &highlight);

        if ctx.depth < ctx.max_depth {
            let reflected = Ray::new(bounce_origin, reflect(&ctx.ray.direction, &normal).normalize());
            color += (ctx.raytrace)(&reflected, ctx.depth + 1)?.scale(material.reflection);
        }

        Ok(color.masked(&lit))
    }
}
