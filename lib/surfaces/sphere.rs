use glam::DVec3;

use crate::color::Color;
use crate::mask;
use crate::material::Material;
use crate::ray::Ray;
use crate::surface::Surface;
use crate::vector::{Vec3Batch, Vector3};

#[derive(Debug, Clone)]
pub struct Sphere {
    pub center: DVec3,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: DVec3, radius: f64, material: Material) -> Sphere {
        return Sphere { center, radius, material };
    }

    /// Material used when a sphere is described without one: the default
    /// coefficients on a red base color.
    pub fn default_material() -> Material {
        Material::new(Color::new(1.0, 0.0, 0.0))
    }
}

impl Surface for Sphere {
    fn intersects(&self, ray: &Ray) -> Vec<f64> {
        // |O + tD - C|^2 = r^2 with |D| = 1
        let oc = &ray.origin - self.center;
        let b: Vec<f64> = oc.dot(&ray.direction).iter().map(|&d| 2.0 * d).collect();
        let c: Vec<f64> = oc.dot(&oc).iter().map(|&d| d - self.radius * self.radius).collect();

        let discriminant: Vec<f64> = b.iter().zip(&c).map(|(&b, &c)| b * b - 4.0 * c).collect();
        let discriminant_sqrt: Vec<f64> = discriminant.iter().map(|&d| d.max(0.0).sqrt()).collect();

        let root_lower: Vec<f64> = b.iter().zip(&discriminant_sqrt).map(|(&b, &s)| (-b - s) / 2.0).collect();
        let root_upper: Vec<f64> = b.iter().zip(&discriminant_sqrt).map(|(&b, &s)| (-b + s) / 2.0).collect();

        let lower_valid: Vec<bool> = root_lower.iter().zip(&root_upper).map(|(&l, &u)| l > 0.0 && l < u).collect();
        let root = mask::select(&lower_valid, &root_lower, &root_upper);

        let hit: Vec<bool> = discriminant.iter().zip(&root).map(|(&d, &t)| d > 0.0 && t > 0.0).collect();
        mask::select(&hit, &root, &vec![f64::INFINITY; root.len()])
    }

    fn normal(&self, point: &Vec3Batch) -> Vec3Batch {
        (point - self.center).normalize()
    }

    fn color_at(&self, point: &Vec3Batch) -> Vec3Batch {
        Vec3Batch::splat(self.material.color, point.len())
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere_at(center: DVec3, radius: f64) -> Sphere {
        Sphere::new(center, radius, Sphere::default_material())
    }

    fn single(origin: DVec3, direction: DVec3) -> Ray {
        Ray::new(origin, direction).into()
    }

    #[test]
    fn test_ray_sphere_through_center() {
        let sphere = unit_sphere_at(DVec3::new(0.0, 0.0, 10.0), 2.0);
        let hits = sphere.intersects(&single(DVec3::ZERO, DVec3::Z));
        assert!((hits[0] - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_sphere_miss() {
        let sphere = unit_sphere_at(DVec3::new(0.0, 0.0, 10.0), 2.0);
        let hits = sphere.intersects(&single(DVec3::new(0.0, 5.0, 0.0), DVec3::Z));
        assert_eq!(hits[0], f64::INFINITY);
    }

    #[test]
    fn test_ray_sphere_from_inside() {
        let sphere = unit_sphere_at(DVec3::ZERO, 5.0);
        let hits = sphere.intersects(&single(DVec3::new(1.0, 0.0, 0.0), DVec3::X));
        assert!((hits[0] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_sphere_behind_origin() {
        let sphere = unit_sphere_at(DVec3::new(0.0, 0.0, -10.0), 2.0);
        let hits = sphere.intersects(&single(DVec3::ZERO, DVec3::Z));
        assert_eq!(hits[0], f64::INFINITY);
    }

    #[test]
    fn test_ray_sphere_tangent_counts_as_miss() {
        let sphere = unit_sphere_at(DVec3::ZERO, 1.0);
        let hits = sphere.intersects(&single(DVec3::new(1.0, -5.0, 0.0), DVec3::Y));
        assert_eq!(hits[0], f64::INFINITY);
    }

    #[test]
    fn test_mixed_batch_matches_single_rays() {
        let sphere = unit_sphere_at(DVec3::new(0.0, 0.0, 10.0), 2.0);
        let origins = [DVec3::ZERO, DVec3::new(0.0, 5.0, 0.0), DVec3::new(0.0, 0.0, 10.0), DVec3::new(1.0, 0.0, 0.0)];
        let directions = [DVec3::Z, DVec3::Z, DVec3::X, DVec3::new(0.0, 0.0, 1.0)];

        let batch = Ray::new(origins.into_iter().collect(), directions.into_iter().collect::<Vec3Batch>());
        let hits = sphere.intersects(&batch);

        assert_eq!(hits.len(), 4);
        for i in 0..4 {
            let expected = sphere.intersects(&single(origins[i], directions[i]))[0];
            assert_eq!(hits[i], expected);
        }
        assert!((hits[0] - 8.0).abs() < 1e-10);
        assert_eq!(hits[1], f64::INFINITY);
        assert!((hits[2] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_normal_points_outward() {
        let sphere = unit_sphere_at(DVec3::new(1.0, 1.0, 1.0), 2.0);
        let points: Vec3Batch = [DVec3::new(3.0, 1.0, 1.0), DVec3::new(1.0, -1.0, 1.0)].into_iter().collect();
        let normals = sphere.normal(&points);

        assert_eq!(normals.get(0), DVec3::X);
        assert_eq!(normals.get(1), -DVec3::Y);
    }

    #[test]
    fn test_color_at_is_material_color() {
        let sphere = unit_sphere_at(DVec3::ZERO, 1.0);
        let colors = sphere.color_at(&Vec3Batch::zeros(3));
        assert!(colors.iter().all(|c| c == Color::new(1.0, 0.0, 0.0)));
    }
}
