use glam::DVec3;

use crate::material::Material;
use crate::ray::Ray;
use crate::surface::Surface;
use crate::surfaces::sphere::Sphere;
use crate::vector::Vec3Batch;

/// A sphere painted with a checkerboard on the (x, z) plane.
///
/// Cells are half a unit wide. Cells where `floor(2x)` and `floor(2z)` share
/// parity show the material color; the others are black.
#[derive(Debug, Clone)]
pub struct CheckerSphere {
    pub sphere: Sphere,
}

impl CheckerSphere {
    pub fn new(center: DVec3, radius: f64, material: Material) -> CheckerSphere {
        CheckerSphere { sphere: Sphere::new(center, radius, material) }
    }

    /// Per-lane checker cell test.
    pub fn pattern(point: &Vec3Batch) -> Vec<bool> {
        point.iter().map(|p| cell_parity(p.x) == cell_parity(p.z)).collect()
    }
}

fn cell_parity(coordinate: f64) -> f64 {
    (coordinate * 2.0).floor().rem_euclid(2.0)
}

impl Surface for CheckerSphere {
    fn intersects(&self, ray: &Ray) -> Vec<f64> {
        self.sphere.intersects(ray)
    }

    fn normal(&self, point: &Vec3Batch) -> Vec3Batch {
        self.sphere.normal(point)
    }

    fn color_at(&self, point: &Vec3Batch) -> Vec3Batch {
        Vec3Batch::splat(self.sphere.material.color, point.len()).masked(&CheckerSphere::pattern(point))
    }

    fn material(&self) -> &Material {
        &self.sphere.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn points(coords: &[(f64, f64)]) -> Vec3Batch {
        coords.iter().map(|&(x, z)| DVec3::new(x, 0.0, z)).collect()
    }

    #[test]
    fn test_pattern_flips_at_half_unit_boundaries() {
        let p = points(&[(0.1, 0.1), (0.6, 0.1), (0.6, 0.6), (0.49, 0.51), (0.5, 0.5)]);
        assert_eq!(CheckerSphere::pattern(&p), vec![true, false, true, false, true]);
    }

    #[test]
    fn test_pattern_uses_floored_parity_for_negatives() {
        // floor(-0.2) = -1 is odd, floor(0.2) = 0 is even
        let p = points(&[(-0.1, 0.1), (-0.1, -0.1), (-0.6, 0.1), (-0.6, -0.6)]);
        assert_eq!(CheckerSphere::pattern(&p), vec![false, true, true, true]);
    }

    #[test]
    fn test_color_alternates_between_base_and_black() {
        let color = Color::new(0.75, 0.75, 0.75);
        let checker = CheckerSphere::new(DVec3::ZERO, 1.0, Material::new(color));

        let colors = checker.color_at(&points(&[(0.1, 0.1), (0.6, 0.1)]));
        assert_eq!(colors.get(0), color);
        assert_eq!(colors.get(1), DVec3::ZERO);
    }

    #[test]
    fn test_geometry_delegates_to_sphere() {
        let checker = CheckerSphere::new(DVec3::new(0.0, 0.0, 5.0), 1.0, Material::default());
        let ray: Ray = Ray::new(DVec3::ZERO, DVec3::Z).into();

        assert_eq!(checker.intersects(&ray), checker.sphere.intersects(&ray));
        assert_eq!(checker.material(), &Material::default());
    }
}
