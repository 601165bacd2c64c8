use glam::DVec3;

use crate::vector::{Vec3Batch, Vector3};

/// A ray, or a batch of independent rays when `V` is [`Vec3Batch`].
///
/// The direction is normalized on construction.
#[derive(Debug, Clone)]
pub struct Ray<V: Vector3 = Vec3Batch> {
    pub origin: V,
    pub direction: V,
}

impl<V: Vector3> Ray<V> {
    pub fn new(origin: V, direction: V) -> Ray<V> {
        assert_eq!(
            origin.lanes(),
            direction.lanes(),
            "ray origin and direction must have the same lane count"
        );

        let direction = direction.normalize();
        Ray { origin, direction }
    }

    pub fn lanes(&self) -> usize {
        self.origin.lanes()
    }
}

impl Ray<DVec3> {
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

impl Ray<Vec3Batch> {
    /// Point along each ray at its own distance `t[i]`.
    pub fn at(&self, t: &[f64]) -> Vec3Batch {
        &self.origin + &self.direction.scale_lanes(t)
    }

    /// Keeps only the rays where `mask` holds.
    pub fn extract(&self, mask: &[bool]) -> Ray<Vec3Batch> {
        Ray { origin: self.origin.extract(mask), direction: self.direction.extract(mask) }
    }
}

/// Lifts a single ray into a batch of one.
impl From<Ray<DVec3>> for Ray<Vec3Batch> {
    fn from(ray: Ray<DVec3>) -> Self {
        Ray { origin: ray.origin.into(), direction: ray.direction.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_is_normalized() {
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 3.0, 4.0));
        assert!((Vector3::norm(&ray.direction) - 1.0).abs() < 1e-12);
        assert!(ray.at(5.0).abs_diff_eq(DVec3::new(0.0, 3.0, 4.0), 1e-12));
    }

    #[test]
    fn test_batch_at_uses_per_lane_distance() {
        let origin = Vec3Batch::zeros(2);
        let direction: Vec3Batch = [DVec3::X, DVec3::Y * 2.0].into_iter().collect();
        let ray = Ray::new(origin, direction);

        let points = ray.at(&[2.0, 3.0]);
        assert_eq!(points.get(0), DVec3::new(2.0, 0.0, 0.0));
        assert_eq!(points.get(1), DVec3::new(0.0, 3.0, 0.0));
    }

    #[test]
    fn test_single_ray_lifts_to_batch_of_one() {
        let single = Ray::new(DVec3::ONE, DVec3::Z);
        let batch: Ray<Vec3Batch> = single.clone().into();

        assert_eq!(batch.lanes(), 1);
        assert_eq!(batch.origin.get(0), single.origin);
        assert_eq!(batch.direction.get(0), single.direction);
    }
}
