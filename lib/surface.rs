use crate::material::Material;
use crate::ray::Ray;
use crate::vector::Vec3Batch;

/// Geometry that rays can hit.
///
/// Every method works on whole batches: lane `i` of the result belongs to
/// lane `i` of the input.
pub trait Surface: Send + Sync {
    /// Distance to the nearest forward hit per ray, `f64::INFINITY` on a miss.
    fn intersects(&self, ray: &Ray) -> Vec<f64>;

    /// Outward unit normal at each point, assumed to lie on the surface.
    fn normal(&self, point: &Vec3Batch) -> Vec3Batch;

    fn color_at(&self, point: &Vec3Batch) -> Vec3Batch;

    fn material(&self) -> &Material;
}

/// True when both references point at the same surface object.
pub fn same_surface(a: &dyn Surface, b: &dyn Surface) -> bool {
    std::ptr::addr_eq(a, b)
}
