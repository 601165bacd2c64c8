use crate::vector::Vec3Batch;

/// Mirrors each direction about its normal: `v - 2 (v . n) n`.
pub fn reflect(v: &Vec3Batch, normal: &Vec3Batch) -> Vec3Batch {
    v.zip_map(normal, |v, n| v - n * 2.0 * v.dot(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_reflect_flips_normal_component() {
        let v: Vec3Batch = [DVec3::new(1.0, -1.0, 0.0), DVec3::new(0.0, 0.0, 1.0)].into_iter().collect();
        let n: Vec3Batch = [DVec3::Y, -DVec3::Z].into_iter().collect();

        let r = reflect(&v, &n);
        assert_eq!(r.get(0), DVec3::new(1.0, 1.0, 0.0));
        assert_eq!(r.get(1), DVec3::new(0.0, 0.0, -1.0));
    }
}
