pub mod checker;
pub mod sphere;

pub use checker::CheckerSphere;
pub use sphere::Sphere;
