use crate::color::Color;

/// Shading coefficients of a surface. Weights are expected in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Color,
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub reflection: f64,
}

impl Material {
    pub fn new(color: Color) -> Material {
        Material { color, ..Material::default() }
    }

    pub fn with_ambient(self, ambient: f64) -> Material {
        Material { ambient, ..self }
    }

    pub fn with_diffuse(self, diffuse: f64) -> Material {
        Material { diffuse, ..self }
    }

    pub fn with_specular(self, specular: f64) -> Material {
        Material { specular, ..self }
    }

    pub fn with_reflection(self, reflection: f64) -> Material {
        Material { reflection, ..self }
    }
}

impl Default for Material {
    /// Blue, mostly diffuse, half reflective.
    fn default() -> Self {
        Material {
            color: Color::new(0.0, 0.0, 1.0),
            ambient: 0.05,
            diffuse: 0.5,
            specular: 0.5,
            reflection: 0.5,
        }
    }
}
