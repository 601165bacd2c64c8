use glam::DVec3;

use crate::color::{self, Color};

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: DVec3,
    pub color: Color,
}

impl Light {
    /// White light at `position`.
    pub fn new(position: DVec3) -> Light {
        Light { position, color: color::WHITE }
    }

    pub fn with_color(self, color: Color) -> Light {
        Light { color, ..self }
    }
}
