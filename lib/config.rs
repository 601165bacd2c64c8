//! TOML scene descriptions.
//!
//! ```toml
//! width = 640
//! height = 360
//! max_depth = 2
//!
//! [camera]
//! position = [0.0, 0.35, -1.0]
//!
//! [light]
//! position = [5.0, 5.0, -10.0]
//! color = "#FFFF00"
//!
//! [[surfaces]]
//! kind = "sphere"
//! center = [0.75, 0.0, 1.0]
//! radius = 0.6
//! material = { color = [0.0, 0.0, 1.0], reflection = 0.3 }
//!
//! [[surfaces]]
//! kind = "checker"
//! center = [0.0, -99999.5, 0.0]
//! radius = 99999.0
//! ```

use std::path::{Path, PathBuf};

use glam::DVec3;
use serde::Deserialize;
use thiserror::Error;

use crate::camera::Camera;
use crate::color::{self, Color};
use crate::error::TraceError;
use crate::light::Light;
use crate::material::Material;
use crate::scene::Scene;
use crate::surface::Surface;
use crate::surfaces::{CheckerSphere, Sphere};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scene file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scene description: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Color(#[from] TraceError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_width")]
    pub width: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    pub camera: CameraConfig,
    pub light: LightConfig,
    #[serde(default)]
    pub surfaces: Vec<SurfaceConfig>,
}

fn default_width() -> usize {
    640
}

fn default_height() -> usize {
    360
}

fn default_max_depth() -> usize {
    2
}

#[derive(Debug, Clone, Deserialize)]
pub struct CameraConfig {
    pub position: [f64; 3],
}

#[derive(Debug, Clone, Deserialize)]
pub struct LightConfig {
    pub position: [f64; 3],
    #[serde(default)]
    pub color: Option<ColorConfig>,
}

/// `"#RRGGBB"` or `[r, g, b]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ColorConfig {
    Hex(String),
    Rgb([f64; 3]),
}

impl ColorConfig {
    pub fn to_color(&self) -> Result<Color, TraceError> {
        match self {
            ColorConfig::Hex(hex) => color::from_hex(hex),
            ColorConfig::Rgb(rgb) => Ok(Color::from_array(*rgb)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SurfaceConfig {
    Sphere {
        center: [f64; 3],
        radius: f64,
        #[serde(default)]
        material: Option<MaterialConfig>,
    },
    Checker {
        center: [f64; 3],
        radius: f64,
        #[serde(default)]
        material: Option<MaterialConfig>,
    },
}

/// Unset fields fall back to [`Material::default`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MaterialConfig {
    pub color: Option<ColorConfig>,
    pub ambient: Option<f64>,
    pub diffuse: Option<f64>,
    pub specular: Option<f64>,
    pub reflection: Option<f64>,
}

impl MaterialConfig {
    pub fn to_material(&self) -> Result<Material, TraceError> {
        let defaults = Material::default();
        let color = match &self.color {
            Some(color) => color.to_color()?,
            None => defaults.color,
        };

        Ok(Material::new(color)
            .with_ambient(self.ambient.unwrap_or(defaults.ambient))
            .with_diffuse(self.diffuse.unwrap_or(defaults.diffuse))
            .with_specular(self.specular.unwrap_or(defaults.specular))
            .with_reflection(self.reflection.unwrap_or(defaults.reflection)))
    }
}

fn resolve_material(material: &Option<MaterialConfig>) -> Result<Material, TraceError> {
    match material {
        Some(material) => material.to_material(),
        None => Ok(Sphere::default_material()),
    }
}

impl SurfaceConfig {
    pub fn build(&self) -> Result<Box<dyn Surface>, TraceError> {
        let surface: Box<dyn Surface> = match self {
            SurfaceConfig::Sphere { center, radius, material } => {
                Box::new(Sphere::new(DVec3::from_array(*center), *radius, resolve_material(material)?))
            }
            SurfaceConfig::Checker { center, radius, material } => {
                Box::new(CheckerSphere::new(DVec3::from_array(*center), *radius, resolve_material(material)?))
            }
        };
        Ok(surface)
    }
}

impl SceneConfig {
    pub fn from_toml_str(source: &str) -> Result<SceneConfig, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<SceneConfig, ConfigError> {
        let source =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        SceneConfig::from_toml_str(&source)
    }

    pub fn build(&self) -> Result<Scene, ConfigError> {
        let surfaces = self.surfaces.iter().map(SurfaceConfig::build).collect::<Result<Vec<_>, _>>()?;

        let light_color = match &self.light.color {
            Some(color) => color.to_color()?,
            None => color::WHITE,
        };
        let light = Light::new(DVec3::from_array(self.light.position)).with_color(light_color);
        let camera = Camera::new(DVec3::from_array(self.camera.position));

        Ok(Scene::new(camera, surfaces, light, self.width, self.height))
    }
}
