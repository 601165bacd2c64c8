use thiserror::Error;

/// Failures raised while building batches or shading a scene.
///
/// None of these are transient: each one points at malformed input or a
/// broken precondition in the caller.
#[derive(Debug, Error, PartialEq)]
pub enum TraceError {
    #[error("surface being shaded is not part of the scene's surface list")]
    SurfaceNotInScene,

    #[error("batch components have mismatched lengths (x: {x}, y: {y}, z: {z})")]
    ShapeMismatch { x: usize, y: usize, z: usize },

    #[error("invalid hex color `{0}`, expected #RRGGBB")]
    InvalidHexColor(String),

    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: usize, height: usize },
}
