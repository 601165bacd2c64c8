use glam::DVec3;

use crate::error::TraceError;

/// RGB triplet, nominally in [0, 1] per channel.
pub type Color = DVec3;

pub const WHITE: Color = DVec3::ONE;
pub const BLACK: Color = DVec3::ZERO;

/// Parses `#RRGGBB` into a color with each channel scaled to [0, 1].
pub fn from_hex(hex: &str) -> Result<Color, TraceError> {
    let invalid = || TraceError::InvalidHexColor(hex.to_string());

    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }

    let channel = |i: usize| -> Result<f64, TraceError> {
        let value = u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid())?;
        Ok(value as f64 / 255.0)
    };

    Ok(Color::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Converts to 8-bit RGB, clamping each channel into [0, 1] and truncating.
pub fn to_rgb8(color: Color) -> [u8; 3] {
    let c = color.clamp(DVec3::ZERO, DVec3::ONE) * 255.0;
    [c.x as u8, c.y as u8, c.z as u8]
}
