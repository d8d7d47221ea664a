//! Color parsing and hue rotation.
//!
//! Stamp colors enter the system as strict 6-hex-digit strings (`#RRGGBB`)
//! and are formatted back out the same way, uppercase. Hue rotation runs
//! through HSL: only the hue component moves, saturation and lightness are
//! preserved.

use image::Rgba;
use thiserror::Error;

/// Error type for color parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input string was empty
    #[error("empty color string")]
    Empty,
    /// Input string doesn't start with '#'
    #[error("color must start with '#'")]
    MissingHash,
    /// Invalid length (must be exactly 6 hex chars after #)
    #[error("invalid color length {0}, expected 6")]
    InvalidLength(usize),
    /// Contains non-hex characters
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to an opaque `image` pixel.
    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }
}

/// Parse a strict `#RRGGBB` color string.
///
/// # Examples
///
/// ```
/// use stampgen::color::{parse_color, Rgb};
///
/// let red = parse_color("#FF0000").unwrap();
/// assert_eq!(red, Rgb::new(255, 0, 0));
///
/// // Lowercase digits are accepted
/// assert_eq!(parse_color("#ff8000").unwrap(), Rgb::new(255, 128, 0));
///
/// // Short forms are not
/// assert!(parse_color("#F00").is_err());
/// ```
///
/// # Errors
///
/// Returns `ColorError` if the input is empty, unprefixed, the wrong length,
/// or contains non-hex characters.
pub fn parse_color(s: &str) -> Result<Rgb, ColorError> {
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    let hex = match s.strip_prefix('#') {
        Some(hex) => hex,
        None => return Err(ColorError::MissingHash),
    };

    if hex.len() != 6 {
        return Err(ColorError::InvalidLength(hex.len()));
    }

    let r = parse_hex_pair(&hex[0..2])?;
    let g = parse_hex_pair(&hex[2..4])?;
    let b = parse_hex_pair(&hex[4..6])?;
    Ok(Rgb::new(r, g, b))
}

/// Format a color as an uppercase `#RRGGBB` string.
pub fn format_color(color: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b)
}

/// Rotate a color's hue by `angle` degrees, keeping saturation and lightness.
///
/// Angles outside `0..360` (including negatives) wrap. This is a pure
/// function: same color and angle, same result.
///
/// # Examples
///
/// ```
/// use stampgen::color::{shift_hue, Rgb};
///
/// let red = Rgb::new(255, 0, 0);
/// assert_eq!(shift_hue(red, 120.0), Rgb::new(0, 255, 0));
/// assert_eq!(shift_hue(red, 180.0), Rgb::new(0, 255, 255));
/// assert_eq!(shift_hue(red, 0.0), red);
/// ```
pub fn shift_hue(color: Rgb, angle: f32) -> Rgb {
    let (h, s, l) = rgb_to_hsl(color);
    hsl_to_rgb((h + angle).rem_euclid(360.0), s, l)
}

/// Convert RGB to HSL color space.
///
/// Returns (hue, saturation, lightness) where:
/// - hue is in degrees (0-360)
/// - saturation is 0.0-1.0
/// - lightness is 0.0-1.0
pub fn rgb_to_hsl(color: Rgb) -> (f32, f32, f32) {
    let r = color.r as f32 / 255.0;
    let g = color.g as f32 / 255.0;
    let b = color.b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    // Lightness
    let l = (max + min) / 2.0;

    // Saturation
    let s = if delta < f32::EPSILON {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    // Hue
    let h = if delta < f32::EPSILON {
        0.0
    } else if (max - r).abs() < f32::EPSILON {
        60.0 * (((g - b) / delta) % 6.0)
    } else if (max - g).abs() < f32::EPSILON {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };

    // Normalize hue to 0-360
    let h = if h < 0.0 { h + 360.0 } else { h };

    (h, s, l)
}

/// Convert HSL back to RGB.
///
/// Inverse of [`rgb_to_hsl`] up to u8 quantization. Hue outside `0..360`
/// wraps.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

    let (r1, g1, b1) = if hp < 1.0 {
        (c, x, 0.0)
    } else if hp < 2.0 {
        (x, c, 0.0)
    } else if hp < 3.0 {
        (0.0, c, x)
    } else if hp < 4.0 {
        (0.0, x, c)
    } else if hp < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = l - c / 2.0;
    Rgb::new(
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

/// Parse a two-character hex string to u8 (0-255)
fn parse_hex_pair(s: &str) -> Result<u8, ColorError> {
    let mut value = 0u8;
    for c in s.chars() {
        let digit = match c {
            '0'..='9' => c as u8 - b'0',
            'a'..='f' => c as u8 - b'a' + 10,
            'A'..='F' => c as u8 - b'A' + 10,
            _ => return Err(ColorError::InvalidHex(c)),
        };
        value = value * 16 + digit;
    }
    Ok(value)
}
