mod palette;

pub use palette::{HsvPaletteDeriver, Palette, PaletteDeriver, SHADES};

use thiserror::Error;

pub type ColorResult<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color value: {0:?}")]
    Invalid(String),
    #[error("palette has no shade {0}")]
    UnknownShade(u16),
}

/// Decoded red/green/blue channels of a color.
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

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Space separated `r g b` triplet, usable as `rgb(var(--x) / <alpha>)`.
    pub fn to_channel_triplet(self) -> String {
        format!("{} {} {}", self.r, self.g, self.b)
    }
}

/// A parsed color with its alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

/// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)` and `rgba(..)` notations.
pub fn parse_color(value: &str) -> ColorResult<Rgba> {
    let trimmed = value.trim();
    let parsed = if let Some(hex) = trimmed.strip_prefix('#') {
        parse_hex(hex)
    } else {
        parse_rgb_function(trimmed)
    };
    parsed.ok_or_else(|| ColorError::Invalid(value.to_string()))
}

/// Channel decomposition of any supported color notation. Alpha is dropped.
pub fn to_channels(value: &str) -> ColorResult<Rgb> {
    parse_color(value).map(|color| color.rgb)
}

/// Returns `color` with its alpha replaced by `alpha`, as `#rrggbbaa`.
///
/// A fully opaque result collapses to `#rrggbb`.
pub fn with_alpha(value: &str, alpha: f64) -> ColorResult<String> {
    let rgb = to_channels(value)?;
    let alpha_byte = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    if alpha_byte == u8::MAX {
        return Ok(rgb.to_hex());
    }
    Ok(format!("{}{alpha_byte:02x}", rgb.to_hex()))
}

fn parse_hex(digits: &str) -> Option<Rgba> {
    if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    let pair = |index: usize| u8::from_str_radix(&digits[index..index + 2], 16).ok();
    let nibble = |index: usize| {
        u8::from_str_radix(&digits[index..=index], 16)
            .ok()
            .map(|value| value * 17)
    };
    match digits.len() {
        3 => Some(Rgba {
            rgb: Rgb::new(nibble(0)?, nibble(1)?, nibble(2)?),
            alpha: 1.0,
        }),
        6 => Some(Rgba {
            rgb: Rgb::new(pair(0)?, pair(2)?, pair(4)?),
            alpha: 1.0,
        }),
        8 => Some(Rgba {
            rgb: Rgb::new(pair(0)?, pair(2)?, pair(4)?),
            alpha: f64::from(pair(6)?) / 255.0,
        }),
        _ => None,
    }
}

fn parse_rgb_function(value: &str) -> Option<Rgba> {
    let lower = value.to_ascii_lowercase();
    let body = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let parts: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let channel = |raw: &str| -> Option<u8> {
        let value: f64 = raw.parse().ok()?;
        value.is_finite().then(|| value.clamp(0.0, 255.0).round() as u8)
    };
    let alpha = match parts.get(3) {
        Some(raw) => parse_alpha(raw)?,
        None => 1.0,
    };

    Some(Rgba {
        rgb: Rgb::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?),
        alpha,
    })
}

fn parse_alpha(raw: &str) -> Option<f64> {
    let value = match raw.strip_suffix('%') {
        Some(percent) => percent.parse::<f64>().ok()? / 100.0,
        None => raw.parse::<f64>().ok()?,
    };
    value.is_finite().then(|| value.clamp(0.0, 1.0))
}
