use std::collections::BTreeMap;

use super::{to_channels, ColorError, ColorResult, Rgb};

/// Shade indices of every derived palette, lightest first.
pub const SHADES: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Shade index holding the unmodified input color.
const BASE_SHADE: u16 = 500;

const HUE_STEP: f64 = 2.0;
const SATURATION_STEP: f64 = 0.16;
const SATURATION_STEP_DARK: f64 = 0.05;
const BRIGHTNESS_STEP_LIGHT: f64 = 0.05;
const BRIGHTNESS_STEP_DARK: f64 = 0.15;
const LIGHT_STEPS: u32 = 5;
const DARK_STEPS: u32 = 5;

/// Brand colors the `recommended` mode snaps to before deriving shades.
const RECOMMENDED_BASES: [Rgb; 22] = [
    Rgb::new(0xef, 0x44, 0x44),
    Rgb::new(0xf9, 0x73, 0x16),
    Rgb::new(0xf5, 0x9e, 0x0b),
    Rgb::new(0xea, 0xb3, 0x08),
    Rgb::new(0x84, 0xcc, 0x16),
    Rgb::new(0x22, 0xc5, 0x5e),
    Rgb::new(0x10, 0xb9, 0x81),
    Rgb::new(0x14, 0xb8, 0xa6),
    Rgb::new(0x06, 0xb6, 0xd4),
    Rgb::new(0x0e, 0xa5, 0xe9),
    Rgb::new(0x3b, 0x82, 0xf6),
    Rgb::new(0x63, 0x66, 0xf1),
    Rgb::new(0x8b, 0x5c, 0xf6),
    Rgb::new(0xa8, 0x55, 0xf7),
    Rgb::new(0xd9, 0x46, 0xef),
    Rgb::new(0xec, 0x48, 0x99),
    Rgb::new(0xf4, 0x3f, 0x5e),
    Rgb::new(0x64, 0x74, 0x8b),
    Rgb::new(0x6b, 0x72, 0x80),
    Rgb::new(0x71, 0x71, 0x7a),
    Rgb::new(0x73, 0x73, 0x73),
    Rgb::new(0x78, 0x71, 0x6c),
];

/// Shade index to lowercase `#rrggbb`, iterated lightest to darkest.
pub type Palette = BTreeMap<u16, String>;

/// Expands one base color into a numbered palette.
pub trait PaletteDeriver {
    fn derive_palette(&self, color: &str, recommended: bool) -> ColorResult<Palette>;

    fn color_at_shade(&self, color: &str, shade: u16, recommended: bool) -> ColorResult<String> {
        self.derive_palette(color, recommended)?
            .remove(&shade)
            .ok_or(ColorError::UnknownShade(shade))
    }
}

/// Steps hue, saturation and brightness away from the base color in HSV space.
#[derive(Debug, Clone, Copy, Default)]
pub struct HsvPaletteDeriver;

impl PaletteDeriver for HsvPaletteDeriver {
    fn derive_palette(&self, color: &str, recommended: bool) -> ColorResult<Palette> {
        let mut base = to_channels(color)?;
        if recommended {
            base = nearest_recommended(base);
        }
        let hsv = Hsv::from_rgb(base);

        let mut palette = Palette::new();
        let mut shades = SHADES.iter().copied();
        for step in (1..=LIGHT_STEPS).rev() {
            if let Some(shade) = shades.next() {
                palette.insert(shade, hsv.step(step, true).to_rgb().to_hex());
            }
        }
        if let Some(shade) = shades.next() {
            debug_assert_eq!(shade, BASE_SHADE);
            palette.insert(shade, base.to_hex());
        }
        for step in 1..=DARK_STEPS {
            if let Some(shade) = shades.next() {
                palette.insert(shade, hsv.step(step, false).to_rgb().to_hex());
            }
        }
        Ok(palette)
    }
}

fn nearest_recommended(color: Rgb) -> Rgb {
    let distance = |other: &Rgb| {
        let dr = i32::from(color.r) - i32::from(other.r);
        let dg = i32::from(color.g) - i32::from(other.g);
        let db = i32::from(color.b) - i32::from(other.b);
        dr * dr + dg * dg + db * db
    };
    RECOMMENDED_BASES
        .iter()
        .min_by_key(|candidate| distance(*candidate))
        .copied()
        .unwrap_or(color)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Hsv {
    /// Degrees in `0.0..360.0`.
    h: f64,
    s: f64,
    v: f64,
}

impl Hsv {
    fn from_rgb(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let sector = if delta == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        let h = sector * 60.0;
        let s = if max == 0.0 { 0.0 } else { delta / max };

        Self { h, s, v: max }
    }

    fn to_rgb(self) -> Rgb {
        let c = self.v * self.s;
        let sector = self.h / 60.0;
        let x = c * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = self.v - c;
        let channel = |value: f64| ((value + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(channel(r), channel(g), channel(b))
    }

    fn step(self, step: u32, light: bool) -> Self {
        Self {
            h: self.stepped_hue(step, light),
            s: self.stepped_saturation(step, light),
            v: self.stepped_value(step, light),
        }
    }

    fn stepped_hue(self, step: u32, light: bool) -> f64 {
        let hue = self.h.round();
        let offset = HUE_STEP * f64::from(step);
        // Warm hues drift toward yellow when lightened; cool hues toward blue.
        let shifted = if (60.0..=240.0).contains(&hue) == light {
            hue - offset
        } else {
            hue + offset
        };
        shifted.rem_euclid(360.0)
    }

    fn stepped_saturation(self, step: u32, light: bool) -> f64 {
        if self.h == 0.0 && self.s == 0.0 {
            return self.s;
        }
        let step_f = f64::from(step);
        let mut saturation = if light {
            self.s - SATURATION_STEP * step_f
        } else if step == DARK_STEPS {
            self.s + SATURATION_STEP
        } else {
            self.s + SATURATION_STEP_DARK * step_f
        };
        saturation = saturation.min(1.0);
        if light && step == LIGHT_STEPS && saturation > 0.1 {
            saturation = 0.1;
        }
        round2(saturation.max(0.06))
    }

    fn stepped_value(self, step: u32, light: bool) -> f64 {
        let step_f = f64::from(step);
        let value = if light {
            self.v + BRIGHTNESS_STEP_LIGHT * step_f
        } else {
            self.v - BRIGHTNESS_STEP_DARK * step_f
        };
        round2(value.clamp(0.0, 1.0))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_palette_covers_every_shade() {
        let palette = HsvPaletteDeriver.derive_palette("#00d4ff", false).unwrap();
        let shades: Vec<u16> = palette.keys().copied().collect();
        assert_eq!(shades, SHADES.to_vec());
        assert!(palette.values().all(|hex| hex.len() == 7 && hex.starts_with('#')));
    }

    #[test]
    fn base_shade_is_the_input_color() {
        let palette = HsvPaletteDeriver.derive_palette("#00D4FF", false).unwrap();
        assert_eq!(palette[&500], "#00d4ff");

        let palette = HsvPaletteDeriver
            .derive_palette("rgb(255, 51, 102)", false)
            .unwrap();
        assert_eq!(palette[&500], "#ff3366");
    }

    #[test]
    fn shades_get_darker_toward_the_end() {
        let palette = HsvPaletteDeriver.derive_palette("#00d4ff", false).unwrap();
        let brightness = |hex: &str| {
            let rgb = to_channels(hex).unwrap();
            u32::from(rgb.r) + u32::from(rgb.g) + u32::from(rgb.b)
        };
        assert!(brightness(&palette[&50]) > brightness(&palette[&500]));
        assert!(brightness(&palette[&500]) > brightness(&palette[&900]));
    }

    #[test]
    fn derivation_is_deterministic() {
        let first = HsvPaletteDeriver.derive_palette("#ffaa00", false).unwrap();
        let second = HsvPaletteDeriver.derive_palette("#ffaa00", false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn grayscale_input_keeps_zero_saturation() {
        let palette = HsvPaletteDeriver.derive_palette("#808080", false).unwrap();
        for hex in palette.values() {
            let rgb = to_channels(hex).unwrap();
            assert_eq!(rgb.r, rgb.g);
            assert_eq!(rgb.g, rgb.b);
        }
    }

    #[test]
    fn recommended_palette_snaps_to_a_reference_color() {
        let palette = HsvPaletteDeriver.derive_palette("#00d4ff", true).unwrap();
        let base = to_channels(&palette[&500]).unwrap();
        assert!(RECOMMENDED_BASES.contains(&base));
    }

    #[test]
    fn color_at_shade_reads_from_the_palette() {
        let palette = HsvPaletteDeriver.derive_palette("#00ff88", false).unwrap();
        let shade = HsvPaletteDeriver
            .color_at_shade("#00ff88", 700, false)
            .unwrap();
        assert_eq!(shade, palette[&700]);
    }

    #[test]
    fn color_at_shade_rejects_unknown_shade() {
        let err = HsvPaletteDeriver
            .color_at_shade("#00ff88", 550, false)
            .unwrap_err();
        assert_eq!(err, ColorError::UnknownShade(550));
    }

    #[test]
    fn invalid_base_color_is_an_error() {
        let err = HsvPaletteDeriver.derive_palette("cyan", false).unwrap_err();
        assert_eq!(err, ColorError::Invalid("cyan".to_string()));
    }
}
