//! Color parsing and conversion, plus CSS gradient building

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ToolError;

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Uppercase `#RRGGBB` form
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// An HSL color with the components rounded to whole degrees / percents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl std::fmt::Display for Hsl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Parse a `#rrggbb` hex color (case-insensitive, leading `#` required)
pub fn parse_hex(hex: &str) -> Result<Rgb, ToolError> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| ToolError::InvalidColor(hex.to_string()))?;
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ToolError::InvalidColor(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).expect("validated hex digits")
    };
    Ok(Rgb {
        r: channel(0..2),
        g: channel(2..4),
        b: channel(4..6),
    })
}

/// Convert RGB to HSL
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl {
        h: (h * 360.0).round() as u16,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

/// A color in all three display formats offered by the picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorFormats {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
}

/// HEX / RGB / HSL renderings of a `#rrggbb` color
pub fn color_formats(hex: &str) -> Result<ColorFormats, ToolError> {
    let rgb = parse_hex(hex)?;
    Ok(ColorFormats {
        hex: rgb.to_hex(),
        rgb: rgb.to_string(),
        hsl: rgb_to_hsl(rgb).to_string(),
    })
}

/// Build a two-stop CSS linear-gradient value. Both stops must be valid
/// `#rrggbb` colors; they are passed through verbatim.
pub fn gradient_css(angle: u16, start: &str, end: &str) -> Result<String, ToolError> {
    parse_hex(start)?;
    parse_hex(end)?;
    Ok(format!("linear-gradient({}deg, {}, {})", angle, start, end))
}

/// A random color for the gradient randomizer
pub fn random_color(rng: &mut impl Rng) -> Rgb {
    Rgb {
        r: rng.gen(),
        g: rng.gen(),
        b: rng.gen(),
    }
}

/// A random angle in `0..360` degrees
pub fn random_angle(rng: &mut impl Rng) -> u16 {
    rng.gen_range(0..360)
}
