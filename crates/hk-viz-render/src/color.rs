use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn hex(s: &str) -> Self {
        let s = s.strip_prefix('#').unwrap_or(s);
        let r = u8::from_str_radix(&s[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&s[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&s[4..6], 16).unwrap_or(0);
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }

    pub fn to_svg_fill(&self) -> String {
        if (self.a - 1.0).abs() < 1e-6 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
        }
    }

    /// Linear interpolation between two colors (for colormaps).
    pub fn lerp(a: Color, b: Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: (a.r as f64 * (1.0 - t) + b.r as f64 * t).round() as u8,
            g: (a.g as f64 * (1.0 - t) + b.g as f64 * t).round() as u8,
            b: (a.b as f64 * (1.0 - t) + b.b as f64 * t).round() as u8,
            a: a.a * (1.0 - t) + b.a * t,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_fill())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Color::hex(&s))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

// --- Palettes ---

pub const WONG: &[&str] =
    &["#0072b2", "#d55e00", "#56b4e9", "#e69f00", "#f0e442", "#009e73", "#cc79a7"];

pub const PETROFF6: &[&str] =
    &["#5790fc", "#f89c20", "#e42536", "#964a8b", "#9c9ca1", "#7a21dd"];

pub const TABLEAU10: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ab",
];

pub fn palette_colors(name: &str) -> Vec<Color> {
    let strs = match name {
        "petroff6" => PETROFF6,
        "tableau10" => TABLEAU10,
        _ => WONG,
    };
    strs.iter().map(|s| Color::hex(s)).collect()
}

// --- Sequential colormap for heatmap cells ---

const HEAT_STOPS: &[&str] = &["#30123b", "#28bceb", "#a2fc3c", "#fb8022", "#7a0403"];

/// Sequential colormap: 0.0 → dark violet, 1.0 → dark red.
pub fn heat(val: f64) -> Color {
    let v = val.clamp(0.0, 1.0);
    let n = HEAT_STOPS.len() - 1;
    let scaled = v * n as f64;
    let lo = (scaled.floor() as usize).min(n - 1);
    let t = scaled - lo as f64;
    Color::lerp(Color::hex(HEAT_STOPS[lo]), Color::hex(HEAT_STOPS[lo + 1]), t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        let c = Color::hex("#1D4ED8");
        assert_eq!(c.r, 0x1D);
        assert_eq!(c.g, 0x4E);
        assert_eq!(c.b, 0xD8);
        assert!((c.a - 1.0).abs() < 1e-9);
    }

    #[test]
    fn svg_fill_opaque() {
        let c = Color::rgb(29, 78, 216);
        assert_eq!(c.to_svg_fill(), "#1d4ed8");
    }

    #[test]
    fn svg_fill_alpha() {
        let c = Color::rgb(29, 78, 216).with_alpha(0.5);
        assert_eq!(c.to_svg_fill(), "rgba(29,78,216,0.500)");
    }

    #[test]
    fn palette_lookup() {
        assert_eq!(palette_colors("wong").len(), 7);
        assert_eq!(palette_colors("petroff6").len(), 6);
        assert_eq!(palette_colors("tableau10").len(), 10);
        // Unknown names fall back to the default palette.
        assert_eq!(palette_colors("unknown").len(), 7);
    }

    #[test]
    fn heat_extremes() {
        assert_eq!(heat(0.0), Color::hex(HEAT_STOPS[0]));
        assert_eq!(heat(1.0), Color::hex(HEAT_STOPS[HEAT_STOPS.len() - 1]));
        let mid = heat(0.5);
        assert!(mid.g > 100);
    }
}
