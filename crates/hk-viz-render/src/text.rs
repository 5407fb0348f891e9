use crate::primitives::FontWeight;

#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub ascent: f64,
}

const ASCENT_FRAC: f64 = 0.76;
const BOLD_FACTOR: f64 = 1.06;

/// Approximate text metrics in points from per-character advance widths
/// of a generic sans-serif face. No font binaries are shipped; margins only
/// need label widths to within a few points.
pub fn measure_text(text: &str, size_pt: f64, weight: FontWeight) -> TextMetrics {
    let mut em: f64 = 0.0;
    for ch in text.chars() {
        em += char_advance(ch);
    }
    if weight == FontWeight::Bold {
        em *= BOLD_FACTOR;
    }
    TextMetrics { width: em * size_pt, height: size_pt, ascent: ASCENT_FRAC * size_pt }
}

/// Advance width in em for a generic sans-serif face.
fn char_advance(ch: char) -> f64 {
    match ch {
        'i' | 'j' | 'l' | '!' | '|' | '\'' | '.' | ',' | ':' | ';' => 0.28,
        'f' | 't' | 'r' | '(' | ')' | '[' | ']' | '/' | '\\' | ' ' => 0.33,
        'm' | 'w' | 'M' | 'W' | '@' => 0.85,
        '\u{2212}' | '+' | '=' | '<' | '>' | '~' => 0.58,
        'A'..='Z' => 0.67,
        '0'..='9' | '-' | '_' => 0.56,
        _ => 0.52,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longer_text_is_wider() {
        let short = measure_text("ab", 10.0, FontWeight::Regular);
        let long = measure_text("abcdef", 10.0, FontWeight::Regular);
        assert!(long.width > short.width);
    }

    #[test]
    fn width_scales_with_size() {
        let small = measure_text("Events", 8.0, FontWeight::Regular);
        let big = measure_text("Events", 16.0, FontWeight::Regular);
        assert!((big.width - 2.0 * small.width).abs() < 1e-9);
    }

    #[test]
    fn bold_wider_than_regular() {
        let r = measure_text("Test", 12.0, FontWeight::Regular);
        let b = measure_text("Test", 12.0, FontWeight::Bold);
        assert!(b.width > r.width);
    }

    #[test]
    fn narrow_chars_narrower_than_wide() {
        let narrow = measure_text("iiii", 10.0, FontWeight::Regular);
        let wide = measure_text("mmmm", 10.0, FontWeight::Regular);
        assert!(narrow.width < wide.width);
    }
}
