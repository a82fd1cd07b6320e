//! Hex/HSL color math behind the color picker.

/// Preset swatches offered by the color picker when the caller passes none.
pub const PRESET_COLORS: [&str; 10] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#06b6d4", "#3b82f6", "#8b5cf6", "#ec4899",
    "#000000", "#ffffff",
];

/// Color the picker starts from when no default is given.
pub const DEFAULT_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, Copy, PartialEq)]
/// Hue (degrees, `0..360`), saturation and lightness (percent, `0..=100`).
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation percent.
    pub s: f64,
    /// Lightness percent.
    pub l: f64,
}

impl Hsl {
    /// Fully saturated mid-lightness red; what unparseable input maps to.
    pub const FALLBACK: Self = Self {
        h: 0.0,
        s: 100.0,
        l: 50.0,
    };

    /// Pure hue at full saturation, used as the saturation box backdrop.
    pub fn pure_hue(self) -> Self {
        Self {
            h: self.h,
            s: 100.0,
            l: 50.0,
        }
    }
}

fn parse_channels(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Converts `#RRGGBB` (the `#` is optional) to HSL. Malformed input yields [`Hsl::FALLBACK`].
pub fn hex_to_hsl(hex: &str) -> Hsl {
    let Some((r, g, b)) = parse_channels(hex) else {
        return Hsl::FALLBACK;
    };
    let (r, g, b) = (
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    );

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if max == min {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let sector = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: sector * 60.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Converts HSL to lowercase `#rrggbb`. Hue wraps into `0..360`; saturation and lightness clamp.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    let h = hsl.h.rem_euclid(360.0);
    let s = hsl.s.clamp(0.0, 100.0) / 100.0;
    let l = hsl.l.clamp(0.0, 100.0) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let to_byte = |channel: f64| ((channel + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", to_byte(r), to_byte(g), to_byte(b))
}

/// Normalizes typed hex text: prepends `#` when missing and accepts only `#RRGGBB`.
///
/// Returns `None` for anything else; the picker ignores such input without changing state.
pub fn normalize_hex_input(raw: &str) -> Option<String> {
    let candidate = if raw.starts_with('#') {
        raw.to_string()
    } else {
        format!("#{raw}")
    };
    parse_channels(&candidate).map(|_| candidate)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 0.5
    }

    #[test]
    fn hex_to_hsl_matches_known_colors() {
        let blue = hex_to_hsl(DEFAULT_COLOR);
        assert!(approx(blue.h, 217.2), "{blue:?}");
        assert!(approx(blue.s, 91.2), "{blue:?}");
        assert!(approx(blue.l, 59.8), "{blue:?}");

        let grey = hex_to_hsl("808080");
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.s, 0.0);
        assert!(approx(grey.l, 50.2));
    }

    #[test]
    fn malformed_hex_falls_back_to_red() {
        assert_eq!(hex_to_hsl("#12345"), Hsl::FALLBACK);
        assert_eq!(hex_to_hsl("zzzzzz"), Hsl::FALLBACK);
    }

    #[test]
    fn hsl_to_hex_hits_primaries_and_wraps_hue() {
        assert_eq!(hsl_to_hex(Hsl::FALLBACK), "#ff0000");
        assert_eq!(hsl_to_hex(Hsl { h: 120.0, s: 100.0, l: 50.0 }), "#00ff00");
        assert_eq!(hsl_to_hex(Hsl { h: 240.0, s: 100.0, l: 50.0 }), "#0000ff");
        assert_eq!(hsl_to_hex(Hsl { h: 360.0, s: 100.0, l: 50.0 }), "#ff0000");
        assert_eq!(hsl_to_hex(Hsl { h: 0.0, s: 0.0, l: 100.0 }), "#ffffff");
    }

    #[test]
    fn presets_survive_conversion() {
        for preset in PRESET_COLORS {
            assert_eq!(hsl_to_hex(hex_to_hsl(preset)), preset);
        }
    }

    #[test]
    fn hex_input_is_normalized_or_rejected() {
        assert_eq!(normalize_hex_input("22c55e"), Some("#22c55e".to_string()));
        assert_eq!(normalize_hex_input("#ABCDEF"), Some("#ABCDEF".to_string()));
        assert_eq!(normalize_hex_input("#abc"), None);
        assert_eq!(normalize_hex_input("#12345g"), None);
        assert_eq!(normalize_hex_input(""), None);
        assert_eq!(normalize_hex_input("##123456"), None);
    }
}
