//! Hex color helpers for indicator colors coming from settings and input.

use egui::Color32;

use crate::error::{LoadButtonError, Result};

/// Parses `#rrggbb`, `rrggbb`, `#rrggbbaa` or `rrggbbaa` into a color.
pub fn parse_hex_color(hex: &str) -> Result<Color32> {
    let digits = hex.trim().trim_start_matches('#');
    let invalid = || LoadButtonError::InvalidColor(hex.to_string());

    if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);

    if digits.len() == 8 {
        Ok(Color32::from_rgba_unmultiplied(r, g, b, channel(6)?))
    } else {
        Ok(Color32::from_rgb(r, g, b))
    }
}

/// Formats a color as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
pub fn color32_to_hex(color: Color32) -> String {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Scales a color's opacity by `alpha` (0.0 - 1.0), as used when fading.
pub fn faded(color: Color32, alpha: f32) -> Color32 {
    color.gamma_multiply(alpha.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_hex_color("#ff8000"), Ok(Color32::from_rgb(255, 128, 0)));
        assert_eq!(parse_hex_color("a0a0a0"), Ok(Color32::from_rgb(160, 160, 160)));
    }

    #[test]
    fn test_parse_rgba() {
        assert_eq!(
            parse_hex_color("#000000ff"),
            Ok(Color32::from_rgba_unmultiplied(0, 0, 0, 255))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "#fff", "#gggggg", "#12345", "#ééé"] {
            assert_eq!(parse_hex_color(bad), Err(LoadButtonError::InvalidColor(bad.to_string())));
        }
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(color32_to_hex(Color32::from_rgb(1, 2, 255)), "#0102ff");
        let parsed = parse_hex_color(&color32_to_hex(Color32::LIGHT_GRAY)).unwrap();
        assert_eq!(parsed, Color32::LIGHT_GRAY);
    }

    #[test]
    fn test_faded_endpoints() {
        assert_eq!(faded(Color32::RED, 1.0), Color32::RED);
        assert_eq!(faded(Color32::RED, 0.0), Color32::TRANSPARENT);
    }
}
