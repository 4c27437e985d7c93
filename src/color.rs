//! Color helpers: hex parsing, brightness and legible text color selection.

use egui::Color32;

use crate::error::ColorError;

/// Outline color used for shape previews while dragging.
pub const PREVIEW_GRAY: Color32 = Color32::from_rgb(128, 128, 128);

/// Brightness at or above which a color counts as "light".
pub const BRIGHTNESS_THRESHOLD: f32 = 0.5;

/// Parse a `#rrggbb` or `#rgb` string.
pub fn parse_hex(input: &str) -> Result<Color32, ColorError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorError::Empty);
    }
    let digits = trimmed
        .strip_prefix('#')
        .ok_or_else(|| ColorError::MissingHash(input.to_string()))?;

    let mut nibbles = Vec::with_capacity(6);
    for digit in digits.chars() {
        let value = digit.to_digit(16).ok_or_else(|| ColorError::BadDigit {
            input: input.to_string(),
            digit,
        })?;
        nibbles.push(value as u8);
    }

    match nibbles.as_slice() {
        [r, g, b] => Ok(Color32::from_rgb(r * 17, g * 17, b * 17)),
        [r1, r2, g1, g2, b1, b2] => Ok(Color32::from_rgb(
            r1 << 4 | r2,
            g1 << 4 | g2,
            b1 << 4 | b2,
        )),
        _ => Err(ColorError::BadLength(input.to_string())),
    }
}

/// Format a color as lowercase `#rrggbb`, ignoring alpha.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Mean of the RGB channels normalized to `0.0..=1.0`.
pub fn brightness(color: Color32) -> f32 {
    let sum = color.r() as f32 + color.g() as f32 + color.b() as f32;
    sum / 3.0 / 255.0
}

/// Text color that stays readable on top of `background`.
///
/// Dark backgrounds (brightness below [`BRIGHTNESS_THRESHOLD`]) get white text,
/// everything else, including a brightness of exactly 0.5, gets black.
pub fn legible_foreground(background: Color32) -> Color32 {
    if brightness(background) < BRIGHTNESS_THRESHOLD {
        Color32::WHITE
    } else {
        Color32::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(parse_hex("#ff8000").unwrap(), Color32::from_rgb(255, 128, 0));
        assert_eq!(parse_hex("#FFF").unwrap(), Color32::WHITE);
        assert_eq!(parse_hex("  #000000 ").unwrap(), Color32::BLACK);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex(""), Err(ColorError::Empty));
        assert!(matches!(parse_hex("000000"), Err(ColorError::MissingHash(_))));
        assert!(matches!(parse_hex("#12345"), Err(ColorError::BadLength(_))));
        assert!(matches!(
            parse_hex("#12345g"),
            Err(ColorError::BadDigit { digit: 'g', .. })
        ));
    }

    #[test]
    fn foreground_flips_on_brightness() {
        assert_eq!(legible_foreground(Color32::BLACK), Color32::WHITE);
        assert_eq!(legible_foreground(Color32::WHITE), Color32::BLACK);
    }

    #[test]
    fn threshold_sits_between_neighbouring_sums() {
        // 8-bit channels can't hit 0.5 exactly (sum 382.5), so check both sides of it.
        let just_below = Color32::from_rgb(255, 127, 0);
        assert!(brightness(just_below) < BRIGHTNESS_THRESHOLD);
        assert_eq!(legible_foreground(just_below), Color32::WHITE);

        let just_above = Color32::from_rgb(255, 128, 0);
        assert!(brightness(just_above) >= BRIGHTNESS_THRESHOLD);
        assert_eq!(legible_foreground(just_above), Color32::BLACK);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(to_hex(Color32::from_rgb(1, 2, 255)), "#0102ff");
    }
}
