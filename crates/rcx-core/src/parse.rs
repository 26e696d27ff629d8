//! Free-text color list parsing.
//!
//! Turns user input such as `#FF0000, 00FF00,#00f` into an ordered color
//! list for ad-hoc palettes. Parsing is lenient: empty and malformed tokens
//! are dropped without reporting, and the `#` prefix is optional.

use crate::Color;

/// Parses a comma-separated list of hex colors.
///
/// Tokens are trimmed, prefixed with `#` when missing, and kept if they
/// parse as `#RRGGBB` or `#RGB`. Order and duplicates are preserved.
///
/// # Example
///
/// ```rust
/// use rcx_core::{parse_color_list, Color};
///
/// let colors = parse_color_list("#FF0000,00FF00,, notacolor ,0000FF");
/// assert_eq!(colors, [Color::new(255, 0, 0), Color::new(0, 255, 0), Color::new(0, 0, 255)]);
/// ```
pub fn parse_color_list(text: &str) -> Vec<Color> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let token = if token.starts_with('#') {
                token.to_string()
            } else {
                format!("#{token}")
            };
            Color::from_hex(&token).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_tokens() {
        let colors = parse_color_list("#FF0000,00FF00,, notacolor ,0000FF");
        assert_eq!(
            colors,
            [Color::new(255, 0, 0), Color::new(0, 255, 0), Color::new(0, 0, 255)]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_color_list("").is_empty());
        assert!(parse_color_list(",,,").is_empty());
        assert!(parse_color_list("   ").is_empty());
    }

    #[test]
    fn test_duplicates_and_order_kept() {
        let colors = parse_color_list("#010203,#FFFFFF,010203");
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], colors[2]);
        assert_eq!(colors[1], Color::WHITE);
    }

    #[test]
    fn test_multiline_input() {
        let colors = parse_color_list("#F49AC1,\n#3F0016,\r\n55002A\n");
        assert_eq!(
            colors,
            [
                Color::from_u32(0xF49AC1),
                Color::from_u32(0x3F0016),
                Color::from_u32(0x55002A)
            ]
        );
    }

    #[test]
    fn test_short_form_and_bad_lengths() {
        let colors = parse_color_list("#abc,##abc,#abcd,1234567");
        assert_eq!(colors, [Color::new(0xAA, 0xBB, 0xCC)]);
    }
}
