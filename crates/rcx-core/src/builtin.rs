//! Built-in color ranges and palettes.
//!
//! The range values are the mainline Wesnoth team colors. Order matters:
//! Wesnoth binds the digits 1-9 to the first ranges in this sequence, and the
//! 1-based position of a range is baked into exported file names.
//!
//! Light Red and Dark Red deliberately use their own `rep` instead of
//! upstream's copy of Red's, so their swatches are distinguishable.

use crate::{Color, ColorRange, Palette};

/// `(id, display name, [mid, max, min, rep])`, in display order.
const RANGES: &[(&str, &str, [u32; 4])] = &[
    ("red", "Red", [0xFF0000, 0xFFFFFF, 0x000000, 0xFF0000]),
    ("blue", "Blue", [0x2E419B, 0xFFFFFF, 0x0F0F0F, 0x0000FF]),
    ("green", "Green", [0x62B664, 0xFFFFFF, 0x000000, 0x00FF00]),
    ("purple", "Purple", [0x93009D, 0xFFFFFF, 0x000000, 0xFF00FF]),
    ("black", "Black", [0x5A5A5A, 0xFFFFFF, 0x000000, 0x000000]),
    ("brown", "Brown", [0x945027, 0xFFFFFF, 0x000000, 0xAA4600]),
    ("orange", "Orange", [0xFF7E00, 0xFFFFFF, 0x0F0F0F, 0xFFAA00]),
    ("white", "White", [0xE1E1E1, 0xFFFFFF, 0x1E1E1E, 0xFFFFFF]),
    ("teal", "Teal", [0x30CBC0, 0xFFFFFF, 0x000000, 0x00F0C8]),
    ("lightred", "Light Red", [0xD1620D, 0xFFFFFF, 0x000000, 0xD1620D]),
    ("darkred", "Dark Red", [0x8A0808, 0xFFFFFF, 0x000000, 0x8A0808]),
    ("lightblue", "Light Blue", [0x00A4FF, 0xFFFFFF, 0x000A21, 0x00A4FF]),
    ("brightgreen", "Bright Green", [0x8CFF00, 0xEBFFBF, 0x2D4001, 0x8CFF00]),
    ("brightorange", "Bright Orange", [0xFFC600, 0xFFF7E6, 0x792A00, 0xFFC600]),
    ("gold", "Gold", [0xFFF35A, 0xFFF8D2, 0x994F13, 0xFFF35A]),
];

/// Magenta team-color ramp used by unit sprites.
const MAGENTA: [u32; 19] = [
    0xF49AC1, 0x3F0016, 0x55002A, 0x690039, 0x7B0045, 0x8C0051, 0x9E005D, 0xB10069, 0xC30074,
    0xD6007F, 0xEC008C, 0xEE3D96, 0xEF5BA1, 0xF172AC, 0xF287B6, 0xF6ADCD, 0xF8C1D9, 0xFAD5E5,
    0xFDE9F1,
];

/// Id of the palette that holds the canonical reference ramp.
pub const REFERENCE_PALETTE_ID: &str = "red";

/// Id of the default key palette for range recoloring.
///
/// Range mappings place key colors on the black/red/white luminance axis,
/// so only a key drawn on that axis puts its base tone on the target `mid`.
pub const DEFAULT_KEY_PALETTE_ID: &str = REFERENCE_PALETTE_ID;

/// Id of the default source palette for palette swaps.
pub const DEFAULT_SWAP_SOURCE_ID: &str = "magenta";

/// Built-in color ranges in display order.
pub fn ranges() -> Vec<ColorRange> {
    RANGES
        .iter()
        .map(|&(id, name, [mid, max, min, rep])| {
            ColorRange::new(
                id,
                name,
                Color::from_u32(mid),
                Color::from_u32(max),
                Color::from_u32(min),
                Color::from_u32(rep),
            )
        })
        .collect()
}

/// Built-in palettes in display order.
pub fn palettes() -> Vec<Palette> {
    vec![
        Palette::from_u32s("magenta", "Magenta TC", &MAGENTA),
        Palette::new("flag_green", "Green Flag TC", channel_ramp(8)),
        Palette::new("ellipse_red", "Red Ellipse TC", channel_ramp(16)),
        reference_palette(),
    ]
}

/// Returns `true` if `id` names a built-in range.
pub fn is_builtin_range(id: &str) -> bool {
    RANGES.iter().any(|&(rid, _, _)| rid == id)
}

/// Returns `true` if `id` names a built-in palette.
pub fn is_builtin_palette(id: &str) -> bool {
    palettes().iter().any(|p| p.id() == id)
}

/// The canonical black → red → white ramp source art is authored against.
///
/// Contains `#000000..=#FF0000` along the red channel followed by
/// `#FF0101..=#FFFFFF` along the green/blue channels, 511 colors in total.
/// Remapping it with [`ColorRange::reference`] is the identity.
pub fn reference_palette() -> Palette {
    let shadows = (0..=255u8).map(|v| Color::new(v, 0, 0));
    let highlights = (1..=255u8).map(|w| Color::new(255, w, w));
    Palette::new(
        REFERENCE_PALETTE_ID,
        "Red Reference Ramp",
        shadows.chain(highlights).collect(),
    )
}

/// Single-channel ramp used by flag and ellipse team colors: `0xC8` first,
/// then every remaining level from `0xFF` down to `0x01`.
fn channel_ramp(shift: u32) -> Vec<Color> {
    const LEAD: u32 = 0xC8;
    std::iter::once(LEAD)
        .chain((1..=0xFFu32).rev().filter(|&v| v != LEAD))
        .map(|v| Color::from_u32(v << shift))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_order_and_count() {
        let r = ranges();
        assert_eq!(r.len(), 15);
        assert_eq!(r[0].id(), "red");
        assert_eq!(r[1].id(), "blue");
        assert_eq!(r[14].id(), "gold");
        assert_eq!(r[12].name(), "Bright Green");
    }

    #[test]
    fn test_blue_anchors() {
        let blue = ranges().into_iter().find(|r| r.id() == "blue").unwrap();
        assert_eq!(blue.mid(), Color::from_u32(0x2E419B));
        assert_eq!(blue.max(), Color::WHITE);
        assert_eq!(blue.min(), Color::from_u32(0x0F0F0F));
        assert_eq!(blue.rep(), Color::from_u32(0x0000FF));
    }

    #[test]
    fn test_builtin_red_is_reference() {
        assert_eq!(ranges()[0], ColorRange::reference());
    }

    #[test]
    fn test_palette_order() {
        let ids: Vec<_> = palettes().iter().map(|p| p.id().to_string()).collect();
        assert_eq!(ids, ["magenta", "flag_green", "ellipse_red", "red"]);
    }

    #[test]
    fn test_channel_ramps() {
        let flag = channel_ramp(8);
        assert_eq!(flag.len(), 255);
        assert_eq!(flag[0], Color::from_u32(0x00C800));
        assert_eq!(flag[1], Color::from_u32(0x00FF00));
        assert_eq!(flag[254], Color::from_u32(0x000100));
        assert!(!flag[1..].contains(&Color::from_u32(0x00C800)));

        let ellipse = channel_ramp(16);
        assert_eq!(ellipse[0], Color::from_u32(0xC80000));
        assert_eq!(ellipse[55], Color::from_u32(0xC90000));
        assert_eq!(ellipse[56], Color::from_u32(0xC70000));
    }

    #[test]
    fn test_reference_palette_shape() {
        let p = reference_palette();
        assert_eq!(p.len(), 511);
        assert_eq!(p.colors()[0], Color::BLACK);
        assert_eq!(p.colors()[255], Color::RED);
        assert_eq!(p.colors()[510], Color::WHITE);
    }

    #[test]
    fn test_default_key_base_maps_to_mid() {
        let key = palettes()
            .into_iter()
            .find(|p| p.id() == DEFAULT_KEY_PALETTE_ID)
            .unwrap();
        for range in ranges() {
            let mapping = crate::build_range_mapping(&range, key.colors());
            assert_eq!(mapping.get(Color::RED), Some(range.mid()), "{}", range.id());
            assert_eq!(mapping.get(Color::BLACK), Some(range.min()), "{}", range.id());
            assert_eq!(mapping.get(Color::WHITE), Some(range.max()), "{}", range.id());
        }
        assert!(is_builtin_palette(DEFAULT_SWAP_SOURCE_ID));
    }

    #[test]
    fn test_builtin_lookup() {
        assert!(is_builtin_range("teal"));
        assert!(!is_builtin_range("reef"));
        assert!(is_builtin_palette("magenta"));
        assert!(!is_builtin_palette("mine"));
    }
}
