use super::*;

// =============================================================
// Names
// =============================================================

#[test]
fn default_is_light() {
    assert_eq!(Palette::default(), Palette::Light);
}

#[test]
fn as_str_matches_display() {
    for palette in Palette::ALL {
        assert_eq!(palette.to_string(), palette.as_str());
    }
}

// =============================================================
// Flip
// =============================================================

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Palette::Light.toggled(), Palette::Dark);
    assert_eq!(Palette::Dark.toggled(), Palette::Light);
}

#[test]
fn toggled_is_involutive() {
    for palette in Palette::ALL {
        assert_eq!(palette.toggled().toggled(), palette);
    }
}

#[test]
fn prefers_dark_maps_to_palette() {
    assert_eq!(Palette::from_prefers_dark(true), Palette::Dark);
    assert_eq!(Palette::from_prefers_dark(false), Palette::Light);
    assert!(Palette::from_prefers_dark(true).is_dark());
}
