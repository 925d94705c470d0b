use super::*;

#[test]
fn stored_dark_wins_over_light_system() {
    assert_eq!(resolve(Some("dark"), false), Theme::Dark);
}

#[test]
fn absent_key_defers_to_system() {
    assert_eq!(resolve(None, true), Theme::Dark);
    assert_eq!(resolve(None, false), Theme::Light);
}

#[test]
fn other_stored_values_are_light() {
    assert_eq!(resolve(Some("light"), true), Theme::Light);
}

#[test]
fn stored_value_writes_dark_or_removes() {
    assert_eq!(stored_value(Theme::Dark), Some("dark"));
    assert_eq!(stored_value(Theme::Light), None);
}

#[cfg(not(feature = "csr"))]
#[test]
fn read_preference_is_light_outside_browser() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_flips_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}
