use super::*;

#[test]
fn default_mode_is_light() {
    assert_eq!(ThemeState::default().mode, ThemeMode::Light);
}

#[test]
fn toggle_alternates_modes() {
    let mut state = ThemeState::default();
    assert_eq!(state.toggle(), ThemeMode::Dark);
    assert_eq!(state.toggle(), ThemeMode::Light);
}

#[test]
fn set_overrides_mode() {
    let mut state = ThemeState::default();
    state.set(ThemeMode::Dark);
    assert_eq!(state.mode, ThemeMode::Dark);
}

#[test]
fn parse_accepts_stored_values_only() {
    assert_eq!(ThemeMode::parse(ThemeMode::Dark.as_str()), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::parse("light"), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::parse("true"), None);
}
