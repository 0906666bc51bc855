use super::*;

#[test]
fn input_type_follows_reveal_flag() {
    assert_eq!(input_type(false), "password");
    assert_eq!(input_type(true), "text");
}

#[test]
fn reveal_affordances_differ_per_state() {
    assert_ne!(reveal_glyph(false), reveal_glyph(true));
    assert_eq!(reveal_title(false), "Show password");
    assert_eq!(reveal_title(true), "Hide password");
}
