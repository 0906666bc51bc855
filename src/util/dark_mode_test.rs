#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_false_off_the_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn toggle_twice_restores_original_value() {
    assert!(!toggle(toggle(false)));
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
