// Host-side tests for wheel geometry and CSS generation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod wheel {
    include!("../src/core/wheel.rs");
}

use wheel::*;

#[test]
fn four_word_gradient() {
    assert_eq!(
        conic_gradient(4),
        "conic-gradient(from -45deg, #ef4444 0deg 90deg, #f59e0b 90deg 180deg, \
         #10b981 180deg 270deg, #3b82f6 270deg 360deg)"
    );
}

#[test]
fn gradient_has_one_band_per_word_and_cycles_colors() {
    let css = conic_gradient(50);
    assert!(css.starts_with("conic-gradient(from -3.6deg"));
    assert!(css.ends_with(')'));
    // One separator after the start angle and one between each pair of bands.
    assert_eq!(css.matches("deg, ").count(), 50);
    for color in WHEEL_COLORS {
        assert!(css.contains(color));
    }
    // Word 4 wraps back to the first color.
    assert!(css.contains("#ef4444 28.8deg 36deg"));
}

#[test]
fn empty_wheel_is_flat_gray() {
    assert_eq!(conic_gradient(0), EMPTY_WHEEL_COLOR);
}

#[test]
fn label_angles_step_by_segment() {
    assert_eq!(label_angle(0, 50), 0.0);
    assert_eq!(label_angle(1, 4), 90.0);
    assert_eq!(label_angle(3, 4), 270.0);
    assert_eq!(label_angle(2, 0), 0.0);
}

#[test]
fn rotate_transform_formats_degrees() {
    assert_eq!(rotate_transform(0.0), "rotate(0deg)");
    assert_eq!(rotate_transform(2430.0), "rotate(2430deg)");
    assert_eq!(rotate_transform(12.5), "rotate(12.5deg)");
}
