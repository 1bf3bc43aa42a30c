use std::f64::consts::PI;

use super::*;

fn slider(h: f64) -> AngleSlider {
    AngleSlider::new(
        1000.0,
        Viewport::new(1200.0, h).unwrap(),
        &SliderParams::default(),
    )
    .unwrap()
}

#[test]
fn bounds_follow_viewport_height() {
    let s = slider(800.0);
    assert!((s.min() - 1000.0 / 520.0).abs() < 1e-12);
    assert!((s.max() - 1000.0 / 160.0).abs() < 1e-12);
    assert!(s.min() > 0.0);
}

#[test]
fn initial_value_is_snapped_half_turn() {
    let s = slider(800.0);
    // PI snapped onto the 0.1 grid starting at min.
    assert!((s.value() - PI).abs() <= 0.05 + 1e-12);
    assert!(s.value() >= s.min() && s.value() <= s.max());
}

#[test]
fn set_clamps_into_range() {
    let mut s = slider(800.0);
    assert_eq!(s.set(-5.0), s.min());
    let top = s.set(100.0);
    assert!(top <= s.max());
    assert!(s.max() - top < s.step() + 1e-12);
}

#[test]
fn set_snaps_to_step_grid_from_min() {
    let mut s = slider(800.0);
    let v = s.set(s.min() + 0.26);
    assert!((v - (s.min() + 0.3)).abs() < 1e-9);
}

#[test]
fn zero_step_disables_snapping() {
    let params = SliderParams {
        step: 0.0,
        ..SliderParams::default()
    };
    let mut s = AngleSlider::new(1000.0, Viewport::new(800.0, 800.0).unwrap(), &params).unwrap();
    assert_eq!(s.set(2.345_678), 2.345_678);
}

#[test]
fn nan_keeps_previous_value() {
    let mut s = slider(800.0);
    let before = s.value();
    assert_eq!(s.set(f64::NAN), before);
}

#[test]
fn sweep_spans_full_range() {
    let s = slider(600.0);
    let values = s.sweep(5);
    assert_eq!(values.len(), 5);
    assert_eq!(values[0], s.min());
    assert!((values[4] - s.max()).abs() < 1e-12);
    assert!(values.windows(2).all(|w| w[0] < w[1]));
    assert!(s.sweep(0).is_empty());
    assert_eq!(s.sweep(1), vec![s.min()]);
}

#[test]
fn rejects_non_positive_minimum() {
    let params = SliderParams {
        min_height_fraction: -0.65,
        ..SliderParams::default()
    };
    assert!(AngleSlider::new(1000.0, Viewport::new(800.0, 800.0).unwrap(), &params).is_err());
}

#[test]
fn glide_clamps_without_snapping() {
    let mut s = slider(800.0);
    let v = s.min() + 0.0123;
    assert_eq!(s.glide(v), v);
    assert_eq!(s.glide(1e9), s.max());
    assert_eq!(s.glide(f64::NAN), s.max());
}
