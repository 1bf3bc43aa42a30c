use super::*;
use crate::{
    config::model::DiagramVersion,
    render::backend::{RenderSettings, SvgBackend},
    session::sink::InMemorySink,
};

fn vp(w: f64, h: f64) -> Viewport {
    Viewport::new(w, h).unwrap()
}

fn session() -> ArcSession {
    ArcSession::new(DiagramConfig::default(), vp(1200.0, 800.0)).unwrap()
}

#[test]
fn starts_at_initial_slider_value() {
    let s = session();
    assert_eq!(s.state().angle, s.slider().value());
    assert!((s.state().radius * s.state().angle - 1000.0).abs() < 1e-9);
}

#[test]
fn slider_events_are_clamped() {
    let mut s = session();
    let min = s.slider().min();
    let st = s.handle(InputEvent::SliderChanged(0.0)).unwrap();
    assert_eq!(st.angle, min);
    assert!(st.radius.is_finite() && st.radius > 0.0);
}

#[test]
fn resize_keeps_angle_radius_and_chord() {
    let mut s = session();
    let before = *s.handle(InputEvent::SliderChanged(2.5)).unwrap();
    let after = *s.handle(InputEvent::Resized(vp(640.0, 480.0))).unwrap();
    assert_eq!(before.angle, after.angle);
    assert_eq!(before.radius, after.radius);
    assert!((before.chord_length - after.chord_length).abs() < 1e-9);
    assert_ne!(before.bottom_point, after.bottom_point);
    assert_eq!(after.viewport, vp(640.0, 480.0));
    // Bounds were fixed at creation.
    assert!((s.slider().min() - 1000.0 / (800.0 * 0.65)).abs() < 1e-12);
}

#[test]
fn tick_is_idempotent() {
    let mut s = session();
    let a = *s.handle(InputEvent::Tick).unwrap();
    let b = *s.handle(InputEvent::Tick).unwrap();
    assert_eq!(a, b);
}

#[test]
fn recompute_and_render_returns_matching_frame() {
    let mut s = ArcSession::new(
        DiagramConfig::default().with_version(DiagramVersion::Annotated),
        vp(800.0, 600.0),
    )
    .unwrap();
    let mut backend = SvgBackend::new(RenderSettings::default());
    let frame = s
        .recompute_and_render(InputEvent::SliderChanged(3.0), &mut backend)
        .unwrap();
    assert_eq!(frame.state, *s.state());
    assert!(frame.rendered.pixels.is_none());
    assert!(frame.rendered.svg.contains("Sagitta:"));
}

#[test]
fn sweep_pushes_every_frame_in_order() {
    let mut s = session();
    let mut backend = SvgBackend::new(RenderSettings::default());
    let mut sink = InMemorySink::new();
    let stats = s.render_sweep(6, &mut backend, &mut sink).unwrap();

    assert_eq!(
        stats,
        SweepStats {
            frames_total: 6,
            frames_rendered: 6
        }
    );
    assert_eq!(sink.config().unwrap().frames, 6);
    let frames = sink.frames();
    assert_eq!(frames.len(), 6);
    assert!(frames.iter().enumerate().all(|(i, (idx, _))| i == *idx));
    assert_eq!(frames[0].1.state.angle, s.slider().min());
    assert!((frames[5].1.state.angle - s.slider().max()).abs() < 1e-12);
    // Radius shrinks as the angle opens.
    assert!(
        frames
            .windows(2)
            .all(|w| w[0].1.state.radius > w[1].1.state.radius)
    );
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = DiagramConfig::default();
    cfg.geometry.arc_length = -1.0;
    assert!(ArcSession::new(cfg, vp(100.0, 100.0)).is_err());
}

#[test]
fn slider_range_follows_configured_arc_length() {
    let mut cfg = DiagramConfig::default();
    cfg.geometry.arc_length = 520.0;
    let s = ArcSession::new(cfg, vp(1200.0, 800.0)).unwrap();
    assert!((s.slider().min() - 1.0).abs() < 1e-12);
    assert!((s.state().radius * s.state().angle - 520.0).abs() < 1e-9);
}
