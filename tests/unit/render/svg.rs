use super::*;
use crate::{
    config::model::{DiagramConfig, DiagramVersion},
    foundation::core::Viewport,
    geometry::arc::ArcGeometry,
    render::formula::{NoTypesetter, PlainTypesetter},
    scene::{build::build_scene, model::Formula},
};

fn scene(version: DiagramVersion) -> Scene {
    let state = ArcGeometry::default()
        .compute(2.0, Viewport::new(640.0, 480.0).unwrap())
        .unwrap();
    build_scene(&state, &DiagramConfig::default().with_version(version))
}

#[test]
fn document_has_viewbox_and_background() {
    let svg = render_svg(&scene(DiagramVersion::Basic), &NoTypesetter).unwrap();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"viewBox="0 0 640 480""#));
    assert!(svg.contains(r##"fill="#646464""##));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn basic_scene_emits_one_element_per_primitive() {
    let s = scene(DiagramVersion::Basic);
    let svg = render_svg(&s, &NoTypesetter).unwrap();
    assert_eq!(svg.matches("<path ").count(), 1);
    assert_eq!(svg.matches("<line ").count(), 2);
    assert_eq!(svg.matches("<polygon ").count(), 2);
    assert_eq!(svg.matches("<circle ").count(), 1);
    assert_eq!(svg.matches("<text ").count(), 4);
    assert!(svg.contains(r#"stroke-linecap="square""#));
}

#[test]
fn formulas_are_skipped_without_typesetter() {
    let s = scene(DiagramVersion::Typeset);
    let without = render_svg(&s, &NoTypesetter).unwrap();
    let with = render_svg(&s, &PlainTypesetter).unwrap();
    assert_eq!(without.matches("<g transform").count(), 0);
    assert_eq!(with.matches("<g transform").count(), 3);
    assert!(with.contains("r = L / θ"));
}

#[test]
fn output_parses_as_svg() {
    let svg = render_svg(&scene(DiagramVersion::Typeset), &PlainTypesetter).unwrap();
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    assert_eq!(tree.size().width(), 640.0);
    assert_eq!(tree.size().height(), 480.0);
}

#[test]
fn text_is_escaped() {
    let mut s = Scene::new(Viewport::new(10.0, 10.0).unwrap(), Rgba8::gray(0), "a&b");
    s.push(Primitive::Text {
        pos: Point::new(1.0, 1.0),
        text: "<x>".to_string(),
        size: 8.0,
        color: Rgba8::gray(255),
        anchor: crate::scene::model::TextAnchor::Start,
    });
    let svg = render_svg(&s, &NoTypesetter).unwrap();
    assert!(svg.contains("&lt;x&gt;"));
    assert!(svg.contains(r#"font-family="a&amp;b""#));
}

#[test]
fn non_finite_geometry_is_a_render_error() {
    let mut s = Scene::new(Viewport::new(10.0, 10.0).unwrap(), Rgba8::gray(0), "serif");
    s.push(Primitive::Formula {
        pos: Point::new(f64::NAN, 0.0),
        formula: Formula::new("x", "x"),
        size: 10.0,
        color: Rgba8::gray(0),
    });
    let err = render_svg(&s, &PlainTypesetter).unwrap_err();
    assert!(matches!(err, ArcError::Render(_)));
}

#[test]
fn translucent_colors_carry_opacity() {
    let mut s = Scene::new(Viewport::new(10.0, 10.0).unwrap(), Rgba8::gray(0), "serif");
    s.push(Primitive::Disc {
        center: Point::new(5.0, 5.0),
        radius: 2.0,
        fill: Rgba8 {
            r: 255,
            g: 0,
            b: 0,
            a: 0,
        },
    });
    s.push(Primitive::Text {
        pos: Point::new(1.0, 8.0),
        text: "x".to_string(),
        size: 8.0,
        color: Rgba8 {
            r: 0,
            g: 0,
            b: 0,
            a: 51,
        },
        anchor: crate::scene::model::TextAnchor::Start,
    });
    let svg = render_svg(&s, &NoTypesetter).unwrap();
    assert!(svg.contains(r#"fill-opacity="0.000""#));

    let text = svg.lines().find(|l| l.starts_with("<text")).unwrap();
    assert!(text.contains(r#"fill-opacity="0.200""#), "{text}");
}

#[test]
fn opaque_text_has_no_opacity_attribute() {
    let svg = render_svg(&scene(DiagramVersion::Basic), &NoTypesetter).unwrap();
    assert!(
        svg.lines()
            .filter(|l| l.starts_with("<text"))
            .all(|l| !l.contains("opacity"))
    );
}
