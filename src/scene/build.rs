use crate::{
    config::model::{DiagramConfig, Style},
    foundation::{
        core::{Affine, Point, Rgba8, Vec2},
        math::{perpendicular_offset, segment_angle},
    },
    geometry::arc::ArcState,
    scene::model::{Formula, LineCap, Primitive, Scene, Stroke, TextAnchor},
};

/// Turn an [`ArcState`] into the drawing for the configured diagram version.
///
/// Pure: the same state and config always produce the same scene.
#[tracing::instrument(level = "debug", skip_all, fields(version = ?config.version, angle = state.angle))]
pub fn build_scene(state: &ArcState, config: &DiagramConfig) -> Scene {
    let style = &config.style;
    let mut scene = Scene::new(state.viewport, style.background, style.font_family.clone());

    scene.push(Primitive::Arc {
        center: state.arc_center,
        radius: state.radius,
        start_angle: state.start_angle,
        end_angle: state.end_angle,
        stroke: Stroke {
            color: style.arc_color,
            width: style.arc_width,
            cap: LineCap::Square,
        },
    });

    push_double_arrow(&mut scene, state.p1, state.p2, style);

    scene.push(Primitive::Disc {
        center: state.arc_center,
        radius: style.marker_diameter / 2.0,
        fill: style.marker_color,
    });

    push_info_panel(&mut scene, state, config);

    scene.push(Primitive::Line {
        from: state.midpoint,
        to: state.bottom_point,
        stroke: Stroke {
            color: style.perpendicular_color,
            width: style.perpendicular_width,
            cap: LineCap::Square,
        },
    });

    if config.version.draws_labels() {
        push_annotations(&mut scene, state, config);
    }

    scene
}

fn info_lines(state: &ArcState, config: &DiagramConfig) -> Vec<String> {
    let mut lines = vec![
        format!("Angle: {:.1}°", state.angle_degrees()),
        format!("Radius: {:.1} px", state.radius),
        format!("Arc Length: {} px", state.arc_length),
        format!("Chord Length: {:.1} px", state.chord_length),
    ];
    if config.version.draws_labels() {
        lines.push(format!("Sagitta: {:.1} px", state.sagitta));
    }
    lines
}

fn push_info_panel(scene: &mut Scene, state: &ArcState, config: &DiagramConfig) {
    let style = &config.style;
    let [x, y0] = style.info_origin;
    for (i, text) in info_lines(state, config).into_iter().enumerate() {
        scene.push(Primitive::Text {
            pos: Point::new(x, y0 + style.info_line_height * i as f64),
            text,
            size: style.font_size,
            color: style.text_color,
            anchor: TextAnchor::Start,
        });
    }
}

fn push_double_arrow(scene: &mut Scene, from: Point, to: Point, style: &Style) {
    scene.push(Primitive::Line {
        from,
        to,
        stroke: Stroke {
            color: style.arrow_color,
            width: style.arrow_width,
            cap: LineCap::Square,
        },
    });

    let angle = segment_angle(from, to);
    scene.push(arrowhead(to, angle, style.arrow_head, style.arrow_color));
    scene.push(arrowhead(
        from,
        angle + std::f64::consts::PI,
        style.arrow_head,
        style.arrow_color,
    ));
}

/// Triangle with its tip at `tip`, pointing along `angle`.
fn arrowhead(tip: Point, angle: f64, size: f64, fill: Rgba8) -> Primitive {
    let xf = Affine::translate(tip.to_vec2()) * Affine::rotate(angle);
    let points = [
        Point::new(0.0, 0.0),
        Point::new(-size, size / 2.0),
        Point::new(-size, -size / 2.0),
    ]
    .into_iter()
    .map(|p| xf * p)
    .collect();
    Primitive::Polygon { points, fill }
}

fn label_at(a: Point, b: Point, gap: f64) -> Point {
    a.midpoint(b) + perpendicular_offset(a, b, gap)
}

fn push_annotations(scene: &mut Scene, state: &ArcState, config: &DiagramConfig) {
    let style = &config.style;
    let arc_mid = state.arc_midpoint();

    scene.push(Primitive::Line {
        from: state.arc_center,
        to: arc_mid,
        stroke: Stroke {
            color: style.radius_color,
            width: style.radius_width,
            cap: LineCap::Square,
        },
    });

    let r_pos = label_at(state.arc_center, arc_mid, style.label_gap);
    let c_pos = label_at(state.p1, state.p2, style.label_gap);
    let s_pos = label_at(state.midpoint, state.bottom_point, style.label_gap);
    let theta_pos = state.arc_center + Vec2::new(0.0, -style.label_gap);

    let labels = [
        (r_pos, format!("r = {:.1}", state.radius)),
        (c_pos, format!("c = {:.1}", state.chord_length)),
        (s_pos, format!("s = {:.1}", state.sagitta)),
        (theta_pos, format!("θ = {:.1}°", state.angle_degrees())),
    ];
    for (pos, text) in labels {
        scene.push(Primitive::Text {
            pos,
            text,
            size: style.font_size,
            color: style.text_color,
            anchor: TextAnchor::Middle,
        });
    }

    if !config.version.draws_formulas() {
        return;
    }

    // Formulas sit one more gap beyond each label, on the same side of its line.
    let far = style.label_gap + style.formula_font_size * 1.5;
    let formulas = [
        (
            label_at(state.arc_center, arc_mid, far),
            Formula::new(r"r = \frac{L}{\theta}", "r = L / θ"),
        ),
        (
            label_at(state.p1, state.p2, far),
            Formula::new(r"c = 2r\sin\frac{\theta}{2}", "c = 2r·sin(θ/2)"),
        ),
        (
            label_at(state.midpoint, state.bottom_point, far),
            Formula::new(
                r"s = r\left(1 - \cos\frac{\theta}{2}\right)",
                "s = r(1 − cos(θ/2))",
            ),
        ),
    ];
    for (pos, formula) in formulas {
        scene.push(Primitive::Formula {
            pos,
            formula,
            size: style.formula_font_size,
            color: style.text_color,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/build.rs"]
mod tests;
