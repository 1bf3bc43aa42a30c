use std::fmt::Write as _;

use kurbo::Shape as _;

use crate::{
    foundation::{
        core::{Point, Rgba8, Vec2},
        error::{ArcError, ArcResult},
    },
    render::formula::FormulaTypesetter,
    scene::model::{Primitive, Scene, Stroke},
};

/// Flattening tolerance for arc-to-bezier conversion, in pixels.
const ARC_TOLERANCE: f64 = 0.1;

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

pub(crate) fn paint_attrs(color: Rgba8) -> String {
    if color.a == 255 {
        String::new()
    } else {
        format!(r#" fill-opacity="{:.3}""#, color.opacity())
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut s = format!(
        r#"fill="none" stroke="{}" stroke-width="{:.2}" stroke-linecap="{}""#,
        stroke.color.to_hex(),
        stroke.width,
        stroke.cap.as_svg(),
    );
    if stroke.color.a != 255 {
        let _ = write!(s, r#" stroke-opacity="{:.3}""#, stroke.color.opacity());
    }
    s
}

fn check_point(p: Point) -> ArcResult<()> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(ArcError::render(format!("non-finite point in scene: {p:?}")))
    }
}

/// Serialize a scene into a standalone SVG document.
///
/// Formulas go through `typesetter`; when it declines, the formula is omitted.
#[tracing::instrument(level = "debug", skip_all, fields(primitives = scene.primitives.len()))]
pub fn render_svg(scene: &Scene, typesetter: &dyn FormulaTypesetter) -> ArcResult<String> {
    let (w, h) = scene.viewport.pixel_size();
    let mut out = String::with_capacity(4096);

    // fmt::Write into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        out,
        r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"{}/>"#,
        scene.background.to_hex(),
        paint_attrs(scene.background),
    );

    let mut skipped = 0usize;
    for prim in &scene.primitives {
        match prim {
            Primitive::Arc {
                center,
                radius,
                start_angle,
                end_angle,
                stroke,
            } => {
                check_point(*center)?;
                let arc = kurbo::Arc::new(
                    *center,
                    Vec2::new(*radius, *radius),
                    *start_angle,
                    end_angle - start_angle,
                    0.0,
                );
                let d = arc.to_path(ARC_TOLERANCE).to_svg();
                let _ = writeln!(out, r#"<path d="{d}" {}/>"#, stroke_attrs(stroke));
            }
            Primitive::Line { from, to, stroke } => {
                check_point(*from)?;
                check_point(*to)?;
                let _ = writeln!(
                    out,
                    r#"<line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" {}/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    stroke_attrs(stroke),
                );
            }
            Primitive::Polygon { points, fill } => {
                let mut pts = String::new();
                for p in points {
                    check_point(*p)?;
                    let _ = write!(pts, "{:.3},{:.3} ", p.x, p.y);
                }
                let _ = writeln!(
                    out,
                    r#"<polygon points="{}" fill="{}"{}/>"#,
                    pts.trim_end(),
                    fill.to_hex(),
                    paint_attrs(*fill),
                );
            }
            Primitive::Disc {
                center,
                radius,
                fill,
            } => {
                check_point(*center)?;
                let _ = writeln!(
                    out,
                    r#"<circle cx="{:.3}" cy="{:.3}" r="{:.3}" fill="{}"{}/>"#,
                    center.x,
                    center.y,
                    radius,
                    fill.to_hex(),
                    paint_attrs(*fill),
                );
            }
            Primitive::Text {
                pos,
                text,
                size,
                color,
                anchor,
            } => {
                check_point(*pos)?;
                let _ = writeln!(
                    out,
                    r#"<text x="{:.3}" y="{:.3}" font-family="{}" font-size="{:.2}" fill="{}"{} text-anchor="{}">{}</text>"#,
                    pos.x,
                    pos.y,
                    escape_xml(&scene.font_family),
                    size,
                    color.to_hex(),
                    paint_attrs(*color),
                    anchor.as_svg(),
                    escape_xml(text),
                );
            }
            Primitive::Formula {
                pos,
                formula,
                size,
                color,
            } => {
                check_point(*pos)?;
                let Some(t) = typesetter.typeset(formula, *size, *color, &scene.font_family)
                else {
                    skipped += 1;
                    continue;
                };
                let _ = writeln!(
                    out,
                    r#"<g transform="translate({:.3} {:.3})">{}</g>"#,
                    pos.x - t.width / 2.0,
                    pos.y - t.height / 2.0,
                    t.svg,
                );
            }
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "formula typesetter unavailable, formulas omitted");
    }

    out.push_str("</svg>\n");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
