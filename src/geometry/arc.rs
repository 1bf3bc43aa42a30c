use std::f64::consts::FRAC_PI_2;

use crate::{
    config::model::GeometryParams,
    foundation::{
        core::{Point, Viewport},
        error::{ArcError, ArcResult},
        math::point_on_circle,
    },
};

/// Every derived quantity of the diagram for one angle and viewport.
///
/// Values are recomputed from scratch; nothing here depends on a previous frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArcState {
    pub viewport: Viewport,
    pub arc_length: f64,
    pub angle: f64, // radians
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub mid_angle: f64,
    pub arc_center: Point,
    pub p1: Point,
    pub p2: Point,
    pub midpoint: Point,
    pub bottom_point: Point,
    pub chord_length: f64,
    pub sagitta: f64,
}

impl ArcState {
    /// Point on the true (not inset) arc at `mid_angle`.
    pub fn arc_midpoint(&self) -> Point {
        point_on_circle(self.arc_center, self.radius, self.mid_angle)
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }
}

/// Pure mapping from `(angle, viewport)` to [`ArcState`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ArcGeometry {
    params: GeometryParams,
}

impl ArcGeometry {
    pub fn new(params: GeometryParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &GeometryParams {
        &self.params
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn compute(&self, angle: f64, viewport: Viewport) -> ArcResult<ArcState> {
        if !angle.is_finite() || angle <= 0.0 {
            return Err(ArcError::validation(format!(
                "arc angle must be finite and > 0 (got {angle})"
            )));
        }

        let p = &self.params;
        let h = viewport.height;
        let mid = viewport.center();

        let radius = p.arc_length / angle;
        let start_angle = -angle / 2.0 + FRAC_PI_2;
        let end_angle = angle / 2.0 + FRAC_PI_2;
        let mid_angle = (start_angle + end_angle) / 2.0;

        // Center placement keeps the arc midpoint at (W/2, H * center_anchor).
        let offset_x = mid_angle.cos() * radius;
        let arc_center = Point::new(mid.x - offset_x, h * p.center_anchor - radius);

        let inset = radius * p.inset_ratio;
        let p1 = point_on_circle(arc_center, radius - inset, start_angle);
        let p2 = point_on_circle(arc_center, radius - inset, end_angle);
        let midpoint = Point::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0);
        let bottom_point = Point::new(mid.x, mid.y + h * p.bottom_anchor_offset);
        let chord_length = p1.distance(p2);
        let sagitta = radius * (1.0 - (angle / 2.0).cos());

        Ok(ArcState {
            viewport,
            arc_length: p.arc_length,
            angle,
            radius,
            start_angle,
            end_angle,
            mid_angle,
            arc_center,
            p1,
            p2,
            midpoint,
            bottom_point,
            chord_length,
            sagitta,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/arc.rs"]
mod tests;
