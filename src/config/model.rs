use std::path::Path;

use anyhow::Context as _;

use crate::foundation::{
    core::Rgba8,
    error::{ArcError, ArcResult},
    math::PHI,
};

/// Which of the three successive diagram versions to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagramVersion {
    /// Arc, chord arrow, center marker, info panel, perpendicular line.
    #[default]
    Basic,
    /// Basic plus radius line and on-canvas quantity labels.
    Annotated,
    /// Annotated plus typeset formulas.
    Typeset,
}

impl DiagramVersion {
    pub fn draws_labels(self) -> bool {
        matches!(self, Self::Annotated | Self::Typeset)
    }

    pub fn draws_formulas(self) -> bool {
        matches!(self, Self::Typeset)
    }
}

/// Constants of the arc geometry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GeometryParams {
    /// Arc length held constant while the angle changes (px).
    pub arc_length: f64,
    /// Fraction of the viewport height where the arc midpoint sits.
    pub center_anchor: f64,
    /// Bottom anchor is `H/2 + H * bottom_anchor_offset`.
    pub bottom_anchor_offset: f64,
    /// Endpoint inset as a fraction of the radius.
    pub inset_ratio: f64,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            arc_length: 1000.0,
            center_anchor: 0.6875,
            bottom_anchor_offset: 0.1875,
            inset_ratio: PHI / 100.0,
        }
    }
}

/// Slider range and granularity.
///
/// The range is `[arc_length / (H * min_height_fraction), arc_length / (H * max_height_fraction)]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SliderParams {
    pub min_height_fraction: f64,
    pub max_height_fraction: f64,
    pub initial: f64,
    pub step: f64, // 0 disables snapping
}

impl Default for SliderParams {
    fn default() -> Self {
        Self {
            min_height_fraction: 0.65,
            max_height_fraction: 0.2,
            initial: std::f64::consts::PI,
            step: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Style {
    pub background: Rgba8,
    pub arc_color: Rgba8,
    pub arc_width: f64,
    pub arrow_color: Rgba8,
    pub arrow_width: f64,
    pub arrow_head: f64,
    pub marker_color: Rgba8,
    pub marker_diameter: f64,
    pub perpendicular_color: Rgba8,
    pub perpendicular_width: f64,
    pub radius_color: Rgba8,
    pub radius_width: f64,
    pub text_color: Rgba8,
    pub font_family: String,
    pub font_size: f64,
    pub info_origin: [f64; 2],
    pub info_line_height: f64,
    pub label_gap: f64,
    pub formula_font_size: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Rgba8::gray(100),
            arc_color: Rgba8::gray(0),
            arc_width: 10.0,
            arrow_color: Rgba8::gray(50),
            arrow_width: 2.0,
            arrow_head: 10.0,
            marker_color: Rgba8::rgb(255, 0, 0),
            marker_diameter: 6.0,
            perpendicular_color: Rgba8::rgb(200, 0, 0),
            perpendicular_width: 2.0,
            radius_color: Rgba8::rgb(0, 90, 200),
            radius_width: 2.0,
            text_color: Rgba8::gray(30),
            font_family: "sans-serif".to_string(),
            font_size: 14.0,
            info_origin: [10.0, 50.0],
            info_line_height: 20.0,
            label_gap: 16.0,
            formula_font_size: 16.0,
        }
    }
}

/// Everything needed to compute and draw the diagram, minus the angle and viewport.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    pub geometry: GeometryParams,
    pub slider: SliderParams,
    pub version: DiagramVersion,
    pub style: Style,
}

impl DiagramConfig {
    pub fn from_json_str(s: &str) -> ArcResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: &Path) -> ArcResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read diagram config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn with_version(mut self, version: DiagramVersion) -> Self {
        self.version = version;
        self
    }

    pub fn validate(&self) -> ArcResult<()> {
        let g = &self.geometry;
        if !g.arc_length.is_finite() || g.arc_length <= 0.0 {
            return Err(ArcError::validation("arc_length must be finite and > 0"));
        }
        if !g.center_anchor.is_finite() || !g.bottom_anchor_offset.is_finite() {
            return Err(ArcError::validation("anchor fractions must be finite"));
        }
        if !(0.0..1.0).contains(&g.inset_ratio) {
            return Err(ArcError::validation("inset_ratio must be in [0, 1)"));
        }

        let s = &self.slider;
        if !s.min_height_fraction.is_finite()
            || !s.max_height_fraction.is_finite()
            || s.max_height_fraction <= 0.0
        {
            return Err(ArcError::validation(
                "slider height fractions must be finite and > 0",
            ));
        }
        if s.max_height_fraction >= s.min_height_fraction {
            return Err(ArcError::validation(
                "slider max_height_fraction must be < min_height_fraction",
            ));
        }
        if !s.step.is_finite() || s.step < 0.0 {
            return Err(ArcError::validation("slider step must be finite and >= 0"));
        }
        if !s.initial.is_finite() {
            return Err(ArcError::validation("slider initial value must be finite"));
        }

        let st = &self.style;
        for (name, v) in [
            ("arc_width", st.arc_width),
            ("arrow_width", st.arrow_width),
            ("arrow_head", st.arrow_head),
            ("marker_diameter", st.marker_diameter),
            ("perpendicular_width", st.perpendicular_width),
            ("radius_width", st.radius_width),
            ("font_size", st.font_size),
            ("info_line_height", st.info_line_height),
            ("formula_font_size", st.formula_font_size),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ArcError::validation(format!(
                    "style.{name} must be finite and >= 0"
                )));
            }
        }
        if st.font_family.trim().is_empty() {
            return Err(ArcError::validation("style.font_family must be non-empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
