use crate::{
    foundation::error::ArcResult,
    render::{
        formula::{FormulaMode, FormulaTypesetter},
        raster::{FrameRGBA, Rasterizer},
        svg::render_svg,
    },
    scene::model::Scene,
};

/// Output of rendering one scene.
#[derive(Clone, Debug)]
pub struct RenderedFrame {
    pub svg: String,
    /// Present only for raster backends.
    pub pixels: Option<FrameRGBA>,
}

/// The drawing collaborator: turns a scene into output.
pub trait RenderBackend {
    fn render_scene(&mut self, scene: &Scene) -> ArcResult<RenderedFrame>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    Svg,
    Raster,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct RenderSettings {
    pub formulas: FormulaMode,
}

/// Vector-only backend.
pub struct SvgBackend {
    typesetter: Box<dyn FormulaTypesetter>,
}

impl SvgBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            typesetter: settings.formulas.typesetter(),
        }
    }
}

impl RenderBackend for SvgBackend {
    fn render_scene(&mut self, scene: &Scene) -> ArcResult<RenderedFrame> {
        let svg = render_svg(scene, self.typesetter.as_ref())?;
        Ok(RenderedFrame { svg, pixels: None })
    }
}

/// SVG plus CPU rasterization through resvg.
pub struct RasterBackend {
    typesetter: Box<dyn FormulaTypesetter>,
    rasterizer: Rasterizer,
}

impl RasterBackend {
    pub fn new(settings: RenderSettings, rasterizer: Rasterizer) -> Self {
        Self {
            typesetter: settings.formulas.typesetter(),
            rasterizer,
        }
    }
}

impl RenderBackend for RasterBackend {
    fn render_scene(&mut self, scene: &Scene) -> ArcResult<RenderedFrame> {
        let svg = render_svg(scene, self.typesetter.as_ref())?;
        let pixels = self.rasterizer.rasterize(&svg)?;
        Ok(RenderedFrame {
            svg,
            pixels: Some(pixels),
        })
    }
}

pub fn create_backend(kind: BackendKind, settings: RenderSettings) -> Box<dyn RenderBackend> {
    match kind {
        BackendKind::Svg => Box::new(SvgBackend::new(settings)),
        BackendKind::Raster => Box::new(RasterBackend::new(
            settings,
            Rasterizer::with_system_fonts(),
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/backend.rs"]
mod tests;
