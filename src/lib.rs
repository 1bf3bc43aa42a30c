//! arcsketch draws the classic "constant arc length" figure: a circular arc whose opening angle
//! is driven by a slider while its length stays fixed, annotated with radius, chord, sagitta and
//! angle.
//!
//! # Pipeline overview
//!
//! 1. **Compute**: `angle + Viewport -> ArcState` ([`ArcGeometry::compute`], pure)
//! 2. **Build**: `ArcState + DiagramConfig -> Scene` ([`build_scene`], pure)
//! 3. **Render**: `Scene -> SVG` and optionally RGBA pixels ([`RenderBackend`])
//!
//! [`ArcSession`] holds the only cross-frame state (the slider and the viewport) and drives the
//! three stages on every [`InputEvent`].
//!
//! ```rust,no_run
//! use arcsketch::{
//!     ArcSession, DiagramConfig, DiagramVersion, InputEvent, RenderSettings, SvgBackend, Viewport,
//! };
//!
//! # fn main() -> arcsketch::ArcResult<()> {
//! let cfg = DiagramConfig::default().with_version(DiagramVersion::Annotated);
//! let mut session = ArcSession::new(cfg, Viewport::new(1200.0, 800.0)?)?;
//! let mut backend = SvgBackend::new(RenderSettings::default());
//!
//! let frame = session.recompute_and_render(InputEvent::SliderChanged(2.0), &mut backend)?;
//! println!("radius = {:.1}", frame.state.radius);
//! std::fs::write("arc.svg", frame.rendered.svg).ok();
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

mod config;
mod foundation;
mod geometry;
mod render;
mod scene;
mod session;

pub use config::model::{DiagramConfig, DiagramVersion, GeometryParams, SliderParams, Style};
pub use foundation::core::{Affine, BezPath, Point, Rgba8, Vec2, Viewport};
pub use foundation::error::{ArcError, ArcResult};
pub use foundation::math::{PHI, perpendicular_offset, point_on_circle, segment_angle};
pub use geometry::arc::{ArcGeometry, ArcState};
pub use geometry::slider::AngleSlider;
pub use render::backend::{
    BackendKind, RasterBackend, RenderBackend, RenderSettings, RenderedFrame, SvgBackend,
    create_backend,
};
pub use render::formula::{
    FormulaMode, FormulaTypesetter, NoTypesetter, PlainTypesetter, TypesetFormula,
};
pub use render::raster::{FrameRGBA, Rasterizer};
pub use render::svg::render_svg;
pub use scene::build::build_scene;
pub use scene::model::{Formula, LineCap, Primitive, Scene, Stroke, TextAnchor};
pub use session::arc_session::{ArcSession, Frame, InputEvent, SweepStats};
pub use session::sink::{DirectorySink, FrameSink, InMemorySink, OutputFormat, SinkConfig};
