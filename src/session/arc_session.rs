use crate::{
    config::model::DiagramConfig,
    foundation::{core::Viewport, error::ArcResult},
    geometry::{
        arc::{ArcGeometry, ArcState},
        slider::AngleSlider,
    },
    render::backend::{RenderBackend, RenderedFrame},
    scene::{build::build_scene, model::Scene},
    session::sink::{FrameSink, SinkConfig},
};

/// Something that should cause the diagram to be recomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// User moved the slider; the value is clamped and snapped to the step.
    SliderChanged(f64),
    /// Timer-driven animation step; clamped but not snapped.
    AnimateTo(f64),
    /// Viewport changed size; the last angle is kept.
    Resized(Viewport),
    /// Redraw with unchanged inputs.
    Tick,
}

/// One rendered frame together with the state it was drawn from.
#[derive(Clone, Debug)]
pub struct Frame {
    pub state: ArcState,
    pub rendered: RenderedFrame,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepStats {
    pub frames_total: usize,
    pub frames_rendered: usize,
}

/// Owns the only cross-frame state of the diagram: the slider (last angle) and the viewport.
///
/// Every event recomputes the [`ArcState`] from scratch.
#[derive(Clone, Debug)]
pub struct ArcSession {
    config: DiagramConfig,
    geometry: ArcGeometry,
    slider: AngleSlider,
    viewport: Viewport,
    state: ArcState,
}

impl ArcSession {
    pub fn new(config: DiagramConfig, viewport: Viewport) -> ArcResult<Self> {
        config.validate()?;
        let geometry = ArcGeometry::new(config.geometry);
        let slider = AngleSlider::new(geometry.params().arc_length, viewport, &config.slider)?;
        let state = geometry.compute(slider.value(), viewport)?;
        tracing::debug!(
            min = slider.min(),
            max = slider.max(),
            angle = slider.value(),
            "session created"
        );
        Ok(Self {
            config,
            geometry,
            slider,
            viewport,
            state,
        })
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn slider(&self) -> &AngleSlider {
        &self.slider
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn state(&self) -> &ArcState {
        &self.state
    }

    /// Apply one input event and return the recomputed state.
    pub fn handle(&mut self, event: InputEvent) -> ArcResult<&ArcState> {
        match event {
            InputEvent::SliderChanged(v) => {
                self.slider.set(v);
            }
            InputEvent::AnimateTo(v) => {
                self.slider.glide(v);
            }
            // Slider bounds stay as created; only the drawing moves.
            InputEvent::Resized(vp) => self.viewport = vp,
            InputEvent::Tick => {}
        }
        self.state = self.geometry.compute(self.slider.value(), self.viewport)?;
        tracing::debug!(
            ?event,
            angle = self.state.angle,
            radius = self.state.radius,
            chord = self.state.chord_length,
            "recomputed"
        );
        Ok(&self.state)
    }

    pub fn scene(&self) -> Scene {
        build_scene(&self.state, &self.config)
    }

    /// Apply `event`, rebuild the scene and hand it to `backend`.
    #[tracing::instrument(level = "debug", skip(self, backend))]
    pub fn recompute_and_render(
        &mut self,
        event: InputEvent,
        backend: &mut dyn RenderBackend,
    ) -> ArcResult<Frame> {
        self.handle(event)?;
        let rendered = backend.render_scene(&self.scene())?;
        Ok(Frame {
            state: self.state,
            rendered,
        })
    }

    /// Animate the slider from its minimum to its maximum over `frames` ticks.
    ///
    /// The slider is left at the last swept value.
    #[tracing::instrument(skip(self, backend, sink))]
    pub fn render_sweep(
        &mut self,
        frames: usize,
        backend: &mut dyn RenderBackend,
        sink: &mut dyn FrameSink,
    ) -> ArcResult<SweepStats> {
        sink.begin(SinkConfig {
            viewport: self.viewport,
            frames,
        })?;

        let mut stats = SweepStats {
            frames_total: frames,
            frames_rendered: 0,
        };
        for (idx, angle) in self.slider.sweep(frames).into_iter().enumerate() {
            let frame = self.recompute_and_render(InputEvent::AnimateTo(angle), backend)?;
            sink.push_frame(idx, &frame)?;
            stats.frames_rendered += 1;
        }

        sink.end()?;
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/arc_session.rs"]
mod tests;
