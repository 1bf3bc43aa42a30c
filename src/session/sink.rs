use std::path::PathBuf;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Viewport,
        error::{ArcError, ArcResult},
    },
    session::arc_session::Frame,
};

/// Configuration provided to a [`FrameSink`] before a sweep starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinkConfig {
    pub viewport: Viewport,
    pub frames: usize,
}

/// Consumer of rendered frames.
///
/// `push_frame` is called with strictly increasing indices between `begin` and `end`.
pub trait FrameSink {
    fn begin(&mut self, cfg: SinkConfig) -> ArcResult<()>;
    fn push_frame(&mut self, idx: usize, frame: &Frame) -> ArcResult<()>;
    fn end(&mut self) -> ArcResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(usize, Frame)>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn frames(&self) -> &[(usize, Frame)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ArcResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: usize, frame: &Frame) -> ArcResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> ArcResult<()> {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

/// Writes `frame_00000.<ext>`, `frame_00001.<ext>`, ... into a directory.
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    format: OutputFormat,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            dir: dir.into(),
            format,
            written: Vec::new(),
        }
    }

    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn frame_path(&self, idx: usize) -> PathBuf {
        self.dir
            .join(format!("frame_{idx:05}.{}", self.format.extension()))
    }
}

impl FrameSink for DirectorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ArcResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        self.written.clear();
        self.written.reserve(cfg.frames);
        Ok(())
    }

    fn push_frame(&mut self, idx: usize, frame: &Frame) -> ArcResult<()> {
        let path = self.frame_path(idx);
        match self.format {
            OutputFormat::Svg => {
                std::fs::write(&path, &frame.rendered.svg)
                    .with_context(|| format!("write svg '{}'", path.display()))?;
            }
            OutputFormat::Png => {
                let pixels = frame.rendered.pixels.as_ref().ok_or_else(|| {
                    ArcError::render("png output requires a raster backend")
                })?;
                pixels.save_png(&path)?;
            }
        }
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> ArcResult<()> {
        tracing::info!(
            frames = self.written.len(),
            dir = %self.dir.display(),
            "sweep written"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/sink.rs"]
mod tests;
