use super::*;
use crate::{
    config::model::DiagramConfig,
    render::backend::{RenderSettings, SvgBackend},
    session::arc_session::{ArcSession, InputEvent},
};

fn frame() -> Frame {
    let mut s = ArcSession::new(
        DiagramConfig::default(),
        Viewport::new(320.0, 240.0).unwrap(),
    )
    .unwrap();
    let mut backend = SvgBackend::new(RenderSettings::default());
    s.recompute_and_render(InputEvent::Tick, &mut backend)
        .unwrap()
}

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_sink").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn cfg(frames: usize) -> SinkConfig {
    SinkConfig {
        viewport: Viewport::new(320.0, 240.0).unwrap(),
        frames,
    }
}

#[test]
fn directory_sink_writes_numbered_svg_files() {
    let dir = out_dir("svg");
    let mut sink = DirectorySink::new(&dir, OutputFormat::Svg);
    let f = frame();
    sink.begin(cfg(2)).unwrap();
    sink.push_frame(0, &f).unwrap();
    sink.push_frame(1, &f).unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written().len(), 2);
    assert_eq!(sink.written()[1], dir.join("frame_00001.svg"));
    let svg = std::fs::read_to_string(dir.join("frame_00000.svg")).unwrap();
    assert_eq!(svg, f.rendered.svg);
}

#[test]
fn png_output_needs_pixels() {
    let dir = out_dir("png");
    let mut sink = DirectorySink::new(&dir, OutputFormat::Png);
    sink.begin(cfg(1)).unwrap();
    let err = sink.push_frame(0, &frame()).unwrap_err();
    assert!(matches!(err, ArcError::Render(_)));
}

#[test]
fn in_memory_sink_resets_on_begin() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(1)).unwrap();
    sink.push_frame(0, &frame()).unwrap();
    assert_eq!(sink.frames().len(), 1);
    sink.begin(cfg(3)).unwrap();
    assert!(sink.frames().is_empty());
    assert_eq!(sink.config().unwrap().frames, 3);
}

#[test]
fn extensions_match_format() {
    assert_eq!(OutputFormat::Svg.extension(), "svg");
    assert_eq!(OutputFormat::Png.extension(), "png");
}
