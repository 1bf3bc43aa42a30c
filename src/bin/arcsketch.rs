use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "arcsketch", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the computed arc state as JSON.
    State(StateArgs),
    /// Render a single frame as SVG or PNG.
    Frame(FrameArgs),
    /// Render a min-to-max angle sweep as a numbered frame sequence.
    Sweep(SweepArgs),
}

#[derive(Args, Debug)]
struct DiagramArgs {
    /// Diagram config JSON (defaults are used for missing fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1200.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800.0)]
    height: f64,

    /// Diagram version (overrides the config file).
    #[arg(long = "diagram", value_enum)]
    variant: Option<VersionChoice>,

    /// Formula typesetter used by the typeset version.
    #[arg(long, value_enum, default_value_t = FormulaChoice::Plain)]
    formulas: FormulaChoice,
}

#[derive(Args, Debug)]
struct StateArgs {
    #[command(flatten)]
    diagram: DiagramArgs,

    /// Arc angle in radians (clamped to the slider range); defaults to the slider's initial value.
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f64>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    diagram: DiagramArgs,

    /// Arc angle in radians (clamped to the slider range); defaults to the slider's initial value.
    #[arg(long, allow_negative_numbers = true)]
    angle: Option<f64>,

    /// Output path; `.svg` writes vector output, anything else writes PNG.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SweepArgs {
    #[command(flatten)]
    diagram: DiagramArgs,

    /// Number of frames from the minimum to the maximum angle.
    #[arg(long, default_value_t = 30)]
    frames: usize,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// Frame file format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Png)]
    format: FormatChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VersionChoice {
    Basic,
    Annotated,
    Typeset,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormulaChoice {
    None,
    Plain,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Svg,
    Png,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::State(args) => cmd_state(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &DiagramArgs) -> anyhow::Result<arcsketch::DiagramConfig> {
    let mut cfg = match &args.config {
        Some(path) => arcsketch::DiagramConfig::from_json_file(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => arcsketch::DiagramConfig::default(),
    };
    if let Some(v) = args.variant {
        cfg.version = match v {
            VersionChoice::Basic => arcsketch::DiagramVersion::Basic,
            VersionChoice::Annotated => arcsketch::DiagramVersion::Annotated,
            VersionChoice::Typeset => arcsketch::DiagramVersion::Typeset,
        };
    }
    Ok(cfg)
}

fn make_session(args: &DiagramArgs) -> anyhow::Result<arcsketch::ArcSession> {
    let cfg = load_config(args)?;
    let viewport = arcsketch::Viewport::new(args.width, args.height)?;
    Ok(arcsketch::ArcSession::new(cfg, viewport)?)
}

fn render_settings(args: &DiagramArgs) -> arcsketch::RenderSettings {
    arcsketch::RenderSettings {
        formulas: match args.formulas {
            FormulaChoice::None => arcsketch::FormulaMode::None,
            FormulaChoice::Plain => arcsketch::FormulaMode::Plain,
        },
    }
}

fn initial_event(angle: Option<f64>) -> arcsketch::InputEvent {
    angle.map_or(
        arcsketch::InputEvent::Tick,
        arcsketch::InputEvent::SliderChanged,
    )
}

fn cmd_state(args: StateArgs) -> anyhow::Result<()> {
    let mut session = make_session(&args.diagram)?;
    let state = session.handle(initial_event(args.angle))?;
    let json = serde_json::to_string_pretty(state).context("serialize arc state")?;
    println!("{json}");
    Ok(())
}

fn is_svg_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut session = make_session(&args.diagram)?;
    let kind = if is_svg_path(&args.out) {
        arcsketch::BackendKind::Svg
    } else {
        arcsketch::BackendKind::Raster
    };
    let mut backend = arcsketch::create_backend(kind, render_settings(&args.diagram));

    let frame = session.recompute_and_render(initial_event(args.angle), backend.as_mut())?;

    match &frame.rendered.pixels {
        Some(pixels) => pixels.save_png(&args.out)?,
        None => {
            if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&args.out, &frame.rendered.svg)
                .with_context(|| format!("write svg '{}'", args.out.display()))?;
        }
    }

    eprintln!(
        "wrote {} (angle {:.3} rad, radius {:.1} px)",
        args.out.display(),
        frame.state.angle,
        frame.state.radius
    );
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    if args.frames == 0 {
        anyhow::bail!("--frames must be > 0");
    }
    let mut session = make_session(&args.diagram)?;
    let (kind, format) = match args.format {
        FormatChoice::Svg => (arcsketch::BackendKind::Svg, arcsketch::OutputFormat::Svg),
        FormatChoice::Png => (arcsketch::BackendKind::Raster, arcsketch::OutputFormat::Png),
    };
    let mut backend = arcsketch::create_backend(kind, render_settings(&args.diagram));
    let mut sink = arcsketch::DirectorySink::new(&args.out_dir, format);

    let stats = session.render_sweep(args.frames, backend.as_mut(), &mut sink)?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_rendered,
        args.out_dir.display()
    );
    Ok(())
}
