mod scene;
mod trace;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use boxlens_engine::coords::Viewport;
use boxlens_engine::logging::{init_logging, LoggingConfig};
use boxlens_engine::raster::Rasterizer;
use boxlens_engine::surface::Canvas;
use boxlens_engine::text::FontSystem;

use crate::scene::Scene;

/// Renders a debug overlay scene to PNG or a draw-command trace.
#[derive(Parser, Debug)]
#[command(name = "boxlens-studio")]
#[command(version)]
struct Args {
    /// Scene file (JSON)
    scene: PathBuf,

    /// Write the rasterised overlay to this PNG file
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// TrueType/OpenType font for text; a system monospace face is tried otherwise
    #[arg(long)]
    font: Option<PathBuf>,

    /// Print the draw-command trace to stdout
    #[arg(long)]
    trace: bool,

    /// Log filter in env_logger syntax, overrides RUST_LOG
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() {
    let args = Args::parse();

    init_logging(match &args.log_filter {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    if let Err(e) = run(&args) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let src = std::fs::read_to_string(&args.scene)
        .with_context(|| format!("reading scene {}", args.scene.display()))?;
    let scene: Scene = serde_json::from_str(&src)
        .with_context(|| format!("parsing scene {}", args.scene.display()))?;

    let mut canvas = Canvas::new(scene.surface.width, scene.surface.height);
    scene.draw(&mut canvas).context("drawing overlay")?;
    log::info!("{}: {} draw commands", args.scene.display(), canvas.draw_list().len());

    if args.trace || args.out.is_none() {
        print!("{}", trace::format_trace(canvas.draw_list()));
    }

    if let Some(out) = &args.out {
        let mut fonts = FontSystem::new();
        match font_bytes(args.font.as_deref())? {
            Some(bytes) => {
                fonts.load_font(&bytes).context("loading font")?;
            }
            None => log::warn!("no font found; text will be skipped"),
        }

        let size = Viewport::new(scene.surface.width, scene.surface.height);
        let pixels = Rasterizer::new(&fonts)
            .render(canvas.draw_list(), size)
            .context("rasterising overlay")?;
        pixels
            .save_png(out)
            .with_context(|| format!("writing {}", out.display()))?;
        log::info!("wrote {}x{} {}", pixels.width(), pixels.height(), out.display());
    }

    Ok(())
}

/// An explicit font must load; otherwise the first readable system face wins.
fn font_bytes(explicit: Option<&Path>) -> Result<Option<Vec<u8>>> {
    if let Some(path) = explicit {
        let bytes = std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
        return Ok(Some(bytes));
    }
    Ok([
        "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
        "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
        "/usr/share/fonts/noto/NotoSansMono-Regular.ttf",
        "/Library/Fonts/Courier New.ttf",
        "C:\\Windows\\Fonts\\cour.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok()))
}
