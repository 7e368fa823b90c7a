use std::fs;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use linocut::{Effect, OutputFormat, RenderOptions, render_to_bytes};

#[derive(Parser, Debug)]
#[command(name = "linocut", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a stylized line-art image from a photo.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input image path.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Secondary image for the dual-spiral effect.
    #[arg(long)]
    second: Option<PathBuf>,

    /// Options JSON path; flags below override its fields.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Effect: spiral, square-grid, hexagon-grid, triangle-grid,
    /// diamond-grid, pentagon-grid, dual-spiral.
    #[arg(long)]
    effect: Option<Effect>,

    /// Canvas edge length in pixels.
    #[arg(long)]
    size: Option<u32>,

    /// Posterization level count.
    #[arg(long)]
    n_shades: Option<u32>,

    /// Invert the brightness mapping.
    #[arg(long, default_value_t = false)]
    invert: bool,

    /// Spiral stroke weight.
    #[arg(long)]
    thickness: Option<u32>,

    /// Number of spiral revolutions.
    #[arg(long)]
    turns: Option<f64>,

    /// Lattice density for grid effects.
    #[arg(long)]
    grid_size: Option<u32>,

    /// Output file path.
    #[arg(long)]
    out: PathBuf,

    /// Output format (png, bmp, jpeg).
    #[arg(long, default_value_t = OutputFormat::default())]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut opts: RenderOptions = match &args.options {
        Some(p) => {
            let text = fs::read_to_string(p)
                .with_context(|| format!("read options '{}'", p.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse options '{}'", p.display()))?
        }
        None => RenderOptions::default(),
    };

    if let Some(effect) = args.effect {
        opts.effect = effect;
    }
    if let Some(size) = args.size {
        opts.size = size;
    }
    if let Some(n_shades) = args.n_shades {
        opts.n_shades = n_shades;
    }
    if args.invert {
        opts.invert = true;
    }
    if let Some(thickness) = args.thickness {
        opts.spiral_thickness = thickness;
    }
    if let Some(turns) = args.turns {
        opts.spiral_turns = turns;
    }
    if let Some(grid_size) = args.grid_size {
        opts.grid_size = grid_size;
    }

    let source = fs::read(&args.in_path)
        .with_context(|| format!("read input '{}'", args.in_path.display()))?;
    let second = args
        .second
        .as_ref()
        .map(|p| fs::read(p).with_context(|| format!("read secondary '{}'", p.display())))
        .transpose()?;

    let bytes = render_to_bytes(&source, second.as_deref(), &opts, args.format)?;

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
    }
    fs::write(&args.out, &bytes)
        .with_context(|| format!("write output '{}'", args.out.display()))?;
    Ok(())
}
