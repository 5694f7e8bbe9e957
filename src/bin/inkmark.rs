use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use inkmark::{Affine, InkingTool, InkmarkConfig, Orientation, Rect, ShapeKind, Size};

#[derive(Parser, Debug)]
#[command(name = "inkmark", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a shape drawing as JSON.
    Shape(ShapeArgs),
    /// Rewrite light pixels of an image to opaque black.
    Threshold(ThresholdArgs),
    /// Normalize a capture transform for its natural size.
    Orient(OrientArgs),
}

#[derive(Parser, Debug)]
struct ShapeArgs {
    /// circle | ellipse | rectangle | triangle | star
    #[arg(long)]
    kind: ShapeKind,

    /// Bounds as `x,y,width,height`.
    #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    bounds: Vec<f64>,

    /// Optional JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulate an active tool of this width (thickness floor).
    #[arg(long)]
    tool_width: Option<f64>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ThresholdArgs {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Override the channel threshold.
    #[arg(long)]
    threshold: Option<u8>,

    /// Enable row-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Optional JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct OrientArgs {
    /// Transform coefficients as `a,b,c,d,tx,ty`.
    #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
    matrix: Vec<f64>,

    /// Natural content size as `width,height`.
    #[arg(long, value_delimiter = ',', required = true)]
    natural: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Shape(args) => cmd_shape(args),
        Command::Threshold(args) => cmd_threshold(args),
        Command::Orient(args) => cmd_orient(args),
    }
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<InkmarkConfig> {
    match path {
        Some(p) => InkmarkConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(InkmarkConfig::default()),
    }
}

fn cmd_shape(args: ShapeArgs) -> anyhow::Result<()> {
    let [x, y, w, h] = coords::<4>("bounds", &args.bounds)?;
    let bounds = Rect::from_origin_size((x, y), (w, h));
    let cfg = load_config(args.config.as_deref())?;
    let tool = args.tool_width.map(|width| InkingTool {
        ink: cfg.shape.ink,
        width,
    });
    let style = cfg.shape.for_tool(tool.as_ref());
    let drawing = inkmark::generate_drawing(args.kind, bounds, &style);
    tracing::info!(shape = %args.kind, strokes = drawing.len(), "generated shape");

    let json = serde_json::to_string_pretty(&drawing).context("serialize drawing")?;
    match args.out {
        Some(out) => {
            write_output(&out, json.as_bytes())?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_threshold(args: ThresholdArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(t) = args.threshold {
        cfg.threshold.threshold = t;
    }
    if args.parallel {
        cfg.threshold.parallel = true;
    }
    if args.threads.is_some() {
        cfg.threshold.threads = args.threads;
    }

    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read image '{}'", args.in_path.display()))?;
    let mut img = inkmark::decode_image(&bytes)?;
    let stats = {
        let mut buf = img.pixel_buffer()?;
        inkmark::threshold_in_place_with(&mut buf, &cfg.threshold)?
    };
    tracing::info!(
        visited = stats.pixels_visited,
        rewritten = stats.pixels_rewritten,
        "threshold pass"
    );

    let png = inkmark::encode_png(&img)?;
    write_output(&args.out, &png)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

#[derive(serde::Serialize)]
struct OrientReport {
    orientation: Option<Orientation>,
    matrix: [f64; 6],
    oriented_size: Option<Size>,
}

fn cmd_orient(args: OrientArgs) -> anyhow::Result<()> {
    let matrix = Affine::new(coords::<6>("matrix", &args.matrix)?);
    let [w, h] = coords::<2>("natural", &args.natural)?;
    let natural = Size::new(w, h);

    let orientation = Orientation::classify(matrix);
    let normalized = inkmark::normalize_transform(matrix, natural);
    let report = OrientReport {
        orientation,
        matrix: normalized.as_coeffs(),
        oriented_size: orientation.map(|o| o.oriented_size(natural)),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("serialize orientation report")?
    );
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}

fn coords<const N: usize>(flag: &str, values: &[f64]) -> anyhow::Result<[f64; N]> {
    <[f64; N]>::try_from(values).map_err(|_| {
        anyhow::anyhow!(
            "--{flag} expects {N} comma-separated numbers, got {}",
            values.len()
        )
    })
}
