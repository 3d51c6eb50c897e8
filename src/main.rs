use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use brandmark::{assets, font, parse_hex_color, FeatureSpec, IconSpec, SvgIconSpec};

#[derive(Parser, Debug)]
#[command(name = "brandmark", about = "Generate brand asset images", version)]
struct Cli {
    /// Font file tried before the built-in candidate list
    #[arg(long, global = true)]
    font: Option<PathBuf>,

    /// Directory generated files are written into
    #[arg(long, global = true, default_value = ".")]
    out_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render icon.png and logo.png from a centered symbol
    Icon(IconArgs),
    /// Render feature-graphic.png (large symbol + wordmark)
    Feature(FeatureArgs),
    /// Render icon.png from an SVG source
    SvgIcon(SvgIconArgs),
    /// Render every asset in one run
    All(AllArgs),
}

#[derive(Args, Debug)]
struct IconArgs {
    /// Symbol drawn centered on the canvas
    #[arg(long, default_value = "ℂ")]
    symbol: String,
    /// Canvas width and height in pixels
    #[arg(long, default_value_t = 1024)]
    size: u32,
    /// Symbol pixel height
    #[arg(long, default_value_t = 850.0)]
    font_size: f32,
    /// Background color (hex)
    #[arg(long, default_value = "#000000")]
    background: String,
    /// Ink color (hex)
    #[arg(long, default_value = "#ffffff")]
    color: String,
}

#[derive(Args, Debug)]
struct FeatureArgs {
    /// Leading symbol
    #[arg(long, default_value = "ℂ")]
    symbol: String,
    /// Trailing wordmark
    #[arg(long, default_value = "onduit")]
    wordmark: String,
    /// Canvas width in pixels
    #[arg(long, default_value_t = 1024)]
    width: u32,
    /// Canvas height in pixels
    #[arg(long, default_value_t = 500)]
    height: u32,
    /// Symbol pixel height
    #[arg(long, default_value_t = 160.0)]
    symbol_size: f32,
    /// Wordmark pixel height
    #[arg(long, default_value_t = 120.0)]
    wordmark_size: f32,
    /// Background color (hex)
    #[arg(long, default_value = "#000000")]
    background: String,
    /// Ink color (hex)
    #[arg(long, default_value = "#ffffff")]
    color: String,
}

#[derive(Args, Debug)]
struct SvgIconArgs {
    /// SVG source file
    #[arg(long)]
    svg: PathBuf,
    /// Canvas width and height in pixels
    #[arg(long, default_value_t = 1024)]
    size: u32,
    /// Border reserved around the icon on every side
    #[arg(long, default_value_t = 180)]
    padding: u32,
    /// Background color (hex)
    #[arg(long, default_value = "#000000")]
    background: String,
}

#[derive(Args, Debug)]
struct AllArgs {
    #[command(flatten)]
    icon: IconArgs,
    /// Trailing wordmark for the feature graphic
    #[arg(long, default_value = "onduit")]
    wordmark: String,
    /// SVG source; when given, icon.png comes from the SVG instead of the symbol
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Border around the SVG icon
    #[arg(long, default_value_t = 180)]
    padding: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating output directory {}", cli.out_dir.display()))?;

    match &cli.command {
        Command::Icon(args) => run_icon(args, &cli)?,
        Command::Feature(args) => run_feature(args, &cli)?,
        Command::SvgIcon(args) => run_svg_icon(args, &cli)?,
        Command::All(args) => run_all(args, &cli)?,
    }
    Ok(())
}

fn resolve_font(cli: &Cli) -> anyhow::Result<ab_glyph::FontArc> {
    let mut candidates = Vec::new();
    if let Some(path) = &cli.font {
        candidates.push(path.clone());
    }
    candidates.extend(font::default_candidates());
    Ok(font::resolve(&candidates)?.into_font())
}

fn run_icon(args: &IconArgs, cli: &Cli) -> anyhow::Result<()> {
    let spec = icon_spec(args)?;
    let font = resolve_font(cli)?;
    let (icon, logo) = assets::render_app_icon(&spec, &font)?;

    let icon_path = cli.out_dir.join("icon.png");
    let logo_path = cli.out_dir.join("logo.png");
    assets::write_png(icon, &icon_path)?;
    report(&icon_path, spec.size, spec.size);
    assets::write_png(logo, &logo_path)?;
    report(&logo_path, spec.size, spec.size);
    Ok(())
}

fn run_feature(args: &FeatureArgs, cli: &Cli) -> anyhow::Result<()> {
    let spec = FeatureSpec {
        symbol: args.symbol.clone(),
        wordmark: args.wordmark.clone(),
        width: args.width,
        height: args.height,
        symbol_px: args.symbol_size,
        wordmark_px: args.wordmark_size,
        background: parse_hex_color(&args.background)?,
        foreground: parse_hex_color(&args.color)?,
    };
    let font = resolve_font(cli)?;
    let graphic = assets::render_feature_graphic(&spec, &font)?;

    let path = cli.out_dir.join("feature-graphic.png");
    assets::write_png(graphic, &path)?;
    report(&path, spec.width, spec.height);
    Ok(())
}

fn run_svg_icon(args: &SvgIconArgs, cli: &Cli) -> anyhow::Result<()> {
    let spec = SvgIconSpec {
        size: args.size,
        padding: args.padding,
        background: parse_hex_color(&args.background)?,
    };
    let svg_text = fs::read_to_string(&args.svg)
        .with_context(|| format!("reading SVG source {}", args.svg.display()))?;
    let icon = assets::render_svg_icon(&spec, &svg_text)?;

    let path = cli.out_dir.join("icon.png");
    assets::write_png(icon, &path)?;
    report(&path, spec.size, spec.size);
    Ok(())
}

fn run_all(args: &AllArgs, cli: &Cli) -> anyhow::Result<()> {
    let spec = icon_spec(&args.icon)?;
    let font = resolve_font(cli)?;

    let (icon, logo) = assets::render_app_icon(&spec, &font)?;
    let logo_path = cli.out_dir.join("logo.png");
    assets::write_png(logo, &logo_path)?;
    report(&logo_path, spec.size, spec.size);

    let icon_path = cli.out_dir.join("icon.png");
    if let Some(svg_source) = &args.svg {
        let svg_spec = SvgIconSpec {
            size: spec.size,
            padding: args.padding,
            background: spec.background,
        };
        let svg_text = fs::read_to_string(svg_source)
            .with_context(|| format!("reading SVG source {}", svg_source.display()))?;
        let svg_icon = assets::render_svg_icon(&svg_spec, &svg_text)?;
        assets::write_png(svg_icon, &icon_path)?;
    } else {
        assets::write_png(icon, &icon_path)?;
    }
    report(&icon_path, spec.size, spec.size);

    let feature = FeatureSpec {
        symbol: args.icon.symbol.clone(),
        wordmark: args.wordmark.clone(),
        background: spec.background,
        foreground: spec.foreground,
        ..Default::default()
    };
    let graphic = assets::render_feature_graphic(&feature, &font)?;
    let feature_path = cli.out_dir.join("feature-graphic.png");
    assets::write_png(graphic, &feature_path)?;
    report(&feature_path, feature.width, feature.height);
    Ok(())
}

fn icon_spec(args: &IconArgs) -> anyhow::Result<IconSpec> {
    Ok(IconSpec {
        symbol: args.symbol.clone(),
        size: args.size,
        font_px: args.font_size,
        background: parse_hex_color(&args.background)?,
        foreground: parse_hex_color(&args.color)?,
    })
}

fn report(path: &Path, width: u32, height: u32) {
    println!("Wrote {} ({}x{})", path.display(), width, height);
}
