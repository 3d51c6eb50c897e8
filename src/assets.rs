//! Parameterized asset jobs.
//!
//! Each job is a pure render function from a spec struct (plus a resolved
//! font or SVG source) to finished pixels; persistence is a separate,
//! terminal step so the jobs stay callable from tests.

use std::path::Path;

use ab_glyph::{FontArc, PxScale};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage, RgbImage};

use crate::compose::{center_single, compose_on_background, draw_run, measure_run, place_pair, recenter};
use crate::{svg, Error, FeatureSpec, IconSpec, Result, SvgIconSpec};

/// Render the app icon and its transparent logo twin.
///
/// The symbol is measured once and drawn at the same centered origin onto
/// both canvases, so icon and logo line up pixel for pixel.
pub fn render_app_icon(spec: &IconSpec, font: &FontArc) -> Result<(RgbImage, RgbaImage)> {
    if spec.size == 0 {
        return Err(Error::InvalidSpec("zero-sized icon canvas".to_string()));
    }

    let scale = PxScale::from(spec.font_px);
    let bounds = measure_run(font, scale, &spec.symbol);
    let origin = center_single(&bounds, spec.size, spec.size);

    let ink = opaque(spec.foreground);
    let mut icon = RgbaImage::from_pixel(spec.size, spec.size, opaque(spec.background));
    let mut logo = RgbaImage::new(spec.size, spec.size);
    draw_run(&mut icon, origin, font, scale, &spec.symbol, ink);
    draw_run(&mut logo, origin, font, scale, &spec.symbol, ink);

    Ok((flatten(&icon), logo))
}

/// Render the feature graphic: the symbol at its large scale followed by
/// the wordmark, horizontally centered together and each vertically
/// centered on its own ink.
pub fn render_feature_graphic(spec: &FeatureSpec, font: &FontArc) -> Result<RgbImage> {
    if spec.width == 0 || spec.height == 0 {
        return Err(Error::InvalidSpec("zero-sized feature canvas".to_string()));
    }

    let symbol_scale = PxScale::from(spec.symbol_px);
    let wordmark_scale = PxScale::from(spec.wordmark_px);
    let symbol_bounds = measure_run(font, symbol_scale, &spec.symbol);
    let wordmark_bounds = measure_run(font, wordmark_scale, &spec.wordmark);
    let (symbol_origin, wordmark_origin) =
        place_pair(&symbol_bounds, &wordmark_bounds, spec.width, spec.height);

    let ink = opaque(spec.foreground);
    let mut canvas = RgbaImage::from_pixel(spec.width, spec.height, opaque(spec.background));
    draw_run(&mut canvas, symbol_origin, font, symbol_scale, &spec.symbol, ink);
    draw_run(
        &mut canvas,
        wordmark_origin,
        font,
        wordmark_scale,
        &spec.wordmark,
        ink,
    );

    Ok(flatten(&canvas))
}

/// Render the SVG-derived icon: rasterize into the inner square, re-center
/// on the visible pixels, then compose onto the padded background.
pub fn render_svg_icon(spec: &SvgIconSpec, svg_text: &str) -> Result<RgbImage> {
    let inner = spec.inner_size()?;
    let bitmap = svg::rasterize(svg_text, inner)?;
    let centered = recenter(&bitmap);
    compose_on_background(&centered, spec.size, spec.padding, spec.background)
}

/// Persist an image as PNG, overwriting silently.
pub fn write_png(image: impl Into<DynamicImage>, path: &Path) -> Result<()> {
    image.into().save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn opaque(color: image::Rgb<u8>) -> Rgba<u8> {
    let image::Rgb([r, g, b]) = color;
    Rgba([r, g, b, 255])
}

fn flatten(canvas: &RgbaImage) -> RgbImage {
    let mut out = RgbImage::new(canvas.width(), canvas.height());
    for (src, dst) in canvas.pixels().zip(out.pixels_mut()) {
        *dst = image::Rgb([src.0[0], src.0[1], src.0[2]]);
    }
    out
}
