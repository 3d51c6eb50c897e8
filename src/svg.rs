//! SVG rasterization into a straight-alpha RGBA bitmap.

use std::sync::Arc;

use image::{Rgba, RgbaImage};
use resvg::{tiny_skia, usvg};

use crate::{Error, Result};

/// Render an SVG document into a `px` x `px` bitmap, scaled to fit.
///
/// System fonts are loaded into the parser so `<text>` elements render.
/// The returned bitmap uses straight (non-premultiplied) alpha, ready for
/// the bitmap compositor. Deterministic for identical input.
pub fn rasterize(svg_text: &str, px: u32) -> Result<RgbaImage> {
    if px == 0 {
        return Err(Error::InvalidSpec("zero-sized raster target".to_string()));
    }

    let mut options = usvg::Options::default();
    Arc::make_mut(&mut options.fontdb).load_system_fonts();
    let tree = usvg::Tree::from_str(svg_text, &options).map_err(|e| Error::Svg(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(px, px)
        .ok_or_else(|| Error::Svg(format!("failed to allocate {px}x{px} pixmap")))?;

    let scale_x = px as f32 / tree.size().width();
    let scale_y = px as f32 / tree.size().height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia pixels are premultiplied; demultiply before handing the
    // bitmap to alpha-sensitive compositing.
    let mut out = RgbaImage::new(px, px);
    for (src, dst) in pixmap.pixels().iter().zip(out.pixels_mut()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(out)
}
