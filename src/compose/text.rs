//! Glyph-run measurement, centering and drawing.
//!
//! The nominal origin of a run is the pen position on the baseline at the
//! start of layout. Measured bounds are offsets from that origin, so the
//! centering operations can cancel the font's left/top bearing: drawing at
//! the returned origin puts the visible ink, not the nominal type box, at
//! the center of the canvas.

use ab_glyph::{point, Font, FontArc, Glyph, OutlinedGlyph, PxScale, ScaleFont};
use image::{Pixel, Rgba, RgbaImage};

/// Tight visual extent of a rendered run, as signed pixel offsets from the
/// nominal draw origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    /// Bounds of a run with no visible ink
    pub const EMPTY: TextBounds = TextBounds {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// Visible ink width
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Visible ink height
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Lay out `text` from a pen origin of (0, 0), applying advances and
/// kerning, and hand each outlined glyph to `emit`. Whitespace and other
/// outline-less glyphs advance the pen but emit nothing.
fn layout_outlines<F>(font: &FontArc, scale: PxScale, text: &str, mut emit: F)
where
    F: FnMut(OutlinedGlyph),
{
    let scaled = font.as_scaled(scale);
    let mut caret = 0.0f32;
    let mut prev = None;

    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev_id) = prev {
            caret += scaled.kern(prev_id, id);
        }
        let glyph: Glyph = id.with_scale_and_position(scale, point(caret, 0.0));
        caret += scaled.h_advance(id);
        prev = Some(id);

        if let Some(outline) = font.outline_glyph(glyph) {
            emit(outline);
        }
    }
}

/// Measure the tight bounding box of `text` rendered at the nominal origin.
///
/// Missing glyphs measure as the font's notdef glyph. A run with no
/// outlines at all yields [`TextBounds::EMPTY`].
pub fn measure_run(font: &FontArc, scale: PxScale, text: &str) -> TextBounds {
    let mut bounds: Option<(f32, f32, f32, f32)> = None;

    layout_outlines(font, scale, text, |outline| {
        let b = outline.px_bounds();
        bounds = Some(match bounds {
            None => (b.min.x, b.min.y, b.max.x, b.max.y),
            Some((l, t, r, bo)) => (
                l.min(b.min.x),
                t.min(b.min.y),
                r.max(b.max.x),
                bo.max(b.max.y),
            ),
        });
    });

    match bounds {
        Some((l, t, r, b)) => TextBounds {
            left: l.floor() as i32,
            top: t.floor() as i32,
            right: r.ceil() as i32,
            bottom: b.ceil() as i32,
        },
        None => TextBounds::EMPTY,
    }
}

/// Draw origin that centers a run's visible ink on the canvas.
///
/// Both coordinates subtract the run's bearing offset, so rendering at the
/// returned origin places the measured bbox midpoints within a pixel of the
/// canvas midpoints.
pub fn center_single(bounds: &TextBounds, canvas_w: u32, canvas_h: u32) -> (i32, i32) {
    let x = (canvas_w as i32 - bounds.width()) / 2 - bounds.left;
    let y = (canvas_h as i32 - bounds.height()) / 2 - bounds.top;
    (x, y)
}

/// Draw origins for two runs placed side by side with no gap, centered
/// together as one horizontal block.
///
/// Each run is vertically centered on its own ink height; the runs do not
/// share a literal baseline, only the canvas's vertical center.
pub fn place_pair(
    large: &TextBounds,
    small: &TextBounds,
    canvas_w: u32,
    canvas_h: u32,
) -> ((i32, i32), (i32, i32)) {
    let total_w = large.width() + small.width();
    let start_x = (canvas_w as i32 - total_w) / 2;
    let center_y = canvas_h as i32 / 2;

    let large_origin = (
        start_x - large.left,
        center_y - large.height() / 2 - large.top,
    );
    let small_origin = (
        start_x + large.width() - small.left,
        center_y - small.height() / 2 - small.top,
    );
    (large_origin, small_origin)
}

/// Rasterize `text` onto `canvas` with its pen origin at `origin`,
/// alpha-blending glyph coverage in `color`. Out-of-bounds coverage is
/// clipped.
pub fn draw_run(
    canvas: &mut RgbaImage,
    origin: (i32, i32),
    font: &FontArc,
    scale: PxScale,
    text: &str,
    color: Rgba<u8>,
) {
    let (width, height) = canvas.dimensions();
    let Rgba([r, g, b, base_alpha]) = color;

    layout_outlines(font, scale, text, |outline| {
        let px_bounds = outline.px_bounds();
        let gx = origin.0 + px_bounds.min.x as i32;
        let gy = origin.1 + px_bounds.min.y as i32;

        outline.draw(|dx, dy, coverage| {
            let x = gx + dx as i32;
            let y = gy + dy as i32;
            if x < 0 || y < 0 || x >= width as i32 || y >= height as i32 {
                return;
            }
            let alpha = (coverage.clamp(0.0, 1.0) * f32::from(base_alpha)).round() as u8;
            if alpha == 0 {
                return;
            }
            canvas
                .get_pixel_mut(x as u32, y as u32)
                .blend(&Rgba([r, g, b, alpha]));
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_single_centers_ink_midpoints() {
        // Ink spans x in [-3, 17], y in [-20, 2]: 20x22 with bearing.
        let bounds = TextBounds {
            left: -3,
            top: -20,
            right: 17,
            bottom: 2,
        };
        let (x, y) = center_single(&bounds, 100, 60);

        let ink_min_x = x + bounds.left;
        let ink_min_y = y + bounds.top;
        let mid_x = ink_min_x * 2 + bounds.width();
        let mid_y = ink_min_y * 2 + bounds.height();
        // Midpoints within a pixel of the canvas midpoints
        assert!((mid_x - 100).abs() <= 2, "mid_x*2 = {mid_x}");
        assert!((mid_y - 60).abs() <= 2, "mid_y*2 = {mid_y}");
    }

    #[test]
    fn center_single_cancels_bearing() {
        let with_bearing = TextBounds {
            left: 7,
            top: -40,
            right: 57,
            bottom: 0,
        };
        let without = TextBounds {
            left: 0,
            top: -40,
            right: 50,
            bottom: 0,
        };
        let (x_a, _) = center_single(&with_bearing, 200, 200);
        let (x_b, _) = center_single(&without, 200, 200);
        // Same ink width, same final ink position regardless of bearing
        assert_eq!(x_a + with_bearing.left, x_b + without.left);
    }

    #[test]
    fn place_pair_matches_block_centering() {
        // Widths 50 and 30 on a 1024-wide canvas: block starts at 472.
        let large = TextBounds {
            left: 5,
            top: -40,
            right: 55,
            bottom: 0,
        };
        let small = TextBounds {
            left: 2,
            top: -28,
            right: 32,
            bottom: 2,
        };
        let (large_origin, small_origin) = place_pair(&large, &small, 1024, 500);

        assert_eq!(large_origin.0, 472 - large.left);
        assert_eq!(small_origin.0, 472 + 50 - small.left);

        // Each run vertically centered on its own ink
        assert_eq!(large_origin.1, 250 - large.height() / 2 - large.top);
        assert_eq!(small_origin.1, 250 - small.height() / 2 - small.top);
    }

    #[test]
    fn place_pair_leaves_no_gap() {
        let large = TextBounds {
            left: 0,
            top: -10,
            right: 40,
            bottom: 0,
        };
        let small = TextBounds {
            left: -4,
            top: -8,
            right: 16,
            bottom: 0,
        };
        let (large_origin, small_origin) = place_pair(&large, &small, 300, 100);
        let large_ink_end = large_origin.0 + large.right;
        let small_ink_start = small_origin.0 + small.left;
        assert_eq!(large_ink_end, small_ink_start);
    }

    #[test]
    fn empty_bounds_have_zero_extent() {
        assert_eq!(TextBounds::EMPTY.width(), 0);
        assert_eq!(TextBounds::EMPTY.height(), 0);
    }
}
