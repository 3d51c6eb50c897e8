//! Bitmap recentering and background composition.
//!
//! Vector sources often bake asymmetric whitespace into their canvas; the
//! recentering pass crops a bitmap to its non-transparent pixel bounds and
//! pastes the crop back centered, so the visual content sits exactly in the
//! middle of its nominal square before it is composed onto a background.

use image::{imageops, Rgb, Rgba, RgbImage, RgbaImage};

use crate::{Error, Result};

/// Bounding box (x, y, width, height) of all pixels with non-zero alpha,
/// or `None` for a fully transparent bitmap
pub fn alpha_bounds(bitmap: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut seen = false;

    for (x, y, pixel) in bitmap.enumerate_pixels() {
        if pixel.0[3] != 0 {
            seen = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    seen.then(|| (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

/// Re-center a bitmap's visible content within its own dimensions.
///
/// Crops to the non-transparent bounds and pastes the crop onto a fresh
/// transparent canvas at ((w - crop_w)/2, (h - crop_h)/2). A fully
/// transparent input is returned unchanged. Idempotent.
pub fn recenter(bitmap: &RgbaImage) -> RgbaImage {
    let Some((x, y, crop_w, crop_h)) = alpha_bounds(bitmap) else {
        return bitmap.clone();
    };

    let crop = imageops::crop_imm(bitmap, x, y, crop_w, crop_h).to_image();
    let mut canvas = RgbaImage::new(bitmap.width(), bitmap.height());
    let paste_x = (bitmap.width() - crop_w) / 2;
    let paste_y = (bitmap.height() - crop_h) / 2;
    imageops::replace(&mut canvas, &crop, i64::from(paste_x), i64::from(paste_y));
    canvas
}

/// Compose an icon bitmap onto an opaque colored background with `padding`
/// pixels reserved on every side, using the icon's alpha as the paste mask.
///
/// Where the icon is fully transparent the output is exactly the background
/// color; where it is fully opaque the output is exactly the icon color.
pub fn compose_on_background(
    icon: &RgbaImage,
    background_size: u32,
    padding: u32,
    color: Rgb<u8>,
) -> Result<RgbImage> {
    if padding.saturating_mul(2) >= background_size {
        return Err(Error::InvalidSpec(format!(
            "padding {padding} leaves no room on a {background_size}px canvas"
        )));
    }

    let Rgb([r, g, b]) = color;
    let mut canvas = RgbaImage::from_pixel(background_size, background_size, Rgba([r, g, b, 255]));
    imageops::overlay(&mut canvas, icon, i64::from(padding), i64::from(padding));

    let mut out = RgbImage::new(background_size, background_size);
    for (src, dst) in canvas.pixels().zip(out.pixels_mut()) {
        *dst = Rgb([src.0[0], src.0[1], src.0[2]]);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap_with_rect(size: u32, x: u32, y: u32, w: u32, h: u32) -> RgbaImage {
        let mut img = RgbaImage::new(size, size);
        for py in y..y + h {
            for px in x..x + w {
                img.put_pixel(px, py, Rgba([10, 200, 30, 255]));
            }
        }
        img
    }

    #[test]
    fn alpha_bounds_finds_tight_box() {
        let img = bitmap_with_rect(64, 5, 9, 10, 6);
        assert_eq!(alpha_bounds(&img), Some((5, 9, 10, 6)));
    }

    #[test]
    fn alpha_bounds_none_for_transparent() {
        let img = RgbaImage::new(32, 32);
        assert_eq!(alpha_bounds(&img), None);
    }

    #[test]
    fn recenter_moves_content_to_middle() {
        let img = bitmap_with_rect(64, 5, 9, 10, 6);
        let centered = recenter(&img);
        assert_eq!(centered.dimensions(), (64, 64));
        assert_eq!(alpha_bounds(&centered), Some((27, 29, 10, 6)));
    }

    #[test]
    fn recenter_is_idempotent() {
        let img = bitmap_with_rect(48, 1, 30, 7, 13);
        let once = recenter(&img);
        let twice = recenter(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn recenter_passes_through_transparent_input() {
        let img = RgbaImage::new(16, 16);
        assert_eq!(recenter(&img), img);
    }

    #[test]
    fn recenter_preserves_partial_alpha() {
        let mut img = RgbaImage::new(10, 10);
        img.put_pixel(0, 0, Rgba([100, 100, 100, 128]));
        let centered = recenter(&img);
        assert_eq!(centered.get_pixel(4, 4), &Rgba([100, 100, 100, 128]));
    }

    #[test]
    fn compose_is_faithful_overlay() {
        let mut icon = RgbaImage::new(4, 4);
        icon.put_pixel(0, 0, Rgba([200, 50, 25, 255]));
        // (1, 0) left transparent

        let bg = Rgb([0, 0, 80]);
        let out = compose_on_background(&icon, 8, 2, bg).unwrap();
        assert_eq!(out.dimensions(), (8, 8));
        // Opaque icon pixel lands at (padding, padding) with the icon color
        assert_eq!(out.get_pixel(2, 2), &Rgb([200, 50, 25]));
        // Transparent icon pixel keeps the background color exactly
        assert_eq!(out.get_pixel(3, 2), &Rgb([0, 0, 80]));
        // Outside the padded region: background
        assert_eq!(out.get_pixel(0, 0), &Rgb([0, 0, 80]));
        assert_eq!(out.get_pixel(7, 7), &Rgb([0, 0, 80]));
    }

    #[test]
    fn compose_rejects_oversized_padding() {
        let icon = RgbaImage::new(4, 4);
        assert!(compose_on_background(&icon, 8, 4, Rgb([0, 0, 0])).is_err());
    }
}
