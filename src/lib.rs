//! Brandmark Asset Generator
//!
//! A small library (plus CLI) that produces static brand-asset images: an
//! application icon, a transparent logo, a feature graphic, and an
//! SVG-derived icon.
//!
//! The interesting work is centering: glyphs are placed by their *measured
//! ink*, not their nominal type box, so font bearing never skews a symbol
//! off-center, and rasterized vector icons are re-centered on their
//! non-transparent pixel bounds before composition.
//!
//! # Example
//!
//! ```no_run
//! use brandmark::{assets, font, IconSpec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolved = font::resolve(&font::default_candidates())?;
//! let spec = IconSpec::default();
//! let (icon, logo) = assets::render_app_icon(&spec, resolved.font())?;
//! icon.save("icon.png")?;
//! logo.save("logo.png")?;
//! # Ok(())
//! # }
//! ```

use image::Rgb;

pub mod error;
pub use error::{Error, Result};

pub mod font;

// Compositors: glyph-run centering and bitmap recentering
pub mod compose;

// SVG -> straight-alpha RGBA bitmap
pub mod svg;

// Parameterized asset jobs (app icon, feature graphic, SVG icon)
pub mod assets;

/// Spec for the app icon and its transparent logo twin
///
/// Defaults carry the production values: a 1024px square, an 850px symbol,
/// white ink on a black background.
///
/// # Examples
///
/// ```
/// let spec = brandmark::IconSpec::default();
/// assert_eq!(spec.size, 1024);
/// ```
#[derive(Debug, Clone)]
pub struct IconSpec {
    /// Symbol drawn centered on the canvas
    pub symbol: String,
    /// Canvas width and height in pixels
    pub size: u32,
    /// Symbol pixel height
    pub font_px: f32,
    /// Opaque background fill
    pub background: Rgb<u8>,
    /// Ink color
    pub foreground: Rgb<u8>,
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            symbol: "ℂ".to_string(),
            size: 1024,
            font_px: 850.0,
            background: Rgb([0, 0, 0]),
            foreground: Rgb([255, 255, 255]),
        }
    }
}

/// Spec for the feature graphic: a large symbol followed by a wordmark,
/// centered together as one block
#[derive(Debug, Clone)]
pub struct FeatureSpec {
    /// Leading symbol, rendered at `symbol_px`
    pub symbol: String,
    /// Trailing wordmark, rendered at `wordmark_px`
    pub wordmark: String,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Symbol pixel height
    pub symbol_px: f32,
    /// Wordmark pixel height
    pub wordmark_px: f32,
    /// Opaque background fill
    pub background: Rgb<u8>,
    /// Ink color
    pub foreground: Rgb<u8>,
}

impl Default for FeatureSpec {
    fn default() -> Self {
        Self {
            symbol: "ℂ".to_string(),
            wordmark: "onduit".to_string(),
            width: 1024,
            height: 500,
            symbol_px: 160.0,
            wordmark_px: 120.0,
            background: Rgb([0, 0, 0]),
            foreground: Rgb([255, 255, 255]),
        }
    }
}

/// Spec for the SVG-derived icon: the vector is rasterized into the inner
/// square (`size - 2 * padding`), re-centered on its visible pixels, then
/// composed onto an opaque background
#[derive(Debug, Clone)]
pub struct SvgIconSpec {
    /// Canvas width and height in pixels
    pub size: u32,
    /// Border reserved around the icon on every side
    pub padding: u32,
    /// Opaque background fill
    pub background: Rgb<u8>,
}

impl Default for SvgIconSpec {
    fn default() -> Self {
        Self {
            size: 1024,
            padding: 180,
            background: Rgb([0, 0, 0]),
        }
    }
}

impl SvgIconSpec {
    /// Side length of the inner square the vector is rasterized into
    pub fn inner_size(&self) -> Result<u32> {
        self.size
            .checked_sub(self.padding.saturating_mul(2))
            .filter(|&inner| inner > 0)
            .ok_or_else(|| {
                Error::InvalidSpec(format!(
                    "padding {} leaves no room on a {}px canvas",
                    self.padding, self.size
                ))
            })
    }
}

/// Parse a `#rgb` or `#rrggbb` hex color (leading `#` optional)
pub fn parse_hex_color(s: &str) -> Result<Rgb<u8>> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let invalid = || Error::InvalidSpec(format!("invalid hex color: {s:?}"));
    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = c.to_digit(16).ok_or_else(invalid)? as u8;
                out[i] = v << 4 | v;
            }
            Ok(Rgb(out))
        }
        6 => {
            let mut out = [0u8; 3];
            for (i, slot) in out.iter_mut().enumerate() {
                *slot = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
            }
            Ok(Rgb(out))
        }
        _ => Err(invalid()),
    }
}
