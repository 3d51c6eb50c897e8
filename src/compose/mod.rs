//! Compositors for glyph runs and icon bitmaps.
//!
//! Both follow the same pattern: measure the tight visual bounds of the
//! content, compute a centering offset from those bounds, then place. The
//! text compositor corrects for font bearing; the bitmap compositor strips
//! asymmetric padding baked into a rasterized vector.

pub mod bitmap;
pub mod text;

pub use bitmap::{alpha_bounds, compose_on_background, recenter};
pub use text::{center_single, draw_run, measure_run, place_pair, TextBounds};
