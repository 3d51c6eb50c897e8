//! Font resolution with ordered candidates and an explicit system fallback.
//!
//! The resolver walks a caller-supplied list of font file paths and returns
//! the first one that loads. When every candidate fails it falls back to
//! scanning the system font database, which degrades glyph shapes but never
//! the centering math. Only a host with no loadable font at all is an error.

use std::path::{Path, PathBuf};

use ab_glyph::{FontArc, FontVec};

use crate::{Error, Result};

/// Outcome of ordered-candidate font resolution
#[derive(Debug, Clone)]
pub enum FontResolution {
    /// A candidate path loaded
    Found {
        /// The loaded font handle
        font: FontArc,
        /// Which candidate produced it
        path: PathBuf,
    },
    /// Every candidate failed; this is the first usable system font
    UseDefault(FontArc),
}

impl FontResolution {
    /// The resolved font handle, whichever arm produced it
    pub fn font(&self) -> &FontArc {
        match self {
            FontResolution::Found { font, .. } => font,
            FontResolution::UseDefault(font) => font,
        }
    }

    /// Consume the resolution, keeping only the handle
    pub fn into_font(self) -> FontArc {
        match self {
            FontResolution::Found { font, .. } => font,
            FontResolution::UseDefault(font) => font,
        }
    }

    /// True when resolution fell through to the system fallback
    pub fn is_fallback(&self) -> bool {
        matches!(self, FontResolution::UseDefault(_))
    }
}

/// The production candidate list: the macOS faces known to cover the
/// double-struck symbol range, then common Linux sans faces so the ordered
/// fallback behaves the same off-macOS.
pub fn default_candidates() -> Vec<PathBuf> {
    [
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
        "/System/Library/Fonts/Helvetica.ttc",
        "/System/Library/Fonts/SFNSText.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// Try each candidate path in order; fall back to the system font database
/// when all fail.
///
/// Candidate failures (missing file, unparsable font) are skipped with a
/// debug log line. The fallback arm emits a warning since glyph shapes may
/// differ from the intended face. Errors only when the host has no loadable
/// font anywhere.
pub fn resolve(candidates: &[PathBuf]) -> Result<FontResolution> {
    for path in candidates {
        match load_candidate(path) {
            Ok(font) => {
                log::debug!("font resolved from candidate {}", path.display());
                return Ok(FontResolution::Found {
                    font,
                    path: path.clone(),
                });
            }
            Err(reason) => {
                log::debug!("font candidate {} skipped: {}", path.display(), reason);
            }
        }
    }

    log::warn!("no font candidate loaded; using a system font, glyphs may render differently");
    system_fallback()
        .map(FontResolution::UseDefault)
        .ok_or(Error::FontUnavailable)
}

fn load_candidate(path: &Path) -> std::result::Result<FontArc, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    FontArc::try_from_vec(bytes).map_err(|e| e.to_string())
}

/// First usable face from the system font database, preferring a sans face.
fn system_fallback() -> Option<FontArc> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let query = fontdb::Query {
        families: &[fontdb::Family::SansSerif],
        ..fontdb::Query::default()
    };
    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|face| face.id))?;

    db.with_face_data(id, |data, index| {
        FontVec::try_from_vec_and_index(data.to_vec(), index)
            .ok()
            .map(FontArc::from)
    })
    .flatten()
}
