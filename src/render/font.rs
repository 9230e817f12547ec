//! Font loading and text measurement.
//!
//! Fonts are found by walking an ordered list of candidate files and taking
//! the first one that exists and parses. Measuring and drawing go through
//! the [`Typeface`] trait so the pipeline can run against any glyph source.

use std::path::{Path, PathBuf};

use ab_glyph::{point, Font as _, FontVec, GlyphId, PxScale, Rect, ScaleFont as _};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;

use crate::config::Config;
use crate::error::{QuotewallError, Result};
use crate::types::Colour;

use super::layout::Extent;

/// Something that can measure and draw a line of text.
pub trait Typeface {
    /// Ink bounding box of `text` when drawn at the origin.
    fn measure(&self, text: &str) -> Extent;

    /// Draw `text` with its ascent line at `y` and its pen start at `x`.
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, colour: Colour, text: &str);
}

/// Built-in font search list, tried in order.
pub fn default_font_candidates() -> Vec<PathBuf> {
    [
        "PTMono.ttc",
        // macOS
        "/System/Library/Fonts/Monaco.ttf",
        "/System/Library/Fonts/Courier.dfont",
        "/Library/Fonts/Arial.ttf",
        // Linux
        "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
        "/usr/share/fonts/truetype/ubuntu/UbuntuMono-R.ttf",
        // Windows
        "C:/Windows/Fonts/consola.ttf",
        "C:/Windows/Fonts/cour.ttf",
        "C:/Windows/Fonts/arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// A parsed font at a fixed pixel size.
pub struct LoadedFont {
    font: FontVec,
    scale: PxScale,
    path: PathBuf,
}

impl LoadedFont {
    /// Parse a font file. Collections (`.ttc`) use their first face.
    pub fn open(path: &Path, size: u32) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| QuotewallError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read font: {}", e),
        })?;

        let font = FontVec::try_from_vec_and_index(data, 0).map_err(|e| QuotewallError::Font {
            message: format!("{}: {}", path.display(), e),
            help: None,
        })?;

        Ok(Self {
            font,
            scale: PxScale::from(size as f32),
            path: path.to_path_buf(),
        })
    }

    /// File this font was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pixel size the font is scaled to.
    pub fn size(&self) -> f32 {
        self.scale.y
    }
}

impl Typeface for LoadedFont {
    fn measure(&self, text: &str) -> Extent {
        // Mirrors the glyph placement of `draw_text_mut` so the measured box
        // is the box that gets painted.
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = 0.0f32;
        let mut last: Option<GlyphId> = None;
        let mut bounds: Option<Rect> = None;

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            let glyph = id.with_scale_and_position(self.scale, point(caret, scaled.ascent()));
            caret += scaled.h_advance(id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                if let Some(prev) = last {
                    caret += scaled.kern(id, prev);
                }
                last = Some(id);

                let bb = outlined.px_bounds();
                bounds = Some(match bounds {
                    None => bb,
                    Some(acc) => Rect {
                        min: point(acc.min.x.min(bb.min.x), acc.min.y.min(bb.min.y)),
                        max: point(acc.max.x.max(bb.max.x), acc.max.y.max(bb.max.y)),
                    },
                });
            }
        }

        bounds
            .map(|b| Extent::new(b.width(), b.height()))
            .unwrap_or_default()
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, colour: Colour, text: &str) {
        draw_text_mut(canvas, Rgb(colour.to_rgb()), x, y, self.scale, &self.font, text);
    }
}

/// Loads the first usable font from an ordered candidate list.
#[derive(Debug, Clone)]
pub struct FontLoader {
    candidates: Vec<PathBuf>,
}

impl FontLoader {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Candidates for a run: the explicit font alone, or the search list.
    pub fn from_config(config: &Config) -> Self {
        match &config.font {
            Some(path) => Self::new(vec![path.clone()]),
            None => Self::new(config.font_candidates.clone()),
        }
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Load the first candidate that exists and parses.
    pub fn load(&self, size: u32) -> Result<LoadedFont> {
        for path in &self.candidates {
            if !path.is_file() {
                tracing::trace!(path = %path.display(), "font candidate not present");
                continue;
            }

            match LoadedFont::open(path, size) {
                Ok(font) => {
                    tracing::debug!(path = %path.display(), size, "loaded font");
                    return Ok(font);
                }
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "skipping unusable font");
                }
            }
        }

        Err(QuotewallError::Font {
            message: format!("none of {} candidate(s) could be loaded", self.candidates.len()),
            help: Some("Pass --font <FILE> with a TrueType or OpenType font".to_string()),
        })
    }
}
