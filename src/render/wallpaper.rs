//! Wallpaper rendering: one quote in, one canvas out.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::config::Config;
use crate::error::{QuotewallError, Result};
use crate::text::wrap;
use crate::types::Colour;

use super::font::Typeface;
use super::jpeg::write_jpeg;
use super::layout::{layout, WrappedBlock};

/// Renders quotes onto canvases using a shared configuration and typeface.
pub struct Renderer<'a, T: Typeface + ?Sized> {
    config: &'a Config,
    typeface: &'a T,
}

impl<'a, T: Typeface + ?Sized> Renderer<'a, T> {
    pub fn new(config: &'a Config, typeface: &'a T) -> Self {
        Self { config, typeface }
    }

    /// Case, wrap, measure and position a quote.
    pub fn compose(&self, quote: &str) -> WrappedBlock {
        let text = self.config.text_case.apply(quote);
        let lines = wrap(&text, self.config.text_width);

        layout(
            lines,
            |line| self.typeface.measure(line),
            self.config.width,
            self.config.height,
            self.config.line_spacing,
        )
    }

    /// Paint a composed block onto a fresh canvas.
    ///
    /// Colour tokens are resolved here, so an unusable colour fails the item
    /// being painted.
    pub fn paint(&self, block: &WrappedBlock) -> Result<RgbImage> {
        let background = Colour::resolve(&self.config.background)?;
        let foreground = Colour::resolve(&self.config.foreground)?;

        let (width, height) = (self.config.width, self.config.height);
        let bytes = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(3));
        if bytes.is_none() {
            return Err(QuotewallError::Render {
                message: format!("Canvas {}x{} is too large to allocate", width, height),
            });
        }

        let mut canvas = RgbImage::from_pixel(width, height, Rgb(background.to_rgb()));

        for line in &block.lines {
            let (x, y) = line.origin.to_pixel();
            tracing::trace!(text = %line.text, x, y, "drawing line");
            self.typeface.draw(&mut canvas, x, y, foreground, &line.text);
        }

        Ok(canvas)
    }

    /// Render `quote` and save it as a JPEG at `path`.
    pub fn render_to(&self, quote: &str, path: &Path) -> Result<()> {
        let block = self.compose(quote);
        let canvas = self.paint(&block)?;
        write_jpeg(&canvas, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{system_font, FixedTypeface};
    use crate::text::TextCase;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn small_config() -> Config {
        Config {
            width: 200,
            height: 100,
            text_width: 10,
            line_spacing: 5,
            ..Config::default()
        }
    }

    #[test]
    fn test_compose_applies_case_and_wrap() {
        let config = small_config();
        let face = FixedTypeface::default();
        let block = Renderer::new(&config, &face).compose("hello wide world");

        let texts: Vec<&str> = block.lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["HELLO WIDE", "WORLD"]);
        assert_eq!(block.height, 20.0 + 5.0 + 20.0);
    }

    #[test]
    fn test_compose_respects_none_case() {
        let config = Config {
            text_case: TextCase::None,
            ..small_config()
        };
        let face = FixedTypeface::default();
        let block = Renderer::new(&config, &face).compose("Keep Me");
        assert_eq!(block.lines[0].text, "Keep Me");
    }

    #[test]
    fn test_paint_background_and_text() {
        let config = Config {
            background: "navy".to_string(),
            foreground: "yellow".to_string(),
            ..small_config()
        };
        let face = FixedTypeface::default();
        let renderer = Renderer::new(&config, &face);
        let canvas = renderer.paint(&renderer.compose("hi")).unwrap();

        assert_eq!(canvas.dimensions(), (200, 100));
        assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 128]);
        // "HI" is 20x20 centered: x 90..110, y 40..60.
        assert_eq!(canvas.get_pixel(95, 45).0, [255, 255, 0]);
        assert_eq!(canvas.get_pixel(89, 45).0, [0, 0, 128]);
    }

    #[test]
    fn test_paint_rejects_unknown_colour() {
        let config = Config {
            background: "chartreuse".to_string(),
            ..small_config()
        };
        let face = FixedTypeface::default();
        let renderer = Renderer::new(&config, &face);
        assert!(renderer.paint(&renderer.compose("hi")).is_err());
    }

    #[test]
    fn test_paint_oversized_canvas_is_an_error() {
        let config = Config {
            width: u32::MAX,
            height: u32::MAX,
            ..small_config()
        };
        let face = FixedTypeface::default();
        let renderer = Renderer::new(&config, &face);

        let err = renderer.paint(&WrappedBlock::default()).unwrap_err();
        assert!(matches!(err, QuotewallError::Render { .. }));
    }

    #[test]
    fn test_render_to_writes_jpeg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("1.jpg");
        let config = small_config();
        let face = FixedTypeface::default();

        Renderer::new(&config, &face).render_to("hi", &path).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (200, 100));
    }

    #[test]
    fn test_render_with_system_font() {
        let Some(font) = system_font(30) else {
            eprintln!("skipping: no system font available");
            return;
        };

        let config = small_config();
        let renderer = Renderer::new(&config, &font);
        let block = renderer.compose("hello");
        let canvas = renderer.paint(&block).unwrap();

        assert_eq!(block.lines.len(), 1);
        assert!(block.width > 0.0 && block.width < 200.0);
        assert!(canvas.pixels().any(|p| p.0 != [0, 0, 0]));
    }
}
