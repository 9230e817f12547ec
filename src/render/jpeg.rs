//! JPEG output for rendered wallpapers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::error::{QuotewallError, Result};

/// Encoder quality for every wallpaper.
pub const JPEG_QUALITY: u8 = 95;

/// Encode `canvas` as a JPEG and write it to `path`, replacing any file there.
pub fn write_jpeg(canvas: &RgbImage, path: &Path) -> Result<()> {
    let io_err = |message: String| QuotewallError::Io {
        path: path.to_path_buf(),
        message,
    };

    let file = File::create(path).map_err(|e| io_err(format!("Failed to create image: {}", e)))?;
    let mut writer = BufWriter::new(file);

    let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
    canvas
        .write_with_encoder(encoder)
        .map_err(|e| io_err(format!("Failed to encode JPEG: {}", e)))?;

    writer
        .flush()
        .map_err(|e| io_err(format!("Failed to write JPEG: {}", e)))?;

    Ok(())
}
