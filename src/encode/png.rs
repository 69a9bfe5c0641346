use std::io::Cursor;

use crate::foundation::core::OutputSpec;
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::render::surface::RenderedSlide;

/// Encode a rendered slide as an RGB PNG (no alpha channel).
pub fn encode_png(slide: &RenderedSlide) -> ShotframeResult<Vec<u8>> {
    let rgb = slide.to_rgb_image()?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(rgb)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| ShotframeError::render(format!("png encode failed: {e}")))?;
    Ok(buf)
}

/// File name of the `n`-th exported slide (1-based), e.g. `screenshot_1_1290x2796.png`.
pub fn file_name(n: usize, output: OutputSpec) -> String {
    format!("screenshot_{n}_{}x{}.png", output.width(), output.height())
}

/// Suggested archive name for a batch export, e.g. `screenshots_1290x2796.zip`.
pub fn archive_file_name(output: OutputSpec) -> String {
    format!("screenshots_{}x{}.zip", output.width(), output.height())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
