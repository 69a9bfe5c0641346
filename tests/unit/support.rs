//! Shared fixtures for unit tests.

use std::io::Cursor;

use crate::assets::color::Color;
use crate::foundation::core::Point;
use crate::foundation::error::ShotframeResult;
use crate::text::shaper::{FontSpec, TextShaper};

/// Paints one solid box per word: advance is half the font size per character.
#[derive(Debug)]
pub(crate) struct BlockShaper;

impl TextShaper for BlockShaper {
    fn measure(&mut self, text: &str, font: FontSpec) -> ShotframeResult<f64> {
        Ok(text.chars().count() as f64 * f64::from(font.size_px) * 0.5)
    }

    fn draw(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        origin: Point,
        font: FontSpec,
        color: Color,
    ) -> ShotframeResult<()> {
        let size = f64::from(font.size_px);
        let w = self.measure(text, font)?;
        ctx.set_paint(color.to_peniko());
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            origin.x,
            origin.y + size * 0.2,
            origin.x + w,
            origin.y + size,
        ));
        Ok(())
    }
}

/// Encode a flat-colored RGB PNG.
pub(crate) fn solid_png(w: u32, h: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(w, h, image::Rgb(rgb));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}
