use crate::foundation::core::OutputSpec;
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::foundation::math::mul_div255_u8;

/// What happened to a slide's photo during rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageStatus {
    /// The slide has no photo.
    Absent,
    /// The photo was cropped and drawn.
    Drawn,
    /// The caption left no room below it; the photo was not drawn.
    NoRoom,
    /// Loading or decoding failed; the slide rendered without its photo.
    Failed(String),
}

/// A fully rendered slide.
///
/// Pixels are RGBA8, row-major, tightly packed, and always opaque, so straight and premultiplied
/// forms coincide.
#[derive(Clone, Debug)]
pub struct RenderedSlide {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes.
    pub data: Vec<u8>,
    /// Photo outcome.
    pub image_status: ImageStatus,
}

impl RenderedSlide {
    /// RGB of the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`. Use [`RenderedSlide::get_pixel`] for a
    /// non-panicking lookup.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} slide",
            self.width,
            self.height
        );
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// RGB of the pixel at `(x, y)`, or `None` outside the slide.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 3)?;
        Some([px[0], px[1], px[2]])
    }

    /// Drop the alpha channel.
    pub fn to_rgb_image(&self) -> ShotframeResult<image::RgbImage> {
        let rgb: Vec<u8> = self
            .data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        image::RgbImage::from_raw(self.width, self.height, rgb)
            .ok_or_else(|| ShotframeError::render("rendered slide byte len mismatch"))
    }
}

pub(crate) fn new_pixmap(output: OutputSpec) -> ShotframeResult<vello_cpu::Pixmap> {
    let (w, h) = pixmap_dims(output)?;
    Ok(vello_cpu::Pixmap::new(w, h))
}

pub(crate) fn pixmap_dims(output: OutputSpec) -> ShotframeResult<(u16, u16)> {
    let w: u16 = output
        .width()
        .try_into()
        .map_err(|_| ShotframeError::render("pixmap width exceeds u16"))?;
    let h: u16 = output
        .height()
        .try_into()
        .map_err(|_| ShotframeError::render("pixmap height exceeds u16"))?;
    Ok((w, h))
}

pub(crate) fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> ShotframeResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(ShotframeError::render(
            "premul_over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        premul_over_px(d, s);
    }
    Ok(())
}

pub(crate) fn premul_over_px(d: &mut [u8], s: &[u8]) {
    let sa = s[3] as u16;
    if sa == 0 {
        return;
    }
    if sa == 255 {
        d.copy_from_slice(s);
        return;
    }
    let inv = 255u16 - sa;
    d[3] = (sa as u8).saturating_add(mul_div255_u8(d[3] as u16, inv));
    for c in 0..3 {
        d[c] = s[c].saturating_add(mul_div255_u8(d[c] as u16, inv));
    }
}
