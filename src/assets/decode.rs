use std::sync::Arc;

use crate::foundation::error::{ShotframeError, ShotframeResult};

/// Decoded raster image in straight-alpha RGBA8 form.
#[derive(Clone, Debug)]
pub(crate) struct PreparedImage {
    /// Width in pixels.
    pub(crate) width: u32,
    /// Height in pixels.
    pub(crate) height: u32,
    /// Row-major straight RGBA8 pixels.
    pub(crate) rgba8: Arc<image::RgbaImage>,
}

/// Decode any format the `image` crate recognizes from its magic bytes.
pub(crate) fn decode_image(bytes: &[u8]) -> ShotframeResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| ShotframeError::image_decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(ShotframeError::image_decode("image has a zero-sized edge"));
    }

    Ok(PreparedImage {
        width,
        height,
        rgba8: Arc::new(rgba),
    })
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}
