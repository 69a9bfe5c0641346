use image::imageops::{self, FilterType};

use crate::assets::decode::{PreparedImage, premultiply_rgba8_in_place};
use crate::foundation::core::Rect;
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::render::surface::premul_over_px;

/// Source sub-rectangle of an `image_width` x `image_height` image that fills `dest` without
/// distortion.
///
/// The crop keeps the full extent along one axis and centers along the other, so its aspect ratio
/// equals `dest`'s. Wider images lose their left and right edges; taller images lose top and
/// bottom.
pub fn cover_fit(image_width: f64, image_height: f64, dest: Rect) -> Rect {
    let image_ratio = image_width / image_height;
    let area_ratio = dest.width() / dest.height();
    if image_ratio > area_ratio {
        let w = image_height * area_ratio;
        let x = (image_width - w) / 2.0;
        Rect::new(x, 0.0, x + w, image_height)
    } else {
        let h = image_width / area_ratio;
        let y = (image_height - h) / 2.0;
        Rect::new(0.0, y, image_width, y + h)
    }
}

/// Crop `img` with [`cover_fit`], scale it to `dest`, and composite it over an opaque RGBA8
/// buffer.
///
/// `dest` is snapped to whole pixels and clipped to the buffer. Nothing is drawn when the snapped
/// area is empty.
pub(crate) fn draw_cover(
    dst: &mut [u8],
    width: u32,
    height: u32,
    img: &PreparedImage,
    dest: Rect,
) -> ShotframeResult<bool> {
    if dst.len() != (width as usize) * (height as usize) * 4 {
        return Err(ShotframeError::render("image target size mismatch"));
    }
    let snap = |v: f64, max: u32| v.round().clamp(0.0, f64::from(max)) as u32;
    let (dx0, dx1) = (snap(dest.x0, width), snap(dest.x1, width));
    let (dy0, dy1) = (snap(dest.y0, height), snap(dest.y1, height));
    if dx1 <= dx0 || dy1 <= dy0 {
        return Ok(false);
    }
    let (dw, dh) = (dx1 - dx0, dy1 - dy0);

    let src = cover_fit(
        f64::from(img.width),
        f64::from(img.height),
        Rect::new(0.0, 0.0, f64::from(dw), f64::from(dh)),
    );
    let sx = (src.x0.round() as u32).min(img.width - 1);
    let sy = (src.y0.round() as u32).min(img.height - 1);
    let sw = (src.width().round() as u32).clamp(1, img.width - sx);
    let sh = (src.height().round() as u32).clamp(1, img.height - sy);

    let cropped = imageops::crop_imm(img.rgba8.as_ref(), sx, sy, sw, sh).to_image();
    let mut scaled = if (sw, sh) == (dw, dh) {
        cropped
    } else {
        imageops::resize(&cropped, dw, dh, FilterType::Triangle)
    };
    premultiply_rgba8_in_place(&mut scaled);

    let row_bytes = (dw as usize) * 4;
    for (row, src_row) in scaled.as_raw().chunks_exact(row_bytes).enumerate() {
        let start = (((dy0 as usize) + row) * (width as usize) + dx0 as usize) * 4;
        let dst_row = &mut dst[start..start + row_bytes];
        for (d, s) in dst_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
            premul_over_px(d, s);
        }
    }
    tracing::trace!(sx, sy, sw, sh, dx0, dy0, dw, dh, "image cover blit");
    Ok(true)
}

#[cfg(test)]
#[path = "../../tests/unit/render/image.rs"]
mod tests;
