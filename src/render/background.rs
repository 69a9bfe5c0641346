use crate::assets::color::Color;
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::foundation::math::{gradient_endpoints, lerp_u8};
use crate::scene::model::Background;

/// Fill the pixels of `rect` in an opaque RGBA8 buffer with `background`.
///
/// A pixel is covered when its center lies inside `rect`. Gradients are sampled at pixel centers:
/// each center is projected onto the start-to-end axis, the parameter is clamped to `[0, 1]`, and
/// the two stop colors are interpolated per channel in sRGB.
pub(crate) fn paint_background(
    dst: &mut [u8],
    width: u32,
    height: u32,
    rect: Rect,
    background: &Background,
) -> ShotframeResult<()> {
    if dst.len() != (width as usize) * (height as usize) * 4 {
        return Err(ShotframeError::render("background target size mismatch"));
    }
    let Some((x0, y0, x1, y1)) = pixel_span(rect, width, height) else {
        return Ok(());
    };

    match *background {
        Background::Solid { color } => {
            let px = color.to_rgba8();
            for y in y0..y1 {
                for x in x0..x1 {
                    let i = idx(width, x, y);
                    dst[i..i + 4].copy_from_slice(&px);
                }
            }
        }
        Background::Gradient {
            from,
            to,
            angle_deg,
        } => {
            let (start, end) = gradient_endpoints(rect, angle_deg);
            let axis = end - start;
            let len2 = axis.hypot2();
            for y in y0..y1 {
                for x in x0..x1 {
                    let p = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                    let t = if len2 > 0.0 {
                        ((p - start).dot(axis) / len2).clamp(0.0, 1.0)
                    } else {
                        0.0
                    };
                    let i = idx(width, x, y);
                    dst[i..i + 4].copy_from_slice(&mix(from, to, t));
                }
            }
        }
    }
    Ok(())
}

fn mix(a: Color, b: Color, t: f64) -> [u8; 4] {
    [
        lerp_u8(a.r, b.r, t),
        lerp_u8(a.g, b.g, t),
        lerp_u8(a.b, b.b, t),
        255,
    ]
}

fn pixel_span(rect: Rect, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
    let clamp_x = |v: f64| (v - 0.5).ceil().clamp(0.0, f64::from(width)) as u32;
    let clamp_y = |v: f64| (v - 0.5).ceil().clamp(0.0, f64::from(height)) as u32;
    let (x0, x1) = (clamp_x(rect.x0), clamp_x(rect.x1));
    let (y0, y1) = (clamp_y(rect.y0), clamp_y(rect.y1));
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

fn idx(width: u32, x: u32, y: u32) -> usize {
    ((y as usize) * (width as usize) + (x as usize)) * 4
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
