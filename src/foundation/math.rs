use crate::foundation::core::{Point, Rect, Vec2};

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

pub(crate) fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    let af = f64::from(a);
    let bf = f64::from(b);
    (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
}

/// Start and end points of a linear gradient laid over `rect` at `angle_deg`.
///
/// Angles follow CSS `linear-gradient` orientation: 0 degrees points up (start stop below the
/// center), 90 degrees points right, 180 degrees points down. The direction vector has length
/// `max(width, height)` and is applied on both sides of the center, so the color ramp spans well
/// past the rectangle on every aspect ratio.
pub fn gradient_endpoints(rect: Rect, angle_deg: f64) -> (Point, Point) {
    let theta = (angle_deg - 90.0).to_radians();
    let reach = rect.width().max(rect.height());
    let v = Vec2::new(theta.cos(), theta.sin()) * reach;
    let c = rect.center();
    (c - v, c + v)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
