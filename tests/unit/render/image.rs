use std::sync::Arc;

use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn solid_image(w: u32, h: u32, px: [u8; 4]) -> PreparedImage {
    PreparedImage {
        width: w,
        height: h,
        rgba8: Arc::new(image::RgbaImage::from_pixel(w, h, image::Rgba(px))),
    }
}

#[test]
fn tall_image_is_cropped_top_and_bottom() {
    // 800x2000 into a 1290x2200 area.
    let dest = Rect::new(0.0, 596.0, 1290.0, 2796.0);
    let src = cover_fit(800.0, 2000.0, dest);
    assert!(close(src.x0, 0.0));
    assert!(close(src.width(), 800.0));
    let expected_h = 800.0 / (1290.0 / 2200.0);
    assert!(close(src.height(), expected_h));
    assert!(close(src.y0, (2000.0 - expected_h) / 2.0));
    assert!(close(src.width() / src.height(), dest.width() / dest.height()));
}

#[test]
fn wide_image_is_cropped_left_and_right() {
    let dest = Rect::new(0.0, 0.0, 1000.0, 500.0);
    let src = cover_fit(4000.0, 1000.0, dest);
    assert!(close(src.y0, 0.0));
    assert!(close(src.height(), 1000.0));
    assert!(close(src.width(), 2000.0));
    assert!(close(src.x0, 1000.0));
}

#[test]
fn matching_ratio_uses_whole_image() {
    let src = cover_fit(300.0, 600.0, Rect::new(10.0, 10.0, 110.0, 210.0));
    assert!(close(src.x0, 0.0) && close(src.y0, 0.0));
    assert!(close(src.x1, 300.0) && close(src.y1, 600.0));
}

#[test]
fn crop_always_fits_inside_image() {
    for (iw, ih) in [(1.0, 1.0), (10.0, 3000.0), (3000.0, 10.0), (1290.0, 2796.0)] {
        for dest in [
            Rect::new(0.0, 0.0, 1290.0, 2200.0),
            Rect::new(0.0, 0.0, 1290.0, 1.0),
            Rect::new(0.0, 0.0, 1.0, 2796.0),
        ] {
            let src = cover_fit(iw, ih, dest);
            assert!(src.x0 >= -1e-9 && src.y0 >= -1e-9);
            assert!(src.x1 <= iw + 1e-9 && src.y1 <= ih + 1e-9);
        }
    }
}

#[test]
fn draw_cover_fills_only_dest_rows() {
    let (w, h) = (20, 20);
    let mut buf = vec![0u8; (w * h * 4) as usize];
    for p in buf.chunks_exact_mut(4) {
        p.copy_from_slice(&[10, 20, 30, 255]);
    }
    let img = solid_image(8, 40, [200, 100, 0, 255]);
    let drawn = draw_cover(&mut buf, w, h, &img, Rect::new(0.0, 12.0, 20.0, 20.0)).unwrap();
    assert!(drawn);

    let at = |x: u32, y: u32| {
        let i = ((y * w + x) * 4) as usize;
        [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
    };
    assert_eq!(at(5, 11), [10, 20, 30, 255]);
    assert_eq!(at(0, 12), [200, 100, 0, 255]);
    assert_eq!(at(19, 19), [200, 100, 0, 255]);
}

#[test]
fn draw_cover_blends_translucent_pixels() {
    let (w, h) = (4, 4);
    let mut buf = vec![0u8; (w * h * 4) as usize];
    for p in buf.chunks_exact_mut(4) {
        p.copy_from_slice(&[0, 0, 255, 255]);
    }
    let img = solid_image(4, 4, [255, 0, 0, 128]);
    draw_cover(&mut buf, w, h, &img, Rect::new(0.0, 0.0, 4.0, 4.0)).unwrap();
    assert_eq!(&buf[0..4], &[128, 0, 127, 255]);
}

#[test]
fn draw_cover_skips_empty_area() {
    let (w, h) = (4, 4);
    let mut buf = vec![7u8; (w * h * 4) as usize];
    let img = solid_image(2, 2, [1, 2, 3, 255]);
    let drawn = draw_cover(&mut buf, w, h, &img, Rect::new(0.0, 4.0, 4.0, 4.0)).unwrap();
    assert!(!drawn);
    assert!(buf.iter().all(|&b| b == 7));
}
