use crate::assets::source::ImageSource;
use crate::foundation::core::{OutputSpec, Point, Rect};
use crate::foundation::error::ShotframeResult;
use crate::render::background::paint_background;
use crate::render::image::draw_cover;
use crate::render::surface::{
    ImageStatus, RenderedSlide, new_pixmap, pixmap_dims, premul_over_in_place,
};
use crate::scene::model::{Slide, Style};
use crate::text::layout::{MeasuredWord, TextBlock, TextMetrics, place_lines, wrap_words};
use crate::text::shaper::{FontSpec, TextShaper};

/// Gap between the caption block and the photo, as a share of output height.
pub const IMAGE_GAP_RATIO: f64 = 0.02;

/// Measure and place a slide's caption.
pub fn layout_caption<S: TextShaper + ?Sized>(
    slide: &Slide,
    style: &Style,
    output: OutputSpec,
    shaper: &mut S,
) -> ShotframeResult<TextBlock> {
    let metrics = TextMetrics::new(output, style.font_size_percent);
    let font = font_spec(style, metrics);
    let space = shaper.measure(" ", font)?;

    let mut measured = Vec::new();
    for (i, word) in slide.words().into_iter().enumerate() {
        measured.push(MeasuredWord {
            width: shaper.measure(word, font)?,
            text: word.to_owned(),
            original_index: i,
            color: slide.resolved_word_color(i, style.text_color),
        });
    }
    let lines = wrap_words(measured, metrics.max_width, space);
    Ok(place_lines(lines, metrics, space))
}

/// Rectangle the photo is fitted into, or `None` when the caption leaves no room below it.
///
/// The area spans the full width and runs from just below the caption to the bottom edge.
pub fn image_area(output: OutputSpec, text_bottom: f64) -> Option<Rect> {
    let h = f64::from(output.height());
    let top = text_bottom + h * IMAGE_GAP_RATIO;
    (top < h).then(|| Rect::new(0.0, top, f64::from(output.width()), h))
}

/// Background and caption painted; photo not yet drawn.
#[derive(Debug)]
pub(crate) struct BasePass {
    output: OutputSpec,
    canvas: Vec<u8>,
    image_area: Option<Rect>,
}

impl BasePass {
    /// Paint the background and caption. Synchronous and deterministic.
    pub(crate) fn paint<S: TextShaper + ?Sized>(
        slide: &Slide,
        style: &Style,
        output: OutputSpec,
        shaper: &mut S,
    ) -> ShotframeResult<Self> {
        style.validate()?;
        let (w, h) = (output.width(), output.height());
        let mut canvas = vec![0u8; (w as usize) * (h as usize) * 4];
        paint_background(&mut canvas, w, h, output.rect(), &style.background)?;

        let block = layout_caption(slide, style, output, shaper)?;
        if !block.lines.is_empty() {
            let font = font_spec(style, block.metrics);
            let (pw, ph) = pixmap_dims(output)?;
            let mut ctx = vello_cpu::RenderContext::new(pw, ph);
            for line in &block.lines {
                for word in &line.words {
                    shaper.draw(
                        &mut ctx,
                        &word.text,
                        Point::new(word.x, line.y),
                        font,
                        word.color,
                    )?;
                }
            }
            // `vello_cpu` renders into a fresh buffer, so the glyphs go to a transparent temp
            // pixmap that is then composited over the background.
            let mut tmp = new_pixmap(output)?;
            ctx.flush();
            ctx.render_to_pixmap(&mut tmp);
            premul_over_in_place(&mut canvas, tmp.data_as_u8_slice())?;
        }

        let area = image_area(output, block.bottom());
        tracing::debug!(
            lines = block.lines.len(),
            text_bottom = block.bottom(),
            has_image_area = area.is_some(),
            "base pass painted"
        );
        Ok(Self {
            output,
            canvas,
            image_area: area,
        })
    }

    /// Load the photo (if any and if there is room) and finish the slide.
    ///
    /// A photo that fails to load or decode is logged and skipped; the slide still renders.
    pub(crate) async fn finish(mut self, image: Option<&ImageSource>) -> RenderedSlide {
        let status = match (image, self.image_area) {
            (None, _) => ImageStatus::Absent,
            (Some(_), None) => ImageStatus::NoRoom,
            (Some(src), Some(area)) => match src.load().await {
                Ok(img) => match draw_cover(
                    &mut self.canvas,
                    self.output.width(),
                    self.output.height(),
                    &img,
                    area,
                ) {
                    Ok(true) => ImageStatus::Drawn,
                    Ok(false) => ImageStatus::NoRoom,
                    Err(e) => {
                        tracing::warn!(error = %e, "photo compositing failed; skipping it");
                        ImageStatus::Failed(e.to_string())
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "photo failed to load; rendering without it");
                    ImageStatus::Failed(e.to_string())
                }
            },
        };
        RenderedSlide {
            width: self.output.width(),
            height: self.output.height(),
            data: self.canvas,
            image_status: status,
        }
    }
}

/// Render one slide: background, then caption, then photo.
///
/// The first two passes run synchronously; the call only suspends while the photo loads. Photo
/// failures never fail the slide (see [`ImageStatus::Failed`]).
pub async fn render_slide<S: TextShaper + ?Sized>(
    slide: &Slide,
    style: &Style,
    output: OutputSpec,
    shaper: &mut S,
) -> ShotframeResult<RenderedSlide> {
    let base = BasePass::paint(slide, style, output, shaper)?;
    Ok(base.finish(slide.image()).await)
}

/// Blocking wrapper around [`render_slide`].
pub fn render_slide_blocking<S: TextShaper + ?Sized>(
    slide: &Slide,
    style: &Style,
    output: OutputSpec,
    shaper: &mut S,
) -> ShotframeResult<RenderedSlide> {
    pollster::block_on(render_slide(slide, style, output, shaper))
}

fn font_spec(style: &Style, metrics: TextMetrics) -> FontSpec {
    FontSpec {
        size_px: metrics.font_size_px as f32,
        weight: style.font_weight,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
