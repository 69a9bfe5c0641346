use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

use crate::assets::color::Color;
use crate::foundation::core::Point;
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::scene::model::FontWeight;

/// Size and weight a caption is shaped with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    /// Font size in pixels.
    pub size_px: f32,
    /// Requested weight.
    pub weight: FontWeight,
}

/// Measures and rasterizes single words.
///
/// The layout engine only needs advances; the compositor additionally asks the shaper to paint
/// each placed word into the render context. `origin` is the top-left corner of the word's line
/// box.
pub trait TextShaper {
    /// Horizontal advance of `text` in pixels.
    fn measure(&mut self, text: &str, font: FontSpec) -> ShotframeResult<f64>;

    /// Paint `text` with its line box anchored at `origin`.
    fn draw(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        origin: Point,
        font: FontSpec,
        color: Color,
    ) -> ShotframeResult<()>;
}

/// Raw TTF/OTF bytes for the three caption weights.
///
/// Heavier weights that were not supplied fall back to the next lighter face.
#[derive(Clone, Debug)]
pub struct FontSet {
    regular: Arc<Vec<u8>>,
    bold: Option<Arc<Vec<u8>>>,
    extra_bold: Option<Arc<Vec<u8>>>,
}

impl FontSet {
    /// A set with only a regular face.
    pub fn from_bytes(regular: impl Into<Vec<u8>>) -> Self {
        Self {
            regular: Arc::new(regular.into()),
            bold: None,
            extra_bold: None,
        }
    }

    /// Load faces from disk.
    pub fn from_paths(
        regular: impl AsRef<Path>,
        bold: Option<&Path>,
        extra_bold: Option<&Path>,
    ) -> ShotframeResult<Self> {
        let mut set = Self::from_bytes(read_font(regular.as_ref())?);
        if let Some(p) = bold {
            set = set.with_bold(read_font(p)?);
        }
        if let Some(p) = extra_bold {
            set = set.with_extra_bold(read_font(p)?);
        }
        Ok(set)
    }

    /// Add a bold face.
    pub fn with_bold(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.bold = Some(Arc::new(bytes.into()));
        self
    }

    /// Add an extra-bold face.
    pub fn with_extra_bold(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.extra_bold = Some(Arc::new(bytes.into()));
        self
    }

    pub(crate) fn face(&self, weight: FontWeight) -> &Arc<Vec<u8>> {
        match weight {
            FontWeight::Normal => &self.regular,
            FontWeight::Bold => self.bold.as_ref().unwrap_or(&self.regular),
            FontWeight::ExtraBold => self
                .extra_bold
                .as_ref()
                .or(self.bold.as_ref())
                .unwrap_or(&self.regular),
        }
    }
}

fn read_font(path: &Path) -> ShotframeResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| ShotframeError::font(format!("failed to read font '{}': {e}", path.display())))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

struct PreparedFace {
    // One context per face so same-family faces of different weights never shadow each other.
    font_ctx: parley::FontContext,
    family: String,
    font: vello_cpu::peniko::FontData,
}

impl PreparedFace {
    fn new(bytes: &[u8]) -> ShotframeResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| ShotframeError::font("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ShotframeError::font("registered font family has no name"))?
            .to_string();
        let font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes.to_vec()), 0);
        Ok(Self {
            font_ctx,
            family,
            font,
        })
    }
}

/// [`TextShaper`] backed by Parley shaping and `vello_cpu` glyph rasterization.
pub struct ParleyShaper {
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    faces: Vec<PreparedFace>,
    // Index into `faces` for Normal, Bold, ExtraBold.
    by_weight: [usize; 3],
}

impl std::fmt::Debug for ParleyShaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyShaper")
            .field("faces", &self.faces.len())
            .field("by_weight", &self.by_weight)
            .finish_non_exhaustive()
    }
}

impl ParleyShaper {
    /// Register every distinct face of `fonts`.
    pub fn new(fonts: &FontSet) -> ShotframeResult<Self> {
        let mut faces = Vec::new();
        let mut seen: Vec<&Arc<Vec<u8>>> = Vec::new();
        let mut by_weight = [0usize; 3];

        for (slot, weight) in FontWeight::ALL.into_iter().enumerate() {
            let bytes = fonts.face(weight);
            let idx = match seen.iter().position(|b| Arc::ptr_eq(b, bytes)) {
                Some(i) => i,
                None => {
                    faces.push(PreparedFace::new(bytes)?);
                    seen.push(bytes);
                    faces.len() - 1
                }
            };
            by_weight[slot] = idx;
        }

        tracing::debug!(faces = faces.len(), "registered caption fonts");
        Ok(Self {
            layout_ctx: parley::LayoutContext::new(),
            faces,
            by_weight,
        })
    }

    /// Family name resolved for `weight`.
    pub fn family_name(&self, weight: FontWeight) -> &str {
        &self.faces[self.by_weight[weight.slot()]].family
    }

    fn layout(
        &mut self,
        text: &str,
        font: FontSpec,
        brush: TextBrushRgba8,
    ) -> ShotframeResult<(parley::Layout<TextBrushRgba8>, vello_cpu::peniko::FontData)> {
        if !font.size_px.is_finite() || font.size_px <= 0.0 {
            return Err(ShotframeError::font("font size_px must be finite and > 0"));
        }

        let face = &mut self.faces[self.by_weight[font.weight.slot()]];
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut face.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(face.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(font.size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok((layout, face.font.clone()))
    }
}

impl TextShaper for ParleyShaper {
    fn measure(&mut self, text: &str, font: FontSpec) -> ShotframeResult<f64> {
        let (layout, _) = self.layout(text, font, TextBrushRgba8::default())?;
        let mut advance = 0.0f32;
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                advance += run.glyphs().map(|g| g.advance).sum::<f32>();
            }
        }
        Ok(f64::from(advance))
    }

    fn draw(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        origin: Point,
        font: FontSpec,
        color: Color,
    ) -> ShotframeResult<()> {
        let brush = TextBrushRgba8 {
            r: color.r,
            g: color.g,
            b: color.b,
            a: 255,
        };
        let (layout, font_data) = self.layout(text, font, brush)?;

        ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
        ctx.set_paint(color.to_peniko());
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let mut x = run.offset();
                let baseline = run.baseline();
                let glyphs: Vec<vello_cpu::Glyph> = run
                    .glyphs()
                    .map(|g| {
                        let glyph = vello_cpu::Glyph {
                            id: g.id,
                            x: x + g.x,
                            y: baseline - g.y,
                        };
                        x += g.advance;
                        glyph
                    })
                    .collect();
                ctx.glyph_run(&font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs.into_iter());
            }
        }
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/shaper.rs"]
mod tests;
