use crate::encode::png::{archive_file_name, encode_png, file_name};
use crate::encode::sink::{ExportSink, ExportedFile, SinkConfig};
use crate::foundation::core::OutputSpec;
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::render::compositor::render_slide;
use crate::render::surface::{ImageStatus, RenderedSlide};
use crate::scene::model::{Slide, Style};
use crate::scene::project::Project;
use crate::text::shaper::{FontSet, ParleyShaper, TextShaper};

/// A slide that could not be exported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideFailure {
    /// 1-based position in the deck.
    pub position: usize,
    /// Error message.
    pub message: String,
}

/// Batch export summary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Slides in the batch.
    pub slides_total: usize,
    /// Slides encoded and pushed to the sink.
    pub slides_exported: usize,
    /// Exported slides whose photo failed to load and was left out.
    pub images_failed: usize,
    /// Slides that failed outright and were skipped.
    pub failures: Vec<SlideFailure>,
}

/// Renders and encodes slides for one style and output size.
///
/// Slides are processed strictly one after another: a batch never holds more than one rendered
/// surface at a time.
#[derive(Debug)]
pub struct ExportSession<S> {
    style: Style,
    output: OutputSpec,
    shaper: S,
}

impl ExportSession<ParleyShaper> {
    /// Session shaping captions with `fonts`.
    pub fn with_fonts(style: Style, output: OutputSpec, fonts: &FontSet) -> ShotframeResult<Self> {
        Self::new(style, output, ParleyShaper::new(fonts)?)
    }

    /// Session for a project's style, output size, and fonts.
    pub fn from_project(project: &Project) -> ShotframeResult<Self> {
        project.validate()?;
        let fonts = project
            .fonts()?
            .ok_or_else(|| ShotframeError::font("project does not configure any fonts"))?;
        Self::with_fonts(project.style(), project.output()?, &fonts)
    }
}

impl<S: TextShaper> ExportSession<S> {
    /// Create a session. Fails when `style` is out of range.
    pub fn new(style: Style, output: OutputSpec, shaper: S) -> ShotframeResult<Self> {
        style.validate()?;
        Ok(Self {
            style,
            output,
            shaper,
        })
    }

    /// Shared style.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Replace the shared style.
    pub fn set_style(&mut self, style: Style) -> ShotframeResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    /// Output size.
    pub fn output(&self) -> OutputSpec {
        self.output
    }

    /// Change the output size for subsequent renders.
    pub fn set_output(&mut self, output: OutputSpec) {
        self.output = output;
    }

    /// Render one slide without encoding it.
    pub async fn render(&mut self, slide: &Slide) -> ShotframeResult<RenderedSlide> {
        render_slide(slide, &self.style, self.output, &mut self.shaper).await
    }

    /// Render and encode the slide at `index` (0-based) of `slides`.
    ///
    /// The file is named after the slide's position in the deck, not its id.
    #[tracing::instrument(skip(self, slides), fields(position = index + 1))]
    pub async fn export_single(
        &mut self,
        slides: &[Slide],
        index: usize,
    ) -> ShotframeResult<ExportedFile> {
        let slide = slides.get(index).ok_or_else(|| {
            ShotframeError::config(format!(
                "slide index {index} out of range for {} slides",
                slides.len()
            ))
        })?;
        self.export_at(index, slide).await
    }

    /// Render, encode, and push every slide to `sink`, in deck order.
    ///
    /// A slide that fails is logged, recorded in the returned stats, and skipped; later slides
    /// still export. Sink errors abort the batch.
    #[tracing::instrument(skip(self, slides, sink), fields(count = slides.len()))]
    pub async fn export_all(
        &mut self,
        slides: &[Slide],
        sink: &mut dyn ExportSink,
    ) -> ShotframeResult<ExportStats> {
        sink.begin(SinkConfig {
            output: self.output,
            slide_count: slides.len(),
            archive_name: archive_file_name(self.output),
        })?;

        let mut stats = ExportStats {
            slides_total: slides.len(),
            ..ExportStats::default()
        };
        for (i, slide) in slides.iter().enumerate() {
            match self.export_at(i, slide).await {
                Ok(file) => {
                    if matches!(file.image_status, ImageStatus::Failed(_)) {
                        stats.images_failed += 1;
                    }
                    sink.push_file(&file)?;
                    stats.slides_exported += 1;
                }
                Err(e) => {
                    tracing::warn!(position = i + 1, error = %e, "slide export failed; skipping");
                    stats.failures.push(SlideFailure {
                        position: i + 1,
                        message: e.to_string(),
                    });
                }
            }
        }

        sink.end()?;
        tracing::info!(
            exported = stats.slides_exported,
            failed = stats.failures.len(),
            images_failed = stats.images_failed,
            "export finished"
        );
        Ok(stats)
    }

    /// Blocking wrapper around [`ExportSession::export_single`].
    pub fn export_single_blocking(
        &mut self,
        slides: &[Slide],
        index: usize,
    ) -> ShotframeResult<ExportedFile> {
        pollster::block_on(self.export_single(slides, index))
    }

    /// Blocking wrapper around [`ExportSession::export_all`].
    pub fn export_all_blocking(
        &mut self,
        slides: &[Slide],
        sink: &mut dyn ExportSink,
    ) -> ShotframeResult<ExportStats> {
        pollster::block_on(self.export_all(slides, sink))
    }

    async fn export_at(&mut self, index: usize, slide: &Slide) -> ShotframeResult<ExportedFile> {
        let rendered = self.render(slide).await?;
        let png = encode_png(&rendered)?;
        Ok(ExportedFile {
            position: index + 1,
            file_name: file_name(index + 1, self.output),
            png,
            image_status: rendered.image_status,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/session.rs"]
mod tests;
