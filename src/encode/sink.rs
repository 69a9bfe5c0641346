use std::path::PathBuf;

use crate::foundation::core::OutputSpec;
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::render::surface::ImageStatus;

/// Configuration provided to an [`ExportSink`] at the start of a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct SinkConfig {
    /// Output size every file shares.
    pub output: OutputSpec,
    /// Number of slides the batch will attempt.
    pub slide_count: usize,
    /// Suggested archive name, e.g. `screenshots_1290x2796.zip`.
    pub archive_name: String,
}

/// One encoded slide.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportedFile {
    /// 1-based position of the slide in the deck.
    pub position: usize,
    /// File name, e.g. `screenshot_1_1290x2796.png`.
    pub file_name: String,
    /// PNG bytes.
    pub png: Vec<u8>,
    /// What happened to the slide's photo.
    pub image_status: ImageStatus,
}

/// Sink contract for consuming exported slides.
///
/// Ordering contract: `push_file` is called in deck order, one file at a time. Slides that fail
/// to render are skipped, so positions may have gaps.
pub trait ExportSink {
    /// Called once before any file is pushed.
    fn begin(&mut self, cfg: SinkConfig) -> ShotframeResult<()>;
    /// Push one encoded slide.
    fn push_file(&mut self, file: &ExportedFile) -> ShotframeResult<()>;
    /// Called once after the last file is pushed.
    fn end(&mut self) -> ShotframeResult<()>;
}

/// In-memory sink, e.g. for handing files to an archiver or a download prompt.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    files: Vec<ExportedFile>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured files.
    pub fn files(&self) -> &[ExportedFile] {
        &self.files
    }

    /// Take ownership of the captured files.
    pub fn into_files(self) -> Vec<ExportedFile> {
        self.files
    }
}

impl ExportSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ShotframeResult<()> {
        self.cfg = Some(cfg);
        self.files.clear();
        Ok(())
    }

    fn push_file(&mut self, file: &ExportedFile) -> ShotframeResult<()> {
        self.files.push(file.clone());
        Ok(())
    }

    fn end(&mut self) -> ShotframeResult<()> {
        Ok(())
    }
}

/// Writes each PNG into a directory under its export file name.
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
    overwrite: bool,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    /// Sink writing into `dir`, created on `begin` if missing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overwrite: true,
            written: Vec::new(),
        }
    }

    /// Refuse to replace files that already exist.
    pub fn no_overwrite(mut self) -> Self {
        self.overwrite = false;
        self
    }

    /// Paths written so far, in push order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ExportSink for DirectorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ShotframeResult<()> {
        use anyhow::Context as _;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create export dir '{}'", self.dir.display()))?;
        self.written.clear();
        tracing::debug!(
            dir = %self.dir.display(),
            slides = cfg.slide_count,
            "directory sink ready"
        );
        Ok(())
    }

    fn push_file(&mut self, file: &ExportedFile) -> ShotframeResult<()> {
        let path = self.dir.join(&file.file_name);
        if !self.overwrite && path.exists() {
            return Err(ShotframeError::render(format!(
                "refusing to overwrite '{}'",
                path.display()
            )));
        }
        std::fs::write(&path, &file.png).map_err(|e| {
            ShotframeError::render(format!("failed to write '{}': {e}", path.display()))
        })?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> ShotframeResult<()> {
        tracing::info!(
            dir = %self.dir.display(),
            files = self.written.len(),
            "export written"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
