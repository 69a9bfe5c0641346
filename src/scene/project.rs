use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::assets::source::ImageSource;
use crate::foundation::core::OutputSpec;
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::scene::model::{Slide, SlideDeck, SlideId, Style, WordColors};
use crate::text::shaper::FontSet;

/// Output size as stored in a project file: explicit pixels or a named preset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum OutputDef {
    /// A device preset name, e.g. `"Android Phone"`.
    Preset {
        /// Preset name.
        preset: String,
    },
    /// Explicit size.
    Size(OutputSpec),
}

impl Default for OutputDef {
    fn default() -> Self {
        Self::Size(OutputSpec::default())
    }
}

/// Font files, relative to the project root.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontsDef {
    /// Regular face.
    pub regular: String,
    /// Optional bold face.
    #[serde(default)]
    pub bold: Option<String>,
    /// Optional extra-bold face.
    #[serde(default)]
    pub extra_bold: Option<String>,
}

/// One slide as stored in a project file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideDef {
    /// Slide id; defaults to the slide's position.
    #[serde(default)]
    pub id: Option<u64>,
    /// Caption text.
    pub text: String,
    /// Overrides keyed by word position.
    #[serde(default)]
    pub word_colors: WordColors,
    /// Photo path relative to the project root.
    #[serde(default)]
    pub image: Option<String>,
}

/// JSON-facing project document.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProjectDef {
    /// Output size.
    #[serde(default)]
    pub output: OutputDef,
    /// Shared style.
    #[serde(default)]
    pub style: Style,
    /// Caption fonts.
    #[serde(default)]
    pub fonts: Option<FontsDef>,
    /// Slides in export order.
    pub slides: Vec<SlideDef>,
}

/// A project file plus the directory its relative paths resolve against.
#[derive(Clone, Debug)]
pub struct Project {
    root: PathBuf,
    def: ProjectDef,
}

impl Project {
    /// Parse a project from a JSON reader. Relative paths resolve against `root`.
    pub fn from_reader<R: std::io::Read>(r: R, root: impl Into<PathBuf>) -> ShotframeResult<Self> {
        let def: ProjectDef = serde_json::from_reader(r)
            .map_err(|e| ShotframeError::config(format!("parse project JSON: {e}")))?;
        Ok(Self {
            root: root.into(),
            def,
        })
    }

    /// Parse a project from a JSON file; its directory becomes the project root.
    pub fn from_path(path: impl AsRef<Path>) -> ShotframeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ShotframeError::config(format!("open project JSON '{}': {e}", path.display()))
        })?;
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::from_reader(BufReader::new(f), root)
    }

    /// Wrap an in-memory definition.
    pub fn from_def(def: ProjectDef, root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            def,
        }
    }

    /// Borrow the parsed definition.
    pub fn def(&self) -> &ProjectDef {
        &self.def
    }

    /// Check everything that can be checked without touching the file system.
    pub fn validate(&self) -> ShotframeResult<()> {
        self.output()?;
        self.def.style.validate()?;
        if self.def.slides.is_empty() {
            return Err(ShotframeError::config("project has no slides"));
        }
        for (i, s) in self.def.slides.iter().enumerate() {
            if let Some(img) = &s.image {
                normalize_rel_path(img)
                    .map_err(|e| ShotframeError::config(format!("slide {}: {e}", i + 1)))?;
            }
        }
        if let Some(fonts) = &self.def.fonts {
            for p in std::iter::once(&fonts.regular)
                .chain(fonts.bold.iter())
                .chain(fonts.extra_bold.iter())
            {
                normalize_rel_path(p)?;
            }
        }
        Ok(())
    }

    /// Resolved output size.
    pub fn output(&self) -> ShotframeResult<OutputSpec> {
        match &self.def.output {
            OutputDef::Size(spec) => Ok(*spec),
            OutputDef::Preset { preset } => OutputSpec::preset(preset).ok_or_else(|| {
                ShotframeError::invalid_dimension(format!("unknown output preset \"{preset}\""))
            }),
        }
    }

    /// Shared style.
    pub fn style(&self) -> Style {
        self.def.style
    }

    /// Build the slide deck. Image files are referenced, not read.
    pub fn deck(&self) -> ShotframeResult<SlideDeck> {
        let mut slides = Vec::with_capacity(self.def.slides.len());
        for (i, s) in self.def.slides.iter().enumerate() {
            let image = match &s.image {
                Some(rel) => Some(ImageSource::from_path(self.resolve(rel)?)),
                None => None,
            };
            let id = SlideId(s.id.unwrap_or(i as u64));
            slides.push(Slide::from_parts(id, s.text.clone(), s.word_colors.clone(), image));
        }
        SlideDeck::from_slides(slides)
    }

    /// Load the configured fonts, if any.
    pub fn fonts(&self) -> ShotframeResult<Option<FontSet>> {
        let Some(fonts) = &self.def.fonts else {
            return Ok(None);
        };
        let bold = fonts.bold.as_deref().map(|p| self.resolve(p)).transpose()?;
        let extra_bold = fonts
            .extra_bold
            .as_deref()
            .map(|p| self.resolve(p))
            .transpose()?;
        FontSet::from_paths(
            self.resolve(&fonts.regular)?,
            bold.as_deref(),
            extra_bold.as_deref(),
        )
        .map(Some)
    }

    fn resolve(&self, rel: &str) -> ShotframeResult<PathBuf> {
        Ok(self.root.join(normalize_rel_path(rel)?))
    }
}

/// Normalize and validate project-relative paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and rejects absolute paths or
/// parent traversals (`..`).
pub(crate) fn normalize_rel_path(source: &str) -> ShotframeResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(ShotframeError::config("project paths must be relative"));
    }
    if s.is_empty() {
        return Err(ShotframeError::config("project path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(ShotframeError::config("project paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(ShotframeError::config("project path must contain a file name"));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/project.rs"]
mod tests;
