use std::collections::BTreeMap;

use crate::assets::color::Color;
use crate::assets::source::ImageSource;
use crate::foundation::error::{ShotframeError, ShotframeResult};
use crate::scene::reconcile::{reconcile, set_word_color};
use crate::text::layout::split_words;

/// Placeholder caption of a freshly created slide.
pub const PLACEHOLDER_TEXT: &str = "Click to edit this text";

/// Smallest accepted caption size, in percent.
pub const MIN_FONT_SIZE_PERCENT: f64 = 2.0;
/// Largest accepted caption size, in percent.
pub const MAX_FONT_SIZE_PERCENT: f64 = 10.0;

/// Per-word color overrides keyed by word position.
pub type WordColors = BTreeMap<usize, Color>;

/// Caption weight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    /// Regular (400).
    Normal,
    /// Bold (700).
    #[default]
    Bold,
    /// Extra bold (800).
    #[serde(alias = "800")]
    ExtraBold,
}

impl FontWeight {
    /// Every weight, lightest first.
    pub const ALL: [Self; 3] = [Self::Normal, Self::Bold, Self::ExtraBold];

    pub(crate) fn slot(self) -> usize {
        match self {
            Self::Normal => 0,
            Self::Bold => 1,
            Self::ExtraBold => 2,
        }
    }
}

/// How the output rectangle is filled behind the caption and photo.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Background {
    /// One flat color.
    Solid {
        /// Fill color.
        color: Color,
    },
    /// Two-stop linear gradient.
    Gradient {
        /// Color at the start stop.
        from: Color,
        /// Color at the end stop.
        to: Color,
        /// Direction in degrees, CSS orientation (0 points up, 90 points right).
        angle_deg: f64,
    },
}

impl Default for Background {
    fn default() -> Self {
        Self::Solid {
            color: Color::rgb(0xF2, 0x8B, 0x82),
        }
    }
}

/// Visual settings shared read-only by every slide of a render or export.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Style {
    /// Background fill.
    pub background: Background,
    /// Default caption color for words without an override.
    pub text_color: Color,
    /// Caption size as a percentage; scaled by 0.6 and applied to the output height.
    pub font_size_percent: f64,
    /// Caption weight.
    pub font_weight: FontWeight,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Background::default(),
            text_color: Color::WHITE,
            font_size_percent: 6.0,
            font_weight: FontWeight::Bold,
        }
    }
}

impl Style {
    /// Check numeric ranges that the type system cannot express.
    pub fn validate(&self) -> ShotframeResult<()> {
        let p = self.font_size_percent;
        if !p.is_finite() || !(MIN_FONT_SIZE_PERCENT..=MAX_FONT_SIZE_PERCENT).contains(&p) {
            return Err(ShotframeError::config(format!(
                "font_size_percent {p} must be within [{MIN_FONT_SIZE_PERCENT}, {MAX_FONT_SIZE_PERCENT}]"
            )));
        }
        if let Background::Gradient { angle_deg, .. } = self.background
            && !angle_deg.is_finite()
        {
            return Err(ShotframeError::config("gradient angle_deg must be finite"));
        }
        Ok(())
    }
}

/// Opaque slide identifier. Never used for ordering.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SlideId(pub u64);

/// One caption + photo unit before rendering.
///
/// Word-color keys always refer to existing word positions: changing the text runs the
/// reconciler, and constructors drop out-of-range keys.
#[derive(Clone, Debug)]
pub struct Slide {
    id: SlideId,
    text: String,
    word_colors: WordColors,
    image: Option<ImageSource>,
}

impl Slide {
    /// A slide with the placeholder caption, no overrides, and no image.
    pub fn new(id: SlideId) -> Self {
        Self::with_text(id, PLACEHOLDER_TEXT)
    }

    /// A slide with the given caption.
    pub fn with_text(id: SlideId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            word_colors: WordColors::new(),
            image: None,
        }
    }

    /// Assemble a slide from stored parts, dropping overrides for positions the text lacks.
    pub fn from_parts(
        id: SlideId,
        text: impl Into<String>,
        mut word_colors: WordColors,
        image: Option<ImageSource>,
    ) -> Self {
        let text = text.into();
        let n = split_words(&text).len();
        word_colors.retain(|&i, _| i < n);
        Self {
            id,
            text,
            word_colors,
            image,
        }
    }

    /// Identifier.
    pub fn id(&self) -> SlideId {
        self.id
    }

    /// Caption text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current per-word overrides.
    pub fn word_colors(&self) -> &WordColors {
        &self.word_colors
    }

    /// Photo source, if any.
    pub fn image(&self) -> Option<&ImageSource> {
        self.image.as_ref()
    }

    /// Caption words in position order.
    pub fn words(&self) -> Vec<&str> {
        split_words(&self.text)
    }

    /// Replace the caption, keeping only overrides whose word is unchanged at the same position.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.word_colors = reconcile(&self.text, &self.word_colors, &text);
        self.text = text;
    }

    /// Set or clear the override of word `index`.
    ///
    /// `None` or a color equal to `default` clears it. Returns `false` without changing anything
    /// when `index` is not a word position of the current text.
    pub fn set_word_color(&mut self, index: usize, color: Option<Color>, default: Color) -> bool {
        if index >= self.words().len() {
            return false;
        }
        set_word_color(&mut self.word_colors, index, color, default);
        true
    }

    /// Color word `index` renders with.
    pub fn resolved_word_color(&self, index: usize, default: Color) -> Color {
        self.word_colors.get(&index).copied().unwrap_or(default)
    }

    /// Attach a photo.
    pub fn set_image(&mut self, image: ImageSource) {
        self.image = Some(image);
    }

    /// Remove the photo.
    pub fn clear_image(&mut self) {
        self.image = None;
    }
}

/// Ordered slide collection with an active selection.
#[derive(Clone, Debug)]
pub struct SlideDeck {
    slides: Vec<Slide>,
    active: usize,
    // `None` once the counter has passed `u64::MAX`.
    next_id: Option<u64>,
}

impl Default for SlideDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideDeck {
    /// A deck holding one placeholder slide.
    pub fn new() -> Self {
        Self {
            slides: vec![Slide::new(SlideId(0))],
            active: 0,
            next_id: Some(1),
        }
    }

    /// Build a deck from existing slides. Fails on an empty list.
    pub fn from_slides(slides: Vec<Slide>) -> ShotframeResult<Self> {
        if slides.is_empty() {
            return Err(ShotframeError::config("a deck needs at least one slide"));
        }
        let next_id = slides
            .iter()
            .map(|s| s.id().0)
            .max()
            .and_then(|m| m.checked_add(1));
        Ok(Self {
            slides,
            active: 0,
            next_id,
        })
    }

    /// Slides in export order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Mutable access to one slide.
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut Slide> {
        self.slides.get_mut(index)
    }

    /// Index of the active slide.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Select a slide. Out-of-range indices are ignored.
    pub fn set_active(&mut self, index: usize) {
        if index < self.slides.len() {
            self.active = index;
        }
    }

    /// Append a placeholder slide with a fresh id and make it active.
    ///
    /// Ids count up from the largest one seen. Once that reaches `u64::MAX`, the lowest unused id
    /// is taken instead.
    pub fn add_slide(&mut self) -> SlideId {
        let id = self.fresh_id();
        self.slides.push(Slide::new(id));
        self.active = self.slides.len() - 1;
        id
    }

    fn fresh_id(&mut self) -> SlideId {
        if let Some(id) = self.next_id {
            self.next_id = id.checked_add(1);
            return SlideId(id);
        }
        let mut taken: Vec<u64> = self.slides.iter().map(|s| s.id().0).collect();
        taken.sort_unstable();
        let mut candidate = 0u64;
        for id in taken {
            if id == candidate {
                candidate += 1;
            } else if id > candidate {
                break;
            }
        }
        SlideId(candidate)
    }

    /// Remove the slide at `index`. The last remaining slide cannot be removed.
    pub fn remove_slide(&mut self, index: usize) -> bool {
        let len = self.slides.len();
        if len <= 1 || index >= len {
            return false;
        }
        self.slides.remove(index);
        if self.active >= len - 1 {
            self.active = len.saturating_sub(2);
        } else if self.active > index {
            self.active -= 1;
        }
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
