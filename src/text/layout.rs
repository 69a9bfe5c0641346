use smallvec::SmallVec;

use crate::assets::color::Color;
use crate::foundation::core::OutputSpec;

/// Top padding above the first line, as a share of output height.
pub const TOP_PADDING_RATIO: f64 = 0.04;
/// Line advance as a multiple of the font size.
pub const LINE_HEIGHT_RATIO: f64 = 1.3;
/// Widest a line may grow, as a share of output width.
pub const MAX_WIDTH_RATIO: f64 = 0.85;
/// `font_size_percent` is scaled by this before being applied to the output height.
pub const FONT_SCALE: f64 = 0.6;

/// Split a caption into words: runs of whitespace separate words, empty tokens are dropped.
///
/// A word's position in the returned vector is its index for word-color overrides.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Pixel metrics of the caption block for one output size and font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// Font size in pixels.
    pub font_size_px: f64,
    /// Vertical advance between consecutive line tops.
    pub line_height: f64,
    /// Y of the first line's top edge.
    pub top_padding: f64,
    /// Width budget for greedy wrapping.
    pub max_width: f64,
    /// Output width lines are centered against.
    pub canvas_width: f64,
}

impl TextMetrics {
    /// Derive metrics from the output size and a font size given in percent.
    pub fn new(output: OutputSpec, font_size_percent: f64) -> Self {
        let w = f64::from(output.width());
        let h = f64::from(output.height());
        let font_size_px = font_size_percent * FONT_SCALE * h / 100.0;
        Self {
            font_size_px,
            line_height: font_size_px * LINE_HEIGHT_RATIO,
            top_padding: h * TOP_PADDING_RATIO,
            max_width: w * MAX_WIDTH_RATIO,
            canvas_width: w,
        }
    }
}

/// A word with its resolved color and measured advance, ready to be wrapped.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredWord {
    /// Word text (no whitespace).
    pub text: String,
    /// Position of the word in the caption.
    pub original_index: usize,
    /// Resolved fill color.
    pub color: Color,
    /// Measured advance in pixels.
    pub width: f64,
}

/// A word placed on a line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineWord {
    /// Word text.
    pub text: String,
    /// Position of the word in the caption.
    pub original_index: usize,
    /// Resolved fill color.
    pub color: Color,
    /// Measured advance in pixels.
    pub width: f64,
    /// Left edge in output pixels. Zero until the line is centered.
    pub x: f64,
}

/// One wrapped line of the caption.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    /// Words in reading order.
    pub words: SmallVec<[LineWord; 8]>,
    /// Sum of word advances plus one space between neighbours.
    pub width: f64,
    /// Left edge of the first word.
    pub x: f64,
    /// Top edge of the line.
    pub y: f64,
}

/// The laid-out caption block.
#[derive(Clone, Debug, PartialEq)]
pub struct TextBlock {
    /// Lines top-down.
    pub lines: Vec<Line>,
    /// Metrics the block was laid out with.
    pub metrics: TextMetrics,
}

impl TextBlock {
    /// Total vertical space consumed by the lines (zero for an empty caption).
    pub fn height(&self) -> f64 {
        self.lines.len() as f64 * self.metrics.line_height
    }

    /// Y where the last line ends; equals the top padding when there are no lines.
    pub fn bottom(&self) -> f64 {
        self.metrics.top_padding + self.height()
    }
}

/// Greedy single-pass word wrap.
///
/// A word moves to a new line when appending it (plus one space) would exceed `max_width`. A word
/// wider than `max_width` on its own still gets a line to itself; words are never split.
pub fn wrap_words(
    words: impl IntoIterator<Item = MeasuredWord>,
    max_width: f64,
    space_width: f64,
) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = Line::default();

    for w in words {
        if !current.words.is_empty() && current.width + space_width + w.width > max_width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.words.is_empty() {
            current.width += space_width;
        }
        current.width += w.width;
        current.words.push(LineWord {
            text: w.text,
            original_index: w.original_index,
            color: w.color,
            width: w.width,
            x: 0.0,
        });
    }
    if !current.words.is_empty() {
        lines.push(current);
    }
    lines
}

/// Center every line horizontally and stack lines top-down from the top padding.
pub fn place_lines(mut lines: Vec<Line>, metrics: TextMetrics, space_width: f64) -> TextBlock {
    for (i, line) in lines.iter_mut().enumerate() {
        line.x = (metrics.canvas_width - line.width) / 2.0;
        line.y = metrics.top_padding + i as f64 * metrics.line_height;
        let mut x = line.x;
        for w in &mut line.words {
            w.x = x;
            x += w.width + space_width;
        }
    }
    TextBlock { lines, metrics }
}

/// Measure, wrap, and place a sequence of `(word, color)` pairs.
///
/// `measure` returns the advance of a single word in pixels.
pub fn layout_words<'a, M>(
    words: impl IntoIterator<Item = (&'a str, Color)>,
    metrics: TextMetrics,
    space_width: f64,
    mut measure: M,
) -> TextBlock
where
    M: FnMut(&str) -> f64,
{
    let measured = words
        .into_iter()
        .enumerate()
        .map(|(i, (text, color))| MeasuredWord {
            width: measure(text),
            text: text.to_owned(),
            original_index: i,
            color,
        });
    let lines = wrap_words(measured, metrics.max_width, space_width);
    place_lines(lines, metrics, space_width)
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
