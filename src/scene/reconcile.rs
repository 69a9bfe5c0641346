use crate::assets::color::Color;
use crate::scene::model::WordColors;
use crate::text::layout::split_words;

/// Carry word-color overrides across a caption edit.
///
/// An override at position `i` survives only when the new text still has a word at `i` and that
/// word is identical to the old one. Inserting or removing a word shifts every later position, so
/// overrides after the edit point are dropped; there is no re-alignment.
pub fn reconcile(old_text: &str, old_colors: &WordColors, new_text: &str) -> WordColors {
    let old_words = split_words(old_text);
    let new_words = split_words(new_text);

    let kept: WordColors = old_colors
        .iter()
        .filter(|&(&i, _)| i < new_words.len() && old_words.get(i) == new_words.get(i))
        .map(|(&i, &c)| (i, c))
        .collect();

    if kept.len() != old_colors.len() {
        tracing::debug!(
            kept = kept.len(),
            dropped = old_colors.len() - kept.len(),
            "reconciled word colors"
        );
    }
    kept
}

/// Assign or clear one override. `None` and `Some(default)` both clear.
///
/// Consequence: an override can never pin a word to the current default color; if the default
/// changes later, that word follows it.
pub fn set_word_color(colors: &mut WordColors, index: usize, color: Option<Color>, default: Color) {
    match color {
        Some(c) if c != default => {
            colors.insert(index, c);
        }
        _ => {
            colors.remove(&index);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/reconcile.rs"]
mod tests;
