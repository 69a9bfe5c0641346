use super::*;

const RED: Color = Color::rgb(0xFF, 0, 0);
const BLUE: Color = Color::rgb(0, 0, 0xFF);

fn colors(pairs: &[(usize, Color)]) -> WordColors {
    pairs.iter().copied().collect()
}

#[test]
fn appended_word_keeps_override() {
    let out = reconcile("Hello world", &colors(&[(1, RED)]), "Hello world today");
    assert_eq!(out, colors(&[(1, RED)]));
}

#[test]
fn inserted_word_shifts_and_drops_override() {
    let out = reconcile("Hello world", &colors(&[(1, RED)]), "Hello there world");
    assert!(out.is_empty());
}

#[test]
fn edits_only_drop_changed_positions() {
    let old = colors(&[(0, RED), (2, BLUE), (3, RED)]);
    let out = reconcile("Big Sale Today Only", &old, "Big sale Today");
    assert_eq!(out, colors(&[(0, RED), (2, BLUE)]));
}

#[test]
fn whitespace_only_changes_keep_everything() {
    let old = colors(&[(0, RED), (1, BLUE)]);
    let out = reconcile("Big Sale", &old, "  Big\n\tSale ");
    assert_eq!(out, old);
}

#[test]
fn clearing_text_drops_all() {
    let out = reconcile("Big Sale", &colors(&[(0, RED)]), "");
    assert!(out.is_empty());
}

#[test]
fn set_word_color_assigns_and_clears() {
    let mut c = WordColors::new();
    set_word_color(&mut c, 2, Some(RED), Color::WHITE);
    assert_eq!(c, colors(&[(2, RED)]));

    set_word_color(&mut c, 2, Some(BLUE), Color::WHITE);
    assert_eq!(c, colors(&[(2, BLUE)]));

    set_word_color(&mut c, 2, None, Color::WHITE);
    assert!(c.is_empty());
}

#[test]
fn choosing_the_default_color_clears_override() {
    let mut c = colors(&[(0, RED)]);
    set_word_color(&mut c, 0, Some(Color::WHITE), Color::WHITE);
    assert!(c.is_empty());

    // Equality is by value, so hex case never matters.
    let mut c = colors(&[(0, RED)]);
    set_word_color(&mut c, 0, Some(Color::parse("#ffffff").unwrap()), Color::WHITE);
    assert!(c.is_empty());
}
