use super::*;
use serde_json::json;

const BLACK: Color = Color::BLACK;

#[test]
fn new_slide_has_placeholder_and_no_overrides() {
    let s = Slide::new(SlideId(7));
    assert_eq!(s.text(), PLACEHOLDER_TEXT);
    assert!(s.word_colors().is_empty());
    assert!(s.image().is_none());
    assert_eq!(s.words(), vec!["Click", "to", "edit", "this", "text"]);
}

#[test]
fn set_text_reconciles_overrides() {
    let mut s = Slide::with_text(SlideId(0), "Hello world");
    assert!(s.set_word_color(1, Some(BLACK), Color::WHITE));

    s.set_text("Hello world today");
    assert_eq!(s.word_colors().get(&1), Some(&BLACK));

    s.set_text("Hello there world");
    assert!(s.word_colors().is_empty());
}

#[test]
fn set_word_color_rejects_missing_positions() {
    let mut s = Slide::with_text(SlideId(0), "one two");
    assert!(!s.set_word_color(2, Some(BLACK), Color::WHITE));
    assert!(s.word_colors().is_empty());
}

#[test]
fn resolved_color_falls_back_to_default() {
    let mut s = Slide::with_text(SlideId(0), "Big Sale Today");
    s.set_word_color(1, Some(BLACK), Color::WHITE);
    assert_eq!(s.resolved_word_color(0, Color::WHITE), Color::WHITE);
    assert_eq!(s.resolved_word_color(1, Color::WHITE), BLACK);
}

#[test]
fn from_parts_prunes_stale_positions() {
    let mut wc = WordColors::new();
    wc.insert(0, BLACK);
    wc.insert(5, BLACK);
    let s = Slide::from_parts(SlideId(1), "two words", wc, None);
    assert_eq!(s.word_colors().keys().copied().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn image_can_be_set_and_cleared() {
    let mut s = Slide::new(SlideId(0));
    s.set_image(ImageSource::from_bytes(vec![1u8, 2, 3]));
    assert!(s.image().is_some());
    s.clear_image();
    assert!(s.image().is_none());
}

#[test]
fn style_defaults_and_validation() {
    let style = Style::default();
    assert_eq!(
        style.background,
        Background::Solid {
            color: Color::rgb(0xF2, 0x8B, 0x82)
        }
    );
    assert_eq!(style.text_color, Color::WHITE);
    assert_eq!(style.font_weight, FontWeight::Bold);
    style.validate().unwrap();

    for bad in [1.9, 10.5, f64::NAN] {
        let s = Style {
            font_size_percent: bad,
            ..Style::default()
        };
        assert!(matches!(s.validate(), Err(ShotframeError::Config(_))));
    }

    let s = Style {
        background: Background::Gradient {
            from: BLACK,
            to: Color::WHITE,
            angle_deg: f64::INFINITY,
        },
        ..Style::default()
    };
    assert!(s.validate().is_err());
}

#[test]
fn style_deserializes_from_json() {
    let style: Style = serde_json::from_value(json!({
        "background": {"kind": "gradient", "from": "#F28B82", "to": "#fbbc04", "angle_deg": 135.0},
        "text_color": "#000000",
        "font_size_percent": 4.5,
        "font_weight": "800"
    }))
    .unwrap();
    assert_eq!(
        style.background,
        Background::Gradient {
            from: Color::rgb(0xF2, 0x8B, 0x82),
            to: Color::rgb(0xFB, 0xBC, 0x04),
            angle_deg: 135.0
        }
    );
    assert_eq!(style.text_color, BLACK);
    assert_eq!(style.font_weight, FontWeight::ExtraBold);

    let partial: Style = serde_json::from_value(json!({"font_weight": "normal"})).unwrap();
    assert_eq!(partial.font_size_percent, 6.0);
    assert_eq!(partial.font_weight, FontWeight::Normal);
}

#[test]
fn deck_add_and_remove_track_active_slide() {
    let mut deck = SlideDeck::new();
    assert_eq!(deck.slides().len(), 1);

    let a = deck.add_slide();
    let b = deck.add_slide();
    assert_ne!(a, b);
    assert_eq!(deck.active(), 2);

    // Removing the active last slide moves selection to the new last slide.
    assert!(deck.remove_slide(2));
    assert_eq!(deck.active(), 1);

    // Removing a slide before the active one shifts the selection left.
    deck.add_slide();
    deck.add_slide();
    deck.set_active(2);
    assert!(deck.remove_slide(0));
    assert_eq!(deck.active(), 1);
    assert_eq!(deck.slides().len(), 3);

    // Removing a slide after the active one keeps it.
    deck.set_active(0);
    assert!(deck.remove_slide(1));
    assert_eq!(deck.active(), 0);

    // The last slide stays.
    assert!(deck.remove_slide(1));
    assert!(!deck.remove_slide(0));
    assert_eq!(deck.slides().len(), 1);
    assert_eq!(deck.active(), 0);
}

#[test]
fn deck_from_slides_continues_ids() {
    let mut deck =
        SlideDeck::from_slides(vec![Slide::new(SlideId(9)), Slide::new(SlideId(3))]).unwrap();
    assert_eq!(deck.add_slide(), SlideId(10));
    assert!(SlideDeck::from_slides(vec![]).is_err());
}

#[test]
fn deck_with_max_id_still_hands_out_fresh_ids() {
    let mut deck = SlideDeck::from_slides(vec![
        Slide::new(SlideId(u64::MAX)),
        Slide::new(SlideId(0)),
        Slide::new(SlideId(2)),
    ])
    .unwrap();
    assert_eq!(deck.add_slide(), SlideId(1));
    assert_eq!(deck.add_slide(), SlideId(3));
    assert_eq!(deck.slides().len(), 5);
    assert_eq!(deck.active(), 4);
}

#[test]
fn add_slide_past_max_id_reuses_lowest_free() {
    let mut deck = SlideDeck::from_slides(vec![Slide::new(SlideId(u64::MAX - 1))]).unwrap();
    assert_eq!(deck.add_slide(), SlideId(u64::MAX));
    assert_eq!(deck.add_slide(), SlideId(0));
    assert_eq!(deck.add_slide(), SlideId(1));
}
