use super::*;
use crate::assets::color::Color;
use crate::scene::model::{Background, FontWeight};

fn parse(json: &str) -> Project {
    Project::from_reader(json.as_bytes(), "/projects/demo").unwrap()
}

#[test]
fn normalize_path_slash_normalization() {
    assert_eq!(normalize_rel_path("a/b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("./a//b.png").unwrap(), "a/b.png");
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("./.").is_err());
}

#[test]
fn minimal_project_uses_defaults() {
    let p = parse(r#"{"slides": [{"text": "Big Sale Today"}]}"#);
    p.validate().unwrap();
    assert_eq!(p.output().unwrap(), OutputSpec::default());
    assert_eq!(p.style(), Style::default());
    assert!(p.fonts().unwrap().is_none());

    let deck = p.deck().unwrap();
    assert_eq!(deck.slides().len(), 1);
    assert_eq!(deck.slides()[0].id(), SlideId(0));
    assert_eq!(deck.slides()[0].text(), "Big Sale Today");
}

#[test]
fn full_project_parses() {
    let p = parse(
        r##"{
            "output": {"preset": "Android Phone"},
            "style": {
                "background": {"kind": "solid", "color": "#2D2D2D"},
                "text_color": "#FFFFFF",
                "font_size_percent": 5,
                "font_weight": "extra_bold"
            },
            "slides": [
                {"id": 42, "text": "Big Sale Today", "word_colors": {"1": "#000000", "9": "#000000"}},
                {"text": "Second", "image": "shots/two.png"}
            ]
        }"##,
    );
    p.validate().unwrap();
    assert_eq!(p.output().unwrap(), OutputSpec::new(1080, 1920).unwrap());
    assert_eq!(
        p.style().background,
        Background::Solid {
            color: Color::rgb(0x2D, 0x2D, 0x2D)
        }
    );
    assert_eq!(p.style().font_weight, FontWeight::ExtraBold);

    let deck = p.deck().unwrap();
    let first = &deck.slides()[0];
    assert_eq!(first.id(), SlideId(42));
    // Position 9 does not exist in a three-word caption.
    assert_eq!(first.word_colors().len(), 1);
    assert_eq!(first.word_colors().get(&1), Some(&Color::BLACK));

    let second = &deck.slides()[1];
    assert_eq!(second.id(), SlideId(1));
    let Some(ImageSource::File(path)) = second.image() else {
        panic!("expected file image source");
    };
    assert_eq!(path, &PathBuf::from("/projects/demo").join("shots/two.png"));
}

#[test]
fn explicit_size_is_validated() {
    let err = Project::from_reader(
        r#"{"output": {"width": 99, "height": 500}, "slides": [{"text": "x"}]}"#.as_bytes(),
        ".",
    )
    .unwrap_err();
    assert!(matches!(err, ShotframeError::Config(_)));
}

#[test]
fn validate_rejects_bad_projects() {
    let unknown = parse(r#"{"output": {"preset": "Nokia 3310"}, "slides": [{"text": "x"}]}"#);
    assert!(matches!(
        unknown.validate(),
        Err(ShotframeError::InvalidDimension(_))
    ));

    let empty = parse(r#"{"slides": []}"#);
    assert!(matches!(empty.validate(), Err(ShotframeError::Config(_))));

    let escape = parse(r#"{"slides": [{"text": "x", "image": "../secret.png"}]}"#);
    assert!(escape.validate().is_err());
    assert!(escape.deck().is_err());

    let tiny_font = parse(r#"{"style": {"font_size_percent": 1}, "slides": [{"text": "x"}]}"#);
    assert!(tiny_font.validate().is_err());
}

#[test]
fn bad_color_is_a_config_error() {
    let err = Project::from_reader(
        r#"{"style": {"text_color": "white"}, "slides": [{"text": "x"}]}"#.as_bytes(),
        ".",
    )
    .unwrap_err();
    assert!(matches!(err, ShotframeError::Config(_)));
    assert!(err.to_string().contains("must start with '#'"));
}

#[test]
fn missing_font_files_surface_as_font_errors() {
    let p = parse(r#"{"fonts": {"regular": "fonts/none.ttf"}, "slides": [{"text": "x"}]}"#);
    p.validate().unwrap();
    assert!(matches!(p.fonts(), Err(ShotframeError::Font(_))));
}

#[test]
fn project_with_max_slide_id_builds_a_deck() {
    let p = parse(
        r#"{"slides": [{"id": 18446744073709551615, "text": "hi"}, {"text": "next"}]}"#,
    );
    let deck = p.deck().unwrap();
    let ids: Vec<_> = deck.slides().iter().map(|s| s.id()).collect();
    assert_eq!(ids.len(), 2);
    assert_eq!(ids[0], SlideId(u64::MAX));
    assert_ne!(ids[1], ids[0]);
}
