use super::*;

// =============================================================================
// style_for
// =============================================================================

#[test]
fn style_for_known_label() {
    let style = style_for("joy");
    assert_eq!(style.color, "#FFD700");
    assert_eq!(style.emoji, "😊");
    assert_eq!(style.word_color, "#DAA520");
}

#[test]
fn style_for_unknown_label_is_neutral() {
    let style = style_for("no-such-emotion");
    assert_eq!(style.label, NEUTRAL_LABEL);
    assert_eq!(style.color, "#D3D3D3");
}

#[test]
fn every_palette_entry_resolves_to_itself() {
    for style in PALETTE {
        assert_eq!(style_for(style.label).label, style.label);
    }
}

// =============================================================================
// normalize_label
// =============================================================================

#[test]
fn normalize_canonical_passthrough() {
    assert_eq!(normalize_label("anger"), "anger");
    assert_eq!(normalize_label("neutral"), "neutral");
}

#[test]
fn normalize_is_case_and_whitespace_insensitive() {
    assert_eq!(normalize_label("  JOY "), "joy");
    assert_eq!(normalize_label("Sadness"), "sadness");
}

#[test]
fn normalize_maps_aliases() {
    assert_eq!(normalize_label("happy"), "joy");
    assert_eq!(normalize_label("love"), "joy");
    assert_eq!(normalize_label("annoyance"), "anger");
    assert_eq!(normalize_label("nervousness"), "fear");
    assert_eq!(normalize_label("grief"), "sadness");
    assert_eq!(normalize_label("shock"), "surprise");
    assert_eq!(normalize_label("gratitude"), "positive");
    assert_eq!(normalize_label("curiosity"), "neutral");
}

#[test]
fn normalize_unknown_falls_back_to_neutral() {
    assert_eq!(normalize_label("bewilderment"), NEUTRAL_LABEL);
    assert_eq!(normalize_label(""), NEUTRAL_LABEL);
}
