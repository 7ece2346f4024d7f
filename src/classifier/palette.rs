//! Emotion palette — label normalization and display swatches.
//!
//! DESIGN
//! ======
//! Different classifier backends emit different label sets ("happy",
//! "annoyance", "grief", …). Everything funnels through `normalize_label`
//! into the nine canonical labels below, each with a fixed background color,
//! emoji, and foreground (`word_color`) swatch. Unknown labels collapse to
//! `neutral` rather than erroring — display must never fail on a new model.

// =============================================================================
// STYLE
// =============================================================================

/// Display swatch for one canonical emotion label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionStyle {
    pub label: &'static str,
    pub color: &'static str,
    pub emoji: &'static str,
    pub word_color: &'static str,
}

/// Canonical label assigned when nothing better is known.
pub const NEUTRAL_LABEL: &str = "neutral";

/// The canonical palette. Order is stable (used for deterministic
/// tie-breaking in the lexicon backend).
pub const PALETTE: &[EmotionStyle] = &[
    EmotionStyle { label: "joy", color: "#FFD700", emoji: "😊", word_color: "#DAA520" },
    EmotionStyle { label: "sadness", color: "#6495ED", emoji: "😔", word_color: "#4682B4" },
    EmotionStyle { label: "anger", color: "#DC143C", emoji: "😡", word_color: "#B22222" },
    EmotionStyle { label: "fear", color: "#8B008B", emoji: "😨", word_color: "#4B0082" },
    EmotionStyle { label: "disgust", color: "#228B22", emoji: "🤢", word_color: "#006400" },
    EmotionStyle { label: "surprise", color: "#FFA500", emoji: "😮", word_color: "#FF8C00" },
    EmotionStyle { label: "neutral", color: "#D3D3D3", emoji: "😐", word_color: "#A9A9A9" },
    EmotionStyle { label: "positive", color: "#90EE90", emoji: "😃", word_color: "#3CB371" },
    EmotionStyle { label: "negative", color: "#FF6347", emoji: "😞", word_color: "#CD5C5C" },
];

/// Look up the swatch for a canonical label. Falls back to neutral.
#[must_use]
pub fn style_for(label: &str) -> &'static EmotionStyle {
    PALETTE
        .iter()
        .find(|s| s.label == label)
        .unwrap_or_else(|| style_for(NEUTRAL_LABEL))
}

// =============================================================================
// NORMALIZATION
// =============================================================================

/// Collapse a raw backend label onto the canonical palette.
///
/// Lowercases, maps known aliases, and falls back to `neutral` for anything
/// unrecognized.
#[must_use]
pub fn normalize_label(raw: &str) -> &'static str {
    let label = raw.trim().to_ascii_lowercase();

    if let Some(style) = PALETTE.iter().find(|s| s.label == label) {
        return style.label;
    }

    match label.as_str() {
        "happy" | "happiness" | "love" | "amusement" | "excitement" => "joy",
        "optimism" | "admiration" | "approval" | "gratitude" | "pride" | "relief" => "positive",
        "realization" | "curiosity" | "confusion" => "neutral",
        "annoyance" => "anger",
        "nervousness" => "fear",
        "disappointment" | "grief" => "sadness",
        "shock" => "surprise",
        _ => NEUTRAL_LABEL,
    }
}

#[cfg(test)]
#[path = "palette_test.rs"]
mod tests;
