//! Lexicon classifier — deterministic keyword scoring.
//!
//! DESIGN
//! ======
//! The fallback backend: no network, no model weights, same answer for the
//! same text every time. Each canonical label owns a small keyword list;
//! the label with the most hits wins, ties broken by palette order. The
//! score grows with hit count but stays strictly below 1.0 — a keyword
//! match is never as confident as a real model.

use super::palette::NEUTRAL_LABEL;
use super::{ClassifierError, EmotionClassify, EmotionResult};

// =============================================================================
// KEYWORDS
// =============================================================================

/// Keyword lists per canonical label, in palette order.
const KEYWORDS: &[(&str, &[&str])] = &[
    ("joy", &["happy", "joy", "glad", "thrilled", "delighted", "haha", "hilarious", "excited", "excitement"]),
    ("sadness", &["sad", "down", "unhappy", "miserable", "crying", "grief", "disappointed"]),
    ("anger", &["angry", "furious", "frustrating", "frustrated", "annoyed", "mad", "rage"]),
    ("fear", &["afraid", "scared", "fear", "terrified", "worried", "nervous", "anxious"]),
    ("disgust", &["disgusted", "disgusting", "gross", "revolting", "nasty"]),
    ("surprise", &["surprised", "surprise", "wow", "unexpected", "astonished", "shocking"]),
    ("neutral", &[]),
    ("positive", &["great", "good", "wonderful", "awesome", "pleasant", "love", "thanks", "grateful"]),
    ("negative", &["bad", "terrible", "awful", "horrible", "worst", "ugh"]),
];

// =============================================================================
// CLASSIFIER
// =============================================================================

pub struct LexiconClassifier;

impl LexiconClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Score text against the keyword lists. Pure and synchronous; the
    /// async trait method just wraps this.
    #[must_use]
    pub fn score(&self, text: &str) -> EmotionResult {
        let lowered = text.to_ascii_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        let mut best_label = NEUTRAL_LABEL;
        let mut best_hits = 0usize;
        for (label, keywords) in KEYWORDS {
            let hits = words.iter().filter(|w| keywords.contains(*w)).count();
            if hits > best_hits {
                best_label = label;
                best_hits = hits;
            }
        }

        if best_hits == 0 {
            return EmotionResult::from_palette(NEUTRAL_LABEL, 0.5);
        }

        // 1 hit -> 0.50, 2 -> 0.67, 3 -> 0.75, asymptotic to 1.0.
        #[allow(clippy::cast_precision_loss)]
        let score = 1.0 - 1.0 / (1.0 + best_hits as f64);
        EmotionResult::from_palette(best_label, score)
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EmotionClassify for LexiconClassifier {
    async fn classify(&self, text: &str) -> Result<EmotionResult, ClassifierError> {
        Ok(self.score(text))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::palette::PALETTE;

    #[test]
    fn keyword_labels_match_palette() {
        assert_eq!(KEYWORDS.len(), PALETTE.len());
        for ((label, _), style) in KEYWORDS.iter().zip(PALETTE) {
            assert_eq!(*label, style.label);
        }
    }

    #[test]
    fn scores_obvious_joy() {
        let result = LexiconClassifier::new().score("I'm so happy today, thrilled even!");
        assert_eq!(result.label, "joy");
        assert!(result.score > 0.5);
    }

    #[test]
    fn scores_anger() {
        let result = LexiconClassifier::new().score("This is really frustrating.");
        assert_eq!(result.label, "anger");
    }

    #[test]
    fn no_hits_is_neutral_half() {
        let result = LexiconClassifier::new().score("That's an interesting point.");
        assert_eq!(result.label, "neutral");
        assert!((result.score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn matching_is_word_bounded() {
        // "madrid" must not hit "mad".
        let result = LexiconClassifier::new().score("flying to madrid");
        assert_eq!(result.label, "neutral");
    }

    #[test]
    fn deterministic_for_same_input() {
        let classifier = LexiconClassifier::new();
        let a = classifier.score("what a pleasant surprise, wow");
        let b = classifier.score("what a pleasant surprise, wow");
        assert_eq!(a, b);
    }

    #[test]
    fn score_stays_below_one() {
        let result = LexiconClassifier::new()
            .score("happy happy joy joy glad thrilled delighted haha hilarious");
        assert_eq!(result.label, "joy");
        assert!(result.score < 1.0);
    }
}
