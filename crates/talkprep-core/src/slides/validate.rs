//! Deck-quality validation.

use super::model::SlideDeck;
use crate::config::TalkConfig;
use serde::{Deserialize, Serialize};

/// Maximum bullets per slide before a warning fires.
const MAX_BULLETS_PER_SLIDE: usize = 6;

/// Result of validating a deck against its configuration.
///
/// `is_valid` reflects only `warnings`; `suggestions` are advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckValidation {
    pub is_valid: bool,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Validates slide density, titles, and note coverage.
pub fn validate_slide_deck(deck: &SlideDeck, config: &TalkConfig) -> DeckValidation {
    let mut warnings = Vec::new();
    let mut suggestions = Vec::new();

    let slide_count = deck.slides.len() as f64;
    let minutes = f64::from(config.duration_minutes);

    if slide_count > minutes * 1.5 {
        warnings.push(format!(
            "{} slides for a {} minute talk leaves under 40 seconds per slide",
            deck.slides.len(),
            config.duration_minutes
        ));
    }
    for slide in &deck.slides {
        if slide.bullet_count() > MAX_BULLETS_PER_SLIDE {
            let title = slide.title.as_deref().unwrap_or(&slide.id);
            warnings.push(format!(
                "Slide '{title}' has {} bullet points; cap is {MAX_BULLETS_PER_SLIDE}",
                slide.bullet_count()
            ));
        }
    }

    if slide_count < minutes * 0.5 {
        suggestions.push(format!(
            "{} slides may be sparse for {} minutes; consider visual support for key moments",
            deck.slides.len(),
            config.duration_minutes
        ));
    }
    for slide in &deck.slides {
        if slide.title.is_none() && !slide.layout.is_image() {
            suggestions.push(format!("Slide '{}' has no title", slide.id));
        }
    }

    let without_notes = deck
        .slides
        .iter()
        .filter(|s| s.speaker_notes.trim().is_empty())
        .count();
    if slide_count > 0.0 && without_notes as f64 > slide_count * 0.3 {
        suggestions.push(format!(
            "{without_notes} of {} slides have no speaker notes",
            deck.slides.len()
        ));
    }

    DeckValidation {
        is_valid: warnings.is_empty(),
        warnings,
        suggestions,
    }
}
