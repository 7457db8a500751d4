//! Slide deck construction from an outline.

use super::model::{DeckMetadata, Slide, SlideDeck, SlideLayout, DECK_FORMAT_VERSION};
use crate::config::TalkConfig;
use crate::outline::{Outline, Section};
use crate::template::Theme;

/// Maximum key points per content slide.
const MAX_POINTS_PER_SLIDE: usize = 4;

/// Seconds allotted to the title slide.
const TITLE_SLIDE_SECONDS: u32 = 30;

/// Seconds allotted to section-header and closing slides.
const HEADER_SLIDE_SECONDS: u32 = 15;

struct SlideSequence {
    slides: Vec<Slide>,
}

impl SlideSequence {
    fn new() -> Self {
        Self { slides: Vec::new() }
    }

    fn push(&mut self, layout: SlideLayout) -> &mut Slide {
        let index = self.slides.len();
        self.slides
            .push(Slide::new(format!("slide-{index}"), index as u32, layout));
        self.slides.last_mut().unwrap()
    }
}

fn push_section_slides(sequence: &mut SlideSequence, section: &Section) {
    let header = sequence.push(SlideLayout::SectionHeader);
    header.title = Some(section.title.clone());
    header.speaker_notes = match &section.notes {
        Some(notes) => format!("Transition to {}. {notes}", section.title),
        None => format!("Transition to {}.", section.title),
    };
    header.duration_seconds = HEADER_SLIDE_SECONDS;

    if section.key_points.is_empty() {
        return;
    }

    let chunks: Vec<&[String]> = section.key_points.chunks(MAX_POINTS_PER_SLIDE).collect();
    let per_slide_seconds = section.duration_minutes * 60 / chunks.len() as u32;
    for chunk in chunks {
        let slide = sequence.push(SlideLayout::Bullets);
        slide.title = Some(section.title.clone());
        slide.bullets = Some(chunk.to_vec());
        let preview: Vec<&str> = chunk.iter().take(3).map(String::as_str).collect();
        slide.speaker_notes = format!("Cover: {}", preview.join(", "));
        slide.duration_seconds = per_slide_seconds;
    }
}

/// Builds a slide deck from a validated configuration and an outline.
///
/// Title slide, then per section a header slide plus content slides
/// grouping at most four key points each, a Q&A slide when the outline
/// schedules one, and a closing slide. The theme follows the audience.
pub fn build_slide_deck(config: &TalkConfig, outline: &Outline) -> SlideDeck {
    let mut sequence = SlideSequence::new();

    let title = sequence.push(SlideLayout::Title);
    title.title = Some(outline.title.clone());
    title.subtitle = config.speaker_name.clone().or(outline.subtitle.clone());
    title.body = Some(format!(
        "{} · {} minutes",
        config.audience, outline.total_duration_minutes
    ));
    title.speaker_notes = "Welcome the audience. Wait for attention.".to_string();
    title.duration_seconds = TITLE_SLIDE_SECONDS;

    for section in &outline.sections {
        push_section_slides(&mut sequence, section);
    }

    if outline.has_qa() {
        let qa_seconds: u32 = outline
            .sections
            .iter()
            .filter(|s| s.section_type == crate::outline::SectionType::Qa)
            .map(|s| s.duration_minutes * 60)
            .sum();
        let qa = sequence.push(SlideLayout::Title);
        qa.title = Some("Questions?".to_string());
        qa.speaker_notes =
            "Repeat each question before answering. Keep answers under a minute.".to_string();
        qa.duration_seconds = qa_seconds.max(HEADER_SLIDE_SECONDS);
    }

    let closing = sequence.push(SlideLayout::Title);
    closing.title = Some("Thank You".to_string());
    closing.body = outline
        .call_to_action
        .clone()
        .or_else(|| Some("Questions?".to_string()));
    closing.speaker_notes = "Thank the audience. Open for questions.".to_string();
    closing.duration_seconds = HEADER_SLIDE_SECONDS;

    let slides = sequence.slides;
    let metadata = DeckMetadata {
        slide_count: slides.len(),
        total_duration_seconds: slides.iter().map(|s| s.duration_seconds).sum(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        version: DECK_FORMAT_VERSION.to_string(),
    };

    SlideDeck {
        title: outline.title.clone(),
        author: config.speaker_name.clone(),
        date: None,
        theme: Theme::for_audience(config.audience),
        slides,
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Audience, TalkConfigInput, TalkType};
    use crate::outline::build_outline_from_template;
    use crate::template::{TalkTemplate, ThemeCategory};

    fn deck_for(talk_type: TalkType, audience: Audience) -> SlideDeck {
        let mut input = TalkConfigInput::new("Deck Topic");
        input.talk_type = Some(talk_type);
        input.audience = Some(audience);
        let config = input.validate().unwrap();
        let template = TalkTemplate::for_talk_type(talk_type);
        let outline =
            build_outline_from_template(&template, &config.topic, config.duration_minutes);
        build_slide_deck(&config, &outline)
    }

    #[test]
    fn deck_opens_with_title_and_ends_with_thank_you() {
        let deck = deck_for(TalkType::TechnicalDeepDive, Audience::Technical);
        assert_eq!(deck.slides[0].layout, SlideLayout::Title);
        assert_eq!(deck.slides[0].title.as_deref(), Some("Deck Topic"));
        let last = deck.slides.last().unwrap();
        assert_eq!(last.title.as_deref(), Some("Thank You"));
    }

    #[test]
    fn ids_and_order_are_sequential() {
        let deck = deck_for(TalkType::Keynote, Audience::General);
        for (index, slide) in deck.slides.iter().enumerate() {
            assert_eq!(slide.id, format!("slide-{index}"));
            assert_eq!(slide.order as usize, index);
        }
    }

    #[test]
    fn key_points_are_chunked_at_four_per_slide() {
        let config = TalkConfigInput::new("Chunking").validate().unwrap();
        let template = TalkTemplate::for_talk_type(TalkType::TechnicalDeepDive);
        let mut outline = build_outline_from_template(&template, "Chunking", 30);
        outline.sections[1].key_points = (0..9).map(|i| format!("point {i}")).collect();

        let deck = build_slide_deck(&config, &outline);
        let content_slides: Vec<&Slide> = deck
            .slides
            .iter()
            .filter(|s| {
                s.layout == SlideLayout::Bullets
                    && s.title.as_deref() == Some(outline.sections[1].title.as_str())
            })
            .collect();
        assert_eq!(content_slides.len(), 3); // 4 + 4 + 1
        assert!(content_slides.iter().all(|s| s.bullet_count() <= 4));
        // Section seconds split evenly across its content slides.
        let section_seconds = outline.sections[1].duration_minutes * 60;
        assert_eq!(
            content_slides[0].duration_seconds,
            section_seconds / 3
        );
    }

    #[test]
    fn qa_slide_only_when_outline_has_qa() {
        let with_qa = deck_for(TalkType::TechnicalDeepDive, Audience::Technical);
        assert!(with_qa
            .slides
            .iter()
            .any(|s| s.title.as_deref() == Some("Questions?")));

        let without_qa = deck_for(TalkType::LightningTalk, Audience::Technical);
        assert!(!without_qa
            .slides
            .iter()
            .any(|s| s.title.as_deref() == Some("Questions?")));
    }

    #[test]
    fn theme_follows_audience() {
        assert_eq!(
            deck_for(TalkType::Keynote, Audience::Business).theme.category,
            ThemeCategory::Business
        );
        assert_eq!(
            deck_for(TalkType::Keynote, Audience::General).theme.category,
            ThemeCategory::Minimal
        );
    }

    #[test]
    fn metadata_is_derived_from_slides() {
        let deck = deck_for(TalkType::Workshop, Audience::Academic);
        assert_eq!(deck.metadata.slide_count, deck.slides.len());
        let total: u32 = deck.slides.iter().map(|s| s.duration_seconds).sum();
        assert_eq!(deck.metadata.total_duration_seconds, total);
        assert_eq!(deck.metadata.version, DECK_FORMAT_VERSION);
    }
}
