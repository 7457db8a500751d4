//! Slide deck domain models.

use crate::template::Theme;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Version string stamped into deck metadata.
pub const DECK_FORMAT_VERSION: &str = "1.0";

/// Visual layout of a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SlideLayout {
    Title,
    SectionHeader,
    Bullets,
    TwoColumn,
    Code,
    Quote,
    Image,
    FullImage,
    Comparison,
    Timeline,
    Blank,
}

impl SlideLayout {
    /// Whether the layout is image-led and may legitimately omit a title.
    pub fn is_image(&self) -> bool {
        matches!(self, SlideLayout::Image | SlideLayout::FullImage)
    }
}

/// A quoted passage with attribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideQuote {
    pub text: String,
    pub attribution: String,
}

/// One slide in the deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Sequential id (`slide-<index>`).
    pub id: String,
    /// Position in the deck; matches the list index.
    pub order: u32,
    pub layout: SlideLayout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote: Option<SlideQuote>,
    pub speaker_notes: String,
    pub duration_seconds: u32,
}

impl Slide {
    /// Creates a slide with all optional content absent.
    pub fn new(id: impl Into<String>, order: u32, layout: SlideLayout) -> Self {
        Self {
            id: id.into(),
            order,
            layout,
            title: None,
            subtitle: None,
            body: None,
            bullets: None,
            image_prompt: None,
            code_example: None,
            quote: None,
            speaker_notes: String::new(),
            duration_seconds: 60,
        }
    }

    /// Number of bullet points on the slide.
    pub fn bullet_count(&self) -> usize {
        self.bullets.as_ref().map(|b| b.len()).unwrap_or(0)
    }
}

/// Derived deck metadata; never set independently of the slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckMetadata {
    pub slide_count: usize,
    pub total_duration_seconds: u32,
    /// Generation timestamp, RFC 3339.
    pub generated_at: String,
    pub version: String,
}

/// An ordered presentation-slide sequence with theme and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideDeck {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub theme: Theme,
    pub slides: Vec<Slide>,
    pub metadata: DeckMetadata,
}

impl SlideDeck {
    /// Recomputes the derived metadata from the current slide list.
    pub fn refresh_metadata(&mut self) {
        self.metadata.slide_count = self.slides.len();
        self.metadata.total_duration_seconds =
            self.slides.iter().map(|s| s.duration_seconds).sum();
    }
}
