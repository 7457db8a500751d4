//! Talk configuration: closed enumerations and validated input.
//!
//! `TalkConfigInput` is the untyped request shape; `TalkConfig` is the
//! validated, defaulted record every builder consumes. No artifact is ever
//! built from an unvalidated configuration.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Target audience for the talk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Audience {
    Technical,
    Academic,
    Business,
    General,
}

impl Default for Audience {
    fn default() -> Self {
        Audience::General
    }
}

/// Assumed expertise level of the audience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ExpertiseLevel {
    Beginner,
    Intermediate,
    Advanced,
    Mixed,
}

impl Default for ExpertiseLevel {
    fn default() -> Self {
        ExpertiseLevel::Intermediate
    }
}

/// The format of the talk being prepared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TalkType {
    Keynote,
    TechnicalDeepDive,
    Workshop,
    LightningTalk,
    PanelDiscussion,
}

impl Default for TalkType {
    fn default() -> Self {
        TalkType::TechnicalDeepDive
    }
}

impl TalkType {
    /// Human-readable label ("Technical Deep Dive") for report headers.
    pub fn label(&self) -> &'static str {
        match self {
            TalkType::Keynote => "Keynote",
            TalkType::TechnicalDeepDive => "Technical Deep Dive",
            TalkType::Workshop => "Workshop",
            TalkType::LightningTalk => "Lightning Talk",
            TalkType::PanelDiscussion => "Panel Discussion",
        }
    }
}

/// Speaking tone used for pacing and suggestion tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tone {
    Formal,
    Conversational,
    Inspirational,
    Educational,
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Conversational
    }
}

impl Tone {
    /// Words-per-minute pacing estimate for this tone.
    ///
    /// Formal delivery runs slower; every other tone uses the
    /// conversational rate.
    pub fn words_per_minute(&self) -> u32 {
        match self {
            Tone::Formal => 120,
            _ => 150,
        }
    }
}

/// Minimum topic length in characters.
pub const MIN_TOPIC_LEN: usize = 3;
/// Maximum topic length in characters.
pub const MAX_TOPIC_LEN: usize = 200;
/// Minimum talk duration in minutes.
pub const MIN_DURATION_MINUTES: u32 = 5;
/// Maximum talk duration in minutes.
pub const MAX_DURATION_MINUTES: u32 = 120;

/// A validated talk configuration.
///
/// Constructed only through [`TalkConfigInput::validate`], so every bounded
/// field is known to be in range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkConfig {
    /// Talk topic (3-200 characters).
    pub topic: String,
    /// Target audience.
    pub audience: Audience,
    /// Total duration in minutes (5-120).
    pub duration_minutes: u32,
    /// Assumed audience expertise.
    pub expertise_level: ExpertiseLevel,
    /// Talk format.
    pub talk_type: TalkType,
    /// Speaking tone.
    pub tone: Tone,
    /// Speaker name, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_name: Option<String>,
    /// Event context (conference name, track, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_context: Option<String>,
    /// Free-form preparation notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Untyped configuration input, before validation.
///
/// Every field except `topic` is optional; [`validate`](Self::validate)
/// applies defaults and checks bounds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkConfigInput {
    pub topic: String,
    #[serde(default)]
    pub audience: Option<Audience>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub expertise_level: Option<ExpertiseLevel>,
    #[serde(default)]
    pub talk_type: Option<TalkType>,
    #[serde(default)]
    pub tone: Option<Tone>,
    #[serde(default)]
    pub speaker_name: Option<String>,
    #[serde(default)]
    pub event_context: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl TalkConfigInput {
    /// Creates an input with only a topic set, all other fields defaulted.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    /// Validates the input, applying defaults for absent fields.
    ///
    /// Returns the normalized [`TalkConfig`], or the full list of violated
    /// constraints. The list is always complete: validation never stops at
    /// the first failure.
    pub fn validate(self) -> std::result::Result<TalkConfig, Vec<String>> {
        let mut errors = Vec::new();

        let topic = self.topic.trim().to_string();
        if topic.chars().count() < MIN_TOPIC_LEN {
            errors.push(format!(
                "topic must be at least {MIN_TOPIC_LEN} characters"
            ));
        } else if topic.chars().count() > MAX_TOPIC_LEN {
            errors.push(format!("topic must be at most {MAX_TOPIC_LEN} characters"));
        }

        let duration_minutes = self.duration_minutes.unwrap_or(30);
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&duration_minutes) {
            errors.push(format!(
                "duration must be between {MIN_DURATION_MINUTES} and {MAX_DURATION_MINUTES} minutes"
            ));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(TalkConfig {
            topic,
            audience: self.audience.unwrap_or_default(),
            duration_minutes,
            expertise_level: self.expertise_level.unwrap_or_default(),
            talk_type: self.talk_type.unwrap_or_default(),
            tone: self.tone.unwrap_or_default(),
            speaker_name: self.speaker_name,
            event_context: self.event_context,
            notes: self.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_only_input_gets_defaults() {
        let config = TalkConfigInput::new("Valid Topic").validate().unwrap();
        assert_eq!(config.duration_minutes, 30);
        assert_eq!(config.audience, Audience::General);
        assert_eq!(config.tone, Tone::Conversational);
        assert_eq!(config.expertise_level, ExpertiseLevel::Intermediate);
        assert_eq!(config.talk_type, TalkType::TechnicalDeepDive);
    }

    #[test]
    fn short_topic_is_rejected() {
        let errors = TalkConfigInput::new("AB").validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("at least 3 characters"));
    }

    #[test]
    fn out_of_range_duration_is_rejected() {
        let mut input = TalkConfigInput::new("Valid Topic");
        input.duration_minutes = Some(150);
        let errors = input.validate().unwrap_err();
        assert!(errors[0].contains("between 5 and 120"));
    }

    #[test]
    fn all_violations_are_reported_together() {
        let mut input = TalkConfigInput::new("AB");
        input.duration_minutes = Some(3);
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn formal_tone_slows_pacing() {
        assert_eq!(Tone::Formal.words_per_minute(), 120);
        assert_eq!(Tone::Conversational.words_per_minute(), 150);
        assert_eq!(Tone::Inspirational.words_per_minute(), 150);
    }

    #[test]
    fn enums_serialize_snake_case() {
        let json = serde_json::to_string(&TalkType::TechnicalDeepDive).unwrap();
        assert_eq!(json, "\"technical_deep_dive\"");
        let json = serde_json::to_string(&Audience::General).unwrap();
        assert_eq!(json, "\"general\"");
    }
}
