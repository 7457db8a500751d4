//! Script domain models.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Pacing verdict for a drafted section against its time budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PacingVerdict {
    TooLong,
    TooShort,
    OnTrack,
}

/// Delivery notes for one outline section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerNote {
    /// Outline section this note belongs to.
    pub section_id: String,
    /// Timing guidance ("3 min, target ~450 words").
    pub timing: String,
    /// Phrases the speaker marked for emphasis.
    #[serde(default)]
    pub emphasis_points: Vec<String>,
    /// Natural pause points (questions and exclamations).
    #[serde(default)]
    pub pause_points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pacing: Option<PacingVerdict>,
}

/// One spoken section of the script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptSection {
    /// Matches the outline section id.
    pub id: String,
    pub title: String,
    pub body: String,
    /// Spoken bridge into this section.
    pub transition_in: String,
    /// Spoken bridge out of this section.
    pub transition_out: String,
    #[serde(default)]
    pub code_examples: Vec<String>,
    #[serde(default)]
    pub anecdotes: Vec<String>,
}

impl ScriptSection {
    /// Creates an empty section skeleton for the given outline section.
    pub fn skeleton(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: String::new(),
            transition_in: String::new(),
            transition_out: String::new(),
            code_examples: Vec::new(),
            anecdotes: Vec::new(),
        }
    }
}

/// Expanded spoken content and delivery notes derived from an outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub title: String,
    pub introduction: String,
    pub sections: Vec<ScriptSection>,
    pub conclusion: String,
    /// One note per outline section, Q&A included.
    pub speaker_notes: Vec<SpeakerNote>,
}

impl Script {
    /// Total word count across introduction, section bodies, and conclusion.
    pub fn word_count(&self) -> usize {
        let mut count = self.introduction.split_whitespace().count()
            + self.conclusion.split_whitespace().count();
        for section in &self.sections {
            count += section.body.split_whitespace().count();
        }
        count
    }
}
