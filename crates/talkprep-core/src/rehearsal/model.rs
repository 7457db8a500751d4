//! Q&A and rehearsal domain models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumIter};

/// Category of an anticipated audience question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuestionCategory {
    Clarification,
    Challenge,
    Application,
    Scope,
    Technical,
}

/// Difficulty of answering an anticipated question well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuestionDifficulty {
    Easy,
    Medium,
    Hard,
}

/// One anticipated question with a prepared approach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QAPair {
    /// Sequential id (`q-<n>`), assigned in generation order.
    pub id: String,
    pub question: String,
    pub category: QuestionCategory,
    pub difficulty: QuestionDifficulty,
    pub suggested_answer: String,
    #[serde(default)]
    pub follow_ups: Vec<String>,
    #[serde(default)]
    pub pitfalls: Vec<String>,
}

/// Anticipated-question bank plus redirect strategies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QAPreparation {
    pub pairs: Vec<QAPair>,
    /// Topics likely to draw pushback during Q&A.
    pub challenging_topics: Vec<String>,
    /// Prepared responses keyed by question id; empty at creation.
    #[serde(default)]
    pub response_cache: HashMap<String, String>,
    pub redirect_strategies: Vec<String>,
}

/// Progress state of one section during a rehearsal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TimingStatus {
    NotStarted,
    InProgress,
    Completed,
}

/// Target-versus-actual timing for one outline section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTiming {
    pub section_id: String,
    pub title: String,
    pub target_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_seconds: Option<u32>,
    pub status: TimingStatus,
}

/// Pace classification for a completed section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaceVerdict {
    TooSlow,
    TooFast,
    OnTrack,
}

/// Per-section rehearsal verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionVerdict {
    pub section_id: String,
    pub verdict: PaceVerdict,
    /// Signed percent deviation from the target.
    pub variance_percent: f64,
    pub suggestion: String,
}

/// Aggregated rehearsal feedback.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RehearsalFeedback {
    pub overall_target_seconds: u32,
    pub overall_actual_seconds: u32,
    pub overall_variance_percent: f64,
    #[serde(default)]
    pub section_verdicts: Vec<SectionVerdict>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvement_areas: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// A timed practice run tracked against an outline's target durations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RehearsalSession {
    /// UUID of this run.
    pub id: String,
    /// Start timestamp, RFC 3339.
    pub started_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<String>,
    pub section_timings: Vec<SectionTiming>,
    pub feedback: RehearsalFeedback,
}

impl RehearsalSession {
    /// Sections whose timing has been recorded.
    pub fn completed_timings(&self) -> Vec<&SectionTiming> {
        self.section_timings
            .iter()
            .filter(|t| t.status == TimingStatus::Completed)
            .collect()
    }
}
