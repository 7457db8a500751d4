//! Workflow session: the single mutable aggregate.
//!
//! The session holds the validated configuration plus an optional slot per
//! derived artifact. Artifacts reference each other only through shared
//! section ids, never by pointer, so replacing the outline leaves derived
//! ids intact (their content goes stale; this is accepted, not reconciled).

use crate::config::TalkConfig;
use crate::content::Script;
use crate::outline::Outline;
use crate::rehearsal::{QAPreparation, RehearsalSession};
use crate::slides::SlideDeck;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// One step of the linear preparation workflow.
///
/// Order is fixed: ideation, outline, content, export, rehearsal. There is
/// no backward transition and no skipping; rehearsal is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WorkflowStep {
    Ideation,
    Outline,
    Content,
    Export,
    Rehearsal,
}

impl WorkflowStep {
    /// The step after this one; rehearsal has no successor.
    pub fn next(&self) -> Option<WorkflowStep> {
        match self {
            WorkflowStep::Ideation => Some(WorkflowStep::Outline),
            WorkflowStep::Outline => Some(WorkflowStep::Content),
            WorkflowStep::Content => Some(WorkflowStep::Export),
            WorkflowStep::Export => Some(WorkflowStep::Rehearsal),
            WorkflowStep::Rehearsal => None,
        }
    }
}

/// Research gathered during ideation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchNotes {
    pub summary: String,
    #[serde(default)]
    pub key_findings: Vec<String>,
    #[serde(default)]
    pub sources: Vec<String>,
}

impl ResearchNotes {
    /// Creates research notes with only a summary.
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            key_findings: Vec::new(),
            sources: Vec::new(),
        }
    }
}

/// The single mutable aggregate coordinating step sequencing and artifact
/// storage. Held only in process memory; persistence is the host's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowSession {
    pub current_step: WorkflowStep,
    pub completed_steps: Vec<WorkflowStep>,
    pub config: TalkConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research: Option<ResearchNotes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Outline>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<Script>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide_deck: Option<SlideDeck>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qa_preparation: Option<QAPreparation>,
    #[serde(default)]
    pub rehearsals: Vec<RehearsalSession>,
}

impl WorkflowSession {
    /// Creates a fresh session at the ideation step.
    pub fn new(config: TalkConfig) -> Self {
        Self {
            current_step: WorkflowStep::Ideation,
            completed_steps: Vec::new(),
            config,
            research: None,
            outline: None,
            script: None,
            slide_deck: None,
            qa_preparation: None,
            rehearsals: Vec::new(),
        }
    }

    /// Marks a step complete and advances to its successor, if any.
    ///
    /// Completion is recorded once per step; advancing past rehearsal is a
    /// no-op because the workflow is terminal there.
    pub fn complete_step(&mut self, step: WorkflowStep) {
        if !self.completed_steps.contains(&step) {
            self.completed_steps.push(step);
        }
        if let Some(next) = step.next() {
            if next > self.current_step {
                self.current_step = next;
            }
        }
    }

    /// Whether a step has been completed.
    pub fn is_completed(&self, step: WorkflowStep) -> bool {
        self.completed_steps.contains(&step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TalkConfigInput;

    fn session() -> WorkflowSession {
        WorkflowSession::new(TalkConfigInput::new("Steps").validate().unwrap())
    }

    #[test]
    fn steps_are_linearly_ordered() {
        assert!(WorkflowStep::Ideation < WorkflowStep::Outline);
        assert!(WorkflowStep::Export < WorkflowStep::Rehearsal);
        assert_eq!(WorkflowStep::Rehearsal.next(), None);
    }

    #[test]
    fn completing_a_step_advances_current() {
        let mut session = session();
        session.complete_step(WorkflowStep::Ideation);
        assert_eq!(session.current_step, WorkflowStep::Outline);
        assert!(session.is_completed(WorkflowStep::Ideation));
    }

    #[test]
    fn completion_never_moves_backwards() {
        let mut session = session();
        session.complete_step(WorkflowStep::Outline);
        assert_eq!(session.current_step, WorkflowStep::Content);
        // Completing an earlier step later must not regress the marker.
        session.complete_step(WorkflowStep::Ideation);
        assert_eq!(session.current_step, WorkflowStep::Content);
    }

    #[test]
    fn completing_a_step_twice_records_once() {
        let mut session = session();
        session.complete_step(WorkflowStep::Ideation);
        session.complete_step(WorkflowStep::Ideation);
        assert_eq!(session.completed_steps.len(), 1);
    }

    #[test]
    fn rehearsal_is_terminal() {
        let mut session = session();
        session.complete_step(WorkflowStep::Rehearsal);
        assert_eq!(session.current_step, WorkflowStep::Ideation);
        assert!(session.is_completed(WorkflowStep::Rehearsal));
    }
}
