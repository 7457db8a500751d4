//! Workflow coordinator: the talk-preparation state machine.
//!
//! `TalkPrepWorkflow` holds one mutable [`WorkflowSession`] and exposes the
//! core builders as sequenced steps. Steps are linear and never move
//! backwards. Two gates are validation-sensitive: an outline advances only
//! when timing validation produces no warnings, and a script advances only
//! when content validation passes. Generating slides always advances:
//! deck warnings are advisory and never block export.

use talkprep_core::config::TalkConfigInput;
use talkprep_core::content::{
    build_script_skeleton, generate_conclusion_patterns, generate_hook_suggestions,
    script_to_markdown, validate_content, ContentValidation, Script,
};
use talkprep_core::error::{Result, TalkPrepError};
use talkprep_core::outline::{
    build_outline_from_template, outline_to_markdown, validate_outline_timing, Outline,
    TimingValidation,
};
use talkprep_core::rehearsal::{
    build_qa_preparation, create_rehearsal_session, generate_practice_suggestions,
    generate_rehearsal_feedback, generate_timing_cues, qa_guide_markdown, update_section_timing,
    QAPreparation, RehearsalFeedback, RehearsalSession,
};
use talkprep_core::session::{ResearchNotes, WorkflowSession, WorkflowStep};
use talkprep_core::slides::{
    build_slide_deck, export_slide_deck, validate_slide_deck, DeckValidation, ExportOptions,
    ExportResult, SlideDeck,
};
use talkprep_core::template::TalkTemplate;

/// Number of key concepts promoted to learning objectives.
const MAX_LEARNING_OBJECTIVES: usize = 3;

/// Coordinates talk preparation for one session.
///
/// Each instance is independent; construct one per logical conversation.
/// The coordinator is not designed for concurrent callers - a host
/// embedding it in a concurrent context must serialize access externally.
#[derive(Debug, Default)]
pub struct TalkPrepWorkflow {
    session: Option<WorkflowSession>,
}

impl TalkPrepWorkflow {
    /// Creates a coordinator with no session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session, if initialized.
    pub fn session(&self) -> Result<&WorkflowSession> {
        self.session
            .as_ref()
            .ok_or(TalkPrepError::SessionNotInitialized)
    }

    fn session_mut(&mut self) -> Result<&mut WorkflowSession> {
        self.session
            .as_mut()
            .ok_or(TalkPrepError::SessionNotInitialized)
    }

    /// Validates the configuration and starts a fresh session at ideation.
    ///
    /// Replaces any existing session. Validation failures surface as one
    /// aggregated `ConfigurationInvalid` error.
    pub fn initialize(&mut self, input: TalkConfigInput) -> Result<&WorkflowSession> {
        let config = input
            .validate()
            .map_err(|errors| TalkPrepError::configuration_invalid(&errors))?;
        tracing::info!(topic = %config.topic, talk_type = %config.talk_type, "Session initialized");
        self.session = Some(WorkflowSession::new(config));
        self.session()
    }

    /// Stores research notes, completing ideation and advancing to outline.
    pub fn set_research(&mut self, notes: ResearchNotes) -> Result<()> {
        let session = self.session_mut()?;
        session.research = Some(notes);
        session.complete_step(WorkflowStep::Ideation);
        tracing::info!(step = %session.current_step, "Research recorded");
        Ok(())
    }

    /// Builds an outline from the talk-type template.
    ///
    /// Key concepts become learning objectives (the first three). The
    /// outline step completes only when timing validation raises no
    /// warnings; the outline is stored either way.
    pub fn generate_outline(&mut self, key_concepts: &[String]) -> Result<&Outline> {
        let session = self.session_mut()?;
        let template = TalkTemplate::for_talk_type(session.config.talk_type);
        let mut outline = build_outline_from_template(
            &template,
            &session.config.topic,
            session.config.duration_minutes,
        );
        outline.learning_objectives = key_concepts
            .iter()
            .take(MAX_LEARNING_OBJECTIVES)
            .cloned()
            .collect();
        Self::store_outline(session, outline);
        self.outline()
    }

    /// Stores a caller-supplied outline under the same validation gate as
    /// [`generate_outline`](Self::generate_outline).
    pub fn set_outline(&mut self, outline: Outline) -> Result<TimingValidation> {
        let session = self.session_mut()?;
        Ok(Self::store_outline(session, outline))
    }

    fn store_outline(session: &mut WorkflowSession, outline: Outline) -> TimingValidation {
        let validation = validate_outline_timing(&outline);
        session.outline = Some(outline);
        if validation.is_valid {
            session.complete_step(WorkflowStep::Outline);
            tracing::info!(step = %session.current_step, "Outline accepted");
        } else {
            tracing::warn!(warnings = validation.warnings.len(), "Outline stored with timing warnings");
        }
        validation
    }

    /// The stored outline.
    pub fn outline(&self) -> Result<&Outline> {
        self.session()?
            .outline
            .as_ref()
            .ok_or_else(|| TalkPrepError::missing_artifact("Outline"))
    }

    /// Builds and stores an empty script skeleton from the outline.
    ///
    /// A skeleton is a draft: it does not advance the content step.
    pub fn generate_script_skeleton(&mut self) -> Result<&Script> {
        let skeleton = build_script_skeleton(self.outline()?);
        let session = self.session_mut()?;
        session.script = Some(skeleton);
        tracing::debug!("Script skeleton generated");
        self.script()
    }

    /// Stores a drafted script; completes the content step only when
    /// content validation passes.
    pub fn set_script(&mut self, script: Script) -> Result<ContentValidation> {
        self.outline()?;
        let session = self.session_mut()?;
        let validation = validate_content(&script, &session.config);
        session.script = Some(script);
        if validation.is_valid {
            session.complete_step(WorkflowStep::Content);
            tracing::info!(step = %session.current_step, "Script accepted");
        } else {
            tracing::warn!(issues = validation.issues.len(), "Script stored with issues");
        }
        Ok(validation)
    }

    /// The stored script.
    pub fn script(&self) -> Result<&Script> {
        self.session()?
            .script
            .as_ref()
            .ok_or_else(|| TalkPrepError::missing_artifact("Script"))
    }

    /// Builds the slide deck from the outline and stores it.
    ///
    /// Always completes the export step, whatever the deck validation
    /// outcome; the validation is returned so callers still see it.
    pub fn generate_slides(&mut self) -> Result<DeckValidation> {
        let outline = self.outline()?.clone();
        let session = self.session_mut()?;
        let deck = build_slide_deck(&session.config, &outline);
        let validation = validate_slide_deck(&deck, &session.config);
        session.slide_deck = Some(deck);
        session.complete_step(WorkflowStep::Export);
        tracing::info!(step = %session.current_step, valid = validation.is_valid, "Slides generated");
        Ok(validation)
    }

    /// The stored slide deck.
    pub fn slide_deck(&self) -> Result<&SlideDeck> {
        self.session()?
            .slide_deck
            .as_ref()
            .ok_or_else(|| TalkPrepError::missing_artifact("Slide deck"))
    }

    /// Exports the stored deck in the requested format.
    pub fn export_slides(&self, options: &ExportOptions) -> Result<ExportResult> {
        Ok(export_slide_deck(self.slide_deck()?, options))
    }

    /// Builds and stores the Q&A preparation pack.
    pub fn generate_qa(&mut self) -> Result<&QAPreparation> {
        let outline = self.outline()?.clone();
        let session = self.session_mut()?;
        session.qa_preparation = Some(build_qa_preparation(&session.config, &outline));
        tracing::debug!("Q&A preparation generated");
        self.qa_preparation()
    }

    /// The stored Q&A preparation.
    pub fn qa_preparation(&self) -> Result<&QAPreparation> {
        self.session()?
            .qa_preparation
            .as_ref()
            .ok_or_else(|| TalkPrepError::missing_artifact("Q&A preparation"))
    }

    /// Starts a rehearsal run against the outline's targets.
    ///
    /// Marks the rehearsal step complete; the workflow is terminal here.
    pub fn start_rehearsal(&mut self) -> Result<&RehearsalSession> {
        let outline = self.outline()?.clone();
        let session = self.session_mut()?;
        session.rehearsals.push(create_rehearsal_session(&outline));
        session.complete_step(WorkflowStep::Rehearsal);
        tracing::info!(runs = session.rehearsals.len(), "Rehearsal started");
        self.current_rehearsal()
    }

    /// The most recent rehearsal run.
    pub fn current_rehearsal(&self) -> Result<&RehearsalSession> {
        self.session()?
            .rehearsals
            .last()
            .ok_or_else(|| TalkPrepError::missing_artifact("Rehearsal session"))
    }

    /// Records the actual duration of one section in the latest rehearsal.
    ///
    /// An unknown section id leaves the timings unchanged, mirroring the
    /// pure update underneath.
    pub fn record_section_timing(&mut self, section_id: &str, actual_seconds: u32) -> Result<()> {
        let session = self.session_mut()?;
        let latest = session
            .rehearsals
            .last_mut()
            .ok_or_else(|| TalkPrepError::missing_artifact("Rehearsal session"))?;
        let updated = update_section_timing(latest, section_id, actual_seconds);
        *latest = updated;
        Ok(())
    }

    /// Derives feedback for the latest rehearsal, stores it on the run,
    /// and stamps the run's end time.
    pub fn rehearsal_feedback(&mut self) -> Result<RehearsalFeedback> {
        let outline = self.outline()?.clone();
        let session = self.session_mut()?;
        let latest = session
            .rehearsals
            .last_mut()
            .ok_or_else(|| TalkPrepError::missing_artifact("Rehearsal session"))?;
        let feedback = generate_rehearsal_feedback(latest, &outline);
        latest.feedback = feedback.clone();
        latest.ended_at = Some(chrono::Utc::now().to_rfc3339());
        Ok(feedback)
    }

    /// Opening-hook suggestions for the session's tone and audience.
    pub fn hook_suggestions(&self) -> Result<Vec<String>> {
        Ok(generate_hook_suggestions(&self.session()?.config))
    }

    /// Conclusion-pattern suggestions for the session's tone.
    pub fn conclusion_patterns(&self) -> Result<Vec<String>> {
        Ok(generate_conclusion_patterns(&self.session()?.config))
    }

    /// Practice suggestions for the session's talk type.
    pub fn practice_suggestions(&self) -> Result<Vec<String>> {
        Ok(generate_practice_suggestions(&self.session()?.config))
    }

    /// The timing-cue rehearsal report.
    pub fn timing_cues(&self) -> Result<String> {
        Ok(generate_timing_cues(self.outline()?))
    }

    /// The outline rendered as markdown.
    pub fn outline_markdown(&self) -> Result<String> {
        Ok(outline_to_markdown(self.outline()?, &self.session()?.config))
    }

    /// The script rendered as markdown.
    pub fn script_markdown(&self) -> Result<String> {
        Ok(script_to_markdown(self.script()?))
    }

    /// The Q&A preparation rendered as a markdown study guide.
    pub fn qa_guide(&self) -> Result<String> {
        Ok(qa_guide_markdown(self.qa_preparation()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talkprep_core::config::{TalkType, Tone};
    use talkprep_core::content::ScriptSection;
    use talkprep_core::rehearsal::TimingStatus;
    use talkprep_core::slides::ExportFormat;

    fn graphql_workflow() -> TalkPrepWorkflow {
        let mut workflow = TalkPrepWorkflow::new();
        let mut input = TalkConfigInput::new("Building APIs with GraphQL");
        input.talk_type = Some(TalkType::TechnicalDeepDive);
        input.duration_minutes = Some(30);
        workflow.initialize(input).unwrap();
        workflow
    }

    #[test]
    fn operations_before_initialization_fail() {
        let workflow = TalkPrepWorkflow::new();
        assert_eq!(
            workflow.session().unwrap_err(),
            TalkPrepError::SessionNotInitialized
        );
        assert_eq!(
            workflow.hook_suggestions().unwrap_err(),
            TalkPrepError::SessionNotInitialized
        );
    }

    #[test]
    fn invalid_configuration_is_aggregated() {
        let mut workflow = TalkPrepWorkflow::new();
        let mut input = TalkConfigInput::new("AB");
        input.duration_minutes = Some(150);
        let err = workflow.initialize(input).unwrap_err();
        assert!(err.is_configuration_invalid());
        let text = err.to_string();
        assert!(text.contains("at least 3 characters"));
        assert!(text.contains("between 5 and 120"));
        // No session survives a failed initialization.
        assert!(workflow.session().is_err());
    }

    #[test]
    fn generators_before_outline_fail_with_missing_artifact() {
        let mut workflow = graphql_workflow();
        let err = workflow.generate_script_skeleton().unwrap_err();
        assert!(err.to_string().starts_with("Outline required"));
        let err = workflow.generate_slides().unwrap_err();
        assert!(err.is_missing_artifact());
        let err = workflow.generate_qa().unwrap_err();
        assert!(err.is_missing_artifact());
        let err = workflow.start_rehearsal().unwrap_err();
        assert!(err.is_missing_artifact());
    }

    #[test]
    fn end_to_end_graphql_scenario() {
        let mut workflow = graphql_workflow();

        let outline = workflow
            .generate_outline(&["GraphQL basics".to_string(), "Schema design".to_string()])
            .unwrap();
        assert_eq!(outline.total_duration_minutes, 30);
        assert_eq!(outline.sections.len(), 6);
        assert_eq!(
            outline.learning_objectives,
            vec!["GraphQL basics".to_string(), "Schema design".to_string()]
        );
        assert_eq!(
            workflow.session().unwrap().current_step,
            WorkflowStep::Content
        );

        workflow.generate_slides().unwrap();
        let export = workflow
            .export_slides(&ExportOptions::for_format(ExportFormat::Markdown))
            .unwrap();
        assert!(export.content.contains("# Building APIs with GraphQL"));
        assert_eq!(export.content_type, "text/markdown");
        assert_eq!(
            workflow.session().unwrap().current_step,
            WorkflowStep::Rehearsal
        );
    }

    #[test]
    fn research_completes_ideation() {
        let mut workflow = graphql_workflow();
        workflow
            .set_research(ResearchNotes::new("Survey of schema-first tooling"))
            .unwrap();
        let session = workflow.session().unwrap();
        assert!(session.is_completed(WorkflowStep::Ideation));
        assert_eq!(session.current_step, WorkflowStep::Outline);
    }

    #[test]
    fn invalid_script_is_stored_but_does_not_advance() {
        let mut workflow = graphql_workflow();
        workflow
            .generate_outline(&["GraphQL basics".to_string()])
            .unwrap();
        let skeleton = workflow.generate_script_skeleton().unwrap().clone();

        let validation = workflow.set_script(skeleton).unwrap();
        assert!(!validation.is_valid);
        let session = workflow.session().unwrap();
        assert!(session.script.is_some());
        assert!(!session.is_completed(WorkflowStep::Content));
    }

    #[test]
    fn valid_script_advances_to_export() {
        let mut workflow = TalkPrepWorkflow::new();
        let mut input = TalkConfigInput::new("Short and Valid");
        input.duration_minutes = Some(5);
        input.tone = Some(Tone::Conversational);
        workflow.initialize(input).unwrap();
        workflow.generate_outline(&[]).unwrap();

        let filler = |words: usize| "word ".repeat(words).trim_end().to_string();
        let mut script = workflow.generate_script_skeleton().unwrap().clone();
        script.introduction = filler(40);
        script.conclusion = filler(40);
        let body = filler(200);
        script.sections = script
            .sections
            .iter()
            .map(|s| ScriptSection {
                body: body.clone(),
                ..s.clone()
            })
            .collect();

        let validation = workflow.set_script(script).unwrap();
        assert!(validation.is_valid, "{:?}", validation.issues);
        assert_eq!(
            workflow.session().unwrap().current_step,
            WorkflowStep::Export
        );
    }

    #[test]
    fn slides_advance_even_when_validation_warns() {
        let mut workflow = TalkPrepWorkflow::new();
        let mut input = TalkConfigInput::new("Dense Lightning");
        input.talk_type = Some(TalkType::LightningTalk);
        input.duration_minutes = Some(5);
        workflow.initialize(input).unwrap();
        workflow.generate_outline(&[]).unwrap();

        // A 5 minute lightning talk generates more than 7.5 slides' worth
        // of headers and content, so the density warning fires.
        let validation = workflow.generate_slides().unwrap();
        assert!(!validation.is_valid);
        let session = workflow.session().unwrap();
        assert!(session.is_completed(WorkflowStep::Export));
        assert_eq!(session.current_step, WorkflowStep::Rehearsal);
    }

    #[test]
    fn rehearsal_round_trip_produces_feedback() {
        let mut workflow = graphql_workflow();
        workflow
            .generate_outline(&["GraphQL basics".to_string()])
            .unwrap();
        workflow.start_rehearsal().unwrap();

        workflow.record_section_timing("section-0", 180).unwrap();
        workflow.record_section_timing("section-1", 310).unwrap();
        // Unknown ids change nothing.
        workflow.record_section_timing("section-99", 10).unwrap();

        let rehearsal = workflow.current_rehearsal().unwrap();
        let completed = rehearsal
            .section_timings
            .iter()
            .filter(|t| t.status == TimingStatus::Completed)
            .count();
        assert_eq!(completed, 2);

        let feedback = workflow.rehearsal_feedback().unwrap();
        assert_eq!(feedback.section_verdicts.len(), 2);
        assert!(workflow.current_rehearsal().unwrap().ended_at.is_some());
    }

    #[test]
    fn reports_require_their_artifacts() {
        let workflow = graphql_workflow();
        assert!(workflow.outline_markdown().is_err());
        assert!(workflow.script_markdown().is_err());
        assert!(workflow.qa_guide().is_err());
        assert!(workflow.timing_cues().is_err());
    }

    #[test]
    fn qa_and_reports_after_outline() {
        let mut workflow = graphql_workflow();
        workflow
            .generate_outline(&["GraphQL basics".to_string()])
            .unwrap();
        let qa = workflow.generate_qa().unwrap();
        assert!(!qa.pairs.is_empty());
        assert!(workflow.qa_guide().unwrap().contains("Redirect Strategies"));
        assert!(workflow
            .timing_cues()
            .unwrap()
            .starts_with("# Timing Cues"));
        assert!(workflow
            .outline_markdown()
            .unwrap()
            .contains("## Outline"));
    }
}
