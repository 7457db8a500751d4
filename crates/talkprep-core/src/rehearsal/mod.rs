//! Rehearsal and Q&A preparation module.
//!
//! # Module Structure
//!
//! - `model`: Q&A and rehearsal domain models
//! - `qa`: anticipated-question bank construction and markdown guide
//! - `session`: rehearsal session lifecycle and timing feedback
//! - `cues`: timing-cue report and practice suggestions

mod cues;
mod model;
mod qa;
mod session;

pub use cues::{format_time, generate_practice_suggestions, generate_timing_cues};
pub use model::{
    PaceVerdict, QAPair, QAPreparation, QuestionCategory, QuestionDifficulty, RehearsalFeedback,
    RehearsalSession, SectionTiming, SectionVerdict, TimingStatus,
};
pub use qa::{build_qa_preparation, qa_guide_markdown};
pub use session::{create_rehearsal_session, generate_rehearsal_feedback, update_section_timing};
