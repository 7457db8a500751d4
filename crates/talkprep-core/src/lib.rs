//! Core domain library for TalkPrep.
//!
//! TalkPrep turns a small validated configuration (topic, audience,
//! duration, talk type, tone) into structured conference-talk artifacts:
//! outlines, script skeletons, slide decks, Q&A preparation, and rehearsal
//! feedback, plus markdown/HTML/JSON export surfaces.
//!
//! Everything in this crate is synchronous and in-memory: pure
//! computations over value types, driven by static tables keyed on closed
//! enumerations. Workflow sequencing lives in the application crate.

pub mod config;
pub mod content;
pub mod error;
pub mod outline;
pub mod rehearsal;
pub mod session;
pub mod slides;
pub mod template;

// Re-export common error type
pub use error::{Result, TalkPrepError};
