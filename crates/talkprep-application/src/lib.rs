//! Application layer for TalkPrep.
//!
//! This crate provides the workflow coordinator that sequences the core
//! builders into the ideation → outline → content → export → rehearsal
//! pipeline and holds the single in-memory session.

pub mod workflow;

pub use workflow::TalkPrepWorkflow;
