//! Script content domain module.
//!
//! # Module Structure
//!
//! - `model`: script domain models (`Script`, `ScriptSection`, `SpeakerNote`)
//! - `builder`: skeleton construction and hook/conclusion suggestion tables
//! - `validate`: content-quality validation
//! - `render`: markdown reporting surface

mod builder;
mod model;
mod render;
mod validate;

pub use builder::{
    build_script_skeleton, compute_speaker_notes, estimate_word_count,
    generate_conclusion_patterns, generate_hook_suggestions, EMPHASIS_MARKER,
};
pub use model::{PacingVerdict, Script, ScriptSection, SpeakerNote};
pub use render::script_to_markdown;
pub use validate::{validate_content, ContentValidation};
